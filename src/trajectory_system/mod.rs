pub mod kinematics;
pub mod solver;
