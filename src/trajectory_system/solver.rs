use serde::Serialize;

use crate::{
    constants::NUM_POINTS, control::parameters::LaunchParameters, utils::vector2d::Vector2D,
};

use super::kinematics::{landing_time, position_at, velocity_components};

/// Everything derived from one set of launch parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub vx: f64,
    pub vy: f64,
    pub time_of_flight: f64,
    pub max_height: f64,
    pub horizontal_range: f64,
    pub points: Vec<Vector2D>,
}

impl TrajectoryResult {
    pub fn has_trajectory(&self) -> bool {
        !self.points.is_empty()
    }
}

pub struct TrajectorySolver;

impl TrajectorySolver {
    pub fn solve(params: &LaunchParameters) -> TrajectoryResult {
        let velocity = velocity_components(params);
        let time_of_flight = landing_time(params);
        let max_height =
            params.initial_height() + velocity.y.powi(2) / (2.0 * params.gravity());

        TrajectoryResult {
            vx: velocity.x,
            vy: velocity.y,
            time_of_flight,
            max_height,
            horizontal_range: velocity.x * time_of_flight,
            points: Self::sample(params, time_of_flight),
        }
    }

    /// `NUM_POINTS + 1` evenly timed samples from launch to landing,
    /// clamped to the ground.
    fn sample(params: &LaunchParameters, time_of_flight: f64) -> Vec<Vector2D> {
        if time_of_flight <= 0.0 {
            return Vec::new();
        }

        (0..=NUM_POINTS)
            .map(|i| {
                let t = time_of_flight * i as f64 / NUM_POINTS as f64;
                position_at(params, t).above_ground()
            })
            .collect()
    }
}
