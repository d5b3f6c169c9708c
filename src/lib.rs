pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod logging;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::parameters::{Field, FieldSpec, LaunchParameters};
pub use control::session::CalculatorSession;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::solver::{TrajectoryResult, TrajectorySolver};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::{ChartAxes, TrajectoryReport};

// Re-export commonly used utilities
pub use config::Settings;
pub use errors::CalculatorError;
pub use utils::vector2d::Vector2D;
