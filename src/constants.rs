// Physical Constants
pub const DEFAULT_GRAVITY: f64 = 9.81; // m/s²
pub const MIN_GRAVITY: f64 = 0.1; // m/s², keeps the quadratic non-degenerate

// Launch Defaults
pub const DEFAULT_INITIAL_SPEED: f64 = 30.0; // m/s
pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0; // degrees
pub const DEFAULT_INITIAL_HEIGHT: f64 = 0.0; // m
pub const MAX_LAUNCH_ANGLE: f64 = 90.0; // degrees

// Input Steps
pub const SPEED_STEP: f64 = 0.5; // m/s
pub const ANGLE_STEP: f64 = 1.0; // degrees
pub const HEIGHT_STEP: f64 = 0.5; // m
pub const GRAVITY_STEP: f64 = 0.01; // m/s²

// Sampling Parameters
pub const NUM_POINTS: usize = 120; // intervals, so NUM_POINTS + 1 samples

// Chart Parameters
pub const X_AXIS_MARGIN: f64 = 1.05;
pub const Y_AXIS_MARGIN: f64 = 1.1;
pub const MIN_AXIS_EXTENT: f64 = 1.0; // m

// Display Parameters
pub const DISPLAY_PRECISION: usize = 3;
pub const NO_TRAJECTORY_NOTICE: &str = "No valid trajectory points for the current inputs.";
