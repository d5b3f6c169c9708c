use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{
    ANGLE_STEP, DEFAULT_GRAVITY, DEFAULT_INITIAL_HEIGHT, DEFAULT_INITIAL_SPEED,
    DEFAULT_LAUNCH_ANGLE, GRAVITY_STEP, HEIGHT_STEP, MAX_LAUNCH_ANGLE, MIN_GRAVITY, SPEED_STEP,
};
use crate::errors::CalculatorError;

/// Range, default and step of one numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InitialSpeed,
    LaunchAngle,
    InitialHeight,
    Gravity,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::InitialSpeed,
        Field::LaunchAngle,
        Field::InitialHeight,
        Field::Gravity,
    ];

    pub fn spec(self) -> FieldSpec {
        match self {
            Field::InitialSpeed => FieldSpec {
                label: "Initial speed",
                unit: "m/s",
                min: 0.0,
                max: None,
                default: DEFAULT_INITIAL_SPEED,
                step: SPEED_STEP,
            },
            Field::LaunchAngle => FieldSpec {
                label: "Launch angle",
                unit: "degrees",
                min: 0.0,
                max: Some(MAX_LAUNCH_ANGLE),
                default: DEFAULT_LAUNCH_ANGLE,
                step: ANGLE_STEP,
            },
            Field::InitialHeight => FieldSpec {
                label: "Initial height",
                unit: "m",
                min: 0.0,
                max: None,
                default: DEFAULT_INITIAL_HEIGHT,
                step: HEIGHT_STEP,
            },
            Field::Gravity => FieldSpec {
                label: "Gravity",
                unit: "m/s²",
                min: MIN_GRAVITY,
                max: None,
                default: DEFAULT_GRAVITY,
                step: GRAVITY_STEP,
            },
        }
    }

    /// Brings a raw value into the field's range. Non-finite values fall
    /// back to the field default.
    pub fn clamp(self, value: f64) -> f64 {
        let spec = self.spec();
        if !value.is_finite() {
            return spec.default;
        }
        let value = value.max(spec.min);
        match spec.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::InitialSpeed => "speed",
            Field::LaunchAngle => "angle",
            Field::InitialHeight => "height",
            Field::Gravity => "gravity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec();
        write!(f, "{} ({})", spec.label, spec.unit)
    }
}

impl FromStr for Field {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "speed" | "v" | "initial_speed" => Ok(Field::InitialSpeed),
            "angle" | "a" | "launch_angle" => Ok(Field::LaunchAngle),
            "height" | "h" | "initial_height" => Ok(Field::InitialHeight),
            "gravity" | "g" => Ok(Field::Gravity),
            other => Err(CalculatorError::InvalidInput(format!(
                "unknown field '{}' (expected speed, angle, height or gravity)",
                other
            ))),
        }
    }
}

/// The four launch inputs, always within their field ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaunchParameters {
    initial_speed: f64,
    launch_angle_degrees: f64,
    initial_height: f64,
    gravity: f64,
}

impl LaunchParameters {
    pub fn new(
        initial_speed: f64,
        launch_angle_degrees: f64,
        initial_height: f64,
        gravity: f64,
    ) -> Self {
        LaunchParameters {
            initial_speed: Field::InitialSpeed.clamp(initial_speed),
            launch_angle_degrees: Field::LaunchAngle.clamp(launch_angle_degrees),
            initial_height: Field::InitialHeight.clamp(initial_height),
            gravity: Field::Gravity.clamp(gravity),
        }
    }

    pub fn with(self, field: Field, value: f64) -> Self {
        let mut params = self;
        let value = field.clamp(value);
        match field {
            Field::InitialSpeed => params.initial_speed = value,
            Field::LaunchAngle => params.launch_angle_degrees = value,
            Field::InitialHeight => params.initial_height = value,
            Field::Gravity => params.gravity = value,
        }
        params
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::InitialSpeed => self.initial_speed,
            Field::LaunchAngle => self.launch_angle_degrees,
            Field::InitialHeight => self.initial_height,
            Field::Gravity => self.gravity,
        }
    }

    pub fn initial_speed(&self) -> f64 {
        self.initial_speed
    }

    pub fn launch_angle_degrees(&self) -> f64 {
        self.launch_angle_degrees
    }

    pub fn initial_height(&self) -> f64 {
        self.initial_height
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        LaunchParameters::new(
            DEFAULT_INITIAL_SPEED,
            DEFAULT_LAUNCH_ANGLE,
            DEFAULT_INITIAL_HEIGHT,
            DEFAULT_GRAVITY,
        )
    }
}
