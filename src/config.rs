use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::control::parameters::{Field, LaunchParameters};
use crate::errors::CalculatorError;

/// Launch inputs read from a JSON settings file. Missing entries keep
/// whatever value they are layered over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub initial_speed: Option<f64>,
    pub launch_angle_degrees: Option<f64>,
    pub initial_height: Option<f64>,
    pub gravity: Option<f64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, CalculatorError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|err| {
            CalculatorError::Config(format!("{}: {}", path.display(), err))
        })
    }

    pub fn from_json(text: &str) -> Result<Self, CalculatorError> {
        Ok(serde_json::from_str(text)?)
    }

    fn entries(&self) -> [(Field, Option<f64>); 4] {
        [
            (Field::InitialSpeed, self.initial_speed),
            (Field::LaunchAngle, self.launch_angle_degrees),
            (Field::InitialHeight, self.initial_height),
            (Field::Gravity, self.gravity),
        ]
    }

    /// Every value present in `other` replaces the one in `self`.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            initial_speed: other.initial_speed.or(self.initial_speed),
            launch_angle_degrees: other.launch_angle_degrees.or(self.launch_angle_degrees),
            initial_height: other.initial_height.or(self.initial_height),
            gravity: other.gravity.or(self.gravity),
        }
    }

    pub fn apply(&self, base: LaunchParameters) -> LaunchParameters {
        self.entries()
            .iter()
            .fold(base, |params, (field, value)| match value {
                Some(value) => params.with(*field, *value),
                None => params,
            })
    }
}
