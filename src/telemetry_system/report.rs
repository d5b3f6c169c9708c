use serde::Serialize;

use crate::constants::{
    DISPLAY_PRECISION, MIN_AXIS_EXTENT, NO_TRAJECTORY_NOTICE, X_AXIS_MARGIN, Y_AXIS_MARGIN,
};
use crate::control::parameters::{Field, LaunchParameters};
use crate::errors::CalculatorError;
use crate::trajectory_system::solver::TrajectoryResult;
use crate::utils::vector2d::Vector2D;

/// Axis domains for plotting, both starting at the ground/launch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAxes {
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
}

impl ChartAxes {
    pub fn fit(points: &[Vector2D]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let x_max = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let y_max = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);

        Some(ChartAxes {
            x_domain: (0.0, MIN_AXIS_EXTENT.max(x_max * X_AXIS_MARGIN)),
            y_domain: (0.0, MIN_AXIS_EXTENT.max(y_max * Y_AXIS_MARGIN)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
}

impl Metric {
    fn new(label: &'static str, value: f64, unit: &str) -> Self {
        Metric {
            label,
            value,
            display: format_quantity(value, unit),
        }
    }
}

/// What the presentation layer shows for one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryReport {
    pub inputs: LaunchParameters,
    pub time_of_flight: Metric,
    pub max_height: Metric,
    pub horizontal_range: Metric,
    pub horizontal_velocity: Metric,
    pub vertical_velocity: Metric,
    pub axes: Option<ChartAxes>,
    pub notice: Option<&'static str>,
    pub points: Vec<Vector2D>,
}

fn format_quantity(value: f64, unit: &str) -> String {
    // Values that round to zero print as "0.000", never "-0.000"
    let value = if value.abs() < 5e-4 { 0.0 } else { value };
    format!("{:.precision$} {}", value, unit, precision = DISPLAY_PRECISION)
}

impl TrajectoryReport {
    pub fn new(params: &LaunchParameters, result: &TrajectoryResult) -> Self {
        let axes = ChartAxes::fit(&result.points);
        TrajectoryReport {
            inputs: *params,
            time_of_flight: Metric::new("Time of flight", result.time_of_flight, "s"),
            max_height: Metric::new("Maximum height", result.max_height, "m"),
            horizontal_range: Metric::new("Horizontal range", result.horizontal_range, "m"),
            horizontal_velocity: Metric::new("Horizontal velocity (vx)", result.vx, "m/s"),
            vertical_velocity: Metric::new("Vertical velocity (vy)", result.vy, "m/s"),
            notice: if axes.is_none() {
                Some(NO_TRAJECTORY_NOTICE)
            } else {
                None
            },
            axes,
            points: result.points.clone(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("--- Inputs ---\n");
        for field in Field::ALL {
            out.push_str(&format!("{}: {}\n", field, self.inputs.get(field)));
        }

        out.push_str("\n--- Results ---\n");
        for metric in [&self.time_of_flight, &self.max_height, &self.horizontal_range] {
            out.push_str(&format!("{}: {}\n", metric.label, metric.display));
        }

        out.push_str("\n--- Velocity Components ---\n");
        for metric in [&self.horizontal_velocity, &self.vertical_velocity] {
            out.push_str(&format!("{}: {}\n", metric.label, metric.display));
        }

        out.push_str("\n--- Projectile Trajectory ---\n");
        match (&self.axes, self.notice) {
            (Some(axes), _) => {
                out.push_str(&format!(
                    "Horizontal Distance axis: [{:.3}, {:.3}] m\n\
                     Height axis: [{:.3}, {:.3}] m\n\
                     Samples: {}\n",
                    axes.x_domain.0,
                    axes.x_domain.1,
                    axes.y_domain.0,
                    axes.y_domain.1,
                    self.points.len()
                ));
            }
            (None, Some(notice)) => {
                out.push_str(notice);
                out.push('\n');
            }
            (None, None) => {}
        }

        out
    }

    pub fn display(&self) {
        print!("{}", self.render_text());
    }

    pub fn to_json(&self) -> Result<String, CalculatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
