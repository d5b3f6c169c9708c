use crate::control::parameters::{Field, LaunchParameters};
use crate::trajectory_system::solver::{TrajectoryResult, TrajectorySolver};

/// Current inputs plus the result derived from them. Every change to the
/// inputs recomputes the result before returning it.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    params: LaunchParameters,
    result: TrajectoryResult,
}

impl CalculatorSession {
    pub fn new(params: LaunchParameters) -> Self {
        let result = TrajectorySolver::solve(&params);
        CalculatorSession { params, result }
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.params
    }

    pub fn result(&self) -> &TrajectoryResult {
        &self.result
    }

    pub fn set(&mut self, field: Field, value: f64) -> &TrajectoryResult {
        let params = self.params.with(field, value);
        if params.get(field) != value {
            log::info!(
                "{} clamped from {} to {}",
                field,
                value,
                params.get(field)
            );
        }
        self.recompute(params)
    }

    pub fn increment(&mut self, field: Field) -> &TrajectoryResult {
        let value = self.params.get(field) + field.spec().step;
        let params = self.params.with(field, value);
        self.recompute(params)
    }

    pub fn decrement(&mut self, field: Field) -> &TrajectoryResult {
        let value = self.params.get(field) - field.spec().step;
        let params = self.params.with(field, value);
        self.recompute(params)
    }

    pub fn reset(&mut self) -> &TrajectoryResult {
        self.recompute(LaunchParameters::default())
    }

    fn recompute(&mut self, params: LaunchParameters) -> &TrajectoryResult {
        self.params = params;
        self.result = TrajectorySolver::solve(&self.params);
        log::debug!(
            "recomputed trajectory: speed={} angle={} height={} gravity={} -> tof={:.3}s",
            params.initial_speed(),
            params.launch_angle_degrees(),
            params.initial_height(),
            params.gravity(),
            self.result.time_of_flight
        );
        &self.result
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        CalculatorSession::new(LaunchParameters::default())
    }
}
