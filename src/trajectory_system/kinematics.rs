use crate::{control::parameters::LaunchParameters, utils::vector2d::Vector2D};

/// Horizontal and vertical launch velocity.
pub fn velocity_components(params: &LaunchParameters) -> Vector2D {
    let theta = params.launch_angle_degrees().to_radians();
    Vector2D::new(
        params.initial_speed() * theta.cos(),
        params.initial_speed() * theta.sin(),
    )
}

/// Height above the ground at `time` seconds, unclamped.
pub fn height_at(params: &LaunchParameters, time: f64) -> f64 {
    let vy = velocity_components(params).y;
    params.initial_height() + vy * time - 0.5 * params.gravity() * time * time
}

/// Position at `time` seconds, measured from the foot of the launch point.
pub fn position_at(params: &LaunchParameters, time: f64) -> Vector2D {
    let launch_point = Vector2D::new(0.0, params.initial_height());
    let gravity = Vector2D::new(0.0, -0.5 * params.gravity());
    launch_point + velocity_components(params) * time + gravity * (time * time)
}

/// Later non-negative root of `h(t) = 0`, or `0.0` when none exists.
pub fn landing_time(params: &LaunchParameters) -> f64 {
    let a = -0.5 * params.gravity();
    let b = velocity_components(params).y;
    let c = params.initial_height();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return 0.0;
    }

    let sqrt_disc = discriminant.sqrt();
    let roots = [(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)];

    let latest = roots
        .iter()
        .copied()
        .filter(|t| *t >= 0.0)
        .fold(None, |latest: Option<f64>, t| {
            Some(latest.map_or(t, |l| l.max(t)))
        });

    // -0.0 is a valid root for a resting projectile; report it as 0.0
    match latest {
        Some(t) if t > 0.0 => t,
        _ => 0.0,
    }
}
