/// Step `from` toward `to` by at most `max_delta`, without overshooting.
/// A negative `max_delta` never moves away from `to`.
pub fn move_toward(from: f32, to: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.max(0.0);
    let delta = to - from;
    if delta.abs() <= max_delta {
        to
    }
    else {
        from + max_delta * delta.signum()
    }
}
