// Gamma (left/right tilt, degrees) to horizontal position helpers.

/// Map a tilt angle onto the `[0, 1]` pointer-position space.
///
/// The angle is clamped to `±max_tilt_deg`, normalized to `[-1, 1]` and
/// rescaled, so `-max → 0.0`, `0 → 0.5`, `+max → 1.0`.
#[inline]
pub fn gamma_to_position(gamma_deg: f64, max_tilt_deg: f64) -> f64 {
    let normalized = gamma_deg.clamp(-max_tilt_deg, max_tilt_deg) / max_tilt_deg;
    (normalized + 1.0) / 2.0
}

/// Simulated pointer x for a tilt sample on a viewport `width` pixels wide.
#[inline]
pub fn gamma_to_client_x(gamma_deg: f64, max_tilt_deg: f64, width: f64) -> f64 {
    gamma_to_position(gamma_deg, max_tilt_deg) * width
}
