/// Round half toward positive infinity, the rounding used by browser hosts.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Returns `Ok(v)` when `v` is finite and non-negative.
pub(crate) fn non_negative(name: &str, v: f64) -> Result<f64, String> {
    if !v.is_finite() || v < 0.0 {
        return Err(format!("{name} must be finite and >= 0 (got {v})"));
    }
    Ok(v)
}
