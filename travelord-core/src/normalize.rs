//! Linear min-max scaling.

/// Build a scaling function that maps `[min, max]` onto `[0, 1]`.
///
/// The returned closure computes `(value - min) / (max - min)` with no
/// guard for a zero-width range: when `max == min` the division follows
/// IEEE 754 and yields `NaN` for `value == min` or an infinity otherwise.
/// This degenerate case is deliberate; ranking stays deterministic because
/// scores are compared with [`f64::total_cmp`].
///
/// Values outside `[min, max]` scale to results outside `[0, 1]` rather
/// than clamping.
///
/// # Examples
///
/// ```
/// use travelord_core::normalize;
///
/// let scale = normalize(0.0, 10.0);
/// assert_eq!(scale(0.0), 0.0);
/// assert_eq!(scale(5.0), 0.5);
/// assert_eq!(scale(10.0), 1.0);
/// ```
pub fn normalize(min: f64, max: f64) -> impl Fn(f64) -> f64 {
    move |value| (value - min) / (max - min)
}
