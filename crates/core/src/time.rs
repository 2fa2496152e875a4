//! Pure formatting helpers for countdown values.

/// Formats signed seconds as `mm:ss`, with a leading `-` for overrun.
///
/// Minutes are not wrapped into hours: `3661` renders as `61:01`.
#[must_use]
pub fn seconds_to_mmss(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    let minutes = magnitude / 60;
    let remainder = magnitude % 60;
    format!("{sign}{minutes:02}:{remainder:02}")
}

/// Remaining share of the initial budget as a whole percentage in `0..=100`.
///
/// Rounds half up. Returns 0 before a run has been configured.
#[must_use]
pub fn progress_percent(total_remaining: i64, total_seconds_initial: i64) -> u8 {
    if total_seconds_initial <= 0 || total_remaining <= 0 {
        return 0;
    }
    if total_remaining >= total_seconds_initial {
        return 100;
    }
    let remaining = i128::from(total_remaining);
    let initial = i128::from(total_seconds_initial);
    let rounded = (remaining * 200 + initial) / (initial * 2);
    u8::try_from(rounded).unwrap_or(100)
}
