//! Rendering of the global progress indicators.
//!
//! Percentages and bar fills round half to even on the exact ratio, so the
//! three renderings always agree for the same done/total pair.

/// Glyph for a filled bar cell.
pub const BAR_FILLED: char = '█';

/// Glyph for an empty bar cell.
pub const BAR_EMPTY: char = '░';

/// Default number of cells in the progress bar.
pub const DEFAULT_BAR_LENGTH: usize = 20;

/// Round `num / den` to the nearest integer, ties to even. `den` must be non-zero.
fn round_half_even(num: u128, den: u128) -> u128 {
    let quotient = num / den;
    let twice_remainder = 2 * (num % den);
    if twice_remainder > den || (twice_remainder == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// `round(scale * done / total)`, or 0 when `total` is 0.
fn scaled(done: u64, total: u64, scale: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let value = round_half_even(u128::from(scale) * u128::from(done), u128::from(total));
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Completion percentage. Not clamped: over-counted sections may exceed 100.
pub fn percent(done: u64, total: u64) -> u64 {
    scaled(done, total, 100)
}

/// Render a fixed-width bar such as `█████░░░░░░░░░░░░░░░`.
pub fn progress_bar(done: u64, total: u64, length: usize) -> String {
    let filled = scaled(done, total, length as u64).min(length as u64) as usize;
    let mut bar = String::with_capacity(length * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, length - filled));
    bar
}

/// The URL-encoded fragment embedded in the progress badge, e.g. `3%2F10`.
pub fn badge_fragment(done: u64, total: u64) -> String {
    format!("{}%2F{}", done, total)
}

/// `**Total Progress**: <done>/<total> (<pct>%)`
pub fn total_line(done: u64, total: u64) -> String {
    format!(
        "**Total Progress**: {}/{} ({}%)",
        done,
        total,
        percent(done, total)
    )
}

/// The bar wrapped in backticks, as it appears on its own line.
pub fn bar_line(done: u64, total: u64, length: usize) -> String {
    format!("`{}`", progress_bar(done, total, length))
}
