//! Frame-order helpers for [`AnimatedTileSheet`](crate::AnimatedTileSheet) patterns.

/// `[0, 1, .., n - 1]`.
pub fn range(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `[start, .., end - 1]`; empty when `end <= start`.
pub fn range_between(start: usize, end: usize) -> Vec<usize> {
    (start..end).collect()
}

/// Ping-pong order: `0..n` forward, then back down from `n - 2` to `1`.
///
/// The end frames play once per cycle and every interior frame twice, so the
/// pattern loops without a visible stutter.
pub fn shuttle_range(n: usize) -> Vec<usize> {
    let mut frames = range(n);
    frames.extend((1..n.saturating_sub(1)).rev());
    frames
}

/// [`shuttle_range`] over every tile of a `tiles_wide` x `tiles_high` sheet.
pub fn shuttle_range_grid(tiles_wide: usize, tiles_high: usize) -> Vec<usize> {
    shuttle_range(tiles_wide * tiles_high)
}
