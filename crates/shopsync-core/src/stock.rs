//! # Stock Adjustment
//!
//! The detail screen edits stock with +/- buttons before saving. The store
//! writes whatever value it is given, so the floor at zero is applied here.

/// Applies a +/- change to a stock count, never going below zero.
///
/// ```rust
/// use shopsync_core::stock::apply_stock_delta;
///
/// assert_eq!(apply_stock_delta(5, 3), 8);
/// assert_eq!(apply_stock_delta(2, -5), 0);
/// ```
pub fn apply_stock_delta(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta).max(0)
}

/// Applies a sequence of button presses in order, clamping after each one.
///
/// Matches pressing "-" on an empty shelf and then "+": the result is 1,
/// not 0.
pub fn apply_stock_deltas(current: i64, deltas: &[i64]) -> i64 {
    deltas
        .iter()
        .fold(current.max(0), |stock, delta| apply_stock_delta(stock, *delta))
}
