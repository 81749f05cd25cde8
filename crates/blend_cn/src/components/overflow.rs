//! Overflow cutoff calculation
//!
//! Given the measured widths of chips laid out left to right in a single row,
//! decide how many stay visible before the rest collapse behind a "+N more"
//! trigger.
//!
//! The requirement for showing `k` of `n` items is
//!
//! ```text
//! sum(widths[..k]) + (k - 1) * gap + buffer
//!     + (more_trigger_width + gap)   if k < n
//! ```
//!
//! When every item fits without a trigger, all are shown. Otherwise items are
//! accumulated greedily and the first one that does not fit (together with the
//! trigger reservation) ends the visible run. At least one item is always
//! shown, even if it overflows on its own.

use blend_theme::OverflowTokens;
use serde::Deserialize;

/// Spacing used by the cutoff calculation, in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverflowMetrics {
    /// Gap between adjacent items
    pub gap: f32,
    /// Space kept free at the end of the row
    pub buffer: f32,
    /// Estimated width of the "+N more" trigger
    pub more_trigger_width: f32,
}

impl Default for OverflowMetrics {
    fn default() -> Self {
        Self {
            gap: 8.0,
            buffer: 30.0,
            more_trigger_width: 100.0,
        }
    }
}

impl From<&OverflowTokens> for OverflowMetrics {
    fn from(tokens: &OverflowTokens) -> Self {
        Self {
            gap: tokens.gap,
            buffer: tokens.buffer,
            more_trigger_width: tokens.more_trigger_width,
        }
    }
}

/// Number of items to show.
///
/// `widths` holds the measured widths of the currently rendered items; items
/// past `widths.len()` have no measurement and are never counted as fitting.
/// Returns 0 only for an empty list, otherwise a value in `1..=item_count`.
pub fn compute_cutoff(
    widths: &[f32],
    item_count: usize,
    container_width: f32,
    metrics: &OverflowMetrics,
) -> usize {
    if item_count == 0 {
        return 0;
    }
    let measured = &widths[..widths.len().min(item_count)];

    if measured.len() == item_count {
        let total = row_width(measured, metrics.gap);
        if total + metrics.buffer <= container_width {
            return item_count;
        }
    }

    let reserve = metrics.more_trigger_width + metrics.gap;
    let mut used = 0.0;
    let mut cutoff = 0;
    for (i, &width) in measured.iter().enumerate() {
        let next = if i == 0 { width } else { used + metrics.gap + width };
        let count = i + 1;
        let required = if count < item_count {
            next + reserve + metrics.buffer
        } else {
            next + metrics.buffer
        };
        if required > container_width {
            break;
        }
        used = next;
        cutoff = count;
    }

    cutoff.clamp(1, item_count)
}

fn row_width(widths: &[f32], gap: f32) -> f32 {
    let gaps = widths.len().saturating_sub(1) as f32 * gap;
    widths.iter().sum::<f32>() + gaps
}

/// Visible/hidden partition of a list at a cutoff
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowSplit {
    pub cutoff: usize,
    pub total: usize,
}

impl OverflowSplit {
    pub fn new(cutoff: usize, total: usize) -> Self {
        Self {
            cutoff: cutoff.min(total),
            total,
        }
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.cutoff.min(items.len())]
    }

    pub fn hidden<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.cutoff.min(items.len())..]
    }

    pub fn hidden_count(&self) -> usize {
        self.total.saturating_sub(self.cutoff)
    }

    pub fn has_overflow(&self) -> bool {
        self.hidden_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: OverflowMetrics = OverflowMetrics {
        gap: 8.0,
        buffer: 30.0,
        more_trigger_width: 100.0,
    };

    #[test]
    fn test_greedy_cutoff_reserves_trigger() {
        let widths = [80.0, 90.0, 70.0, 60.0, 50.0];
        assert_eq!(compute_cutoff(&widths, 5, 400.0, &METRICS), 3);
    }

    #[test]
    fn test_single_oversized_item_is_still_shown() {
        assert_eq!(compute_cutoff(&[500.0], 1, 400.0, &METRICS), 1);
        assert_eq!(compute_cutoff(&[500.0, 20.0], 2, 400.0, &METRICS), 1);
    }

    #[test]
    fn test_everything_fits_without_trigger() {
        // 100 + 8 + 100 + 8 + 10 + 30 = 256, but 2 items + trigger = 346
        let widths = [100.0, 100.0, 10.0];
        assert_eq!(compute_cutoff(&widths, 3, 260.0, &METRICS), 3);
        assert_eq!(compute_cutoff(&widths, 3, 255.0, &METRICS), 1);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(compute_cutoff(&[], 0, 400.0, &METRICS), 0);
    }

    #[test]
    fn test_unmeasured_items_never_fit() {
        // only two chips rendered out of four
        let widths = [50.0, 50.0];
        assert_eq!(compute_cutoff(&widths, 4, 10_000.0, &METRICS), 2);
    }

    #[test]
    fn test_split_slices() {
        let items = ["a", "b", "c", "d", "e"];
        let split = OverflowSplit::new(3, items.len());
        assert_eq!(split.visible(&items), &["a", "b", "c"]);
        assert_eq!(split.hidden(&items), &["d", "e"]);
        assert_eq!(split.hidden_count(), 2);
        assert!(split.has_overflow());
        assert!(!OverflowSplit::new(9, 5).has_overflow());
    }

    #[test]
    fn test_hand_built_split_does_not_underflow() {
        let split = OverflowSplit { cutoff: 6, total: 5 };
        assert_eq!(split.hidden_count(), 0);
        assert!(!split.has_overflow());
        assert!(split.hidden(&[1, 2, 3]).is_empty());
    }
}
