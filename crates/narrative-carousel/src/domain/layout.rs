//! Width metrics for the slide track.

use serde::Serialize;

/// Percentage widths of one slide and of the whole track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    /// Width of a single item, as a percentage of the viewport.
    pub item_width: f64,
    /// Width of the whole track, as a percentage of the viewport.
    pub total_width: f64,
}

/// Derives layout metrics from the item count.
///
/// Returns `None` for an empty collection.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn recompute_widths(item_count: usize) -> Option<LayoutMetrics> {
    if item_count == 0 {
        return None;
    }
    let count = item_count as f64;
    Some(LayoutMetrics {
        item_width: 100.0 / count,
        total_width: 100.0 * count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_widths_hold_for_every_count() {
        for count in 1..=64 {
            let metrics = recompute_widths(count).unwrap();
            let n = count as f64;

            assert!((metrics.item_width - 100.0 / n).abs() < 1e-9);
            assert!((metrics.total_width - 100.0 * n).abs() < 1e-9);
            assert!((metrics.item_width * n - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_four_items_are_a_quarter_wide() {
        let metrics = recompute_widths(4).unwrap();

        assert_eq!(metrics.item_width, 25.0);
        assert_eq!(metrics.total_width, 400.0);
    }

    #[test]
    fn test_empty_collection_has_no_metrics() {
        assert_eq!(recompute_widths(0), None);
    }
}
