//! Index Resolver - Continuous offset to discrete index.

/// Resolve a scroll offset to the nearest item index.
///
/// Returns `None` while resolution is undefined: unmeasured geometry
/// (`item_width <= 0`) or an empty item sequence. Otherwise the result is
/// `round(offset / item_width)` clamped into `[0, item_count - 1]`, so any
/// out-of-range offset (overscroll, bounce) degrades to the nearest edge
/// index.
///
/// Tie-break: `f64::round` rounds half away from zero, so an offset exactly
/// between two snap points resolves to the higher index.
pub fn resolve_index(offset: f64, item_width: f64, item_count: usize) -> Option<usize> {
    if item_width <= 0.0 || item_count == 0 {
        return None;
    }

    let raw = (offset / item_width).round() as i64;
    Some(raw.clamp(0, item_count as i64 - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_nearest_index() {
        assert_eq!(resolve_index(0.0, 100.0, 5), Some(0));
        assert_eq!(resolve_index(120.0, 100.0, 5), Some(1));
        assert_eq!(resolve_index(180.0, 100.0, 5), Some(2));
        assert_eq!(resolve_index(400.0, 100.0, 5), Some(4));
    }

    #[test]
    fn test_output_always_in_bounds() {
        for step in -20..60 {
            let offset = step as f64 * 25.0;
            let index = resolve_index(offset, 100.0, 5).unwrap();
            assert!(index <= 4, "offset {offset} resolved out of bounds");
        }
    }

    #[test]
    fn test_negative_offset_clamps_to_first() {
        assert_eq!(resolve_index(-0.1, 100.0, 5), Some(0));
        assert_eq!(resolve_index(-250.0, 100.0, 5), Some(0));
    }

    #[test]
    fn test_past_end_clamps_to_last() {
        assert_eq!(resolve_index(401.0, 100.0, 5), Some(4));
        assert_eq!(resolve_index(9999.0, 100.0, 5), Some(4));
    }

    #[test]
    fn test_midpoint_tie_break_rounds_up() {
        // Documented policy: exactly between index 2 and 3, the higher
        // index wins (round half away from zero).
        assert_eq!(resolve_index(250.0, 100.0, 5), Some(3));
        assert_eq!(resolve_index(50.0, 100.0, 5), Some(1));
        // Just under the midpoint still belongs to the lower index.
        assert_eq!(resolve_index(249.999, 100.0, 5), Some(2));
    }

    #[test]
    fn test_undefined_without_geometry() {
        assert_eq!(resolve_index(100.0, 0.0, 5), None);
        assert_eq!(resolve_index(100.0, -1.0, 5), None);
        assert_eq!(resolve_index(100.0, 100.0, 0), None);
    }

    #[test]
    fn test_single_item_always_zero() {
        assert_eq!(resolve_index(-500.0, 100.0, 1), Some(0));
        assert_eq!(resolve_index(0.0, 100.0, 1), Some(0));
        assert_eq!(resolve_index(500.0, 100.0, 1), Some(0));
    }
}
