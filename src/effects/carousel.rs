/// Fraction of the visible width one control press scrolls.
pub const PAGE_STEP: f64 = 0.8;
/// `scrollWidth`/`clientWidth` are whole pixels while `scrollLeft` can be
/// fractional, so the real end of the track may sit just short of the max.
pub const SUBPIXEL_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Which carousel controls are usable at a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

pub fn max_offset(scroll_width: f64, client_width: f64) -> f64 {
    (scroll_width - client_width).max(0.0)
}

impl ScrollAffordance {
    pub fn measure(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        let max = max_offset(scroll_width, client_width);
        Self {
            can_scroll_left: offset > 0.0,
            can_scroll_right: offset < max - SUBPIXEL_TOLERANCE,
        }
    }

    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
        }
    }
}

/// Offset to scroll to after pressing the control for `direction`.
pub fn scroll_target(offset: f64, direction: Direction, client_width: f64, max: f64) -> f64 {
    let step = client_width * PAGE_STEP;
    let target = match direction {
        Direction::Left => offset - step,
        Direction::Right => offset + step,
    };
    target.clamp(0.0, max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_disabled_exactly_at_start() {
        let a = ScrollAffordance::measure(0.0, 1200.0, 400.0);
        assert!(!a.can_scroll_left);
        assert!(a.can_scroll_right);

        let a = ScrollAffordance::measure(0.5, 1200.0, 400.0);
        assert!(a.can_scroll_left);
    }

    #[test]
    fn right_disabled_exactly_at_max() {
        let a = ScrollAffordance::measure(800.0, 1200.0, 400.0);
        assert!(a.can_scroll_left);
        assert!(!a.can_scroll_right);

        let a = ScrollAffordance::measure(798.5, 1200.0, 400.0);
        assert!(a.can_scroll_right);
    }

    #[test]
    fn right_disabled_at_fractional_end() {
        // 125% scaling: the browser stops at 799.2 against a rounded max of 800
        for end in [799.2, 799.5, 799.0] {
            let a = ScrollAffordance::measure(end, 1200.0, 400.0);
            assert!(!a.can_scroll_right, "{end}");
            assert!(a.can_scroll_left, "{end}");
        }
    }

    #[test]
    fn sub_pixel_overflow_is_not_scrollable() {
        let a = ScrollAffordance::measure(0.0, 400.5, 400.0);
        assert_eq!(a, ScrollAffordance::default());
    }

    #[test]
    fn nothing_to_scroll_when_content_fits() {
        let a = ScrollAffordance::measure(0.0, 300.0, 400.0);
        assert_eq!(a, ScrollAffordance::default());
        assert!(!a.can_scroll(Direction::Left));
        assert!(!a.can_scroll(Direction::Right));
    }

    #[test]
    fn targets_stay_in_range() {
        assert_eq!(scroll_target(0.0, Direction::Right, 500.0, 1000.0), 400.0);
        assert_eq!(scroll_target(900.0, Direction::Right, 500.0, 1000.0), 1000.0);
        assert_eq!(scroll_target(100.0, Direction::Left, 500.0, 1000.0), 0.0);
        assert_eq!(scroll_target(0.0, Direction::Right, 500.0, -20.0), 0.0);
    }
}
