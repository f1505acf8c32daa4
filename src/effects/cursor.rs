/// Per-frame share of the remaining distance the ring covers.
pub const FOLLOW_EASING: f64 = 0.2;
/// Below this distance the ring snaps onto the pointer and stops moving.
pub const SETTLE_DISTANCE: f64 = 0.1;

/// Look of the follower, taken from the hovered element's CSS `cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Text,
}

impl CursorStyle {
    pub fn from_css(cursor: &str) -> Self {
        match cursor.trim() {
            "pointer" => Self::Pointer,
            "text" | "vertical-text" => Self::Text,
            _ => Self::Default,
        }
    }

    pub fn ring_class(&self) -> &'static str {
        match self {
            Self::Default => "w-8 h-8 border-white/60",
            Self::Pointer => "w-12 h-12 border-blue-400 bg-blue-400/10",
            Self::Text => "w-1 h-8 border-white/80 rounded-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
    target: Option<(f64, f64)>,
    pending: bool,
}

impl CursorFollower {
    /// Records the latest pointer position. The first one snaps the ring.
    pub fn point_at(&mut self, x: f64, y: f64) {
        if self.target.is_none() {
            self.x = x;
            self.y = y;
        }
        self.target = Some((x, y));
        self.pending = true;
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    /// Moves the ring toward the pointer; call once per frame.
    ///
    /// Returns whether the ring needs redrawing.
    pub fn ease(&mut self, factor: f64) -> bool {
        let Some((tx, ty)) = self.target else {
            return false;
        };
        let before = (self.x, self.y);
        if (tx - self.x).hypot(ty - self.y) < SETTLE_DISTANCE {
            self.x = tx;
            self.y = ty;
        } else {
            self.x += (tx - self.x) * factor;
            self.y += (ty - self.y) * factor;
        }
        let redraw = self.pending || (self.x, self.y) != before;
        self.pending = false;
        redraw
    }

    pub fn transform(&self) -> String {
        format!("transform: translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_css_cursor_values() {
        assert_eq!(CursorStyle::from_css("pointer"), CursorStyle::Pointer);
        assert_eq!(CursorStyle::from_css(" text "), CursorStyle::Text);
        assert_eq!(CursorStyle::from_css("auto"), CursorStyle::Default);
        assert_eq!(CursorStyle::from_css(""), CursorStyle::Default);
    }

    #[test]
    fn hidden_until_first_move() {
        let mut f = CursorFollower::default();
        assert!(!f.is_visible());
        assert!(!f.ease(FOLLOW_EASING));
        assert_eq!((f.x, f.y), (0.0, 0.0));
        f.point_at(120.0, 80.0);
        assert!(f.is_visible());
        assert_eq!((f.x, f.y), (120.0, 80.0));
    }

    #[test]
    fn eases_toward_pointer() {
        let mut f = CursorFollower::default();
        f.point_at(0.0, 0.0);
        f.point_at(100.0, -50.0);
        f.ease(0.5);
        assert_eq!((f.x, f.y), (50.0, -25.0));
        for _ in 0..100 {
            f.ease(FOLLOW_EASING);
        }
        assert!((f.x - 100.0).abs() < 1e-6);
        assert!((f.y + 50.0).abs() < 1e-6);
    }

    #[test]
    fn settled_ring_stops_redrawing() {
        let mut f = CursorFollower::default();
        f.point_at(40.0, 40.0);
        // first frame draws the snapped position
        assert!(f.ease(FOLLOW_EASING));
        assert!(!f.ease(FOLLOW_EASING));

        f.point_at(40.05, 40.0);
        assert!(f.ease(FOLLOW_EASING));
        assert_eq!((f.x, f.y), (40.05, 40.0));
        assert!(!f.ease(FOLLOW_EASING));

        f.point_at(140.0, 40.0);
        let mut frames = 0;
        while f.ease(FOLLOW_EASING) {
            frames += 1;
            assert!(frames < 200, "ring never settled");
        }
        assert_eq!((f.x, f.y), (140.0, 40.0));
    }

    #[test]
    fn transform_centers_ring_on_point() {
        let mut f = CursorFollower::default();
        f.point_at(10.0, 20.3);
        assert_eq!(
            f.transform(),
            "transform: translate3d(10.0px, 20.3px, 0) translate(-50%, -50%)"
        );
    }
}
