//! Declarative entrance animations rendered as CSS transitions.

/// Where an element starts before it animates into place.
///
/// The animated state is always fully opaque, unscaled and untranslated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::fade()
    }
}

impl Motion {
    pub fn fade() -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration_ms: 1000,
            delay_ms: 0,
        }
    }

    pub fn from_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn from_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn from_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Inline style for the initial (`shown == false`) or final state.
    pub fn style(&self, shown: bool) -> String {
        let (opacity, x, y, scale) = if shown {
            (1.0, 0.0, 0.0, 1.0)
        } else {
            (self.opacity, self.x, self.y, self.scale)
        };
        let timing = format!("{}ms ease-out {}ms", self.duration_ms, self.delay_ms);
        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px) scale({scale}); transition: opacity {timing}, transform {timing};"
        )
    }
}

/// How far `scroll_y` has moved through `[start, end]`, clamped to `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

pub fn parallax(progress: f64, from: f64, to: f64) -> f64 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_and_final_styles() {
        let m = Motion::fade().from_y(-50.0).duration(800).delay(200);
        assert_eq!(
            m.style(false),
            "opacity: 0; transform: translate(0px, -50px) scale(1); transition: opacity 800ms ease-out 200ms, transform 800ms ease-out 200ms;"
        );
        assert_eq!(
            m.style(true),
            "opacity: 1; transform: translate(0px, 0px) scale(1); transition: opacity 800ms ease-out 200ms, transform 800ms ease-out 200ms;"
        );
    }

    #[test]
    fn scale_in() {
        let m = Motion::fade().from_scale(0.95).duration(500);
        assert!(m.style(false).contains("scale(0.95)"));
        assert!(m.style(true).contains("scale(1)"));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-10.0, 0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 0.0, 800.0), 1.0);
        assert_eq!(scroll_progress(5.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn parallax_maps_linearly() {
        assert_eq!(parallax(0.0, 0.0, -100.0), 0.0);
        assert_eq!(parallax(0.25, 0.0, -100.0), -25.0);
        assert_eq!(parallax(3.0, 0.0, -100.0), -100.0);
    }
}
