//! Scroll-driven cosmetic meters: the EXP bar, the power level meter and
//! the scroll-to-top button.

/// Power level marks that trigger a power-up cue when crossed upward.
pub const POWER_UP_MARKS: [u8; 4] = [25, 50, 75, 99];

/// Percentage of the page scrolled, floored, capped at 100.
pub fn experience_points(scroll: f64, max_scroll: f64) -> u8 {
    if max_scroll <= 0.0 || scroll <= 0.0 {
        return 0;
    }
    ((scroll / max_scroll) * 100.0).floor().min(100.0) as u8
}

/// The scroll-to-top button shows once half a viewport has scrolled by.
pub fn show_scroll_to_top(scroll: f64, viewport_height: f64) -> bool {
    scroll > viewport_height / 2.0
}

/// Power level of the character panel, driven by how far it has scrolled
/// into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerMeter {
    level: u8,
}

impl PowerMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Fully charged: the portrait brightens.
    pub fn is_maxed(&self) -> bool {
        self.level >= 100
    }

    /// Recompute from the panel's top edge relative to the viewport.
    ///
    /// Returns `true` when the update crossed a power-up mark going up.
    /// At most one cue fires per update even if several marks were passed.
    pub fn update(&mut self, section_top: f64, viewport_height: f64) -> bool {
        let fraction = if viewport_height > 0.0 {
            (1.0 - section_top / viewport_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let level = (fraction * 100.0).floor() as u8;
        let previous = std::mem::replace(&mut self.level, level);

        POWER_UP_MARKS
            .iter()
            .any(|&mark| level >= mark && previous < mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_points() {
        assert_eq!(experience_points(0.0, 1000.0), 0);
        assert_eq!(experience_points(505.0, 1000.0), 50);
        assert_eq!(experience_points(1200.0, 1000.0), 100);
        assert_eq!(experience_points(300.0, 0.0), 0);
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        assert!(!show_scroll_to_top(400.0, 800.0));
        assert!(show_scroll_to_top(401.0, 800.0));
    }

    #[test]
    fn test_power_meter_crossings() {
        let mut meter = PowerMeter::new();
        // top at the bottom edge of the viewport: 0%
        assert!(!meter.update(800.0, 800.0));
        assert_eq!(meter.level(), 0);

        // 30%: crossed 25
        assert!(meter.update(560.0, 800.0));
        assert_eq!(meter.level(), 30);

        // still between marks
        assert!(!meter.update(500.0, 800.0));

        // fully in view: crossed 50, 75 and 99 at once, one cue
        assert!(meter.update(-10.0, 800.0));
        assert!(meter.is_maxed());

        // scrolling back down never fires
        assert!(!meter.update(700.0, 800.0));
    }
}
