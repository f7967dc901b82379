//! Frame-derived animation values for the decorative layer.
//!
//! Nothing here owns a timer. The event loop polls on an ~80ms cadence
//! while animation is active and derives these values from elapsed time
//! each frame, so the "timers" stop existing the moment the loop goes
//! idle — no teardown bookkeeping.

use ratatui::style::Color;
use std::time::Duration;

/// Poll timeout while the decorative layer is animating (~12fps). Also
/// the period of one hue step.
pub const ANIMATION_TICK: Duration = Duration::from_millis(80);

/// Poll timeout when idle — nothing moves, redraw only on events.
pub const IDLE_TICK: Duration = Duration::from_millis(500);

/// Half-period of the loading blink.
pub const BLINK_INTERVAL_MS: u128 = 500;

/// Per-frame animation snapshot passed down to the components.
#[derive(Debug, Clone, Copy)]
pub struct Anim {
    /// Advances once per [`ANIMATION_TICK`] since startup, wraps at 360.
    pub hue_step: u16,
    /// Toggles every [`BLINK_INTERVAL_MS`]; meaningful only while loading.
    pub blink_on: bool,
    /// False under `--no-motion`: hue is frozen, glyphs don't drift.
    pub active: bool,
}

impl Anim {
    pub fn at(elapsed: Duration, active: bool) -> Self {
        let ms = elapsed.as_millis();
        let hue_step = if active {
            ((ms / ANIMATION_TICK.as_millis()) % 360) as u16
        } else {
            0
        };
        Self {
            hue_step,
            blink_on: (ms / BLINK_INTERVAL_MS) % 2 == 0,
            active,
        }
    }
}

/// Maps a hue step (0..360) to a fully-saturated terminal color.
/// Standard HSV→RGB with s = 1, v = 1.
pub fn hue_color(step: u16) -> Color {
    let h = f32::from(step % 360) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_wheel_primaries() {
        assert_eq!(hue_color(0), Color::Rgb(255, 0, 0));
        assert_eq!(hue_color(120), Color::Rgb(0, 255, 0));
        assert_eq!(hue_color(240), Color::Rgb(0, 0, 255));
        // Wraps
        assert_eq!(hue_color(360 % 360), hue_color(0));
    }

    #[test]
    fn test_anim_advances_one_step_per_tick() {
        let a = Anim::at(Duration::from_millis(0), true);
        assert_eq!(a.hue_step, 0);
        let b = Anim::at(Duration::from_millis(80), true);
        assert_eq!(b.hue_step, 1);
        let c = Anim::at(Duration::from_millis(8 * 80), true);
        assert_eq!(c.hue_step, 8);
    }

    #[test]
    fn test_anim_blink_toggles_every_half_second() {
        assert!(Anim::at(Duration::from_millis(0), true).blink_on);
        assert!(!Anim::at(Duration::from_millis(500), true).blink_on);
        assert!(Anim::at(Duration::from_millis(1000), true).blink_on);
    }

    #[test]
    fn test_inactive_anim_freezes_hue() {
        let a = Anim::at(Duration::from_millis(4000), false);
        assert_eq!(a.hue_step, 0);
        assert!(!a.active);
    }
}
