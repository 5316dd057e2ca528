// SPDX-License-Identifier: MPL-2.0
//! Easing and geometry shared between the engine and the presentation
//! layer.
//!
//! The engine only reports a raw animation progress; how that maps to a
//! screen position is fixed here so every renderer agrees on the motion.

/// Smoothstep ease: `3p^2 - 2p^3` on the clamped input.
///
/// Monotonic, `f(0) = 0`, `f(1) = 1`, zero slope at both ends.
#[must_use]
pub fn smoothstep(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Quarter-sine ease: `sin(p * pi/2)` on the clamped input.
///
/// A brisker rise than [`smoothstep`]; same endpoints, monotonic.
#[must_use]
pub fn quarter_sine(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * std::f32::consts::FRAC_PI_2).sin()
}

/// Vertical position for a slide animation: interpolates from the
/// off-screen resting point to the on-screen resting point with
/// [`smoothstep`].
#[must_use]
pub fn slide_y(progress: f32, off_screen_y: f32, resting_y: f32) -> f32 {
    off_screen_y + (resting_y - off_screen_y) * smoothstep(progress)
}

/// Countdown bar width for the given box width and remaining-time ratio.
/// Never negative, never wider than the box.
#[must_use]
pub fn bar_width(box_width: f32, time_ratio: f32) -> f32 {
    box_width * time_ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_hits_both_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn smoothstep_clamps_out_of_range_input() {
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(3.0), 1.0);
    }

    #[test]
    fn easing_functions_are_monotonic() {
        let mut previous_smooth = 0.0;
        let mut previous_sine = 0.0;
        for step in 1..=100 {
            let p = step as f32 / 100.0;
            let smooth = smoothstep(p);
            let sine = quarter_sine(p);
            assert!(smooth >= previous_smooth);
            assert!(sine >= previous_sine);
            previous_smooth = smooth;
            previous_sine = sine;
        }
    }

    #[test]
    fn quarter_sine_rises_faster_than_smoothstep_early() {
        assert!(quarter_sine(0.25) > smoothstep(0.25));
    }

    #[test]
    fn slide_interpolates_between_resting_points() {
        assert_eq!(slide_y(0.0, 600.0, 510.0), 600.0);
        assert_eq!(slide_y(1.0, 600.0, 510.0), 510.0);
        let mid = slide_y(0.5, 600.0, 510.0);
        assert!(mid < 600.0 && mid > 510.0);
    }

    #[test]
    fn bar_width_clamps_ratio() {
        assert_eq!(bar_width(320.0, 0.5), 160.0);
        assert_eq!(bar_width(320.0, -0.3), 0.0);
        assert_eq!(bar_width(320.0, 1.7), 320.0);
    }
}
