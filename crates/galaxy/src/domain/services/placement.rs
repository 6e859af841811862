//! Celestial Placement - duration/mood to visual attributes
//!
//! Pure formulas behind the galaxy canvas: a completed unit of focus work
//! becomes a celestial object whose kind and radius derive from its duration,
//! whose color derives from its mood, and whose position falls on a
//! golden-angle (phyllotaxis) spiral around the canvas origin.
//!
//! All functions here are total; the only non-determinism is the position
//! jitter, isolated behind [`JitterSource`] so the base spiral point stays
//! exactly testable.

use rand::Rng;

/// The golden angle in radians. Successively placed points rotated by this
/// angle interleave with existing ones instead of clustering radially.
pub const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// Radius bounds for any celestial object
pub const MIN_RADIUS: f64 = 4.0;
pub const MAX_RADIUS: f64 = 40.0;

/// Default radial spacing between spiral rings
pub const DEFAULT_SPACING: f64 = 7.0;

/// Maximum absolute per-axis jitter applied to a spiral position
pub const JITTER_RANGE: f64 = 3.0;

/// Mood palette. Unknown or empty moods fall back to the neutral entry.
const MOOD_COLORS: [(&str, &str); 5] = [
    ("calm", "#5D8BF4"),   // Stellar Blue
    ("focus", "#1F4068"),  // Steel Nebula
    ("happy", "#F7F7FF"),  // Soft White (bright star)
    ("energy", "#182952"), // Navy Cosmo
    ("neutral", "#0F1C3D"), // Deep Space Blue
];

const NEUTRAL_COLOR: &str = "#0F1C3D";

/// Source of the random per-axis offset added to spiral positions.
///
/// Production code uses [`UniformJitter`]; tests use [`NoJitter`] so the
/// deterministic base point can be asserted exactly.
pub trait JitterSource: Send + Sync {
    /// A single per-axis offset
    fn offset(&self) -> f64;
}

/// Uniform random jitter in `[-JITTER_RANGE, JITTER_RANGE]`
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn offset(&self) -> f64 {
        rand::rng().random_range(-JITTER_RANGE..=JITTER_RANGE)
    }
}

/// Zero jitter, for deterministic placement
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn offset(&self) -> f64 {
        0.0
    }
}

/// Compute a celestial radius from a focus duration (in minutes).
///
/// `radius = clamp(4 + sqrt(duration) / 3, min = 4, max = 40)`.
/// Negative durations are treated as zero before the square root.
pub fn radius_for(duration_minutes: f64) -> f64 {
    let raw = MIN_RADIUS + duration_minutes.max(0.0).sqrt() / 3.0;
    raw.clamp(MIN_RADIUS, MAX_RADIUS)
}

/// Look up the palette color for a mood (case-insensitive).
pub fn color_for(mood: &str) -> &'static str {
    let key = mood.trim().to_lowercase();
    MOOD_COLORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_COLOR)
}

/// Compute x, y coordinates on a golden-angle spiral with jitter.
///
/// `sequence_index` is the new object's 1-based ordinal position in creation
/// order for its owner (existing count + 1).
pub fn spiral_position(
    sequence_index: u64,
    center_x: f64,
    center_y: f64,
    spacing: f64,
    jitter: &dyn JitterSource,
) -> (f64, f64) {
    let index = sequence_index as f64;
    let theta = index * GOLDEN_ANGLE;
    let r = spacing * index.sqrt();

    let x = center_x + r * theta.cos() + jitter.offset();
    let y = center_y + r * theta.sin() + jitter.offset();
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_radius_at_zero_is_minimum() {
        assert!((radius_for(0.0) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        assert!((radius_for(-5.0) - radius_for(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_radius_stays_in_bounds() {
        for d in [0.0, 1.0, 9.0, 25.0, 60.0, 600.0, 1e9, 1e18] {
            let r = radius_for(d);
            assert!((4.0..=40.0).contains(&r), "radius {} out of range for {}", r, d);
        }
    }

    #[test]
    fn test_radius_is_non_decreasing() {
        let mut prev = radius_for(0.0);
        for i in 1..=2000 {
            let r = radius_for(i as f64);
            assert!(r >= prev, "radius decreased at {} minutes", i);
            prev = r;
        }
    }

    #[test]
    fn test_color_lookup_is_case_insensitive() {
        assert_eq!(color_for("CALM"), "#5D8BF4");
        assert_eq!(color_for("calm"), "#5D8BF4");
        assert_eq!(color_for("Focus"), "#1F4068");
    }

    #[test]
    fn test_unknown_mood_falls_back_to_neutral() {
        assert_eq!(color_for("unknown-mood"), color_for("neutral"));
        assert_eq!(color_for(""), "#0F1C3D");
    }

    #[test]
    fn test_first_spiral_point_matches_formula() {
        let (x, y) = spiral_position(1, 0.0, 0.0, DEFAULT_SPACING, &NoJitter);
        assert!((x - 7.0 * GOLDEN_ANGLE.cos()).abs() < EPSILON);
        assert!((y - 7.0 * GOLDEN_ANGLE.sin()).abs() < EPSILON);
    }

    #[test]
    fn test_spiral_respects_center_offset() {
        let (x0, y0) = spiral_position(5, 0.0, 0.0, DEFAULT_SPACING, &NoJitter);
        let (x1, y1) = spiral_position(5, 100.0, -50.0, DEFAULT_SPACING, &NoJitter);
        assert!((x1 - x0 - 100.0).abs() < EPSILON);
        assert!((y1 - y0 + 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_spiral_radius_grows_with_index() {
        for index in [1u64, 4, 9, 100] {
            let (x, y) = spiral_position(index, 0.0, 0.0, DEFAULT_SPACING, &NoJitter);
            let dist = (x * x + y * y).sqrt();
            assert!((dist - 7.0 * (index as f64).sqrt()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_uniform_jitter_stays_in_range() {
        let jitter = UniformJitter;
        for _ in 0..1000 {
            let offset = jitter.offset();
            assert!((-JITTER_RANGE..=JITTER_RANGE).contains(&offset));
        }
    }
}
