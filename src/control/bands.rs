//! Threshold banding for normalised analog readings.
//!
//! Both the headlight mode selector and the ambient light sensor are
//! "read analog → compare against ascending bounds → pick a branch".
//! [`classify_band`] does the comparison once; the two enums below give
//! the bands their names.

/// Index of the band `reading` falls into.
///
/// Band `i` covers `(upper_bounds[i - 1], upper_bounds[i]]`; readings above
/// the last bound land in band `upper_bounds.len()`.  Bounds must ascend.
pub fn classify_band(reading: f32, upper_bounds: &[f32]) -> usize {
    upper_bounds
        .iter()
        .position(|&bound| reading <= bound)
        .unwrap_or(upper_bounds.len())
}

/// Ambient light zone, recomputed from scratch every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightLevelZone {
    /// At or below the dusk threshold.
    Dusk,
    /// Twilight, between the two thresholds.
    Between,
    /// Above the daylight threshold.
    Daylight,
}

impl LightLevelZone {
    pub fn classify(reading: f32, dusk_threshold: f32, daylight_threshold: f32) -> Self {
        match classify_band(reading, &[dusk_threshold, daylight_threshold]) {
            0 => Self::Dusk,
            1 => Self::Between,
            _ => Self::Daylight,
        }
    }
}

/// Position of the headlight selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlightMode {
    /// Low band: low beams forced on.
    On,
    /// Middle band: low beams forced off.
    Off,
    /// High band: light-sensor driven.
    Auto,
}

impl HeadlightMode {
    pub fn classify(reading: f32, on_max: f32, off_max: f32) -> Self {
        match classify_band(reading, &[on_max, off_max]) {
            0 => Self::On,
            1 => Self::Off,
            _ => Self::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUSK: f32 = 0.636;
    const DAYLIGHT: f32 = 0.828;

    #[test]
    fn band_edges_belong_to_the_lower_band() {
        let bounds = [0.25, 0.5];
        assert_eq!(classify_band(0.0, &bounds), 0);
        assert_eq!(classify_band(0.25, &bounds), 0);
        assert_eq!(classify_band(0.26, &bounds), 1);
        assert_eq!(classify_band(0.5, &bounds), 1);
        assert_eq!(classify_band(0.51, &bounds), 2);
        assert_eq!(classify_band(1.0, &bounds), 2);
    }

    #[test]
    fn no_bounds_means_a_single_band() {
        assert_eq!(classify_band(0.7, &[]), 0);
    }

    #[test]
    fn zone_depends_on_the_current_reading_only() {
        // Mid-scale sits under the dusk threshold with these values.
        for _ in 0..3 {
            assert_eq!(
                LightLevelZone::classify(0.5, DUSK, DAYLIGHT),
                LightLevelZone::Dusk
            );
            assert_eq!(
                LightLevelZone::classify(0.7, DUSK, DAYLIGHT),
                LightLevelZone::Between
            );
        }
    }

    #[test]
    fn light_zone_thresholds() {
        assert_eq!(LightLevelZone::classify(DUSK, DUSK, DAYLIGHT), LightLevelZone::Dusk);
        assert_eq!(
            LightLevelZone::classify(DAYLIGHT, DUSK, DAYLIGHT),
            LightLevelZone::Between
        );
        assert_eq!(
            LightLevelZone::classify(0.9, DUSK, DAYLIGHT),
            LightLevelZone::Daylight
        );
    }

    #[test]
    fn mode_thirds() {
        let (on_max, off_max) = (1.0 / 3.0, 2.0 / 3.0);
        assert_eq!(HeadlightMode::classify(0.1, on_max, off_max), HeadlightMode::On);
        assert_eq!(HeadlightMode::classify(0.5, on_max, off_max), HeadlightMode::Off);
        assert_eq!(HeadlightMode::classify(0.9, on_max, off_max), HeadlightMode::Auto);
    }
}
