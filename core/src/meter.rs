#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeterStatus {
    Dominant,
    Conflicted,
    Broken,
}

impl MeterStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MeterStatus::Dominant => "Dominant",
            MeterStatus::Conflicted => "Conflicted",
            MeterStatus::Broken => "Broken",
        }
    }
}

/// Intensities strictly above `dominant` read as dominant, strictly above
/// `conflicted` as conflicted, anything else as broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeterThresholds {
    pub dominant: u8,
    pub conflicted: u8,
}

impl Default for MeterThresholds {
    fn default() -> Self {
        Self {
            dominant: 80,
            conflicted: 30,
        }
    }
}

impl MeterThresholds {
    pub fn status(&self, intensity: u8) -> MeterStatus {
        if intensity > self.dominant {
            MeterStatus::Dominant
        } else if intensity > self.conflicted {
            MeterStatus::Conflicted
        } else {
            MeterStatus::Broken
        }
    }
}

/// Fill height of the meter in percent.
pub fn fill_percent(intensity: u8) -> u8 {
    intensity.min(100)
}

pub const METER_TICKS: [&str; 3] = ["100%", "50%", "0%"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let thresholds = MeterThresholds::default();
        assert_eq!(thresholds.status(100), MeterStatus::Dominant);
        assert_eq!(thresholds.status(81), MeterStatus::Dominant);
        assert_eq!(thresholds.status(80), MeterStatus::Conflicted);
        assert_eq!(thresholds.status(31), MeterStatus::Conflicted);
        assert_eq!(thresholds.status(30), MeterStatus::Broken);
        assert_eq!(thresholds.status(0), MeterStatus::Broken);
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = MeterThresholds {
            dominant: 50,
            conflicted: 5,
        };
        assert_eq!(thresholds.status(60), MeterStatus::Dominant);
        assert_eq!(thresholds.status(10), MeterStatus::Conflicted);
        assert_eq!(thresholds.status(5).label(), "Broken");
    }

    #[test]
    fn fill_matches_intensity() {
        for intensity in 0..=100u8 {
            assert_eq!(fill_percent(intensity), intensity);
        }
        assert_eq!(fill_percent(200), 100);
    }
}
