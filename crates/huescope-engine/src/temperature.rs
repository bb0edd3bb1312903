//! Warm/cool/neutral classification from the red-blue balance.

use serde::Serialize;

use crate::color::Color;

/// `r - b` beyond this (in either direction) leaves the neutral band.
pub const WARMTH_THRESHOLD: i16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    pub fn description(self) -> &'static str {
        match self {
            Temperature::Warm => "This color has warm tones",
            Temperature::Cool => "This color has cool tones",
            Temperature::Neutral => "This color is neutral in temperature",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemperatureInfo {
    pub temperature: Temperature,
    /// `r - b`, in `[-255, 255]`.
    pub warmth_value: i16,
    pub description: &'static str,
}

pub fn estimate(color: Color) -> TemperatureInfo {
    let warmth_value = color.r as i16 - color.b as i16;
    let temperature = if warmth_value > WARMTH_THRESHOLD {
        Temperature::Warm
    } else if warmth_value < -WARMTH_THRESHOLD {
        Temperature::Cool
    } else {
        Temperature::Neutral
    };

    TemperatureInfo {
        temperature,
        warmth_value,
        description: temperature.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_is_warm() {
        let info = estimate(Color::new(255, 0, 0));
        assert_eq!(info.temperature, Temperature::Warm);
        assert_eq!(info.warmth_value, 255);
        assert_eq!(info.description, "This color has warm tones");
    }

    #[test]
    fn test_blue_is_cool() {
        let info = estimate(Color::new(0x3b, 0x82, 0xf6));
        assert_eq!(info.temperature, Temperature::Cool);
        assert_eq!(info.warmth_value, 59 - 246);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(estimate(Color::new(50, 0, 0)).temperature, Temperature::Neutral);
        assert_eq!(estimate(Color::new(51, 0, 0)).temperature, Temperature::Warm);
        assert_eq!(estimate(Color::new(0, 0, 50)).temperature, Temperature::Neutral);
        assert_eq!(estimate(Color::new(0, 0, 51)).temperature, Temperature::Cool);
    }

    #[test]
    fn test_grays_are_neutral() {
        for v in [0u8, 128, 255] {
            assert_eq!(estimate(Color::new(v, v, v)).temperature, Temperature::Neutral);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_value(estimate(Color::WHITE)).unwrap();
        assert_eq!(json["temperature"], "neutral");
        assert_eq!(json["warmth_value"], 0);
    }
}
