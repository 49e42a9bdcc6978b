use log::debug;
use std::fmt;

pub mod components;
pub mod config;
pub mod hooks;
pub mod utils;

use utils::{parse_number_or_zero, sanitize_digits};

/// Default calculator state at mount
pub mod defaults {
    pub const WATER_TEXT: &str = "250";
    pub const RATIO_PARTS: u32 = 16;
}

/// Parts of water per part of coffee. Only the preset values are
/// constructible, so it is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio(u32);

impl Ratio {
    pub const fn parts(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.0)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio(defaults::RATIO_PARTS)
    }
}

/// Ratio shortcuts, in display order.
pub static RATIO_PRESETS: [Ratio; 4] = [Ratio(15), Ratio(16), Ratio(17), Ratio(18)];

/// A one-click water amount shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterPreset {
    pub label: &'static str,
    pub millilitres: u32,
}

/// Water shortcuts for common serving sizes, in display order.
pub static WATER_PRESETS: [WaterPreset; 3] = [
    WaterPreset {
        label: "Single Cup",
        millilitres: 250,
    },
    WaterPreset {
        label: "Two Cups",
        millilitres: 500,
    },
    WaterPreset {
        label: "Full Pot",
        millilitres: 750,
    },
];

/// Water amount as entered by the user, holding ASCII digits only.
///
/// The empty string is a valid amount and counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WaterAmount(String);

impl WaterAmount {
    /// Build from arbitrary text, silently dropping every non-digit.
    pub fn from_input(input: &str) -> Self {
        WaterAmount(sanitize_digits(input))
    }

    pub fn from_millilitres(millilitres: u32) -> Self {
        WaterAmount(millilitres.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the text; empty text is 0.
    pub fn millilitres(&self) -> f64 {
        parse_number_or_zero(&self.0)
    }

    /// True when the text parses to exactly the preset's value.
    pub fn selects(&self, preset: &WaterPreset) -> bool {
        self.millilitres() == preset.millilitres as f64
    }
}

impl fmt::Display for WaterAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grams of coffee for `water` millilitres at `ratio`, rounded half-up to
/// one decimal place.
pub fn grounds_mass(water: f64, ratio: Ratio) -> f64 {
    let raw = water / ratio.parts() as f64;
    (raw * 10.0).round() / 10.0
}

/// Format a grounds mass for display: "15.6 grams", "50 grams".
///
/// Whole numbers drop the fractional part. A digit string too long for
/// `f64` yields "Infinity grams".
pub fn format_grams(mass: f64) -> String {
    if mass.is_infinite() {
        return format!("Infinity {}", config::GROUNDS_UNIT);
    }
    format!("{} {}", mass, config::GROUNDS_UNIT)
}

/// The calculator's input state. The grounds mass is never stored here;
/// it is derived on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    water: WaterAmount,
    ratio: Ratio,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            water: WaterAmount::from_input(defaults::WATER_TEXT),
            ratio: Ratio::default(),
        }
    }
}

impl CalculatorState {
    pub fn water(&self) -> &WaterAmount {
        &self.water
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Replace the water text with the digits of `input`.
    pub fn set_water_text(&mut self, input: &str) {
        let water = WaterAmount::from_input(input);
        debug!("Water text: '{}' -> '{}'", self.water, water);
        self.water = water;
    }

    pub fn select_water_preset(&mut self, preset: &WaterPreset) {
        debug!("Water preset '{}' ({} ml)", preset.label, preset.millilitres);
        self.water = WaterAmount::from_millilitres(preset.millilitres);
    }

    pub fn select_ratio(&mut self, ratio: Ratio) {
        debug!("Ratio: {} -> {}", self.ratio, ratio);
        self.ratio = ratio;
    }

    pub fn grounds_mass(&self) -> f64 {
        grounds_mass(self.water.millilitres(), self.ratio)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn state(water: &str, parts: u32) -> CalculatorState {
        CalculatorState {
            water: WaterAmount::from_input(water),
            ratio: Ratio(parts),
        }
    }

    #[test]
    fn default_state_computes_immediately() {
        let s = CalculatorState::default();
        assert_eq!(s.water().as_str(), "250");
        assert_eq!(s.ratio().parts(), 16);
        assert_eq!(s.grounds_mass(), 15.6);
    }

    #[test]
    fn empty_water_is_zero() {
        assert_eq!(state("", 15).grounds_mass(), 0.0);
    }

    #[test]
    fn typed_text_is_sanitized() {
        let mut s = CalculatorState::default();
        s.set_water_text("12a3b");
        assert_eq!(s.water().as_str(), "123");
        s.set_water_text("25ab");
        assert_eq!(s.water().as_str(), "25");
        s.set_water_text("-4.5");
        assert_eq!(s.water().as_str(), "45");
    }

    #[test]
    fn full_pot_with_ratio_18() {
        let mut s = CalculatorState::default();
        s.select_water_preset(&WATER_PRESETS[2]);
        s.select_ratio(RATIO_PRESETS[3]);
        assert_eq!(s.water().as_str(), "750");
        assert_eq!(s.grounds_mass(), 41.7);
    }

    #[test]
    fn reselecting_ratio_changes_nothing() {
        let mut s = CalculatorState::default();
        s.select_ratio(RATIO_PRESETS[2]);
        let once = s.clone();
        let mass = s.grounds_mass();
        s.select_ratio(RATIO_PRESETS[2]);
        assert_eq!(s, once);
        assert_eq!(s.grounds_mass(), mass);
    }

    #[test]
    fn mass_matches_formula_for_every_preset_ratio() {
        for r in RATIO_PRESETS {
            for water in ["0", "1", "7", "99", "250", "333", "1000", "123456"] {
                let n: f64 = water.parse().unwrap();
                let expected = ((n / r.parts() as f64) * 10.0).round() / 10.0;
                assert_eq!(state(water, r.parts()).grounds_mass(), expected);
            }
        }
    }

    #[test]
    fn rounding_is_half_up_on_tenths() {
        // 0.25 and 0.75 are exact in binary, so no representation noise
        assert_eq!(grounds_mass(4.0, Ratio(16)), 0.3);
        assert_eq!(grounds_mass(12.0, Ratio(16)), 0.8);
        assert_eq!(grounds_mass(500.0, Ratio(15)), 33.3);
        assert_eq!(grounds_mass(500.0, Ratio(17)), 29.4);
    }

    #[test]
    fn long_digit_string_within_f64_range() {
        let s = state("99999999999999999999999999", 15);
        assert!(s.grounds_mass().is_finite());
        assert!(s.grounds_mass() > 0.0);
    }

    #[test]
    fn digit_string_beyond_f64_range_shows_infinity() {
        let s = state(&"9".repeat(400), 15);
        assert!(s.grounds_mass().is_infinite());
        assert_eq!(format_grams(s.grounds_mass()), "Infinity grams");
    }

    #[test]
    fn water_selects_preset_by_numeric_value() {
        let two_cups = &WATER_PRESETS[1];
        assert!(WaterAmount::from_input("500").selects(two_cups));
        assert!(WaterAmount::from_input("0500").selects(two_cups));
        assert!(!WaterAmount::from_input("501").selects(two_cups));
        assert!(!WaterAmount::from_input("").selects(two_cups));
    }

    #[test]
    fn preset_text_is_plain_digits() {
        let mut s = state("0012", 16);
        s.select_water_preset(&WATER_PRESETS[0]);
        assert_eq!(s.water().as_str(), "250");
    }

    #[test]
    fn preset_ratios_are_positive() {
        assert!(RATIO_PRESETS.iter().all(|r| r.parts() > 0));
        assert!(RATIO_PRESETS.contains(&Ratio::default()));
    }

    #[test]
    fn ratio_displays_as_label() {
        let labels: Vec<String> = RATIO_PRESETS.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["1:15", "1:16", "1:17", "1:18"]);
    }

    #[test]
    fn grams_formatting() {
        assert_eq!(format_grams(15.6), "15.6 grams");
        assert_eq!(format_grams(41.7), "41.7 grams");
        assert_eq!(format_grams(0.0), "0 grams");
        assert_eq!(format_grams(grounds_mass(800.0, Ratio(16))), "50 grams");
    }
}
