use crate::host::{BatteryReading, BatteryState, Host};
use crate::utils::debug_with_context;

/// Nerd Font battery glyphs, 10% to 100%
pub const DISCHARGING_ICONS: [&str; 10] = [
    "\u{f007a}", "\u{f007b}", "\u{f007c}", "\u{f007d}", "\u{f007e}",
    "\u{f007f}", "\u{f0080}", "\u{f0081}", "\u{f0082}", "\u{f0079}",
];

pub const CHARGING_ICONS: [&str; 10] = [
    "\u{f089c}", "\u{f0086}", "\u{f0087}", "\u{f0088}", "\u{f089d}",
    "\u{f0089}", "\u{f089e}", "\u{f008a}", "\u{f008b}", "\u{f0085}",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatteryInfo {
    /// e.g. `"95%"`, empty without a battery
    pub percentage: String,
    pub icon: String,
}

pub struct BatterySegment;

impl BatterySegment {
    pub fn new() -> Self {
        Self
    }

    pub fn get_battery_info(&self, host: &impl Host) -> BatteryInfo {
        let readings = host.batteries();
        debug_with_context("battery", &format!("{} battery reading(s)", readings.len()));
        battery_info(&readings)
    }
}

impl Default for BatterySegment {
    fn default() -> Self {
        Self::new()
    }
}

/// Map readings to display strings.
///
/// With several batteries the last one reported is shown. No battery at all
/// (desktops) gives empty strings.
pub fn battery_info(readings: &[BatteryReading]) -> BatteryInfo {
    readings.last().map(describe).unwrap_or_default()
}

fn describe(reading: &BatteryReading) -> BatteryInfo {
    let charge = clamp_charge(reading.state_of_charge);
    let icons = if reading.state == BatteryState::Charging {
        &CHARGING_ICONS
    } else {
        &DISCHARGING_ICONS
    };

    BatteryInfo {
        percentage: format!("{}%", (charge * 100.0).round() as u32),
        icon: icons[decile(charge) - 1].to_string(),
    }
}

/// Icon index in 1..=10
pub fn decile(charge: f64) -> usize {
    ((clamp_charge(charge) * 10.0).round() as usize).clamp(1, 10)
}

fn clamp_charge(charge: f64) -> f64 {
    if charge.is_nan() {
        0.0
    } else {
        charge.clamp(0.0, 1.0)
    }
}
