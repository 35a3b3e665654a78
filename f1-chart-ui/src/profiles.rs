//! Static presentation metadata per driver.
//!
//! Keyed by the driver name as it appears in the data file. The data has no
//! stable driver id, so a renamed driver silently loses their profile.

/// Hero panel and chart styling for one driver.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverProfile {
    pub number: &'static str,
    pub flag: &'static str,
    pub team: &'static str,
    pub tagline: &'static str,
    /// Accent color as `#RRGGBB`.
    pub color: &'static str,
}

/// Accent for drivers without a profile.
pub const FALLBACK_ACCENT: &str = "#2563eb";

static DRIVER_PROFILES: &[(&str, DriverProfile)] = &[
    (
        "Lando Norris",
        DriverProfile {
            number: "4",
            flag: "🇬🇧",
            team: "McLaren",
            tagline: "Precision under pressure · Late-race pace",
            color: "#FF9F1C",
        },
    ),
    (
        "Max Verstappen",
        DriverProfile {
            number: "33",
            flag: "🇳🇱",
            team: "Red Bull Racing",
            tagline: "Aggressive racecraft · Relentless speed",
            color: "#e10600",
        },
    ),
];

pub fn profile(driver: &str) -> Option<&'static DriverProfile> {
    DRIVER_PROFILES
        .iter()
        .find(|(name, _)| *name == driver)
        .map(|(_, p)| p)
}

pub fn accent_color(driver: &str) -> &'static str {
    profile(driver).map_or(FALLBACK_ACCENT, |p| p.color)
}
