//! Monitored zone registry
//!
//! Canonical mapping of each monitored zone to the representative city whose
//! weather feed stands in for the whole region. Both updaters iterate this
//! table rather than hardcoding zone names.

/// Location metadata for one monitored zone.
pub struct ZoneLocation {
    /// Zone display name, matches `risk_zones.zone`
    pub zone: &'static str,
    /// Representative city queried against the weather source
    pub city: &'static str,
    /// Population estimate for the zone, display formatted
    pub population: &'static str,
    /// WGS84 latitude of the representative city
    pub lat: f64,
    /// WGS84 longitude of the representative city
    pub lng: f64,
}

/// All monitored zones with their representative cities.
pub static ZONE_REGISTRY: &[ZoneLocation] = &[
    ZoneLocation {
        zone: "Pacific Northwest",
        city: "Seattle",
        population: "4.1M",
        lat: 47.6062,
        lng: -122.3321,
    },
    ZoneLocation {
        zone: "Southeast Asia Coastal",
        city: "Bangkok",
        population: "10.7M",
        lat: 13.7563,
        lng: 100.5018,
    },
    ZoneLocation {
        zone: "Caribbean Basin",
        city: "Havana",
        population: "2.1M",
        lat: 23.1136,
        lng: -82.3666,
    },
    ZoneLocation {
        zone: "Central African Region",
        city: "Kinshasa",
        population: "17.0M",
        lat: -4.4419,
        lng: 15.2663,
    },
    ZoneLocation {
        zone: "Arctic Circle",
        city: "Tromso",
        population: "77k",
        lat: 69.6492,
        lng: 18.9553,
    },
    ZoneLocation {
        zone: "Australian Outback",
        city: "Alice Springs",
        population: "25k",
        lat: -23.6980,
        lng: 133.8807,
    },
];

/// Look up a zone's location mapping by display name.
pub fn location_for(zone: &str) -> Option<&'static ZoneLocation> {
    ZONE_REGISTRY.iter().find(|l| l.zone == zone)
}
