//! Vaglio test utilities.
//!
//! Fixture record types and deterministic datasets for exercising the
//! pagination flow: a city/country model with enough variety to cover
//! filtering, sorting, and windowing in one dataset.

use serde::Serialize;
use vaglio::queryable;

/// A city record fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country_id: i64,
}

queryable!(City { id, name, lat, lon, country_id });

impl City {
    /// Set a custom ID.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Set the owning country.
    pub fn with_country(mut self, country_id: i64) -> Self {
        self.country_id = country_id;
        self
    }
}

/// A country record fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub iso2: String,
    pub iso3: String,
}

queryable!(Country { id, name, iso2, iso3 });

/// Create a city with the given coordinates.
pub fn city(id: i64, name: &str, lat: f64, lon: f64, country_id: i64) -> City {
    City {
        id,
        name: name.to_string(),
        lat,
        lon,
        country_id,
    }
}

/// Create a country.
pub fn country(id: i64, name: &str, iso2: &str, iso3: &str) -> Country {
    Country {
        id,
        name: name.to_string(),
        iso2: iso2.to_string(),
        iso3: iso3.to_string(),
    }
}

/// Ten real-world cities, exactly three of which start with `"San"`.
///
/// Order is deliberately unsorted so source-order assertions mean
/// something.
pub fn world_cities() -> Vec<City> {
    vec![
        city(1, "Tokyo", 35.6897, 139.6922, 2),
        city(2, "San Francisco", 37.7775, -122.4163, 1),
        city(3, "Berlin", 52.5200, 13.4050, 3),
        city(4, "Santiago", -33.4372, -70.6506, 4),
        city(5, "Oslo", 59.9133, 10.7389, 5),
        city(6, "San Diego", 32.7157, -117.1611, 1),
        city(7, "Madrid", 40.4168, -3.7038, 6),
        city(8, "Nairobi", -1.2864, 36.8172, 7),
        city(9, "Toronto", 43.6532, -79.3832, 8),
        city(10, "Cairo", 30.0444, 31.2357, 9),
    ]
}

/// The countries backing [`world_cities`].
pub fn countries() -> Vec<Country> {
    vec![
        country(1, "United States", "US", "USA"),
        country(2, "Japan", "JP", "JPN"),
        country(3, "Germany", "DE", "DEU"),
        country(4, "Chile", "CL", "CHL"),
        country(5, "Norway", "NO", "NOR"),
        country(6, "Spain", "ES", "ESP"),
        country(7, "Kenya", "KE", "KEN"),
        country(8, "Canada", "CA", "CAN"),
        country(9, "Egypt", "EG", "EGY"),
    ]
}

/// A deterministic dataset of `count` cities named `City 001`, `City 002`,
/// and so on, for paging-math scenarios that need an exact record count.
pub fn numbered_cities(count: usize) -> Vec<City> {
    (1..=count as i64)
        .map(|i| {
            city(
                i,
                &format!("City {i:03}"),
                i as f64 * 0.5 - 30.0,
                20.0 - i as f64 * 0.25,
                (i - 1) % 5 + 1,
            )
        })
        .collect()
}
