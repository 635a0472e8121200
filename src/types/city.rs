//! Map centers for the cities covered by the dataset.

/// A city present in the dataset, with its map center (lon, lat).
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

pub const CITIES: &[City] = &[
    City { name: "Vancouver", lon: -123.112, lat: 49.2488 },
    City { name: "Victoria", lon: -123.3656, lat: 48.4284 },
    City { name: "Calgary", lon: -114.0719, lat: 51.0447 },
    City { name: "Edmonton", lon: -113.4938, lat: 53.5461 },
    City { name: "Saskatoon", lon: -106.6702, lat: 52.1332 },
    City { name: "Regina", lon: -104.6189, lat: 50.4452 },
    City { name: "Winnipeg", lon: -97.1384, lat: 49.8951 },
    City { name: "Toronto", lon: -79.3832, lat: 43.6532 },
    City { name: "Hamilton", lon: -79.8711, lat: 43.2557 },
    City { name: "Ottawa", lon: -75.6972, lat: 45.4215 },
    City { name: "Montreal", lon: -73.5674, lat: 45.5019 },
    City { name: "Quebec City", lon: -71.208, lat: 46.8139 },
    City { name: "Halifax", lon: -63.5752, lat: 44.6488 },
    City { name: "St. John's", lon: -52.7126, lat: 47.5615 },
];

/// Case-insensitive lookup into the city table.
pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::find_city;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find_city("vancouver").is_some());
        assert!(find_city("VANCOUVER").is_some());
        assert!(find_city("Atlantis").is_none());
    }
}
