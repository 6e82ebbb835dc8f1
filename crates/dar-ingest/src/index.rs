//! The city → regions lookup derived from the listings dataset.

use std::collections::BTreeMap;

/// Preferred default city when present in the dataset.
pub const DEFAULT_CITY: &str = "Tunis";

/// Preferred default region when present in a city's region list.
pub const DEFAULT_REGION: &str = "Autres villes";

/// Immutable lookup from city name to the sorted set of regions observed
/// with that city in the dataset.
///
/// Built once at startup and shared by reference; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CityRegionIndex {
    cities: Vec<String>,
    regions: BTreeMap<String, Vec<String>>,
}

impl CityRegionIndex {
    /// Builds the index from observed `(city, region)` pairs.
    ///
    /// Cities come out sorted; each city's region list is sorted and
    /// deduplicated. Pairs with an empty city or region are the caller's
    /// problem to filter out.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut regions: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (city, region) in pairs {
            regions.entry(city).or_default().push(region);
        }
        for list in regions.values_mut() {
            list.sort();
            list.dedup();
        }
        // BTreeMap iteration order gives the sorted city list.
        let cities = regions.keys().cloned().collect();
        Self { cities, regions }
    }

    /// All cities in the dataset, lexicographically sorted.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The sorted, deduplicated region list for a city, if the city exists.
    pub fn regions(&self, city: &str) -> Option<&[String]> {
        self.regions.get(city).map(Vec::as_slice)
    }

    /// True when a region was observed with the given city.
    pub fn contains(&self, city: &str, region: &str) -> bool {
        self.regions(city)
            .is_some_and(|list| list.iter().any(|r| r == region))
    }

    /// The city selected on load: "Tunis" if present, else the first city.
    pub fn default_city(&self) -> Option<&str> {
        if self.regions.contains_key(DEFAULT_CITY) {
            return Some(DEFAULT_CITY);
        }
        self.cities.first().map(String::as_str)
    }

    /// The region selected when a city is chosen: "Autres villes" if the
    /// city has it, else the first region alphabetically.
    pub fn default_region(&self, city: &str) -> Option<&str> {
        let list = self.regions(city)?;
        if list.iter().any(|r| r == DEFAULT_REGION) {
            return Some(DEFAULT_REGION);
        }
        list.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
