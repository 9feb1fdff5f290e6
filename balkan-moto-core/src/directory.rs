//! Static location directory: club shops and partner service garages.
use crate::data::{DataError, Record, ensure_unique_ids, find_by_id};
use crate::filter::{Criteria, Filterable, filter};
use crate::geo::LatLng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Shop,
    Service,
}

impl LocationKind {
    pub const ALL: [Self; 2] = [Self::Shop, Self::Service];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Shop => "shop",
            Self::Service => "service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: LocationKind,
    /// Free-text subtype such as "Official Dealer" or "Tire Service".
    pub category: String,
    pub city: String,
    pub address: String,
    pub coordinates: LatLng,
    pub hours: String,
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
}

fn non_dial() -> Option<&'static Regex> {
    static NON_DIAL: OnceLock<Option<Regex>> = OnceLock::new();
    NON_DIAL.get_or_init(|| Regex::new(r"[^\d+]").ok()).as_ref()
}

impl Location {
    /// `tel:` link with spacing and punctuation stripped.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let dial = non_dial().map_or_else(
            || self.phone.replace(' ', ""),
            |re| re.replace_all(&self.phone, "").into_owned(),
        );
        format!("tel:{dial}")
    }

    /// Turn-by-turn directions to this location.
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.coordinates.lat, self.coordinates.lng
        )
    }

    #[must_use]
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

impl Record for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Location {
    type Category = LocationKind;

    fn category(&self) -> LocationKind {
        self.kind
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.city.as_str(),
            self.address.as_str(),
            self.category.as_str(),
            self.description.as_str(),
        ]
    }
}

pub type LocationCriteria = Criteria<LocationKind>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    pub locations: Vec<Location>,
}

impl Directory {
    /// Parse and validate a directory document.
    ///
    /// Coordinates are range-checked during deserialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a coordinate is out of range,
    /// or ids repeat.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let directory: Self = serde_json::from_str(json)?;
        ensure_unique_ids("location", &directory.locations)?;
        Ok(directory)
    }

    /// Directory bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn load_from_static() -> Result<Self, DataError> {
        Self::from_json(include_str!("../data/locations.json"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Location> {
        find_by_id(&self.locations, id)
    }

    #[must_use]
    pub fn visible(&self, criteria: &LocationCriteria) -> Vec<&Location> {
        filter(&self.locations, criteria)
    }

    #[must_use]
    pub fn count_of(&self, kind: LocationKind) -> usize {
        self.locations.iter().filter(|l| l.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Directory {
        Directory::load_from_static().expect("bundled directory")
    }

    #[test]
    fn bundled_directory_loads_both_kinds() {
        let d = directory();
        assert_eq!(d.count_of(LocationKind::Shop), 5);
        assert_eq!(d.count_of(LocationKind::Service), 6);
        assert!(d.locations.iter().all(|l| !l.images.is_empty()));
    }

    #[test]
    fn tel_href_keeps_only_dial_characters() {
        let d = directory();
        let hq = d.find("shop-1").expect("hq");
        assert_eq!(hq.tel_href(), "tel:+381111234567");
    }

    #[test]
    fn directions_point_at_coordinates() {
        let d = directory();
        let zagreb = d.find("shop-2").expect("zagreb shop");
        assert_eq!(
            zagreb.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=45.815,15.9819"
        );
    }

    #[test]
    fn website_is_optional() {
        let d = directory();
        assert!(d.find("service-3").expect("quick fix").website.is_none());
        assert!(d.find("service-2").expect("chrome").website.is_some());
    }

    #[test]
    fn out_of_range_coordinates_fail_to_load() {
        let json = r#"{"locations":[{"id":"x","name":"X","kind":"shop","category":"c",
            "city":"c","address":"a","coordinates":{"lat":95.0,"lng":10.0},
            "hours":"h","phone":"p","description":"d"}]}"#;
        assert!(matches!(Directory::from_json(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn duplicate_location_ids_fail_to_load() {
        let row = r#"{"id":"x","name":"X","kind":"shop","category":"c","city":"c","address":"a",
            "coordinates":{"lat":45.0,"lng":10.0},"hours":"h","phone":"p","description":"d"}"#;
        let json = format!(r#"{{"locations":[{row},{row}]}}"#);
        assert!(matches!(
            Directory::from_json(&json),
            Err(DataError::DuplicateId { store: "location", .. })
        ));
    }
}
