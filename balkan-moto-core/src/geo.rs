//! WGS84 coordinates and bounding boxes used by the directory and map adapter.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latitude/longitude pair in decimal degrees.
///
/// Deserialization goes through [`LatLng::new`], so a value that made it into a
/// store is always inside the WGS84 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = CoordinateError;

    fn try_from(raw: RawLatLng) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl LatLng {
    /// Build a coordinate, rejecting values a map widget cannot place.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is out of range or not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// `[lat, lng]` in the order Leaflet-style widgets expect.
    #[must_use]
    pub const fn as_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Axis-aligned box covering a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty set.
    ///
    /// A single point yields a degenerate box; widgets clamp it with their max zoom.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for p in iter {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: f64::midpoint(self.south_west.lat, self.north_east.lat),
            lng: f64::midpoint(self.south_west.lng, self.north_east.lng),
        }
    }

    /// `[[south, west], [north, east]]`.
    #[must_use]
    pub const fn as_pairs(&self) -> [[f64; 2]; 2] {
        [self.south_west.as_pair(), self.north_east.as_pair()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(LatLng::new(91.0, 0.0), Err(CoordinateError::Latitude(91.0)));
        assert_eq!(
            LatLng::new(0.0, -180.5),
            Err(CoordinateError::Longitude(-180.5))
        );
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
        assert!(LatLng::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: LatLng = serde_json::from_str(r#"{"lat": 45.815, "lng": 15.9819}"#).unwrap();
        assert!((ok.lat - 45.815).abs() < f64::EPSILON);
        let bad = serde_json::from_str::<LatLng>(r#"{"lat": 120.0, "lng": 15.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [
            LatLng::new(44.81, 20.46).unwrap(),
            LatLng::new(45.81, 15.98).unwrap(),
            LatLng::new(42.69, 23.32).unwrap(),
        ];
        let b = Bounds::enclosing(pts).expect("non-empty");
        assert!(pts.iter().all(|p| b.contains(*p)));
        assert!((b.south_west.lat - 42.69).abs() < 1e-9);
        assert!((b.north_east.lng - 23.32).abs() < 1e-9);
        assert!(b.contains(b.center()));
    }

    #[test]
    fn empty_point_set_has_no_bounds() {
        assert!(Bounds::enclosing(Vec::<LatLng>::new()).is_none());
    }
}
