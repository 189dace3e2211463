//! Geographic value types exchanged with the address service
//!
//! All values render to the comma-separated query parameter format used by
//! the remote API (six decimal places) and parse back from the same format.

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude, -90 to 90
    pub lat: f64,
    /// Longitude; the service lets this wrap around the antimeridian
    pub lng: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Format as `lat,lng`
    pub fn as_query_param(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let values = parse_components(s, 2)?;
        let coords = Self::new(values[0], values[1]);
        check_latitude(coords.lat)?;
        Ok(coords)
    }
}

/// Rectangle given by its south-west and north-east corners
///
/// The service returns the bounds of every grid square in this shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Bottom-left corner
    #[cfg_attr(feature = "serde", serde(rename = "southwest"))]
    pub south_west: Coordinates,
    /// Top-right corner
    #[cfg_attr(feature = "serde", serde(rename = "northeast"))]
    pub north_east: Coordinates,
}

/// Bounds of a single grid square
pub type Square = BoundingBox;

impl BoundingBox {
    /// Create a bounding box from its corners
    pub const fn new(south_west: Coordinates, north_east: Coordinates) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Format as `south_lat,west_lng,north_lat,east_lng`
    pub fn as_query_param(&self) -> String {
        format!(
            "{:.6},{:.6},{:.6},{:.6}",
            self.south_west.lat, self.south_west.lng, self.north_east.lat, self.north_east.lng
        )
    }
}

impl FromStr for BoundingBox {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let v = parse_components(s, 4)?;
        check_latitude(v[0])?;
        check_latitude(v[2])?;
        Ok(Self::new(
            Coordinates::new(v[0], v[1]),
            Coordinates::new(v[2], v[3]),
        ))
    }
}

/// Circle given by its centre and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre of the circle
    pub center: Coordinates,
    /// Radius in kilometres
    pub radius_km: f64,
}

impl Circle {
    /// Create a circle
    pub const fn new(center: Coordinates, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Format as `lat,lng,radius_km`
    pub fn as_query_param(&self) -> String {
        format!("{},{:.6}", self.center, self.radius_km)
    }
}

impl FromStr for Circle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let v = parse_components(s, 3)?;
        check_latitude(v[0])?;
        Ok(Self::new(Coordinates::new(v[0], v[1]), v[2]))
    }
}

/// Closed polygon; the first point should be repeated as the last
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon(pub Vec<Coordinates>);

impl Polygon {
    /// Number of points, including the closing one
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the polygon has no points
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the last point repeats the first
    pub fn is_closed(&self) -> bool {
        self.0.len() > 1 && self.0.first() == self.0.last()
    }

    /// Format as `lat1,lng1,lat2,lng2,...`
    pub fn as_query_param(&self) -> String {
        self.0
            .iter()
            .map(Coordinates::as_query_param)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<Vec<Coordinates>> for Polygon {
    fn from(points: Vec<Coordinates>) -> Self {
        Self(points)
    }
}

impl FromStr for Polygon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let values = split_numbers(s)?;
        if values.len() % 2 != 0 {
            return Err(CoreError::ComponentCount {
                expected: values.len() + 1,
                found: values.len(),
            });
        }
        let points = values
            .chunks_exact(2)
            .map(|pair| -> Result<Coordinates> {
                check_latitude(pair[0])?;
                Ok(Coordinates::new(pair[0], pair[1]))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(points))
    }
}

fn split_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CoreError::InvalidNumber(part.to_string()))
        })
        .collect()
}

fn parse_components(s: &str, expected: usize) -> Result<Vec<f64>> {
    let found = s.split(',').count();
    if found != expected {
        return Err(CoreError::ComponentCount { expected, found });
    }
    split_numbers(s)
}

fn check_latitude(lat: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(CoreError::LatitudeOutOfRange(lat))
    }
}
