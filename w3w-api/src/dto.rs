//! Data Transfer Objects for the v3 API
//!
//! Field names follow the service's camelCase JSON. Fields the service omits
//! for some requests (for example `locale`, or `distanceToFocusKm` when no
//! focus was given) are optional.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use w3w_core::{Coordinates, Square};

/// Response format requested from the convert and grid endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Plain JSON (service default)
    #[default]
    Json,
    /// GeoJSON feature collection
    GeoJson,
}

impl Format {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::GeoJson => "geojson",
        }
    }
}

// ---------------------------------------------------------------------------
// convert-to-3wa / convert-to-coordinates

/// JSON response of both convert endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertResponse {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Bounds of the grid square
    pub square: Square,
    /// Nearby place, such as a local town
    pub nearest_place: String,
    /// Centre of the grid square
    pub coordinates: Coordinates,
    /// The three-word address
    pub words: String,
    /// Language of `words`
    pub language: String,
    /// Locale of `words`, for languages with variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Link to the map site
    #[serde(rename = "map")]
    pub map_url: String,
}

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry<C> {
    /// Geometry type, e.g. `Point` or `MultiLineString`
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinates in GeoJSON `[lng, lat]` order
    pub coordinates: C,
}

/// GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<G, P> {
    /// Always `Feature`
    #[serde(rename = "type")]
    pub kind: String,
    /// Bounding box of the feature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    /// Geometry of the feature
    pub geometry: G,
    /// Feature properties
    pub properties: P,
}

/// GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<G, P> {
    /// Always `FeatureCollection`
    #[serde(rename = "type")]
    pub kind: String,
    /// Features of the collection
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<G, P>>,
}

/// Properties of a converted square in GeoJSON output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertProperties {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Nearby place
    pub nearest_place: String,
    /// The three-word address
    pub words: String,
    /// Language of `words`
    pub language: String,
    /// Locale of `words`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Link to the map site
    #[serde(rename = "map")]
    pub map_url: String,
}

/// GeoJSON response of both convert endpoints
pub type ConvertGeoJson = FeatureCollection<Geometry<Vec<f64>>, ConvertProperties>;

// ---------------------------------------------------------------------------
// autosuggest

/// A single autosuggest result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Suggestion {
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Nearby place
    pub nearest_place: String,
    /// The suggested three-word address
    pub words: String,
    /// Distance to the focus, only present when a focus was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_focus_km: Option<u32>,
    /// Position in the result list, starting at 1
    pub rank: u32,
    /// Language of `words`
    pub language: String,
    /// Locale of `words`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Response of the autosuggest endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AutosuggestResponse {
    /// Suggestions ordered by rank
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl AutosuggestResponse {
    /// Highest ranked suggestion
    pub fn top(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

// ---------------------------------------------------------------------------
// grid-section

/// One grid line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point
    pub start: Coordinates,
    /// End point
    pub end: Coordinates,
}

/// JSON response of the grid-section endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSectionResponse {
    /// Grid lines within the requested box
    #[serde(default)]
    pub lines: Vec<Line>,
}

/// GeoJSON response of the grid-section endpoint
pub type GridSectionGeoJson =
    FeatureCollection<Geometry<Vec<Vec<Vec<f64>>>>, serde_json::Map<String, serde_json::Value>>;

// ---------------------------------------------------------------------------
// available-languages

/// Variant of a language
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Locale {
    /// Locale code, e.g. `oo_la`
    pub code: String,
    /// English name
    pub name: String,
    /// Name in the language itself
    pub native_name: String,
}

/// A supported address language
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    /// ISO 639-1 code (`oo` for Bosnian-Croatian-Montenegrin-Serbian)
    pub code: String,
    /// English name
    pub name: String,
    /// Name in the language itself
    pub native_name: String,
    /// Variants, for languages that have them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<Locale>,
}

/// Response of the available-languages endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailableLanguagesResponse {
    /// All supported languages
    #[serde(default)]
    pub languages: Vec<Language>,
}

// ---------------------------------------------------------------------------
// errors

/// Error codes reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// Coordinates are malformed or out of range
    BadCoordinates,
    /// Unsupported language
    BadLanguage,
    /// Not a valid three-word address
    BadWords,
    /// Autosuggest input is malformed
    BadInput,
    /// Bounding box is malformed
    BadBoundingBox,
    /// Bounding box exceeds the size limit
    BadBoundingBoxTooBig,
    /// Invalid country clipping
    BadClipToCountry,
    /// Invalid focus
    BadFocus,
    /// Invalid number of results
    BadNResults,
    /// Invalid number of focus results
    BadNFocusResults,
    /// Invalid circle clipping
    BadClipToCircle,
    /// Invalid bounding box clipping
    BadClipToBoundingBox,
    /// Invalid polygon clipping
    BadClipToPolygon,
    /// Unsupported format
    BadFormat,
    /// The words parameter is missing
    MissingWords,
    /// No API key was supplied
    MissingKey,
    /// The API key is not valid
    InvalidKey,
    /// The API key has run out of quota
    QuotaExceeded,
    /// The API key is suspended
    SuspendedKey,
    /// The request is not valid
    InvalidRequest,
    /// Any code this client does not know about
    Other(String),
}

impl ErrorCode {
    /// Code as sent by the service
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::BadCoordinates => "BadCoordinates",
            ErrorCode::BadLanguage => "BadLanguage",
            ErrorCode::BadWords => "BadWords",
            ErrorCode::BadInput => "BadInput",
            ErrorCode::BadBoundingBox => "BadBoundingBox",
            ErrorCode::BadBoundingBoxTooBig => "BadBoundingBoxTooBig",
            ErrorCode::BadClipToCountry => "BadClipToCountry",
            ErrorCode::BadFocus => "BadFocus",
            ErrorCode::BadNResults => "BadNResults",
            ErrorCode::BadNFocusResults => "BadNFocusResults",
            ErrorCode::BadClipToCircle => "BadClipToCircle",
            ErrorCode::BadClipToBoundingBox => "BadClipToBoundingBox",
            ErrorCode::BadClipToPolygon => "BadClipToPolygon",
            ErrorCode::BadFormat => "BadFormat",
            ErrorCode::MissingWords => "MissingWords",
            ErrorCode::MissingKey => "MissingKey",
            ErrorCode::InvalidKey => "InvalidKey",
            ErrorCode::QuotaExceeded => "QuotaExceeded",
            ErrorCode::SuspendedKey => "SuspendedKey",
            ErrorCode::InvalidRequest => "InvalidRequest",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "BadCoordinates" => ErrorCode::BadCoordinates,
            "BadLanguage" => ErrorCode::BadLanguage,
            "BadWords" => ErrorCode::BadWords,
            "BadInput" => ErrorCode::BadInput,
            "BadBoundingBox" => ErrorCode::BadBoundingBox,
            "BadBoundingBoxTooBig" => ErrorCode::BadBoundingBoxTooBig,
            "BadClipToCountry" => ErrorCode::BadClipToCountry,
            "BadFocus" => ErrorCode::BadFocus,
            "BadNResults" => ErrorCode::BadNResults,
            "BadNFocusResults" => ErrorCode::BadNFocusResults,
            "BadClipToCircle" => ErrorCode::BadClipToCircle,
            "BadClipToBoundingBox" => ErrorCode::BadClipToBoundingBox,
            "BadClipToPolygon" => ErrorCode::BadClipToPolygon,
            "BadFormat" => ErrorCode::BadFormat,
            "MissingWords" => ErrorCode::MissingWords,
            "MissingKey" => ErrorCode::MissingKey,
            "InvalidKey" => ErrorCode::InvalidKey,
            "QuotaExceeded" => ErrorCode::QuotaExceeded,
            "SuspendedKey" => ErrorCode::SuspendedKey,
            "InvalidRequest" => ErrorCode::InvalidRequest,
            _ => ErrorCode::Other(code),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error returned with a non-success status
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("api: got error response '{code}' with message '{message}'")]
pub struct ErrorResponse {
    /// Machine readable code
    pub code: ErrorCode,
    /// Human readable description
    #[serde(default)]
    pub message: String,
}

/// Envelope the service wraps errors in
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: Option<ErrorResponse>,
}
