//! Optional request parameters
//!
//! Unset options are left out of the query string so the service applies its
//! own defaults.

use w3w_core::{BoundingBox, Circle, Coordinates, Polygon};

/// Query parameters as (name, value) pairs
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// Options for `convert-to-3wa` and `convert-to-coordinates`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// ISO 639-1 language code for the returned address. Use `oo` for
    /// Bosnian-Croatian-Montenegrin-Serbian. Defaults to `en` server-side.
    pub language: Option<String>,
    /// Variant of the language, e.g. `oo_la`
    pub locale: Option<String>,
}

impl ConvertOptions {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub(crate) fn append_to(&self, query: &mut QueryPairs) {
        if let Some(locale) = &self.locale {
            query.push(("locale", locale.clone()));
        }
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
    }
}

/// Options for `autosuggest`
///
/// Clipping restricts the candidate set, focus then weights the remaining
/// results by distance. Several clipping policies may be combined, in which
/// case results must satisfy all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutosuggestOptions {
    /// Prefer results near this point (often the user's location)
    pub focus: Option<Coordinates>,
    /// Only return results in these ISO 3166-1 alpha-2 countries.
    /// Unknown codes are not an error; they just produce no results.
    pub clip_to_country: Vec<String>,
    /// Only return results inside this box
    pub clip_to_bounding_box: Option<BoundingBox>,
    /// Only return results inside this circle
    pub clip_to_circle: Option<Circle>,
    /// Only return results inside this closed polygon (at most 25 points)
    pub clip_to_polygon: Option<Polygon>,
    /// Fallback language for messy input; required for voice input
    pub language: Option<String>,
    /// Prefer land over sea; the service defaults to `true`
    pub prefer_land: Option<bool>,
    /// Variant of the language
    pub locale: Option<String>,
    /// Number of results to return (max 100)
    pub n_results: Option<u32>,
    /// How many of the results should be focus-weighted
    pub n_focus_results: Option<u32>,
}

impl AutosuggestOptions {
    /// Set the focus
    pub fn focus(mut self, focus: Coordinates) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Restrict to the given countries
    pub fn clip_to_country<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clip_to_country = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to a bounding box
    pub fn clip_to_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.clip_to_bounding_box = Some(bbox);
        self
    }

    /// Restrict to a circle
    pub fn clip_to_circle(mut self, circle: Circle) -> Self {
        self.clip_to_circle = Some(circle);
        self
    }

    /// Restrict to a polygon
    pub fn clip_to_polygon(mut self, polygon: Polygon) -> Self {
        self.clip_to_polygon = Some(polygon);
        self
    }

    /// Set the fallback language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Prefer or stop preferring land
    pub fn prefer_land(mut self, prefer_land: bool) -> Self {
        self.prefer_land = Some(prefer_land);
        self
    }

    /// Set the locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Limit the number of results
    pub fn n_results(mut self, n: u32) -> Self {
        self.n_results = Some(n);
        self
    }

    /// Set the number of focus-weighted results
    pub fn n_focus_results(mut self, n: u32) -> Self {
        self.n_focus_results = Some(n);
        self
    }

    pub(crate) fn append_to(&self, query: &mut QueryPairs) {
        if let Some(focus) = &self.focus {
            query.push(("focus", focus.as_query_param()));
        }
        if !self.clip_to_country.is_empty() {
            query.push(("clip-to-country", self.clip_to_country.join(",")));
        }
        if let Some(bbox) = &self.clip_to_bounding_box {
            query.push(("clip-to-bounding-box", bbox.as_query_param()));
        }
        if let Some(circle) = &self.clip_to_circle {
            query.push(("clip-to-circle", circle.as_query_param()));
        }
        if let Some(polygon) = self.clip_to_polygon.as_ref().filter(|p| !p.is_empty()) {
            query.push(("clip-to-polygon", polygon.as_query_param()));
        }
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        if let Some(prefer_land) = self.prefer_land {
            query.push(("prefer-land", prefer_land.to_string()));
        }
        if let Some(locale) = &self.locale {
            query.push(("locale", locale.clone()));
        }
        if let Some(n) = self.n_results {
            query.push(("n-results", n.to_string()));
        }
        if let Some(n) = self.n_focus_results {
            query.push(("n-focus-results", n.to_string()));
        }
    }
}
