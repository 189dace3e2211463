//! Endpoints of the v3 REST API

use crate::config::Config;
use crate::dto::{
    AutosuggestResponse, AvailableLanguagesResponse, ConvertGeoJson, ConvertResponse, Format,
    GridSectionGeoJson, GridSectionResponse,
};
use crate::error::Result;
use crate::options::{AutosuggestOptions, ConvertOptions, QueryPairs};
use crate::request::get_json;
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use w3w_core::{BoundingBox, Coordinates};

/// Typed access to the v3 endpoints
#[derive(Debug, Clone)]
pub struct V3Api<T = ReqwestTransport> {
    config: Config,
    transport: T,
}

impl V3Api<ReqwestTransport> {
    /// Client using reqwest, honouring the configured timeout
    pub fn new(config: Config) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(config.timeout())?;
        Ok(Self::from_config(config, transport))
    }
}

impl<T: Transport> V3Api<T> {
    /// Client using a custom transport
    pub fn from_config(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable configuration, e.g. to change the base URL at runtime
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Three-word address of the square containing `coordinates`
    pub async fn convert_to_3wa(
        &self,
        coordinates: Coordinates,
        options: &ConvertOptions,
    ) -> Result<ConvertResponse> {
        self.get(
            "convert-to-3wa",
            convert_to_3wa_query(coordinates, options, Format::Json),
        )
        .await
    }

    /// GeoJSON variant of [`convert_to_3wa`](Self::convert_to_3wa)
    pub async fn convert_to_3wa_geojson(
        &self,
        coordinates: Coordinates,
        options: &ConvertOptions,
    ) -> Result<ConvertGeoJson> {
        self.get(
            "convert-to-3wa",
            convert_to_3wa_query(coordinates, options, Format::GeoJson),
        )
        .await
    }

    /// Centre and bounds of the square named by `words`
    pub async fn convert_to_coordinates(
        &self,
        words: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResponse> {
        self.get(
            "convert-to-coordinates",
            convert_to_coordinates_query(words, options, Format::Json),
        )
        .await
    }

    /// GeoJSON variant of [`convert_to_coordinates`](Self::convert_to_coordinates)
    pub async fn convert_to_coordinates_geojson(
        &self,
        words: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertGeoJson> {
        self.get(
            "convert-to-coordinates",
            convert_to_coordinates_query(words, options, Format::GeoJson),
        )
        .await
    }

    /// Suggest addresses for possibly incomplete or misspelled input
    pub async fn autosuggest(
        &self,
        input: &str,
        options: &AutosuggestOptions,
    ) -> Result<AutosuggestResponse> {
        let mut query = vec![("input", input.to_string())];
        options.append_to(&mut query);
        self.get("autosuggest", query).await
    }

    /// Grid lines inside `bounding_box`
    pub async fn grid_section(&self, bounding_box: BoundingBox) -> Result<GridSectionResponse> {
        self.get("grid-section", grid_section_query(bounding_box, Format::Json))
            .await
    }

    /// GeoJSON variant of [`grid_section`](Self::grid_section)
    pub async fn grid_section_geojson(
        &self,
        bounding_box: BoundingBox,
    ) -> Result<GridSectionGeoJson> {
        self.get(
            "grid-section",
            grid_section_query(bounding_box, Format::GeoJson),
        )
        .await
    }

    /// All languages the service can produce addresses in
    pub async fn available_languages(&self) -> Result<AvailableLanguagesResponse> {
        self.get("available-languages", Vec::new()).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, query: QueryPairs) -> Result<R> {
        get_json(&self.transport, &self.config, path, &query).await
    }
}

fn convert_to_3wa_query(
    coordinates: Coordinates,
    options: &ConvertOptions,
    format: Format,
) -> QueryPairs {
    let mut query = vec![
        ("coordinates", coordinates.as_query_param()),
        ("format", format.as_str().to_string()),
    ];
    options.append_to(&mut query);
    query
}

fn convert_to_coordinates_query(
    words: &str,
    options: &ConvertOptions,
    format: Format,
) -> QueryPairs {
    let mut query = vec![
        ("words", words.to_string()),
        ("format", format.as_str().to_string()),
    ];
    options.append_to(&mut query);
    query
}

fn grid_section_query(bounding_box: BoundingBox, format: Format) -> QueryPairs {
    vec![
        ("bounding-box", bounding_box.as_query_param()),
        ("format", format.as_str().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_3wa_query() {
        let query = convert_to_3wa_query(
            Coordinates::new(51.520847, -0.195521),
            &ConvertOptions::default().language("fr"),
            Format::GeoJson,
        );
        assert_eq!(
            query,
            vec![
                ("coordinates", "51.520847,-0.195521".to_string()),
                ("format", "geojson".to_string()),
                ("language", "fr".to_string()),
            ]
        );
    }

    #[test]
    fn test_convert_to_coordinates_query() {
        let query = convert_to_coordinates_query(
            "filled.count.soap",
            &ConvertOptions::default(),
            Format::Json,
        );
        assert_eq!(
            query,
            vec![
                ("words", "filled.count.soap".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_grid_section_query() {
        let query = grid_section_query(
            BoundingBox::new(
                Coordinates::new(52.207988, 0.116126),
                Coordinates::new(52.208867, 0.117540),
            ),
            Format::Json,
        );
        assert_eq!(query[0].0, "bounding-box");
        assert_eq!(query[0].1, "52.207988,0.116126,52.208867,0.117540");
        assert_eq!(query[1], ("format", "json".to_string()));
    }
}
