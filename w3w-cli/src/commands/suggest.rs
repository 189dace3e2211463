//! Suggest command implementation

use super::AppContext;
use crate::output::print_json;
use anyhow::Result;
use clap::Args;
use w3w_api::{AutosuggestOptions, AutosuggestResponse, BoundingBox, Circle, Coordinates, Polygon};

/// Arguments for the suggest command
#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Partial or misspelled address, e.g. `filled.count.so`
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Only suggest addresses in these countries (ISO 3166-1 alpha-2)
    #[arg(long, value_name = "CC", value_delimiter = ',')]
    pub country: Vec<String>,

    /// Prefer results near `LAT,LNG`
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub focus: Option<Coordinates>,

    /// Only suggest inside `SOUTH,WEST,NORTH,EAST`
    #[arg(long, value_name = "S,W,N,E", allow_hyphen_values = true)]
    pub bbox: Option<BoundingBox>,

    /// Only suggest inside the circle `LAT,LNG,KM`
    #[arg(long, value_name = "LAT,LNG,KM", allow_hyphen_values = true)]
    pub circle: Option<Circle>,

    /// Only suggest inside the closed polygon `LAT1,LNG1,LAT2,LNG2,...`
    #[arg(long, value_name = "POINTS", allow_hyphen_values = true)]
    pub polygon: Option<Polygon>,

    /// Number of results
    #[arg(short = 'n', long, value_name = "N")]
    pub results: Option<u32>,

    /// How many results should be weighted by focus
    #[arg(long, value_name = "N", requires = "focus")]
    pub focus_results: Option<u32>,

    /// Fallback language for the input
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Do not prefer land over sea
    #[arg(long)]
    pub no_prefer_land: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl SuggestArgs {
    /// Options sent with the request
    pub fn options(&self) -> AutosuggestOptions {
        AutosuggestOptions {
            focus: self.focus,
            clip_to_country: self.country.clone(),
            clip_to_bounding_box: self.bbox,
            clip_to_circle: self.circle,
            clip_to_polygon: self.polygon.clone(),
            language: self.language.clone(),
            prefer_land: self.no_prefer_land.then_some(false),
            locale: None,
            n_results: self.results,
            n_focus_results: self.focus_results,
        }
    }

    /// Execute the suggest command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let service = ctx.service()?;
        let options = self.options();
        log::debug!("autosuggest options: {:?}", options);

        let response = ctx.block_on(service.v3().autosuggest(&self.input, &options))??;
        log::info!("{} suggestion(s)", response.suggestions.len());

        if self.json {
            return print_json(&response, ctx.pretty_json());
        }
        print!("{}", render_suggestions(&response));
        Ok(())
    }
}

fn render_suggestions(response: &AutosuggestResponse) -> String {
    if response.suggestions.is_empty() {
        return "No suggestions\n".to_string();
    }
    let mut out = String::new();
    for s in &response.suggestions {
        out.push_str(&format!(
            "{}. ///{}  {} ({})",
            s.rank, s.words, s.nearest_place, s.country
        ));
        if let Some(km) = s.distance_to_focus_km {
            out.push_str(&format!(", {km} km"));
        }
        out.push('\n');
    }
    out
}
