//! Convert commands implementation

use super::AppContext;
use crate::output::print_json;
use anyhow::Result;
use clap::Args;
use w3w_api::{ConvertOptions, ConvertResponse, Coordinates};

/// Options shared by both convert directions
#[derive(Debug, Args)]
pub struct ConvertFlags {
    /// Language of the returned address (ISO 639-1, e.g. `fr`)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Language variant, e.g. `oo_la`
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Request GeoJSON and print it
    #[arg(long, conflicts_with = "json")]
    pub geojson: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl ConvertFlags {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            language: self.language.clone(),
            locale: self.locale.clone(),
        }
    }
}

/// Arguments for the convert-to-3wa command
#[derive(Debug, Args)]
pub struct ConvertTo3waArgs {
    /// Coordinates as `LAT,LNG`
    #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub coordinates: Coordinates,

    #[command(flatten)]
    pub flags: ConvertFlags,
}

impl ConvertTo3waArgs {
    /// Execute the convert-to-3wa command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let service = ctx.service()?;
        let options = self.flags.options();
        log::info!("Converting {} to a three-word address", self.coordinates);

        if self.flags.geojson {
            let collection = ctx.block_on(
                service
                    .v3()
                    .convert_to_3wa_geojson(self.coordinates, &options),
            )??;
            return print_json(&collection, ctx.pretty_json());
        }

        let square = ctx.block_on(service.v3().convert_to_3wa(self.coordinates, &options))??;
        print_square(&square, self.flags.json, ctx.pretty_json())
    }
}

/// Arguments for the convert-to-coords command
#[derive(Debug, Args)]
pub struct ConvertToCoordsArgs {
    /// Three-word address, e.g. `filled.count.soap`
    #[arg(value_name = "WORDS")]
    pub words: String,

    #[command(flatten)]
    pub flags: ConvertFlags,
}

impl ConvertToCoordsArgs {
    /// Execute the convert-to-coords command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let words = self.words.trim_start_matches('/');
        if !w3w_core::is_full_match(words) {
            log::warn!("'{}' is not shaped like a three-word address", self.words);
        }

        let service = ctx.service()?;
        let options = self.flags.options();
        log::info!("Converting {words} to coordinates");

        if self.flags.geojson {
            let collection = ctx.block_on(
                service
                    .v3()
                    .convert_to_coordinates_geojson(words, &options),
            )??;
            return print_json(&collection, ctx.pretty_json());
        }

        let square = ctx.block_on(service.v3().convert_to_coordinates(words, &options))??;
        print_square(&square, self.flags.json, ctx.pretty_json())
    }
}

fn print_square(square: &ConvertResponse, json: bool, pretty: bool) -> Result<()> {
    if json {
        return print_json(square, pretty);
    }
    print!("{}", render_square(square));
    Ok(())
}

fn render_square(square: &ConvertResponse) -> String {
    let mut out = format!(
        "words:         ///{}\ncoordinates:   {}\nnearest place: {}\ncountry:       {}\n",
        square.words, square.coordinates, square.nearest_place, square.country
    );
    if !square.map_url.is_empty() {
        out.push_str(&format!("map:           {}\n", square.map_url));
    }
    out
}
