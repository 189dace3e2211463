//! Grid command implementation

use super::AppContext;
use crate::output::print_json;
use anyhow::Result;
use clap::Args;
use w3w_api::{BoundingBox, GridSectionResponse};

/// Arguments for the grid command
#[derive(Debug, Args)]
pub struct GridArgs {
    /// Bounding box as `SOUTH,WEST,NORTH,EAST`
    #[arg(value_name = "S,W,N,E", allow_hyphen_values = true)]
    pub bbox: BoundingBox,

    /// Request GeoJSON and print it
    #[arg(long, conflicts_with = "json")]
    pub geojson: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl GridArgs {
    /// Execute the grid command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let service = ctx.service()?;

        if self.geojson {
            let collection = ctx.block_on(service.v3().grid_section_geojson(self.bbox))??;
            return print_json(&collection, ctx.pretty_json());
        }

        let grid = ctx.block_on(service.v3().grid_section(self.bbox))??;
        log::info!("{} grid line(s)", grid.lines.len());
        if self.json {
            return print_json(&grid, ctx.pretty_json());
        }
        print!("{}", render_grid(&grid));
        Ok(())
    }
}

fn render_grid(grid: &GridSectionResponse) -> String {
    grid.lines
        .iter()
        .map(|line| format!("{} -> {}\n", line.start, line.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use w3w_api::dto::Line;
    use w3w_api::Coordinates;

    #[test]
    fn test_render_grid() {
        let grid = GridSectionResponse {
            lines: vec![Line {
                start: Coordinates::new(52.207988, 0.116126),
                end: Coordinates::new(52.207988, 0.11754),
            }],
        };
        assert_eq!(
            render_grid(&grid),
            "52.207988,0.116126 -> 52.207988,0.117540\n"
        );
    }

    #[test]
    fn test_bbox_parses_from_argument() {
        let bbox: BoundingBox = "52.207988,0.116126,52.208867,0.117540".parse().unwrap();
        assert_eq!(bbox.south_west, Coordinates::new(52.207988, 0.116126));
        assert_eq!(bbox.north_east, Coordinates::new(52.208867, 0.117540));
    }
}
