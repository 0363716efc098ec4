//! This example shows how to split a polygon by a polyline stored in a GeoJSON file.
//!
//! Run this example with the path to a `.geojson` file containing polygons and polylines, and optionally a path to
//! a JSON file with the pipeline configuration. The report is written to stderr and the resulting feature
//! collection (original shapes and the split parts) to stdout.
//!
//! ```shell
//! cargo run --example split_geojson --features geojson -- "./geosplit/examples/data/field_and_road.geojson"
//! ```

use anyhow::{anyhow, Result};
use geosplit::overlay::GeoJsonOverlays;
use geosplit::pipeline::{PipelineConfig, SplitPipelineBuilder};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(file_name) = args.next() else {
        return Err(anyhow!(
            "This example must be run with at least one argument - name of the .geojson file to load"
        ));
    };

    let config = match args.next() {
        Some(config_file) => {
            serde_json::from_str::<PipelineConfig>(&std::fs::read_to_string(config_file)?)?
        }
        None => PipelineConfig::default(),
    };

    let pipeline = SplitPipelineBuilder::from_config(config).build()?;
    let mut overlays = GeoJsonOverlays::from_file(file_name)?;

    let report = pipeline.run(&mut overlays)?;
    eprintln!("{report}");

    println!("{}", overlays.to_string_pretty()?);

    Ok(())
}
