/*

usage: penrose_rs TILINGFILE

reads a tiling description (see spec.rs), deflates its seeds and
draws the result next to the input as TILINGFILE-stem.pdf / .png.
built without the "render" feature it only reports tile counts.

 */

use std::path::Path;

#[macro_use]
extern crate error_chain;

use log::info;

use penrose_rs::errors::*;
use penrose_rs::render::{Renderer, SummaryRenderer};
use penrose_rs::tiling::tile_count;
use penrose_rs::{StyleMap, Triangle, TilingSpec};

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(feature = "render")]
fn draw(filename: &Path, ts: &TilingSpec, tiles: &[Triangle], styles: &StyleMap) -> Result<()> {

    let format = ts.output_format();
    let output = filename.with_extension(format.extension());

    let mut renderer = penrose_rs::render::CairoRenderer::new(output, format, ts.page_size());

    renderer.render(tiles, styles)

}

#[cfg(not(feature = "render"))]
fn draw(_filename: &Path, _ts: &TilingSpec, _tiles: &[Triangle], _styles: &StyleMap) -> Result<()> {

    info!("built without the render feature, nothing drawn");

    Ok(())

}

fn run() -> Result<()> {

    setup_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {:?} TILINGFILE", args[0]);
        std::process::exit(1);
    }

    let filename = Path::new(&args[1]);

    let ts = TilingSpec::from_file(filename)?;

    let seeds = ts.seeds();
    let expected: usize = seeds.iter().map(|s| tile_count(s.label, ts.depth())).sum();

    info!("deflating {:} seed(s) from {:} to depth {:}, expecting {:} tiles",
          seeds.len(), ts.source_name(), ts.depth(), expected);

    let tiles = ts.tiles()?;
    let styles = ts.styles()?;

    debug_assert!(tiles.len() == expected);

    let mut summary = SummaryRenderer::new();
    summary.render(&tiles, &styles)?;

    draw(filename, &ts, &tiles, &styles)

}

quick_main!(run);
