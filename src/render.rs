//////////////////////////////////////////////////////////////////////
// boundary between the tiling and whatever draws it
//
// a Renderer receives the final triangles plus the label -> style
// map and owns every presentation concern. the cairo renderer (PDF or
// PNG) is only built with the "render" feature; the summary renderer
// just reports what would have been drawn.

use crate::errors::*;
use crate::prototile::{TileLabel, ALL_LABELS};
use crate::style::{StyleMap, TileStyle};
use crate::triangle::{Rect2d, Triangle};
use crate::{Matrix3d, Point2d, Transform2d, Translation2d};
use log::info;
use phf::phf_map;

// one drawable record: vertices, label for lookup, resolved style
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct StyledTriangle {
    pub vertices: [Point2d; 3],
    pub label: TileLabel,
    pub style: TileStyle
}

pub fn styled(tiles: &[Triangle], styles: &StyleMap) -> Vec<StyledTriangle> {
    tiles.iter().map(|t| StyledTriangle {
        vertices: t.vertices,
        label: t.label,
        style: *styles.get(t.label)
    }).collect()
}

pub trait Renderer {
    fn render(&mut self, tiles: &[Triangle], styles: &StyleMap) -> Result<()>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    Pdf,
    Png
}

pub static OUTPUT_FORMATS: phf::Map<&'static str, OutputFormat> = phf_map! {
    "pdf" => OutputFormat::Pdf,
    "png" => OutputFormat::Png,
};

impl OutputFormat {

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png"
        }
    }

}

//////////////////////////////////////////////////////////////////////
//
// make a Transform2d that will translate and scale the given
// contents_rect (input) to the given page_rect (output) with equal
// aspect, returning the scale too.
//
// always includes vertical flip because graphics coordinate system
// is left-handed (y increases going down)

pub fn page_transform(contents_rect: &Rect2d,
                      page_rect: &Rect2d) -> (Transform2d, f64) {

    let cdims = contents_rect.dims();
    let pdims = page_rect.dims();

    let scl = (pdims.component_div(&cdims)).min();

    let vmid = contents_rect.center();
    let pmid = page_rect.center();

    let translate_page = Translation2d::new(pmid[0], pmid[1]);

    let scale = Transform2d::from_matrix_unchecked(
        Matrix3d::new(
            scl, 0.0, 0.0,
            0.0, -scl, 0.0,
            0.0, 0.0, 1.0
        )
    );

    let translate_points = Translation2d::new(-vmid[0], -vmid[1]);

    let transform = translate_page * scale * translate_points;

    (transform, scl)

}

//////////////////////////////////////////////////////////////////////
// renderer that only tallies tiles per label and their extent

#[derive(Debug)]
pub struct SummaryRenderer {
    pub counts: [usize; 4],
    pub bounds: Rect2d
}

impl SummaryRenderer {

    pub fn new() -> Self {
        SummaryRenderer { counts: [0; 4], bounds: Rect2d::empty() }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SummaryRenderer {

    fn render(&mut self, tiles: &[Triangle], styles: &StyleMap) -> Result<()> {

        for record in styled(tiles, styles) {
            self.counts[record.label.index()] += 1;
            for p in &record.vertices {
                self.bounds.expand(p);
            }
        }

        for &label in &ALL_LABELS {
            info!("{:}: {:} tiles", label, self.counts[label.index()]);
        }

        if !self.bounds.is_empty() {
            let dims = self.bounds.dims();
            info!("extent {:.4} x {:.4} centered at ({:.4}, {:.4})",
                  dims.x, dims.y, self.bounds.center().x, self.bounds.center().y);
        }

        Ok(())

    }

}

//////////////////////////////////////////////////////////////////////
// cairo output

#[cfg(feature = "render")]
pub use self::cairo_output::CairoRenderer;

#[cfg(feature = "render")]
mod cairo_output {

    use super::*;
    use std::fs::File;
    use std::path::PathBuf;

    // page margin in points
    const MARGIN: f64 = 12.0;

    pub struct CairoRenderer {
        path: PathBuf,
        format: OutputFormat,
        size: f64 // square page edge in points
    }

    fn draw_tiles(ctx: &cairo::Context,
                  records: &[StyledTriangle],
                  transform: &Transform2d) {

        ctx.set_line_join(cairo::LineJoin::Round);

        for record in records {

            let [p0, p1, p2] = record.vertices;
            let (p0, p1, p2) = (transform * p0, transform * p1, transform * p2);

            let style = &record.style;

            ctx.move_to(p0.x, p0.y);
            ctx.line_to(p1.x, p1.y);
            ctx.line_to(p2.x, p2.y);
            ctx.close_path();

            ctx.set_source_rgba(style.fill[0], style.fill[1], style.fill[2],
                                style.fill_alpha);
            ctx.fill_preserve();

            ctx.set_source_rgb(style.edge[0], style.edge[1], style.edge[2]);
            ctx.set_line_width(style.edge_width);
            ctx.stroke();

        }

    }

    impl CairoRenderer {

        pub fn new(path: PathBuf, format: OutputFormat, size: f64) -> Self {
            CairoRenderer { path: path, format: format, size: size }
        }

    }

    impl Renderer for CairoRenderer {

        fn render(&mut self, tiles: &[Triangle], styles: &StyleMap) -> Result<()> {

            let contents = Rect2d::around(tiles);

            if contents.is_empty() {
                bail!("no tiles to draw");
            }

            let page = Rect2d::new(Point2d::new(MARGIN, MARGIN),
                                   Point2d::new(self.size - MARGIN, self.size - MARGIN));

            let (transform, scl) = page_transform(&contents, &page);

            info!("drawing {:} tiles at {:.2} points per unit", tiles.len(), scl);

            let records = styled(tiles, styles);

            match self.format {

                OutputFormat::Pdf => {

                    let surface = cairo::PdfSurface::new(self.size, self.size, &self.path)?;
                    let ctx = cairo::Context::new(&surface);

                    draw_tiles(&ctx, &records, &transform);

                    ctx.show_page();

                }

                OutputFormat::Png => {

                    let surface = cairo::ImageSurface::create(
                        cairo::Format::ARgb32,
                        self.size.ceil() as i32,
                        self.size.ceil() as i32)?;

                    {
                        let ctx = cairo::Context::new(&surface);

                        ctx.set_source_rgb(1.0, 1.0, 1.0);
                        ctx.paint();

                        draw_tiles(&ctx, &records, &transform);
                    }

                    let mut file = File::create(&self.path)?;
                    surface.write_to_png(&mut file)?;

                }

            }

            info!("wrote {:}", self.path.display());

            Ok(())

        }

    }

}

//////////////////////////////////////////////////////////////////////
