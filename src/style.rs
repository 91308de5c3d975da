//////////////////////////////////////////////////////////////////////
// per-label drawing styles handed to a Renderer

use crate::errors::*;
use crate::prototile::TileLabel;
use crate::Vec3d;
use phf::phf_map;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TileStyle {
    pub fill: Vec3d,      // rgb in [0, 1]
    pub fill_alpha: f64,  // opacity in [0, 1]
    pub edge: Vec3d,      // rgb in [0, 1]
    pub edge_width: f64   // in output points
}

impl TileStyle {

    pub fn new(fill: Vec3d, fill_alpha: f64) -> Self {
        TileStyle {
            fill: fill,
            fill_alpha: fill_alpha,
            edge: Vec3d::zeros(),
            edge_width: 0.3
        }
    }

}

// which labels a style item applies to, as a range of label indices
static STYLE_ITEMS: phf::Map<&'static str, (usize, usize)> = phf_map! {
    "tL" => (0, 1),
    "tR" => (1, 2),
    "TL" => (2, 3),
    "TR" => (3, 4),
    "thin" => (0, 2),
    "thick" => (2, 4),
    "all" => (0, 4),
};

// label -> style, indexed by TileLabel::index()
#[derive(Debug, PartialEq, Clone)]
pub struct StyleMap {
    styles: [TileStyle; 4]
}

impl Default for StyleMap {

    // half-transparent blue thin tiles, red thick tiles, thin black edges
    fn default() -> Self {

        let thin = TileStyle::new(Vec3d::new(0.0, 0.0, 1.0), 0.5);
        let thick = TileStyle::new(Vec3d::new(1.0, 0.0, 0.0), 0.5);

        StyleMap { styles: [thin, thin, thick, thick] }

    }

}

// 0-255 channel to [0, 1]
pub fn rgb_from_bytes(r: u8, g: u8, b: u8) -> Vec3d {
    Vec3d::new(r as f64, g as f64, b as f64) / 255.0
}

impl StyleMap {

    pub fn get(&self, label: TileLabel) -> &TileStyle {
        &self.styles[label.index()]
    }

    fn item_range(item: &str) -> Result<(usize, usize)> {
        match STYLE_ITEMS.get(item) {
            Some(&range) => Ok(range),
            None => {
                let mut extended: Vec<&str> = Vec::new();
                extended.extend(STYLE_ITEMS.keys());
                bail!("invalid style item \"{:}\", expected one of: {{\"{:}\"}}",
                      item, extended.join("\", \""))
            }
        }
    }

    // set fill for every label named by item
    pub fn set_fill(&mut self, item: &str, fill: Vec3d, alpha: f64) -> Result<()> {

        if !(0.0..=1.0).contains(&alpha) {
            bail!("fill alpha {:} outside [0, 1]", alpha);
        }

        let (i0, i1) = Self::item_range(item)?;

        for style in &mut self.styles[i0..i1] {
            style.fill = fill;
            style.fill_alpha = alpha;
        }

        Ok(())

    }

    // edges are shared between neighbors so they are styled globally
    pub fn set_edge(&mut self, edge: Vec3d, width: f64) -> Result<()> {

        if width < 0.0 {
            bail!("negative edge width {:}", width);
        }

        for style in &mut self.styles {
            style.edge = edge;
            style.edge_width = width;
        }

        Ok(())

    }

}

//////////////////////////////////////////////////////////////////////
