//////////////////////////////////////////////////////////////////////
// prototile shapes for the P3 (Robinson triangle) tiling
//
// both prototiles are isosceles with the base along +x from the
// origin and the apex above the base midpoint:
//
//   thin:  base 1/phi, height sin(72 deg), apex angle 36 deg
//   thick: base phi,   height sin(36 deg), apex angle 108 deg
//
// every leg has unit length, so a thin and a thick tile of the same
// generation share their legs.

use crate::errors::*;
use phf::phf_map;

pub const PHI: f64 = 1.618033988749895;
pub const INVPHI: f64 = 0.618033988749895;
pub const PI: f64 = std::f64::consts::PI;
pub const DEG: f64 = PI / 180.0;

// sin(72 deg)
pub const THIN_HEIGHT: f64 = 0.9510565162951535;
// (sqrt(5) - 1) / 2
pub const THIN_WIDTH: f64 = INVPHI;

// sin(36 deg)
pub const THICK_HEIGHT: f64 = 0.5877852522924731;
// (1 + sqrt(5)) / 2
pub const THICK_WIDTH: f64 = PHI;

#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum TileShape {
    Thin,
    Thick
}

#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum TileSide {
    Left,
    Right
}

// the four half-rhombus labels; each selects one substitution rule
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum TileLabel {
    ThinLeft,
    ThinRight,
    ThickLeft,
    ThickRight
}

pub const ALL_LABELS: [TileLabel; 4] = [
    TileLabel::ThinLeft,
    TileLabel::ThinRight,
    TileLabel::ThickLeft,
    TileLabel::ThickRight
];

static LABEL_LOOKUP: phf::Map<&'static str, TileLabel> = phf_map! {
    "tL" => TileLabel::ThinLeft,
    "tR" => TileLabel::ThinRight,
    "TL" => TileLabel::ThickLeft,
    "TR" => TileLabel::ThickRight,
};

impl TileLabel {

    pub fn new(shape: TileShape, side: TileSide) -> Self {
        match (shape, side) {
            (TileShape::Thin, TileSide::Left) => TileLabel::ThinLeft,
            (TileShape::Thin, TileSide::Right) => TileLabel::ThinRight,
            (TileShape::Thick, TileSide::Left) => TileLabel::ThickLeft,
            (TileShape::Thick, TileSide::Right) => TileLabel::ThickRight
        }
    }

    // "tL" -> ThinLeft, "TR" -> ThickRight, etc.
    pub fn from_name(name: &str) -> Result<Self> {
        match LABEL_LOOKUP.get(name) {
            Some(&label) => Ok(label),
            None => Err(ErrorKind::UnknownLabel(name.to_string()).into())
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileLabel::ThinLeft => "tL",
            TileLabel::ThinRight => "tR",
            TileLabel::ThickLeft => "TL",
            TileLabel::ThickRight => "TR"
        }
    }

    pub fn shape(self) -> TileShape {
        match self {
            TileLabel::ThinLeft | TileLabel::ThinRight => TileShape::Thin,
            TileLabel::ThickLeft | TileLabel::ThickRight => TileShape::Thick
        }
    }

    pub fn side(self) -> TileSide {
        match self {
            TileLabel::ThinLeft | TileLabel::ThickLeft => TileSide::Left,
            TileLabel::ThinRight | TileLabel::ThickRight => TileSide::Right
        }
    }

    // (ThinLeft) -> 0, (ThickRight) -> 3, etc.
    pub fn index(self) -> usize {
        2*(self.shape() as usize) + (self.side() as usize)
    }

    // base width of the unit prototile
    pub fn width(self) -> f64 {
        match self.shape() {
            TileShape::Thin => THIN_WIDTH,
            TileShape::Thick => THICK_WIDTH
        }
    }

    // apex height of the unit prototile
    pub fn height(self) -> f64 {
        match self.shape() {
            TileShape::Thin => THIN_HEIGHT,
            TileShape::Thick => THICK_HEIGHT
        }
    }

    // how many children one subdivision produces
    pub fn num_children(self) -> usize {
        match self.shape() {
            TileShape::Thin => 2,
            TileShape::Thick => 3
        }
    }

}

impl std::fmt::Display for TileLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//////////////////////////////////////////////////////////////////////
