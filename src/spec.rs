//////////////////////////////////////////////////////////////////////
// tiling description files
//
// one keyword per line, '#' starts a comment:
//
//   source rhombus depth 6
//   base 1.618
//   angle_deg 18
//   fill thick 200 40 40 0.5
//   fill tL 40 40 200 0.75
//   edge 0 0 0 0.3
//   format png
//   size 800
//
// only source is required; every keyword but fill may appear once.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::*;
use crate::prototile::{DEG, THICK_WIDTH};
use crate::render::{OutputFormat, OUTPUT_FORMATS};
use crate::style::{rgb_from_bytes, StyleMap};
use crate::tiling::{deflate_all, SeedFunc, SEED_SOURCES};
use crate::triangle::Triangle;
use crate::Vec3d;
use log::warn;

// tile counts grow by ~phi^2 per level; 20 levels is ~10^8 tiles
pub const MAX_DEPTH: usize = 20;

// deeper than this is slow enough to mention
const WARN_DEPTH: usize = 12;

pub const DEFAULT_SIZE: f64 = 800.0;

//////////////////////////////////////////////////////////////////////
// overengineered macro for parsing keyword arguments

macro_rules! parse_tokens {

    // finalizer - no more input to match, just error if remaining
    // input or return collected outputs
    ($it:ident { } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            Some(value) => Err(format!("found extra token(s) starting with \"{:}\"", value)),
            None => Ok(($($tuple),*))
        }
    );

    // string literal
    ($it:ident { $str:literal, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token \"{:}\"", $str)),
            Some(value) => if value == &$str {
                parse_tokens!( $it { $($ts)* } -> { $($tuple,)* } )
            } else {
                Err(format!("unmatched string literal: expected \"{:}\" but got \"{:}\"", $str, value))
            }
        }
    );

    // string map
    ($it:ident { $name:ident from $map:expr, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(&value) => {
                if let Some(&k) = $map.get(value) {
                    let $name = (value.to_string(), k);
                    parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
                } else {
                    let mut extended: Vec<&str> = Vec::new();
                    extended.extend($map.keys());
                    Err(format!("unexpected value \"{:}\" for {:}, expected one of: {{\"{:}\"}}",
                                value, stringify!($name), extended.join("\", \"") ))
                }
            }
        }
    );

    // name, type pair
    ($it:ident { $name:ident : $type:ident, $($ts:tt)* } -> { $($tuple:ident,)* } ) => (
        match $it.next() {
            None => Err(format!("missing token for {:}", stringify!($name)) ),
            Some(value) => if let Ok($name) = value.parse::<$type>() {
                parse_tokens!( $it { $($ts)* } -> { $($tuple,)* $name, } )
            } else {
                Err(format!("error parsing {:} as type {:}",
                            value, stringify!($type)))
            }
        }
    );

    // Entry point
    ($a:expr, { $($ts:tt)+ }) => (
        {
            let mut it = $a.iter();
            parse_tokens!( it { $($ts)* , } -> { } )
        }
    );

}

//////////////////////////////////////////////////////////////////////
// macros for merging and checking individual fields of TilingSpec

macro_rules! copy_field {

    ($dst:ident, $src:ident, $field:ident) => (
        if $src.$field.is_some() {
            if $dst.$field.is_some() {
                bail!("{:} is already set", stringify!($field));
            }
            $dst.$field = $src.$field;
        }
    )

}

macro_rules! ensure_field {

    ($ts:ident, $fvec:ident, $field:ident) => (
        if $ts.$field.is_none() {
            $fvec.push(stringify!($field));
        }
    )

}

//////////////////////////////////////////////////////////////////////

// a fill line: item name, rgb, alpha
#[derive(Debug, Clone)]
struct Fill {
    item: String,
    rgb: Vec3d,
    alpha: f64
}

// everything needed to produce and draw a tiling
#[derive(Debug, Clone)]
pub struct TilingSpec {
    pub source: Option<(String, SeedFunc)>,
    pub depth: Option<usize>,
    pub base: Option<f64>,
    pub angle: Option<f64>,                 // radians
    pub edge: Option<(Vec3d, f64)>,         // rgb, width in points
    pub format: Option<(String, OutputFormat)>,
    pub size: Option<f64>,                  // page edge in points
    fills: Vec<Fill>
}

impl TilingSpec {

    fn new() -> TilingSpec {
        TilingSpec {
            source: None,
            depth: None,
            base: None,
            angle: None,
            edge: None,
            format: None,
            size: None,
            fills: vec![]
        }
    }

    fn update(&mut self, other: TilingSpec) -> Result<()> {

        copy_field!(self, other, source);
        copy_field!(self, other, depth);
        copy_field!(self, other, base);
        copy_field!(self, other, angle);
        copy_field!(self, other, edge);
        copy_field!(self, other, format);
        copy_field!(self, other, size);

        self.fills.extend(other.fills);

        Ok(())

    }

    fn parse_keyword(keyword: &str, rest: &[&str]) -> Result<TilingSpec> {

        let mut update = TilingSpec::new();

        match keyword {

            "source" => {

                let (source, depth) = parse_tokens!(rest, {
                    source from SEED_SOURCES,
                    "depth",
                    depth : usize
                })?;

                if depth > MAX_DEPTH {
                    bail!("depth {:} exceeds maximum of {:}", depth, MAX_DEPTH);
                }

                if depth > WARN_DEPTH {
                    warn!("depth {:} will produce a very large tiling", depth);
                }

                update.source = Some(source);
                update.depth = Some(depth);

            },

            "base" => {

                let base = parse_tokens!(rest, { base: f64 })?;

                if !(base > 0.0) || !base.is_finite() {
                    bail!("base must be positive, got {:}", base);
                }

                update.base = Some(base);

            },

            "angle_rad" | "angle_deg" => {

                let mut angle = parse_tokens!(rest, { angle: f64 })?;

                if keyword.ends_with("deg") {
                    angle *= DEG;
                }

                update.angle = Some(angle);

            },

            "fill" => {

                let (item, r, g, b, alpha) = parse_tokens!(rest, {
                    item: String, r: u8, g: u8, b: u8, alpha: f64
                })?;

                let rgb = rgb_from_bytes(r, g, b);

                // check item and alpha now so errors get a line number
                StyleMap::default().set_fill(&item, rgb, alpha)?;

                update.fills.push(Fill { item: item, rgb: rgb, alpha: alpha });

            },

            "edge" => {

                let (r, g, b, width) = parse_tokens!(rest, {
                    r: u8, g: u8, b: u8, width: f64
                })?;

                let rgb = rgb_from_bytes(r, g, b);

                StyleMap::default().set_edge(rgb, width)?;

                update.edge = Some((rgb, width));

            },

            "format" => {

                let format = parse_tokens!(rest, { format from OUTPUT_FORMATS })?;

                update.format = Some(format);

            },

            "size" => {

                let size = parse_tokens!(rest, { size: f64 })?;

                if !(size > 0.0) {
                    bail!("size must be positive, got {:}", size);
                }

                update.size = Some(size);

            },

            _ => {
                bail!("unrecognized keyword");
            }

        };

        Ok(update)

    }

    fn update_from(&mut self, line: &str) -> Result<()> {

        let mut trimmed = line.trim();

        if let Some(pos) = trimmed.find('#') {
            trimmed = &trimmed[0..pos];
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        if tokens.is_empty() {
            return Ok(());
        }

        let keyword = tokens[0];
        let rest = &tokens[1..];

        let update = Self::parse_keyword(keyword, rest).chain_err(
            || format!("while parsing keyword {:}", keyword))?;

        self.update(update)

    }

    pub fn parse(filename: &str, istr: &mut impl BufRead) -> Result<TilingSpec> {

        let mut ts = TilingSpec::new();
        let mut lineno = 0;

        loop {

            let mut line = String::new();

            lineno += 1;

            let len = istr.read_line(&mut line).chain_err(|| format!("{:}:{:}: read error", filename, lineno))?;

            if len == 0 {
                break;
            }

            ts.update_from(line.as_str()).chain_err(|| format!("{:}:{:}: parse error", filename, lineno))?;

        }

        let mut unset_fields = Vec::new();

        ensure_field!(ts, unset_fields, source);
        ensure_field!(ts, unset_fields, depth);

        if !unset_fields.is_empty() {
            bail!("{:}: the following field(s) were unset: {:}",
                  filename, unset_fields.as_slice().join(", "));
        }

        Ok(ts)

    }

    pub fn from_file(path: &Path) -> Result<TilingSpec> {

        let filename = path.display().to_string();

        let f = File::open(path).chain_err(|| format!("opening {:}", filename))?;
        let mut reader = BufReader::new(f);

        Self::parse(&filename, &mut reader)

    }

    //////////////////////////////////////////////////

    pub fn source_name(&self) -> &str {
        match &self.source {
            Some((name, _)) => name.as_str(),
            None => "rhombus"
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.unwrap_or(0)
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            Some((_, format)) => format,
            None => OutputFormat::Pdf
        }
    }

    pub fn page_size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn seeds(&self) -> Vec<Triangle> {

        let base = self.base.unwrap_or(THICK_WIDTH);
        let angle = self.angle.unwrap_or(0.0);

        match &self.source {
            Some((_, func)) => func(base, angle),
            None => vec![]
        }

    }

    pub fn tiles(&self) -> Result<Vec<Triangle>> {
        deflate_all(&self.seeds(), self.depth())
    }

    // fills in file order, then the edge
    pub fn styles(&self) -> Result<StyleMap> {

        let mut styles = StyleMap::default();

        for fill in &self.fills {
            styles.set_fill(&fill.item, fill.rgb, fill.alpha)?;
        }

        if let Some((rgb, width)) = self.edge {
            styles.set_edge(rgb, width)?;
        }

        Ok(styles)

    }

}

//////////////////////////////////////////////////////////////////////
