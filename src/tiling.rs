//////////////////////////////////////////////////////////////////////
// breadth-first deflation of seed triangles
//
// the seed itself never appears in the output: it is subdivided once
// to form the starting frontier, then every further level replaces the
// whole frontier by the concatenation of its children.

use crate::deflate::subdivide;
use crate::errors::*;
use crate::prototile::{TileLabel, TileShape, THICK_HEIGHT, THICK_WIDTH};
use crate::triangle::Triangle;
use crate::{Isometry2d, Point2d};
use log::debug;
use phf::phf_map;
use rayon::prelude::*;

// frontiers at least this large are subdivided on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

// next frontier from the current one; children of frontier[0] come
// before children of frontier[1] etc. whichever path is taken
fn expand(frontier: &[Triangle]) -> Vec<Triangle> {

    if frontier.len() >= PARALLEL_THRESHOLD {

        frontier.par_iter().flat_map_iter(subdivide).collect()

    } else {

        let mut next = Vec::with_capacity(3 * frontier.len());

        for tri in frontier {
            next.extend(subdivide(tri));
        }

        next

    }

}

// subdivide seed once, then depth more times
pub fn deflate(seed: &Triangle, depth: usize) -> Result<Vec<Triangle>> {

    seed.validate().chain_err(|| format!("invalid {:} seed", seed.label))?;

    let mut frontier = subdivide(seed);

    for level in 0..depth {

        frontier = expand(&frontier);

        debug!("{:} seed: level {:} of {:} has {:} tiles",
               seed.label, level + 1, depth, frontier.len());

    }

    Ok(frontier)

}

// deflate several independent seeds and concatenate in seed order
pub fn deflate_all(seeds: &[Triangle], depth: usize) -> Result<Vec<Triangle>> {

    let mut tiles = Vec::new();

    for seed in seeds {
        tiles.extend(deflate(seed, depth)?);
    }

    Ok(tiles)

}

// number of tiles deflate(seed, depth) returns for a seed with this label
pub fn tile_count(label: TileLabel, depth: usize) -> usize {

    // thin -> 1 thin + 1 thick, thick -> 1 thin + 2 thick
    let (mut thin, mut thick) = match label.shape() {
        TileShape::Thin => (1usize, 1usize),
        TileShape::Thick => (1usize, 2usize)
    };

    for _ in 0..depth {
        let next_thin = thin + thick;
        let next_thick = thin + 2*thick;
        thin = next_thin;
        thick = next_thick;
    }

    thin + thick

}

//////////////////////////////////////////////////////////////////////
// seed triangles: the two halves of a thick rhombus sharing the
// long diagonal as their base

pub struct Seeds;

// seed generator taking base length and base angle
pub type SeedFunc = fn(f64, f64) -> Vec<Triangle>;

// define a lookup table matching source names to seed generators
pub static SEED_SOURCES: phf::Map<&'static str, SeedFunc> = phf_map! {
    "rhombus" => Seeds::rhombus,
    "left_half" => Seeds::left_half,
    "right_half" => Seeds::right_half,
};

impl Seeds {

    // thick half tile with base from origin along angle, apex to the left
    fn half(origin: Point2d, base: f64, angle: f64, label: TileLabel) -> Triangle {

        let frame = Isometry2d::new(origin.coords, angle);
        let height = base / THICK_WIDTH * THICK_HEIGHT;

        Triangle::from_local(&frame,
                             Point2d::origin(),
                             Point2d::new(base, 0.0),
                             Point2d::new(0.5*base, height),
                             label)

    }

    // ThickLeft on the left of the diagonal from the origin
    pub fn left(base: f64, angle: f64) -> Triangle {
        Self::half(Point2d::origin(), base, angle, TileLabel::ThickLeft)
    }

    // ThickRight with the diagonal reversed, so its apex mirrors left()
    pub fn right(base: f64, angle: f64) -> Triangle {
        let far = Point2d::new(base * angle.cos(), base * angle.sin());
        Self::half(far, base, angle + std::f64::consts::PI, TileLabel::ThickRight)
    }

    pub fn rhombus(base: f64, angle: f64) -> Vec<Triangle> {
        vec![Self::left(base, angle), Self::right(base, angle)]
    }

    pub fn left_half(base: f64, angle: f64) -> Vec<Triangle> {
        vec![Self::left(base, angle)]
    }

    pub fn right_half(base: f64, angle: f64) -> Vec<Triangle> {
        vec![Self::right(base, angle)]
    }

    // default placement: base phi along +x
    pub fn default_rhombus() -> Vec<Triangle> {
        Self::rhombus(THICK_WIDTH, 0.0)
    }

    pub fn from_source(name: &str, base: f64, angle: f64) -> Result<Vec<Triangle>> {
        match SEED_SOURCES.get(name) {
            Some(func) => Ok(func(base, angle)),
            None => bail!("unknown seed source: {:}", name)
        }
    }

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;
    use crate::prototile::*;
    use approx::assert_relative_eq;

    #[test]
    fn depth_zero_is_one_subdivision() {
        let seed = Triangle::prototile(TileLabel::ThickLeft);
        assert_eq!(deflate(&seed, 0).unwrap(), subdivide(&seed));
    }

    #[test]
    fn frontier_sizes_are_fibonacci() {

        let seed = Triangle::prototile(TileLabel::ThickLeft);
        let expected = [3, 8, 21, 55, 144, 377, 987];

        for (depth, &n) in expected.iter().enumerate() {
            assert_eq!(deflate(&seed, depth).unwrap().len(), n);
            assert_eq!(tile_count(TileLabel::ThickLeft, depth), n);
        }

        let thin = Triangle::prototile(TileLabel::ThinRight);
        for depth in 0..5 {
            assert_eq!(deflate(&thin, depth).unwrap().len(), tile_count(TileLabel::ThinRight, depth));
        }

    }

    #[test]
    fn growth_is_bounded_by_three_per_level() {
        for depth in 0..8 {
            assert!(tile_count(TileLabel::ThickRight, depth) <= 3usize.pow(depth as u32) * 3);
        }
    }

    #[test]
    fn parallel_expansion_keeps_order() {

        let seed = Triangle::prototile(TileLabel::ThickRight);
        let frontier = deflate(&seed, 8).unwrap();
        assert!(frontier.len() >= PARALLEL_THRESHOLD);

        let mut sequential = Vec::new();
        for tri in &frontier {
            sequential.extend(subdivide(tri));
        }

        assert_eq!(expand(&frontier), sequential);

    }

    #[test]
    fn default_rhombus_matches_fixed_coordinates() {

        let seeds = Seeds::default_rhombus();
        assert_eq!(seeds.len(), 2);

        let left = &seeds[0];
        let right = &seeds[1];

        let expected_left = [(0.0, 0.0), (PHI, 0.0), (0.5*PHI, THICK_HEIGHT)];
        let expected_right = [(PHI, 0.0), (0.0, 0.0), (0.5*PHI, -THICK_HEIGHT)];

        assert_eq!(left.label, TileLabel::ThickLeft);
        assert_eq!(right.label, TileLabel::ThickRight);

        for (p, &(x, y)) in left.vertices.iter().zip(expected_left.iter()) {
            assert_relative_eq!(p.x, x, epsilon = 1e-12);
            assert_relative_eq!(p.y, y, epsilon = 1e-12);
        }

        for (p, &(x, y)) in right.vertices.iter().zip(expected_right.iter()) {
            assert_relative_eq!(p.x, x, epsilon = 1e-12);
            assert_relative_eq!(p.y, y, epsilon = 1e-12);
        }

        assert!(left.is_well_ordered());
        assert!(right.is_well_ordered());

    }

    #[test]
    fn rotated_rhombus_halves_share_their_diagonal() {

        let seeds = Seeds::rhombus(2.5, 100.0 * DEG);
        let (left, right) = (&seeds[0], &seeds[1]);

        assert_relative_eq!(left.vertices[0].x, right.vertices[1].x, epsilon = 1e-12);
        assert_relative_eq!(left.vertices[0].y, right.vertices[1].y, epsilon = 1e-12);
        assert_relative_eq!(left.vertices[1].x, right.vertices[0].x, epsilon = 1e-12);
        assert_relative_eq!(left.vertices[1].y, right.vertices[0].y, epsilon = 1e-12);
        assert_relative_eq!(left.base_length(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(left.area(), right.area(), epsilon = 1e-12);

    }

    #[test]
    fn seeds_deflate_independently() {

        let seeds = Seeds::default_rhombus();
        let all = deflate_all(&seeds, 3).unwrap();

        let mut expected = deflate(&seeds[0], 3).unwrap();
        expected.extend(deflate(&seeds[1], 3).unwrap());

        assert_eq!(all, expected);

    }

    #[test]
    fn sources_are_looked_up_by_name() {
        assert_eq!(Seeds::from_source("rhombus", PHI, 0.0).unwrap().len(), 2);
        assert_eq!(Seeds::from_source("left_half", PHI, 0.0).unwrap()[0].label, TileLabel::ThickLeft);
        assert_eq!(Seeds::from_source("right_half", PHI, 0.0).unwrap()[0].label, TileLabel::ThickRight);
        assert!(Seeds::from_source("kite", PHI, 0.0).is_err());
    }

    #[test]
    fn degenerate_seed_is_an_error() {
        let seed = Seeds::left(0.0, 0.0);
        assert!(deflate(&seed, 2).is_err());
    }

}
