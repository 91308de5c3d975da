//! End-to-end tests for deflating seeds into finished tilings.
//!
//! These check the tiling as a whole: frontier sizes, area, the
//! edge-to-edge structure of the result and the per-tile laws at every
//! depth.

use std::collections::HashMap;

use approx::assert_relative_eq;
use penrose_rs::prototile::{ALL_LABELS, INVPHI, PHI, THICK_HEIGHT, THIN_HEIGHT, THIN_WIDTH};
use penrose_rs::{deflate, deflate_all, subdivide, tile_count, Point2d, Seeds, TileLabel, Triangle};

// =============================================================================
// Helpers
// =============================================================================

type Key = (i64, i64);

fn key(p: &Point2d) -> Key {
    ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64)
}

fn total_area(tiles: &[Triangle]) -> f64 {
    tiles.iter().map(|t| t.area()).sum()
}

fn expected_children(label: TileLabel) -> Vec<TileLabel> {
    match label {
        TileLabel::ThinLeft => vec![TileLabel::ThinLeft, TileLabel::ThickLeft],
        TileLabel::ThinRight => vec![TileLabel::ThinRight, TileLabel::ThickRight],
        TileLabel::ThickLeft => vec![TileLabel::ThickRight, TileLabel::ThickLeft, TileLabel::ThinRight],
        TileLabel::ThickRight => vec![TileLabel::ThickRight, TileLabel::ThinLeft, TileLabel::ThickLeft],
    }
}

// directed edge -> number of tiles using it
fn directed_edges(tiles: &[Triangle]) -> HashMap<(Key, Key), usize> {
    let mut edges = HashMap::new();
    for t in tiles {
        for i in 0..3 {
            let a = key(&t.vertices[i]);
            let b = key(&t.vertices[(i + 1) % 3]);
            *edges.entry((a, b)).or_insert(0) += 1;
        }
    }
    edges
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn thick_seed_subdivides_into_three() {
    let seed = Triangle::new(
        Point2d::new(0.0, 0.0),
        Point2d::new(PHI, 0.0),
        Point2d::new(PHI / 2.0, THICK_HEIGHT),
        TileLabel::ThickLeft,
    );

    let children = subdivide(&seed);
    let labels: Vec<TileLabel> = children.iter().map(|t| t.label).collect();

    assert_eq!(labels, vec![TileLabel::ThickRight, TileLabel::ThickLeft, TileLabel::ThinRight]);
    assert_relative_eq!(total_area(&children), 0.5 * PHI * THICK_HEIGHT, epsilon = 1e-9);
}

#[test]
fn thin_seed_subdivides_into_two() {
    let seed = Triangle::new(
        Point2d::new(0.0, 0.0),
        Point2d::new(THIN_WIDTH, 0.0),
        Point2d::new(THIN_WIDTH / 2.0, THIN_HEIGHT),
        TileLabel::ThinLeft,
    );

    let children = subdivide(&seed);
    let labels: Vec<TileLabel> = children.iter().map(|t| t.label).collect();

    assert_eq!(labels, vec![TileLabel::ThinLeft, TileLabel::ThickLeft]);
    assert_relative_eq!(total_area(&children), 0.5 * THIN_WIDTH * THIN_HEIGHT, epsilon = 1e-9);
}

// =============================================================================
// Whole-tiling properties
// =============================================================================

#[test]
fn rhombus_at_reference_depth() {
    let seeds = Seeds::default_rhombus();
    let tiles = deflate_all(&seeds, 6).unwrap();

    assert_eq!(tiles.len(), 2 * 987);
    assert_eq!(tiles.len(), tile_count(TileLabel::ThickLeft, 6) + tile_count(TileLabel::ThickRight, 6));
    assert_relative_eq!(total_area(&tiles), total_area(&seeds), max_relative = 1e-9);
    assert!(tiles.iter().all(|t| t.is_well_ordered()));
}

#[test]
fn tiling_is_edge_to_edge_without_seams() {
    let seeds = Seeds::default_rhombus();

    for depth in 0..5 {
        let tiles = deflate_all(&seeds, depth).unwrap();
        let edges = directed_edges(&tiles);

        // no two tiles traverse an edge the same way: no overlaps, no flips
        assert!(edges.values().all(|&n| n == 1), "depth {}: repeated directed edge", depth);

        // unpaired edges make up the rhombus outline (four unit legs)
        let mut boundary = 0.0;
        for &(a, b) in edges.keys() {
            if !edges.contains_key(&(b, a)) {
                let dx = (b.0 - a.0) as f64 * 1e-6;
                let dy = (b.1 - a.1) as f64 * 1e-6;
                boundary += (dx * dx + dy * dy).sqrt();
            }
        }

        assert_relative_eq!(boundary, 4.0, epsilon = 1e-4);
    }
}

#[test]
fn laws_hold_at_every_depth() {
    for &label in &ALL_LABELS {
        let seed = Triangle::prototile(label);

        for depth in 0..5 {
            for tile in deflate(&seed, depth).unwrap() {
                let children = subdivide(&tile);
                let labels: Vec<TileLabel> = children.iter().map(|t| t.label).collect();

                assert_eq!(labels, expected_children(tile.label));
                assert_relative_eq!(total_area(&children), tile.area(), max_relative = 1e-9);

                for child in &children {
                    assert!(child.is_well_ordered());
                    assert_relative_eq!(child.scale(), INVPHI * tile.scale(), max_relative = 1e-9);
                    assert!(child.scale() < tile.scale());
                }
            }
        }
    }
}

#[test]
fn frontier_scale_shrinks_by_phi_per_level() {
    let seed = Triangle::prototile(TileLabel::ThinRight);

    for depth in 0..6 {
        let expected = INVPHI.powi(depth as i32 + 1);
        for tile in deflate(&seed, depth).unwrap() {
            assert_relative_eq!(tile.scale(), expected, max_relative = 1e-9);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let seeds = Seeds::rhombus(2.0, 0.3);
    assert_eq!(deflate_all(&seeds, 5).unwrap(), deflate_all(&seeds, 5).unwrap());
}

#[test]
fn growth_is_bounded() {
    for &label in &ALL_LABELS {
        let seed = Triangle::prototile(label);
        for depth in 0..7 {
            let n = deflate(&seed, depth).unwrap().len();
            assert!(n <= 3usize.pow(depth as u32) * label.num_children());
        }
    }
}
