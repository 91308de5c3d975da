//////////////////////////////////////////////////////////////////////
// deflation: replace one Robinson triangle by 2 (thin) or 3 (thick)
// smaller ones
//
// each rule is solved in the parent's local frame, where the base runs
// from the origin to (base, 0) and the apex sits above the base
// midpoint. the local points are then carried into the plane by the
// parent's frame (rotate by the base angle, translate to v0), so only
// the base length and the frame are read from the parent.
//
// substitution table:
//
//   tL -> [tL, TL]
//   tR -> [tR, TR]
//   TL -> [TR, TL, tR]
//   TR -> [TR, tL, TL]
//
// every child keeps the apex to the left of its directed base, and has
// 1/phi times the parent's size relative to its own prototile.

use crate::errors::*;
use crate::prototile::{TileLabel, THICK_HEIGHT, THICK_WIDTH, THIN_HEIGHT, THIN_WIDTH};
use crate::triangle::Triangle;
use crate::{Isometry2d, Point2d};

// point at distance r and angle theta from the local origin
fn polar(r: f64, theta: f64) -> Point2d {
    Point2d::new(r * theta.cos(), r * theta.sin())
}

//////////////////////////////////////////////////////////////////////
// quantities shared by both thin rules

struct ThinSplit {
    leg: f64,   // length of either leg
    h: f64,     // distance along a leg from its base end to the split point
    alpha: f64, // base angle (72 deg)
}

impl ThinSplit {

    fn new(base: f64) -> Self {

        let rise = base / THIN_WIDTH * THIN_HEIGHT;
        let leg = ((0.5*base).powi(2) + rise.powi(2)).sqrt();

        let scale = base / leg;
        let h = 2.0 * (base.powi(2) - (scale * rise).powi(2)).sqrt();
        let alpha = (THIN_HEIGHT / (0.5*THIN_WIDTH)).atan();

        ThinSplit { leg: leg, h: h, alpha: alpha }

    }

    fn apex(&self) -> Point2d {
        polar(self.leg, self.alpha)
    }

}

fn thin_left(frame: &Isometry2d, base: f64) -> Vec<Triangle> {

    let s = ThinSplit::new(base);

    let origin = Point2d::origin();
    let end = Point2d::new(base, 0.0);

    // on the left leg, h from the origin
    let split = polar(s.h, s.alpha);

    vec![
        Triangle::from_local(frame, split, origin, end, TileLabel::ThinLeft),
        Triangle::from_local(frame, end, s.apex(), split, TileLabel::ThickLeft)
    ]

}

fn thin_right(frame: &Isometry2d, base: f64) -> Vec<Triangle> {

    let s = ThinSplit::new(base);

    let origin = Point2d::origin();
    let end = Point2d::new(base, 0.0);

    // on the right leg, h from the end of the base
    let run = base - s.h * s.alpha.cos();
    let rise = s.h * s.alpha.sin();

    let radius = (rise.powi(2) + run.powi(2)).sqrt();
    let theta = rise.atan2(run);

    let split = polar(radius, theta);

    vec![
        Triangle::from_local(frame, end, split, origin, TileLabel::ThinRight),
        Triangle::from_local(frame, s.apex(), origin, split, TileLabel::ThickRight)
    ]

}

//////////////////////////////////////////////////////////////////////
// quantities shared by both thick rules

struct ThickSplit {
    height: f64, // apex height over the base
    x: f64,      // length of either leg
    h: f64,      // apex height of a thick tile whose base is a leg
}

impl ThickSplit {

    fn new(base: f64) -> Self {

        let height = base / THICK_WIDTH * THICK_HEIGHT;
        let x = ((0.5*base).powi(2) + height.powi(2)).sqrt();
        let h = x / THICK_WIDTH * THICK_HEIGHT;

        ThickSplit { height: height, x: x, h: h }

    }

    // leg length of a thick tile whose base is one of our legs
    fn short_segment(&self) -> f64 {
        ((0.5*self.x).powi(2) + self.h.powi(2)).sqrt()
    }

    fn apex(&self, base: f64) -> Point2d {
        Point2d::new(0.5*base, self.height)
    }

}

// apex of a thick tile standing on the local base segment [u0, u1]
fn thick_apex_over(u0: f64, u1: f64) -> Point2d {
    let len = u1 - u0;
    Point2d::new(u0 + 0.5*len, len / THICK_WIDTH * THICK_HEIGHT)
}

fn thick_left(frame: &Isometry2d, base: f64) -> Vec<Triangle> {

    let s = ThickSplit::new(base);

    let l2 = s.short_segment();
    let l1 = base - l2;

    let origin = Point2d::origin();
    let end = Point2d::new(base, 0.0);
    let split = Point2d::new(l1, 0.0);

    let apex = s.apex(base);
    let inner = thick_apex_over(0.0, l1);

    vec![
        Triangle::from_local(frame, origin, split, inner, TileLabel::ThickRight),
        Triangle::from_local(frame, end, apex, split, TileLabel::ThickLeft),
        Triangle::from_local(frame, apex, inner, split, TileLabel::ThinRight)
    ]

}

fn thick_right(frame: &Isometry2d, base: f64) -> Vec<Triangle> {

    let s = ThickSplit::new(base);

    let l1 = s.short_segment();

    let origin = Point2d::origin();
    let end = Point2d::new(base, 0.0);
    let split = Point2d::new(l1, 0.0);

    let apex = s.apex(base);
    let inner = thick_apex_over(l1, base);

    vec![
        Triangle::from_local(frame, apex, origin, split, TileLabel::ThickRight),
        Triangle::from_local(frame, inner, apex, split, TileLabel::ThinLeft),
        Triangle::from_local(frame, split, end, inner, TileLabel::ThickLeft)
    ]

}

//////////////////////////////////////////////////////////////////////

// subdivide one triangle into its children, in substitution table order
pub fn subdivide(tri: &Triangle) -> Vec<Triangle> {

    let base = tri.base_length();
    let frame = tri.frame();

    match tri.label {
        TileLabel::ThinLeft => thin_left(&frame, base),
        TileLabel::ThinRight => thin_right(&frame, base),
        TileLabel::ThickLeft => thick_left(&frame, base),
        TileLabel::ThickRight => thick_right(&frame, base)
    }

}

// same as subdivide but refuses triangles whose base can't be oriented
pub fn try_subdivide(tri: &Triangle) -> Result<Vec<Triangle>> {
    tri.validate()?;
    Ok(subdivide(tri))
}

//////////////////////////////////////////////////////////////////////
