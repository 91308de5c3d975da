/*

Penrose P3 tilings by deflation of Robinson triangles.

The geometry core (prototile, triangle, deflate, tiling) is pure and
single-threaded apart from the rayon map over large frontiers.
Drawing lives behind the Renderer trait in render.rs.

 */

//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

#[macro_use]
extern crate error_chain;

#[cfg(feature = "render")]
extern crate cairo;

pub mod errors {

    error_chain!{

        foreign_links {
            Fmt(::std::fmt::Error);
            Io(::std::io::Error);
            ParseFloat(::std::num::ParseFloatError);
            ParseInt(::std::num::ParseIntError);
            Cairo(::cairo::Error) #[cfg(feature = "render")];
            CairoIo(::cairo::IoError) #[cfg(feature = "render")];
        }

        errors {

            DegenerateBase(length: f64) {
                description("degenerate triangle base")
                display("degenerate triangle base (length {:e})", length)
            }

            UnknownLabel(name: String) {
                description("unknown tile label")
                display("unknown tile label: {:}", name)
            }

        }

    }

}

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Vec3d = nalgebra::Vector3<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;
pub type Isometry2d = nalgebra::Isometry2<f64>;
pub type Translation2d = nalgebra::Translation2<f64>;
pub type Transform2d = nalgebra::Transform2<f64>;
pub type Matrix3d = nalgebra::Matrix3<f64>;

pub mod prototile;
pub mod triangle;
pub mod deflate;
pub mod tiling;
pub mod style;
pub mod render;
pub mod spec;

pub use crate::prototile::{TileLabel, TileShape, TileSide};
pub use crate::triangle::{Rect2d, Triangle};
pub use crate::deflate::{subdivide, try_subdivide};
pub use crate::tiling::{deflate, deflate_all, tile_count, Seeds};
pub use crate::style::{StyleMap, TileStyle};
pub use crate::render::{Renderer, StyledTriangle};
pub use crate::spec::TilingSpec;
