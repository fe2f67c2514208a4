#![deny(bare_trait_objects)]
#![no_std]

//! Intersections between cubic bézier curves and line segments.
//!
//! # Crates
//!
//! This meta-crate (`cubeline`) reexports the following sub-crates for convenience:
//!
//! * `cubeline_geom` - Cubic bézier and line segment types, the closed-form cubic
//!   solver and the curve/segment intersection routine.
//!
//! # Example
//!
//! ```
//! use cubeline::geom::{point, CubicBezierSegment, LineSegment};
//!
//! let curve = CubicBezierSegment {
//!     from: point(0.0, 0.0),
//!     ctrl1: point(1.0, 1.0),
//!     ctrl2: point(2.0, 2.0),
//!     to: point(3.0, 3.0),
//! };
//! let segment = LineSegment {
//!     from: point(0.0, 3.0),
//!     to: point(3.0, 0.0),
//! };
//!
//! let result = cubeline::intersect_curve_segment(&curve, &segment).unwrap();
//! assert_eq!(result.points().next(), Some(point(1.5, 1.5)));
//! ```

pub extern crate cubeline_geom;

pub use cubeline_geom as geom;
pub use geom::euclid;
pub use geom::{intersect_curve_segment, DegenerateGeometry, IntersectionOptions};
