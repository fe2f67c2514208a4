#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Closed-form intersection of cubic bézier curves with line segments, on top of euclid.
//!
//! This crate is reexported in [cubeline](../cubeline/index.html).
//!
//! # Overview.
//!
//! Finding where a cubic bézier curve crosses a line segment boils down to four steps:
//!
//! - expand the curve's control points into a power-basis polynomial per axis,
//! - combine both axes with the implicit equation of the line into a single cubic,
//! - solve that cubic in closed form and keep the roots that fall in `[0, 1]`,
//! - sample the curve at each root and check that the point lies within the segment.
//!
//! ```
//! use cubeline_geom::{point, CubicBezierSegment, LineSegment};
//!
//! let curve = CubicBezierSegment {
//!     from: point(0.0, 0.0),
//!     ctrl1: point(1.0, 2.0),
//!     ctrl2: point(2.0, -2.0),
//!     to: point(3.0, 0.0),
//! };
//! let segment = LineSegment {
//!     from: point(-1.0, 0.5),
//!     to: point(4.0, 0.5),
//! };
//!
//! let intersections = curve.line_segment_intersections(&segment).unwrap();
//! assert_eq!(intersections.len(), 2);
//! ```
//!
//! The result always has three slots, one per potential root of the cubic. Slots that
//! don't hold an intersection are `None`. Code that still expects the historical
//! encoding (`-1` for missing roots, `(-100, -100)` for missing points) can use
//! [`RootSet::to_sentinel_array`] and
//! [`LineSegmentIntersections::to_sentinel_points`].
//!
//! # Degenerate geometry.
//!
//! A zero-length segment, a curve lying entirely on the segment's supporting line or
//! non-finite coordinates are reported as a [`DegenerateGeometry`] error instead of
//! silently producing NaNs.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod cubic_bezier;
mod error;
mod line;
mod options;
pub mod roots;
pub mod utils;

#[doc(inline)]
pub use crate::cubic_bezier::{
    intersect_curve_segment, CubicBezierSegment, Intersection, LineSegmentIntersections,
    NO_INTERSECTION_SENTINEL,
};
#[doc(inline)]
pub use crate::error::DegenerateGeometry;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::options::{IntersectionOptions, SolverOptions};
#[doc(inline)]
pub use crate::roots::RootSet;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;
        const NINE: Self;

        /// Relative threshold below which a polynomial coefficient is considered to vanish.
        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;
        const NINE: Self = 9.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}
