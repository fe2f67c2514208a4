//! Cubic bézier segments and their intersections with line segments.

use crate::error::DegenerateGeometry;
use crate::options::IntersectionOptions;
use crate::roots::RootSet;
use crate::scalar::Scalar;
use crate::utils::{bezier_coefficients, cubic_polynomial_roots_with_options, evaluate_cubic};
use crate::{point, LineSegment, Point};

/// Coordinate used by `LineSegmentIntersections::to_sentinel_points` for missing
/// intersections.
///
/// The value is meant to land outside of the visible area of the canvas.
pub const NO_INTERSECTION_SENTINEL: f32 = -100.0;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.x * one_t3
            + self.ctrl1.x * S::THREE * one_t2 * t
            + self.ctrl2.x * S::THREE * one_t * t2
            + self.to.x * t3
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from.y * one_t3
            + self.ctrl1.y * S::THREE * one_t2 * t
            + self.ctrl2.y * S::THREE * one_t * t2
            + self.to.y * t3
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// The power basis coefficients `[c3, c2, c1, c0]` of the x and y coordinates.
    pub fn polynomial_coefficients(&self) -> ([S; 4], [S; 4]) {
        (
            bezier_coefficients(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x),
            bezier_coefficients(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y),
        )
    }

    pub fn is_finite(&self) -> bool {
        [self.from, self.ctrl1, self.ctrl2, self.to]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Computes the parameters along the curve where it crosses the line supporting
    /// the segment.
    ///
    /// Only parameters in `[0, 1]` are returned, in ascending order. The segment's
    /// bounds are not taken into account.
    pub fn line_intersections_t(
        &self,
        segment: &LineSegment<S>,
        options: &IntersectionOptions<S>,
    ) -> Result<RootSet<S>, DegenerateGeometry> {
        let p = self.line_polynomial(segment, options)?;

        Ok(cubic_polynomial_roots_with_options(
            p[0],
            p[1],
            p[2],
            p[3],
            &options.solver,
        ))
    }

    /// Computes the intersections (if any) between this curve and a line segment.
    ///
    /// See `line_segment_intersections_with_options`.
    pub fn line_segment_intersections(
        &self,
        segment: &LineSegment<S>,
    ) -> Result<LineSegmentIntersections<S>, DegenerateGeometry> {
        self.line_segment_intersections_with_options(segment, &IntersectionOptions::DEFAULT)
    }

    /// Computes the intersections (if any) between this curve and a line segment.
    ///
    /// Each slot of the result corresponds to a root of the cubic equation obtained by
    /// substituting the curve into the segment's line equation, in ascending order of
    /// `t`. A slot is empty if its root doesn't exist or if the corresponding point is
    /// not within the segment.
    ///
    /// The segment parameter `s` of each intersection is measured along the x axis, or
    /// along the y axis if the segment is vertical.
    pub fn line_segment_intersections_with_options(
        &self,
        segment: &LineSegment<S>,
        options: &IntersectionOptions<S>,
    ) -> Result<LineSegmentIntersections<S>, DegenerateGeometry> {
        let roots = self.line_intersections_t(segment, options)?;
        let (bx, by) = self.polynomial_coefficients();

        let mut slots = [None; 3];
        for (slot, root) in slots.iter_mut().zip(roots.slots().iter()) {
            let t = match *root {
                Some(t) => t,
                None => continue,
            };

            let p = point(evaluate_cubic(&bx, t), evaluate_cubic(&by, t));
            match segment.solve_t_for_point(p) {
                Some(s) if s >= S::ZERO && s <= S::ONE && p.x.is_finite() && p.y.is_finite() => {
                    *slot = Some(Intersection { t, s, point: p });
                }
                s => {
                    log::debug!("rejected candidate t={:?} s={:?} at {:?}", t, s, p);
                }
            }
        }

        Ok(LineSegmentIntersections { slots })
    }

    // Coefficients of `a * x(t) + b * y(t) + c`, where `a * x + b * y + c = 0` is the
    // equation of the segment's line.
    fn line_polynomial(
        &self,
        segment: &LineSegment<S>,
        options: &IntersectionOptions<S>,
    ) -> Result<[S; 4], DegenerateGeometry> {
        if !self.is_finite() || !segment.is_finite() {
            return Err(DegenerateGeometry::NonFiniteInput);
        }

        if segment.from == segment.to {
            return Err(DegenerateGeometry::ZeroLengthSegment);
        }

        let (a, b, c) = segment.implicit_coefficients();
        let (bx, by) = self.polynomial_coefficients();

        let p = [
            a * bx[0] + b * by[0],
            a * bx[1] + b * by[1],
            a * bx[2] + b * by[2],
            a * bx[3] + b * by[3] + c,
        ];

        // The polynomial is identically zero when every point of the curve is on the line.
        // The reference doesn't depend on the position of the curve: `p[3]` is the scaled
        // distance from `from` to the line.
        let max_abs = |v: &[S]| v.iter().fold(S::ZERO, |m, x| m.max(S::abs(*x)));
        let reference =
            S::abs(a) * max_abs(&bx[..3]) + S::abs(b) * max_abs(&by[..3]) + S::abs(p[3]);
        if max_abs(&p) <= options.solver.degree_tolerance * reference {
            return Err(DegenerateGeometry::CurveOnLine);
        }

        Ok(p)
    }

    pub fn to_f32(&self) -> CubicBezierSegment<f32> {
        CubicBezierSegment {
            from: self.from.to_f32(),
            ctrl1: self.ctrl1.to_f32(),
            ctrl2: self.ctrl2.to_f32(),
            to: self.to.to_f32(),
        }
    }

    pub fn to_f64(&self) -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            from: self.from.to_f64(),
            ctrl1: self.ctrl1.to_f64(),
            ctrl2: self.ctrl2.to_f64(),
            to: self.to.to_f64(),
        }
    }
}

/// Computes the intersections between a cubic bézier curve and a line segment.
///
/// Shorthand for `curve.line_segment_intersections(segment)`.
pub fn intersect_curve_segment<S: Scalar>(
    curve: &CubicBezierSegment<S>,
    segment: &LineSegment<S>,
) -> Result<LineSegmentIntersections<S>, DegenerateGeometry> {
    curve.line_segment_intersections(segment)
}

/// A point where a curve crosses a line segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Intersection<S> {
    /// Parameter along the curve.
    pub t: S,
    /// Parameter along the line segment, from `from` (0) to `to` (1).
    pub s: S,
    pub point: Point<S>,
}

/// The result of `CubicBezierSegment::line_segment_intersections`.
///
/// Three slots, one per root of the underlying cubic equation. Present intersections
/// are not necessarily contiguous: a root whose point falls outside of the segment
/// leaves an empty slot in place.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegmentIntersections<S> {
    slots: [Option<Intersection<S>>; 3],
}

impl<S: Scalar> LineSegmentIntersections<S> {
    #[inline]
    pub fn slots(&self) -> &[Option<Intersection<S>>; 3] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intersection<S>> + '_ {
        self.slots.iter().flatten()
    }

    pub fn points(&self) -> impl Iterator<Item = Point<S>> + '_ {
        self.iter().map(|intersection| intersection.point)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The intersection points, with `(-100, -100)` in place of empty slots.
    pub fn to_sentinel_points(&self) -> [Point<S>; 3] {
        let sentinel = S::value(NO_INTERSECTION_SENTINEL);
        let get = |slot: &Option<Intersection<S>>| match slot {
            Some(intersection) => intersection.point,
            None => point(sentinel, sentinel),
        };

        [get(&self.slots[0]), get(&self.slots[1]), get(&self.slots[2])]
    }
}

#[cfg(test)]
fn s_curve() -> CubicBezierSegment<f64> {
    // x(t) = 3t, y(t) = 12t³ - 18t² + 6t
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(2.0, -2.0),
        to: point(3.0, 0.0),
    }
}

#[test]
fn power_basis_matches_sample() {
    let curve = CubicBezierSegment {
        from: point(1.0, 4.0),
        ctrl1: point(-3.0, 2.0),
        ctrl2: point(7.0, -1.0),
        to: point(2.0, 5.0),
    };
    let (bx, by) = curve.polynomial_coefficients();
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let p = curve.sample(t);
        assert!((evaluate_cubic(&bx, t) - p.x).abs() < 1e-12);
        assert!((evaluate_cubic(&by, t) - p.y).abs() < 1e-12);
        assert!((curve.x(t) - p.x).abs() < 1e-12);
        assert!((curve.y(t) - p.y).abs() < 1e-12);
    }
}

#[test]
fn straight_curve() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 2.0),
        to: point(3.0, 3.0),
    };
    let segment = LineSegment {
        from: point(0.0, 3.0),
        to: point(3.0, 0.0),
    };

    let result = curve.line_segment_intersections(&segment).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.slots()[0],
        Some(Intersection {
            t: 0.5,
            s: 0.5,
            point: point(1.5, 1.5)
        })
    );
    assert_eq!(result.slots()[1], None);
    assert_eq!(result.slots()[2], None);
}

#[test]
fn s_curve_crossed_twice() {
    let segment = LineSegment {
        from: point(-1.0, 0.5),
        to: point(4.0, 0.5),
    };

    let result = s_curve().line_segment_intersections(&segment).unwrap();
    std::println!("{:?}", result);
    assert_eq!(result.len(), 2);
    assert!(result.slots()[2].is_none());

    let a = result.slots()[0].unwrap();
    let b = result.slots()[1].unwrap();
    assert!(a.t < b.t);
    for i in &[a, b] {
        assert!((i.point.y - 0.5).abs() < 1e-9);
        assert!((i.point.x - 3.0 * i.t).abs() < 1e-12);
        assert!((segment.x(i.s) - i.point.x).abs() < 1e-9);
    }
}

#[test]
fn candidate_outside_of_segment() {
    // Same line as above, but the segment only covers the second crossing.
    let segment = LineSegment {
        from: point(0.6, 0.5),
        to: point(4.0, 0.5),
    };

    let result = s_curve().line_segment_intersections(&segment).unwrap();
    assert_eq!(result.len(), 1);
    assert!(result.slots()[0].is_none());
    assert!(result.slots()[1].is_some());
    assert!(result.slots()[2].is_none());

    let sentinels = result.to_sentinel_points();
    assert_eq!(sentinels[0], point(-100.0, -100.0));
    assert_eq!(sentinels[2], point(-100.0, -100.0));
    assert!(sentinels[1].x > 0.6);
}

#[test]
fn vertical_segment() {
    let segment = LineSegment {
        from: point(1.5, -5.0),
        to: point(1.5, 5.0),
    };

    let result = s_curve().line_segment_intersections(&segment).unwrap();
    assert_eq!(result.len(), 1);
    let i = result.slots()[0].unwrap();
    assert_eq!(i.t, 0.5);
    assert_eq!(i.s, 0.5);
    assert_eq!(i.point, point(1.5, 0.0));
}

#[test]
fn flipped_segment() {
    let segment = LineSegment {
        from: point(-1.0, 0.5),
        to: point(4.0, 0.5),
    };

    let a = s_curve().line_segment_intersections(&segment).unwrap();
    let b = s_curve().line_segment_intersections(&segment.flip()).unwrap();

    assert_eq!(a.len(), b.len());
    for (ia, ib) in a.iter().zip(b.iter()) {
        assert_eq!(ia.t, ib.t);
        assert_eq!(ia.point, ib.point);
        assert!((ia.s - (1.0 - ib.s)).abs() < 1e-12);
    }
}

#[test]
fn degenerate_inputs() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 2.0),
        to: point(3.0, 3.0),
    };

    let on_line = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(
        curve.line_segment_intersections(&on_line),
        Err(DegenerateGeometry::CurveOnLine)
    );

    let empty = LineSegment {
        from: point(1.0, 2.0),
        to: point(1.0, 2.0),
    };
    assert_eq!(
        curve.line_segment_intersections(&empty),
        Err(DegenerateGeometry::ZeroLengthSegment)
    );

    let mut nan_curve = curve;
    nan_curve.ctrl2.y = f64::NAN;
    assert_eq!(
        nan_curve.line_segment_intersections(&on_line),
        Err(DegenerateGeometry::NonFiniteInput)
    );

    let infinite = LineSegment {
        from: point(0.0, 0.0),
        to: point(f64::INFINITY, 3.0),
    };
    assert_eq!(
        curve.line_segment_intersections(&infinite),
        Err(DegenerateGeometry::NonFiniteInput)
    );
}

#[test]
fn translated_far_from_origin() {
    let segment = LineSegment {
        from: point(-1.0, 0.5),
        to: point(4.0, 0.5),
    };

    for &k in &[0.0, 1e4, 1e6, 1e8, 1e9] {
        let offset = crate::vector(k, k);
        let curve = CubicBezierSegment {
            from: s_curve().from + offset,
            ctrl1: s_curve().ctrl1 + offset,
            ctrl2: s_curve().ctrl2 + offset,
            to: s_curve().to + offset,
        };
        let segment = LineSegment {
            from: segment.from + offset,
            to: segment.to + offset,
        };

        let result = curve.line_segment_intersections(&segment).unwrap();
        assert_eq!(result.len(), 2, "offset {}", k);
    }

    // A tiny curve far away from the origin.
    let offset = crate::vector(1e6, 1e6);
    let s = 0.001;
    let curve = CubicBezierSegment {
        from: s_curve().from * s + offset,
        ctrl1: s_curve().ctrl1 * s + offset,
        ctrl2: s_curve().ctrl2 * s + offset,
        to: s_curve().to * s + offset,
    };
    let segment = LineSegment {
        from: segment.from * s + offset,
        to: segment.to * s + offset,
    };
    let result = curve.line_segment_intersections(&segment).unwrap();
    assert_eq!(result.len(), 2);

    // Still degenerate when the whole curve is on the line.
    let on_line = CubicBezierSegment {
        from: point(1e9, 1e9),
        ctrl1: point(1e9 + 1.0, 1e9 + 1.0),
        ctrl2: point(1e9 + 2.0, 1e9 + 2.0),
        to: point(1e9 + 3.0, 1e9 + 3.0),
    };
    let diagonal = LineSegment {
        from: point(1e9 - 1.0, 1e9 - 1.0),
        to: point(1e9 + 4.0, 1e9 + 4.0),
    };
    assert_eq!(
        on_line.line_segment_intersections(&diagonal),
        Err(DegenerateGeometry::CurveOnLine)
    );
}

#[test]
fn no_intersection() {
    let curve = CubicBezierSegment {
        from: point(0.0, 10.0),
        ctrl1: point(1.0, 20.0),
        ctrl2: point(2.0, 20.0),
        to: point(3.0, 10.0),
    };
    let segment = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 1.0),
    };

    let result = intersect_curve_segment(&curve, &segment).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.points().count(), 0);
    assert_eq!(result.to_sentinel_points(), [point(-100.0, -100.0); 3]);
}

#[test]
fn f32_intersections() {
    let curve = s_curve().to_f32();
    let segment = LineSegment {
        from: point(-1.0f32, 0.5),
        to: point(4.0, 0.5),
    };

    let result = curve.line_segment_intersections(&segment).unwrap();
    assert_eq!(result.len(), 2);
    for p in result.points() {
        assert!((p.y - 0.5).abs() < 1e-3);
    }
}
