use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A linear segment.
///
/// The segment's parameter goes from `0` at `from` to `1` at `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.from.x * (S::ONE - t) + self.to.x * t
    }

    /// Sample the y coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        self.from.y * (S::ONE - t) + self.to.y * t
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Returns the parameter corresponding to a given x coordinate, for segments
    /// that are not vertical.
    pub fn solve_t_for_x(&self, x: S) -> Option<S> {
        let dx = self.to.x - self.from.x;
        if dx == S::ZERO {
            return None;
        }

        Some((x - self.from.x) / dx)
    }

    /// Returns the parameter corresponding to a given y coordinate, for segments
    /// that are not horizontal.
    pub fn solve_t_for_y(&self, y: S) -> Option<S> {
        let dy = self.to.y - self.from.y;
        if dy == S::ZERO {
            return None;
        }

        Some((y - self.from.y) / dy)
    }

    /// Returns the parameter of a point assumed to be on the segment's line.
    ///
    /// The x axis is used unless the segment is vertical.
    pub fn solve_t_for_point(&self, p: Point<S>) -> Option<S> {
        self.solve_t_for_x(p.x).or_else(|| self.solve_t_for_y(p.y))
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Returns `(a, b, c)` such that the segment's supporting line is
    /// `a * x + b * y + c = 0`.
    ///
    /// Unlike a normalized line equation, the coefficients are not scaled: `a` and `b`
    /// are the segment's vector rotated by 90°.
    #[inline]
    pub fn implicit_coefficients(&self) -> (S, S, S) {
        let (x0, y0) = (self.from.x, self.from.y);
        let (x1, y1) = (self.to.x, self.to.y);

        (y1 - y0, x0 - x1, x0 * (y0 - y1) + y0 * (x1 - x0))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.from.x.is_finite()
            && self.from.y.is_finite()
            && self.to.x.is_finite()
            && self.to.y.is_finite()
    }

    pub fn to_f32(&self) -> LineSegment<f32> {
        LineSegment {
            from: self.from.to_f32(),
            to: self.to.to_f32(),
        }
    }

    pub fn to_f64(&self) -> LineSegment<f64> {
        LineSegment {
            from: self.from.to_f64(),
            to: self.to.to_f64(),
        }
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn implicit_coefficients() {
    let segment = LineSegment {
        from: point(0.0, 3.0),
        to: point(3.0, 0.0),
    };
    assert_eq!(segment.implicit_coefficients(), (-3.0, -3.0, 9.0));

    // Both endpoints satisfy the equation.
    for p in [segment.from, segment.to, segment.sample(0.25)] {
        let (a, b, c) = segment.implicit_coefficients();
        assert_eq!(a * p.x + b * p.y + c, 0.0);
    }

    // Flipping the segment negates the equation.
    let (a, b, c) = segment.implicit_coefficients();
    assert_eq!(segment.flip().implicit_coefficients(), (-a, -b, -c));
}

#[test]
fn solve_t() {
    let segment = LineSegment {
        from: point(1.0, 2.0),
        to: point(5.0, 2.0),
    };
    assert_eq!(segment.solve_t_for_x(2.0), Some(0.25));
    assert_eq!(segment.solve_t_for_y(2.0), None);
    assert_eq!(segment.solve_t_for_point(point(4.0, 2.0)), Some(0.75));

    let vertical = LineSegment {
        from: point(1.5, -5.0),
        to: point(1.5, 5.0),
    };
    assert_eq!(vertical.solve_t_for_x(1.5), None);
    assert_eq!(vertical.solve_t_for_point(point(1.5, 0.0)), Some(0.5));

    let point_segment = LineSegment {
        from: point(1.0, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(point_segment.solve_t_for_point(point(1.0, 1.0)), None);
}

#[test]
fn sample_and_length() {
    let segment = LineSegment {
        from: point(0.0f32, 0.0),
        to: point(3.0, 4.0),
    };
    assert_eq!(segment.length(), 5.0);
    assert_eq!(segment.square_length(), 25.0);
    assert_eq!(segment.sample(0.5), point(1.5, 2.0));
    assert_eq!(segment.x(1.0), 3.0);
    assert_eq!(segment.y(0.0), 0.0);
    assert_eq!(segment.to_vector(), crate::vector(3.0, 4.0));
    assert!(segment.is_finite());

    let segment = LineSegment {
        from: point(0.0f32, f32::NAN),
        to: point(3.0, 4.0),
    };
    assert!(!segment.is_finite());
}
