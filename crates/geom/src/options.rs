use crate::scalar::Scalar;

/// Parameters of the closed-form cubic solver.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SolverOptions<S> {
    /// A leading coefficient whose magnitude is at most `degree_tolerance` times the
    /// largest coefficient magnitude is treated as zero and the polynomial is solved
    /// as a quadratic (or linear) equation instead.
    ///
    /// Default value: `S::EPSILON`.
    pub degree_tolerance: S,

    /// When the discriminant is non-negative the cubic has one real root and a pair of
    /// roots sharing the same real part. The pair is kept only if the magnitude of its
    /// imaginary part is at most this value.
    ///
    /// The default (zero) only keeps the pair when the imaginary part is exactly zero.
    /// Near-tangent configurations usually end up with a tiny non-zero imaginary part
    /// because of rounding, so their double root gets discarded. A small positive value
    /// keeps these roots.
    ///
    /// Default value: `0`.
    pub repeated_root_tolerance: S,
}

impl<S: Scalar> SolverOptions<S> {
    pub const DEFAULT: Self = SolverOptions {
        degree_tolerance: S::EPSILON,
        repeated_root_tolerance: S::ZERO,
    };

    #[inline]
    pub fn with_degree_tolerance(mut self, tolerance: S) -> Self {
        self.degree_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_repeated_root_tolerance(mut self, tolerance: S) -> Self {
        self.repeated_root_tolerance = tolerance;
        self
    }
}

impl<S: Scalar> Default for SolverOptions<S> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for `CubicBezierSegment::line_segment_intersections_with_options`.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct IntersectionOptions<S> {
    pub solver: SolverOptions<S>,
}

impl<S: Scalar> IntersectionOptions<S> {
    pub const DEFAULT: Self = IntersectionOptions {
        solver: SolverOptions::DEFAULT,
    };

    #[inline]
    pub fn with_solver(mut self, solver: SolverOptions<S>) -> Self {
        self.solver = solver;
        self
    }

    /// Keep the double roots of tangent configurations, see
    /// `SolverOptions::repeated_root_tolerance`.
    #[inline]
    pub fn with_repeated_root_tolerance(mut self, tolerance: S) -> Self {
        self.solver.repeated_root_tolerance = tolerance;
        self
    }
}

impl<S: Scalar> Default for IntersectionOptions<S> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_options() {
    let options: IntersectionOptions<f64> = IntersectionOptions::default();
    assert_eq!(options.solver.repeated_root_tolerance, 0.0);
    assert_eq!(options.solver.degree_tolerance, 1e-8);

    let strict = options.with_repeated_root_tolerance(1e-6);
    assert_eq!(strict.solver.repeated_root_tolerance, 1e-6);
    assert_eq!(strict.solver.degree_tolerance, 1e-8);
}
