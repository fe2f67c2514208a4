use crate::options::SolverOptions;
use crate::roots::RootSet;
use crate::scalar::{Float, Scalar};

/// Returns `-1` for negative values and `1` otherwise (including zero).
#[inline]
pub fn sign<S: Scalar>(x: S) -> S {
    if x < S::ZERO {
        -S::ONE
    } else {
        S::ONE
    }
}

/// Expands one axis of a cubic bézier curve into the power basis.
///
/// Returns `[c3, c2, c1, c0]` such that the coordinate at `t` is
/// `c3 * t³ + c2 * t² + c1 * t + c0`.
#[inline]
pub fn bezier_coefficients<S: Scalar>(p0: S, p1: S, p2: S, p3: S) -> [S; 4] {
    [
        -p0 + S::THREE * p1 - S::THREE * p2 + p3,
        S::THREE * p0 - S::SIX * p1 + S::THREE * p2,
        -S::THREE * p0 + S::THREE * p1,
        p0,
    ]
}

/// Evaluates `c[0] * t³ + c[1] * t² + c[2] * t + c[3]`.
#[inline]
pub fn evaluate_cubic<S: Scalar>(c: &[S; 4], t: S) -> S {
    c[0] * t * t * t + c[1] * t * t + c[2] * t + c[3]
}

/// Solves `a * t³ + b * t² + c * t + d = 0` for `t` in `[0, 1]`.
///
/// See `cubic_polynomial_roots_with_options`.
pub fn cubic_polynomial_roots<S: Scalar>(a: S, b: S, c: S, d: S) -> RootSet<S> {
    cubic_polynomial_roots_with_options(a, b, c, d, &SolverOptions::DEFAULT)
}

/// Solves `a * t³ + b * t² + c * t + d = 0` for `t` in `[0, 1]`.
///
/// Roots outside of `[0, 1]` and complex roots are dropped. The remaining roots are
/// sorted in ascending order, followed by the empty slots.
///
/// If the leading coefficient vanishes (see `SolverOptions::degree_tolerance`) the
/// polynomial is solved as a quadratic or linear equation. If all coefficients vanish
/// the result is empty.
pub fn cubic_polynomial_roots_with_options<S: Scalar>(
    a: S,
    b: S,
    c: S,
    d: S,
    options: &SolverOptions<S>,
) -> RootSet<S> {
    let scale = S::abs(a).max(S::abs(b)).max(S::abs(c)).max(S::abs(d));
    let threshold = options.degree_tolerance * scale;

    let mut roots = if !(scale > S::ZERO) {
        RootSet::empty()
    } else if S::abs(a) <= threshold {
        log::trace!("leading coefficient {:?} vanishes, solving a quadratic", a);
        quadratic_roots(b, c, d, threshold, options.repeated_root_tolerance)
    } else {
        cubic_roots(a, b, c, d, options.repeated_root_tolerance)
    };

    roots.retain_unit_interval();
    roots.sort();

    roots
}

// Depressed cubic, solved with the trigonometric form when there are three distinct real
// roots and with Cardano's formula otherwise.
fn cubic_roots<S: Scalar>(a: S, b: S, c: S, d: S, repeated_root_tolerance: S) -> RootSet<S> {
    let frac_1_3 = S::ONE / S::THREE;

    let bn = b / a;
    let cn = c / a;
    let dn = d / a;

    let q = (S::THREE * cn - bn * bn) / S::NINE;
    let r = (S::NINE * bn * cn - S::value(27.0) * dn - S::TWO * bn * bn * bn) / S::value(54.0);
    let discriminant = q * q * q + r * r;

    let offset = -bn / S::THREE;

    if discriminant >= S::ZERO {
        let sqrt_discriminant = discriminant.sqrt();
        let r_plus = r + sqrt_discriminant;
        let r_minus = r - sqrt_discriminant;
        let s = sign(r_plus) * S::abs(r_plus).powf(frac_1_3);
        let t = sign(r_minus) * S::abs(r_minus).powf(frac_1_3);

        let real_root = offset + (s + t);
        let pair_real_part = offset - (s + t) / S::TWO;
        let pair_imaginary_part = S::abs(S::THREE.sqrt() * (s - t) / S::TWO);

        log::trace!(
            "cubic: discriminant {:?} >= 0, real root {:?}, pair {:?} ± {:?}i",
            discriminant,
            real_root,
            pair_real_part,
            pair_imaginary_part
        );

        let pair = if pair_imaginary_part <= repeated_root_tolerance {
            Some(pair_real_part)
        } else {
            None
        };

        RootSet::from_slots([Some(real_root), pair, pair])
    } else {
        let cos_arg = (r / (-q * q * q).sqrt()).max(-S::ONE).min(S::ONE);
        let theta = cos_arg.acos();
        let two_sqrt_q = S::TWO * (-q).sqrt();
        let two_pi = S::TWO * S::PI();

        log::trace!(
            "cubic: discriminant {:?} < 0, three real roots (theta {:?})",
            discriminant,
            theta
        );

        RootSet::from_slots([
            Some(two_sqrt_q * Float::cos(theta * frac_1_3) + offset),
            Some(two_sqrt_q * Float::cos((theta + two_pi) * frac_1_3) + offset),
            Some(two_sqrt_q * Float::cos((theta + S::TWO * two_pi) * frac_1_3) + offset),
        ])
    }
}

// Solves `a * t² + b * t + c = 0`, falling back to the linear case when `a` vanishes.
fn quadratic_roots<S: Scalar>(
    a: S,
    b: S,
    c: S,
    threshold: S,
    repeated_root_tolerance: S,
) -> RootSet<S> {
    if S::abs(a) <= threshold {
        if S::abs(b) <= threshold {
            return RootSet::empty();
        }

        return RootSet::from_slots([Some(-c / b), None, None]);
    }

    let two_a = S::TWO * a;
    let delta = b * b - S::FOUR * a * c;

    if delta > S::ZERO {
        let sqrt_delta = delta.sqrt();
        return RootSet::from_slots([
            Some((-b - sqrt_delta) / two_a),
            Some((-b + sqrt_delta) / two_a),
            None,
        ]);
    }

    // Same policy as the cubic's pair of roots: a double root is kept only if its
    // imaginary part is within the tolerance.
    let imaginary_part = S::abs((-delta).sqrt() / two_a);
    if imaginary_part <= repeated_root_tolerance {
        let root = -b / two_a;
        return RootSet::from_slots([Some(root), Some(root), None]);
    }

    RootSet::empty()
}

#[cfg(test)]
fn assert_roots_approx_eq(roots: RootSet<f64>, expected: &[f64], epsilon: f64) {
    std::println!("{:?} vs {:?}", roots, expected);
    assert_eq!(roots.len(), expected.len());
    for (root, expected) in roots.iter().zip(expected.iter()) {
        assert!((root - expected).abs() <= epsilon);
    }
}

#[test]
fn sign_of_zero_is_positive() {
    assert_eq!(sign(0.0f64), 1.0);
    assert_eq!(sign(-0.0f64), 1.0);
    assert_eq!(sign(2.5f64), 1.0);
    assert_eq!(sign(-1e-300f64), -1.0);
}

#[test]
fn coefficients() {
    assert_eq!(bezier_coefficients(0.0, 1.0, 2.0, 3.0), [0.0, 0.0, 3.0, 0.0]);
    assert_eq!(bezier_coefficients(0.0, 2.0, -2.0, 0.0), [12.0, -18.0, 6.0, 0.0]);
    assert_eq!(bezier_coefficients(5.0, 5.0, 5.0, 5.0), [0.0, 0.0, 0.0, 5.0]);

    let c = bezier_coefficients(1.0, 4.0, -3.0, 2.0);
    assert_eq!(evaluate_cubic(&c, 0.0), 1.0);
    assert_eq!(evaluate_cubic(&c, 1.0), 2.0);
}

#[test]
fn three_distinct_roots() {
    // (t - 0.2)(t - 0.5)(t - 0.8)
    let roots = cubic_polynomial_roots(1.0, -1.5, 0.66, -0.08);
    assert_roots_approx_eq(roots, &[0.2, 0.5, 0.8], 1e-9);

    // Same roots, scaled and negated.
    let roots = cubic_polynomial_roots(-4.0, 6.0, -2.64, 0.32);
    assert_roots_approx_eq(roots, &[0.2, 0.5, 0.8], 1e-9);
}

#[test]
fn one_real_root() {
    // (t - 0.5)(t² + 1)
    let roots = cubic_polynomial_roots(1.0, -0.5, 1.0, -0.5);
    assert_roots_approx_eq(roots, &[0.5], 1e-9);
    assert_eq!(roots.slots()[1], None);
    assert_eq!(roots.slots()[2], None);
}

#[test]
fn roots_outside_of_unit_interval() {
    // (t + 1)(t - 2)(t - 3)
    let roots = cubic_polynomial_roots(1.0, -4.0, 1.0, 6.0);
    assert!(roots.is_empty());
    assert_eq!(roots.to_sentinel_array(), [-1.0, -1.0, -1.0]);

    // (t - 0.25)(t - 4)(t + 5)
    let roots = cubic_polynomial_roots(1.0, 0.75, -20.25, 5.0);
    assert_roots_approx_eq(roots, &[0.25], 1e-9);
    assert_eq!(&roots.to_sentinel_array()[1..], &[-1.0, -1.0]);
}

#[test]
fn exact_double_root_is_kept() {
    // (t - 1)²(t + 2): the discriminant is exactly zero.
    let roots = cubic_polynomial_roots(1.0, 0.0, -3.0, 2.0);
    assert_eq!(roots.slots(), &[Some(1.0), Some(1.0), None]);
}

#[test]
fn complex_pair_is_discarded() {
    // ((t - 0.5)² + 1e-8)(t - 3): the pair 0.5 ± 1e-4i is not real.
    let (a, b, c, d) = (1.0, -4.0, 3.250_000_01, -0.750_000_03);

    let roots = cubic_polynomial_roots(a, b, c, d);
    assert!(roots.is_empty());

    let strict = SolverOptions::DEFAULT.with_repeated_root_tolerance(1e-3);
    let roots = cubic_polynomial_roots_with_options(a, b, c, d, &strict);
    assert_roots_approx_eq(roots, &[0.5, 0.5], 1e-6);
}

#[test]
fn near_double_root_with_tolerance() {
    // (t - 0.5)²(t - 3), rounding decides whether the pair is complex.
    let strict = SolverOptions::DEFAULT.with_repeated_root_tolerance(1e-6);
    let roots = cubic_polynomial_roots_with_options(1.0, -4.0, 3.25, -0.75, &strict);
    assert_roots_approx_eq(roots, &[0.5, 0.5], 1e-4);
}

#[test]
fn lower_degree() {
    // (t - 0.5)(t - 1)
    let roots = cubic_polynomial_roots(0.0, 1.0, -1.5, 0.5);
    assert_eq!(roots.slots(), &[Some(0.5), Some(1.0), None]);

    let roots = cubic_polynomial_roots(0.0, 0.0, 2.0, -1.0);
    assert_eq!(roots.slots(), &[Some(0.5), None, None]);

    // A leading coefficient this small is treated as zero.
    let roots = cubic_polynomial_roots(1e-12, 0.0, 2.0, -1.0);
    assert_eq!(roots.slots(), &[Some(0.5), None, None]);

    // (t - 0.25)²
    let roots = cubic_polynomial_roots(0.0, 1.0, -0.5, 0.0625);
    assert_eq!(roots.slots(), &[Some(0.25), Some(0.25), None]);

    // t² + 1
    assert!(cubic_polynomial_roots(0.0, 1.0, 0.0, 1.0).is_empty());
    // Constant.
    assert!(cubic_polynomial_roots(0.0, 0.0, 0.0, 1.0).is_empty());
    assert!(cubic_polynomial_roots(0.0, 0.0, 0.0, 0.0).is_empty());
}

#[test]
fn f32_roots() {
    let roots = cubic_polynomial_roots(1.0f32, -1.5, 0.66, -0.08);
    assert_eq!(roots.len(), 3);
    let expected = [0.2f32, 0.5, 0.8];
    for (root, expected) in roots.iter().zip(expected.iter()) {
        assert!((root - expected).abs() <= 1e-3);
    }
}
