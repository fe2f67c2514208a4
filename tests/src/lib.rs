use cubeline::geom::{point, CubicBezierSegment, LineSegment, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
use cubeline::geom::euclid::default::Rotation2D;
#[cfg(test)]
use cubeline::geom::Intersection;
#[cfg(test)]
use cubeline::geom::utils::{cubic_polynomial_roots, evaluate_cubic};
#[cfg(test)]
use cubeline::{intersect_curve_segment, DegenerateGeometry, IntersectionOptions};

/// Installs a logger for the test harness. Set `RUST_LOG=trace` to follow the solver.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_point(rng: &mut StdRng, range: f64) -> Point<f64> {
    point(rng.random_range(-range..range), rng.random_range(-range..range))
}

pub fn generate_curves(seed: u64, count: usize) -> Vec<CubicBezierSegment<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| CubicBezierSegment {
            from: random_point(&mut rng, 100.0),
            ctrl1: random_point(&mut rng, 100.0),
            ctrl2: random_point(&mut rng, 100.0),
            to: random_point(&mut rng, 100.0),
        })
        .collect()
}

pub fn generate_segments(seed: u64, count: usize) -> Vec<LineSegment<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| LineSegment {
            from: random_point(&mut rng, 100.0),
            to: random_point(&mut rng, 100.0),
        })
        .collect()
}

/// x(t) = 3t, y(t) = 12t³ - 18t² + 6t
pub fn s_curve() -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 2.0),
        ctrl2: point(2.0, -2.0),
        to: point(3.0, 0.0),
    }
}

#[cfg(test)]
fn distance_to_line(p: Point<f64>, segment: &LineSegment<f64>) -> f64 {
    let (a, b, c) = segment.implicit_coefficients();
    (a * p.x + b * p.y + c).abs() / (a * a + b * b).sqrt()
}

#[test]
fn straight_cubic_crossing() {
    init_logging();
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

    let result = intersect_curve_segment(&curve, &segment).unwrap();
    let points: Vec<_> = result.points().collect();
    assert_eq!(points.len(), 1);
    assert!((points[0] - point(1.5, 1.5)).length() < 1e-9);
    assert_eq!(
        result.to_sentinel_points(),
        [point(1.5, 1.5), point(-100.0, -100.0), point(-100.0, -100.0)]
    );
}

#[test]
fn curve_above_segment() {
    init_logging();
    let curve = CubicBezierSegment {
        from: point(0.0, 10.0),
        ctrl1: point(1.0, 20.0),
        ctrl2: point(2.0, 15.0),
        to: point(3.0, 20.0),
    };
    let segment = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 1.0),
    };

    let result = intersect_curve_segment(&curve, &segment).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.to_sentinel_points(), [point(-100.0, -100.0); 3]);
}

#[test]
fn s_curve_crossed_twice() {
    init_logging();
    let segment = LineSegment {
        from: point(-1.0, 0.5),
        to: point(4.0, 0.5),
    };

    let result = intersect_curve_segment(&s_curve(), &segment).unwrap();
    let slots = result.slots();
    assert!(slots[0].is_some());
    assert!(slots[1].is_some());
    assert!(slots[2].is_none());

    let t0 = slots[0].unwrap().t;
    let t1 = slots[1].unwrap().t;
    assert!(t0 < t1);

    for intersection in result.iter() {
        assert!(distance_to_line(intersection.point, &segment) < 1e-9);
        assert!((s_curve().sample(intersection.t) - intersection.point).length() < 1e-9);
    }
}

#[test]
fn vertical_segment() {
    init_logging();
    let segment = LineSegment {
        from: point(1.5, -5.0),
        to: point(1.5, 5.0),
    };

    let result = intersect_curve_segment(&s_curve(), &segment).unwrap();
    let intersections: Vec<_> = result.iter().collect();
    assert_eq!(intersections.len(), 1);
    assert_eq!(intersections[0].point, point(1.5, 0.0));
    assert_eq!(intersections[0].s, 0.5);

    // Only part of the segment.
    let segment = LineSegment {
        from: point(1.5, 1.0),
        to: point(1.5, 5.0),
    };
    let result = intersect_curve_segment(&s_curve(), &segment).unwrap();
    assert!(result.is_empty());
}

#[test]
fn tangent_line() {
    init_logging();
    // The s-curve reaches its local maximum y = 1/√3 at t = (3 - √3) / 6. Rounding decides
    // whether the default mode sees a double root or a complex pair, so only the strict
    // mode is checked here.
    let t = (3.0 - 3.0f64.sqrt()) / 6.0;
    let y = 1.0 / 3.0f64.sqrt();
    let segment = LineSegment {
        from: point(-1.0, y),
        to: point(4.0, y),
    };

    let options = IntersectionOptions::DEFAULT.with_repeated_root_tolerance(1e-6);
    let strict = s_curve()
        .line_segment_intersections_with_options(&segment, &options)
        .unwrap();
    assert_eq!(strict.len(), 2);
    for intersection in strict.iter() {
        assert!((intersection.t - t).abs() < 1e-6);
        assert!((intersection.point - point(3.0 * t, y)).length() < 1e-5);
    }
}

#[test]
fn tangent_at_endpoint() {
    init_logging();
    // y(t) = t³ - 3t + 2 = (t - 1)²(t + 2) touches y = 0 at the end of the curve, with an
    // exactly zero discriminant.
    let curve = CubicBezierSegment {
        from: point(0.0, 2.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    let segment = LineSegment {
        from: point(-1.0, 0.0),
        to: point(4.0, 0.0),
    };

    let result = intersect_curve_segment(&curve, &segment).unwrap();
    let touch = Intersection {
        t: 1.0,
        s: 0.8,
        point: point(3.0, 0.0),
    };
    assert_eq!(result.slots(), &[Some(touch), Some(touch), None]);
}

#[test]
fn degenerate_geometry() {
    init_logging();
    let segment = LineSegment {
        from: point(-2.0, -2.0),
        to: point(6.0, 6.0),
    };
    let on_line = CubicBezierSegment {
        from: point(0.5, 0.5),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(-1.0, -1.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(
        intersect_curve_segment(&on_line, &segment),
        Err(DegenerateGeometry::CurveOnLine)
    );

    let collapsed = LineSegment {
        from: point(2.0, 2.0),
        to: point(2.0, 2.0),
    };
    assert_eq!(
        intersect_curve_segment(&s_curve(), &collapsed),
        Err(DegenerateGeometry::ZeroLengthSegment)
    );
}

#[test]
fn solver_roots_are_sorted_and_in_range() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..2000 {
        let mut a: f64 = rng.random_range(0.1..1.0);
        if rng.random_bool(0.5) {
            a = -a;
        }
        let b = rng.random_range(-3.0..3.0);
        let c = rng.random_range(-3.0..3.0);
        let d = rng.random_range(-1.0..1.0);

        let roots = cubic_polynomial_roots(a, b, c, d);

        let mut previous = 0.0;
        let mut seen_empty = false;
        for slot in roots.slots() {
            match *slot {
                Some(t) => {
                    assert!(!seen_empty, "present root after an empty slot: {:?}", roots);
                    assert!((0.0..=1.0).contains(&t));
                    assert!(t >= previous);
                    previous = t;

                    let value = evaluate_cubic(&[a, b, c, d], t);
                    assert!(value.abs() < 1e-6, "P({}) = {} for {:?}", t, value, [a, b, c, d]);
                }
                None => {
                    seen_empty = true;
                }
            }
        }

        for t in roots.to_sentinel_array() {
            assert!(t == -1.0 || (0.0..=1.0).contains(&t));
        }
    }
}

#[test]
fn solver_finds_separated_roots() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..2000 {
        let r: [f64; 3] = [
            rng.random_range(-0.5..1.5),
            rng.random_range(-0.5..1.5),
            rng.random_range(-0.5..1.5),
        ];
        let k: f64 = rng.random_range(0.5..10.0);

        // Close roots make the sign of the discriminant depend on rounding.
        let separated = (r[0] - r[1]).abs() > 0.05
            && (r[1] - r[2]).abs() > 0.05
            && (r[0] - r[2]).abs() > 0.05;
        let near_bounds = r.iter().any(|t| t.abs() < 1e-6 || (t - 1.0).abs() < 1e-6);
        if !separated || near_bounds {
            continue;
        }

        // k * (t - r0)(t - r1)(t - r2)
        let roots = cubic_polynomial_roots(
            k,
            -k * (r[0] + r[1] + r[2]),
            k * (r[0] * r[1] + r[1] * r[2] + r[0] * r[2]),
            -k * r[0] * r[1] * r[2],
        );

        let mut expected: Vec<f64> = r
            .iter()
            .copied()
            .filter(|t| (0.0..=1.0).contains(t))
            .collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let found: Vec<f64> = roots.iter().collect();
        assert_eq!(found.len(), expected.len(), "{:?} vs {:?}", found, r);
        for (found, expected) in found.iter().zip(expected.iter()) {
            assert!((found - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn random_intersections_are_on_both_curves() {
    init_logging();
    let curves = generate_curves(3, 200);
    let segments = generate_segments(4, 50);

    let mut count = 0;
    for curve in &curves {
        for segment in &segments {
            let result = intersect_curve_segment(curve, segment).unwrap();
            for intersection in result.iter() {
                count += 1;
                assert!((0.0..=1.0).contains(&intersection.t));
                assert!((0.0..=1.0).contains(&intersection.s));
                assert!(intersection.point.x.is_finite() && intersection.point.y.is_finite());
                assert!((curve.sample(intersection.t) - intersection.point).length() < 1e-6);
                assert!(distance_to_line(intersection.point, segment) < 1e-5);
            }
        }
    }

    // Random curves of this size cross random segments fairly often.
    assert!(count > 0);
}

#[test]
fn flipping_the_segment_keeps_the_intersections() {
    init_logging();
    let curves = generate_curves(5, 100);
    let segments = generate_segments(6, 50);

    for curve in &curves {
        for segment in &segments {
            let a = intersect_curve_segment(curve, segment).unwrap();
            let b = intersect_curve_segment(curve, &segment.flip()).unwrap();

            assert_eq!(a.len(), b.len());
            for (ia, ib) in a.iter().zip(b.iter()) {
                assert!((ia.point - ib.point).length() < 1e-6);
                assert!((ia.s + ib.s - 1.0).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn rotated_s_curve() {
    init_logging();
    let segment = LineSegment {
        from: point(-1.0, 0.5),
        to: point(4.0, 0.5),
    };

    for i in 0..100 {
        let rotation = Rotation2D::radians(i as f64 * 0.0628);
        let transform = |p: Point<f64>| rotation.transform_point(p);

        let curve = s_curve();
        let curve = CubicBezierSegment {
            from: transform(curve.from),
            ctrl1: transform(curve.ctrl1),
            ctrl2: transform(curve.ctrl2),
            to: transform(curve.to),
        };
        let segment = LineSegment {
            from: transform(segment.from),
            to: transform(segment.to),
        };

        // The segment's parameter is measured along the x axis, which loses precision
        // when the segment is almost vertical.
        if segment.to_vector().x.abs() < 0.1 {
            continue;
        }

        let result = intersect_curve_segment(&curve, &segment).unwrap();
        assert_eq!(result.len(), 2, "angle {}: {:?}", i, result);
    }
}
