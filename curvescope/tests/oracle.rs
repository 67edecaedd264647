//! Membership and enumeration tests.

use curvescope::{
    BigInt, BigUint, CurveDomain, CurvePoint, NamedCurve, PlotPoint, PlotWindow, SampleRange,
};
use proptest::prelude::*;

/// `y² = x³ + 2x + 3` over `GF(97)`
fn toy() -> CurveDomain {
    CurveDomain::new(BigUint::from(97u32), BigInt::from(2), BigInt::from(3)).unwrap()
}

/// Every affine point with `x_min <= x <= x_max`, found by trying every `y`.
fn brute_force(domain: &CurveDomain, x_min: u32, x_max: u32) -> Vec<CurvePoint> {
    let oracle = domain.oracle();
    let p = u32::try_from(domain.p()).unwrap();
    let mut points = Vec::new();

    for x in x_min..=x_max.min(p - 1) {
        let mut ys: Vec<u32> = (0..p)
            .filter(|&y| oracle.is_on_curve(&CurvePoint::new(x.into(), y.into())))
            .collect();
        ys.sort_by_key(|y| y % 2);
        points.extend(ys.into_iter().map(|y| CurvePoint::new(x.into(), y.into())));
    }

    points
}

#[test]
fn generators_are_on_curve() {
    for curve in NamedCurve::ALL {
        let domain = curve.domain();
        assert!(domain.oracle().is_on_curve(&curve.generator()), "{curve}");
    }
}

#[test]
fn tampered_generator_is_not_on_curve() {
    let domain = NamedCurve::P256.domain();
    let oracle = domain.oracle();
    let mut point = NamedCurve::P256.generator();
    point.y.set_bit(7, !point.y.bit(7));
    assert!(!oracle.is_on_curve(&point));
}

#[test]
fn named_domains_pass_validation() {
    for curve in NamedCurve::ALL {
        let trusted = curve.domain();
        let checked = CurveDomain::new(
            trusted.p().clone(),
            BigInt::from(trusted.a().clone()),
            BigInt::from(trusted.b().clone()),
        )
        .unwrap();
        assert_eq!(checked, trusted, "{curve}");
    }
}

#[test]
fn full_enumeration_matches_brute_force() {
    let domain = toy();
    let expected = brute_force(&domain, 0, 96);

    let points: Vec<_> = domain
        .oracle()
        .enumerate_points(SampleRange::new(0.0, 96.0, 96))
        .into_iter()
        .collect();

    assert!(!expected.is_empty());
    assert_eq!(points, expected);
}

#[test]
fn every_sample_contributes_its_points() {
    let domain = toy();
    let range = SampleRange::new(0.0, 96.0, 960);

    // samples 0.0, 0.1, ..., 0.9 all truncate to 0, and so on
    let expected: Vec<_> = (0..=range.samples)
        .flat_map(|i| {
            let x = range.x_at(i) as u32;
            brute_force(&domain, x, x)
        })
        .collect();

    let points: Vec<_> = domain.oracle().enumerate_points(range).into_iter().collect();

    assert_eq!(points, expected);
    assert!(points.len() > 9 * brute_force(&domain, 0, 96).len());
}

#[test]
fn samples_outside_the_field_are_skipped() {
    let domain = toy();

    let points: Vec<_> = domain
        .oracle()
        .enumerate_points(SampleRange::new(-10.0, 10.0, 20))
        .into_iter()
        .collect();
    assert_eq!(points, brute_force(&domain, 0, 10));

    let points: Vec<_> = domain
        .oracle()
        .enumerate_points(SampleRange::new(90.0, 200.0, 110))
        .into_iter()
        .collect();
    assert_eq!(points, brute_force(&domain, 90, 96));
}

#[test]
fn degenerate_ranges_are_empty() {
    let domain = toy();
    let oracle = domain.oracle();

    assert_eq!(oracle.enumerate_points(SampleRange::new(0.0, 96.0, 0)).iter().count(), 0);
    assert_eq!(oracle.enumerate_points(SampleRange::new(50.0, 10.0, 40)).iter().count(), 0);
    assert_eq!(oracle.enumerate_points(SampleRange::new(-50.0, -1.0, 49)).iter().count(), 0);
}

#[test]
fn enumeration_is_restartable() {
    let domain = toy();
    let sample = domain.oracle().enumerate_points(SampleRange::new(0.0, 50.0, 25));

    let first: Vec<_> = sample.iter().collect();
    let second: Vec<_> = (&sample).into_iter().collect();
    assert_eq!(first, second);

    let mut partial = sample.iter();
    partial.next();
    let third: Vec<_> = sample.iter().collect();
    assert_eq!(first, third);
}

#[test]
fn enumerated_points_come_in_symmetric_pairs() {
    let domain = toy();
    let points: Vec<_> = domain
        .oracle()
        .enumerate_points(SampleRange::new(0.0, 96.0, 96))
        .into_iter()
        .collect();

    assert_symmetric_pairs(&domain, &points);
}

/// Check membership of every point and that each x yields its pair back to back, even `y` first.
fn assert_symmetric_pairs(domain: &CurveDomain, points: &[CurvePoint]) {
    let oracle = domain.oracle();
    let zero = BigUint::from(0u32);
    let mut i = 0;

    while i < points.len() {
        let point = &points[i];
        assert!(oracle.is_on_curve(point), "{point:?}");
        assert!(!point.y.bit(0), "even y comes first");

        if point.y == zero {
            i += 1;
        } else {
            assert_eq!(points[i + 1], oracle.negate(point));
            i += 2;
        }
    }
}

#[test]
fn enumeration_over_every_square_root_algorithm() {
    let mut domains: Vec<_> = NamedCurve::ALL.into_iter().map(NamedCurve::domain).collect();

    // y² = x³ + x + 1 over GF(101), GF(103) and GF(97): Atkins, Shanks and Tonelli-Shanks
    for p in [101u32, 103, 97] {
        domains.push(CurveDomain::new(BigUint::from(p), BigInt::from(1), BigInt::from(1)).unwrap());
    }

    for domain in &domains {
        let points: Vec<_> = domain
            .oracle()
            .enumerate_points(SampleRange::new(0.0, 200.0, 200))
            .into_iter()
            .collect();

        assert!(!points.is_empty(), "p = {}", domain.p());
        assert_symmetric_pairs(domain, &points);
    }
}

#[test]
fn neighborhood_matches_brute_force() {
    let domain = toy();
    let oracle = domain.oracle();

    let points: Vec<_> = oracle.enumerate_neighborhood(&BigUint::from(20u32), 5).collect();
    assert_eq!(points, brute_force(&domain, 15, 25));

    // clamped to [0, p)
    let points: Vec<_> = oracle.enumerate_neighborhood(&BigUint::from(50u32), 200).collect();
    assert_eq!(points, brute_force(&domain, 0, 96));
}

#[test]
fn neighborhood_of_large_coordinates_is_exact() {
    let curve = NamedCurve::P256;
    let domain = curve.domain();
    let oracle = domain.oracle();
    let generator = curve.generator();

    let points: Vec<_> = oracle.enumerate_neighborhood(&generator.x, 10).collect();
    assert!(points.contains(&generator));
    assert!(points.contains(&oracle.negate(&generator)));

    for point in &points {
        assert!(oracle.is_on_curve(point));
        assert!(point.x >= &generator.x - 10u32 && point.x <= &generator.x + 10u32);
    }
}

#[test]
fn plot_window_around_a_point() {
    let domain = toy();
    let oracle = domain.oracle();
    let center = CurvePoint::new(BigUint::from(3u32), BigUint::from(6u32));
    let window = PlotWindow::around(PlotPoint::from(&center), PlotWindow::DEFAULT_MARGIN);

    let points: Vec<_> = oracle
        .enumerate_points(window.sample_range(PlotWindow::DEFAULT_SAMPLES))
        .into_iter()
        .collect();

    assert!(points.contains(&center));
    assert!(points.iter().all(|point| window.contains(point.into())));
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_enumeration_matches_sequential() {
    let domain = toy();
    let oracle = domain.oracle();

    for range in [
        SampleRange::new(0.0, 96.0, 96),
        SampleRange::new(-10.0, 200.0, 1000),
        SampleRange::new(10.0, 0.0, 10),
    ] {
        let sequential: Vec<_> = oracle.enumerate_points(range).into_iter().collect();
        assert_eq!(oracle.par_enumerate_points(range), sequential);
    }
}

prop_compose! {
    fn p256_x()(bytes in any::<[u8; 32]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes) % NamedCurve::P256.domain().p()
    }
}

prop_compose! {
    fn p224_x()(bytes in any::<[u8; 28]>()) -> BigUint {
        BigUint::from_bytes_be(&bytes) % NamedCurve::P224.domain().p()
    }
}

proptest! {
    #[test]
    fn lifted_points_are_symmetric(x in p256_x(), odd in any::<bool>()) {
        let domain = NamedCurve::P256.domain();
        let oracle = domain.oracle();

        if let Some(point) = oracle.lift_x(&x, odd) {
            prop_assert_eq!(point.y.bit(0), odd);
            prop_assert!(oracle.is_on_curve(&point));
            prop_assert!(oracle.is_on_curve(&oracle.negate(&point)));
            prop_assert_eq!(oracle.lift_x(&x, !odd), Some(oracle.negate(&point)));
        }
    }

    #[test]
    fn lifted_points_decode_from_sec1(x in p224_x()) {
        let domain = NamedCurve::P224.domain();
        let oracle = domain.oracle();

        if let Some(point) = oracle.lift_x(&x, false) {
            let bytes = oracle.encode_sec1(&point, true).unwrap();
            prop_assert_eq!(oracle.decode_sec1(&bytes), Ok(point));
        }
    }
}
