use bezier3d::extra::parser::{parse_cubic_bezier, ParseError};
use bezier3d::geom::{CubicBezierSegment, Point, Scalar};

pub use bezier3d::geom::CubicBezier;

/// A handful of curves covering the usual shapes: straight, loops, cusps, large coordinates.
pub static CURVES: &str = "
# straight line, control points on the endpoints
0 0 0, 10 0 0, 0 0 0, 10 0 0
# closed loop
0 0 0, 0 0 0, 10 0 0, 10 0 0
# s-curve
0 0 0, 100 100 0, 100 0 0, 0 100 0
# twisted in z
-100 -100 20, -100 100 -20, 100 -100 0, -100 100 50
# cusp
0 0 0, 10 0 10, 10 10 10, 0 10 0
# single point
3 -2 0.25, 3 -2 0.25, 3 -2 0.25, 3 -2 0.25
# large coordinates
1000.5 -2000 30000, -4500 8000 0.5, 5000 -1000 7000, 2500 3500 -6000
";

/// Reads one curve per line, skipping empty lines and `#` comments.
pub fn load_curves(text: &str) -> Result<Vec<CubicBezier>, ParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_cubic_bezier)
        .collect()
}

pub fn test_curves() -> Vec<CubicBezier> {
    load_curves(CURVES).unwrap()
}

/// A way to evaluate a cubic bézier segment at t.
pub trait Sample<S> {
    fn sample(curve: &CubicBezierSegment<S>, t: S) -> Point<S>;
}

/// Bernstein blend, as implemented by `CubicBezierSegment::sample`.
pub struct Bernstein;
impl<S: Scalar> Sample<S> for Bernstein {
    fn sample(curve: &CubicBezierSegment<S>, t: S) -> Point<S> {
        curve.sample(t)
    }
}

/// Repeated linear interpolation of the control polygon.
pub struct DeCasteljau;
impl<S: Scalar> Sample<S> for DeCasteljau {
    fn sample(curve: &CubicBezierSegment<S>, t: S) -> Point<S> {
        let a = curve.start.lerp(curve.control1, t);
        let b = curve.control1.lerp(curve.control2, t);
        let c = curve.control2.lerp(curve.end, t);
        let ab = a.lerp(b, t);
        let bc = b.lerp(c, t);

        ab.lerp(bc, t)
    }
}

/// Power basis evaluated with Horner's scheme.
pub struct Horner;
impl<S: Scalar> Sample<S> for Horner {
    fn sample(curve: &CubicBezierSegment<S>, t: S) -> Point<S> {
        let p0 = curve.start.to_vector();
        let p1 = curve.control1.to_vector();
        let p2 = curve.control2.to_vector();
        let p3 = curve.end.to_vector();

        let c1 = (p1 - p0) * S::THREE;
        let c2 = (p0 - p1 * S::TWO + p2) * S::THREE;
        let c3 = p3 - p0 + (p1 - p2) * S::THREE;

        (p0 + (c1 + (c2 + c3 * t) * t) * t).to_point()
    }
}

pub fn sample_n<A: Sample<f32>>(curves: &[CubicBezier], n: u32) -> Point<f32> {
    let mut sum = Point::origin();
    let step = 1.0 / n as f32;
    for curve in curves {
        for i in 0..=n {
            let p = A::sample(curve, i as f32 * step);
            sum.x += p.x;
            sum.y += p.y;
            sum.z += p.z;
        }
    }

    sum
}

#[cfg(test)]
fn check_strategy<A: Sample<f32>>() {
    use bezier3d::geom::BoundingBox;

    for curve in &test_curves() {
        let tolerance = f32::epsilon_for(curve.fast_bounding_box().max.to_vector().length());
        for i in -4..=24 {
            let t = i as f32 / 20.0;
            let expected = curve.sample(t);
            let actual = A::sample(curve, t);
            let diff = (actual - expected).length();
            assert!(
                diff <= tolerance * 10.0,
                "curve {curve:?} t = {t}: {actual:?} != {expected:?}"
            );
        }
    }
}

#[test]
fn fixtures_parse() {
    let curves = test_curves();
    assert_eq!(curves.len(), 7);
    assert!(curves[5].is_a_point(0.0));
}

#[test]
fn fixture_endpoints() {
    for curve in &test_curves() {
        assert_eq!(curve.sample(0.0), curve.start);
        assert_eq!(curve.sample(1.0), curve.end);
    }
}

#[test]
fn de_casteljau_matches_bernstein() {
    check_strategy::<DeCasteljau>();
}

#[test]
fn horner_matches_bernstein() {
    check_strategy::<Horner>();
}

#[test]
fn invalid_fixture() {
    assert!(load_curves("0 0 0, 1 1 1\n").is_err());
}
