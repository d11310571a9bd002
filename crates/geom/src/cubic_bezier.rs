use crate::scalar::Scalar;
use crate::segment::{BoundingBox, Segment};
use crate::traits::Transformation;
use crate::utils::{cubic_bernstein_weights, min_max4};
use crate::{point, LineSegment, Point};

/// A 3d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * control1 + 3 * t² * (1 - t) * control2 + t³ * end```
///
/// The four points are not constrained relative to each other. Collinear or coincident
/// points simply produce a degenerate curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub start: Point<S>,
    pub control1: Point<S>,
    pub control2: Point<S>,
    pub end: Point<S>,
}

/// Single precision cubic bézier segment.
pub type CubicBezier = CubicBezierSegment<f32>;

impl<S: Scalar> CubicBezierSegment<S> {
    /// Creates a curve from its endpoints and control points.
    ///
    /// Note the argument order: both endpoints come first, followed by the two
    /// control points.
    #[inline]
    pub fn new(start: Point<S>, end: Point<S>, control1: Point<S>, control2: Point<S>) -> Self {
        CubicBezierSegment {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Creates a curve from twelve coordinates, in the same order as [`new`](Self::new):
    /// start, end, first control point, second control point.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn from_coords(
        start_x: S,
        start_y: S,
        start_z: S,
        end_x: S,
        end_y: S,
        end_z: S,
        control1_x: S,
        control1_y: S,
        control1_z: S,
        control2_x: S,
        control2_y: S,
        control2_z: S,
    ) -> Self {
        Self::new(
            point(start_x, start_y, start_z),
            point(end_x, end_y, end_z),
            point(control1_x, control1_y, control1_z),
            point(control2_x, control2_y, control2_z),
        )
    }

    /// Sample the curve at t.
    ///
    /// The segment itself lies between t = 0 and t = 1. Other values of t are not
    /// clamped and extrapolate the same polynomial.
    pub fn sample(&self, t: S) -> Point<S> {
        let [b0, b1, b2, b3] = cubic_bernstein_weights(t);

        self.start * b0
            + self.control1.to_vector() * b1
            + self.control2.to_vector() * b2
            + self.end.to_vector() * b3
    }

    /// Sample the x coordinate of the curve at t.
    pub fn x(&self, t: S) -> S {
        let [b0, b1, b2, b3] = cubic_bernstein_weights(t);
        self.start.x * b0 + self.control1.x * b1 + self.control2.x * b2 + self.end.x * b3
    }

    /// Sample the y coordinate of the curve at t.
    pub fn y(&self, t: S) -> S {
        let [b0, b1, b2, b3] = cubic_bernstein_weights(t);
        self.start.y * b0 + self.control1.y * b1 + self.control2.y * b2 + self.end.y * b3
    }

    /// Sample the z coordinate of the curve at t.
    pub fn z(&self, t: S) -> S {
        let [b0, b1, b2, b3] = cubic_bernstein_weights(t);
        self.start.z * b0 + self.control1.z * b1 + self.control2.z * b2 + self.end.z * b3
    }

    #[inline]
    pub fn start(&self) -> Point<S> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point<S> {
        self.end
    }

    /// The four points of the control polygon, in curve order.
    #[inline]
    pub fn points(&self) -> [Point<S>; 4] {
        [self.start, self.control1, self.control2, self.end]
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns whether the curve can be approximated with a single point, given
    /// a tolerance threshold.
    pub fn is_a_point(&self, tolerance: S) -> bool {
        let tolerance_squared = tolerance * tolerance;
        // Use <= so that tolerance can be zero.
        (self.start - self.end).square_length() <= tolerance_squared
            && (self.start - self.control1).square_length() <= tolerance_squared
            && (self.end - self.control2).square_length() <= tolerance_squared
    }

    /// Applies the transform to this curve and returns the results.
    #[inline]
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        CubicBezierSegment {
            start: transform.transform_point(self.start),
            control1: transform.transform_point(self.control1),
            control2: transform.transform_point(self.control2),
            end: transform.transform_point(self.end),
        }
    }

    /// Swap the beginning and the end of the segment.
    ///
    /// `curve.flip().sample(1.0 - t)` is the same point as `curve.sample(t)`.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            start: self.end,
            control1: self.control2,
            control2: self.control1,
            end: self.start,
        }
    }

    /// Returns a conservative range of x that contains this curve for t in [0, 1].
    pub fn fast_bounding_range_x(&self) -> (S, S) {
        min_max4(self.start.x, self.control1.x, self.control2.x, self.end.x)
    }

    /// Returns a conservative range of y that contains this curve for t in [0, 1].
    pub fn fast_bounding_range_y(&self) -> (S, S) {
        min_max4(self.start.y, self.control1.y, self.control2.y, self.end.y)
    }

    /// Returns a conservative range of z that contains this curve for t in [0, 1].
    pub fn fast_bounding_range_z(&self) -> (S, S) {
        min_max4(self.start.z, self.control1.z, self.control2.z, self.end.z)
    }

    pub fn to_f32(&self) -> CubicBezierSegment<f32> {
        CubicBezierSegment {
            start: self.start.to_f32(),
            control1: self.control1.to_f32(),
            control2: self.control2.to_f32(),
            end: self.end.to_f32(),
        }
    }

    pub fn to_f64(&self) -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            start: self.start.to_f64(),
            control1: self.control1.to_f64(),
            control2: self.control2.to_f64(),
            end: self.end.to_f64(),
        }
    }
}

/// The default curve has all four points at the origin: a zero-length segment
/// that samples to the origin for any t.
impl<S: Scalar> Default for CubicBezierSegment<S> {
    fn default() -> Self {
        let origin = point(S::ZERO, S::ZERO, S::ZERO);
        CubicBezierSegment {
            start: origin,
            control1: origin,
            control2: origin,
            end: origin,
        }
    }
}

impl<S: Scalar> Segment for CubicBezierSegment<S> {
    impl_segment!(S);
}

impl<S: Scalar> BoundingBox for CubicBezierSegment<S> {
    impl_bounding_box!(S);
}

#[cfg(test)]
fn assert_point_approx_eq(a: Point<f32>, b: Point<f32>, threshold: f32) {
    let dx = f32::abs(a.x - b.x);
    let dy = f32::abs(a.y - b.y);
    let dz = f32::abs(a.z - b.z);
    if dx > threshold || dy > threshold || dz > threshold {
        std::println!("left:  {a:?}");
        std::println!("right: {b:?}");
        std::println!("diff = {dx:?} {dy:?} {dz:?}");
        panic!("The points are not equal");
    }
}

#[cfg(test)]
fn test_curves() -> [CubicBezier; 4] {
    [
        CubicBezier::new(
            point(0.0, 0.0, 0.0),
            point(10.0, 0.0, 0.0),
            point(0.0, 0.0, 0.0),
            point(10.0, 0.0, 0.0),
        ),
        CubicBezier::new(
            point(1.0, 2.0, 3.0),
            point(-4.0, 8.0, 0.5),
            point(5.0, -1.0, 7.0),
            point(2.5, 3.5, -6.0),
        ),
        CubicBezier::new(
            point(-100.0, -100.0, 20.0),
            point(-100.0, 100.0, -20.0),
            point(100.0, -100.0, 0.0),
            point(-100.0, 100.0, 50.0),
        ),
        CubicBezier::new(
            point(0.0, 0.0, 0.0),
            point(0.0, 0.0, 0.0),
            point(10.0, 0.0, 0.0),
            point(10.0, 0.0, 0.0),
        ),
    ]
}

#[test]
fn sample_endpoints() {
    for curve in &test_curves() {
        assert_point_approx_eq(curve.sample(0.0), curve.start, 1e-5);
        assert_point_approx_eq(curve.sample(1.0), curve.end, 1e-5);
    }
}

#[test]
fn sample_straight_line() {
    let curve = CubicBezier::new(
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    );

    assert_point_approx_eq(curve.sample(0.5), point(5.0, 0.0, 0.0), 1e-5);
}

#[test]
fn sample_closed_loop() {
    // b1 pairs with control1 and b2 with control2.
    let curve = CubicBezier::new(
        point(0.0, 0.0, 0.0),
        point(0.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
        point(10.0, 0.0, 0.0),
    );

    assert_point_approx_eq(curve.sample(0.5), point(7.5, 0.0, 0.0), 1e-5);
}

#[test]
fn control_point_pairing() {
    // With distinct control points, swapping them must change the curve.
    let curve = CubicBezier::new(
        point(0.0, 0.0, 0.0),
        point(0.0, 0.0, 0.0),
        point(8.0, 0.0, 0.0),
        point(0.0, 0.0, 8.0),
    );

    // b1(0.25) = 3 * 0.25 * 0.75² = 0.421875, b2(0.25) = 3 * 0.25² * 0.75 = 0.140625
    assert_point_approx_eq(curve.sample(0.25), point(3.375, 0.0, 1.125), 1e-5);
    assert_point_approx_eq(curve.sample(0.75), point(1.125, 0.0, 3.375), 1e-5);
}

#[test]
fn flip_symmetry() {
    for curve in &test_curves() {
        let flipped = curve.flip();
        assert_eq!(flipped.start, curve.end);
        assert_eq!(flipped.control1, curve.control2);
        assert_eq!(flipped.control2, curve.control1);
        assert_eq!(flipped.end, curve.start);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_point_approx_eq(curve.sample(t), flipped.sample(1.0 - t), 1e-3);
        }
    }
}

#[test]
fn degenerate_curve() {
    let p = point(3.0f32, -2.0, 0.25);
    let curve = CubicBezier::new(p, p, p, p);

    for i in -5..=15 {
        let t = i as f32 / 10.0;
        assert_point_approx_eq(curve.sample(t), p, 1e-5);
    }

    assert!(curve.is_a_point(0.0));
}

#[test]
fn default_is_origin() {
    let curve = CubicBezier::default();
    let origin = point(0.0, 0.0, 0.0);

    assert_eq!(curve.points(), [origin; 4]);
    assert_eq!(curve.sample(0.3), origin);
    assert!(curve.is_a_point(0.0));
}

#[test]
fn from_coords_matches_new() {
    let a = CubicBezier::from_coords(
        1.0, 2.0, 3.0, -4.0, 8.0, 0.5, 5.0, -1.0, 7.0, 2.5, 3.5, -6.0,
    );
    let b = CubicBezier::new(
        point(1.0, 2.0, 3.0),
        point(-4.0, 8.0, 0.5),
        point(5.0, -1.0, 7.0),
        point(2.5, 3.5, -6.0),
    );

    assert_eq!(a, b);
    for i in 0..=8 {
        let t = i as f32 / 8.0;
        assert_eq!(a.sample(t), b.sample(t));
    }
}

#[test]
fn sample_per_axis() {
    for curve in &test_curves() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = curve.sample(t);
            assert!((curve.x(t) - p.x).abs() < 1e-3);
            assert!((curve.y(t) - p.y).abs() < 1e-3);
            assert!((curve.z(t) - p.z).abs() < 1e-3);
        }
    }
}

#[test]
fn sample_extrapolates() {
    let curve = CubicBezier::new(
        point(0.0, 0.0, 0.0),
        point(3.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(2.0, 0.0, 0.0),
    );

    // Evenly spaced control points give P(t) = 3t, also outside of [0, 1].
    assert_point_approx_eq(curve.sample(-1.0), point(-3.0, 0.0, 0.0), 1e-4);
    assert_point_approx_eq(curve.sample(2.0), point(6.0, 0.0, 0.0), 1e-4);
}

#[test]
fn sample_propagates_nan() {
    let curve = test_curves()[1];

    assert!(curve.sample(f32::NAN).x.is_nan());

    let mut nan_curve = curve;
    nan_curve.control2.y = f32::NAN;
    let p = nan_curve.sample(0.5);
    assert!(p.y.is_nan());
    assert!(!p.x.is_nan());
}

#[test]
fn fast_bounding_box_for_cubic_bezier_segment() {
    use crate::Box3D;

    let curve = test_curves()[1];
    let expected = Box3D {
        min: point(-4.0, -1.0, -6.0),
        max: point(5.0, 8.0, 7.0),
    };

    assert_eq!(curve.fast_bounding_box(), expected);

    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let p = curve.sample(t);
        assert!(p.x >= expected.min.x && p.x <= expected.max.x);
        assert!(p.y >= expected.min.y && p.y <= expected.max.y);
        assert!(p.z >= expected.min.z && p.z <= expected.max.z);
    }
}

#[test]
fn transformed_translation() {
    use crate::{vector, Translation};

    let curve = test_curves()[1];
    let translation = Translation::new(1.0f32, -2.0, 0.5);
    let moved = curve.transformed(&translation);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_point_approx_eq(moved.sample(t), curve.sample(t) + vector(1.0, -2.0, 0.5), 1e-3);
    }
}

#[test]
fn transformed_matrix() {
    use crate::Transform;

    let curve = test_curves()[2];
    let transform = Transform::scale(2.0f32, 2.0, 2.0).then_translate(crate::vector(0.0, 0.0, 10.0));
    let transformed = curve.transformed(&transform);

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = curve.sample(t);
        assert_point_approx_eq(
            transformed.sample(t),
            point(p.x * 2.0, p.y * 2.0, p.z * 2.0 + 10.0),
            1e-2,
        );
    }
}

#[test]
fn transformed_scale() {
    use crate::Scale;

    let curve = test_curves()[1];
    let scaled = curve.transformed(&Scale::new(3.0f32));

    assert_eq!(scaled.start, point(3.0, 6.0, 9.0));
    assert_eq!(scaled.end, point(-12.0, 24.0, 1.5));
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = curve.sample(t);
        assert_point_approx_eq(scaled.sample(t), point(p.x * 3.0, p.y * 3.0, p.z * 3.0), 1e-3);
    }

    assert_eq!(
        Transformation::transform_vector(&Scale::new(2.0f32), crate::vector(1.0, -2.0, 0.5)),
        crate::vector(2.0, -4.0, 1.0)
    );
}

#[test]
fn baseline_and_segment_trait() {
    fn sample_generic<T: Segment>(segment: &T, t: T::Scalar) -> Point<T::Scalar> {
        segment.sample(t)
    }

    let curve = test_curves()[0];
    let baseline = curve.baseline();

    assert_eq!(baseline.start, curve.start);
    assert_eq!(baseline.end, curve.end);
    // The control points of this curve lie on the baseline.
    assert_point_approx_eq(sample_generic(&curve, 0.5), sample_generic(&baseline, 0.5), 1e-5);
    assert_eq!(Segment::start(&curve), curve.start);
    assert_eq!(Segment::end(&curve.flip()), curve.start);
}

#[test]
fn scalar_conversions() {
    let curve = test_curves()[1];
    let curve64 = curve.to_f64();

    assert_eq!(curve64.to_f32(), curve);
    assert!((curve64.sample(0.3).to_f32() - curve.sample(0.3)).length() < 1e-4);
}
