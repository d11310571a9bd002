use crate::scalar::Scalar;
use crate::segment::{BoundingBox, Segment};
use crate::traits::Transformation;
use crate::utils::min_max;
use crate::{Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub start: Point<S>,
    pub end: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.start.lerp(self.end, t)
    }

    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.start.x * (S::ONE - t) + self.end.x * t
    }

    /// Sample the y coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        self.start.y * (S::ONE - t) + self.end.y * t
    }

    /// Sample the z coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn z(&self, t: S) -> S {
        self.start.z * (S::ONE - t) + self.end.z * t
    }

    #[inline]
    pub fn start(&self) -> Point<S> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point<S> {
        self.end
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the vector between the beginning and the end.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.end - self.start
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

    /// Applies the transform to this segment and returns the results.
    #[inline]
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        LineSegment {
            start: transform.transform_point(self.start),
            end: transform.transform_point(self.end),
        }
    }

    #[inline]
    pub fn fast_bounding_range_x(&self) -> (S, S) {
        min_max(self.start.x, self.end.x)
    }

    #[inline]
    pub fn fast_bounding_range_y(&self) -> (S, S) {
        min_max(self.start.y, self.end.y)
    }

    #[inline]
    pub fn fast_bounding_range_z(&self) -> (S, S) {
        min_max(self.start.z, self.end.z)
    }

    pub fn to_f32(&self) -> LineSegment<f32> {
        LineSegment {
            start: self.start.to_f32(),
            end: self.end.to_f32(),
        }
    }

    pub fn to_f64(&self) -> LineSegment<f64> {
        LineSegment {
            start: self.start.to_f64(),
            end: self.end.to_f64(),
        }
    }
}

impl<S: Scalar> Segment for LineSegment<S> {
    impl_segment!(S);
}

impl<S: Scalar> BoundingBox for LineSegment<S> {
    impl_bounding_box!(S);
}

#[test]
fn sample_line_segment() {
    use crate::point;

    let l = LineSegment {
        start: point(1.0f32, 2.0, 3.0),
        end: point(3.0, 6.0, -1.0),
    };

    assert_eq!(l.sample(0.0), l.start);
    assert_eq!(l.sample(1.0), l.end);
    assert_eq!(l.sample(0.5), point(2.0, 4.0, 1.0));
    assert_eq!(l.x(0.5), 2.0);
    assert_eq!(l.y(0.5), 4.0);
    assert_eq!(l.z(0.5), 1.0);
}

#[test]
fn line_segment_length() {
    use crate::point;

    let l = LineSegment {
        start: point(0.0f32, 0.0, 0.0),
        end: point(2.0, 3.0, 6.0),
    };

    assert_eq!(l.square_length(), 49.0);
    assert!((l.length() - 7.0).abs() < 1e-6);
    assert_eq!(l.flip().to_vector(), -l.to_vector());
}

#[test]
fn line_segment_bounding_box() {
    use crate::{point, Box3D};

    let l = LineSegment {
        start: point(4.0f32, -1.0, 2.0),
        end: point(-3.0, 5.0, 2.0),
    };

    assert_eq!(
        l.fast_bounding_box(),
        Box3D {
            min: point(-3.0, -1.0, 2.0),
            max: point(4.0, 5.0, 2.0),
        }
    );
}
