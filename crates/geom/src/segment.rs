use crate::scalar::Scalar;
use crate::{point, Box3D, Point};

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn start(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn end(&self) -> Point<Self::Scalar>;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Sample x at t (expecting t between 0 and 1).
    fn x(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).x
    }

    /// Sample y at t (expecting t between 0 and 1).
    fn y(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).y
    }

    /// Sample z at t (expecting t between 0 and 1).
    fn z(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).z
    }

    /// Swap the direction of the segment.
    fn flip(&self) -> Self;
}

pub trait BoundingBox {
    type Scalar: Scalar;

    /// Returns a conservative box that contains the segment.
    ///
    /// This does not necessarily return the smallest possible bounding box.
    fn fast_bounding_box(&self) -> Box3D<Self::Scalar> {
        let (min_x, max_x) = self.fast_bounding_range_x();
        let (min_y, max_y) = self.fast_bounding_range_y();
        let (min_z, max_z) = self.fast_bounding_range_z();

        Box3D {
            min: point(min_x, min_y, min_z),
            max: point(max_x, max_y, max_z),
        }
    }

    /// Returns a range of x values that contains the segment.
    fn fast_bounding_range_x(&self) -> (Self::Scalar, Self::Scalar);

    /// Returns a range of y values that contains the segment.
    fn fast_bounding_range_y(&self) -> (Self::Scalar, Self::Scalar);

    /// Returns a range of z values that contains the segment.
    fn fast_bounding_range_z(&self) -> (Self::Scalar, Self::Scalar);
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn start(&self) -> Point<$S> {
            self.start()
        }
        fn end(&self) -> Point<$S> {
            self.end()
        }
        fn sample(&self, t: $S) -> Point<$S> {
            self.sample(t)
        }
        fn x(&self, t: $S) -> $S {
            self.x(t)
        }
        fn y(&self, t: $S) -> $S {
            self.y(t)
        }
        fn z(&self, t: $S) -> $S {
            self.z(t)
        }
        fn flip(&self) -> Self {
            self.flip()
        }
    };
}

macro_rules! impl_bounding_box {
    ($S:ty) => {
        type Scalar = $S;
        fn fast_bounding_range_x(&self) -> ($S, $S) {
            self.fast_bounding_range_x()
        }
        fn fast_bounding_range_y(&self) -> ($S, $S) {
            self.fast_bounding_range_y()
        }
        fn fast_bounding_range_z(&self) -> ($S, $S) {
            self.fast_bounding_range_z()
        }
    };
}
