#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 3D geometric primitives on top of euclid.
//!
//! This crate is reexported in [bezier3d](https://docs.rs/bezier3d/).
//!
//! # Overview.
//!
//! This crate implements some of the maths to work with:
//!
//! - cubic bézier segments in 3D space,
//! - line segments in 3D space.
//!
//! # Sampling
//!
//! A cubic bézier segment is a blend of its four points weighted by the cubic
//! Bernstein polynomials:
//!
//! ```text
//! P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * control1 + 3 * (1 - t) * t² * control2 + t³ * end
//! ```
//!
//! Sampling is defined for any `t`. Values between 0 and 1 map onto the segment
//! itself, values outside of that range extrapolate the same polynomial.
//! Clamping, if needed, is up to the caller.
//!
//! ```
//! use bezier3d_geom::{point, CubicBezier};
//!
//! let curve = CubicBezier::new(
//!     point(0.0, 0.0, 0.0),
//!     point(0.0, 0.0, 0.0),
//!     point(10.0, 0.0, 0.0),
//!     point(10.0, 0.0, 0.0),
//! );
//!
//! assert_eq!(curve.sample(0.5), point(7.5, 0.0, 0.0));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod segment;
pub mod cubic_bezier;
mod line;
pub mod utils;

#[doc(inline)]
pub use crate::cubic_bezier::{CubicBezier, CubicBezierSegment};
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::segment::{BoundingBox, Segment};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        /// Epsilon constants are usually not a good way to deal with float precision.
        /// Float precision depends on the magnitude of the values and so should appropriate
        /// epsilons.
        fn epsilon_for(_reference: Self) -> Self {
            Self::EPSILON
        }

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;

        fn epsilon_for(reference: Self) -> Self {
            let magnitude = reference.abs() as i32;
            match magnitude {
                0..=7 => 1e-5,
                8..=1023 => 1e-3,
                1024..=4095 => 1e-2,
                4096..=65535 => 1e-1,
                65536..=8_388_607 => 0.5,
                _ => 1.0,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-8;

        fn epsilon_for(reference: Self) -> Self {
            let magnitude = reference.abs() as i64;
            match magnitude {
                0..=65_535 => 1e-8,
                65_536..=8_388_607 => 1e-5,
                8_388_608..=4_294_967_295 => 1e-3,
                _ => 1e-1,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point3D`.
pub use euclid::default::Point3D as Point;

/// Alias for `euclid::default::Vector3D`.
pub use euclid::default::Vector3D as Vector;

/// Alias for `euclid::default::Box3D`.
pub use euclid::default::Box3D;

/// Alias for `euclid::default::Transform3D`.
pub type Transform<S> = euclid::default::Transform3D<S>;

/// Alias for `euclid::Translation3D` without units.
pub type Translation<S> = euclid::Translation3D<S, euclid::UnknownUnit, euclid::UnknownUnit>;

/// Alias for `euclid::default::Scale`.
pub use euclid::default::Scale;

/// Shorthand for `Vector::new(x, y, z)`.
#[inline]
pub fn vector<S>(x: S, y: S, z: S) -> Vector<S> {
    Vector::new(x, y, z)
}

/// Shorthand for `Point::new(x, y, z)`.
#[inline]
pub fn point<S>(x: S, y: S, z: S) -> Point<S> {
    Point::new(x, y, z)
}

pub mod traits {
    pub use crate::segment::{BoundingBox, Segment};

    use crate::{point, vector, Point, Scalar, Scale, Transform, Translation, Vector};

    /// Transforms that can be applied to segments with `transformed`.
    ///
    /// Implemented for `Transform`, `Translation` and `Scale`. `euclid::Rotation3D` is not
    /// supported directly, convert it with `Rotation3D::to_transform` first.
    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
        fn transform_vector(&self, v: Vector<S>) -> Vector<S>;
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        /// Applies the full homogeneous transform, including the perspective divide.
        ///
        /// Unlike `Transform3D::transform_point3d` this never fails: a point that maps
        /// onto or behind the projection plane yields non-finite or mirrored coordinates.
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            let x = p.x * self.m11 + p.y * self.m21 + p.z * self.m31 + self.m41;
            let y = p.x * self.m12 + p.y * self.m22 + p.z * self.m32 + self.m42;
            let z = p.x * self.m13 + p.y * self.m23 + p.z * self.m33 + self.m43;
            let w = p.x * self.m14 + p.y * self.m24 + p.z * self.m34 + self.m44;

            point(x / w, y / w, z / w)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector3d(v)
        }
    }

    impl<S: Scalar> Transformation<S> for Translation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            p + vector(self.x, self.y, self.z)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            v
        }
    }

    impl<S: Scalar> Transformation<S> for Scale<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            p * self.0
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            v * self.0
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }
}
