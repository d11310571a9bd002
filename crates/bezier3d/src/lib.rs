#![deny(bare_trait_objects)]
#![no_std]

//! Cubic bézier segments in 3D space.
//!
//! # Crates
//!
//! This meta-crate (`bezier3d`) reexports the following sub-crates for convenience:
//!
//! * **bezier3d_geom** - 3d cubic bézier and line segments on top of euclid.
//! * **bezier3d_extra** - Reading and writing curves as text.
//!
//! Each `bezier3d_<name>` crate is reexported as a `<name>` module in `bezier3d`. For example:
//!
//! ```ignore
//! extern crate bezier3d_geom;
//! use bezier3d_geom::CubicBezier;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate bezier3d;
//! use bezier3d::geom::CubicBezier;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! When using the main crate `bezier3d`, `bezier3d_extra` dependencies is disabled by default.
//! It can be added with the feature flags `extra`.
//!
//! # Example
//!
//! ```
//! use bezier3d::geom::CubicBezier;
//! use bezier3d::math::point;
//!
//! let curve = CubicBezier::new(
//!     point(0.0, 0.0, 0.0),
//!     point(10.0, 0.0, 0.0),
//!     point(0.0, 0.0, 0.0),
//!     point(10.0, 0.0, 0.0),
//! );
//!
//! assert_eq!(curve.sample(0.0), point(0.0, 0.0, 0.0));
//! assert_eq!(curve.sample(1.0), point(10.0, 0.0, 0.0));
//! ```

pub extern crate bezier3d_geom;
#[cfg(feature = "extra")]
pub extern crate bezier3d_extra;

pub use bezier3d_geom as geom;
#[cfg(feature = "extra")]
pub use bezier3d_extra as extra;

/// f32 version of the geometric types.
pub mod math {
    pub use crate::geom::euclid;
    pub use crate::geom::traits::Transformation;

    /// Alias for `euclid::default::Point3D<f32>`.
    pub type Point = crate::geom::Point<f32>;

    /// Alias for `euclid::default::Vector3D<f32>`.
    pub type Vector = crate::geom::Vector<f32>;

    /// Alias for `euclid::default::Box3D<f32>`.
    pub type Box3D = crate::geom::Box3D<f32>;

    /// Alias for `euclid::default::Transform3D<f32>`.
    pub type Transform = crate::geom::Transform<f32>;

    /// Alias for `euclid::Translation3D<f32>` without units.
    pub type Translation = crate::geom::Translation<f32>;

    /// Alias for `euclid::default::Scale<f32>`.
    pub type Scale = crate::geom::Scale<f32>;

    /// Shorthand for `Point::new(x, y, z)`.
    #[inline]
    pub fn point(x: f32, y: f32, z: f32) -> Point {
        Point::new(x, y, z)
    }

    /// Shorthand for `Vector::new(x, y, z)`.
    #[inline]
    pub fn vector(x: f32, y: f32, z: f32) -> Vector {
        Vector::new(x, y, z)
    }
}
