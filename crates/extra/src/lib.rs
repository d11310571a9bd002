#![deny(bare_trait_objects)]

//! Optional utilities on top of `bezier3d_geom`.
//!
//! - [`parser`]: reading and writing cubic bézier segments as plain lists of numbers.

extern crate bezier3d_geom as geom;

pub use geom::euclid;

pub mod parser;
