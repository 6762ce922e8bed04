//! OpenSCAD backend for qrplaque-rs.
//!
//! [`to_scad`] turns a [`GeometryNode`](qrplaque_core::GeometryNode) tree into
//! OpenSCAD source; [`OpenScad`] drives the external `openscad` binary to
//! produce PNG previews and STL meshes from it.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod openscad;
pub mod writer;

pub use openscad::OpenScad;
pub use writer::{to_scad, write_scad, Scad};
