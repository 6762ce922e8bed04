//! Core types for qrplaque-rs.
//!
//! This crate provides the data model shared by the geometry builders and the
//! serializers:
//! - [`PlaqueParams`] with documented defaults, validation, and JSON support
//! - [`Layout`] derived dimensions (frame size, title area, title scale)
//! - [`ModuleMatrix`] square boolean grid handed over by a QR encoder
//! - [`GeometryNode`] constructive solid geometry tree
//! - [`Fingerprint`] content hash of a parameter set for artifact caching

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Millimeter fields carry their unit in the name
#![allow(clippy::struct_field_names)]

pub mod error;
pub mod fingerprint;
pub mod geometry;
pub mod layout;
pub mod matrix;
pub mod params;

pub use error::{PlaqueError, Result};
pub use fingerprint::Fingerprint;
pub use geometry::{
    BooleanOp, Color, GeometryNode, HAlign, Primitive, Transform, VAlign, ROUND_SEGMENTS,
};
pub use layout::{Layout, TITLE_KERNING};
pub use matrix::ModuleMatrix;
pub use params::{MagnetCavities, NfcCavity, PlaqueParams};

// Re-export glam types for convenience
pub use glam::{DVec2, DVec3};
