//! Geometry builders for qrplaque-rs.
//!
//! This crate turns a [`PlaqueParams`](qrplaque_core::PlaqueParams) and a
//! [`ModuleMatrix`](qrplaque_core::ModuleMatrix) into a geometry tree:
//! - Raised QR modules with rounded finder corners
//! - Rounded mounting plate with NFC and magnet cavities and an outline band
//! - Embossed title and subtitle scaled to fit
//! - Scene composition

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod fillet;
pub mod frame;
pub mod module_grid;
pub mod scene;
pub mod title;

pub use fillet::{Corner, Edge, ModuleFillet, Quadrant};
pub use frame::build_frame;
pub use module_grid::build_modules;
pub use scene::{compose, Plaque};
pub use title::build_titles;
