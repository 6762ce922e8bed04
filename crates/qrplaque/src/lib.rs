//! qrplaque-rs: parametric 3D-printable QR code plaques.
//!
//! A plaque is a rounded plate carrying a raised QR code, optional embossed
//! title and subtitle, an optional contrasting outline band, and hidden
//! cavities for an NFC tag and four magnets. This crate produces the plaque as
//! a constructive solid geometry tree and serializes it to OpenSCAD source.
//!
//! # Quick Start
//!
//! ```no_run
//! use qrplaque_rs::*;
//!
//! fn main() -> Result<()> {
//!     let encoder = QrEncoder::new();
//!
//!     let params = PlaqueParams::new("https://example.com")
//!         .with_title("Guest WiFi")
//!         .with_subtitle("scan me");
//!
//!     let scad = ensure_scad(DEFAULT_OUTPUT_DIR, &params, &encoder)?;
//!     println!("wrote {}", scad.display());
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`PlaqueParams::validate`] rejects inconsistent dimensions.
//! 2. A [`ModuleEncoder`] turns the payload into a [`ModuleMatrix`]; the
//!    bundled one is `QrEncoder` (feature `qrcode`, on by default).
//! 3. [`compose`] derives the [`Layout`] and builds frame, modules and titles.
//! 4. [`to_scad`] serializes the tree; [`OpenScad`] renders previews and meshes.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod artifacts;
mod encoder;
#[cfg(feature = "qrcode")]
mod qr;

// Re-export core types
pub use qrplaque_core::{
    BooleanOp, Color, DVec2, DVec3, Fingerprint, GeometryNode, HAlign, Layout, MagnetCavities,
    ModuleMatrix, NfcCavity, PlaqueError, PlaqueParams, Primitive, Result, Transform, VAlign,
    ROUND_SEGMENTS, TITLE_KERNING,
};

// Re-export builders
pub use qrplaque_builders::{
    build_frame, build_modules, build_titles, compose, Corner, Edge, ModuleFillet, Plaque,
    Quadrant,
};

// Re-export the OpenSCAD backend
pub use qrplaque_scad::{to_scad, write_scad, OpenScad, Scad};

pub use artifacts::{
    ensure_preview, ensure_render, ensure_scad, ArtifactPaths, DEFAULT_OUTPUT_DIR,
};
pub use encoder::ModuleEncoder;
#[cfg(feature = "qrcode")]
pub use qr::{ErrorCorrection, QrEncoder};

/// Builds the plaque geometry for `params`.
///
/// The parameters are validated before the encoder runs, so a rejected
/// configuration never reaches it.
pub fn generate(params: &PlaqueParams, encoder: &dyn ModuleEncoder) -> Result<GeometryNode> {
    Ok(generate_plaque(params, encoder)?.geometry)
}

/// Like [`generate`], also returning the derived [`Layout`].
pub fn generate_plaque(params: &PlaqueParams, encoder: &dyn ModuleEncoder) -> Result<Plaque> {
    params.validate()?;
    let matrix = encoder.encode(&params.data)?;
    log::debug!(
        "encoded {} bytes into a {side}x{side} matrix",
        params.data.len(),
        side = matrix.side()
    );
    compose(params, &matrix)
}
