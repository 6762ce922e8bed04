//! Scene composition.

use glam::DVec3;
use qrplaque_core::{GeometryNode, Layout, ModuleMatrix, PlaqueParams, Result};

use crate::frame::build_frame;
use crate::module_grid::build_modules;
use crate::title::build_titles;

/// A composed plaque: its derived layout and the final geometry tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Plaque {
    pub layout: Layout,
    pub geometry: GeometryNode,
}

/// Validates the parameters and assembles frame, modules, and titles.
///
/// Nothing is built when the parameters are rejected. The root is a union of
/// the frame, the module group shifted into the area above the title region,
/// and, when a title is set, the titles shifted into the title region.
pub fn compose(params: &PlaqueParams, matrix: &ModuleMatrix) -> Result<Plaque> {
    let layout = Layout::compute(params)?;

    let frame = build_frame(params, &layout);

    let inset = params.qr_border_mm + params.frame_outline_mm;
    let modules = build_modules(params, matrix).translate(DVec3::new(
        0.0,
        (layout.frame_length - params.qr_size_mm) / 2.0 - inset,
        0.0,
    ));

    let mut parts = vec![frame, modules];

    if let Some(titles) = build_titles(params, &layout) {
        let y = -layout.half_length()
            + params.frame_outline_mm
            + layout.bottom_spacing / 2.0
            + params.qr_border_mm / 2.0;
        parts.push(titles.translate(DVec3::new(0.0, y, 0.0)));
    }

    log::debug!(
        "composed plaque {:.1}x{:.1}mm with {} modules",
        layout.frame_width,
        layout.frame_length,
        matrix.filled_count()
    );

    Ok(Plaque {
        layout,
        geometry: GeometryNode::union(parts),
    })
}
