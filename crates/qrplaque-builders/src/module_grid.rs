//! Raised QR modules.
//!
//! Every filled module becomes a square block of one pitch, extruded to the
//! module thickness. Rows run along x and columns along y, and the block array
//! is centered on the origin.

use glam::DVec3;
use qrplaque_core::{Color, GeometryNode, ModuleMatrix, PlaqueParams};

use crate::fillet::{grid_corner, inverted_arc, module_fillet};

/// Builds the colored union of all module blocks.
pub fn build_modules(params: &PlaqueParams, matrix: &ModuleMatrix) -> GeometryNode {
    let side = matrix.side();
    #[allow(clippy::cast_precision_loss)]
    let pitch = params.qr_size_mm / side as f64;
    let half = params.qr_size_mm / 2.0;

    let blocks: Vec<GeometryNode> = matrix
        .filled()
        .map(|(row, col)| {
            #[allow(clippy::cast_precision_loss)]
            let origin = DVec3::new(row as f64 * pitch - half, col as f64 * pitch - half, 0.0);
            module_block(row, col, side, pitch)
                .extrude(params.qr_thickness_mm)
                .translate(origin)
        })
        .collect();

    log::debug!(
        "built {} module blocks on a {side}x{side} grid, pitch {pitch:.3}mm",
        blocks.len()
    );

    GeometryNode::union(blocks).colored(Color::MODULES)
}

/// 2-D outline of one module, rounded when it sits on a filleted grid corner.
fn module_block(row: usize, col: usize, side: usize, pitch: f64) -> GeometryNode {
    let block = GeometryNode::square(pitch, pitch);

    match grid_corner(row, col, side).and_then(module_fillet) {
        Some(fillet) => {
            let offset = fillet.offset * pitch;
            block.difference([inverted_arc(pitch, fillet.quadrant).translate(offset.extend(0.0))])
        }
        None => block,
    }
}
