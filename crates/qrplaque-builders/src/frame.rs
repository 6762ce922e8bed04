//! Mounting plate.
//!
//! The plate is a rounded rectangle extruded downward from z=0, so the QR
//! surface sits flush with the top face. NFC and magnet cavities are cut from
//! the back face, and an optional outline band is raised along the edge.

use glam::DVec3;
use qrplaque_core::{Color, GeometryNode, Layout, PlaqueParams};

use crate::fillet::{corner_cutter, Corner};

/// Extra depth of the magnet cutters below the back face so they cut cleanly.
pub const MAGNET_CLEARANCE_MM: f64 = 0.1;

/// 2-D plate outline: a centered rectangle with all four corners rounded.
pub fn rounded_rectangle(width: f64, length: f64, radius: f64) -> GeometryNode {
    GeometryNode::centered_square(width, length).difference(
        Corner::ALL
            .into_iter()
            .map(|corner| corner_cutter(corner, width, length, radius)),
    )
}

/// Builds the plate with its cavities and outline band.
pub fn build_frame(params: &PlaqueParams, layout: &Layout) -> GeometryNode {
    let outline_2d = rounded_rectangle(
        layout.frame_width,
        layout.frame_length,
        params.frame_fillet_radius_mm,
    );

    let mut cavities = Vec::new();
    if params.nfc.enabled {
        cavities.push(nfc_cavity(params));
    }
    if params.magnets.enabled {
        cavities.extend(magnet_cavities(params, layout));
    }
    log::debug!("frame has {} cavities", cavities.len());

    let plate = outline_2d
        .clone()
        .extrude(params.frame_thickness_mm)
        .translate(DVec3::new(0.0, 0.0, -params.frame_thickness_mm))
        .colored(Color::FRAME);

    let mut frame = if cavities.is_empty() {
        plate
    } else {
        plate.difference(cavities)
    };

    if params.frame_outline_mm > 0.0 {
        frame = frame.add(outline_band(params, outline_2d));
    }

    frame
}

/// NFC recess, centered in the plate and `base_offset_mm` above the back face.
fn nfc_cavity(params: &PlaqueParams) -> GeometryNode {
    let nfc = &params.nfc;
    GeometryNode::cylinder(nfc.diameter_mm / 2.0, nfc.thickness_mm).translate(DVec3::new(
        0.0,
        0.0,
        -params.frame_thickness_mm + nfc.base_offset_mm,
    ))
}

/// One magnet well per plate corner, inset from both edges.
fn magnet_cavities<'a>(
    params: &'a PlaqueParams,
    layout: &'a Layout,
) -> impl Iterator<Item = GeometryNode> + 'a {
    let magnets = &params.magnets;
    let inset = magnets.diameter_mm / 2.0 + magnets.inset_mm;

    Corner::ALL.into_iter().map(move |corner| {
        let signs = corner.signs();
        GeometryNode::cylinder(
            magnets.diameter_mm / 2.0,
            magnets.thickness_mm + MAGNET_CLEARANCE_MM,
        )
        .translate(DVec3::new(
            signs.x * (layout.half_width() - inset),
            signs.y * (layout.half_length() - inset),
            -params.frame_thickness_mm - MAGNET_CLEARANCE_MM,
        ))
    })
}

/// Raised ring between the plate outline and its inward offset.
fn outline_band(params: &PlaqueParams, outline_2d: GeometryNode) -> GeometryNode {
    let inner = outline_2d.clone().offset(-params.frame_outline_mm);
    outline_2d
        .difference([inner])
        .extrude(params.frame_outline_thickness_mm)
        .colored(Color::OUTLINE)
}
