//! Embossed title and subtitle.

use glam::DVec3;
use qrplaque_core::{Color, GeometryNode, HAlign, Layout, PlaqueParams, Primitive, VAlign};

/// Builds the extruded titles, or `None` when there is no title.
///
/// Text is centered horizontally on its baseline. A lone title is nudged down
/// by a third of its size; a title/subtitle pair straddles the origin with
/// `titles_spacing_mm` between them. The group is scaled in x and y by
/// [`Layout::title_scale`], extrusion depth unscaled.
pub fn build_titles(params: &PlaqueParams, layout: &Layout) -> Option<GeometryNode> {
    let title = params.title_text()?;
    let title_node = extruded_text(
        title,
        params.title_size_mm,
        &params.title_font,
        params.titles_thickness_mm,
    );

    let titles = match params.subtitle_text() {
        Some(subtitle) => {
            let subtitle_node = extruded_text(
                subtitle,
                params.subtitle_size_mm,
                &params.subtitle_font,
                params.titles_thickness_mm,
            );
            let half_gap = params.titles_spacing_mm / 2.0;
            title_node
                .translate(DVec3::new(0.0, half_gap, 0.0))
                .add(subtitle_node.translate(DVec3::new(
                    0.0,
                    -half_gap - params.subtitle_size_mm,
                    0.0,
                )))
        }
        None => title_node.translate(DVec3::new(0.0, -params.title_size_mm / 3.0, 0.0)),
    };

    let scale = layout.title_scale;
    Some(
        titles
            .scale(DVec3::new(scale, scale, 1.0))
            .colored(Color::TITLE),
    )
}

fn extruded_text(text: &str, size: f64, font: &str, thickness: f64) -> GeometryNode {
    GeometryNode::from(Primitive::Text {
        text: text.to_string(),
        size,
        font: font.to_string(),
        halign: HAlign::Center,
        valign: VAlign::Baseline,
    })
    .extrude(thickness)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(node: &GeometryNode) -> Vec<String> {
        node.iter()
            .filter_map(|n| match n.as_primitive() {
                Some(Primitive::Text { text, .. }) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn translations(node: &GeometryNode) -> Vec<DVec3> {
        node.iter()
            .filter_map(|n| match n {
                GeometryNode::Transform { transform, child }
                    if matches!(child.as_ref(), GeometryNode::Extrude { .. }) =>
                {
                    Some(transform.translation)
                }
                _ => None,
            })
            .collect()
    }

    fn scale_of(node: &GeometryNode) -> DVec3 {
        node.iter()
            .find_map(|n| match n {
                GeometryNode::Transform { transform, .. } if transform.scale != DVec3::ONE => {
                    Some(transform.scale)
                }
                _ => None,
            })
            .unwrap_or(DVec3::ONE)
    }

    #[test]
    fn test_no_title() {
        let params = PlaqueParams::new("x").with_subtitle("only subtitle");
        let layout = Layout::compute(&params).unwrap();
        assert!(build_titles(&params, &layout).is_none());
    }

    #[test]
    fn test_single_title_nudged_down() {
        let params = PlaqueParams::new("x").with_title("Test");
        let layout = Layout::compute(&params).unwrap();
        let node = build_titles(&params, &layout).unwrap();
        assert!(matches!(node, GeometryNode::Colored { color: Color::TITLE, .. }));
        assert_eq!(texts(&node), vec!["Test"]);
        assert_eq!(translations(&node), vec![DVec3::new(0.0, -10.0 / 3.0, 0.0)]);
        assert_eq!(scale_of(&node), DVec3::ONE);
    }

    #[test]
    fn test_title_and_subtitle_offsets() {
        let params = PlaqueParams::new("x").with_title("Test").with_subtitle("Hello!");
        let layout = Layout::compute(&params).unwrap();
        let node = build_titles(&params, &layout).unwrap();
        assert_eq!(texts(&node), vec!["Test", "Hello!"]);
        assert_eq!(
            translations(&node),
            vec![DVec3::new(0.0, 1.5, 0.0), DVec3::new(0.0, -9.5, 0.0)]
        );
        assert_eq!(node.count(|n| matches!(n, GeometryNode::Extrude { .. })), 2);
    }

    #[test]
    fn test_long_title_scaled_in_plane_only() {
        let params = PlaqueParams::new("x").with_title("A very long title");
        let layout = Layout::compute(&params).unwrap();
        let node = build_titles(&params, &layout).unwrap();
        let scale = scale_of(&node);
        assert!((scale.x - layout.title_scale).abs() < 1e-12);
        assert_eq!(scale.x, scale.y);
        assert_eq!(scale.z, 1.0);
    }

    #[test]
    fn test_fonts_and_alignment() {
        let mut params = PlaqueParams::new("x").with_title("T").with_subtitle("S");
        params.subtitle_font = "DejaVu Sans".into();
        let layout = Layout::compute(&params).unwrap();
        let node = build_titles(&params, &layout).unwrap();
        let fonts: Vec<_> = node
            .iter()
            .filter_map(|n| match n.as_primitive() {
                Some(Primitive::Text {
                    font,
                    halign,
                    valign,
                    ..
                }) => {
                    assert_eq!(*halign, HAlign::Center);
                    assert_eq!(*valign, VAlign::Baseline);
                    Some(font.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(fonts, vec![qrplaque_core::params::DEFAULT_TITLE_FONT, "DejaVu Sans"]);
    }
}
