//! OpenSCAD source serializer.
//!
//! Numbers are printed with at most six decimals and no trailing zeros, so the
//! same tree always produces byte-identical source.

use std::fmt::{self, Write};
use std::path::Path;

use glam::{DVec2, DVec3};
use qrplaque_core::{BooleanOp, GeometryNode, HAlign, Primitive, Result, Transform, VAlign};

const INDENT: &str = "  ";

/// Display adapter rendering a geometry tree as OpenSCAD source.
pub struct Scad<'a>(pub &'a GeometryNode);

impl fmt::Display for Scad<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

/// Serializes a geometry tree to OpenSCAD source.
pub fn to_scad(node: &GeometryNode) -> String {
    Scad(node).to_string()
}

/// Serializes a geometry tree and writes it to `path`.
pub fn write_scad(node: &GeometryNode, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_scad(node))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn write_node(out: &mut impl Write, node: &GeometryNode, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match node {
        GeometryNode::Primitive(primitive) => {
            out.write_str(&pad)?;
            write_primitive(out, primitive)?;
            out.write_str(";\n")
        }
        GeometryNode::Transform { transform, child } if transform.is_identity() => {
            write_node(out, child, depth)
        }
        GeometryNode::Transform { transform, child } => write_block(
            out,
            &transform_head(transform),
            std::slice::from_ref(child.as_ref()),
            depth,
        ),
        GeometryNode::Extrude { height, child } => write_block(
            out,
            &format!("linear_extrude(height={})", num(*height)),
            std::slice::from_ref(child.as_ref()),
            depth,
        ),
        GeometryNode::Offset { delta, child } => write_block(
            out,
            &format!("offset(r={})", num(*delta)),
            std::slice::from_ref(child.as_ref()),
            depth,
        ),
        GeometryNode::Boolean { op, operands } => {
            let head = match op {
                BooleanOp::Union => "union()",
                BooleanOp::Difference => "difference()",
            };
            write_block(out, head, operands, depth)
        }
        GeometryNode::Colored { color, child } => {
            let [r, g, b] = color.to_unit();
            write_block(
                out,
                &format!("color([{}, {}, {}])", num(r), num(g), num(b)),
                std::slice::from_ref(child.as_ref()),
                depth,
            )
        }
    }
}

fn write_block(
    out: &mut impl Write,
    head: &str,
    children: &[GeometryNode],
    depth: usize,
) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    if children.is_empty() {
        return writeln!(out, "{pad}{head};");
    }
    writeln!(out, "{pad}{head} {{")?;
    for child in children {
        write_node(out, child, depth + 1)?;
    }
    writeln!(out, "{pad}}}")
}

fn write_primitive(out: &mut impl Write, primitive: &Primitive) -> fmt::Result {
    match primitive {
        Primitive::Square { size, center } => {
            write!(out, "square({}, center={center})", vec2(*size))
        }
        Primitive::Polygon { points } => {
            let points: Vec<String> = points.iter().map(|p| vec2(*p)).collect();
            write!(out, "polygon(points=[{}])", points.join(", "))
        }
        Primitive::Cuboid { size, center } => {
            write!(out, "cube({}, center={center})", vec3(*size))
        }
        Primitive::Cylinder {
            radius,
            height,
            segments,
        } => write!(
            out,
            "cylinder(r={}, h={}, $fn={segments})",
            num(*radius),
            num(*height)
        ),
        Primitive::Text {
            text,
            size,
            font,
            halign,
            valign,
        } => write!(
            out,
            "text(text={}, size={}, font={}, halign=\"{}\", valign=\"{}\")",
            string(text),
            num(*size),
            string(font),
            halign_name(*halign),
            valign_name(*valign)
        ),
    }
}

/// Transform modifiers, identity components omitted. Applied right to left.
fn transform_head(transform: &Transform) -> String {
    let mut parts = Vec::new();
    if transform.translation != DVec3::ZERO {
        parts.push(format!("translate({})", vec3(transform.translation)));
    }
    if transform.rotation != DVec3::ZERO {
        parts.push(format!("rotate({})", vec3(transform.rotation)));
    }
    if transform.scale != DVec3::ONE {
        parts.push(format!("scale({})", vec3(transform.scale)));
    }
    parts.join(" ")
}

fn halign_name(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "left",
        HAlign::Center => "center",
        HAlign::Right => "right",
    }
}

fn valign_name(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "top",
        VAlign::Center => "center",
        VAlign::Baseline => "baseline",
        VAlign::Bottom => "bottom",
    }
}

/// Formats a number with up to six decimals, trailing zeros removed.
pub fn num(value: f64) -> String {
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn vec2(v: DVec2) -> String {
    format!("[{}, {}]", num(v.x), num(v.y))
}

fn vec3(v: DVec3) -> String {
    format!("[{}, {}, {}]", num(v.x), num(v.y), num(v.z))
}

/// Quoted OpenSCAD string literal.
fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
