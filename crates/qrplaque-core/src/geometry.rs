//! Constructive solid geometry tree.
//!
//! A plaque is described by a tree of [`GeometryNode`]s: primitives at the
//! leaves, transforms, extrusions, 2-D offsets, boolean operations, and colour
//! tags above them. Every node owns its children; the tree is built once per
//! request and handed to a serializer.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Segments per full turn for circles and arcs.
pub const ROUND_SEGMENTS: u32 = 32;

/// An sRGB colour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Plate colour.
    pub const FRAME: Self = Self::from_hex(0x2D_31_42);
    /// QR module colour.
    pub const MODULES: Self = Self::from_hex(0xEF_83_64);
    /// Title text colour.
    pub const TITLE: Self = Self::from_hex(0xFF_FF_FF);
    /// Outline band colour.
    pub const OUTLINE: Self = Self::from_hex(0xBF_C0_C0);

    /// Creates a colour from a `0xRRGGBB` value.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Channels as fractions in `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    #[default]
    Baseline,
    Bottom,
}

/// Leaf shapes. 2-D shapes lie in the xy plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned rectangle, anchored at its minimum corner unless centered.
    Square { size: DVec2, center: bool },
    /// Simple polygon, counter-clockwise.
    Polygon { points: Vec<DVec2> },
    /// Axis-aligned box, anchored at its minimum corner unless centered.
    Cuboid { size: DVec3, center: bool },
    /// Cylinder along +z from z=0, centered on the z axis.
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
    },
    /// Text outline rendered with a named font.
    Text {
        text: String,
        size: f64,
        font: String,
        halign: HAlign,
        valign: VAlign,
    },
}

impl Primitive {
    /// Returns whether this primitive is two-dimensional.
    pub fn is_2d(&self) -> bool {
        matches!(
            self,
            Self::Square { .. } | Self::Polygon { .. } | Self::Text { .. }
        )
    }
}

/// Boolean operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOp {
    /// Union of all operands.
    Union,
    /// First operand minus every later operand.
    Difference,
}

/// A transformation represented as separate components.
///
/// Applied as scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation component.
    pub translation: DVec3,
    /// Rotation as Euler angles in degrees, applied about x, then y, then z.
    pub rotation: DVec3,
    /// Scale component.
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a translation.
    #[must_use]
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Creates a transform from a scale.
    #[must_use]
    pub fn from_scale(scale: DVec3) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Returns whether this transform leaves geometry unchanged.
    pub fn is_identity(&self) -> bool {
        self.translation == DVec3::ZERO && self.rotation == DVec3::ZERO && self.scale == DVec3::ONE
    }
}

/// A node of the geometry tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryNode {
    Primitive(Primitive),
    Transform {
        transform: Transform,
        child: Box<GeometryNode>,
    },
    /// Linear extrusion of a 2-D child from z=0 to z=`height`.
    Extrude {
        height: f64,
        child: Box<GeometryNode>,
    },
    /// 2-D offset of the child outline; negative shrinks inward.
    Offset {
        delta: f64,
        child: Box<GeometryNode>,
    },
    Boolean {
        op: BooleanOp,
        operands: Vec<GeometryNode>,
    },
    Colored {
        color: Color,
        child: Box<GeometryNode>,
    },
}

impl From<Primitive> for GeometryNode {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl GeometryNode {
    /// 2-D rectangle anchored at its minimum corner.
    pub fn square(width: f64, length: f64) -> Self {
        Primitive::Square {
            size: DVec2::new(width, length),
            center: false,
        }
        .into()
    }

    /// 2-D rectangle centered on the origin.
    pub fn centered_square(width: f64, length: f64) -> Self {
        Primitive::Square {
            size: DVec2::new(width, length),
            center: true,
        }
        .into()
    }

    /// Cylinder standing on the xy plane.
    pub fn cylinder(radius: f64, height: f64) -> Self {
        Primitive::Cylinder {
            radius,
            height,
            segments: ROUND_SEGMENTS,
        }
        .into()
    }

    /// 2-D polygon from its vertices.
    pub fn polygon(points: Vec<DVec2>) -> Self {
        Primitive::Polygon { points }.into()
    }

    /// Union of `operands`, in order.
    pub fn union(operands: Vec<GeometryNode>) -> Self {
        Self::Boolean {
            op: BooleanOp::Union,
            operands,
        }
    }

    /// Unions `self` with `other`, appending to an existing union.
    #[must_use]
    pub fn add(self, other: GeometryNode) -> Self {
        match self {
            Self::Boolean {
                op: BooleanOp::Union,
                mut operands,
            } => {
                operands.push(other);
                Self::union(operands)
            }
            node => Self::union(vec![node, other]),
        }
    }

    /// Subtracts every cutter from `self`, appending to an existing difference.
    #[must_use]
    pub fn difference(self, cutters: impl IntoIterator<Item = GeometryNode>) -> Self {
        let mut operands = match self {
            Self::Boolean {
                op: BooleanOp::Difference,
                operands,
            } => operands,
            node => vec![node],
        };
        operands.extend(cutters);
        Self::Boolean {
            op: BooleanOp::Difference,
            operands,
        }
    }

    #[must_use]
    pub fn transformed(self, transform: Transform) -> Self {
        Self::Transform {
            transform,
            child: Box::new(self),
        }
    }

    #[must_use]
    pub fn translate(self, offset: DVec3) -> Self {
        self.transformed(Transform::from_translation(offset))
    }

    #[must_use]
    pub fn scale(self, factors: DVec3) -> Self {
        self.transformed(Transform::from_scale(factors))
    }

    #[must_use]
    pub fn extrude(self, height: f64) -> Self {
        Self::Extrude {
            height,
            child: Box::new(self),
        }
    }

    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self::Offset {
            delta,
            child: Box::new(self),
        }
    }

    #[must_use]
    pub fn colored(self, color: Color) -> Self {
        Self::Colored {
            color,
            child: Box::new(self),
        }
    }

    /// Direct children, in operand order.
    pub fn children(&self) -> &[GeometryNode] {
        match self {
            Self::Primitive(_) => &[],
            Self::Boolean { operands, .. } => operands,
            Self::Transform { child, .. }
            | Self::Extrude { child, .. }
            | Self::Offset { child, .. }
            | Self::Colored { child, .. } => std::slice::from_ref(child.as_ref()),
        }
    }

    /// The primitive at this node, if it is a leaf.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// Iterates over this node and all descendants, depth first, pre-order.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Number of nodes in this subtree matching `pred`.
    pub fn count(&self, pred: impl Fn(&GeometryNode) -> bool) -> usize {
        self.iter().filter(|n| pred(*n)).count()
    }

    /// Number of primitives in this subtree matching `pred`.
    pub fn count_primitives(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.iter()
            .filter_map(GeometryNode::as_primitive)
            .filter(|p| pred(*p))
            .count()
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Pre-order iterator over a geometry subtree.
pub struct Nodes<'a> {
    stack: Vec<&'a GeometryNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a GeometryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
