//! Render handles published to the drawing host.
//!
//! A [`SceneNode`] describes one drawable: where it sits, how it is oriented,
//! and which primitive it carries. The host owns the actual draw calls; the
//! measurement layer only mutates these descriptions.

use ruler_math::{Quaternion, Vec3};

/// The primitive a scene node renders.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeGeometry {
    /// A small sphere marking one endpoint.
    Sphere {
        /// Sphere radius in meters.
        radius: f32,
    },
    /// A thin cuboid spanning the two endpoints.
    Cuboid {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
        /// Extent along Z.
        length: f32,
    },
    /// The length label.
    Text {
        /// Current label text.
        string: String,
    },
}

/// Horizontal anchor for label text within its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the right edge.
    Right,
    /// Anchor at the center.
    Center,
}

impl HorizontalAlignment {
    /// Normalized anchor coordinate in `[0, 1]`.
    #[must_use]
    pub const fn anchor(self) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Right => 1.0,
            Self::Center => 0.5,
        }
    }
}

/// Vertical anchor for label text within its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Anchor at the top edge.
    Top,
    /// Anchor at the bottom edge.
    Bottom,
    /// Anchor at the center.
    Center,
}

impl VerticalAlignment {
    /// Normalized anchor coordinate in `[0, 1]`.
    #[must_use]
    pub const fn anchor(self) -> f32 {
        match self {
            Self::Bottom => 0.0,
            Self::Top => 1.0,
            Self::Center => 0.5,
        }
    }
}

/// One drawable published to the host.
///
/// `pivot` is a normalized location within the node's own local bounds; the
/// host resolves it against the primitive's measured bounds (text extents are
/// only known to whoever lays the glyphs out) the same way
/// [`ruler_math::Aabb::point_in_bounds`] resolves box-relative locations.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// World position.
    pub position: Vec3,
    /// World orientation.
    pub orientation: Quaternion,
    /// Uniform scale.
    pub scale: f32,
    /// Normalized anchor within the node's own bounds.
    pub pivot: Vec3,
    /// Skip drawing when set.
    pub hidden: bool,
    /// The primitive to draw.
    pub geometry: NodeGeometry,
}

impl SceneNode {
    /// Creates a node at the origin with identity orientation.
    #[must_use]
    pub fn new(geometry: NodeGeometry) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quaternion::IDENTITY,
            scale: 1.0,
            pivot: Vec3::ZERO,
            hidden: false,
            geometry,
        }
    }

    /// Creates a node with a uniform scale applied.
    #[must_use]
    pub fn with_scale(geometry: NodeGeometry, scale: f32) -> Self {
        let mut node = Self::new(geometry);
        node.scale = scale;
        node
    }
}
