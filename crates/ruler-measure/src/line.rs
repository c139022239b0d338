//! One measurement line.

use std::f32::consts::FRAC_PI_2;

use ruler_math::{Aabb, Axis, Quaternion, Vec3};

use crate::node::{HorizontalAlignment, NodeGeometry, SceneNode, VerticalAlignment};
use crate::raycast::PlaneId;
use crate::side::Side;
use crate::units::{LengthFormatter, LengthUnit};

/// One measurement: two endpoints stored as opposite corners of an
/// axis-aligned box, plus the render handles derived from it.
///
/// The two logical endpoints are always the box's corners even though the
/// shipped flow only drives the X extent with `y = z = min`; the box mutators
/// are fully general. All derived geometry - endpoint markers, connecting
/// segment, label placement and visibility - is a pure function of the box
/// and is recomputed on every mutation.
///
/// # Example
///
/// ```
/// use ruler_math::Vec3;
/// use ruler_measure::{Line, LengthUnit, Side};
///
/// let mut line = Line::new(Vec3::ZERO, LengthUnit::Centimeters);
/// line.move_side(Side::Right, 1.0);
///
/// assert!((line.length() - 1.0).abs() < 1e-6);
/// assert_eq!(line.formatted_length(), "100.0");
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    bounds: Aabb,
    formatter: LengthFormatter,
    plane: Option<PlaneId>,
    vertex_a: SceneNode,
    vertex_b: SceneNode,
    segment: SceneNode,
    label: SceneNode,
}

impl Line {
    /// Gap between the box edge and the label, in meters.
    pub const LABEL_MARGIN: f32 = 0.01;

    /// Cross-section of the connecting segment, in meters.
    pub const LINE_WIDTH: f32 = 0.003;

    /// Radius of the endpoint markers, in meters.
    pub const VERTEX_RADIUS: f32 = 0.003;

    /// Uniform scale applied to the label glyphs.
    pub const FONT_SIZE: f32 = 0.035;

    /// Extents below this render an illegible label; it is hidden instead.
    pub const MIN_LABEL_LIMIT: f32 = 0.01;

    /// Creates a measurement with both endpoints at `origin`.
    #[must_use]
    pub fn new(origin: Vec3, unit: LengthUnit) -> Self {
        let mut line = Self {
            bounds: Aabb::at_point(origin),
            formatter: LengthFormatter::new(unit),
            plane: None,
            vertex_a: SceneNode::new(NodeGeometry::Sphere {
                radius: Self::VERTEX_RADIUS,
            }),
            vertex_b: SceneNode::new(NodeGeometry::Sphere {
                radius: Self::VERTEX_RADIUS,
            }),
            segment: SceneNode::new(NodeGeometry::Cuboid {
                width: Self::LINE_WIDTH,
                height: Self::LINE_WIDTH,
                length: Self::LINE_WIDTH,
            }),
            label: SceneNode::with_scale(
                NodeGeometry::Text {
                    string: String::new(),
                },
                Self::FONT_SIZE,
            ),
        };
        line.update();
        line
    }

    /// Creates a measurement anchored to the surface it started on.
    #[must_use]
    pub fn anchored(origin: Vec3, unit: LengthUnit, plane: PlaneId) -> Self {
        let mut line = Self::new(origin, unit);
        line.plane = Some(plane);
        line
    }

    /// The endpoint box.
    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// The surface this measurement is anchored to, if any.
    #[must_use]
    pub const fn plane(&self) -> Option<PlaneId> {
        self.plane
    }

    /// The label formatter.
    #[must_use]
    pub const fn formatter(&self) -> LengthFormatter {
        self.formatter
    }

    /// Current measured length in meters (the X extent).
    #[must_use]
    pub fn length(&self) -> f32 {
        self.bounds.size().x
    }

    /// Current length formatted in the display unit, without suffix.
    #[must_use]
    pub fn formatted_length(&self) -> String {
        self.formatter.format_value(self.length())
    }

    /// Marker at the fixed endpoint.
    #[must_use]
    pub const fn vertex_a(&self) -> &SceneNode {
        &self.vertex_a
    }

    /// Marker at the tracking endpoint.
    #[must_use]
    pub const fn vertex_b(&self) -> &SceneNode {
        &self.vertex_b
    }

    /// The connecting segment.
    #[must_use]
    pub const fn segment(&self) -> &SceneNode {
        &self.segment
    }

    /// The length label.
    #[must_use]
    pub const fn label(&self) -> &SceneNode {
        &self.label
    }

    /// Moves one named side of the box to `extent`.
    ///
    /// Writes only the extent component for the side's axis; the rest of the
    /// box edge is untouched. Ordering is re-established before derived
    /// geometry is recomputed, so dragging an edge past the opposite corner
    /// is fine.
    pub fn move_side(&mut self, side: Side, extent: f32) {
        let mut bounds = self.bounds;
        bounds.set_edge(side.axis(), side.edge(), extent);
        self.resize_to(bounds.min, bounds.max);
    }

    /// Replaces the box corners (reordered if necessary) and recomputes all
    /// derived geometry.
    pub fn resize_to(&mut self, min: Vec3, max: Vec3) {
        self.bounds = Aabb::new(min, max);
        self.update();
    }

    /// Recomputes endpoint markers, segment, and label from the box.
    fn update(&mut self) {
        let size = self.bounds.size();
        assert!(
            Axis::ALL.into_iter().all(|axis| size.value(axis) >= 0.0),
            "negative box size after correction"
        );

        let a = self.bounds.min;
        let b = Vec3::new(self.bounds.max.x, self.bounds.min.y, self.bounds.min.z);

        self.vertex_a.position = a;
        self.vertex_b.position = b;

        // Yaw the segment and label toward the camera side of the delta.
        // Degenerates to identity in the axis-aligned steady state.
        let delta = b - a;
        let facing = Quaternion::from_axis_angle(-delta.z.atan2(delta.x), Vec3::AXIS_Y);

        update_segment(&mut self.segment, a, size.x, Axis::X);
        self.segment.orientation = facing;

        update_label(
            &mut self.label,
            self.formatter.format(size.x),
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
        );
        self.label.position = self.bounds.point_in_bounds(Vec3::new(0.5, 0.0, 1.0))
            + Vec3::new(0.0, 0.0, Self::LABEL_MARGIN);
        self.label.orientation =
            facing.concatenating(Quaternion::from_axis_angle(-FRAC_PI_2, Vec3::AXIS_X));
        self.label.hidden = size.x < Self::MIN_LABEL_LIMIT;
    }
}

/// Sizes the segment cuboid to `abs(distance)` along `axis` and positions it
/// at the offset midpoint so it spans both endpoints regardless of sign.
///
/// # Panics
///
/// Panics when the node does not carry a cuboid - a construction-time
/// invariant violation, not a runtime condition.
fn update_segment(node: &mut SceneNode, from: Vec3, distance: f32, axis: Axis) {
    let NodeGeometry::Cuboid {
        width,
        height,
        length,
    } = &mut node.geometry
    else {
        panic!("tried to update a node that is not a segment");
    };

    let extent = distance.abs();
    match axis {
        Axis::X => *width = extent,
        Axis::Y => *height = extent,
        Axis::Z => *length = extent,
    }
    node.position = from + axis.unit() * (distance * 0.5);
}

/// Rewrites the label text and anchors its pivot within its own bounds.
///
/// # Panics
///
/// Panics when the node does not carry text - a construction-time invariant
/// violation, not a runtime condition.
fn update_label(
    node: &mut SceneNode,
    text: String,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) {
    let NodeGeometry::Text { string } = &mut node.geometry else {
        panic!("tried to update a node that is not a label");
    };

    *string = text;
    node.pivot = Vec3::new(horizontal.anchor(), vertical.anchor(), 0.0);
}
