use egui::{Pos2, Rect};

use crate::tools::Tool;

/// Radius of a circle centered at `anchor` passing through `pointer`
pub fn circle_radius(anchor: Pos2, pointer: Pos2) -> f32 {
    anchor.distance(pointer)
}

/// Rectangle spanned by two opposite corners, in any drag direction
pub fn rect_from_corners(anchor: Pos2, pointer: Pos2) -> Rect {
    Rect::from_two_pos(anchor, pointer)
}

/// Vertices of the drag triangle: the anchor, the pointer, and the pointer
/// mirrored through the vertical line at `anchor.x`.
///
/// The result is isosceles about that vertical line. Its apex is the anchor,
/// so dragging upward yields an upside-down triangle.
pub fn triangle_vertices(anchor: Pos2, pointer: Pos2) -> [Pos2; 3] {
    [anchor, pointer, Pos2::new(anchor.x * 2.0 - pointer.x, pointer.y)]
}

/// A shape preview built from the stroke anchor and the current pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rect),
    Circle { center: Pos2, radius: f32 },
    Triangle([Pos2; 3]),
}

impl Shape {
    /// Build the shape a tool would draw for the given drag.
    ///
    /// Returns `None` for the path tools (brush, eraser).
    pub fn from_drag(tool: Tool, anchor: Pos2, pointer: Pos2) -> Option<Self> {
        match tool {
            Tool::Rectangle => Some(Self::Rectangle(rect_from_corners(anchor, pointer))),
            Tool::Circle => Some(Self::Circle {
                center: anchor,
                radius: circle_radius(anchor, pointer),
            }),
            Tool::Triangle => Some(Self::Triangle(triangle_vertices(anchor, pointer))),
            Tool::Brush | Tool::Eraser => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_circle_radius_is_euclidean_distance() {
        assert_eq!(circle_radius(pos2(10.0, 10.0), pos2(13.0, 14.0)), 5.0);
        assert_eq!(circle_radius(pos2(4.0, 4.0), pos2(4.0, 4.0)), 0.0);
    }

    #[test]
    fn test_triangle_third_vertex_mirrors_pointer_x() {
        let [a, b, c] = triangle_vertices(pos2(50.0, 20.0), pos2(70.0, 60.0));
        assert_eq!(a, pos2(50.0, 20.0));
        assert_eq!(b, pos2(70.0, 60.0));
        assert_eq!(c, pos2(30.0, 60.0));
    }

    #[test]
    fn test_rect_from_corners_any_direction() {
        let forward = rect_from_corners(pos2(10.0, 10.0), pos2(30.0, 40.0));
        let backward = rect_from_corners(pos2(30.0, 40.0), pos2(10.0, 10.0));
        assert_eq!(forward, backward);
        assert_eq!(forward.min, pos2(10.0, 10.0));
        assert_eq!(forward.max, pos2(30.0, 40.0));
    }

    #[test]
    fn test_shape_from_drag() {
        let anchor = pos2(10.0, 10.0);
        let pointer = pos2(13.0, 14.0);
        assert_eq!(Shape::from_drag(Tool::Brush, anchor, pointer), None);
        assert_eq!(Shape::from_drag(Tool::Eraser, anchor, pointer), None);
        assert_eq!(
            Shape::from_drag(Tool::Circle, anchor, pointer),
            Some(Shape::Circle { center: anchor, radius: 5.0 })
        );
        assert!(matches!(
            Shape::from_drag(Tool::Triangle, anchor, pointer),
            Some(Shape::Triangle(_))
        ));
    }
}
