//! Colored polygons and single-plane clipping.

use crate::colors::Color;
use crate::math::point3::Point3;
use crate::plane::Plane;

/// A position with a color attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Point3,
    pub color: Color,
}

impl Vertex {
    pub const fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }

    /// Linearly interpolate position and color between two vertices.
    /// Used when a polygon edge crosses a clipping plane.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: self.position + (other.position - self.position) * t,
            color: self.color.lerp(other.color, t),
        }
    }
}

/// An ordered, cyclic sequence of vertices.
///
/// Edge i joins vertex i to vertex (i + 1) mod n and takes the color of its
/// originating vertex; colors are only interpolated at clip-introduced
/// vertices, never along an edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Clip this polygon against a single plane, Sutherland-Hodgman style.
    ///
    /// Vertices on the retained side are kept; a crossing edge gets a new
    /// vertex at `t = side(cur) / (side(cur) - side(next))` with position and
    /// color interpolated. Cyclic order is preserved. Returns `None` when
    /// every vertex is on the rejected side.
    ///
    /// Clipping against several planes is done by chaining calls, feeding
    /// each plane's output into the next and stopping at the first `None`.
    pub fn clip(&self, plane: &Plane) -> Option<Polygon> {
        let mut output = Vec::with_capacity(self.vertices.len() + 1);

        for i in 0..self.vertices.len() {
            let current = &self.vertices[i];
            let next = &self.vertices[(i + 1) % self.vertices.len()];

            let d1 = plane.which_side(current.position);
            let d2 = plane.which_side(next.position);

            let current_inside = d1 >= 0.0;
            let next_inside = d2 >= 0.0;

            if current_inside {
                output.push(*current);

                if !next_inside {
                    // Going from inside to outside, add the intersection
                    if let Some(t) = crossing_parameter(d1, d2) {
                        output.push(current.lerp(next, t));
                    }
                }
            } else if next_inside {
                // Going from outside to inside, add the intersection
                if let Some(t) = crossing_parameter(d1, d2) {
                    output.push(current.lerp(next, t));
                }
            }
            // Both outside: add nothing
        }

        if output.is_empty() {
            None
        } else {
            Some(Polygon { vertices: output })
        }
    }
}

/// Intersection parameter for an edge crossing the plane.
///
/// A zero denominator means the endpoints evaluate identically (coincident
/// crossing); report no crossing and let the endpoint side test stand.
fn crossing_parameter(d1: f64, d2: f64) -> Option<f64> {
    let denominator = d1 - d2;
    if denominator == 0.0 {
        None
    } else {
        Some(d1 / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    fn square(z_near: f64, z_far: f64) -> Polygon {
        // A quad spanning [z_near, z_far] in depth.
        Polygon::new(vec![
            Vertex::new(Point3::new(-1.0, -1.0, z_near), colors::WHITE),
            Vertex::new(Point3::new(1.0, -1.0, z_near), colors::WHITE),
            Vertex::new(Point3::new(1.0, 1.0, z_far), colors::BLACK),
            Vertex::new(Point3::new(-1.0, 1.0, z_far), colors::BLACK),
        ])
    }

    #[test]
    fn fully_inside_is_unchanged() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let poly = square(1.0, 5.0);
        assert_eq!(poly.clip(&plane), Some(poly));
    }

    #[test]
    fn fully_outside_is_clipped_away() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let poly = square(-5.0, -1.0);
        assert_eq!(poly.clip(&plane), None);
    }

    #[test]
    fn straddling_introduces_vertices_on_the_plane() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let poly = Polygon::new(vec![
            Vertex::new(Point3::new(0.0, 0.0, -1.0), colors::BLACK),
            Vertex::new(Point3::new(1.0, 0.0, 1.0), colors::WHITE),
            Vertex::new(Point3::new(-1.0, 0.0, 1.0), colors::WHITE),
        ]);

        let clipped = poly.clip(&plane).expect("straddling polygon survives");
        let synthesized: Vec<&Vertex> = clipped
            .vertices
            .iter()
            .filter(|v| !poly.vertices.contains(v))
            .collect();
        assert_eq!(synthesized.len(), 2);
        for vertex in synthesized {
            assert_relative_eq!(plane.which_side(vertex.position), 0.0, epsilon = 1e-12);
            // Midway between a black and a white endpoint.
            assert_eq!(vertex.color, colors::BLACK.lerp(colors::WHITE, 0.5));
        }
    }

    #[test]
    fn cyclic_order_is_preserved() {
        let plane = Plane::new(0.0, 1.0, 0.0, 0.0);
        let poly = Polygon::new(vec![
            Vertex::new(Point3::new(0.0, -1.0, 0.0), colors::WHITE),
            Vertex::new(Point3::new(2.0, 1.0, 0.0), colors::WHITE),
            Vertex::new(Point3::new(-2.0, 1.0, 0.0), colors::WHITE),
        ]);

        let clipped = poly.clip(&plane).expect("straddling polygon survives");
        // Entry intersection, the two kept vertices, exit intersection -
        // in that cyclic order.
        let positions: Vec<(f64, f64)> = clipped
            .vertices
            .iter()
            .map(|v| (v.position.x, v.position.y))
            .collect();
        assert_eq!(
            positions,
            vec![(1.0, 0.0), (2.0, 1.0), (-2.0, 1.0), (-1.0, 0.0)]
        );
    }

    #[test]
    fn coincident_crossing_does_not_divide_by_zero() {
        // Both endpoints exactly on the plane: denominator is zero, the edge
        // is kept through the endpoint side test alone.
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let poly = Polygon::new(vec![
            Vertex::new(Point3::new(0.0, 0.0, 0.0), colors::WHITE),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), colors::WHITE),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), colors::WHITE),
        ]);
        assert_eq!(poly.clip(&plane), Some(poly));
    }
}
