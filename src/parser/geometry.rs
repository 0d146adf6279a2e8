//! Bounding-polygon geometry.

use crate::model::BoundingBox;

/// Area enclosed by a word's bounding polygon, via the shoelace formula.
///
/// Vertices missing either coordinate are discarded first. Fewer than four
/// valid vertices means the box is degenerate or partially detected and the
/// area is reported as 0 so the word contributes nothing to the font-size
/// proxy. The vertex ring may arrive open; the last vertex is paired back to
/// the first.
pub fn polygon_area(bounding_box: &BoundingBox) -> f64 {
    let vertices: Vec<(f64, f64)> = bounding_box
        .vertices
        .iter()
        .filter_map(|v| v.resolve())
        .collect();

    if vertices.len() < 4 {
        return 0.0;
    }

    let mut sum = 0.0;
    for pair in vertices.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        sum += x1 * y2 - y1 * x2;
    }
    let (x_last, y_last) = vertices[vertices.len() - 1];
    let (x_first, y_first) = vertices[0];
    sum += x_last * y_first - y_last * x_first;

    sum.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    #[test]
    fn test_rectangle_area() {
        let bbox = BoundingBox::rect(0.0, 0.0, 10.0, 4.0);
        assert_eq!(polygon_area(&bbox), 40.0);
    }

    #[test]
    fn test_rectangle_area_offset() {
        let bbox = BoundingBox::rect(100.0, 250.0, 30.0, 12.0);
        assert_eq!(polygon_area(&bbox), 360.0);
    }

    #[test]
    fn test_too_few_vertices_is_zero() {
        let bbox = BoundingBox {
            vertices: vec![Vertex::at(0.0, 0.0), Vertex::at(5.0, 0.0), Vertex::at(5.0, 5.0)],
        };
        assert_eq!(polygon_area(&bbox), 0.0);
    }

    #[test]
    fn test_missing_coordinates_filtered() {
        // Four vertices but one loses a coordinate: under the valid-vertex
        // threshold, so area is 0.
        let bbox = BoundingBox {
            vertices: vec![
                Vertex::at(0.0, 0.0),
                Vertex::at(5.0, 0.0),
                Vertex::at(5.0, 5.0),
                Vertex {
                    x: Some(0.0),
                    y: None,
                },
            ],
        };
        assert_eq!(polygon_area(&bbox), 0.0);
    }

    #[test]
    fn test_empty_box_is_zero() {
        assert_eq!(polygon_area(&BoundingBox::default()), 0.0);
    }

    #[test]
    fn test_counterclockwise_is_positive() {
        let bbox = BoundingBox {
            vertices: vec![
                Vertex::at(0.0, 0.0),
                Vertex::at(0.0, 4.0),
                Vertex::at(10.0, 4.0),
                Vertex::at(10.0, 0.0),
            ],
        };
        assert_eq!(polygon_area(&bbox), 40.0);
    }
}
