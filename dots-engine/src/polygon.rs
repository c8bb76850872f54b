use std::collections::HashSet;

use crate::Point;

/// A closed loop of stones. Consecutive vertices are 8-adjacent and the
/// last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    vertices: Vec<Point>,
}

/// True if two distinct points touch horizontally, vertically or diagonally.
pub fn adjacent(a: Point, b: Point) -> bool {
    a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

impl Cycle {
    /// Build a cycle from its vertices. Returns `None` for degenerate input:
    /// fewer than 3 vertices, a repeated vertex, or a non-adjacent step.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let mut seen = HashSet::with_capacity(vertices.len());
        if !vertices.iter().all(|&v| seen.insert(v)) {
            return None;
        }
        let closed = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .all(|(&a, &b)| adjacent(a, b));
        if !closed {
            return None;
        }
        Some(Cycle { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_vertex(&self, point: Point) -> bool {
        self.vertices.contains(&point)
    }

    /// Strict point-in-polygon test.
    ///
    /// Vertices count as boundary and are never inside. Edges join adjacent
    /// cells, so no other lattice point can sit on the boundary, and the
    /// even-odd crossing count decides the rest. The crossing abscissa is
    /// compared by cross-multiplying, keeping everything in integers.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_vertex(point) {
            return false;
        }

        let (px, py) = (point.0 as i32, point.1 as i32);
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.vertices[i].0 as i32, self.vertices[i].1 as i32);
            let (xj, yj) = (self.vertices[j].0 as i32, self.vertices[j].1 as i32);
            if (yi > py) != (yj > py) {
                // px < xi + (xj - xi) * (py - yi) / (yj - yi)
                let dy = yj - yi;
                let lhs = (px - xi) * dy;
                let rhs = (xj - xi) * (py - yi);
                let crosses = if dy > 0 { lhs < rhs } else { lhs > rhs };
                if crosses {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True if at least one of `points` lies strictly inside the cycle.
    pub fn encloses_any<'a, I>(&self, points: I) -> bool
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().any(|&p| self.contains(p))
    }

    /// Inclusive axis-aligned bounds as `(min, max)` corners.
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for &(x, y) in &self.vertices[1..] {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        (min, max)
    }

    /// Every cell strictly inside the cycle, scanned over its bounding box.
    pub fn interior(&self) -> Vec<Point> {
        let ((x0, y0), (x1, y1)) = self.bounding_box();
        let mut cells = Vec::new();
        for x in x0..=x1 {
            for y in y0..=y1 {
                if self.contains((x, y)) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Cycle {
        Cycle::new(vec![(1, 0), (2, 1), (1, 2), (0, 1)]).unwrap()
    }

    #[test]
    fn rejects_degenerate_cycles() {
        assert!(Cycle::new(vec![]).is_none());
        assert!(Cycle::new(vec![(0, 0), (1, 1)]).is_none());
        assert!(Cycle::new(vec![(0, 0), (1, 0), (0, 0)]).is_none());
        assert!(Cycle::new(vec![(0, 0), (1, 0), (3, 0)]).is_none());
    }

    #[test]
    fn accepts_triangle() {
        let c = Cycle::new(vec![(0, 0), (1, 0), (1, 1)]).unwrap();
        assert_eq!(c.len(), 3);
        assert!(c.interior().is_empty());
    }

    #[test]
    fn diamond_contains_center() {
        let c = diamond();
        assert!(c.contains((1, 1)));
        assert!(!c.contains((0, 0)));
        assert!(!c.contains((2, 2)));
        assert!(!c.contains((5, 5)));
    }

    #[test]
    fn vertices_are_never_inside() {
        let c = diamond();
        for &v in c.vertices() {
            assert!(!c.contains(v));
        }
    }

    #[test]
    fn orientation_does_not_matter() {
        let mut reversed = diamond().vertices().to_vec();
        reversed.reverse();
        let c = Cycle::new(reversed).unwrap();
        assert!(c.contains((1, 1)));
        assert_eq!(c.interior(), vec![(1, 1)]);
    }

    #[test]
    fn square_ring_interior() {
        // 4x4 ring of stones around a 2x2 hole
        let ring = vec![
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (0, 3),
            (0, 2),
            (0, 1),
        ];
        let c = Cycle::new(ring).unwrap();
        assert_eq!(c.bounding_box(), ((0, 0), (3, 3)));
        assert_eq!(c.interior(), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn concave_loop_keeps_both_pockets() {
        // row 0: x x x x x
        // row 1: x . x . x
        // row 2: x x x x x
        let loop_ = vec![
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (3, 2),
            (2, 2),
            (2, 1),
            (1, 2),
            (0, 2),
            (0, 1),
        ];
        // (2,1) -> (1,2) is a diagonal step
        let c = Cycle::new(loop_).unwrap();
        assert!(c.contains((1, 1)));
        assert!(c.contains((3, 1)));
        assert!(!c.contains((2, 1)));
    }

    #[test]
    fn encloses_any_checks_points() {
        let c = diamond();
        let hit: Vec<Point> = vec![(4, 4), (1, 1)];
        let miss: Vec<Point> = vec![(4, 4), (0, 0)];
        assert!(c.encloses_any(&hit));
        assert!(!c.encloses_any(&miss));
        assert!(!c.encloses_any(&Vec::<Point>::new()));
    }

    #[test]
    fn adjacency() {
        assert!(adjacent((1, 1), (2, 2)));
        assert!(adjacent((1, 1), (1, 0)));
        assert!(!adjacent((1, 1), (1, 1)));
        assert!(!adjacent((0, 0), (2, 0)));
    }
}
