//! Static convex obstacles.

use crate::error::ConfigError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// A closed polygon obstacle. Edges run from each vertex to the next, with
/// the last vertex wrapping to the first.
///
/// Bodies only read obstacles during a step; callers may translate them
/// between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<F: Float> {
    vertices: AllocVec<Vec2<F>>,
}

impl<F: Float> Polygon<F> {
    pub fn new(vertices: AllocVec<Vec2<F>>) -> Result<Self, ConfigError> {
        if vertices.len() < 3 {
            return Err(ConfigError::DegeneratePolygon { vertices: vertices.len() });
        }
        Ok(Polygon { vertices })
    }

    /// Axis-aligned square centered on `center`.
    pub fn square(center: Vec2<F>, half_extent: F) -> Self {
        let h = half_extent;
        Polygon {
            vertices: vec![
                Vec2::new(center.x - h, center.y - h),
                Vec2::new(center.x + h, center.y - h),
                Vec2::new(center.x + h, center.y + h),
                Vec2::new(center.x - h, center.y + h),
            ],
        }
    }

    /// Isosceles triangle with its apex up (screen space), centered on `center`.
    /// Wound the same way as `square`.
    pub fn triangle(center: Vec2<F>, half_extent: F) -> Self {
        let h = half_extent;
        Polygon {
            vertices: vec![
                Vec2::new(center.x - h, center.y + h),
                Vec2::new(center.x, center.y - h),
                Vec2::new(center.x + h, center.y + h),
            ],
        }
    }

    pub fn vertices(&self) -> &[Vec2<F>] {
        &self.vertices
    }

    /// Edges `(v[i], v[i+1])`, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn translate(&mut self, delta: Vec2<F>) {
        for v in self.vertices.iter_mut() {
            *v += delta;
        }
    }

    pub fn centroid(&self) -> Vec2<F> {
        Vec2::mean(self.vertices.iter().copied())
    }

    /// Point-in-polygon by ray casting.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y < point.y && vj.y >= point.y) || (vj.y < point.y && vi.y >= point.y) {
                let x = vi.x + (point.y - vi.y) / (vj.y - vi.y) * (vj.x - vi.x);
                if x < point.x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_two_vertices() {
        let result = Polygon::new(vec![Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 0.0)]);
        assert_eq!(result, Err(ConfigError::DegeneratePolygon { vertices: 2 }));
    }

    #[test]
    fn edges_wrap_around() {
        let tri = Polygon::triangle(Vec2::new(0.0f64, 0.0), 1.0);
        let edges: AllocVec<_> = tri.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].1, tri.vertices()[0]);
    }

    #[test]
    fn contains_center_not_outside() {
        let sq = Polygon::square(Vec2::new(400.0f64, 300.0), 20.0);
        assert!(sq.contains(Vec2::new(400.0, 300.0)));
        assert!(!sq.contains(Vec2::new(430.0, 300.0)));
        let tri = Polygon::triangle(Vec2::new(400.0f64, 300.0), 20.0);
        assert!(tri.contains(Vec2::new(400.0, 305.0)));
        assert!(!tri.contains(Vec2::new(381.0, 282.0)));
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut sq = Polygon::square(Vec2::new(0.0f64, 0.0), 1.0);
        sq.translate(Vec2::new(5.0, -2.0));
        assert_eq!(sq.centroid(), Vec2::new(5.0, -2.0));
        assert_eq!(sq.vertices()[0], Vec2::new(4.0, -3.0));
    }
}
