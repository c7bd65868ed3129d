//! Finite line segments and their intersections
//!
//! Used for the hexagon walls, the ball's swept path for one tick and the
//! rays cast by the AI players. Parameters are measured in world units along
//! each segment, not normalized to [0, 1].

use glam::DVec2;

/// Result of intersecting two segments
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intersection {
    /// Whether the crossing lies within both segments
    pub intersected: bool,
    /// Distance from the first segment's start to the crossing
    pub t1: f64,
    /// Distance from the second segment's start to the crossing
    pub t2: f64,
    /// Crossing point (mean of the point reconstructed from each segment)
    pub point: DVec2,
}

/// A segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: DVec2,
    pub b: DVec2,
}

impl LineSegment {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).length()
    }

    /// Point at distance `t` from `a` along the segment's direction
    pub fn point_at(&self, t: f64) -> DVec2 {
        self.a + (self.b - self.a).normalize_or_zero() * t
    }

    /// Intersect with another segment
    ///
    /// Zero-length or parallel segments never intersect; the returned
    /// parameters are then left at zero.
    pub fn intersect(&self, other: &LineSegment) -> Intersection {
        let l1 = self.length();
        let l2 = other.length();
        if !(l1 > 0.0 && l2 > 0.0) || !l1.is_finite() || !l2.is_finite() {
            return Intersection::default();
        }

        let k1 = (self.b - self.a) / l1;
        let k2 = (other.b - other.a) / l2;
        let d = self.a - other.a;

        let s = k2.x * k1.y - k1.x * k2.y;
        if s == 0.0 {
            return Intersection::default();
        }

        let t1 = (d.x * k2.y - k2.x * d.y) / s;
        let t2 = (d.x * k1.y - k1.x * d.y) / s;
        let point = (self.a + k1 * t1 + other.a + k2 * t2) / 2.0;

        Intersection {
            intersected: (0.0..=l1).contains(&t1) && (0.0..=l2).contains(&t2),
            t1,
            t2,
            point,
        }
    }
}
