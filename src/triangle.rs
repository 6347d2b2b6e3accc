use super::*;

/// Three ordered vertices. Built fresh from the current vertex positions for
/// every query, vertices move continuously while dragged.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Triangle {
    pub positions: [Point3; 3],
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            positions: [a, b, c],
        }
    }

    #[inline]
    pub const fn a(&self) -> &Point3 {
        &self.positions[0]
    }

    #[inline]
    pub const fn b(&self) -> &Point3 {
        &self.positions[1]
    }

    #[inline]
    pub const fn c(&self) -> &Point3 {
        &self.positions[2]
    }

    /// `(B - A) × (C - A)`, its length is twice the area.
    pub fn scaled_normal(&self) -> Vec3 {
        (self.b() - self.a()).cross(&(self.c() - self.a()))
    }

    /// Collinear or coincident vertices, compared relative to the edge lengths.
    pub fn is_degenerate(&self) -> bool {
        let ab = self.b() - self.a();
        let ac = self.c() - self.a();
        ab.cross(&ac).norm() <= EPSILON * ab.norm() * ac.norm()
    }

    /// Unit normal following the winding `A → B → C`.
    pub fn normal(&self) -> Option<Normal> {
        if self.is_degenerate() {
            return None;
        }
        Some(Normal::new_normalize(self.scaled_normal()))
    }

    pub fn midpoint(&self) -> Point3 {
        Point3::from((self.a().coords + self.b().coords + self.c().coords) / 3.0)
    }

    /// Plane through `A`.
    pub fn plane(&self) -> Option<Plane> {
        let normal = self.normal()?;
        Some(Plane::new(*self.a(), normal.into_inner()))
    }

    pub fn closest_point(&self, p: &Point3) -> Point3 {
        // Implementation based on "Real-Time Collision Detection", 5.1.5.
        // Vertex regions first, then edge regions, then the face.
        if self.is_degenerate() {
            return self.closest_point_on_edges(p);
        }

        let (a, b, c) = (self.a(), self.b(), self.c());
        let ab = b - a;
        let ac = c - a;

        let ap = p - a;
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return *a;
        }

        let bp = p - b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return *b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return a + ab * v;
        }

        let cp = p - c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return *c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b + (c - b) * w;
        }

        let denom = (va + vb + vc).recip();
        let v = vb * denom;
        let w = vc * denom;
        a + ab * v + ac * w
    }

    fn closest_point_on_edges(&self, p: &Point3) -> Point3 {
        let (a, b, c) = (self.a(), self.b(), self.c());
        [
            closest_point_on_segment(a, b, p),
            closest_point_on_segment(b, c, p),
            closest_point_on_segment(c, a, p),
        ]
        .into_iter()
        .min_by(|lhs, rhs| {
            na::distance_squared(lhs, p).total_cmp(&na::distance_squared(rhs, p))
        })
        .unwrap_or(*a)
    }

    /// Solves `P = αA + βB + γC` with `α + β + γ = 1` for a point in the
    /// triangle's plane. Out-of-plane points get the weights of their
    /// orthogonal projection.
    pub fn barycentric(&self, p: &Point3) -> Option<Barycentrics> {
        if self.is_degenerate() {
            return None;
        }

        let v0 = self.b() - self.a();
        let v1 = self.c() - self.a();
        let v2 = p - self.a();

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);

        let denom = d00 * d11 - d01 * d01;
        if denom == 0.0 {
            return None;
        }

        let beta = (d11 * d20 - d01 * d21) / denom;
        let gamma = (d00 * d21 - d01 * d20) / denom;
        let alpha = 1.0 - beta - gamma;
        Some(Barycentrics::new(alpha, beta, gamma))
    }

    /// `αA + βB + γC`, weights are used as given.
    pub fn point_from_barycentric(&self, coords: &Barycentrics) -> Point3 {
        Point3::from(
            self.a().coords * coords.alpha()
                + self.b().coords * coords.beta()
                + self.c().coords * coords.gamma(),
        )
    }
}

impl From<[Point3; 3]> for Triangle {
    fn from(positions: [Point3; 3]) -> Self {
        Self { positions }
    }
}

pub fn derive_world_position(triangle: &Triangle, coords: &Barycentrics) -> Point3 {
    triangle.point_from_barycentric(coords)
}

pub fn derive_barycentric(triangle: &Triangle, point: &Point3) -> Option<Barycentrics> {
    triangle.barycentric(point)
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::prelude::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![0.0, 1.0, 0.0],
        )
    }

    fn random_triangle(rng: &mut impl Rng) -> Triangle {
        loop {
            let mut random_point = || {
                point![
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0)
                ]
            };
            let triangle = Triangle::new(random_point(), random_point(), random_point());
            let ab = triangle.b() - triangle.a();
            let ac = triangle.c() - triangle.a();
            // Keep reasonably conditioned triangles only.
            if triangle.scaled_normal().norm() > 1e-2 * ab.norm() * ac.norm() {
                return triangle;
            }
        }
    }

    #[test]
    fn normal_follows_winding() {
        let triangle = unit_triangle();
        let normal = triangle.normal().unwrap();
        assert_relative_eq!(normal.into_inner(), Z_AXIS);

        let flipped = Triangle::new(*triangle.a(), *triangle.c(), *triangle.b());
        let normal = flipped.normal().unwrap();
        assert_relative_eq!(normal.into_inner(), -Z_AXIS);
    }

    #[test]
    fn degenerate() {
        let collinear = Triangle::new(
            point![0.0, 0.0, 0.0],
            point![1.0, 1.0, 1.0],
            point![2.0, 2.0, 2.0],
        );
        assert!(collinear.is_degenerate());
        assert!(collinear.normal().is_none());
        assert!(collinear.plane().is_none());
        assert!(collinear.barycentric(&point![1.0, 1.0, 1.0]).is_none());

        let coincident = Triangle::new(Point3::origin(), Point3::origin(), Point3::origin());
        assert!(coincident.is_degenerate());
        assert!(coincident.barycentric(&Point3::origin()).is_none());

        assert!(!unit_triangle().is_degenerate());
    }

    #[test]
    fn degenerate_closest_point_is_finite() {
        let collinear = Triangle::new(
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![2.0, 0.0, 0.0],
        );
        let p = collinear.closest_point(&point![1.5, 3.0, 0.0]);
        assert_abs_diff_eq!(p, point![1.5, 0.0, 0.0], epsilon = 1e-12);
        let p = collinear.closest_point(&point![-4.0, 0.0, 0.0]);
        assert_abs_diff_eq!(p, point![0.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn midpoint_and_plane() {
        let triangle = Triangle::new(
            point![0.0, 20.0, 0.0],
            point![-20.0, -10.0, 0.0],
            point![20.0, -10.0, 0.0],
        );
        assert_abs_diff_eq!(triangle.midpoint(), Point3::origin(), epsilon = 1e-12);

        let plane = triangle.plane().unwrap();
        assert_eq!(plane.origin, *triangle.a());
        assert_abs_diff_eq!(plane.signed_distance(&triangle.midpoint()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_point_regions() {
        let triangle = unit_triangle();
        let cases = [
            // Face, lifted off the plane.
            (point![0.25, 0.25, 3.0], point![0.25, 0.25, 0.0]),
            // Vertex regions.
            (point![-1.0, -1.0, 0.0], point![0.0, 0.0, 0.0]),
            (point![2.0, -0.5, 1.0], point![1.0, 0.0, 0.0]),
            (point![-0.5, 2.0, -1.0], point![0.0, 1.0, 0.0]),
            // Edge regions.
            (point![0.5, -1.0, 0.0], point![0.5, 0.0, 0.0]),
            (point![-1.0, 0.5, 0.0], point![0.0, 0.5, 0.0]),
            (point![1.0, 1.0, 2.0], point![0.5, 0.5, 0.0]),
        ];
        for (p, expected) in cases {
            assert_abs_diff_eq!(triangle.closest_point(&p), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn closest_point_keeps_inside_points() {
        let triangle = unit_triangle();
        for p in [
            point![0.2, 0.3, 0.0],
            point![0.0, 0.0, 0.0],
            point![0.5, 0.5, 0.0],
            point![0.0, 0.7, 0.0],
        ] {
            assert_abs_diff_eq!(triangle.closest_point(&p), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn barycentric_of_vertices() {
        let triangle = unit_triangle();
        let expected = [
            Barycentrics::new(1.0, 0.0, 0.0),
            Barycentrics::new(0.0, 1.0, 0.0),
            Barycentrics::new(0.0, 0.0, 1.0),
        ];
        for (position, expected) in triangle.positions.iter().zip(expected) {
            let coords = triangle.barycentric(position).unwrap();
            assert_abs_diff_eq!(coords.to_vector(), expected.to_vector(), epsilon = 1e-12);
        }
    }

    #[test]
    fn point_from_barycentric_does_not_normalize() {
        let triangle = unit_triangle();
        let p = triangle.point_from_barycentric(&Barycentrics::new(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(p, point![1.0, 1.0, 0.0]);
        let p = derive_world_position(&triangle, &Barycentrics::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(p, Point3::origin());
    }

    #[test]
    fn point_round_trip() {
        let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(0);
        for _ in 0..1000 {
            let triangle = random_triangle(&mut rng);
            let s: f64 = rng.gen_range(-1.0..2.0);
            let t: f64 = rng.gen_range(-1.0..2.0);
            let ab = triangle.b() - triangle.a();
            let ac = triangle.c() - triangle.a();
            let p = triangle.a() + ab * s + ac * t;
            let coords = derive_barycentric(&triangle, &p).unwrap();
            let q = derive_world_position(&triangle, &coords);
            assert_abs_diff_eq!(p, q, epsilon = 1e-6);
        }
    }

    #[test]
    fn barycentric_round_trip() {
        let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(1);
        for _ in 0..1000 {
            let triangle = random_triangle(&mut rng);
            let alpha: f64 = rng.gen_range(-1.0..2.0);
            let beta: f64 = rng.gen_range(-1.0..2.0);
            let coords = Barycentrics::new(alpha, beta, 1.0 - alpha - beta);
            let p = triangle.point_from_barycentric(&coords);
            let result = triangle.barycentric(&p).unwrap();
            assert_abs_diff_eq!(result.to_vector(), coords.to_vector(), epsilon = 1e-6);
            assert_abs_diff_eq!(result.sum(), 1.0, epsilon = 1e-9);
        }
    }
}
