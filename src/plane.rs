use super::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vec3,
}

impl Plane {
    #[inline]
    pub const fn new(origin: Point3, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// Distance along the normal, scaled by its length.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&(p - self.origin))
    }

    /// Orthogonal projection. A zero normal leaves the point where it is.
    pub fn project_point(&self, p: &Point3) -> Point3 {
        let length_squared = self.normal.norm_squared();
        if length_squared <= EPSILON * EPSILON {
            return *p;
        }
        p - self.normal * (self.signed_distance(p) / length_squared)
    }

    pub fn intersect_line(
        &self,
        line_origin: &Point3,
        line_dir: &Vec3,
        epsilon: f64,
    ) -> Option<Point3> {
        project_along_direction(line_origin, line_dir, &self.origin, &self.normal, epsilon)
    }

    /// Moves `p` onto the plane along `line_dir` through `line_origin`, or
    /// straight down the normal when the line runs parallel to the plane.
    pub fn project_constrained(&self, p: &Point3, line_origin: &Point3, line_dir: &Vec3) -> Point3 {
        if let Some(projected) = self.intersect_line(line_origin, line_dir, EPSILON) {
            return projected;
        }
        debug!("Line is parallel to plane, falling back to orthogonal projection");
        self.project_point(p)
    }
}

/// Intersection of `line_origin + t * line_dir` with the plane. `None` when
/// the direction is parallel to the plane within `epsilon`.
pub fn project_along_direction(
    line_origin: &Point3,
    line_dir: &Vec3,
    plane_origin: &Point3,
    plane_normal: &Vec3,
    epsilon: f64,
) -> Option<Point3> {
    let dot = plane_normal.dot(line_dir);
    if dot.abs() <= epsilon {
        return None;
    }
    let t = -plane_normal.dot(&(line_origin - plane_origin)) / dot;
    Some(line_origin + line_dir * t)
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ground() -> Plane {
        Plane::new(Point3::origin(), Z_AXIS)
    }

    #[test]
    fn camera_ray() {
        let camera = point![0.0, 0.0, 50.0];
        let p = point![5.0, 5.0, 10.0];
        let projected = project_along_direction(&camera, &(p - camera), &Point3::origin(), &Z_AXIS, EPSILON).unwrap();
        assert_abs_diff_eq!(projected, point![6.25, 6.25, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn offset_plane() {
        let plane = Plane::new(point![0.0, 0.0, 2.0], vector![1.0, 0.0, 1.0].normalize());
        let projected = plane.intersect_line(&point![0.0, 0.0, 10.0], &-Z_AXIS, EPSILON).unwrap();
        assert_abs_diff_eq!(projected, point![0.0, 0.0, 2.0], epsilon = 1e-12);
        assert_abs_diff_eq!(plane.signed_distance(&projected), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_direction_fails() {
        let plane = ground();
        assert!(plane.intersect_line(&point![0.0, 0.0, 5.0], &X_AXIS, EPSILON).is_none());
        assert!(plane
            .intersect_line(&point![0.0, 0.0, 5.0], &vector![1.0, 0.0, 1e-7], EPSILON)
            .is_none());
        assert!(plane
            .intersect_line(&point![0.0, 0.0, 5.0], &vector![1.0, 0.0, 1e-3], EPSILON)
            .is_some());
    }

    #[test]
    fn parallel_direction_falls_back_to_orthogonal() {
        let plane = Plane::new(point![1.0, 2.0, 3.0], vector![0.0, 1.0, 1.0].normalize());
        let p = point![4.0, 7.0, -2.0];
        let direction = vector![1.0, 1.0, -1.0];
        assert!(plane.intersect_line(&p, &direction, EPSILON).is_none());

        let projected = plane.project_constrained(&p, &p, &direction);
        assert_abs_diff_eq!(plane.signed_distance(&projected), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected, plane.project_point(&p));
    }

    #[test]
    fn project_point() {
        let plane = ground();
        let projected = plane.project_point(&point![3.0, -4.0, 7.0]);
        assert_abs_diff_eq!(projected, point![3.0, -4.0, 0.0]);

        let flat = Plane::new(Point3::origin(), Vec3::zeros());
        assert_eq!(flat.project_point(&point![1.0, 2.0, 3.0]), point![1.0, 2.0, 3.0]);
    }
}
