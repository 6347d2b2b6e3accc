use super::*;

//
// Linear algebra
//

pub use na::{point, vector};

pub type Vec3 = na::Vector3<f64>;
pub type Point3 = na::Point3<f64>;
pub type Normal = na::UnitVector3<f64>;

pub const X_AXIS: Vec3 = vector![1.0, 0.0, 0.0];
pub const Y_AXIS: Vec3 = vector![0.0, 1.0, 0.0];
pub const Z_AXIS: Vec3 = vector![0.0, 0.0, 1.0];

/// Tolerance shared by the parallel-direction, degeneracy and near-zero checks.
pub const EPSILON: f64 = 1e-6;

#[macro_export]
macro_rules! normal {
    ($v:expr) => {
        ::nalgebra::Unit::new_normalize($v)
    };

    ($x:expr, $y:expr, $z:expr) => {
        ::nalgebra::Unit::new_normalize(::nalgebra::Vector3::<f64>::new($x, $y, $z))
    };
}

//
// Axis
//

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => X_AXIS,
            Self::Y => Y_AXIS,
            Self::Z => Z_AXIS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//
// Geometric
//

pub fn closest_point_on_segment(a: &Point3, b: &Point3, p: &Point3) -> Point3 {
    let ab = b - a;
    let length_squared = ab.norm_squared();
    if length_squared <= EPSILON * EPSILON {
        return *a;
    }
    let t = (ab.dot(&(p - a)) / length_squared).clamp(0.0, 1.0);
    a + ab * t
}

//
// Tests
//
