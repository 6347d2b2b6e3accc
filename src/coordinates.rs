use super::*;

//
// Component
//

/// One barycentric component, paired with the triangle vertex it weighs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Component {
    Alpha,
    Beta,
    Gamma,
}

impl Component {
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::Gamma];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Alpha => 0,
            Self::Beta => 1,
            Self::Gamma => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The two remaining components, in ascending index order.
    pub const fn others(self) -> [Self; 2] {
        match self {
            Self::Alpha => [Self::Beta, Self::Gamma],
            Self::Beta => [Self::Alpha, Self::Gamma],
            Self::Gamma => [Self::Alpha, Self::Beta],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }

    pub fn vertex_name(self) -> &'static str {
        match self {
            Self::Alpha => "A",
            Self::Beta => "B",
            Self::Gamma => "C",
        }
    }

    /// Accepts either the component name or the vertex name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|component| {
            component.name().eq_ignore_ascii_case(name)
                || component.vertex_name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//
// Barycentrics
//

/// Weights `(α, β, γ)` of the vertices `(A, B, C)`.
///
/// The triple is expected to sum to one, but nothing here enforces it: a
/// direct edit in [`BalancingMode::None`] deliberately leaves it unbalanced.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Barycentrics([f64; 3]);

impl Barycentrics {
    pub const INITIAL: Self = Self([1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);

    #[inline]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self([alpha, beta, gamma])
    }

    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub const fn beta(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub const fn gamma(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.0[0] + self.0[1] + self.0[2]
    }

    /// Amount missing from the unit sum.
    #[inline]
    pub fn deviation(&self) -> f64 {
        1.0 - self.sum()
    }

    pub fn is_normalized(&self, epsilon: f64) -> bool {
        approx::abs_diff_eq!(self.sum(), 1.0, epsilon = epsilon)
    }

    /// True when the weights describe a point inside or on the triangle.
    pub fn is_inside(&self, epsilon: f64) -> bool {
        self.is_normalized(epsilon)
            && self
                .0
                .iter()
                .all(|&weight| (-epsilon..=1.0 + epsilon).contains(&weight))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|weight| weight.is_finite())
    }

    #[inline]
    pub fn to_vector(self) -> Vec3 {
        Vec3::from(self.0)
    }
}

impl Default for Barycentrics {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<Vec3> for Barycentrics {
    fn from(v: Vec3) -> Self {
        Self([v.x, v.y, v.z])
    }
}

impl std::ops::Index<Component> for Barycentrics {
    type Output = f64;

    fn index(&self, component: Component) -> &Self::Output {
        &self.0[component.index()]
    }
}

impl std::ops::IndexMut<Component> for Barycentrics {
    fn index_mut(&mut self, component: Component) -> &mut Self::Output {
        &mut self.0[component.index()]
    }
}

impl std::fmt::Display for Barycentrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "α={:.3}, β={:.3}, γ={:.3}",
            self.alpha(),
            self.beta(),
            self.gamma()
        )
    }
}

//
// Tests
//
