use super::*;

/// How a sum deviation is spread over the two components that were not edited.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BalancingMode {
    /// Both components receive half of the deviation.
    #[default]
    Evenly,
    /// Each component receives a share proportional to its current value.
    Ratio,
    /// The deviation is left in place, the triple no longer sums to one.
    None,
}

impl BalancingMode {
    pub const ALL: [Self; 3] = [Self::Evenly, Self::Ratio, Self::None];

    pub fn name(self) -> &'static str {
        match self {
            Self::Evenly => "Evenly",
            Self::Ratio => "Ratio",
            Self::None => "None",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// Whether the strategy restores the unit sum.
    pub fn restores_sum(self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn distribute(self, others: [f64; 2], deviation: f64) -> [f64; 2] {
        match self {
            Self::Evenly => evenly(others, deviation),
            Self::Ratio => ratio(others, deviation),
            Self::None => others,
        }
    }
}

impl std::fmt::Display for BalancingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn evenly([j, k]: [f64; 2], deviation: f64) -> [f64; 2] {
    let shift = deviation / 2.0;
    [j + shift, k + shift]
}

fn ratio([j, k]: [f64; 2], deviation: f64) -> [f64; 2] {
    let j_zero = j.abs() <= EPSILON;
    let k_zero = k.abs() <= EPSILON;
    match (j_zero, k_zero) {
        (true, true) => evenly([j, k], deviation),
        (true, false) => [j, k + deviation],
        (false, true) => [j + deviation, k],
        (false, false) => {
            let total = j + k;
            // Equal and opposite, shares would blow up or flip sign.
            if total.abs() <= EPSILON {
                return evenly([j, k], deviation);
            }
            [j + deviation * (j / total), k + deviation * (k / total)]
        }
    }
}

/// Applies a direct edit of one component and redistributes the remaining
/// two so the triple sums to one again.
///
/// With `interior` set, the edited value is clamped to `[0, 1]` first and a
/// component pushed out of range by the redistribution is clamped back, the
/// third component absorbing the difference. When both unedited components
/// leave the range, one is below zero and the other above one: the negative
/// one is clamped, which always lands the absorber at `1 - v_edited`.
pub fn rebalance(
    edited: Component,
    value: f64,
    current: Barycentrics,
    mode: BalancingMode,
    interior: bool,
) -> Barycentrics {
    let mut coords = current;
    coords[edited] = if interior { clamp_unit(value) } else { value };

    let deviation = coords.deviation();
    let [j, k] = edited.others();
    let [vj, vk] = mode.distribute([coords[j], coords[k]], deviation);
    coords[j] = vj;
    coords[k] = vk;

    if interior && mode.restores_sum() {
        let violator = [j, k]
            .into_iter()
            .find(|&c| coords[c] < 0.0)
            .or_else(|| [j, k].into_iter().find(|&c| !is_unit(coords[c])));
        if let Some(violator) = violator {
            let absorber = if violator == j { k } else { j };
            coords[violator] = clamp_unit(coords[violator]);
            coords[absorber] = 1.0 - coords[edited] - coords[violator];
            trace!("Clamped {violator}, {absorber} absorbs the remainder");
        }
    }

    coords
}

//
// Tests
//
