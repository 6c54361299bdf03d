//! Shared types and enums used across the crate.
//! Includes `Hemisphere`, the left/right `HemispherePair`, and the interpolation
//! selections (`Method`, `DirectMethod`, `RibbonMethod`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Hemisphere {
    Left,
    Right,
}

impl Hemisphere {
    /// Processing order. Left always comes first.
    pub const BOTH: [Hemisphere; 2] = [Hemisphere::Left, Hemisphere::Right];

    pub fn short(&self) -> &'static str {
        match self {
            Hemisphere::Left => "L",
            Hemisphere::Right => "R",
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::Left => write!(f, "left"),
            Hemisphere::Right => write!(f, "right"),
        }
    }
}

/// A value per hemisphere, always stored and iterated left then right.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct HemispherePair<T> {
    pub left: T,
    pub right: T,
}

impl<T> HemispherePair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, hemisphere: Hemisphere) -> &T {
        match hemisphere {
            Hemisphere::Left => &self.left,
            Hemisphere::Right => &self.right,
        }
    }

    pub fn as_ref(&self) -> HemispherePair<&T> {
        HemispherePair {
            left: &self.left,
            right: &self.right,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> HemispherePair<U> {
        let left = f(self.left);
        let right = f(self.right);
        HemispherePair { left, right }
    }

    /// Fallible map; stops at the first error, so the right side is never
    /// touched when the left side fails.
    pub fn try_map<U, E, F: FnMut(Hemisphere, T) -> std::result::Result<U, E>>(
        self,
        mut f: F,
    ) -> std::result::Result<HemispherePair<U>, E> {
        let left = f(Hemisphere::Left, self.left)?;
        let right = f(Hemisphere::Right, self.right)?;
        Ok(HemispherePair { left, right })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hemisphere, &T)> {
        Hemisphere::BOTH.into_iter().map(move |h| (h, self.get(h)))
    }

    /// Build a pair from a CLI `L R` argument list.
    pub fn from_vec(arg: &'static str, values: Vec<T>) -> Result<Self> {
        let count = values.len();
        let mut values = values.into_iter();
        match (values.next(), values.next(), values.next()) {
            (Some(left), Some(right), None) => Ok(Self { left, right }),
            _ => Err(Error::InvalidSurfacePair { arg, count }),
        }
    }
}

/// Interpolation requested for direct mapping. `Unspecified` is what the
/// caller gets when the flag is never given.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    #[value(skip)]
    Unspecified,
    Trilinear,
    Cubic,
    Enclosing, // Use for label volumes
}

impl Method {
    pub fn is_specified(&self) -> bool {
        !matches!(self, Method::Unspecified)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Unspecified => write!(f, "unspecified"),
            Method::Trilinear => write!(f, "trilinear"),
            Method::Cubic => write!(f, "cubic"),
            Method::Enclosing => write!(f, "enclosing"),
        }
    }
}

/// A resolved direct interpolation method.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectMethod {
    Trilinear,
    Cubic,
    Enclosing,
}

impl DirectMethod {
    /// Flag selecting this method in plain volume-to-surface mapping.
    pub fn mapping_flag(&self) -> &'static str {
        match self {
            DirectMethod::Trilinear => "-trilinear",
            DirectMethod::Cubic => "-cubic",
            DirectMethod::Enclosing => "-enclosing",
        }
    }

    /// Value taken by `-interpolate` inside ribbon-constrained mapping.
    pub fn interpolate_value(&self) -> &'static str {
        match self {
            DirectMethod::Trilinear => "TRILINEAR",
            DirectMethod::Cubic => "CUBIC",
            DirectMethod::Enclosing => "ENCLOSING",
        }
    }
}

impl std::fmt::Display for DirectMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectMethod::Trilinear => write!(f, "trilinear"),
            DirectMethod::Cubic => write!(f, "cubic"),
            DirectMethod::Enclosing => write!(f, "enclosing"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RibbonMethod {
    #[default]
    #[value(name = "weighted_avg")]
    WeightedAvg,
    Trilinear,
    Cubic,
    Enclosing,
}

impl RibbonMethod {
    /// Interpolation override for the ribbon mapping; weighted averaging is the
    /// engine's own behaviour and needs no extra flag.
    pub fn interpolation(&self) -> Option<DirectMethod> {
        match self {
            RibbonMethod::WeightedAvg => None,
            RibbonMethod::Trilinear => Some(DirectMethod::Trilinear),
            RibbonMethod::Cubic => Some(DirectMethod::Cubic),
            RibbonMethod::Enclosing => Some(DirectMethod::Enclosing),
        }
    }
}

impl std::fmt::Display for RibbonMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RibbonMethod::WeightedAvg => write!(f, "weighted_avg"),
            RibbonMethod::Trilinear => write!(f, "trilinear"),
            RibbonMethod::Cubic => write!(f, "cubic"),
            RibbonMethod::Enclosing => write!(f, "enclosing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_iterates_left_then_right() {
        let pair = HemispherePair::new("lh", "rh");
        let order: Vec<_> = pair.iter().map(|(h, v)| (h, *v)).collect();
        assert_eq!(order, vec![(Hemisphere::Left, "lh"), (Hemisphere::Right, "rh")]);
    }

    #[test]
    fn pair_from_vec_requires_exactly_two() {
        let pair = HemispherePair::from_vec("--inner_surfaces", vec![1, 2]).unwrap();
        assert_eq!(pair, HemispherePair::new(1, 2));

        let err = HemispherePair::from_vec("--inner_surfaces", vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidSurfacePair { count: 3, .. }));
        assert!(HemispherePair::<i32>::from_vec("--outer_surfaces", vec![1]).is_err());
    }

    #[test]
    fn try_map_stops_after_left_failure() {
        let mut seen = Vec::new();
        let result: std::result::Result<HemispherePair<()>, &str> =
            HemispherePair::new(1, 2).try_map(|h, _| {
                seen.push(h);
                Err("boom")
            });
        assert!(result.is_err());
        assert_eq!(seen, vec![Hemisphere::Left]);
    }

    #[test]
    fn pair_of_references_is_copy() {
        let left = String::from("lh");
        let right = String::from("rh");
        let pair = HemispherePair::new(left.as_str(), right.as_str());
        let copied = pair;
        assert_eq!(pair, copied);
        assert_eq!(*copied.get(Hemisphere::Right), "rh");
    }

    #[test]
    fn weighted_avg_has_no_interpolation_override() {
        assert_eq!(RibbonMethod::WeightedAvg.interpolation(), None);
        assert_eq!(RibbonMethod::Cubic.interpolation(), Some(DirectMethod::Cubic));
        assert_eq!(DirectMethod::Enclosing.interpolate_value(), "ENCLOSING");
    }

    #[test]
    fn unspecified_is_not_a_cli_value() {
        let names: Vec<String> = Method::value_variants()
            .iter()
            .filter_map(|m| m.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["trilinear", "cubic", "enclosing"]);
        assert!(!Method::default().is_specified());
    }
}
