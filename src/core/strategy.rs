//! Projection strategy resolution.
//!
//! Decides between direct interpolation and ribbon-constrained mapping from the
//! caller's method flags and the optional inner/outer surfaces. Each method flag
//! only matters in one mode; an explicit value for the flag that does not apply
//! produces a warning and nothing else. Pure logic, no filesystem access.
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{DirectMethod, Hemisphere, HemispherePair, Method, RibbonMethod};

/// Inner (white matter) and outer (pial) surfaces, validated as a unit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RibbonSurfaces {
    inner: HemispherePair<PathBuf>,
    outer: HemispherePair<PathBuf>,
}

impl RibbonSurfaces {
    pub fn inner(&self) -> &HemispherePair<PathBuf> {
        &self.inner
    }

    pub fn outer(&self) -> &HemispherePair<PathBuf> {
        &self.outer
    }
}

/// Global pairing check for `--inner_surfaces` / `--outer_surfaces`.
pub fn pair_ribbon_surfaces(
    inner: Option<HemispherePair<PathBuf>>,
    outer: Option<HemispherePair<PathBuf>>,
) -> Result<Option<RibbonSurfaces>> {
    match (inner, outer) {
        (Some(inner), Some(outer)) => Ok(Some(RibbonSurfaces { inner, outer })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(Error::UnpairedRibbonSurfaces { provided: "inner" }),
        (None, Some(_)) => Err(Error::UnpairedRibbonSurfaces { provided: "outer" }),
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ProjectionStrategy {
    Direct {
        method: DirectMethod,
    },
    RibbonConstrained {
        interpolation: RibbonMethod,
        surfaces: RibbonSurfaces,
    },
}

/// What one hemisphere's mapping call needs to know about the strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HemisphereMapping<'a> {
    Direct(DirectMethod),
    Ribbon {
        inner: &'a Path,
        outer: &'a Path,
        interpolate: Option<DirectMethod>,
    },
}

impl ProjectionStrategy {
    pub fn for_hemisphere(&self, hemisphere: Hemisphere) -> HemisphereMapping<'_> {
        match self {
            ProjectionStrategy::Direct { method } => HemisphereMapping::Direct(*method),
            ProjectionStrategy::RibbonConstrained {
                interpolation,
                surfaces,
            } => HemisphereMapping::Ribbon {
                inner: surfaces.inner.get(hemisphere),
                outer: surfaces.outer.get(hemisphere),
                interpolate: interpolation.interpolation(),
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ProjectionStrategy::Direct { method } => format!("direct mapping, method '{method}'"),
            ProjectionStrategy::RibbonConstrained { interpolation, .. } => {
                format!("ribbon constrained mapping (takes longer), method '{interpolation}'")
            }
        }
    }
}

/// Non-fatal notice about a flag that has no effect in the resolved mode.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StrategyWarning {
    RibbonMethodIgnored(RibbonMethod),
    MethodIgnored(Method),
}

impl std::fmt::Display for StrategyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyWarning::RibbonMethodIgnored(m) => write!(
                f,
                "Ribbon-constrained method was set to '{m}', being ignored. Use --method"
            ),
            StrategyWarning::MethodIgnored(m) => {
                write!(f, "Method was set to '{m}', being ignored. Use --rc_method")
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Resolution {
    pub strategy: ProjectionStrategy,
    pub warnings: Vec<StrategyWarning>,
}

pub fn resolve(
    method: Method,
    rc_method: Option<RibbonMethod>,
    ribbon: Option<&RibbonSurfaces>,
) -> Resolution {
    let mut warnings = Vec::new();

    let strategy = match ribbon {
        None => {
            if let Some(rc) = rc_method {
                warnings.push(StrategyWarning::RibbonMethodIgnored(rc));
            }
            let method = match method {
                Method::Unspecified | Method::Trilinear => DirectMethod::Trilinear,
                Method::Cubic => DirectMethod::Cubic,
                Method::Enclosing => DirectMethod::Enclosing,
            };
            ProjectionStrategy::Direct { method }
        }
        Some(surfaces) => {
            if method.is_specified() {
                warnings.push(StrategyWarning::MethodIgnored(method));
            }
            ProjectionStrategy::RibbonConstrained {
                interpolation: rc_method.unwrap_or_default(),
                surfaces: surfaces.clone(),
            }
        }
    };

    Resolution { strategy, warnings }
}
