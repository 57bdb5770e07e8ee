//! Composition checks.
//!
//! Violations are advisory: the roster stays editable and exportable while
//! any are present. Checks run in a fixed order and render fixed wording so
//! the message list is reproducible for identical state.

use crate::catalog::{CatalogOracle, Points};
use crate::composition::composition;
use crate::pricing::total_cost;
use crate::state::{RosterState, UnitId};

/// A single broken composition rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    #[error("No Commander selected.")]
    NoCommander,

    #[error("Over points limit by {excess} pts.")]
    OverPoints { excess: Points },

    #[error("Too many Support units ({support}). For {core} Core units you may take {allowed}.")]
    TooManySupport {
        support: usize,
        core: usize,
        allowed: usize,
    },

    #[error("Must include at least 1 Core unit.")]
    NoCoreUnits,

    #[error("{name}: minimum {minimum} models (currently {current}).")]
    BelowMinimum {
        unit: UnitId,
        name: String,
        minimum: u16,
        current: u16,
    },

    #[error("{name}: maximum {maximum} models (currently {current}).")]
    AboveMaximum {
        unit: UnitId,
        name: String,
        maximum: u16,
        current: u16,
    },
}

impl Violation {
    /// Stable identifier of the rule, independent of the rendered numbers.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoCommander => "NO_COMMANDER",
            Self::OverPoints { .. } => "OVER_POINTS",
            Self::TooManySupport { .. } => "TOO_MANY_SUPPORT",
            Self::NoCoreUnits => "NO_CORE_UNITS",
            Self::BelowMinimum { .. } => "BELOW_MINIMUM_SIZE",
            Self::AboveMaximum { .. } => "ABOVE_MAXIMUM_SIZE",
        }
    }
}

/// Checks the roster and returns every violation in reporting order.
///
/// An empty result means the force is legal.
pub fn validate<C>(catalog: &C, state: &RosterState) -> Vec<Violation>
where
    C: CatalogOracle + ?Sized,
{
    let mut violations = Vec::new();

    if state.commander().is_none() {
        violations.push(Violation::NoCommander);
    }

    let total = total_cost(catalog, state);
    let limit = Points::try_from(state.points_limit()).unwrap_or(Points::MAX);
    if total > limit {
        violations.push(Violation::OverPoints {
            excess: total - limit,
        });
    }

    let tally = composition(catalog, state);
    if tally.support_exceeded() {
        violations.push(Violation::TooManySupport {
            support: tally.support,
            core: tally.core,
            allowed: tally.max_support(),
        });
    }

    if tally.core == 0 && state.commander().is_some() {
        violations.push(Violation::NoCoreUnits);
    }

    for unit in state.units() {
        let Some(entry) = catalog.unit(state.faction(), unit.def()) else {
            continue;
        };
        let Some((minimum, maximum)) = entry.def.size_bounds() else {
            continue;
        };

        if unit.quantity() < minimum {
            violations.push(Violation::BelowMinimum {
                unit: unit.id(),
                name: entry.def.name.clone(),
                minimum,
                current: unit.quantity(),
            });
        }
        if unit.quantity() > maximum {
            violations.push(Violation::AboveMaximum {
                unit: unit.id(),
                name: entry.def.name.clone(),
                maximum,
                current: unit.quantity(),
            });
        }
    }

    violations
}

/// Renders [`validate`] as display messages.
pub fn messages<C>(catalog: &C, state: &RosterState) -> Vec<String>
where
    C: CatalogOracle + ?Sized,
{
    validate(catalog, state)
        .iter()
        .map(ToString::to_string)
        .collect()
}
