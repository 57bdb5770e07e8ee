//! Effective core/support roles and the support quota.
//!
//! A unit's effective role is a query, recomputed on demand: under a cavalry
//! commander, cavalry published in the support list counts as core. The
//! stored roster never changes because of it.

use crate::catalog::{CatalogOracle, ListedRole, UnitEntry};
use crate::state::{RosterState, UnitInstance};

/// Role a unit counts as for quota checks and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectiveRole {
    Core,
    Support,
    /// The unit definition is not in the faction's lists.
    Unknown,
}

/// Classifies a catalog entry given whether a cavalry commander leads the force.
pub fn classify(entry: UnitEntry<'_>, cavalry_commander: bool) -> EffectiveRole {
    match entry.role {
        ListedRole::Core => EffectiveRole::Core,
        ListedRole::Support if cavalry_commander && entry.def.is_cavalry => EffectiveRole::Core,
        ListedRole::Support => EffectiveRole::Support,
    }
}

/// Returns true if the roster's selected commander is a cavalry commander.
pub fn has_cavalry_commander<C>(catalog: &C, state: &RosterState) -> bool
where
    C: CatalogOracle + ?Sized,
{
    state
        .commander()
        .and_then(|id| catalog.commander(state.faction(), id))
        .is_some_and(|commander| commander.is_cavalry_commander)
}

/// Effective role of one unit in the roster.
pub fn effective_role<C>(catalog: &C, state: &RosterState, unit: &UnitInstance) -> EffectiveRole
where
    C: CatalogOracle + ?Sized,
{
    role_of(catalog, state, unit, has_cavalry_commander(catalog, state))
}

fn role_of<C>(
    catalog: &C,
    state: &RosterState,
    unit: &UnitInstance,
    cavalry_commander: bool,
) -> EffectiveRole
where
    C: CatalogOracle + ?Sized,
{
    catalog
        .unit(state.faction(), unit.def())
        .map_or(EffectiveRole::Unknown, |entry| {
            classify(entry, cavalry_commander)
        })
}

/// Core/support tallies over effective roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composition {
    pub core: usize,
    pub support: usize,
    pub unknown: usize,
}

impl Composition {
    /// One support unit is allowed per two core units, rounded down.
    pub const fn max_support(&self) -> usize {
        self.core / 2
    }

    pub const fn support_exceeded(&self) -> bool {
        self.support > self.max_support()
    }
}

/// Tallies the roster's effective roles.
pub fn composition<C>(catalog: &C, state: &RosterState) -> Composition
where
    C: CatalogOracle + ?Sized,
{
    let cavalry_commander = has_cavalry_commander(catalog, state);
    state
        .units()
        .iter()
        .fold(Composition::default(), |mut tally, unit| {
            match role_of(catalog, state, unit, cavalry_commander) {
                EffectiveRole::Core => tally.core += 1,
                EffectiveRole::Support => tally.support += 1,
                EffectiveRole::Unknown => tally.unknown += 1,
            }
            tally
        })
}
