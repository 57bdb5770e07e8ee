//! Point costs of the commander, each unit, and the whole force.
//!
//! Every component is an additive integer. A reference that does not resolve
//! in the catalog prices at zero.

use strum::IntoEnumIterator;

use crate::catalog::{
    ArtilleryPiece, CatalogOracle, CommanderDef, FactionId, Points, UnitDef, UnitProfile,
    UnitUpgradeKind,
};
use crate::state::{
    CommanderOptions, CommanderUpgradeKind, CommanderUpgrades, RosterState, UnitCondition, UnitId,
    UnitInstance,
};

/// Cost of the selected commander with options and unit upgrades.
pub fn commander_cost<C>(catalog: &C, state: &RosterState) -> Points
where
    C: CatalogOracle + ?Sized,
{
    state
        .commander()
        .and_then(|id| catalog.commander(state.faction(), id))
        .map(|commander| {
            price_commander(
                commander,
                state.commander_options(),
                state.commander_upgrades(),
            )
        })
        .unwrap_or(0)
}

/// Prices a commander definition under the given selections.
///
/// Only options the commander lists are charged. Unit upgrades are charged
/// unless the commander is an attachment or a naval officer.
pub fn price_commander(
    commander: &CommanderDef,
    options: CommanderOptions,
    upgrades: CommanderUpgrades,
) -> Points {
    let option_points: i64 = commander
        .options
        .iter()
        .filter(|option| options.contains(CommanderOptions::of(option.kind)))
        .map(|option| i64::from(option.points))
        .sum();

    let upgrade_points = if commander.buys_unit_upgrades() {
        let count = CommanderUpgradeKind::iter()
            .filter(|kind| upgrades.contains(kind.flag()))
            .count();
        i64::from(commander.unit_upgrade_cost()) * count_points(count)
    } else {
        0
    };

    saturate(i64::from(commander.points) + option_points + upgrade_points)
}

/// Cost of one unit instance within the given faction.
pub fn unit_cost<C>(catalog: &C, faction: &FactionId, unit: &UnitInstance) -> Points
where
    C: CatalogOracle + ?Sized,
{
    catalog
        .unit(faction, unit.def())
        .map(|entry| price_unit(catalog, entry.def, unit))
        .unwrap_or(0)
}

/// Prices a unit instance against its definition.
pub fn price_unit<C>(catalog: &C, def: &UnitDef, unit: &UnitInstance) -> Points
where
    C: CatalogOracle + ?Sized,
{
    let condition = unit.condition();

    match &def.profile {
        UnitProfile::Artillery {
            cost_per_crew,
            piece,
            ..
        } => {
            let cannon = match piece {
                ArtilleryPiece::Cannon { .. } => unit
                    .cannon()
                    .and_then(|id| catalog.cannon_type(id))
                    .map_or(0, |cannon| cannon.points),
                ArtilleryPiece::Howitzer | ArtilleryPiece::Rocket => 0,
            };
            // Veteran artillery pays the surcharge once.
            let veteran = surcharge(condition, UnitCondition::Veteran, def.veteran_cost);

            saturate(i64::from(*cost_per_crew) + i64::from(cannon) + veteran)
        }
        UnitProfile::Formed { cost_per_model, .. } => {
            let models = i64::from(unit.quantity());
            let upgrades = UnitUpgradeKind::iter()
                .filter(|kind| def.upgrades.contains(kind.flag()))
                .filter(|kind| unit.upgrades().contains(kind.flag()))
                .count();
            let upgrade_model = def.upgrade_cost().map_or(0, i64::from);

            saturate(
                i64::from(*cost_per_model) * models
                    + surcharge(condition, UnitCondition::Trained, def.trained_cost) * models
                    + surcharge(condition, UnitCondition::Downgraded, def.downgrade_cost) * models
                    + upgrade_model * count_points(upgrades)
                    + surcharge(condition, UnitCondition::Veteran, def.veteran_cost) * models,
            )
        }
    }
}

fn surcharge(condition: UnitCondition, wanted: UnitCondition, cost: Option<Points>) -> i64 {
    if condition == wanted {
        cost.map_or(0, i64::from)
    } else {
        0
    }
}

/// At most three upgrades exist, so the count always fits.
fn count_points(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Narrows an intermediate sum, saturating at the bounds of [`Points`].
fn saturate(value: i64) -> Points {
    Points::try_from(value).unwrap_or(if value < 0 { Points::MIN } else { Points::MAX })
}

/// Commander cost plus the cost of every unit.
pub fn total_cost<C>(catalog: &C, state: &RosterState) -> Points
where
    C: CatalogOracle + ?Sized,
{
    state
        .units()
        .iter()
        .map(|unit| unit_cost(catalog, state.faction(), unit))
        .fold(commander_cost(catalog, state), Points::saturating_add)
}

/// Per-component cost breakdown, computed in one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub commander: Points,
    /// Unit costs in roster order.
    pub units: Vec<(UnitId, Points)>,
    pub total: Points,
}

impl CostBreakdown {
    pub fn compute<C>(catalog: &C, state: &RosterState) -> Self
    where
        C: CatalogOracle + ?Sized,
    {
        let commander = commander_cost(catalog, state);
        let units: Vec<_> = state
            .units()
            .iter()
            .map(|unit| (unit.id(), unit_cost(catalog, state.faction(), unit)))
            .collect();
        let total = units
            .iter()
            .map(|(_, cost)| *cost)
            .fold(commander, Points::saturating_add);

        Self {
            commander,
            units,
            total,
        }
    }

    pub fn unit(&self, id: UnitId) -> Option<Points> {
        self.units
            .iter()
            .find(|(unit, _)| *unit == id)
            .map(|(_, cost)| *cost)
    }
}
