//! Mutation dispatch.
//!
//! Each arm resolves everything it needs from the catalog and the roster
//! before writing, so a rejected mutation never leaves a partial change.

use crate::catalog::{CannonTypeId, CatalogOracle, Points, UnitDef, UnitDefId};
use crate::state::{CommanderOptions, RosterState, UnitCondition, UnitId};

use super::ForceEnv;
use super::errors::MutationError;
use super::mutation::{Mutation, MutationEffect};
use super::reducer::RosterReducer;

pub(super) fn apply_mutation(
    mutation: &Mutation,
    state: &mut RosterState,
    env: &ForceEnv<'_>,
) -> Result<MutationEffect, MutationError> {
    let catalog = env.catalog();

    match mutation {
        Mutation::SelectFaction(faction) => {
            if catalog.faction(faction).is_none() {
                return Err(MutationError::UnknownFaction(faction.clone()));
            }
            RosterReducer::new(state).set_faction(faction.clone());
            Ok(MutationEffect::FactionSelected(faction.clone()))
        }
        Mutation::SetPointsLimit(input) => {
            let limit = input.resolve(env.config());
            RosterReducer::new(state).set_points_limit(limit);
            Ok(MutationEffect::PointsLimitSet(limit))
        }
        Mutation::SelectCommander(commander) => {
            if let Some(id) = commander
                && catalog.commander(state.faction(), id).is_none()
            {
                return Err(MutationError::UnknownCommander {
                    faction: state.faction().clone(),
                    commander: id.clone(),
                });
            }
            RosterReducer::new(state)
                .commander()
                .select(commander.clone());
            Ok(MutationEffect::CommanderSelected(commander.clone()))
        }
        Mutation::ToggleCommanderOption(option) => {
            let commander = state.commander().ok_or(MutationError::NoCommander)?;
            let offered = catalog
                .commander(state.faction(), commander)
                .is_some_and(|def| def.option(*option).is_some());
            if !offered {
                return Err(MutationError::OptionNotOffered {
                    commander: commander.clone(),
                    option: *option,
                });
            }
            let active = RosterReducer::new(state)
                .commander()
                .toggle_option(CommanderOptions::of(*option));
            Ok(MutationEffect::CommanderOptionToggled {
                option: *option,
                active,
            })
        }
        Mutation::ToggleCommanderUpgrade(upgrade) => {
            if state.commander().is_none() {
                return Err(MutationError::NoCommander);
            }
            let active = RosterReducer::new(state)
                .commander()
                .toggle_upgrade(upgrade.flag());
            Ok(MutationEffect::CommanderUpgradeToggled {
                upgrade: *upgrade,
                active,
            })
        }
        Mutation::AddUnit(def) => add_unit(catalog, state, def),
        Mutation::RemoveUnit(unit) => RosterReducer::new(state)
            .units()
            .remove(*unit)
            .map(|removed| MutationEffect::UnitRemoved(removed.id()))
            .ok_or(MutationError::UnitNotFound(*unit)),
        Mutation::ChangeQuantity { unit, delta } => change_quantity(catalog, state, *unit, *delta),
        Mutation::SetCannonType { unit, cannon } => set_cannon(state, *unit, cannon.clone()),
        Mutation::ToggleVeteran(unit) => {
            toggle_condition(catalog, state, *unit, UnitCondition::Veteran)
        }
        Mutation::ToggleTrained(unit) => {
            toggle_condition(catalog, state, *unit, UnitCondition::Trained)
        }
        Mutation::ToggleDowngrade(unit) => {
            toggle_condition(catalog, state, *unit, UnitCondition::Downgraded)
        }
        Mutation::ToggleUnitUpgrade { unit, upgrade } => {
            let active = RosterReducer::new(state)
                .units()
                .toggle_upgrade(*unit, upgrade.flag())
                .ok_or(MutationError::UnitNotFound(*unit))?;
            Ok(MutationEffect::UnitUpgradeToggled {
                unit: *unit,
                upgrade: *upgrade,
                active,
            })
        }
        Mutation::ClearForce => {
            let mut reducer = RosterReducer::new(state);
            reducer.commander().select(None);
            reducer.units().clear();
            Ok(MutationEffect::ForceCleared)
        }
    }
}

fn add_unit(
    catalog: &dyn CatalogOracle,
    state: &mut RosterState,
    def: &UnitDefId,
) -> Result<MutationEffect, MutationError> {
    let entry = catalog
        .unit(state.faction(), def)
        .ok_or_else(|| MutationError::UnknownUnitDef {
            faction: state.faction().clone(),
            unit: def.clone(),
        })?;

    let quantity = entry.def.starting_quantity();
    let cannon = entry.def.default_cannon().cloned();
    let id = RosterReducer::new(state)
        .units()
        .push(def.clone(), quantity, cannon);
    Ok(MutationEffect::UnitAdded(id))
}

fn change_quantity(
    catalog: &dyn CatalogOracle,
    state: &mut RosterState,
    unit: UnitId,
    delta: i32,
) -> Result<MutationEffect, MutationError> {
    let instance = state.unit(unit).ok_or(MutationError::UnitNotFound(unit))?;
    let entry = catalog
        .unit(state.faction(), instance.def())
        .ok_or_else(|| MutationError::UnknownUnitDef {
            faction: state.faction().clone(),
            unit: instance.def().clone(),
        })?;
    let (min, max) = entry
        .def
        .size_bounds()
        .ok_or(MutationError::FixedCrew(unit))?;

    let floor = i64::from(min.max(1));
    let ceiling = i64::from(max).max(floor);
    let wanted = i64::from(instance.quantity()) + i64::from(delta);
    let quantity = u16::try_from(wanted.clamp(floor, ceiling)).unwrap_or(max);

    let quantity = RosterReducer::new(state)
        .units()
        .set_quantity(unit, quantity)
        .ok_or(MutationError::UnitNotFound(unit))?;
    Ok(MutationEffect::QuantityChanged { unit, quantity })
}

fn set_cannon(
    state: &mut RosterState,
    unit: UnitId,
    cannon: Option<CannonTypeId>,
) -> Result<MutationEffect, MutationError> {
    if !RosterReducer::new(state)
        .units()
        .set_cannon(unit, cannon.clone())
    {
        return Err(MutationError::UnitNotFound(unit));
    }
    Ok(MutationEffect::CannonTypeSet { unit, cannon })
}

fn toggle_condition(
    catalog: &dyn CatalogOracle,
    state: &mut RosterState,
    unit: UnitId,
    target: UnitCondition,
) -> Result<MutationEffect, MutationError> {
    let instance = state.unit(unit).ok_or(MutationError::UnitNotFound(unit))?;
    let defined = catalog
        .unit(state.faction(), instance.def())
        .and_then(|entry| condition_surcharge(entry.def, target))
        .is_some();
    if !defined {
        return Err(MutationError::ConditionUnavailable {
            unit,
            condition: target,
        });
    }

    let condition = RosterReducer::new(state)
        .units()
        .toggle_condition(unit, target)
        .ok_or(MutationError::UnitNotFound(unit))?;
    Ok(MutationEffect::ConditionChanged { unit, condition })
}

fn condition_surcharge(def: &UnitDef, condition: UnitCondition) -> Option<Points> {
    match condition {
        UnitCondition::Regular => None,
        // A zero veteran surcharge does not unlock the toggle.
        UnitCondition::Veteran => def.veteran_cost.filter(|cost| *cost != 0),
        UnitCondition::Trained => def.trained_cost,
        UnitCondition::Downgraded => def.downgrade_cost,
    }
}
