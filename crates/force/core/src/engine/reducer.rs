use crate::catalog::{CannonTypeId, CommanderId, FactionId, UnitDefId, UnitUpgrades};
use crate::state::{
    CommanderOptions, CommanderUpgrades, RosterState, UnitCondition, UnitId, UnitInstance,
};

/// Wraps mutable access to [`RosterState`] with structured sub-reducers.
pub struct RosterReducer<'a> {
    state: &'a mut RosterState,
}

impl<'a> RosterReducer<'a> {
    pub fn new(state: &'a mut RosterState) -> Self {
        Self { state }
    }

    pub fn set_faction(&mut self, faction: FactionId) {
        self.state.faction = faction;
        self.commander().select(None);
        self.units().clear();
    }

    pub fn set_points_limit(&mut self, limit: u32) {
        self.state.points_limit = limit;
    }

    pub fn commander(&mut self) -> CommanderReducer<'_> {
        CommanderReducer { state: self.state }
    }

    pub fn units(&mut self) -> UnitsReducer<'_> {
        UnitsReducer { state: self.state }
    }
}

pub struct CommanderReducer<'a> {
    state: &'a mut RosterState,
}

impl CommanderReducer<'_> {
    /// Replaces the commander and drops its options and upgrades.
    pub fn select(&mut self, commander: Option<CommanderId>) {
        self.state.commander = commander;
        self.state.commander_options = CommanderOptions::empty();
        self.state.commander_upgrades = CommanderUpgrades::empty();
    }

    /// Flips an option and returns whether it is now active.
    pub fn toggle_option(&mut self, option: CommanderOptions) -> bool {
        self.state.commander_options.toggle(option);
        self.state.commander_options.contains(option)
    }

    /// Flips an upgrade and returns whether it is now active.
    pub fn toggle_upgrade(&mut self, upgrade: CommanderUpgrades) -> bool {
        self.state.commander_upgrades.toggle(upgrade);
        self.state.commander_upgrades.contains(upgrade)
    }
}

pub struct UnitsReducer<'a> {
    state: &'a mut RosterState,
}

impl UnitsReducer<'_> {
    /// Appends a fresh instance and returns its id.
    pub fn push(&mut self, def: UnitDefId, quantity: u16, cannon: Option<CannonTypeId>) -> UnitId {
        let id = self.state.allocate_unit_id();
        self.state
            .units
            .push(UnitInstance::new(id, def, quantity, cannon));
        id
    }

    pub fn remove(&mut self, id: UnitId) -> Option<UnitInstance> {
        let position = self.state.units.iter().position(|unit| unit.id == id)?;
        Some(self.state.units.remove(position))
    }

    pub fn clear(&mut self) {
        self.state.units.clear();
    }

    pub fn set_quantity(&mut self, id: UnitId, quantity: u16) -> Option<u16> {
        let unit = self.state.unit_mut(id)?;
        unit.quantity = quantity;
        Some(unit.quantity)
    }

    pub fn set_cannon(&mut self, id: UnitId, cannon: Option<CannonTypeId>) -> bool {
        match self.state.unit_mut(id) {
            Some(unit) => {
                unit.cannon = cannon;
                true
            }
            None => false,
        }
    }

    /// Toggles a condition and returns the resulting one.
    pub fn toggle_condition(&mut self, id: UnitId, target: UnitCondition) -> Option<UnitCondition> {
        let unit = self.state.unit_mut(id)?;
        unit.condition = unit.condition.toggled(target);
        Some(unit.condition)
    }

    /// Flips an upgrade and returns whether it is now active.
    pub fn toggle_upgrade(&mut self, id: UnitId, upgrade: UnitUpgrades) -> Option<bool> {
        let unit = self.state.unit_mut(id)?;
        unit.upgrades.toggle(upgrade);
        Some(unit.upgrades.contains(upgrade))
    }
}
