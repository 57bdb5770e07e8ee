//! Roster selection state.
//!
//! [`RosterState`] is the single mutable document of a session. Fields are
//! readable by anyone but written only by [`crate::engine::RosterEngine`], so
//! the clamping and reset invariants hold for every reachable state.
mod unit;

use bitflags::bitflags;

pub use unit::{UnitCondition, UnitId, UnitInstance};

use crate::catalog::{CommanderId, CommanderOptionKind, FactionId};
use crate::config::RosterConfig;

bitflags! {
    /// Active personal options of the selected commander.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct CommanderOptions: u8 {
        const MOUNT   = 1 << 0;
        const VETERAN = 1 << 1;
    }
}

impl CommanderOptions {
    pub const fn of(kind: CommanderOptionKind) -> Self {
        match kind {
            CommanderOptionKind::Mount => Self::MOUNT,
            CommanderOptionKind::Veteran => Self::VETERAN,
        }
    }
}

bitflags! {
    /// Models of the commander's own unit upgraded to command figures.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct CommanderUpgrades: u8 {
        const MUSICIAN     = 1 << 0;
        const STANDARD     = 1 << 1;
        const AIDE_DE_CAMP = 1 << 2;
    }
}

/// Single commander unit upgrade key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CommanderUpgradeKind {
    Musician,
    Standard,
    AideDeCamp,
}

impl CommanderUpgradeKind {
    pub const fn flag(self) -> CommanderUpgrades {
        match self {
            Self::Musician => CommanderUpgrades::MUSICIAN,
            Self::Standard => CommanderUpgrades::STANDARD,
            Self::AideDeCamp => CommanderUpgrades::AIDE_DE_CAMP,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Musician => "Musician",
            Self::Standard => "Standard Bearer",
            Self::AideDeCamp => "Aide-de-Camp",
        }
    }
}

/// The force under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterState {
    pub(crate) faction: FactionId,
    pub(crate) points_limit: u32,
    pub(crate) commander: Option<CommanderId>,
    pub(crate) commander_options: CommanderOptions,
    pub(crate) commander_upgrades: CommanderUpgrades,
    pub(crate) units: Vec<UnitInstance>,

    /// Sequential unit id allocator (monotonically increasing, starts at 1).
    next_unit_id: u32,

    /// Number of mutations applied so far.
    ///
    /// Derived values (costs, roles, violations) are recomputed from scratch;
    /// a caller compares revisions to know whether that is due.
    revision: u64,
}

impl RosterState {
    /// Creates the session's initial roster: default faction and ceiling, no
    /// commander, no units.
    pub fn new(config: &RosterConfig) -> Self {
        Self::with_faction(config.default_faction.clone(), config.default_points_limit)
    }

    pub fn with_faction(faction: FactionId, points_limit: u32) -> Self {
        Self {
            faction,
            points_limit,
            commander: None,
            commander_options: CommanderOptions::empty(),
            commander_upgrades: CommanderUpgrades::empty(),
            units: Vec::new(),
            next_unit_id: 1,
            revision: 0,
        }
    }

    pub fn faction(&self) -> &FactionId {
        &self.faction
    }

    pub fn points_limit(&self) -> u32 {
        self.points_limit
    }

    pub fn commander(&self) -> Option<&CommanderId> {
        self.commander.as_ref()
    }

    pub fn commander_options(&self) -> CommanderOptions {
        self.commander_options
    }

    pub fn commander_upgrades(&self) -> CommanderUpgrades {
        self.commander_upgrades
    }

    /// Units in the order they were added.
    pub fn units(&self) -> &[UnitInstance] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitInstance> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitInstance> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    /// Allocates a new unique [`UnitId`].
    pub(crate) fn allocate_unit_id(&mut self) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id = self.next_unit_id.saturating_add(1);
        id
    }

    pub(crate) fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new(&RosterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_roster_uses_configured_defaults() {
        let state = RosterState::default();
        assert_eq!(state.faction().as_str(), "british_army");
        assert_eq!(state.points_limit(), 250);
        assert!(state.commander().is_none());
        assert!(state.units().is_empty());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn allocated_unit_ids_are_sequential() {
        let mut state = RosterState::default();
        assert_eq!(state.allocate_unit_id(), UnitId(1));
        assert_eq!(state.allocate_unit_id(), UnitId(2));
    }

    #[test]
    fn upgrade_keys_map_to_flags() {
        assert_eq!(
            CommanderUpgradeKind::AideDeCamp.flag(),
            CommanderUpgrades::AIDE_DE_CAMP
        );
        assert_eq!(
            "aide_de_camp".parse::<CommanderUpgradeKind>().ok(),
            Some(CommanderUpgradeKind::AideDeCamp)
        );
        assert_eq!(CommanderOptions::of(CommanderOptionKind::Veteran), CommanderOptions::VETERAN);
    }
}
