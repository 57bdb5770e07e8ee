use crate::catalog::{
    CannonTypeId, CommanderId, CommanderOptionKind, FactionId, UnitDefId, UnitUpgradeKind,
};
use crate::config::RosterConfig;
use crate::state::{CommanderUpgradeKind, UnitCondition, UnitId};

/// Requested points ceiling, either already numeric or as typed by a user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointsInput {
    Value(i64),
    Raw(String),
}

impl PointsInput {
    /// Parses the leading integer of the input: optional whitespace, an
    /// optional sign, then digits. Anything after the digits is ignored.
    pub fn leading_integer(text: &str) -> Option<i64> {
        let text = text.trim_start();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }

        let magnitude = digits[..end]
            .bytes()
            .fold(0i64, |acc, digit| {
                acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
            });
        Some(if negative { -magnitude } else { magnitude })
    }

    /// Resolves the input to a ceiling using the configured fallbacks.
    pub fn resolve(&self, config: &RosterConfig) -> u32 {
        let requested = match self {
            Self::Value(value) => Some(*value),
            Self::Raw(text) => Self::leading_integer(text),
        };
        config.resolve_points_limit(requested)
    }
}

impl From<i64> for PointsInput {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for PointsInput {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_owned())
    }
}

/// Every way a roster can change.
///
/// Mutations are plain data, so a whole build can be stored and replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Switches faction and clears commander, selections and every unit.
    SelectFaction(FactionId),
    SetPointsLimit(PointsInput),
    /// Selects (or with `None` deselects) the commander and resets its selections.
    SelectCommander(Option<CommanderId>),
    ToggleCommanderOption(CommanderOptionKind),
    ToggleCommanderUpgrade(CommanderUpgradeKind),
    AddUnit(UnitDefId),
    RemoveUnit(UnitId),
    ChangeQuantity { unit: UnitId, delta: i32 },
    SetCannonType {
        unit: UnitId,
        cannon: Option<CannonTypeId>,
    },
    ToggleVeteran(UnitId),
    ToggleTrained(UnitId),
    ToggleDowngrade(UnitId),
    ToggleUnitUpgrade { unit: UnitId, upgrade: UnitUpgradeKind },
    /// Drops commander and units, keeping faction and points ceiling.
    ClearForce,
}

impl Mutation {
    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectFaction(_) => "select_faction",
            Self::SetPointsLimit(_) => "set_points_limit",
            Self::SelectCommander(_) => "select_commander",
            Self::ToggleCommanderOption(_) => "toggle_commander_option",
            Self::ToggleCommanderUpgrade(_) => "toggle_commander_upgrade",
            Self::AddUnit(_) => "add_unit",
            Self::RemoveUnit(_) => "remove_unit",
            Self::ChangeQuantity { .. } => "change_quantity",
            Self::SetCannonType { .. } => "set_cannon_type",
            Self::ToggleVeteran(_) => "toggle_veteran",
            Self::ToggleTrained(_) => "toggle_trained",
            Self::ToggleDowngrade(_) => "toggle_downgrade",
            Self::ToggleUnitUpgrade { .. } => "toggle_unit_upgrade",
            Self::ClearForce => "clear_force",
        }
    }
}

/// What an applied mutation changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationEffect {
    FactionSelected(FactionId),
    PointsLimitSet(u32),
    CommanderSelected(Option<CommanderId>),
    CommanderOptionToggled {
        option: CommanderOptionKind,
        active: bool,
    },
    CommanderUpgradeToggled {
        upgrade: CommanderUpgradeKind,
        active: bool,
    },
    UnitAdded(UnitId),
    UnitRemoved(UnitId),
    QuantityChanged { unit: UnitId, quantity: u16 },
    CannonTypeSet {
        unit: UnitId,
        cannon: Option<CannonTypeId>,
    },
    ConditionChanged {
        unit: UnitId,
        condition: UnitCondition,
    },
    UnitUpgradeToggled {
        unit: UnitId,
        upgrade: UnitUpgradeKind,
        active: bool,
    },
    ForceCleared,
}
