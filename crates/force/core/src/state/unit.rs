use std::fmt;

use crate::catalog::{CannonTypeId, UnitDefId, UnitUpgrades};

/// Identifier of a unit instance within one roster. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Experience modifier of a unit. At most one applies at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitCondition {
    #[default]
    Regular,
    Veteran,
    Trained,
    Downgraded,
}

impl UnitCondition {
    /// Flips `target`: switching it on replaces any other condition,
    /// switching it off returns to [`UnitCondition::Regular`].
    #[must_use]
    pub fn toggled(self, target: UnitCondition) -> Self {
        if self == target {
            Self::Regular
        } else {
            target
        }
    }
}

/// A selected unit in the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitInstance {
    pub(crate) id: UnitId,
    pub(crate) def: UnitDefId,
    /// Model count; fixed at 1 and ignored for artillery.
    pub(crate) quantity: u16,
    pub(crate) cannon: Option<CannonTypeId>,
    pub(crate) upgrades: UnitUpgrades,
    pub(crate) condition: UnitCondition,
}

impl UnitInstance {
    pub(crate) fn new(id: UnitId, def: UnitDefId, quantity: u16, cannon: Option<CannonTypeId>) -> Self {
        Self {
            id,
            def,
            quantity,
            cannon,
            upgrades: UnitUpgrades::empty(),
            condition: UnitCondition::Regular,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn def(&self) -> &UnitDefId {
        &self.def
    }

    pub fn quantity(&self) -> u16 {
        self.quantity
    }

    pub fn cannon(&self) -> Option<&CannonTypeId> {
        self.cannon.as_ref()
    }

    pub fn upgrades(&self) -> UnitUpgrades {
        self.upgrades
    }

    pub fn condition(&self) -> UnitCondition {
        self.condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_replaces_the_active_condition() {
        let trained = UnitCondition::Regular.toggled(UnitCondition::Trained);
        assert_eq!(trained, UnitCondition::Trained);

        let veteran = trained.toggled(UnitCondition::Veteran);
        assert_eq!(veteran, UnitCondition::Veteran);

        assert_eq!(veteran.toggled(UnitCondition::Veteran), UnitCondition::Regular);
    }
}
