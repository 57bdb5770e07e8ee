use bitflags::bitflags;

use super::{CannonTypeId, Points, UnitDefId};

/// Experience grade printed on unit and commander cards.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Experience {
    Inexperienced,
    #[default]
    Trained,
    Veteran,
    Elite,
}

/// Shoot / melee / resolve values as printed on the card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatLine {
    pub shoot: String,
    pub melee: String,
    pub resolve: String,
}

impl StatLine {
    pub fn new(shoot: impl Into<String>, melee: impl Into<String>, resolve: impl Into<String>) -> Self {
        Self {
            shoot: shoot.into(),
            melee: melee.into(),
            resolve: resolve.into(),
        }
    }
}

bitflags! {
    /// Command models a unit can field: each replaces a plain model.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct UnitUpgrades: u8 {
        const OFFICER  = 1 << 0;
        const MUSICIAN = 1 << 1;
        const STANDARD = 1 << 2;
    }
}

/// Single unit upgrade key, used to toggle one bit of [`UnitUpgrades`].
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
pub enum UnitUpgradeKind {
    Officer,
    Musician,
    Standard,
}

impl UnitUpgradeKind {
    pub const fn flag(self) -> UnitUpgrades {
        match self {
            Self::Officer => UnitUpgrades::OFFICER,
            Self::Musician => UnitUpgrades::MUSICIAN,
            Self::Standard => UnitUpgrades::STANDARD,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Officer => "Officer/N.C.O.",
            Self::Musician => "Musician",
            Self::Standard => "Standard Bearer",
        }
    }
}

/// Entry of the flat cannon-type table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CannonType {
    pub id: CannonTypeId,
    pub name: String,
    pub points: Points,
}

impl CannonType {
    pub fn new(id: impl Into<CannonTypeId>, name: impl Into<String>, points: Points) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
        }
    }
}

/// What an artillery crew serves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtilleryPiece {
    /// Field gun whose calibre is picked from the permitted cannon types.
    Cannon { permitted: Vec<CannonTypeId> },
    Howitzer,
    Rocket,
}

impl ArtilleryPiece {
    /// Cannon types the crew may choose from; empty for howitzers and rockets.
    pub fn permitted(&self) -> &[CannonTypeId] {
        match self {
            Self::Cannon { permitted } => permitted,
            Self::Howitzer | Self::Rocket => &[],
        }
    }
}

/// How a unit is priced and sized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitProfile {
    /// Infantry or cavalry bought per model within size bounds.
    Formed {
        cost_per_model: Points,
        #[cfg_attr(feature = "serde", serde(default = "default_min_size"))]
        min_size: u16,
        #[cfg_attr(feature = "serde", serde(default = "default_max_size"))]
        max_size: u16,
    },
    /// A gun and its crew, bought as a whole.
    Artillery {
        cost_per_crew: Points,
        piece: ArtilleryPiece,
        #[cfg_attr(feature = "serde", serde(default))]
        composition: String,
    },
}

#[cfg(feature = "serde")]
fn default_min_size() -> u16 {
    UnitDef::DEFAULT_MIN_SIZE
}

#[cfg(feature = "serde")]
fn default_max_size() -> u16 {
    UnitDef::DEFAULT_MAX_SIZE
}

impl Default for UnitProfile {
    fn default() -> Self {
        Self::Formed {
            cost_per_model: 0,
            min_size: UnitDef::DEFAULT_MIN_SIZE,
            max_size: UnitDef::DEFAULT_MAX_SIZE,
        }
    }
}

/// Catalog entry for a unit type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitDef {
    pub id: UnitDefId,
    pub name: String,
    pub profile: UnitProfile,
    pub is_cavalry: bool,
    /// Command models this unit may field.
    pub upgrades: UnitUpgrades,
    /// Veteran surcharge: per model for formed units, flat for artillery.
    pub veteran_cost: Option<Points>,
    /// Per-model surcharge to raise an inexperienced unit to trained.
    pub trained_cost: Option<Points>,
    /// Per-model delta (usually negative) for cheaper equipment.
    pub downgrade_cost: Option<Points>,
    pub experience: Experience,
    pub stats: StatLine,
    pub special: Vec<String>,
    pub equipment: Vec<String>,
    pub formations: Vec<String>,
    pub trained_effect: Option<String>,
    pub notes: Option<String>,
}

impl UnitDef {
    pub const DEFAULT_MIN_SIZE: u16 = 1;
    pub const DEFAULT_MAX_SIZE: u16 = 99;

    /// Creates a formed unit priced per model.
    pub fn formed(
        id: impl Into<UnitDefId>,
        name: impl Into<String>,
        cost_per_model: Points,
        min_size: u16,
        max_size: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile: UnitProfile::Formed {
                cost_per_model,
                min_size,
                max_size,
            },
            ..Self::default()
        }
    }

    /// Creates an artillery unit priced per crew.
    pub fn artillery(
        id: impl Into<UnitDefId>,
        name: impl Into<String>,
        cost_per_crew: Points,
        piece: ArtilleryPiece,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile: UnitProfile::Artillery {
                cost_per_crew,
                piece,
                composition: String::new(),
            },
            ..Self::default()
        }
    }

    pub fn cavalry(mut self) -> Self {
        self.is_cavalry = true;
        self
    }

    pub fn with_upgrades(mut self, upgrades: UnitUpgrades) -> Self {
        self.upgrades = upgrades;
        self
    }

    pub fn with_veteran_cost(mut self, cost: Points) -> Self {
        self.veteran_cost = Some(cost);
        self
    }

    pub fn with_trained_cost(mut self, cost: Points) -> Self {
        self.trained_cost = Some(cost);
        self
    }

    pub fn with_downgrade_cost(mut self, cost: Points) -> Self {
        self.downgrade_cost = Some(cost);
        self
    }

    pub fn is_artillery(&self) -> bool {
        matches!(self.profile, UnitProfile::Artillery { .. })
    }

    /// `(min, max)` model count; `None` for artillery.
    pub fn size_bounds(&self) -> Option<(u16, u16)> {
        match self.profile {
            UnitProfile::Formed {
                min_size, max_size, ..
            } => Some((min_size, max_size)),
            UnitProfile::Artillery { .. } => None,
        }
    }

    /// Model count a freshly added unit starts with.
    pub fn starting_quantity(&self) -> u16 {
        self.size_bounds()
            .map(|(min, _)| min.max(1))
            .unwrap_or(1)
    }

    /// Cannon type preselected for a freshly added unit.
    pub fn default_cannon(&self) -> Option<&CannonTypeId> {
        match &self.profile {
            UnitProfile::Artillery { piece, .. } => piece.permitted().first(),
            UnitProfile::Formed { .. } => None,
        }
    }

    /// Price of one command model, twice the plain model; `None` for artillery.
    pub fn upgrade_cost(&self) -> Option<Points> {
        match self.profile {
            UnitProfile::Formed { cost_per_model, .. } => Some(cost_per_model.saturating_mul(2)),
            UnitProfile::Artillery { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formed_units_start_at_their_minimum() {
        let line = UnitDef::formed("line", "Line Infantry", 3, 6, 16);
        assert_eq!(line.starting_quantity(), 6);
        assert_eq!(line.size_bounds(), Some((6, 16)));
        assert_eq!(line.upgrade_cost(), Some(6));
        assert!(line.default_cannon().is_none());
    }

    #[test]
    fn artillery_preselects_first_permitted_cannon() {
        let battery = UnitDef::artillery(
            "foot_battery",
            "Foot Artillery",
            12,
            ArtilleryPiece::Cannon {
                permitted: vec![CannonTypeId::from("light"), CannonTypeId::from("medium")],
            },
        );
        assert!(battery.is_artillery());
        assert_eq!(battery.size_bounds(), None);
        assert_eq!(battery.starting_quantity(), 1);
        assert_eq!(battery.default_cannon().map(CannonTypeId::as_str), Some("light"));

        let rockets = UnitDef::artillery("rockets", "Rocket Troop", 15, ArtilleryPiece::Rocket);
        assert!(rockets.default_cannon().is_none());
    }

    #[test]
    fn upgrade_keys_map_to_flags() {
        assert_eq!(UnitUpgradeKind::Officer.flag(), UnitUpgrades::OFFICER);
        assert_eq!(UnitUpgradeKind::Standard.title(), "Standard Bearer");
        assert_eq!(
            "musician".parse::<UnitUpgradeKind>().ok(),
            Some(UnitUpgradeKind::Musician)
        );
    }
}
