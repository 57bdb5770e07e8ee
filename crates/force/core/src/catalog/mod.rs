//! Read-only reference data: factions, commanders, units and cannon types.
//!
//! The [`CatalogOracle`] trait is the seam through which pricing, composition,
//! validation and the engine read catalog data. [`Catalog`] is the in-memory
//! implementation: it indexes a snapshot once so every lookup by id is a hash
//! lookup instead of a scan over concatenated unit lists.
mod error;
mod faction;
mod ids;
mod unit;

use std::collections::HashMap;

pub use error::CatalogError;
pub use faction::{CommanderDef, CommanderOption, CommanderOptionKind, FactionDef};
pub use ids::{CannonTypeId, CommanderId, FactionId, UnitDefId};
pub use unit::{
    ArtilleryPiece, CannonType, Experience, StatLine, UnitDef, UnitProfile, UnitUpgradeKind,
    UnitUpgrades,
};

/// Point values. Signed because downgrade surcharges are negative.
pub type Points = i32;

/// The list a unit definition is published in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ListedRole {
    Core,
    Support,
}

/// A unit definition together with the list it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitEntry<'a> {
    pub role: ListedRole,
    pub def: &'a UnitDef,
}

/// Oracle providing catalog lookups.
///
/// Every lookup is total: an id that does not resolve yields `None`, never a
/// panic, so callers can degrade to zero cost or a no-op.
pub trait CatalogOracle: Send + Sync {
    fn faction(&self, id: &FactionId) -> Option<&FactionDef>;

    fn commander(&self, faction: &FactionId, id: &CommanderId) -> Option<&CommanderDef>;

    /// Looks a unit definition up in the faction's core and support lists.
    fn unit(&self, faction: &FactionId, id: &UnitDefId) -> Option<UnitEntry<'_>>;

    fn cannon_type(&self, id: &CannonTypeId) -> Option<&CannonType>;

    /// All factions in catalog order.
    fn factions(&self) -> &[FactionDef];
}

#[derive(Clone, Debug, Default)]
struct FactionIndex {
    position: usize,
    commanders: HashMap<CommanderId, usize>,
    units: HashMap<UnitDefId, (ListedRole, usize)>,
}

/// Indexed, immutable catalog snapshot.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    factions: Vec<FactionDef>,
    cannon_types: Vec<CannonType>,
    faction_index: HashMap<FactionId, FactionIndex>,
    cannon_index: HashMap<CannonTypeId, usize>,
}

impl Catalog {
    /// Indexes a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on duplicate ids, inverted size bounds, or a
    /// permitted cannon type missing from the cannon table.
    pub fn new(
        factions: Vec<FactionDef>,
        cannon_types: Vec<CannonType>,
    ) -> Result<Self, CatalogError> {
        let mut cannon_index = HashMap::with_capacity(cannon_types.len());
        for (position, cannon) in cannon_types.iter().enumerate() {
            if cannon_index.insert(cannon.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCannonType(cannon.id.clone()));
            }
        }

        let mut faction_index = HashMap::with_capacity(factions.len());
        for (position, faction) in factions.iter().enumerate() {
            let index = index_faction(position, faction, &cannon_index)?;
            if faction_index.insert(faction.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateFaction(faction.id.clone()));
            }
        }

        Ok(Self {
            factions,
            cannon_types,
            faction_index,
            cannon_index,
        })
    }

    pub fn cannon_types(&self) -> &[CannonType] {
        &self.cannon_types
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}

fn index_faction(
    position: usize,
    faction: &FactionDef,
    cannon_index: &HashMap<CannonTypeId, usize>,
) -> Result<FactionIndex, CatalogError> {
    let mut index = FactionIndex {
        position,
        ..FactionIndex::default()
    };

    for (slot, commander) in faction.commanders.iter().enumerate() {
        if index.commanders.insert(commander.id.clone(), slot).is_some() {
            return Err(CatalogError::DuplicateCommander {
                faction: faction.id.clone(),
                commander: commander.id.clone(),
            });
        }
    }

    let listed = faction
        .core
        .iter()
        .enumerate()
        .map(|(slot, unit)| (ListedRole::Core, slot, unit))
        .chain(
            faction
                .support
                .iter()
                .enumerate()
                .map(|(slot, unit)| (ListedRole::Support, slot, unit)),
        );

    for (role, slot, unit) in listed {
        if let Some((min, max)) = unit.size_bounds()
            && min > max
        {
            return Err(CatalogError::InvalidSizeBounds {
                faction: faction.id.clone(),
                unit: unit.id.clone(),
                min,
                max,
            });
        }

        if let UnitProfile::Artillery { piece, .. } = &unit.profile
            && let Some(cannon) = piece
                .permitted()
                .iter()
                .find(|cannon| !cannon_index.contains_key(*cannon))
        {
            return Err(CatalogError::UnknownCannonType {
                faction: faction.id.clone(),
                unit: unit.id.clone(),
                cannon: cannon.clone(),
            });
        }

        if index.units.insert(unit.id.clone(), (role, slot)).is_some() {
            return Err(CatalogError::DuplicateUnit {
                faction: faction.id.clone(),
                unit: unit.id.clone(),
            });
        }
    }

    Ok(index)
}

impl CatalogOracle for Catalog {
    fn faction(&self, id: &FactionId) -> Option<&FactionDef> {
        let index = self.faction_index.get(id)?;
        self.factions.get(index.position)
    }

    fn commander(&self, faction: &FactionId, id: &CommanderId) -> Option<&CommanderDef> {
        let index = self.faction_index.get(faction)?;
        let slot = *index.commanders.get(id)?;
        self.factions.get(index.position)?.commanders.get(slot)
    }

    fn unit(&self, faction: &FactionId, id: &UnitDefId) -> Option<UnitEntry<'_>> {
        let index = self.faction_index.get(faction)?;
        let (role, slot) = *index.units.get(id)?;
        let faction = self.factions.get(index.position)?;
        let def = match role {
            ListedRole::Core => faction.core.get(slot)?,
            ListedRole::Support => faction.support.get(slot)?,
        };
        Some(UnitEntry { role, def })
    }

    fn cannon_type(&self, id: &CannonTypeId) -> Option<&CannonType> {
        let position = *self.cannon_index.get(id)?;
        self.cannon_types.get(position)
    }

    fn factions(&self) -> &[FactionDef] {
        &self.factions
    }
}
