//! Catalog indexing errors.

use crate::error::{ErrorSeverity, ForceError};

use super::{CannonTypeId, CommanderId, FactionId, UnitDefId};

/// Errors raised while indexing a catalog snapshot.
///
/// A catalog that fails to index cannot be priced consistently, so every
/// variant is fatal for that snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("faction '{0}' is defined more than once")]
    DuplicateFaction(FactionId),

    #[error("commander '{commander}' is defined more than once in faction '{faction}'")]
    DuplicateCommander {
        faction: FactionId,
        commander: CommanderId,
    },

    #[error("unit '{unit}' is defined more than once in faction '{faction}'")]
    DuplicateUnit { faction: FactionId, unit: UnitDefId },

    #[error("cannon type '{0}' is defined more than once")]
    DuplicateCannonType(CannonTypeId),

    #[error("unit '{unit}' in faction '{faction}' permits unknown cannon type '{cannon}'")]
    UnknownCannonType {
        faction: FactionId,
        unit: UnitDefId,
        cannon: CannonTypeId,
    },

    #[error("unit '{unit}' in faction '{faction}' has minimum size {min} above maximum {max}")]
    InvalidSizeBounds {
        faction: FactionId,
        unit: UnitDefId,
        min: u16,
        max: u16,
    },
}

impl ForceError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateFaction(_) => "CATALOG_DUPLICATE_FACTION",
            DuplicateCommander { .. } => "CATALOG_DUPLICATE_COMMANDER",
            DuplicateUnit { .. } => "CATALOG_DUPLICATE_UNIT",
            DuplicateCannonType(_) => "CATALOG_DUPLICATE_CANNON_TYPE",
            UnknownCannonType { .. } => "CATALOG_UNKNOWN_CANNON_TYPE",
            InvalidSizeBounds { .. } => "CATALOG_INVALID_SIZE_BOUNDS",
        }
    }
}
