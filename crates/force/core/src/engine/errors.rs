//! Reasons a mutation is rejected.
//!
//! A rejected mutation leaves the roster untouched and does not bump its
//! revision. Callers that follow "unknown id is a no-op" semantics can simply
//! log and drop the error.

use crate::catalog::{CommanderId, CommanderOptionKind, FactionId, UnitDefId};
use crate::error::{ErrorSeverity, ForceError};
use crate::state::{UnitCondition, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationError {
    #[error("faction {0} is not in the catalog")]
    UnknownFaction(FactionId),

    #[error("commander {commander} is not available to {faction}")]
    UnknownCommander {
        faction: FactionId,
        commander: CommanderId,
    },

    #[error("unit {unit} is not listed by {faction}")]
    UnknownUnitDef { faction: FactionId, unit: UnitDefId },

    #[error("unit {0} is not in the roster")]
    UnitNotFound(UnitId),

    #[error("unit {0} is artillery and has no model count")]
    FixedCrew(UnitId),

    #[error("unit {unit} cannot become {condition}: no surcharge is defined")]
    ConditionUnavailable {
        unit: UnitId,
        condition: UnitCondition,
    },

    #[error("no commander selected")]
    NoCommander,

    #[error("commander {commander} does not offer {option}")]
    OptionNotOffered {
        commander: CommanderId,
        option: CommanderOptionKind,
    },
}

impl ForceError for MutationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MutationError::*;
        match self {
            UnknownFaction(_) => "MUTATION_UNKNOWN_FACTION",
            UnknownCommander { .. } => "MUTATION_UNKNOWN_COMMANDER",
            UnknownUnitDef { .. } => "MUTATION_UNKNOWN_UNIT_DEF",
            UnitNotFound(_) => "MUTATION_UNIT_NOT_FOUND",
            FixedCrew(_) => "MUTATION_FIXED_CREW",
            ConditionUnavailable { .. } => "MUTATION_CONDITION_UNAVAILABLE",
            NoCommander => "MUTATION_NO_COMMANDER",
            OptionNotOffered { .. } => "MUTATION_OPTION_NOT_OFFERED",
        }
    }
}
