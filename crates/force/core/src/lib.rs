//! Deterministic army-list rules shared by loaders and front ends.
//!
//! `force-core` defines the catalog model, the roster being built, and the
//! pure derivations over them (pricing, effective roles, composition checks).
//! All roster changes flow through [`engine::RosterEngine`]; everything else
//! in this crate is a read-only query recomputed from scratch on demand.
pub mod catalog;
pub mod composition;
pub mod config;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod state;
pub mod validation;
pub mod view;

pub use catalog::{
    ArtilleryPiece, CannonType, CannonTypeId, Catalog, CatalogError, CatalogOracle, CommanderDef,
    CommanderId, CommanderOption, CommanderOptionKind, Experience, FactionDef, FactionId,
    ListedRole, Points, StatLine, UnitDef, UnitDefId, UnitEntry, UnitProfile, UnitUpgradeKind,
    UnitUpgrades,
};
pub use composition::{Composition, EffectiveRole};
pub use config::RosterConfig;
pub use engine::{
    ForceEnv, Mutation, MutationEffect, MutationError, MutationOutcome, PointsInput, RosterEngine,
};
pub use error::{ErrorSeverity, ForceError};
pub use pricing::CostBreakdown;
pub use state::{
    CommanderOptions, CommanderUpgradeKind, CommanderUpgrades, RosterState, UnitCondition, UnitId,
    UnitInstance,
};
pub use validation::Violation;
pub use view::{CommanderView, RosterView, UnitView};
