//! Roster mutation pipeline.
//!
//! The [`RosterEngine`] is the only writer of [`RosterState`]. Every change
//! flows through [`RosterEngine::execute`] as a [`Mutation`]: it is checked
//! against the catalog, applied through the reducer, and stamped with a new
//! revision. Rejected mutations leave the state and its revision untouched.

mod errors;
mod mutation;
mod reducer;
mod transition;

pub use errors::MutationError;
pub use mutation::{Mutation, MutationEffect, PointsInput};
pub use reducer::{CommanderReducer, RosterReducer, UnitsReducer};

use crate::catalog::{
    CannonTypeId, CatalogOracle, CommanderId, CommanderOptionKind, FactionId, UnitDefId,
    UnitUpgradeKind,
};
use crate::config::RosterConfig;
use crate::state::{CommanderUpgradeKind, RosterState, UnitId};

/// Read-only inputs the engine consults while applying a mutation.
#[derive(Clone, Copy)]
pub struct ForceEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    config: &'a RosterConfig,
}

impl<'a> ForceEnv<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, config: &'a RosterConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn config(&self) -> &'a RosterConfig {
        self.config
    }
}

/// Outcome of an applied mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationOutcome {
    /// Roster revision after the mutation.
    pub revision: u64,
    pub effect: MutationEffect,
}

impl MutationOutcome {
    /// Id of the unit the mutation created, if any.
    pub fn added_unit(&self) -> Option<UnitId> {
        match self.effect {
            MutationEffect::UnitAdded(id) => Some(id),
            _ => None,
        }
    }
}

/// Applies mutations to a borrowed roster.
pub struct RosterEngine<'a> {
    state: &'a mut RosterState,
}

impl<'a> RosterEngine<'a> {
    pub fn new(state: &'a mut RosterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RosterState {
        self.state
    }

    /// Applies one mutation.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError`] when the mutation refers to something that
    /// does not resolve. The roster is unchanged in that case.
    pub fn execute(
        &mut self,
        env: ForceEnv<'_>,
        mutation: &Mutation,
    ) -> Result<MutationOutcome, MutationError> {
        match transition::apply_mutation(mutation, self.state, &env) {
            Ok(effect) => {
                let revision = self.state.bump_revision();
                tracing::debug!(
                    mutation = mutation.name(),
                    revision,
                    ?effect,
                    "mutation applied"
                );
                Ok(MutationOutcome { revision, effect })
            }
            Err(error) => {
                tracing::debug!(
                    mutation = mutation.name(),
                    %error,
                    "mutation rejected"
                );
                Err(error)
            }
        }
    }

    pub fn select_faction(
        &mut self,
        env: ForceEnv<'_>,
        faction: impl Into<FactionId>,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::SelectFaction(faction.into()))
    }

    pub fn set_points_limit(
        &mut self,
        env: ForceEnv<'_>,
        limit: impl Into<PointsInput>,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::SetPointsLimit(limit.into()))
    }

    pub fn select_commander(
        &mut self,
        env: ForceEnv<'_>,
        commander: Option<CommanderId>,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::SelectCommander(commander))
    }

    pub fn toggle_commander_option(
        &mut self,
        env: ForceEnv<'_>,
        option: CommanderOptionKind,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleCommanderOption(option))
    }

    pub fn toggle_commander_upgrade(
        &mut self,
        env: ForceEnv<'_>,
        upgrade: CommanderUpgradeKind,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleCommanderUpgrade(upgrade))
    }

    /// Adds a unit and returns its new id.
    pub fn add_unit(
        &mut self,
        env: ForceEnv<'_>,
        def: impl Into<UnitDefId>,
    ) -> Result<UnitId, MutationError> {
        let def = def.into();
        let outcome = self.execute(env, &Mutation::AddUnit(def.clone()))?;
        outcome
            .added_unit()
            .ok_or_else(|| MutationError::UnknownUnitDef {
                faction: self.state.faction().clone(),
                unit: def,
            })
    }

    pub fn remove_unit(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::RemoveUnit(unit))
    }

    pub fn change_quantity(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
        delta: i32,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ChangeQuantity { unit, delta })
    }

    pub fn set_cannon_type(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
        cannon: Option<CannonTypeId>,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::SetCannonType { unit, cannon })
    }

    pub fn toggle_veteran(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleVeteran(unit))
    }

    pub fn toggle_trained(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleTrained(unit))
    }

    pub fn toggle_downgrade(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleDowngrade(unit))
    }

    pub fn toggle_unit_upgrade(
        &mut self,
        env: ForceEnv<'_>,
        unit: UnitId,
        upgrade: UnitUpgradeKind,
    ) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ToggleUnitUpgrade { unit, upgrade })
    }

    pub fn clear_force(&mut self, env: ForceEnv<'_>) -> Result<MutationOutcome, MutationError> {
        self.execute(env, &Mutation::ClearForce)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::{
        ArtilleryPiece, CannonType, Catalog, CommanderDef, FactionDef, UnitDef, UnitUpgrades,
    };
    use crate::composition::composition;
    use crate::error::ForceError;
    use crate::pricing::{CostBreakdown, commander_cost, total_cost, unit_cost};
    use crate::state::UnitCondition;
    use crate::validation::{Violation, messages, validate};

    fn catalog() -> Catalog {
        let british = FactionDef::new("british_army", "British Army")
            .with_commander(
                CommanderDef::new("captain", "Captain", 20)
                    .with_option(CommanderOptionKind::Mount)
                    .with_option(CommanderOptionKind::Veteran),
            )
            .with_commander(CommanderDef::new("cavalry_major", "Cavalry Major", 30).cavalry())
            .with_commander(CommanderDef::new("liaison", "Liaison Officer", 15).attachment())
            .with_core(
                UnitDef::formed("line", "Line Infantry", 3, 6, 16)
                    .with_upgrades(UnitUpgrades::all())
                    .with_veteran_cost(1),
            )
            .with_core(
                UnitDef::formed("militia", "Militia", 2, 8, 20)
                    .with_trained_cost(1)
                    .with_downgrade_cost(-1)
                    .with_veteran_cost(1),
            )
            .with_support(UnitDef::formed("dragoons", "Light Dragoons", 5, 4, 8).cavalry())
            .with_support(UnitDef::formed("rifles", "Riflemen", 5, 4, 10))
            .with_support(
                UnitDef::artillery(
                    "foot_battery",
                    "Foot Artillery",
                    12,
                    ArtilleryPiece::Cannon {
                        permitted: vec![
                            CannonTypeId::from("six_pounder"),
                            CannonTypeId::from("nine_pounder"),
                        ],
                    },
                )
                .with_veteran_cost(4),
            )
            .with_support(
                UnitDef::artillery("howitzer", "Howitzer Battery", 14, ArtilleryPiece::Howitzer)
                    .with_veteran_cost(4),
            );
        let french = FactionDef::new("french_army", "French Army")
            .with_commander(CommanderDef::new("chef", "Chef de Bataillon", 22))
            .with_core(UnitDef::formed("ligne", "Infanterie de Ligne", 3, 6, 18));

        Catalog::new(
            vec![british, french],
            vec![
                CannonType::new("six_pounder", "6-pounder", 4),
                CannonType::new("nine_pounder", "9-pounder", 6),
            ],
        )
        .expect("test catalog indexes")
    }

    struct Fixture {
        catalog: Catalog,
        config: RosterConfig,
        state: RosterState,
    }

    impl Fixture {
        fn new() -> Self {
            let config = RosterConfig::default();
            Self {
                catalog: catalog(),
                state: RosterState::new(&config),
                config,
            }
        }

        fn run<T>(
            &mut self,
            f: impl FnOnce(&mut RosterEngine<'_>, ForceEnv<'_>) -> T,
        ) -> T {
            let env = ForceEnv::new(&self.catalog, &self.config);
            f(&mut RosterEngine::new(&mut self.state), env)
        }

        fn add(&mut self, def: &str) -> UnitId {
            self.run(|engine, env| engine.add_unit(env, def))
                .expect("unit is listed")
        }
    }

    #[test]
    fn add_unit_starts_at_minimum_with_first_cannon() {
        let mut fx = Fixture::new();
        let line = fx.add("line");
        let battery = fx.add("foot_battery");

        let line = fx.state.unit(line).unwrap();
        assert_eq!(line.quantity(), 6);
        assert_eq!(line.condition(), UnitCondition::Regular);
        assert!(line.upgrades().is_empty());

        let battery = fx.state.unit(battery).unwrap();
        assert_eq!(battery.quantity(), 1);
        assert_eq!(battery.cannon(), Some(&CannonTypeId::from("six_pounder")));
        assert_eq!(fx.state.units().len(), 2);
    }

    #[test]
    fn unknown_unit_is_rejected_without_touching_state() {
        let mut fx = Fixture::new();
        let before = fx.state.clone();

        let error = fx.run(|engine, env| engine.add_unit(env, "ligne")).unwrap_err();
        assert_eq!(error.error_code(), "MUTATION_UNKNOWN_UNIT_DEF");
        assert_eq!(fx.state, before);
    }

    #[test]
    fn unit_ids_are_never_reused() {
        let mut fx = Fixture::new();
        let first = fx.add("line");
        fx.run(|engine, env| engine.remove_unit(env, first)).unwrap();
        let second = fx.add("line");
        assert_ne!(first, second);
    }

    #[test]
    fn removing_a_missing_unit_is_rejected() {
        let mut fx = Fixture::new();
        let error = fx
            .run(|engine, env| engine.remove_unit(env, UnitId(42)))
            .unwrap_err();
        assert_eq!(error, MutationError::UnitNotFound(UnitId(42)));
        assert_eq!(fx.state.revision(), 0);
    }

    #[test]
    fn quantity_is_clamped_to_size_bounds() {
        let mut fx = Fixture::new();
        let line = fx.add("line");

        fx.run(|engine, env| engine.change_quantity(env, line, 4)).unwrap();
        assert_eq!(fx.state.unit(line).unwrap().quantity(), 10);

        fx.run(|engine, env| engine.change_quantity(env, line, 100)).unwrap();
        assert_eq!(fx.state.unit(line).unwrap().quantity(), 16);

        fx.run(|engine, env| engine.change_quantity(env, line, -100)).unwrap();
        assert_eq!(fx.state.unit(line).unwrap().quantity(), 6);
    }

    #[test]
    fn artillery_has_no_quantity() {
        let mut fx = Fixture::new();
        let battery = fx.add("foot_battery");
        let error = fx
            .run(|engine, env| engine.change_quantity(env, battery, 3))
            .unwrap_err();
        assert_eq!(error, MutationError::FixedCrew(battery));
        assert_eq!(fx.state.unit(battery).unwrap().quantity(), 1);
    }

    #[test]
    fn veteran_replaces_trained() {
        let mut fx = Fixture::new();
        let militia = fx.add("militia");

        fx.run(|engine, env| engine.toggle_trained(env, militia)).unwrap();
        assert_eq!(fx.state.unit(militia).unwrap().condition(), UnitCondition::Trained);

        fx.run(|engine, env| engine.toggle_veteran(env, militia)).unwrap();
        assert_eq!(fx.state.unit(militia).unwrap().condition(), UnitCondition::Veteran);

        fx.run(|engine, env| engine.toggle_veteran(env, militia)).unwrap();
        assert_eq!(fx.state.unit(militia).unwrap().condition(), UnitCondition::Regular);
    }

    #[test]
    fn conditions_need_a_defined_surcharge() {
        let mut fx = Fixture::new();
        let line = fx.add("line");

        let error = fx
            .run(|engine, env| engine.toggle_trained(env, line))
            .unwrap_err();
        assert!(matches!(error, MutationError::ConditionUnavailable { .. }));
        assert_eq!(fx.state.unit(line).unwrap().condition(), UnitCondition::Regular);
    }

    #[test]
    fn selecting_a_commander_resets_its_selections() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| {
            engine.select_commander(env, Some(CommanderId::from("captain")))?;
            engine.toggle_commander_option(env, CommanderOptionKind::Mount)?;
            engine.toggle_commander_upgrade(env, CommanderUpgradeKind::Musician)
        })
        .unwrap();
        assert_eq!(commander_cost(&fx.catalog, &fx.state), 20 + 4 + 6);

        fx.run(|engine, env| engine.select_commander(env, Some(CommanderId::from("captain"))))
            .unwrap();
        assert!(fx.state.commander_options().is_empty());
        assert!(fx.state.commander_upgrades().is_empty());
        assert_eq!(commander_cost(&fx.catalog, &fx.state), 20);
    }

    #[test]
    fn options_the_commander_lacks_are_rejected() {
        let mut fx = Fixture::new();
        let error = fx
            .run(|engine, env| {
                engine.select_commander(env, Some(CommanderId::from("cavalry_major")))?;
                engine.toggle_commander_option(env, CommanderOptionKind::Mount)
            })
            .unwrap_err();
        assert_eq!(error.error_code(), "MUTATION_OPTION_NOT_OFFERED");
        assert!(fx.state.commander_options().is_empty());
    }

    #[test]
    fn attachment_commander_upgrades_are_free() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| {
            engine.select_commander(env, Some(CommanderId::from("liaison")))?;
            engine.toggle_commander_upgrade(env, CommanderUpgradeKind::AideDeCamp)
        })
        .unwrap();
        assert_eq!(commander_cost(&fx.catalog, &fx.state), 15);
    }

    #[test]
    fn changing_faction_clears_the_roster() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| engine.select_commander(env, Some(CommanderId::from("captain"))))
            .unwrap();
        fx.add("line");
        fx.add("dragoons");

        fx.run(|engine, env| engine.select_faction(env, "french_army"))
            .unwrap();
        assert_eq!(fx.state.faction().as_str(), "french_army");
        assert!(fx.state.commander().is_none());
        assert!(fx.state.units().is_empty());
        assert_eq!(fx.state.points_limit(), 250);
    }

    #[test]
    fn unknown_faction_is_rejected() {
        let mut fx = Fixture::new();
        fx.add("line");
        let error = fx
            .run(|engine, env| engine.select_faction(env, "prussian_army"))
            .unwrap_err();
        assert_eq!(error, MutationError::UnknownFaction(FactionId::from("prussian_army")));
        assert_eq!(fx.state.units().len(), 1);
    }

    #[test]
    fn clear_force_keeps_faction_and_ceiling() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| {
            engine.set_points_limit(env, 400)?;
            engine.select_commander(env, Some(CommanderId::from("captain")))?;
            engine.toggle_commander_upgrade(env, CommanderUpgradeKind::Standard)
        })
        .unwrap();
        fx.add("line");

        fx.run(|engine, env| engine.clear_force(env)).unwrap();
        assert_eq!(fx.state.points_limit(), 400);
        assert_eq!(fx.state.faction().as_str(), "british_army");
        assert!(fx.state.commander().is_none());
        assert!(fx.state.commander_upgrades().is_empty());
        assert!(fx.state.units().is_empty());
    }

    #[test]
    fn points_limit_falls_back_and_clamps() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| engine.set_points_limit(env, "twenty"))
            .unwrap();
        assert_eq!(fx.state.points_limit(), 250);

        fx.run(|engine, env| engine.set_points_limit(env, 10)).unwrap();
        assert_eq!(fx.state.points_limit(), 50);
    }

    #[test]
    fn cannon_choice_is_overwritten_without_checks() {
        let mut fx = Fixture::new();
        let battery = fx.add("foot_battery");
        assert_eq!(unit_cost(&fx.catalog, fx.state.faction(), fx.state.unit(battery).unwrap()), 16);

        fx.run(|engine, env| {
            engine.set_cannon_type(env, battery, Some(CannonTypeId::from("nine_pounder")))
        })
        .unwrap();
        assert_eq!(unit_cost(&fx.catalog, fx.state.faction(), fx.state.unit(battery).unwrap()), 18);

        fx.run(|engine, env| engine.set_cannon_type(env, battery, None))
            .unwrap();
        assert_eq!(unit_cost(&fx.catalog, fx.state.faction(), fx.state.unit(battery).unwrap()), 12);
    }

    #[test]
    fn veteran_howitzer_costs_a_flat_surcharge() {
        let mut fx = Fixture::new();
        let howitzer = fx.add("howitzer");
        fx.run(|engine, env| engine.toggle_veteran(env, howitzer))
            .unwrap();
        assert_eq!(unit_cost(&fx.catalog, fx.state.faction(), fx.state.unit(howitzer).unwrap()), 18);
    }

    #[test]
    fn musician_adds_two_models_worth() {
        let mut fx = Fixture::new();
        let line = fx.add("line");
        fx.run(|engine, env| {
            engine.change_quantity(env, line, 4)?;
            engine.toggle_unit_upgrade(env, line, UnitUpgradeKind::Musician)
        })
        .unwrap();
        assert_eq!(unit_cost(&fx.catalog, fx.state.faction(), fx.state.unit(line).unwrap()), 36);
    }

    #[test]
    fn cavalry_commander_moves_cavalry_into_core() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| engine.select_commander(env, Some(CommanderId::from("captain"))))
            .unwrap();
        fx.add("line");
        fx.add("line");
        fx.add("dragoons");
        fx.add("dragoons");

        let tally = composition(&fx.catalog, &fx.state);
        assert_eq!((tally.core, tally.support), (2, 2));
        assert!(validate(&fx.catalog, &fx.state).contains(&Violation::TooManySupport {
            support: 2,
            core: 2,
            allowed: 1,
        }));

        fx.run(|engine, env| {
            engine.select_commander(env, Some(CommanderId::from("cavalry_major")))
        })
        .unwrap();
        let tally = composition(&fx.catalog, &fx.state);
        assert_eq!((tally.core, tally.support), (4, 0));
        assert!(validate(&fx.catalog, &fx.state).is_empty());
    }

    #[test]
    fn over_the_ceiling_reports_the_excess() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| {
            engine.select_commander(env, Some(CommanderId::from("captain")))?;
            engine.toggle_commander_option(env, CommanderOptionKind::Mount)?;
            engine.toggle_commander_upgrade(env, CommanderUpgradeKind::Musician)
        })
        .unwrap();
        for _ in 0..5 {
            let line = fx.add("line");
            fx.run(|engine, env| engine.change_quantity(env, line, 10))
                .unwrap();
        }

        assert_eq!(commander_cost(&fx.catalog, &fx.state), 30);
        assert_eq!(total_cost(&fx.catalog, &fx.state), 270);
        assert_eq!(
            messages(&fx.catalog, &fx.state),
            vec!["Over points limit by 20 pts.".to_owned()]
        );
    }

    #[test]
    fn empty_force_with_commander_needs_core() {
        let mut fx = Fixture::new();
        fx.run(|engine, env| engine.select_commander(env, Some(CommanderId::from("captain"))))
            .unwrap();
        assert_eq!(validate(&fx.catalog, &fx.state), vec![Violation::NoCoreUnits]);
    }

    #[test]
    fn revision_counts_applied_mutations() {
        let mut fx = Fixture::new();
        let outcome = fx
            .run(|engine, env| engine.set_points_limit(env, 300))
            .unwrap();
        assert_eq!(outcome.revision, 1);
        assert_eq!(outcome.effect, MutationEffect::PointsLimitSet(300));

        let _ = fx.run(|engine, env| engine.remove_unit(env, UnitId(9)));
        assert_eq!(fx.state.revision(), 1);
    }

    fn mutation_strategy() -> impl Strategy<Value = Mutation> {
        let defs = prop::sample::select(vec![
            "line",
            "militia",
            "dragoons",
            "rifles",
            "foot_battery",
            "howitzer",
            "ligne",
        ]);
        let unit = (1u32..12).prop_map(UnitId);
        prop_oneof![
            defs.prop_map(|def| Mutation::AddUnit(UnitDefId::from(def))),
            unit.clone().prop_map(Mutation::RemoveUnit),
            (unit.clone(), -30i32..30)
                .prop_map(|(unit, delta)| Mutation::ChangeQuantity { unit, delta }),
            (unit.clone(), 0u8..3).prop_map(|(unit, condition)| match condition {
                0 => Mutation::ToggleVeteran(unit),
                1 => Mutation::ToggleTrained(unit),
                _ => Mutation::ToggleDowngrade(unit),
            }),
            (unit, prop::sample::select(vec![
                UnitUpgradeKind::Officer,
                UnitUpgradeKind::Musician,
                UnitUpgradeKind::Standard,
            ]))
                .prop_map(|(unit, upgrade)| Mutation::ToggleUnitUpgrade { unit, upgrade }),
            prop::sample::select(vec!["captain", "cavalry_major", "liaison"])
                .prop_map(|id| Mutation::SelectCommander(Some(CommanderId::from(id)))),
            prop::bool::ANY.prop_map(|upgrade| if upgrade {
                Mutation::ToggleCommanderUpgrade(CommanderUpgradeKind::Musician)
            } else {
                Mutation::ToggleCommanderOption(CommanderOptionKind::Veteran)
            }),
            (-100i64..600).prop_map(|limit| Mutation::SetPointsLimit(PointsInput::Value(limit))),
        ]
    }

    fn replay(mutations: &[Mutation]) -> Fixture {
        let mut fx = Fixture::new();
        for mutation in mutations {
            let _ = fx.run(|engine, env| engine.execute(env, mutation));
        }
        fx
    }

    proptest! {
        #[test]
        fn roster_invariants_hold(mutations in prop::collection::vec(mutation_strategy(), 0..40)) {
            let fx = replay(&mutations);

            for unit in fx.state.units() {
                let entry = fx.catalog.unit(fx.state.faction(), unit.def()).unwrap();
                if let Some((min, max)) = entry.def.size_bounds() {
                    prop_assert!(unit.quantity() >= min.max(1));
                    prop_assert!(unit.quantity() <= max);
                } else {
                    prop_assert_eq!(unit.quantity(), 1);
                }
            }

            prop_assert!(fx.state.points_limit() >= 50);

            let breakdown = CostBreakdown::compute(&fx.catalog, &fx.state);
            let sum: i32 = breakdown.units.iter().map(|(_, cost)| cost).sum();
            prop_assert_eq!(breakdown.total, breakdown.commander + sum);
            prop_assert_eq!(breakdown.total, total_cost(&fx.catalog, &fx.state));

            let tally = composition(&fx.catalog, &fx.state);
            prop_assert_eq!(tally.max_support(), tally.core / 2);
            prop_assert_eq!(tally.unknown, 0);
        }

        #[test]
        fn faction_change_always_clears(mutations in prop::collection::vec(mutation_strategy(), 0..30)) {
            let mut fx = replay(&mutations);
            fx.run(|engine, env| engine.select_faction(env, "french_army")).unwrap();

            prop_assert!(fx.state.units().is_empty());
            prop_assert!(fx.state.commander().is_none());
            prop_assert!(fx.state.commander_options().is_empty());
            prop_assert!(fx.state.commander_upgrades().is_empty());
        }
    }
}
