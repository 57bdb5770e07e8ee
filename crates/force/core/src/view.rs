//! Derived, render-ready snapshot of a roster.
//!
//! [`RosterView`] gathers everything a renderer needs (costs, roles,
//! quota and violations) in one pass so exporters never re-derive rules.

use strum::IntoEnumIterator;

use crate::catalog::{
    ArtilleryPiece, CatalogOracle, CommanderId, Experience, FactionId, ListedRole, Points,
    StatLine, UnitDefId, UnitProfile, UnitUpgradeKind,
};
use crate::composition::{EffectiveRole, classify, composition, has_cavalry_commander};
use crate::pricing::CostBreakdown;
use crate::state::{CommanderOptions, CommanderUpgradeKind, RosterState, UnitCondition, UnitId};
use crate::validation::messages;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommanderView {
    pub id: CommanderId,
    pub name: String,
    pub cost: Points,
    pub experience: Experience,
    pub stats: StatLine,
    pub command_range: u8,
    pub command_points: u8,
    pub composition: String,
    /// Labels of the active options, e.g. `Mount Commander (+4 pts)`.
    pub options: Vec<String>,
    /// Titles of the active unit upgrades.
    pub upgrades: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitView {
    pub id: UnitId,
    pub def: UnitDefId,
    /// Definition name, or the raw id when the definition does not resolve.
    pub name: String,
    /// `None` when the definition is not listed by the faction.
    pub listed_role: Option<ListedRole>,
    pub effective_role: EffectiveRole,
    pub cost: Points,
    pub quantity: u16,
    pub is_artillery: bool,
    pub experience: Experience,
    pub stats: StatLine,
    /// Crew composition text; artillery only.
    pub composition: Option<String>,
    pub cannon: Option<String>,
    pub condition: UnitCondition,
    /// Titles of the active upgrades the definition permits.
    pub upgrades: Vec<String>,
}

impl UnitView {
    /// True when the unit counts as core only because of a cavalry commander.
    pub fn is_reclassified(&self) -> bool {
        self.listed_role == Some(ListedRole::Support) && self.effective_role == EffectiveRole::Core
    }
}

/// Everything an exporter needs, computed from one roster state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterView {
    pub faction: FactionId,
    pub faction_name: String,
    pub points_limit: u32,
    pub total: Points,
    /// Negative when over the limit.
    pub remaining: i64,
    pub commander: Option<CommanderView>,
    pub units: Vec<UnitView>,
    pub core_count: usize,
    pub support_count: usize,
    pub max_support: usize,
    pub violations: Vec<String>,
    pub revision: u64,
}

impl RosterView {
    pub fn from_state<C>(catalog: &C, state: &RosterState) -> Self
    where
        C: CatalogOracle + ?Sized,
    {
        let faction_name = catalog
            .faction(state.faction())
            .map_or_else(|| state.faction().to_string(), |faction| faction.name.clone());

        let costs = CostBreakdown::compute(catalog, state);
        let commander = state.commander().and_then(|id| {
            let def = catalog.commander(state.faction(), id)?;
            let options = def
                .options
                .iter()
                .filter(|option| {
                    state
                        .commander_options()
                        .contains(CommanderOptions::of(option.kind))
                })
                .map(|option| option.label())
                .collect();
            let upgrades = CommanderUpgradeKind::iter()
                .filter(|kind| state.commander_upgrades().contains(kind.flag()))
                .map(|kind| kind.title().to_owned())
                .collect();

            Some(CommanderView {
                id: id.clone(),
                name: def.name.clone(),
                cost: costs.commander,
                experience: def.experience,
                stats: def.stats.clone(),
                command_range: def.command_range,
                command_points: def.command_points,
                composition: def.composition.clone(),
                options,
                upgrades,
            })
        });

        let cavalry_commander = has_cavalry_commander(catalog, state);
        let units: Vec<UnitView> = state
            .units()
            .iter()
            .map(|unit| {
                let cost = costs.unit(unit.id()).unwrap_or(0);
                let mut view = UnitView {
                    id: unit.id(),
                    def: unit.def().clone(),
                    name: unit.def().to_string(),
                    listed_role: None,
                    effective_role: EffectiveRole::Unknown,
                    cost,
                    quantity: unit.quantity(),
                    is_artillery: false,
                    experience: Experience::default(),
                    stats: StatLine::default(),
                    composition: None,
                    cannon: None,
                    condition: unit.condition(),
                    upgrades: Vec::new(),
                };

                let Some(entry) = catalog.unit(state.faction(), unit.def()) else {
                    return view;
                };
                let def = entry.def;
                view.name = def.name.clone();
                view.listed_role = Some(entry.role);
                view.effective_role = classify(entry, cavalry_commander);
                view.is_artillery = def.is_artillery();
                view.experience = def.experience;
                view.stats = def.stats.clone();

                match &def.profile {
                    UnitProfile::Artillery {
                        composition, piece, ..
                    } => {
                        view.composition = Some(composition.clone());
                        // Howitzers and rockets never carry a cannon choice.
                        if let ArtilleryPiece::Cannon { .. } = piece {
                            view.cannon = unit.cannon().map(|id| {
                                catalog
                                    .cannon_type(id)
                                    .map_or_else(|| id.to_string(), |cannon| cannon.name.clone())
                            });
                        }
                    }
                    UnitProfile::Formed { .. } => {
                        view.upgrades = UnitUpgradeKind::iter()
                            .filter(|kind| def.upgrades.contains(kind.flag()))
                            .filter(|kind| unit.upgrades().contains(kind.flag()))
                            .map(|kind| kind.title().to_owned())
                            .collect();
                    }
                }
                view
            })
            .collect();

        let tally = composition(catalog, state);
        Self {
            faction: state.faction().clone(),
            faction_name,
            points_limit: state.points_limit(),
            total: costs.total,
            remaining: i64::from(state.points_limit()) - i64::from(costs.total),
            commander,
            units,
            core_count: tally.core,
            support_count: tally.support,
            max_support: tally.max_support(),
            violations: messages(catalog, state),
            revision: state.revision(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Units published in the given list, in roster order.
    pub fn listed(&self, role: ListedRole) -> impl Iterator<Item = &UnitView> {
        self.units
            .iter()
            .filter(move |unit| unit.listed_role == Some(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ArtilleryPiece, CannonType, CannonTypeId, Catalog, CommanderDef, FactionDef, UnitDef,
        UnitUpgrades,
    };
    use crate::config::RosterConfig;
    use crate::engine::{ForceEnv, RosterEngine};
    use crate::pricing::total_cost;

    fn catalog() -> Catalog {
        let faction = FactionDef::new("british_army", "British Army")
            .with_commander(CommanderDef::new("major", "Cavalry Major", 30).cavalry())
            .with_core(
                UnitDef::formed("line", "Line Infantry", 3, 6, 16)
                    .with_upgrades(UnitUpgrades::OFFICER),
            )
            .with_support(UnitDef::formed("dragoons", "Light Dragoons", 5, 4, 8).cavalry())
            .with_support(UnitDef::artillery(
                "foot_battery",
                "Foot Artillery",
                12,
                ArtilleryPiece::Cannon {
                    permitted: vec![CannonTypeId::from("six_pounder")],
                },
            ));
        Catalog::new(vec![faction], vec![CannonType::new("six_pounder", "6-pounder", 4)])
            .expect("catalog indexes")
    }

    #[test]
    fn view_matches_pricing_and_flags_reclassified_units() {
        let catalog = catalog();
        let config = RosterConfig::default();
        let mut state = RosterState::new(&config);
        let env = ForceEnv::new(&catalog, &config);
        let mut engine = RosterEngine::new(&mut state);

        engine
            .select_commander(env, Some(CommanderId::from("major")))
            .unwrap();
        let line = engine.add_unit(env, "line").unwrap();
        engine
            .toggle_unit_upgrade(env, line, UnitUpgradeKind::Officer)
            .unwrap();
        engine.add_unit(env, "dragoons").unwrap();
        engine.add_unit(env, "foot_battery").unwrap();

        let view = RosterView::from_state(&catalog, &state);
        assert_eq!(view.faction_name, "British Army");
        assert_eq!(view.total, total_cost(&catalog, &state));
        assert_eq!(view.total, 30 + 24 + 20 + 16);
        assert_eq!(view.remaining, 250 - 90);
        assert_eq!(view.core_count, 2);
        assert_eq!(view.support_count, 1);
        assert_eq!(view.max_support, 1);
        assert!(view.is_valid());

        let dragoons = &view.units[1];
        assert!(dragoons.is_reclassified());
        assert_eq!(view.listed(ListedRole::Support).count(), 2);
        assert_eq!(view.units[0].upgrades, vec!["Officer/N.C.O.".to_owned()]);
        assert_eq!(view.units[2].cannon.as_deref(), Some("6-pounder"));
        assert_eq!(view.revision, 5);
    }
}
