//! Build script loader and replay.
//!
//! A build script is an ordered list of [`Mutation`]s. Replaying it against a
//! catalog reproduces the roster a user would have built by hand.

use std::path::Path;

use force_core::{
    CatalogOracle, FactionId, ForceEnv, ForceError, Mutation, MutationError, RosterConfig,
    RosterEngine, RosterState,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildScript {
    pub name: String,
    pub description: Option<String>,
    /// Faction to select before the first mutation; the configured default
    /// faction is kept when absent.
    pub faction: Option<FactionId>,
    pub mutations: Vec<Mutation>,
}

/// Result of replaying a build script.
#[derive(Debug, Clone)]
pub struct Replay {
    pub state: RosterState,
    /// Mutations that were rejected, by position in the script.
    pub rejected: Vec<(usize, MutationError)>,
}

impl Replay {
    pub fn applied(&self) -> u64 {
        self.state.revision()
    }
}

impl BuildScript {
    /// Replays the script on a fresh roster.
    ///
    /// Rejected mutations are recorded and skipped, matching the behaviour of
    /// an interactive session where an invalid click does nothing.
    pub fn replay(&self, catalog: &dyn CatalogOracle, config: &RosterConfig) -> Replay {
        let mut state = RosterState::new(config);
        let env = ForceEnv::new(catalog, config);
        let mut engine = RosterEngine::new(&mut state);
        let mut rejected = Vec::new();

        let opening = self.faction.clone().map(Mutation::SelectFaction);
        for (index, mutation) in opening.iter().chain(&self.mutations).enumerate() {
            if let Err(error) = engine.execute(env, mutation) {
                tracing::warn!(
                    script = %self.name,
                    index,
                    mutation = mutation.name(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "mutation skipped"
                );
                rejected.push((index, error));
            }
        }

        Replay { state, rejected }
    }
}

/// Loader for build scripts from RON files.
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<BuildScript> {
        let content = read_file(path)?;
        let mut script = Self::parse(&content)?;
        if script.name.is_empty()
            && let Some(stem) = path.file_stem()
        {
            script.name = stem.to_string_lossy().into_owned();
        }

        tracing::info!(
            path = %path.display(),
            script = %script.name,
            mutations = script.mutations.len(),
            "build script loaded"
        );
        Ok(script)
    }

    pub fn parse(content: &str) -> LoadResult<BuildScript> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build script RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use force_core::{
        Catalog, CommanderDef, FactionDef, MutationError, PointsInput, UnitDef, UnitDefId, UnitId,
    };
    use tempfile::TempDir;

    use super::*;

    fn catalog() -> Catalog {
        let british = FactionDef::new("british_army", "British Army")
            .with_commander(CommanderDef::new("captain", "Captain", 20))
            .with_core(UnitDef::formed("line", "Line Infantry", 3, 6, 16));
        let french = FactionDef::new("french_army", "French Army")
            .with_commander(CommanderDef::new("chef", "Chef de Bataillon", 22))
            .with_core(UnitDef::formed("ligne", "Infanterie de Ligne", 3, 6, 18));
        Catalog::new(vec![british, french], Vec::new()).unwrap()
    }

    #[test]
    fn parses_mutations() {
        let script = ScriptLoader::parse(
            r#"(
                name: "skirmish",
                mutations: [
                    SetPointsLimit(Raw("300pts")),
                    SelectCommander(Some("captain")),
                    AddUnit("line"),
                    ChangeQuantity(unit: 1, delta: 4),
                    ToggleUnitUpgrade(unit: 1, upgrade: Musician),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(script.name, "skirmish");
        assert_eq!(script.mutations.len(), 5);
        assert_eq!(
            script.mutations[0],
            Mutation::SetPointsLimit(PointsInput::Raw("300pts".into()))
        );
        assert_eq!(
            script.mutations[3],
            Mutation::ChangeQuantity {
                unit: UnitId(1),
                delta: 4
            }
        );
    }

    #[test]
    fn replay_skips_rejected_mutations() {
        let script = BuildScript {
            name: "mixed".into(),
            faction: Some(FactionId::from("french_army")),
            mutations: vec![
                Mutation::AddUnit(UnitDefId::from("line")),
                Mutation::AddUnit(UnitDefId::from("ligne")),
                Mutation::RemoveUnit(UnitId(7)),
            ],
            ..BuildScript::default()
        };

        let replay = script.replay(&catalog(), &RosterConfig::default());
        assert_eq!(replay.state.faction().as_str(), "french_army");
        assert_eq!(replay.state.units().len(), 1);
        assert_eq!(replay.applied(), 2);
        assert_eq!(replay.rejected.len(), 2);
        assert_eq!(replay.rejected[0].0, 1);
        assert_eq!(replay.rejected[1].1, MutationError::UnitNotFound(UnitId(7)));
    }

    #[test]
    fn load_names_script_after_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rearguard.ron");
        fs::write(&path, "(mutations: [ClearForce])").unwrap();

        let script = ScriptLoader::load(&path).unwrap();
        assert_eq!(script.name, "rearguard");
        assert_eq!(script.mutations, vec![Mutation::ClearForce]);
    }
}
