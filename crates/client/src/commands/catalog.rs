//! List factions and their purchasable entries.

use anyhow::Result;
use clap::Parser;
use console::style;
use force_content::ContentFactory;
use force_core::{
    ArtilleryPiece, CatalogOracle, CommanderDef, FactionDef, FactionId, UnitDef, UnitProfile,
};

use crate::config::CliConfig;

/// List factions, or one faction's commanders and units with base pricing
#[derive(Parser)]
pub struct ListCatalog {
    /// Faction id to list in detail
    #[arg(short, long, value_name = "FACTION")]
    faction: Option<String>,
}

impl ListCatalog {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        let catalog = factory.load_catalog()?;

        let Some(id) = self.faction else {
            println!("{}", style("=== Factions ===").bold().green());
            for faction in catalog.factions() {
                println!(
                    "  {} {} ({} commanders, {} core, {} support)",
                    style(&faction.id).cyan(),
                    faction.name,
                    faction.commanders.len(),
                    faction.core.len(),
                    faction.support.len()
                );
            }
            return Ok(());
        };

        let Some(faction) = catalog.faction(&FactionId::from(id.as_str())) else {
            let known: Vec<_> = catalog.factions().iter().map(|f| f.id.as_str()).collect();
            anyhow::bail!("Unknown faction: {id}\n\nKnown factions: {}", known.join(", "));
        };
        print_faction(&catalog, faction);
        Ok(())
    }
}

fn print_faction(catalog: &dyn CatalogOracle, faction: &FactionDef) {
    println!("{}", style(format!("=== {} ===", faction.name)).bold().green());
    if !faction.description.is_empty() {
        println!("{}", faction.description);
    }
    println!();

    println!("{}", style("Commanders:").bold().yellow());
    for commander in &faction.commanders {
        println!("  {}", describe_commander(commander));
    }
    println!();

    println!("{}", style("Core units:").bold().yellow());
    for unit in &faction.core {
        println!("  {}", describe_unit(catalog, unit));
    }
    println!();

    println!("{}", style("Support units:").bold().yellow());
    for unit in &faction.support {
        println!("  {}", describe_unit(catalog, unit));
    }
}

fn describe_commander(commander: &CommanderDef) -> String {
    let mut line = format!(
        "{} ({}): {} pts",
        commander.name, commander.id, commander.points
    );
    if commander.is_cavalry_commander {
        line.push_str(", cavalry commander");
    }
    if !commander.options.is_empty() {
        let options: Vec<_> = commander.options.iter().map(|o| o.label()).collect();
        line.push_str(&format!("; options: {}", options.join(", ")));
    }
    if commander.buys_unit_upgrades() {
        line.push_str(&format!(
            "; unit upgrades {} pts each",
            commander.unit_upgrade_cost()
        ));
    }
    line
}

fn describe_unit(catalog: &dyn CatalogOracle, unit: &UnitDef) -> String {
    let mut line = match &unit.profile {
        UnitProfile::Formed {
            cost_per_model,
            min_size,
            max_size,
        } => format!(
            "{} ({}): {} pts/model, {}-{} models",
            unit.name, unit.id, cost_per_model, min_size, max_size
        ),
        UnitProfile::Artillery {
            cost_per_crew,
            piece,
            ..
        } => {
            let piece = match piece {
                ArtilleryPiece::Cannon { permitted } => {
                    let cannons: Vec<_> = permitted
                        .iter()
                        .filter_map(|id| catalog.cannon_type(id))
                        .map(|cannon| format!("{} +{}", cannon.name, cannon.points))
                        .collect();
                    format!("cannon: {}", cannons.join(", "))
                }
                ArtilleryPiece::Howitzer => "howitzer".to_owned(),
                ArtilleryPiece::Rocket => "rockets".to_owned(),
            };
            format!("{} ({}): {} pts crew, {}", unit.name, unit.id, cost_per_crew, piece)
        }
    };

    if unit.is_cavalry {
        line.push_str(", cavalry");
    }
    if let Some(cost) = unit.veteran_cost.filter(|cost| *cost != 0) {
        line.push_str(&format!(", veteran {cost:+}"));
    }
    if let Some(cost) = unit.trained_cost {
        line.push_str(&format!(", trained {cost:+}"));
    }
    if let Some(cost) = unit.downgrade_cost {
        line.push_str(&format!(", downgrade {cost:+}"));
    }
    line
}
