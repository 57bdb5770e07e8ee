//! Replay a build script and print the resulting roster.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use force_content::{BuildScript, ContentFactory, Replay, ScriptLoader};
use force_core::validation::validate;
use force_core::{ForceError, ListedRole, RosterView, UnitView, Violation};

use crate::config::CliConfig;
use crate::export::render_text;

/// Replay a build script through the roster engine
#[derive(Parser)]
pub struct Build {
    /// Script name under `<data dir>/builds`, or a path to a RON script
    #[arg(value_name = "SCRIPT")]
    script: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Exit with an error when the finished roster breaks a composition rule
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Costs, quota and issues at a glance
    Summary,
    /// Full roster view as JSON
    Json,
    /// Printable plain-text roster
    Text,
}

impl Build {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        let catalog = factory.load_catalog()?;
        let roster_config = factory.load_config()?;
        let script = self.load_script(&factory)?;

        let replay = script.replay(&catalog, &roster_config);
        let view = RosterView::from_state(&catalog, &replay.state);
        tracing::info!(
            script = %script.name,
            applied = replay.applied(),
            rejected = replay.rejected.len(),
            total = view.total,
            "build replayed"
        );

        match self.format {
            OutputFormat::Summary => print_summary(&script, &replay, &view),
            OutputFormat::Json => {
                let issues = validate(&catalog, &replay.state);
                print_json(&script, &replay, &view, &issues)?
            }
            OutputFormat::Text => print!("{}", render_text(&view)),
        }

        if self.strict && !view.is_valid() {
            anyhow::bail!(
                "Roster '{}' breaks {} composition rule(s)",
                script.name,
                view.violations.len()
            );
        }
        Ok(())
    }

    fn load_script(&self, factory: &ContentFactory) -> Result<BuildScript> {
        let path = Path::new(&self.script);
        if path.extension().is_some() && path.exists() {
            return ScriptLoader::load(path);
        }

        let named: PathBuf = factory.build_path(&self.script);
        if !named.exists() {
            let available = factory.build_names().unwrap_or_default();
            anyhow::bail!(
                "Build script not found: {}\n\nAvailable builds: {}",
                named.display(),
                if available.is_empty() {
                    "(none)".to_owned()
                } else {
                    available.join(", ")
                }
            );
        }
        factory
            .load_build(&self.script)
            .with_context(|| format!("Failed to load build '{}'", self.script))
    }
}

fn print_summary(script: &BuildScript, replay: &Replay, view: &RosterView) {
    println!("{} {}", style("Build:").bold().cyan(), script.name);
    if let Some(description) = &script.description {
        println!("{} {}", style("About:").bold().cyan(), description);
    }
    println!(
        "{} {} ({})",
        style("Faction:").bold().cyan(),
        view.faction_name,
        view.faction
    );
    println!(
        "{} {} applied, {} rejected",
        style("Mutations:").bold().cyan(),
        replay.applied(),
        replay.rejected.len()
    );
    println!();

    println!("{}", style("=== Roster ===").bold().green());
    match &view.commander {
        Some(commander) => println!(
            "  Commander: {} [{} pts]",
            commander.name, commander.cost
        ),
        None => println!("  Commander: {}", style("none").dim()),
    }
    print_units("Core", view.listed(ListedRole::Core));
    print_units("Support", view.listed(ListedRole::Support));
    println!();

    println!("{}", style("Points:").bold().yellow());
    println!("  Total: {} / {}", view.total, view.points_limit);
    if view.remaining >= 0 {
        println!("  Remaining: {}", view.remaining);
    } else {
        println!("  Over by: {}", style(-view.remaining).red());
    }
    println!();

    println!("{}", style("Composition:").bold().yellow());
    println!("  Core: {}", view.core_count);
    println!(
        "  Support: {} (max {})",
        view.support_count, view.max_support
    );
    println!();

    if !replay.rejected.is_empty() {
        println!("{}", style("Rejected mutations:").bold().yellow());
        for (index, error) in &replay.rejected {
            println!("  #{index} [{}] {error}", error.error_code());
        }
        println!();
    }

    if view.is_valid() {
        println!("{}", style("Roster is legal.").bold().green());
    } else {
        println!("{}", style("Issues:").bold().red());
        for message in &view.violations {
            println!("  - {message}");
        }
    }
}

fn print_units<'a>(label: &str, units: impl Iterator<Item = &'a UnitView>) {
    for unit in units {
        let marker = if unit.is_reclassified() {
            format!(" {}", style("(counts as Core)").dim())
        } else {
            String::new()
        };
        println!(
            "  {label}: {} x{} [{} pts]{marker}",
            unit.name, unit.quantity, unit.cost
        );
    }
}

fn print_json(
    script: &BuildScript,
    replay: &Replay,
    view: &RosterView,
    issues: &[Violation],
) -> Result<()> {
    let rejected: Vec<_> = replay
        .rejected
        .iter()
        .map(|(index, error)| {
            serde_json::json!({
                "index": index,
                "code": error.error_code(),
                "message": error.to_string(),
            })
        })
        .collect();
    let issues: Vec<_> = issues
        .iter()
        .map(|issue| {
            serde_json::json!({
                "code": issue.code(),
                "message": issue.to_string(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "script": script.name,
        "rejected": rejected,
        "issues": issues,
        "roster": view,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize roster")?
    );
    Ok(())
}
