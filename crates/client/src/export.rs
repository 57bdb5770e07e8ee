//! Plain-text roster export.

use std::fmt::Write;

use force_core::{CommanderView, ListedRole, RosterView, UnitCondition, UnitView};

const TITLE: &str = "BLOOD & BAYONETS - FORCE ROSTER";
const HEAVY_RULE: usize = 50;
const LIGHT_RULE: usize = 40;

/// Renders the roster as the plain-text sheet players print or paste.
///
/// Units are grouped by the list they were published in; support units
/// that count as core under the current commander are marked.
pub fn render_text(view: &RosterView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_roster(&mut out, view);
    out
}

fn write_roster(out: &mut String, view: &RosterView) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(HEAVY_RULE))?;
    writeln!(out, "Faction: {}", view.faction_name)?;
    writeln!(out, "Points: {} / {}", view.total, view.points_limit)?;
    writeln!(out)?;

    write_commander(out, view.commander.as_ref())?;
    writeln!(out)?;

    write_section(out, "CORE UNITS", view, ListedRole::Core)?;
    writeln!(out)?;
    write_section(out, "SUPPORT UNITS", view, ListedRole::Support)?;

    if !view.violations.is_empty() {
        writeln!(out, "ISSUES")?;
        writeln!(out, "{}", "-".repeat(LIGHT_RULE))?;
        for message in &view.violations {
            writeln!(out, "  ! {message}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "=".repeat(HEAVY_RULE))?;
    writeln!(out, "TOTAL: {} pts", view.total)
}

fn write_commander(out: &mut String, commander: Option<&CommanderView>) -> std::fmt::Result {
    let Some(commander) = commander else {
        return writeln!(out, "COMMANDER: None [0 pts]");
    };

    writeln!(out, "COMMANDER: {} [{} pts]", commander.name, commander.cost)?;
    writeln!(
        out,
        "  {} · Shoot {} · Melee {} · Resolve {}",
        commander.experience,
        commander.stats.shoot,
        commander.stats.melee,
        commander.stats.resolve
    )?;
    writeln!(
        out,
        "  Command {}\" / {} pts",
        commander.command_range, commander.command_points
    )?;
    if !commander.composition.is_empty() {
        writeln!(out, "  {}", commander.composition)?;
    }
    if !commander.options.is_empty() {
        writeln!(out, "  Options: {}", commander.options.join(", "))?;
    }
    if !commander.upgrades.is_empty() {
        writeln!(out, "  Unit upgrades: {}", commander.upgrades.join(", "))?;
    }
    Ok(())
}

fn write_section(
    out: &mut String,
    title: &str,
    view: &RosterView,
    role: ListedRole,
) -> std::fmt::Result {
    let units: Vec<&UnitView> = view.listed(role).collect();
    writeln!(out, "{title} ({})", units.len())?;
    writeln!(out, "{}", "-".repeat(LIGHT_RULE))?;

    for unit in units {
        write_unit(out, unit)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_unit(out: &mut String, unit: &UnitView) -> std::fmt::Result {
    writeln!(out, "{} [{} pts]", unit.name, unit.cost)?;

    if unit.is_artillery {
        write!(
            out,
            "  Crew · {} · {}",
            unit.experience,
            unit.composition.as_deref().unwrap_or_default()
        )?;
        if let Some(cannon) = &unit.cannon {
            write!(out, " · {cannon}")?;
        }
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "  {} models · {} · Shoot {} · Melee {}",
            unit.quantity, unit.experience, unit.stats.shoot, unit.stats.melee
        )?;
    }

    if unit.is_reclassified() {
        writeln!(out, "  (counts as Core under a cavalry commander)")?;
    }
    match unit.condition {
        UnitCondition::Regular => {}
        UnitCondition::Veteran => writeln!(out, "  + Veteran")?,
        UnitCondition::Trained => writeln!(out, "  + Upgraded to Trained")?,
        UnitCondition::Downgraded => writeln!(out, "  + Downgraded to Half Pikes")?,
    }
    if !unit.upgrades.is_empty() {
        writeln!(out, "  Upgrades: {}", unit.upgrades.join(", "))?;
    }
    Ok(())
}
