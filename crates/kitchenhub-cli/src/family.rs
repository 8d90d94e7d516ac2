//! # Family Subcommand
//!
//! The roster is client-local state; the CLI persists it as a JSON file
//! (default `family.json`) so it survives between invocations.
//!
//! - `sample` - write the demo roster.
//! - `show` - list members with derived BMI and category.
//! - `add` - add a member; allergies/dietary/goals are comma-separated.
//! - `remove` - remove a member by name.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use kitchenhub_core::tags::parse_tags;
use kitchenhub_state::{FamilyMember, FamilyRoster};

/// Arguments for the `khub family` subcommand.
#[derive(Args, Debug)]
pub struct FamilyArgs {
    /// Roster file.
    #[arg(long, default_value = "family.json", global = true)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: FamilyCommand,
}

#[derive(Subcommand, Debug)]
pub enum FamilyCommand {
    /// Write the demo roster to the roster file.
    Sample,

    /// List members with derived BMI.
    Show,

    /// Add a member.
    Add {
        /// Member name (required, must not be blank).
        name: String,
        #[arg(long)]
        age: Option<u8>,
        #[arg(long)]
        weight_kg: Option<f64>,
        #[arg(long)]
        height_cm: Option<f64>,
        /// Comma-separated allergy list.
        #[arg(long, default_value = "")]
        allergies: String,
        /// Comma-separated dietary preference list.
        #[arg(long, default_value = "")]
        dietary: String,
        /// Comma-separated goal list.
        #[arg(long, default_value = "")]
        goals: String,
    },

    /// Remove the first member with this name.
    Remove {
        /// Member name.
        name: String,
    },
}

pub fn run_family(args: &FamilyArgs) -> Result<u8> {
    match &args.command {
        FamilyCommand::Sample => {
            let roster = FamilyRoster::sample();
            save(&args.file, &roster)?;
            println!("sample roster written to {}", args.file.display());
            Ok(0)
        }
        FamilyCommand::Show => {
            let roster = load(&args.file)?;
            if roster.members().is_empty() {
                println!("no members (try `khub family sample`)");
                return Ok(0);
            }
            for member in roster.members() {
                let health = match (member.bmi(), member.bmi_category()) {
                    (Some(bmi), Some(category)) => {
                        format!("BMI {bmi:.1} ({})", category.label())
                    }
                    _ => "BMI n/a".to_string(),
                };
                println!("{:<20} {}", member.name, health);
                if !member.allergies.is_empty() {
                    println!("{:<20} allergies: {}", "", member.allergies.join(", "));
                }
            }
            Ok(0)
        }
        FamilyCommand::Add {
            name,
            age,
            weight_kg,
            height_cm,
            allergies,
            dietary,
            goals,
        } => {
            let mut roster = load(&args.file)?;
            let mut member = FamilyMember::named(name);
            member.age = *age;
            member.weight_kg = *weight_kg;
            member.height_cm = *height_cm;
            member.allergies = parse_tags(allergies);
            member.dietary = parse_tags(dietary);
            member.goals = parse_tags(goals);
            roster.add(member)?;
            save(&args.file, &roster)?;
            println!("added {name}");
            Ok(0)
        }
        FamilyCommand::Remove { name } => {
            let mut roster = load(&args.file)?;
            let id = roster
                .members()
                .iter()
                .find(|m| m.name == *name)
                .map(|m| m.id);
            match id {
                Some(id) => {
                    roster.remove(id);
                    save(&args.file, &roster)?;
                    println!("removed {name}");
                    Ok(0)
                }
                None => {
                    println!("no member named {name}");
                    Ok(1)
                }
            }
        }
    }
}

/// A missing roster file is an empty roster, not an error.
fn load(path: &Path) -> Result<FamilyRoster> {
    if !path.exists() {
        return Ok(FamilyRoster::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing roster {}", path.display()))
}

fn save(path: &Path, roster: &FamilyRoster) -> Result<()> {
    let raw = serde_json::to_string_pretty(roster).context("serializing roster")?;
    std::fs::write(path, raw).with_context(|| format!("writing roster {}", path.display()))
}
