use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use rentora_authz::{
    Action, Actor, DecisionSource, Grant, GrantSet, Resource, Role, Section, decision_source,
    explain_resource_access, role_catalog,
};

#[derive(Parser, Debug)]
#[command(
    name = "rentora-cli",
    version,
    about = "Inspect Rentora dashboard authorization decisions"
)]
pub struct Cli {
    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every role with its sections and per-resource actions
    Catalog,
    /// Evaluate one decision (exits 2 when denied)
    Check(CheckArgs),
    /// List the sections a user can open
    Nav(ActorArgs),
    /// Explain one decision in full
    Explain(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct ActorArgs {
    /// Role held by the user
    #[arg(long)]
    pub role: Role,

    /// Stored permission grant, repeatable. A present list replaces the
    /// role table entirely, exactly as it does for a signed-in user.
    #[arg(long = "grant", value_name = "RESOURCE:ACTION")]
    pub grants: Vec<String>,

    /// File with one grant per line (blank lines ignored)
    #[arg(long, value_name = "PATH")]
    pub grants_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub actor: ActorArgs,

    #[arg(long)]
    pub resource: Resource,

    #[arg(long)]
    pub action: Action,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    role: Role,
    resource: Resource,
    action: Action,
    source: DecisionSource,
    allowed: bool,
}

#[derive(Debug, Serialize)]
struct NavReport {
    role: Role,
    source: DecisionSource,
    sections: Vec<Section>,
}

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Catalog => {
            print_catalog(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => check(args, cli.json),
        Commands::Nav(args) => {
            print_nav(args, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Explain(args) => {
            explain(args, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build the actor a check runs against.
///
/// Grant strings are validated strictly here so a typo'd `--grant` fails
/// loudly instead of silently denying everything. Stored lists inside the
/// product keep malformed entries inert instead; this is a tool-edge choice.
fn resolve_actor(args: &ActorArgs) -> anyhow::Result<Actor> {
    let mut raw = args.grants.clone();

    if let Some(path) = &args.grants_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading grants file {}", path.display()))?;
        raw.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    for entry in &raw {
        entry
            .parse::<Grant>()
            .with_context(|| format!("invalid grant {entry:?}"))?;
    }

    tracing::debug!(role = %args.role, grant_count = raw.len(), "actor resolved for inspection");
    Ok(Actor::new(args.role, GrantSet::from_raw(raw)))
}

fn source_label(source: DecisionSource) -> &'static str {
    match source {
        DecisionSource::RoleTable => "role table",
        DecisionSource::GrantList => "grant list",
    }
}

fn print_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = role_catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for def in catalog {
        println!("{} (level {}): {}", def.role, def.level, def.description);
        let sections: Vec<&str> = def.sections.iter().map(Section::as_str).collect();
        println!("  sections: {}", sections.join(", "));
        for grant in &def.grants {
            let actions: Vec<&str> = grant.actions.iter().map(Action::as_str).collect();
            println!("  {}: {}", grant.resource, actions.join(", "));
        }
        println!();
    }
    Ok(())
}

fn check(args: CheckArgs, json: bool) -> anyhow::Result<ExitCode> {
    let actor = resolve_actor(&args.actor)?;
    let report = CheckReport {
        role: actor.role(),
        resource: args.resource,
        action: args.action,
        source: decision_source(&actor),
        allowed: actor.permits(args.resource, args.action),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}:{} for role '{}': {} ({})",
            report.resource,
            report.action,
            report.role,
            if report.allowed { "allowed" } else { "denied" },
            source_label(report.source),
        );
    }

    if report.allowed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

fn print_nav(args: ActorArgs, json: bool) -> anyhow::Result<()> {
    let actor = resolve_actor(&args)?;
    let report = NavReport {
        role: actor.role(),
        source: decision_source(&actor),
        sections: Section::ALL
            .into_iter()
            .filter(|s| actor.can_view_section(*s))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "sections visible to '{}' ({}):",
            report.role,
            source_label(report.source)
        );
        for section in &report.sections {
            println!("  {section}");
        }
    }
    Ok(())
}

fn explain(args: CheckArgs, json: bool) -> anyhow::Result<()> {
    let actor = resolve_actor(&args.actor)?;
    let explanation = explain_resource_access(&actor, args.resource, args.action);

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
        return Ok(());
    }

    println!(
        "{}:{} for role '{}': {}",
        args.resource,
        args.action,
        explanation.role,
        if explanation.granted { "allowed" } else { "denied" },
    );
    println!("  {}", explanation.reason);
    if !explanation.allowed.is_empty() {
        let actions: Vec<&str> = explanation.allowed.iter().map(Action::as_str).collect();
        println!("  admitted actions: {}", actions.join(", "));
    }
    if let Some(denial) = &explanation.denial {
        println!("  {}", denial.message);
        for suggestion in &denial.suggestions {
            println!("  - {suggestion}");
        }
    }
    Ok(())
}
