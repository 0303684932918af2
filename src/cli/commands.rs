//! Command dispatch: maps parsed arguments onto the lineage service

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{LineageService, YearFilter};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree) => _tree(cli),
        Some(Commands::Depth { name }) => _depth(&load(cli)?, name),
        Some(Commands::Senior { name, other }) => _senior(&load(cli)?, name, other),
        Some(Commands::Ancestor { name, other }) => _ancestor(&load(cli)?, name, other),
        Some(Commands::Find { name, from }) => _find(&load(cli)?, name, from.as_deref()),
        Some(Commands::Count { name }) => _count(&load(cli)?, name),
        Some(Commands::Collect {
            from,
            after,
            before,
        }) => _collect(
            &load(cli)?,
            from.as_deref(),
            YearFilter {
                after: *after,
                before: *before,
            },
        ),
        Some(Commands::Config { command }) => _config(command, &settings(cli)?),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config_file.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn lineage_path(cli: &Cli, settings: &Settings) -> CliResult<PathBuf> {
    cli.file
        .clone()
        .or_else(|| settings.lineage_file.clone())
        .ok_or(CliError::Application(ApplicationError::NoLineageFile))
}

fn load_with(cli: &Cli, settings: &Settings) -> CliResult<LineageService> {
    let path = lineage_path(cli, settings)?;
    Ok(LineageService::load(&path)?)
}

fn load(cli: &Cli) -> CliResult<LineageService> {
    load_with(cli, &settings(cli)?)
}

#[instrument(skip_all)]
fn _tree(cli: &Cli) -> CliResult<()> {
    let settings = settings(cli)?;
    let service = load_with(cli, &settings)?;
    let bloodline = service.bloodline();
    let roots = bloodline.roots();
    if roots.is_empty() {
        output::warning("bloodline is empty");
        return Ok(());
    }
    output::header(&format!("Found {} bloodlines:", roots.len()));
    for root in roots {
        let tree = bloodline
            .to_tree_string(root, settings.display.label_style())
            .map_err(ApplicationError::from)?;
        output::info(&tree);
    }
    Ok(())
}

#[instrument(skip(service))]
fn _depth(service: &LineageService, name: &str) -> CliResult<()> {
    output::action(name, &service.depth(name)?);
    Ok(())
}

#[instrument(skip(service))]
fn _senior(service: &LineageService, name: &str, other: &str) -> CliResult<()> {
    output::action(
        &format!("{} more senior than {}", name, other),
        &service.is_more_senior(name, other)?,
    );
    Ok(())
}

#[instrument(skip(service))]
fn _ancestor(service: &LineageService, name: &str, other: &str) -> CliResult<()> {
    match service.common_ancestor(name, other)? {
        Some(idx) => output::action("closest common ancestor", service.vampire(idx)?),
        None => output::warning(&format!("{} and {} share no ancestor", name, other)),
    }
    Ok(())
}

#[instrument(skip(service))]
fn _find(service: &LineageService, name: &str, from: Option<&str>) -> CliResult<()> {
    match service.find(name, from)? {
        Some(idx) => {
            let bloodline = service.bloodline();
            output::action("found", service.vampire(idx)?);
            let depth = bloodline.depth_from_root(idx).map_err(ApplicationError::from)?;
            output::detail(&format!("depth: {}", depth));
            if let Some(creator) = bloodline.creator(idx).map_err(ApplicationError::from)? {
                output::detail(&format!("creator: {}", service.vampire(creator)?));
            }
        }
        None => output::warning(&format!("no vampire named '{}'", name)),
    }
    Ok(())
}

#[instrument(skip(service))]
fn _count(service: &LineageService, name: &str) -> CliResult<()> {
    let summary = service.descendants(name)?;
    output::action("offspring", &summary.offspring);
    output::action("descendants", &summary.descendants);
    Ok(())
}

#[instrument(skip(service))]
fn _collect(service: &LineageService, from: Option<&str>, filter: YearFilter) -> CliResult<()> {
    if let (Some(after), Some(before)) = (filter.after, filter.before) {
        if after >= before {
            return Err(CliError::InvalidArgs(format!(
                "--after {} must be less than --before {}",
                after, before
            )));
        }
    }
    for idx in service.collect(from, filter)? {
        output::info(service.vampire(idx)?);
    }
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
    }
    Ok(())
}
