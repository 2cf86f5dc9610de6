use std::io;
use std::path::Path;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use serde_yaml::Value;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::document;
use crate::node::value_text;
use crate::path::TreeMode;
use crate::render::{render, render_range, TreeDisplay};
use crate::tree::Tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Init { file, value }) => _init(file, value),
        Some(Commands::Show {
            file,
            general,
            pretty,
        }) => _show(file, mode_flag(*general), *pretty),
        Some(Commands::Range {
            file,
            min_depth,
            max_depth,
            general,
        }) => _range(file, *min_depth, *max_depth, mode_flag(*general)),
        Some(Commands::Insert {
            file,
            path,
            value,
            general,
        }) => _insert(file, path, value, mode_flag(*general)),
        Some(Commands::Find { file, value }) => _find(file, value),
        Some(Commands::Edit {
            file,
            old_value,
            new_value,
        }) => _edit(file, old_value, new_value),
        Some(Commands::Delete { file, value }) => _delete(file, value),
        Some(Commands::Clear { file }) => _clear(file),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn mode_flag(general: bool) -> TreeMode {
    if general {
        TreeMode::General
    } else {
        TreeMode::Binary
    }
}

/// Parse a command-line value as a YAML scalar so "10" stays a number and
/// "abc" a string; anything unparseable is kept verbatim.
fn parse_scalar(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap_or_else(|_| Value::from(text))
}

#[instrument]
fn _init(file: &Path, value: &str) -> CliResult<()> {
    let tree = Tree::with_root(parse_scalar(value));
    document::save(&tree, file)?;
    output::success(&format!("Created tree '{}' with root {}", file.display(), value));
    Ok(())
}

#[instrument]
fn _show(file: &Path, mode: TreeMode, pretty: bool) -> CliResult<()> {
    let tree = document::load(file)?;
    if pretty {
        output::info(&tree.to_tree_string());
    } else {
        print!("{}", render(&tree, mode));
    }
    Ok(())
}

#[instrument]
fn _range(file: &Path, min_depth: usize, max_depth: usize, mode: TreeMode) -> CliResult<()> {
    let tree = document::load(file)?;
    print!("{}", render_range(&tree, mode, min_depth, max_depth));
    Ok(())
}

#[instrument]
fn _insert(file: &Path, path: &str, value: &str, mode: TreeMode) -> CliResult<()> {
    let mut tree = document::load(file)?;
    tree.insert_by_path(path, parse_scalar(value), mode)?;
    document::save(&tree, file)?;
    output::success(&format!("Inserted {} at '{}'", value, path));
    Ok(())
}

#[instrument]
fn _find(file: &Path, value: &str) -> CliResult<()> {
    let tree = document::load(file)?;
    match tree.find(parse_scalar(value)) {
        Some(node) => {
            debug!("found node: {:?}", node);
            output::success(&format!(
                "Found {} (subtree: {} nodes, depth {})",
                value_text(&node.value),
                node.count(),
                node.depth()
            ));
        }
        None => output::failure(&format!("{} not found", value)),
    }
    Ok(())
}

#[instrument]
fn _edit(file: &Path, old_value: &str, new_value: &str) -> CliResult<()> {
    let mut tree = document::load(file)?;
    if tree.edit(parse_scalar(old_value), parse_scalar(new_value)) {
        document::save(&tree, file)?;
        output::success(&format!("Changed {} to {}", old_value, new_value));
    } else {
        output::failure(&format!("{} not found", old_value));
    }
    Ok(())
}

#[instrument]
fn _delete(file: &Path, value: &str) -> CliResult<()> {
    let mut tree = document::load(file)?;
    if tree.delete(parse_scalar(value)) {
        document::save(&tree, file)?;
        output::success(&format!("Deleted {}", value));
    } else {
        output::failure(&format!("{} not found", value));
    }
    Ok(())
}

#[instrument]
fn _clear(file: &Path) -> CliResult<()> {
    let mut tree = document::load(file)?;
    tree.delete_all();
    document::save(&tree, file)?;
    output::success(&format!("Cleared tree '{}'", file.display()));
    Ok(())
}
