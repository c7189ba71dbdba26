use clap::Parser;
use std::path::Path;
use tracing::Level;

use formula_optimizer_rs::cli::{Cli, Command};
use formula_optimizer_rs::error::Result;
use formula_optimizer_rs::interface::{
    display_ingredient, display_ingredients, display_summary, prompt_ingredient_patch,
    prompt_menu, prompt_path, prompt_select_ingredient, prompt_yes_no, MenuAction,
};
use formula_optimizer_rs::models::IngredientId;
use formula_optimizer_rs::state::{export_summary_csv, load_formula, save_formula, IngredientStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Edit => cmd_edit(&cli.file),
        Command::Show => cmd_show(&cli.file),
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

/// Interactive editing session.
fn cmd_edit(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    let mut store = if path.exists() {
        let store = load_formula(path)?;
        println!("Loaded {} ingredients from {}", store.len(), file_path);
        store
    } else {
        println!("Starting a new formula ({} not found).", file_path);
        IngredientStore::new()
    };

    let mut saved_revision = store.revision();

    loop {
        println!();
        display_summary(store.compute_summary().as_ref());

        match prompt_menu(store.can_remove())? {
            MenuAction::Add => {
                let id = store.add();
                edit_ingredient(&mut store, id)?;
            }
            MenuAction::Edit => {
                if let Some(id) = prompt_select_ingredient(store.ingredients(), "Edit which?")? {
                    edit_ingredient(&mut store, id)?;
                }
            }
            MenuAction::Duplicate => {
                if let Some(id) =
                    prompt_select_ingredient(store.ingredients(), "Duplicate which?")?
                {
                    if let Some(copy) = store.duplicate(id) {
                        let index = store.len() - 1;
                        println!("Duplicated as ingredient #{}.", index + 1);
                        display_ingredient(index, store.require(copy)?);
                    }
                }
            }
            MenuAction::Remove => {
                if let Some(id) = prompt_select_ingredient(store.ingredients(), "Remove which?")? {
                    let name = store.require(id)?.name.clone();
                    if prompt_yes_no(&format!("Remove '{}'?", name), false)? && store.remove(id) {
                        println!("Removed.");
                    }
                }
            }
            MenuAction::Show => {
                display_ingredients(store.ingredients());
            }
            MenuAction::Save => {
                save_formula(path, &store)?;
                saved_revision = store.revision();
                println!("Formula saved to {}.", file_path);
            }
            MenuAction::Export => match store.compute_summary() {
                Some(summary) => {
                    let output = prompt_path("Export to", "formula_summary.csv")?;
                    export_summary_csv(&output, &summary)?;
                    println!("Summary exported to {}.", output);
                }
                None => println!("Nothing to export yet."),
            },
            MenuAction::Quit => break,
        }
    }

    let unsaved = store.revision() != saved_revision;
    if unsaved && prompt_yes_no("Save changes before quitting?", true)? {
        save_formula(path, &store)?;
        println!("Formula saved to {}.", file_path);
    }

    Ok(())
}

/// Prompt for every field of one ingredient and apply the changes.
fn edit_ingredient(store: &mut IngredientStore, id: IngredientId) -> Result<()> {
    let current = store.require(id)?.clone();
    let patch = prompt_ingredient_patch(&current)?;

    if patch.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    store.update(id, &patch);
    Ok(())
}

/// Print the ingredients and the summary.
fn cmd_show(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Formula file not found: {}", file_path);
        return Ok(());
    }

    let store = load_formula(path)?;
    display_ingredients(store.ingredients());
    display_summary(store.compute_summary().as_ref());

    Ok(())
}

/// Export the summary as CSV.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Formula file not found: {}", file_path);
        return Ok(());
    }

    let store = load_formula(path)?;
    match store.compute_summary() {
        Some(summary) => {
            export_summary_csv(output, &summary)?;
            println!("Exported {} ingredients to {}.", summary.len(), output);
        }
        None => println!("No ingredient has both a name and a quantity; nothing to export."),
    }

    Ok(())
}
