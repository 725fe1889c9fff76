use clap::Parser;
use std::path::Path;

use meal_builder_rs::cli::{Cli, Command, OutputArgs};
use meal_builder_rs::document::{load_document, name_lists, DocumentBuilder};
use meal_builder_rs::error::Result;
use meal_builder_rs::import::load_food_log_csv;
use meal_builder_rs::interface::{
    display_body, display_document, display_food_entries, prompt_food_log, prompt_name_list,
    prompt_profile, prompt_yes_no,
};
use meal_builder_rs::logging;
use meal_builder_rs::models::Profile;
use meal_builder_rs::reference::reference_document;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Example { output } => cmd_example(&output),
        Command::Build {
            foods,
            age,
            weight,
            height,
            gender,
            pal,
            days,
            name_list,
            output,
        } => {
            let mut profile = Profile::new();
            if let Some(age) = age {
                profile.set_age(age);
            }
            if let Some(weight) = weight {
                profile.set_weight(weight);
            }
            if let Some(height) = height {
                profile.set_height(height);
            }
            if let Some(gender) = gender {
                profile.set_gender(gender);
            }
            if let Some(pal) = pal {
                // Numeric codes and labels go through the same setter
                match pal.trim().parse::<i64>() {
                    Ok(code) => profile.set_activity_level(code),
                    Err(_) => profile.set_activity_level(pal.trim()),
                };
            }
            if let Some(days) = days {
                profile.set_days(days);
            }
            cmd_build(&foods, &profile, name_list.as_deref(), &output)
        }
        Command::Interactive { output } => cmd_interactive(&output),
        Command::Show { path } => cmd_show(&path),
    }
}

fn write_document(doc: &mut DocumentBuilder, output: &OutputArgs) -> Result<()> {
    if output.pretty {
        doc.write_pretty(&output.output)?;
    } else {
        doc.write(&output.output)?;
    }
    println!("Wrote {}", output.output.display());
    Ok(())
}

/// Write the reference document.
fn cmd_example(output: &OutputArgs) -> Result<()> {
    let mut doc = reference_document()?;
    write_document(&mut doc, output)
}

/// Build a document from a CSV food log and a profile.
fn cmd_build(
    foods_path: &Path,
    profile: &Profile,
    name_list: Option<&str>,
    output: &OutputArgs,
) -> Result<()> {
    let foods = load_food_log_csv(foods_path)?;
    println!("Loaded {} foods from {}", foods.len(), foods_path.display());

    let mut doc = DocumentBuilder::new();
    if let Some(name) = name_list {
        if name_lists::lookup(name).is_none() {
            let known: Vec<&str> = name_lists::known_names().collect();
            tracing::warn!(name, known = ?known, "unknown name list, not attached");
        }
        doc.attach_name_list(name);
    }
    doc.attach_foods(&foods).attach_body(profile);

    write_document(&mut doc, output)
}

/// Collect the profile and foods from prompts, then write.
fn cmd_interactive(output: &OutputArgs) -> Result<()> {
    let profile = prompt_profile()?;
    println!();
    let foods = prompt_food_log()?;
    let name_list = prompt_name_list()?;

    println!();
    display_body(profile.attributes());
    display_food_entries(foods.entries());

    if !prompt_yes_no(&format!("Write to {}?", output.output.display()), true)? {
        println!("Nothing written.");
        return Ok(());
    }

    let mut doc = DocumentBuilder::new();
    if let Some(name) = name_list {
        doc.attach_name_list(name);
    }
    doc.attach_foods(&foods).attach_body(&profile);

    write_document(&mut doc, output)
}

/// Print a summary of a written document.
fn cmd_show(path: &Path) -> Result<()> {
    let doc = load_document(path)?;
    display_document(&doc);
    Ok(())
}
