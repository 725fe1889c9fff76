use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constants::DEFAULT_OUTPUT_PATH;

/// meal_builder — Builds meal calculation documents from a body profile and a food log.
#[derive(Parser, Debug)]
#[command(name = "meal_builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where and how to write the document.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path of the document to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Write indented JSON.
    #[arg(long)]
    pub pretty: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: false,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the reference example document.
    Example {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a document from a CSV food log and body attributes.
    Build {
        /// CSV file with a `number` column and optional
        /// `weight`, `price`, `class`, `include_refuse` columns.
        #[arg(long)]
        foods: PathBuf,

        /// Age in years.
        #[arg(long)]
        age: Option<u32>,

        /// Body weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters.
        #[arg(long)]
        height: Option<f64>,

        /// `female` or `male`. Other values are ignored.
        #[arg(long)]
        gender: Option<String>,

        /// `low`, `moderate`, `high` or 1, 2, 3. Other values are ignored.
        #[arg(long)]
        pal: Option<String>,

        /// Days covered by the food log.
        #[arg(long)]
        days: Option<u32>,

        /// Named nutrient label list to attach.
        #[arg(long)]
        name_list: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Enter the profile and foods interactively.
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a summary of a written document.
    Show {
        /// Path of the document to read.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Example {
            output: OutputArgs::default(),
        }
    }
}
