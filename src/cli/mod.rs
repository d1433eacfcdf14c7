//! Subcommand dispatch and interactive presentation.

pub mod commands;
pub mod format;
pub mod output;
pub mod prompts;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    errors::FinmexError,
    storage::{JsonCatalog, DEFAULT_CATALOG_FILE},
};

#[derive(Debug, Parser)]
#[command(
    name = "finmex",
    version,
    about = "Personal-finance calculator for debit and credit card products"
)]
pub struct Cli {
    /// Catalog file to read and write.
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Debit card operations
    Debit {
        #[command(subcommand)]
        action: DebitAction,
    },
    /// Credit card operations
    Credit {
        #[command(subcommand)]
        action: CreditAction,
    },
    /// Side-by-side comparison of registered cards
    Compare {
        #[command(subcommand)]
        kind: CompareKind,
    },
}

#[derive(Debug, Subcommand)]
pub enum DebitAction {
    /// Register a new debit card
    Add,
    /// Analyze the real yield of one card
    Analyze,
    /// List registered debit cards
    List,
}

#[derive(Debug, Subcommand)]
pub enum CreditAction {
    /// Register a new credit card
    Add,
    /// Analyze the cost of carrying a debt on one card
    Analyze,
    /// List registered credit cards
    List,
}

#[derive(Debug, Subcommand)]
pub enum CompareKind {
    /// Compare debit cards for a given balance
    Debit,
    /// Compare credit cards for a given debt and payment
    Credit,
}

pub fn run_cli() -> Result<(), FinmexError> {
    dispatch(Cli::parse())
}

fn dispatch(cli: Cli) -> Result<(), FinmexError> {
    let store = JsonCatalog::new(cli.file);

    match cli.command {
        Command::Debit { action } => match action {
            DebitAction::Add => commands::debit::add(&store),
            DebitAction::Analyze => commands::debit::analyze(&store),
            DebitAction::List => commands::debit::list(&store),
        },
        Command::Credit { action } => match action {
            CreditAction::Add => commands::credit::add(&store),
            CreditAction::Analyze => commands::credit::analyze(&store),
            CreditAction::List => commands::credit::list(&store),
        },
        Command::Compare { kind } => match kind {
            CompareKind::Debit => commands::compare::debit(&store),
            CompareKind::Credit => commands::compare::credit(&store),
        },
    }
}
