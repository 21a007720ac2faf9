mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::{menu::MenuCommand, recipe::RecipeCommand, shopping::ShoppingCommand};

/// cookbook - Recipes, menu planning and shopping lists
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Keep recipes, plan a menu and build the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, browse, favorite and rate recipes
    Recipe {
        #[command(subcommand)]
        command: RecipeCommand,
    },
    /// Plan which recipes to cook and how many times
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },
    /// Shopping list built from the menu
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cookbook::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cookbook::observability::init_observability(
        "cookbook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Recipe { command } => cli::recipe::run(&config, command),
        Commands::Menu { command } => cli::menu::run(&config, command),
        Commands::Shopping { command } => cli::shopping::run(&config, command),
    }
}
