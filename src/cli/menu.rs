use clap::Subcommand;
use cookbook::Config;

#[derive(Subcommand)]
pub enum MenuCommand {
    /// Plan a recipe once more
    Add { key: String },
    /// Take a recipe off the menu
    Remove { key: String },
    /// Plan a recipe one more time
    Inc { key: String },
    /// Plan a recipe one time less (never below 1)
    Dec { key: String },
    /// Empty the menu
    Clear,
    /// Show the menu
    Show,
}

#[tracing::instrument(skip(config, command))]
pub fn run(config: &Config, command: MenuCommand) -> anyhow::Result<()> {
    let mut store = super::open_store(config)?;
    let mut menu = store.menu()?;

    match command {
        MenuCommand::Add { key } => {
            let catalog = store.catalog()?;
            let Some(recipe) = catalog.get(&key) else {
                anyhow::bail!("Recipe '{key}' not found");
            };

            let title = recipe.title.to_owned();
            let count = menu.add(recipe.clone());
            println!("{title} x{count}");
        }
        MenuCommand::Remove { key } => {
            let entry = menu.remove(&key)?;
            println!("Removed {}", entry.recipe.title);
        }
        MenuCommand::Inc { key } => {
            let count = menu.increase(&key)?;
            println!("{key} x{count}");
        }
        MenuCommand::Dec { key } => {
            let count = menu.decrease(&key)?;
            println!("{key} x{count}");
        }
        MenuCommand::Clear => {
            menu.clear();
            println!("Menu cleared");
        }
        MenuCommand::Show => {
            if menu.is_empty() {
                println!("Your menu is empty.");
            }
            for entry in menu.entries() {
                let unit = if entry.count.get() == 1 {
                    "serving"
                } else {
                    "servings"
                };
                println!(
                    "{}  {} ({} {})",
                    entry.key(),
                    entry.recipe.title,
                    entry.count,
                    unit
                );
            }
            return Ok(());
        }
    }

    tracing::info!(
        entries = menu.len(),
        servings = menu.total_servings(),
        "menu updated"
    );

    store.put_menu(&menu)?;
    store.save()?;

    Ok(())
}
