use clap::Subcommand;
use cookbook::{Config, Store};
use cookbook_menu::Menu;
use cookbook_shopping::{IngredientAggregationService, ShoppingList, bucket_key};

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Print the shopping list
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check or uncheck one ingredient
    Toggle {
        name: String,
        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Check every ingredient
    CheckAll,
    /// Uncheck every ingredient
    UncheckAll,
}

fn load(config: &Config, store: &Store) -> anyhow::Result<(Menu, ShoppingList)> {
    let menu = store.menu()?;
    let service = IngredientAggregationService::new(config.shopping.merge_policy);

    let mut list = ShoppingList::generate(menu.entries(), &service);
    list.apply_checked(&store.checked()?);

    Ok((menu, list))
}

#[tracing::instrument(skip(config, command))]
pub fn run(config: &Config, command: ShoppingCommand) -> anyhow::Result<()> {
    let mut store = super::open_store(config)?;
    let (menu, mut list) = load(config, &store)?;

    match command {
        ShoppingCommand::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&list.groups())?);
            } else {
                print_list(&menu, &list);
            }
            return Ok(());
        }
        ShoppingCommand::Toggle { name, unit } => {
            let key = bucket_key(&name, &unit);
            let checked = list.toggle(&key)?;
            println!("[{}] {}", if checked { "x" } else { " " }, name);
        }
        ShoppingCommand::CheckAll => list.check_all(),
        ShoppingCommand::UncheckAll => list.uncheck_all(),
    }

    store.put_checked(&list.checked_keys())?;
    store.save()?;

    Ok(())
}

fn print_list(menu: &Menu, list: &ShoppingList) {
    if menu.is_empty() {
        println!("Your menu is empty. Add recipes to generate a shopping list.");
        return;
    }

    println!("Recipes in your menu:");
    for entry in menu.entries() {
        let unit = if entry.count.get() == 1 {
            "serving"
        } else {
            "servings"
        };
        println!("  - {} ({} {})", entry.recipe.title, entry.count, unit);
    }

    println!("\nIngredients to buy:");
    for group in list.groups() {
        println!("\n{}", group.letter);
        for item in group.items {
            let mark = if item.checked { "x" } else { " " };
            let amount = if item.unit.is_empty() {
                item.quantity.to_owned()
            } else {
                format!("{} {}", item.quantity, item.unit)
            };
            println!(
                "  [{}] {} {}  (for: {})",
                mark,
                amount,
                item.name,
                item.recipes.join(", ")
            );
        }
    }
}
