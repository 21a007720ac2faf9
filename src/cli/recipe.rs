use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use cookbook::Config;
use cookbook_recipe::{Catalog, RateInput, RecipeFilter};
use cookbook_shared::{NewIngredient, NewRecipe, Recipe};
use serde::Deserialize;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Add a recipe
    Add(AddArgs),
    /// Import recipes from a JSON array
    Import { file: PathBuf },
    /// List recipes, newest first
    List {
        /// Match title, description or tags
        #[arg(long)]
        search: Option<String>,
        /// Only these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Maximum prep plus cook time, in minutes
        #[arg(long)]
        max_time: Option<u32>,
    },
    /// Show one recipe
    Show { key: String },
    /// Delete a recipe
    Delete { key: String },
    /// Add or remove a favorite mark
    Favorite { key: String },
    /// List favorite recipes
    Favorites,
    /// Rate a recipe from 1 to 5 stars
    Rate { key: String, stars: u8 },
    /// List categories in use
    Categories,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Prep time in minutes
    #[arg(long, default_value_t = 0)]
    prep: u32,
    /// Cook time in minutes
    #[arg(long, default_value_t = 0)]
    cook: u32,
    #[arg(long, default_value_t = 4)]
    servings: u32,
    /// "name;quantity;unit", unit optional (repeatable)
    #[arg(long = "ingredient", value_parser = parse_ingredient)]
    ingredients: Vec<NewIngredient>,
    /// One step (repeatable)
    #[arg(long = "instruction")]
    instructions: Vec<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
}

impl From<AddArgs> for NewRecipe {
    fn from(args: AddArgs) -> Self {
        NewRecipe {
            title: args.title,
            category: args.category,
            description: args.description,
            prep_time: args.prep,
            cook_time: args.cook,
            servings: args.servings,
            ingredients: args.ingredients,
            instructions: args.instructions,
            tags: args.tags,
        }
    }
}

fn parse_ingredient(value: &str) -> Result<NewIngredient, String> {
    let parts: Vec<&str> = value.split(';').map(str::trim).collect();

    match parts.as_slice() {
        [name, quantity] => Ok(NewIngredient::new(*name, *quantity, "")),
        [name, quantity, unit] => Ok(NewIngredient::new(*name, *quantity, *unit)),
        _ => Err(format!(
            "expected \"name;quantity;unit\", got \"{value}\""
        )),
    }
}

/// An exported recipe keeps its key and timestamp; anything else is created
/// fresh.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportedRecipe {
    Keyed(Recipe),
    New(NewRecipe),
}

#[tracing::instrument(skip(config, command))]
pub fn run(config: &Config, command: RecipeCommand) -> anyhow::Result<()> {
    let mut store = super::open_store(config)?;
    let mut catalog = store.catalog()?;

    match command {
        RecipeCommand::Add(args) => {
            let recipe = catalog.create(args.into())?;
            println!("Added {} ({})", recipe.title, recipe.key);
        }
        RecipeCommand::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let recipes: Vec<ImportedRecipe> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", file.display()))?;

            let total = recipes.len();
            for recipe in recipes {
                match recipe {
                    ImportedRecipe::Keyed(recipe) => catalog.insert(recipe)?,
                    ImportedRecipe::New(input) => {
                        catalog.create(input)?;
                    }
                }
            }

            tracing::info!(count = total, "recipes imported");
            println!("Imported {total} recipes");
        }
        RecipeCommand::List {
            search,
            categories,
            max_time,
        } => {
            let filter = RecipeFilter {
                query: search,
                categories,
                max_total_time: max_time,
            };

            let recipes = catalog.filter(&filter);
            if recipes.is_empty() {
                println!("No recipes found");
            }
            for recipe in recipes {
                println!("{}", summary(&catalog, recipe));
            }
            return Ok(());
        }
        RecipeCommand::Show { key } => {
            let Some(recipe) = catalog.get(&key) else {
                anyhow::bail!("Recipe '{key}' not found");
            };
            print_recipe(&catalog, recipe);
            return Ok(());
        }
        RecipeCommand::Delete { key } => {
            let recipe = catalog.remove(&key)?;
            println!("Deleted {}", recipe.title);
        }
        RecipeCommand::Favorite { key } => {
            if catalog.toggle_favorite(&key)? {
                println!("Added to favorites");
            } else {
                println!("Removed from favorites");
            }
        }
        RecipeCommand::Favorites => {
            let favorites = catalog.favorites();
            if favorites.is_empty() {
                println!("You haven't added any favorites yet.");
            }
            for recipe in favorites {
                println!("{}", summary(&catalog, recipe));
            }
            return Ok(());
        }
        RecipeCommand::Rate { key, stars } => {
            catalog.rate(RateInput { key, stars })?;
            println!("Your rating: {stars}/5");
        }
        RecipeCommand::Categories => {
            for category in catalog.categories() {
                println!("{category}");
            }
            return Ok(());
        }
    }

    store.put_catalog(&catalog)?;
    store.save()?;

    Ok(())
}

fn summary(catalog: &Catalog, recipe: &Recipe) -> String {
    let favorite = if catalog.is_favorite(&recipe.key) { " *" } else { "" };

    format!(
        "{}  {} [{}] {} min{}",
        recipe.key,
        recipe.title,
        recipe.category,
        recipe.total_time(),
        favorite
    )
}

fn print_recipe(catalog: &Catalog, recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("Category: {}", recipe.category);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!(
        "Prep {} min, cook {} min, serves {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }
    match catalog.rating(&recipe.key) {
        Some(stars) => println!("Your rating: {stars}/5"),
        None => println!("Not rated yet"),
    }
    if catalog.is_favorite(&recipe.key) {
        println!("Favorite");
    }

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!(
            "  - {} {} {}",
            ingredient.quantity, ingredient.unit, ingredient.name
        );
    }

    println!("\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
