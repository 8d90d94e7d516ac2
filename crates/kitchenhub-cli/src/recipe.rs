//! # Recipe Subcommand
//!
//! - `show` - one recipe's detail.
//! - `list` - dashboard listing, optionally filtered by meal type.
//! - `similar` - server-scored similar recipes, best match first.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use kitchenhub_client::recipes::{MealType, Recipe};
use kitchenhub_core::RecipeId;

use crate::CliContext;

/// Arguments for the `khub recipe` subcommand.
#[derive(Args, Debug)]
pub struct RecipeArgs {
    #[command(subcommand)]
    pub command: RecipeCommand,
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommand {
    /// Show one recipe.
    Show {
        /// Recipe identifier.
        id: i64,
    },

    /// List recipes, optionally filtered by meal type.
    List {
        /// Only recipes of this meal type.
        #[arg(long, value_enum)]
        meal_type: Option<MealTypeArg>,
    },

    /// Show recipes similar to the given one, best match first.
    Similar {
        /// Recipe identifier.
        id: i64,
    },
}

/// Meal-type filter values accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MealTypeArg {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl From<MealTypeArg> for MealType {
    fn from(arg: MealTypeArg) -> Self {
        match arg {
            MealTypeArg::Breakfast => MealType::Breakfast,
            MealTypeArg::Lunch => MealType::Lunch,
            MealTypeArg::Dinner => MealType::Dinner,
            MealTypeArg::Dessert => MealType::Dessert,
            MealTypeArg::Snack => MealType::Snack,
        }
    }
}

pub async fn run_recipe(args: &RecipeArgs, ctx: &CliContext) -> Result<u8> {
    match &args.command {
        RecipeCommand::Show { id } => {
            let recipe = ctx
                .client
                .recipes()
                .get(&ctx.session, RecipeId::new(*id))
                .await?;
            match recipe {
                Some(recipe) => {
                    print_recipe(&recipe);
                    Ok(0)
                }
                None => {
                    println!("recipe {id} not found");
                    Ok(1)
                }
            }
        }
        RecipeCommand::List { meal_type } => {
            let recipes = ctx
                .client
                .recipes()
                .list(&ctx.session, meal_type.map(Into::into))
                .await?;
            if recipes.is_empty() {
                println!("no recipes");
            }
            for recipe in &recipes {
                println!(
                    "#{:<5} {}",
                    recipe.id,
                    recipe.title.as_deref().unwrap_or("(untitled)")
                );
            }
            Ok(0)
        }
        RecipeCommand::Similar { id } => {
            let similar = ctx
                .client
                .recipes()
                .similar(&ctx.session, RecipeId::new(*id))
                .await?;
            if similar.is_empty() {
                println!("no similar recipes");
            }
            for s in &similar {
                println!(
                    "{:>5.2}  #{:<5} {}",
                    s.similarity_score,
                    s.recipe.id,
                    s.recipe.title.as_deref().unwrap_or("(untitled)")
                );
            }
            Ok(0)
        }
    }
}

fn print_recipe(recipe: &Recipe) {
    println!(
        "#{} {}",
        recipe.id,
        recipe.title.as_deref().unwrap_or("(untitled)")
    );
    if let Some(description) = &recipe.description {
        println!("{description}");
    }
    if let Some(minutes) = recipe.cooking_time_minutes {
        println!("cooking time: {minutes} min");
    }
    if let Some(servings) = recipe.servings {
        println!("servings: {servings}");
    }
    if !recipe.tags.is_empty() {
        println!("tags: {}", recipe.tags.join(", "));
    }
}
