// src/recipe/mod.rs

//! Recipe domain logic
//!
//! Two components live here:
//! - the row aggregator, which joins flat recipe and ingredient rows into
//!   nested recipe objects (pure, no I/O)
//! - the recipe writer, which persists a recipe and its ingredients in one
//!   transaction

mod aggregate;
mod writer;

pub use aggregate::{aggregate, aggregate_one};
pub use writer::create_recipe;

use serde::{Deserialize, Serialize};

/// A nested recipe as served over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Preparation time in minutes
    pub duration: i64,
    /// Null, or a path under the /images static namespace
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub instructions: String,
    /// Insertion order of the owning recipe's ingredients
    pub ingredients: Vec<Ingredient>,
}

/// A single ingredient of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub amount: String,
}

/// An ingredient as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    pub amount: Amount,
}

/// Free-form ingredient amount: clients send both `"200g"` and bare
/// numbers. Stored as text either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Amount {
    /// Normalize to the stored text form
    pub fn into_text(self) -> String {
        match self {
            Amount::Text(s) => s,
            Amount::Number(n) => {
                // Integral amounts print without a trailing ".0"
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

/// A validated create-recipe request, ready for the writer
#[derive(Debug, Clone, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub instructions: String,
    pub ingredients: Vec<IngredientInput>,
}
