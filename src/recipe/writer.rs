// src/recipe/writer.rs

//! Transactional recipe creation
//!
//! A recipe header and its ingredients are inserted in a single
//! transaction: readers never observe a header without its ingredients.
//! The `Transaction` is owned by this function and rolls back on drop,
//! so every early-return error path releases the scope without an
//! explicit rollback call.

use crate::db::models::{IngredientRow, RecipeRow};
use crate::error::Result;
use crate::recipe::RecipePayload;
use rusqlite::Connection;
use tracing::debug;

/// Persist a recipe and its ingredients atomically.
///
/// Returns the generated recipe identifier. An empty ingredient list is
/// valid; the ingredient insert step is skipped entirely. On any failure
/// after the transaction opens, the whole write is rolled back and the
/// error propagates to the caller.
pub fn create_recipe(
    conn: &Connection,
    payload: RecipePayload,
    image_url: Option<String>,
) -> Result<i64> {
    let tx = conn.unchecked_transaction()?;

    let mut recipe = RecipeRow::new(
        payload.title,
        payload.description,
        payload.duration,
        image_url,
        payload.instructions,
    );
    let recipe_id = recipe.insert(&tx)?;

    for input in payload.ingredients {
        let mut row = IngredientRow::new(recipe_id, input.name, input.amount.into_text());
        row.insert(&tx)?;
    }

    tx.commit()?;
    debug!("Created recipe {}", recipe_id);

    Ok(recipe_id)
}
