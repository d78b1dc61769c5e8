// src/db/models/ingredient.rs

//! Ingredient row model - name/amount pairs owned by one recipe

use crate::error::Result;
use rusqlite::{params, Connection, Row};

/// An ingredient row as stored in the `ingredients` table
#[derive(Debug, Clone)]
pub struct IngredientRow {
    pub id: Option<i64>,
    pub recipe_id: i64,
    pub name: String,
    /// Free-form: the original data mixes "200g", "1 jar" and bare numbers
    pub amount: String,
}

impl IngredientRow {
    /// Create a new IngredientRow that has not been persisted yet
    pub fn new(recipe_id: i64, name: String, amount: String) -> Self {
        Self {
            id: None,
            recipe_id,
            name,
            amount,
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (recipe_id, name, amount) VALUES (?1, ?2, ?3)",
            params![&self.recipe_id, &self.name, &self.amount],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// List all ingredient rows in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, name, amount FROM ingredients ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Find all ingredients for a recipe, in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, name, amount FROM ingredients
             WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Convert a database row to an IngredientRow
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: row.get(1)?,
            name: row.get(2)?,
            amount: row.get(3)?,
        })
    }
}
