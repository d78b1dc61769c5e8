// src/db/models/recipe.rs

//! Recipe row model - the flat database shape of a recipe header

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// A recipe header row as stored in the `recipes` table, without its
/// ingredients. The nested shape is produced by the row aggregator.
#[derive(Debug, Clone)]
pub struct RecipeRow {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    /// Preparation time in minutes
    pub duration: i64,
    /// Relative path under the static image namespace, if an image exists
    pub image_url: Option<String>,
    pub instructions: String,
}

impl RecipeRow {
    /// Create a new RecipeRow that has not been persisted yet
    pub fn new(
        title: String,
        description: String,
        duration: i64,
        image_url: Option<String>,
        instructions: String,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            duration,
            image_url,
            instructions,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (title, description, duration, image_url, instructions)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &self.title,
                &self.description,
                &self.duration,
                &self.image_url,
                &self.instructions
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// List all recipe rows
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, duration, image_url, instructions
             FROM recipes ORDER BY id",
        )?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Find a recipe row by its identifier
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let recipe = conn
            .query_row(
                "SELECT id, title, description, duration, image_url, instructions
                 FROM recipes WHERE id = ?1",
                [id],
                Self::from_row,
            )
            .optional()?;

        Ok(recipe)
    }

    /// Delete a recipe by ID (ingredients cascade)
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Convert a database row to a RecipeRow
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            duration: row.get(3)?,
            image_url: row.get(4)?,
            instructions: row.get(5)?,
        })
    }
}
