// src/db/models/mod.rs

//! Data models for larder database entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating and reading records.

mod ingredient;
mod recipe;

pub use ingredient::IngredientRow;
pub use recipe::RecipeRow;
