// src/lib.rs

//! Larder Recipe Backend
//!
//! Minimal CRUD backend exposing recipes and their ingredients over HTTP,
//! backed by SQLite, with image uploads and bearer-token protected writes.
//!
//! # Architecture
//!
//! - Database-first: recipes and ingredients live in SQLite, ingredients
//!   owned by exactly one recipe (cascade on delete)
//! - Row aggregation: read paths run two flat queries and join them in
//!   memory into nested recipe objects
//! - Atomic writes: a recipe and its ingredients are created in one
//!   transaction; readers never observe a partial recipe
//! - Token verification is delegated to an external verifier behind a trait

pub mod db;
mod error;
pub mod recipe;
pub mod server;

pub use error::{Error, Result};
pub use recipe::{
    aggregate, aggregate_one, create_recipe, Amount, Ingredient, IngredientInput, Recipe,
    RecipePayload,
};
pub use server::{run_server, ServerConfig, ServerState};
