// src/server/handlers/recipes.rs
//! Recipe CRUD handlers
//!
//! Reads run two flat queries (recipes, ingredients) on one connection and
//! join them in memory; the create path verifies the bearer token, decodes
//! the multipart form, stores the optional image, then hands the payload to
//! the transactional writer. Error detail is logged, never echoed.

use crate::error::Error;
use crate::recipe::{self, IngredientInput, Recipe, RecipePayload};
use crate::server::{upload, ServerState};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::db::models::{IngredientRow, RecipeRow};

/// Map a crate error to its HTTP status and user-visible message
fn error_response(err: &Error) -> Response {
    let status = match err {
        Error::NotFound => StatusCode::NOT_FOUND,
        Error::Unauthorized => StatusCode::UNAUTHORIZED,
        Error::Forbidden => StatusCode::FORBIDDEN,
        Error::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Storage detail stays in the log
    let message = match err {
        Error::Database(_) | Error::Io(_) | Error::Json(_) => "Internal server error".to_string(),
        other => other.to_string(),
    };

    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

/// List all recipes with their ingredients
///
/// GET /api/recipes
pub async fn list_recipes(State(state): State<Arc<ServerState>>) -> Response {
    match fetch_all(&state) {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => {
            error!("Error fetching recipes: {}", e);
            error_response(&Error::ReadFailed)
        }
    }
}

fn fetch_all(state: &ServerState) -> crate::Result<Vec<Recipe>> {
    let conn = state.connect()?;
    let recipe_rows = RecipeRow::list_all(&conn)?;
    let ingredient_rows = IngredientRow::list_all(&conn)?;
    Ok(recipe::aggregate(recipe_rows, ingredient_rows))
}

/// Fetch a single recipe by id
///
/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> Response {
    match fetch_one(&state, id) {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(Error::NotFound) => error_response(&Error::NotFound),
        Err(e) => {
            error!("Error fetching recipe {}: {}", id, e);
            error_response(&Error::ReadFailed)
        }
    }
}

fn fetch_one(state: &ServerState, id: i64) -> crate::Result<Recipe> {
    let conn = state.connect()?;
    let recipe_row = RecipeRow::find_by_id(&conn, id)?;
    let ingredient_rows = IngredientRow::find_by_recipe(&conn, id)?;
    recipe::aggregate_one(recipe_row, ingredient_rows)
}

/// Create a recipe from a multipart form
///
/// POST /api/recipes
///
/// Fields: title, description, duration, instructions, ingredients (JSON
/// array of {name, amount}), optional image file. Requires a bearer token
/// accepted by the configured verifier.
pub async fn create_recipe(
    State(state): State<Arc<ServerState>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    multipart: Multipart,
) -> Response {
    // Missing token and rejected token are distinct outcomes
    let Some(TypedHeader(bearer)) = bearer else {
        return error_response(&Error::Unauthorized);
    };

    if let Err(e) = state.verifier.verify(bearer.token()).await {
        warn!("Token verification failed: {}", e);
        return error_response(&Error::Forbidden);
    }

    let (payload, image) = match read_form(multipart).await {
        Ok(parts) => parts,
        Err(e) => {
            warn!("Rejected create payload: {}", e);
            return error_response(&e);
        }
    };

    let image_url = match image {
        Some((original_name, bytes)) => {
            match upload::store_image(&state.config.image_dir, &original_name, &bytes) {
                Ok(url) => Some(url),
                Err(e) => {
                    error!("Error storing image: {}", e);
                    return error_response(&Error::WriteFailed);
                }
            }
        }
        None => None,
    };

    let result = state
        .connect()
        .and_then(|conn| recipe::create_recipe(&conn, payload, image_url));

    match result {
        Ok(recipe_id) => {
            info!("Created recipe {}", recipe_id);
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "message": "Recipe created",
                    "recipeId": recipe_id,
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error creating recipe: {}", e);
            error_response(&Error::WriteFailed)
        }
    }
}

/// Decode the multipart form into a payload plus optional image bytes
async fn read_form(
    mut multipart: Multipart,
) -> Result<(RecipePayload, Option<(String, Vec<u8>)>), Error> {
    let mut title = None;
    let mut description = None;
    let mut duration = None;
    let mut instructions = None;
    let mut ingredients: Vec<IngredientInput> = Vec::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidPayload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = Some(read_text(field).await?),
            "description" => description = Some(read_text(field).await?),
            "duration" => {
                let text = read_text(field).await?;
                duration = Some(text.parse::<i64>().map_err(|_| {
                    Error::InvalidPayload(format!("duration is not a number: '{}'", text))
                })?);
            }
            "instructions" => instructions = Some(read_text(field).await?),
            "ingredients" => {
                let text = read_text(field).await?;
                ingredients = serde_json::from_str(&text)
                    .map_err(|e| Error::InvalidPayload(format!("bad ingredients: {}", e)))?;
            }
            "image" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::InvalidPayload(e.to_string()))?;
                image = Some((original_name, bytes.to_vec()));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let payload = RecipePayload {
        title: require(title, "title")?,
        description: require(description, "description")?,
        duration: require(duration, "duration")?,
        instructions: require(instructions, "instructions")?,
        ingredients,
    };

    Ok((payload, image))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Error> {
    field
        .text()
        .await
        .map_err(|e| Error::InvalidPayload(e.to_string()))
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::InvalidPayload(format!("missing field: {}", field)))
}
