// src/recipe/aggregate.rs

//! Row aggregation - joining flat ingredient rows onto their owning
//! recipe rows to form the nested API representation
//!
//! Pure and deterministic: no I/O, no mutation of the inputs beyond
//! consuming them. Ingredient rows are grouped by owning recipe id up
//! front, so a full aggregation is O(R + I) rather than the naive
//! per-recipe filter.

use crate::db::models::{IngredientRow, RecipeRow};
use crate::error::{Error, Result};
use crate::recipe::{Ingredient, Recipe};
use std::collections::HashMap;

/// Join flat recipe and ingredient rows into nested recipes.
///
/// Returns one `Recipe` per recipe row, each carrying exactly the
/// ingredients whose `recipe_id` matches, in their original row order.
/// Recipes with no matching ingredients get an empty list. Referential
/// correctness is assumed: no ingredient row is expected to match more
/// than one recipe.
pub fn aggregate(recipe_rows: Vec<RecipeRow>, ingredient_rows: Vec<IngredientRow>) -> Vec<Recipe> {
    let mut by_recipe: HashMap<i64, Vec<Ingredient>> = HashMap::new();
    for row in ingredient_rows {
        by_recipe
            .entry(row.recipe_id)
            .or_default()
            .push(Ingredient {
                id: row.id.unwrap_or_default(),
                name: row.name,
                amount: row.amount,
            });
    }

    recipe_rows
        .into_iter()
        .map(|row| {
            let id = row.id.unwrap_or_default();
            Recipe {
                id,
                title: row.title,
                description: row.description,
                duration: row.duration,
                image_url: row.image_url,
                instructions: row.instructions,
                ingredients: by_recipe.remove(&id).unwrap_or_default(),
            }
        })
        .collect()
}

/// Single-recipe variant of [`aggregate`].
///
/// Fails with `NotFound` when the upstream lookup returned no row.
pub fn aggregate_one(
    recipe_row: Option<RecipeRow>,
    ingredient_rows: Vec<IngredientRow>,
) -> Result<Recipe> {
    let row = recipe_row.ok_or(Error::NotFound)?;
    let mut recipes = aggregate(vec![row], ingredient_rows);
    // aggregate returns exactly one recipe per input row
    Ok(recipes.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_row(id: i64, title: &str) -> RecipeRow {
        RecipeRow {
            id: Some(id),
            title: title.to_string(),
            description: "desc".to_string(),
            duration: 15,
            image_url: None,
            instructions: "do it".to_string(),
        }
    }

    fn ingredient_row(id: i64, recipe_id: i64, name: &str) -> IngredientRow {
        IngredientRow {
            id: Some(id),
            recipe_id,
            name: name.to_string(),
            amount: "1".to_string(),
        }
    }

    #[test]
    fn test_ingredients_partition_by_recipe() {
        let recipes = vec![recipe_row(1, "Pasta"), recipe_row(2, "Salad")];
        let ingredients = vec![
            ingredient_row(10, 1, "Noodles"),
            ingredient_row(11, 2, "Lettuce"),
            ingredient_row(12, 1, "Sauce"),
        ];

        let result = aggregate(recipes, ingredients);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].ingredients.len(), 2);
        assert_eq!(result[0].ingredients[0].name, "Noodles");
        assert_eq!(result[0].ingredients[1].name, "Sauce");
        assert_eq!(result[1].ingredients.len(), 1);
        assert_eq!(result[1].ingredients[0].name, "Lettuce");
    }

    #[test]
    fn test_recipe_without_ingredients_gets_empty_list() {
        let recipes = vec![recipe_row(1, "Water")];
        let ingredients = vec![ingredient_row(10, 99, "Unrelated")];

        let result = aggregate(recipes, ingredients);

        assert_eq!(result.len(), 1);
        assert!(result[0].ingredients.is_empty());
    }

    #[test]
    fn test_empty_recipe_set_yields_empty_output() {
        let ingredients = vec![ingredient_row(10, 1, "Orphaned")];
        assert!(aggregate(Vec::new(), ingredients).is_empty());
    }

    #[test]
    fn test_ingredient_order_is_preserved() {
        let recipes = vec![recipe_row(1, "Cake")];
        let ingredients = vec![
            ingredient_row(30, 1, "Flour"),
            ingredient_row(31, 1, "Sugar"),
            ingredient_row(32, 1, "Eggs"),
        ];

        let result = aggregate(recipes, ingredients);
        let names: Vec<_> = result[0].ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Flour", "Sugar", "Eggs"]);
    }

    #[test]
    fn test_aggregate_one_not_found() {
        let err = aggregate_one(None, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn test_aggregate_one_filters_to_owner() {
        let ingredients = vec![
            ingredient_row(10, 1, "Mine"),
            ingredient_row(11, 2, "Not mine"),
        ];

        let recipe = aggregate_one(Some(recipe_row(1, "Pasta")), ingredients).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "Mine");
    }
}
