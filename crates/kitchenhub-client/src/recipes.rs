//! # Recipes Client
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/recipes/{id}` | Recipe detail (404 → `None`) |
//! | GET    | `/recipes?mealType=` | Dashboard listing with meal-type filter |
//! | GET    | `/recipes/{id}/similar` | Similar recipes, server-scored |
//!
//! Similarity scores are computed server-side; this client only re-sorts
//! descending in case the server returns them unsorted. The sort is
//! stable, so server order is preserved for equal scores.

use serde::{Deserialize, Serialize};

use kitchenhub_core::{RecipeId, Session};

use crate::error::HubApiError;

/// Recipe difficulty as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// Meal type used for dashboard filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

impl MealType {
    /// Wire value for the `mealType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::Dessert => "DESSERT",
            Self::Snack => "SNACK",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Recipe record from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cooking_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub total_calories: Option<f64>,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A recipe paired with its server-computed similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub similarity_score: f64,
}

/// Client for recipe endpoints.
#[derive(Debug, Clone)]
pub struct RecipesClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl RecipesClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch a single recipe. Returns `None` on 404.
    ///
    /// Calls `GET {base}/recipes/{id}`.
    pub async fn get(
        &self,
        session: &Session,
        recipe_id: RecipeId,
    ) -> Result<Option<Recipe>, HubApiError> {
        let endpoint = format!("GET /recipes/{recipe_id}");
        let url = crate::join_url(&self.base_url, &format!("recipes/{recipe_id}"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.get(&url), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json()
            .await
            .map(Some)
            .map_err(|e| HubApiError::Deserialization {
                endpoint,
                source: e,
            })
    }

    /// List recipes, optionally filtered by meal type.
    ///
    /// Calls `GET {base}/recipes` or `GET {base}/recipes?mealType={type}`.
    pub async fn list(
        &self,
        session: &Session,
        meal_type: Option<MealType>,
    ) -> Result<Vec<Recipe>, HubApiError> {
        let endpoint = "GET /recipes".to_string();
        let url = crate::join_url(&self.base_url, "recipes");

        let resp = crate::retry::retry_send(|| {
            let mut rb = self.http.get(&url);
            if let Some(meal) = meal_type {
                rb = rb.query(&[("mealType", meal.as_str())]);
            }
            crate::authorize(rb, session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Fetch recipes similar to the given one, sorted by descending
    /// similarity score.
    ///
    /// Calls `GET {base}/recipes/{id}/similar`.
    pub async fn similar(
        &self,
        session: &Session,
        recipe_id: RecipeId,
    ) -> Result<Vec<SimilarRecipe>, HubApiError> {
        let endpoint = format!("GET /recipes/{recipe_id}/similar");
        let url = crate::join_url(&self.base_url, &format!("recipes/{recipe_id}/similar"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.get(&url), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        let mut recipes: Vec<SimilarRecipe> =
            resp.json().await.map_err(|e| HubApiError::Deserialization {
                endpoint,
                source: e,
            })?;

        // Stable sort: equal scores keep server order.
        recipes.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(recipes)
    }
}
