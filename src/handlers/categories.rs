use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{db::Category, pagination, rejections::AppError, AppState};

use super::questions::PageQuery;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(category_questions))
}

/// id -> label map, serialized as a JSON object keyed by category id.
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state.db.categories().await?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
        "totalCategories": categories.len(),
    })))
}

async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let category = state.db.category(category_id).await?;
    let questions = state.db.questions_by_category(category_id).await?;
    let current = pagination::paginate(&questions, page.page());

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "totalQuestions": questions.len(),
        "currentCategory": category.label,
    })))
}
