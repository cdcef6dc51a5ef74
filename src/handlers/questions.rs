use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    models::{CreateQuestionBody, SearchBody},
    pagination,
    rejections::AppError,
    AppState,
};

use super::categories::category_map;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}

#[derive(Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    page: Option<usize>,
}

impl PageQuery {
    /// 1-based page number; absent or unparsable values fall back to page 1.
    pub(crate) fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Query strings arrive as text, and garbage values select the first page
/// instead of failing the request.
fn deserialize_lenient_page<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<usize>, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = Option<usize>;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("page number or numeric string")
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as usize))
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(usize::try_from(v).ok())
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.parse().ok())
        }
    }
    d.deserialize_any(Vis)
}

async fn list_questions(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let questions = state.db.questions().await?;
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state.db.categories().await?;
    let current = pagination::paginate(&questions, page.page());

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "totalQuestions": questions.len(),
        "categories": category_map(&categories),
        "currentCategory": Value::Null,
    })))
}

async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest("malformed question body"))?;

    if body.question.trim().is_empty() || body.answer.trim().is_empty() {
        return Err(AppError::Unprocessable("blank question or answer"));
    }

    let id = state
        .db
        .create_question(&body.question, &body.answer, body.category, body.difficulty)
        .await?;
    let total = state.db.questions_count().await?;

    Ok(Json(json!({
        "success": true,
        "questionAdded": id,
        "totalQuestions": total,
    })))
}

async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest("malformed search body"))?;

    let term = body
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::BadRequest("missing search term"))?;

    let questions = state.db.search_questions(term).await?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "totalQuestions": questions.len(),
    })))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.db.delete_question(question_id).await?;
    let total = state.db.questions_count().await?;

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
        "totalQuestions": total,
    })))
}
