use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{models::QuizBody, names, quiz, rejections::AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}

/// One quiz turn: pick a random question the client has not seen yet. An
/// exhausted pool answers with `question: null` so the client can end the
/// quiz gracefully.
async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest("malformed quiz body"))?;

    // Category id 0 and the "all" sentinel both mean no restriction.
    let category_filter = body.quiz_category.as_ref().and_then(|c| {
        let unrestricted = c.id == 0
            || c.kind
                .as_deref()
                .is_some_and(|kind| kind.eq_ignore_ascii_case(names::ALL_CATEGORIES));
        (!unrestricted).then_some(c.id)
    });

    let previous: HashSet<i64> = body.previous_questions.iter().copied().collect();
    let candidates = state.db.questions_for_quiz(category_filter).await?;

    let selected = quiz::select_next(candidates, &previous, &mut rand::thread_rng());
    let response = match selected {
        Some(question) => {
            let label = state.db.category(question.category).await?.label;
            json!({
                "success": true,
                "question": question,
                "category": label,
            })
        }
        None => json!({
            "success": true,
            "question": Value::Null,
            "category": Value::Null,
        }),
    };

    Ok(Json(response))
}
