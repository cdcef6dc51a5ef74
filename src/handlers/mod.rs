pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::rejections::AppError;

/// Fallback so unknown routes get the uniform JSON 404 body.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
