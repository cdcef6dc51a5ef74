pub const QUESTIONS_PER_PAGE: usize = 10;

/// Sentinel `type` in a quiz category request meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES_URL: &str = "/categories";
pub const QUESTIONS_URL: &str = "/questions";
pub const SEARCH_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}
