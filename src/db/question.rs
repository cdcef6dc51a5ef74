use super::models::Question;
use super::{Db, DbError, DbResult};

impl Db {
    pub async fn questions(&self) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn question(&self, question_id: i64) -> DbResult<Question> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)
    }

    pub async fn questions_count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Questions in one category, ordered by question text.
    pub async fn questions_by_category(&self, category_id: i64) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY question ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match over the question text, in id order.
    /// `instr` is used instead of LIKE so `%` and `_` in the term stay literal.
    pub async fn search_questions(&self, term: &str) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE instr(lower(question), lower($1)) > 0
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn create_question(
        &self,
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db)
                if db.is_foreign_key_violation() || db.is_check_violation() =>
            {
                DbError::Constraint(db.message().to_string())
            }
            other => DbError::Sqlx(other),
        })?;

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Delete in a single statement; the affected row count decides between
    /// success and NotFound, so a concurrent delete cannot both succeed.
    pub async fn delete_question(&self, question_id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        tracing::info!("question deleted with id: {question_id}");
        Ok(())
    }

    /// Candidate pool for the quiz selector: one category's questions, or
    /// everything when unrestricted.
    pub async fn questions_for_quiz(&self, category: Option<i64>) -> DbResult<Vec<Question>> {
        match category {
            Some(category_id) => self.questions_by_category(category_id).await,
            None => self.questions().await,
        }
    }
}
