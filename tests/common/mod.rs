use trivia::db::Db;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(url).await.expect("failed to create test database")
}

pub async fn seed_questions(db: &Db, n: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..n {
        let id = db
            .create_question(
                &format!("Question {:02}?", i + 1),
                &format!("Answer {}", i + 1),
                category,
                3,
            )
            .await
            .expect("failed to seed question");
        ids.push(id);
    }
    ids
}
