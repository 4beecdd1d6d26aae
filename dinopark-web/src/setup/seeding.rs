use sqlx::Pool;
use sqlx::Postgres;
use std::fs;

/// Optional dev convenience: load fixture dinosaurs from a SQL file.
/// The seed file is expected to be idempotent (`ON CONFLICT DO NOTHING`).
/// Failures are logged and never abort startup.
pub async fn maybe_seed_dinosaurs(pool: &Pool<Postgres>, enabled: bool, seed_path: &str) {
    if !enabled {
        return;
    }

    let sql = match fs::read_to_string(seed_path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = seed_path, error = %e, "AUTO_SEED_DINOSAURS failed to read seed file");
            return;
        }
    };

    let statements = split_statements(&sql);
    if statements.is_empty() {
        tracing::warn!(path = seed_path, "AUTO_SEED_DINOSAURS: no statements found");
        return;
    }

    let mut applied = 0usize;
    for stmt in &statements {
        match sqlx::query(stmt).execute(pool).await {
            Ok(_) => applied += 1,
            Err(e) => {
                tracing::warn!(error = %e, statement = %stmt, "seed statement failed");
            }
        }
    }

    tracing::info!(path = seed_path, applied, total = statements.len(), "dinosaur seed applied");
}

/// Very simple splitter: plain SQL statements separated by ';', with
/// optional '--' line comments.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned = String::new();
    for line in sql.lines() {
        if line.trim_start().starts_with("--") {
            continue;
        }
        cleaned.push_str(line);
        cleaned.push('\n');
    }

    cleaned
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| format!("{};", s))
        .collect()
}
