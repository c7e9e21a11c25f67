// One row per activity; the roster travels as a JSON array column so a
// single UPDATE can mutate it atomically.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: String, // JSON array of emails, in signup order
}
