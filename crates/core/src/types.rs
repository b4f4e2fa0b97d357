/// Primary keys are MySQL `BIGINT UNSIGNED AUTO_INCREMENT`.
pub type DbId = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Owner id recorded on notes submitted without a session.
pub const ANONYMOUS_USER_ID: DbId = 0;
