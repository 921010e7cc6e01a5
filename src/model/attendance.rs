use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's attendance row for one calendar day. Sign-in and
/// sign-out stamps are local wall-clock times with second precision,
/// stored as `HH:MM:SS` text.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub sign_in: Option<String>,
    pub sign_out: Option<String>,
}
