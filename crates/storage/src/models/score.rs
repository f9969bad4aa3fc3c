use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One clubber's rating of the film shown at a meeting.
///
/// The score is free text on purpose: clubbers sometimes submit split
/// ratings such as `2 (8)`. Only scores that parse as a number take part in
/// statistics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub id: i32,
    pub meeting_id: i32,
    pub clubber: String,
    pub score: String,
}

impl Score {
    /// Numeric value of this score, or `None` when the text is not a number.
    pub fn value(&self) -> Option<f64> {
        crate::services::wrapped::parse_score(&self.score)
    }
}
