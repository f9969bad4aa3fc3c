use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Film, Score};

/// A club gathering with its film and all submitted scores.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meeting {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub host: String,
    pub hidden: bool,
    pub film: Film,
    pub scores: Vec<Score>,
}

impl Meeting {
    /// Scores that parse as numbers, in stored order, paired with their clubber.
    pub fn numeric_scores(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores
            .iter()
            .filter_map(|score| score.value().map(|value| (score.clubber.as_str(), value)))
    }
}
