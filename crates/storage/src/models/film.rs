use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A film as stored in the club catalogue.
///
/// The enrichment fields (`runtime` through `genres`) are only present for
/// films that went through the TMDB refresh, so every consumer must cope
/// with them being absent on a per-film basis.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Film {
    pub imdb_id: String,
    pub title: Option<String>,
    pub original_title: String,
    pub year: String,
    pub poster: String,
    pub plot: String,
    pub director: String,
    pub country: Option<String>,
    pub runtime: Option<i32>,
    pub original_language: Option<String>,
    pub revenue: Option<i64>,
    pub tmdb_vote_average: Option<f64>,
    /// JSON array of genre names
    pub genres: Option<String>,
}

impl Film {
    /// Title shown to clubbers, falling back to the original title.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.original_title,
        }
    }

    /// Runtime in minutes, if known. Zero is how enrichment spells "unknown".
    pub fn known_runtime(&self) -> Option<i32> {
        self.runtime.filter(|runtime| *runtime > 0)
    }

    /// Revenue in dollars, if known. Zero is how enrichment spells "unknown".
    pub fn known_revenue(&self) -> Option<i64> {
        self.revenue.filter(|revenue| *revenue > 0)
    }

    /// External vote average, if the film has any votes. Zero is TMDB's "no votes".
    pub fn known_vote_average(&self) -> Option<f64> {
        self.tmdb_vote_average.filter(|average| *average > 0.0)
    }

    /// Returns true when the original language is known and is not English.
    pub fn is_non_english(&self) -> bool {
        self.original_language
            .as_deref()
            .is_some_and(|language| !language.is_empty() && language != "en")
    }

    /// Decodes the stored genre list, deduplicated and in stored order.
    ///
    /// A genre column that fails to decode counts as "no genres".
    pub fn genre_names(&self) -> Vec<String> {
        let Some(raw) = self.genres.as_deref() else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(names) => {
                let mut unique: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    if !unique.contains(&name) {
                        unique.push(name);
                    }
                }
                unique
            }
            Err(e) => {
                tracing::warn!(
                    imdb_id = %self.imdb_id,
                    "Ignoring undecodable genre list: {}",
                    e
                );
                Vec::new()
            }
        }
    }
}
