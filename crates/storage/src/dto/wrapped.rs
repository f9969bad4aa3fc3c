use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Film;

/// What kind of thing an award's `winner_name` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WinnerType {
    Film,
    Clubber,
}

/// Denormalized copy of the film an award points at, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AwardFilm {
    pub title: String,
    pub original_title: String,
    pub year: String,
    pub poster: String,
    pub imdb_id: String,
}

impl From<&Film> for AwardFilm {
    fn from(film: &Film) -> Self {
        Self {
            title: film.display_title().to_string(),
            original_title: film.original_title.clone(),
            year: film.year.clone(),
            poster: film.poster.clone(),
            imdb_id: film.imdb_id.clone(),
        }
    }
}

/// A single Wrapped superlative. Computed on request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Award {
    pub title: String,
    pub emoji: String,
    pub winner_name: String,
    pub winner_type: WinnerType,
    pub film: Option<AwardFilm>,
    /// Display-ready metric, e.g. `8.3`, `$45M` or `+1.2`
    pub stat_value: String,
    pub stat_label: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct WrappedQuery {
    /// Year to compute awards for; defaults to the current year
    #[validate(range(min = 1900, max = 2200, message = "year must be between 1900 and 2200"))]
    pub year: Option<i32>,
    /// Preview key that unlocks Wrapped outside December
    pub test: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WrappedResponse {
    pub is_coming_soon: bool,
    pub is_wrapped_active: bool,
    pub awards: Vec<Award>,
    pub year: i32,
}

impl WrappedResponse {
    pub fn coming_soon(year: i32) -> Self {
        Self {
            is_coming_soon: true,
            is_wrapped_active: false,
            awards: Vec::new(),
            year,
        }
    }

    pub fn active(year: i32, awards: Vec<Award>) -> Self {
        Self {
            is_coming_soon: false,
            is_wrapped_active: true,
            awards,
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WinnerType::Film).unwrap(), r#""film""#);
        assert_eq!(
            serde_json::to_string(&WinnerType::Clubber).unwrap(),
            r#""clubber""#
        );
    }

    #[test]
    fn test_query_year_range() {
        let query = WrappedQuery {
            year: Some(2024),
            test: None,
        };
        assert!(query.validate().is_ok());

        let query = WrappedQuery {
            year: Some(1850),
            test: None,
        };
        assert!(query.validate().is_err());

        let query = WrappedQuery {
            year: None,
            test: None,
        };
        assert!(query.validate().is_ok());
    }
}
