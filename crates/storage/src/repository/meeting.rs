use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::{Film, Meeting, Score};

#[derive(FromRow)]
struct MeetingRow {
    id: i32,
    date: DateTime<Utc>,
    host: String,
    hidden: bool,
    imdb_id: String,
    title: Option<String>,
    original_title: String,
    year: String,
    poster: String,
    plot: String,
    director: String,
    country: Option<String>,
    runtime: Option<i32>,
    original_language: Option<String>,
    revenue: Option<i64>,
    tmdb_vote_average: Option<f64>,
    genres: Option<String>,
}

impl MeetingRow {
    fn into_meeting(self, scores: Vec<Score>) -> Meeting {
        Meeting {
            id: self.id,
            date: self.date,
            host: self.host,
            hidden: self.hidden,
            film: Film {
                imdb_id: self.imdb_id,
                title: self.title,
                original_title: self.original_title,
                year: self.year,
                poster: self.poster,
                plot: self.plot,
                director: self.director,
                country: self.country,
                runtime: self.runtime,
                original_language: self.original_language,
                revenue: self.revenue,
                tmdb_vote_average: self.tmdb_vote_average,
                genres: self.genres,
            },
            scores,
        }
    }
}

/// Repository for meetings together with their film and scores
pub struct MeetingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeetingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List visible meetings with `start <= date < end`, oldest first.
    ///
    /// Scores keep their submission order so that downstream tie-breaks are
    /// reproducible.
    pub async fn list_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Meeting>> {
        let rows: Vec<MeetingRow> = sqlx::query_as(
            r#"
            SELECT m.id, m.date, m.host, m.hidden,
                   f.imdb_id, f.title, f.original_title, f.year, f.poster, f.plot,
                   f.director, f.country, f.runtime, f.original_language, f.revenue,
                   f.tmdb_vote_average, f.genres
            FROM meetings m
            INNER JOIN films f ON m.film_id = f.imdb_id
            WHERE m.date >= $1 AND m.date < $2 AND m.hidden = FALSE
            ORDER BY m.date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let meeting_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut scores_by_meeting = self.scores_for_meetings(&meeting_ids).await?;

        let meetings: Vec<Meeting> = rows
            .into_iter()
            .map(|row| {
                let scores = scores_by_meeting.remove(&row.id).unwrap_or_default();
                row.into_meeting(scores)
            })
            .collect();

        tracing::debug!(
            "Loaded {} meetings between {} and {}",
            meetings.len(),
            start,
            end
        );

        Ok(meetings)
    }

    async fn scores_for_meetings(&self, meeting_ids: &[i32]) -> Result<HashMap<i32, Vec<Score>>> {
        let scores: Vec<Score> = sqlx::query_as(
            r#"
            SELECT id, meeting_id, clubber, score
            FROM scores
            WHERE meeting_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(meeting_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<Score>> = HashMap::new();
        for score in scores {
            grouped.entry(score.meeting_id).or_default().push(score);
        }

        Ok(grouped)
    }
}
