//! Year-end "Wrapped" awards.
//!
//! Every award is a pure function over the visible meetings of one calendar
//! year. Awards that lack enough data are simply left out, so a quiet year
//! produces fewer awards rather than an error.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;

use crate::dto::wrapped::Award;
use crate::error::Result;
use crate::models::Meeting;
use crate::repository::meeting::MeetingRepository;

mod clubber_awards;
mod film_awards;
pub mod format;
mod host_awards;
mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

pub use clubber_awards::{
    best_taste, clubber_favourites, harshest_critic, hidden_gem_hunter, most_generous_scorer,
};
pub use film_awards::{best_film, genre_champion, most_controversial_film};
pub use host_awards::{best_host, box_office_boss, marathon_runner, world_cinema};
pub use stats::parse_score;

/// Half-open UTC bounds `[year-01-01, (year+1)-01-01)`.
pub fn year_bounds(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let end = Utc
        .with_ymd_and_hms(year.checked_add(1)?, 1, 1, 0, 0, 0)
        .single()?;
    Some((start, end))
}

/// Visible meetings dated within `year`, oldest first.
pub fn meetings_in_year(meetings: Vec<Meeting>, year: i32) -> Vec<Meeting> {
    let Some((start, end)) = year_bounds(year) else {
        return Vec::new();
    };

    let mut selected: Vec<Meeting> = meetings
        .into_iter()
        .filter(|meeting| !meeting.hidden && meeting.date >= start && meeting.date < end)
        .collect();
    // stable, so same-date input order is kept
    selected.sort_by_key(|meeting| meeting.date);
    selected
}

/// Computes every award for `year` in presentation order.
///
/// The single-winner awards come first, followed by Best Film and then one
/// favourite per clubber.
pub fn get_all_wrapped_awards(year: i32, meetings: Vec<Meeting>) -> Vec<Award> {
    let meetings = meetings_in_year(meetings, year);

    let headline = [
        best_host(&meetings),
        most_controversial_film(&meetings),
        harshest_critic(&meetings),
        most_generous_scorer(&meetings),
        best_taste(&meetings),
        genre_champion(&meetings),
        marathon_runner(&meetings),
        world_cinema(&meetings),
        box_office_boss(&meetings),
        hidden_gem_hunter(&meetings),
        best_film(&meetings),
    ];

    let mut awards: Vec<Award> = headline.into_iter().flatten().collect();
    awards.extend(clubber_favourites(&meetings));

    tracing::debug!(
        "Computed {} wrapped awards for {} from {} meetings",
        awards.len(),
        year,
        meetings.len()
    );

    awards
}

/// Loads the year's meetings and computes its awards.
pub async fn compute_wrapped_awards(pool: &PgPool, year: i32) -> Result<Vec<Award>> {
    let Some((start, end)) = year_bounds(year) else {
        return Ok(Vec::new());
    };

    let repo = MeetingRepository::new(pool);
    let meetings = repo.list_in_range(start, end).await?;

    Ok(get_all_wrapped_awards(year, meetings))
}
