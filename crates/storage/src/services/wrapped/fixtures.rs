use chrono::NaiveDate;

use crate::models::{Film, Meeting, Score};

pub(crate) fn film(title: &str) -> Film {
    Film {
        imdb_id: format!("tt-{}", title.to_lowercase().replace(' ', "-")),
        title: None,
        original_title: title.to_string(),
        year: "2019".to_string(),
        poster: format!("https://image.tmdb.org/t/p/w500/{}.jpg", title.len()),
        plot: String::new(),
        director: String::new(),
        country: None,
        runtime: None,
        original_language: None,
        revenue: None,
        tmdb_vote_average: None,
        genres: None,
    }
}

/// Meeting at 19:00 UTC on `date` (`YYYY-MM-DD`), scores given as `(clubber, text)`.
pub(crate) fn meeting(id: i32, date: &str, host: &str, film: Film, scores: &[(&str, &str)]) -> Meeting {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap()
        .and_utc();

    Meeting {
        id,
        date,
        host: host.to_string(),
        hidden: false,
        film,
        scores: scores
            .iter()
            .enumerate()
            .map(|(i, (clubber, score))| Score {
                id: id * 100 + i as i32,
                meeting_id: id,
                clubber: clubber.to_string(),
                score: score.to_string(),
            })
            .collect(),
    }
}
