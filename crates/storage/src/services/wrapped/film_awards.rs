use crate::dto::wrapped::{Award, AwardFilm, WinnerType};
use crate::models::Meeting;

use super::format::{format_average, format_deviation};
use super::stats::{Tally, highest, meeting_mean, meeting_values, population_std_dev};

const MIN_CONTROVERSIAL_SCORES: usize = 2;
const MIN_GENRE_FILMS: usize = 2;

/// Film with the highest average score.
pub fn best_film(meetings: &[Meeting]) -> Option<Award> {
    let (meeting, average) = highest(
        meetings
            .iter()
            .filter_map(|meeting| meeting_mean(meeting).map(|average| (meeting, average))),
    )?;
    let title = meeting.film.display_title();

    Some(Award {
        title: "Best Film".to_string(),
        emoji: "🏆".to_string(),
        winner_name: title.to_string(),
        winner_type: WinnerType::Film,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_average(average),
        stat_label: "average score".to_string(),
        description: format!("{} was the club's highest rated film of the year", title),
    })
}

/// Film whose scores are the most spread out.
pub fn most_controversial_film(meetings: &[Meeting]) -> Option<Award> {
    let (meeting, spread) = highest(meetings.iter().filter_map(|meeting| {
        let values = meeting_values(meeting);
        if values.len() < MIN_CONTROVERSIAL_SCORES {
            return None;
        }
        population_std_dev(&values).map(|spread| (meeting, spread))
    }))?;
    let title = meeting.film.display_title();

    Some(Award {
        title: "Most Controversial".to_string(),
        emoji: "🔥".to_string(),
        winner_name: title.to_string(),
        winner_type: WinnerType::Film,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_deviation(spread),
        stat_label: "score standard deviation".to_string(),
        description: format!("{} split the room more than any other film", title),
    })
}

#[derive(Default)]
struct GenreTally<'a> {
    total: f64,
    films: usize,
    best: Option<(&'a Meeting, f64)>,
}

/// Genre whose films scored best on average.
pub fn genre_champion(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<GenreTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(average) = meeting_mean(meeting) else {
            continue;
        };
        for genre in meeting.film.genre_names() {
            let entry = tally.entry(&genre);
            entry.total += average;
            entry.films += 1;
            if entry.best.is_none_or(|(_, best)| average > best) {
                entry.best = Some((meeting, average));
            }
        }
    }

    let ((genre, entry), average) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.films >= MIN_GENRE_FILMS)
            .map(|(genre, entry)| ((genre, entry), entry.total / entry.films as f64)),
    )?;
    let (best_meeting, _) = entry.best?;

    Some(Award {
        title: "Genre Champion".to_string(),
        emoji: "🎭".to_string(),
        winner_name: genre.to_string(),
        winner_type: WinnerType::Film,
        film: Some(AwardFilm::from(&best_meeting.film)),
        stat_value: format_average(average),
        stat_label: "average score".to_string(),
        description: format!(
            "{} films averaged {} across {} meetings",
            genre,
            format_average(average),
            entry.films
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wrapped::fixtures::{film, meeting};

    fn with_genres(title: &str, genres: &str) -> crate::models::Film {
        let mut film = film(title);
        film.genres = Some(genres.to_string());
        film
    }

    #[test]
    fn test_best_film_picks_highest_mean() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "7"), ("bob", "8")]),
            meeting(2, "2024-02-10", "sam", film("Alien"), &[("alice", "9"), ("bob", "8")]),
            meeting(3, "2024-03-10", "sam", film("Cats"), &[("alice", "meh")]),
        ];

        let award = best_film(&meetings).unwrap();
        assert_eq!(award.winner_name, "Alien");
        assert_eq!(award.winner_type, WinnerType::Film);
        assert_eq!(award.stat_value, "8.5");
        assert_eq!(award.film.unwrap().original_title, "Alien");
    }

    #[test]
    fn test_best_film_ties_go_to_earliest_meeting() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "8")]),
            meeting(2, "2024-02-10", "sam", film("Alien"), &[("alice", "8")]),
        ];

        assert_eq!(best_film(&meetings).unwrap().winner_name, "Heat");
    }

    #[test]
    fn test_best_film_needs_a_numeric_score() {
        let meetings = vec![meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "2 (8)")])];
        assert!(best_film(&meetings).is_none());
    }

    #[test]
    fn test_controversial_skips_single_score_meetings() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "1"), ("bob", "ten")]),
            meeting(2, "2024-02-10", "sam", film("Alien"), &[("alice", "10")]),
        ];
        assert!(most_controversial_film(&meetings).is_none());
    }

    #[test]
    fn test_controversial_uses_population_std_dev() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "7"), ("bob", "8")]),
            meeting(2, "2024-02-10", "sam", film("Mother!"), &[("alice", "1"), ("bob", "9")]),
        ];

        let award = most_controversial_film(&meetings).unwrap();
        assert_eq!(award.winner_name, "Mother!");
        assert_eq!(award.stat_value, "4.00");
    }

    #[test]
    fn test_genre_champion_requires_two_films() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", with_genres("Heat", r#"["Crime","Drama"]"#), &[("alice", "9")]),
            meeting(2, "2024-02-10", "sam", with_genres("Alien", r#"["Horror"]"#), &[("alice", "10")]),
            meeting(3, "2024-03-10", "sam", with_genres("Seven", r#"["Crime"]"#), &[("alice", "6")]),
            meeting(4, "2024-04-10", "sam", with_genres("Up", "not json"), &[("alice", "10")]),
        ];

        let award = genre_champion(&meetings).unwrap();
        assert_eq!(award.winner_name, "Crime");
        assert_eq!(award.stat_value, "7.5");
        assert_eq!(award.film.unwrap().title, "Heat");
    }

    #[test]
    fn test_genre_champion_absent_without_genres() {
        let meetings = vec![
            meeting(1, "2024-01-10", "sam", film("Heat"), &[("alice", "9")]),
            meeting(2, "2024-02-10", "sam", film("Alien"), &[("alice", "10")]),
        ];
        assert!(genre_champion(&meetings).is_none());
    }
}
