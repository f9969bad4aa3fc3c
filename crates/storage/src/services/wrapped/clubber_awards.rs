use crate::dto::wrapped::{Award, AwardFilm, WinnerType};
use crate::models::Meeting;

use super::format::{format_average, format_deviation, format_signed};
use super::stats::{Tally, highest, lowest, meeting_mean};

/// Scores a clubber must have given to compete for a per-clubber award.
const MIN_SCORES_GIVEN: usize = 3;

#[derive(Default)]
struct ScorerTally<'a> {
    total: f64,
    count: usize,
    lowest: Option<(&'a Meeting, f64)>,
    highest: Option<(&'a Meeting, f64)>,
}

impl ScorerTally<'_> {
    fn average(&self) -> f64 {
        self.total / self.count as f64
    }
}

fn scorer_tallies(meetings: &[Meeting]) -> Tally<ScorerTally<'_>> {
    let mut tally: Tally<ScorerTally<'_>> = Tally::new();

    for meeting in meetings {
        for (clubber, value) in meeting.numeric_scores() {
            let entry = tally.entry(clubber);
            entry.total += value;
            entry.count += 1;
            if entry.lowest.is_none_or(|(_, lowest)| value < lowest) {
                entry.lowest = Some((meeting, value));
            }
            if entry.highest.is_none_or(|(_, highest)| value > highest) {
                entry.highest = Some((meeting, value));
            }
        }
    }

    tally
}

/// One award per clubber for the film they scored highest.
pub fn clubber_favourites(meetings: &[Meeting]) -> Vec<Award> {
    scorer_tallies(meetings)
        .iter()
        .filter_map(|(clubber, entry)| {
            let (meeting, score) = entry.highest?;
            let title = meeting.film.display_title();
            Some(Award {
                title: "Clubber Favourite".to_string(),
                emoji: "❤️".to_string(),
                winner_name: clubber.to_string(),
                winner_type: WinnerType::Clubber,
                film: Some(AwardFilm::from(&meeting.film)),
                stat_value: format_average(score),
                stat_label: "their score".to_string(),
                description: format!("{}'s top score of the year went to {}", clubber, title),
            })
        })
        .collect()
}

/// Clubber with the lowest average score given.
pub fn harshest_critic(meetings: &[Meeting]) -> Option<Award> {
    let tally = scorer_tallies(meetings);
    let ((clubber, entry), average) = lowest(
        tally
            .iter()
            .filter(|(_, entry)| entry.count >= MIN_SCORES_GIVEN)
            .map(|(clubber, entry)| ((clubber, entry), entry.average())),
    )?;
    let (meeting, _) = entry.lowest?;

    Some(Award {
        title: "Harshest Critic".to_string(),
        emoji: "😤".to_string(),
        winner_name: clubber.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_average(average),
        stat_label: "average score given".to_string(),
        description: format!(
            "{} was the toughest crowd, averaging {} across {} films",
            clubber,
            format_average(average),
            entry.count
        ),
    })
}

/// Clubber with the highest average score given.
pub fn most_generous_scorer(meetings: &[Meeting]) -> Option<Award> {
    let tally = scorer_tallies(meetings);
    let ((clubber, entry), average) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.count >= MIN_SCORES_GIVEN)
            .map(|(clubber, entry)| ((clubber, entry), entry.average())),
    )?;
    let (meeting, _) = entry.highest?;

    Some(Award {
        title: "Most Generous".to_string(),
        emoji: "🥰".to_string(),
        winner_name: clubber.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_average(average),
        stat_label: "average score given".to_string(),
        description: format!(
            "{} loved almost everything, averaging {} across {} films",
            clubber,
            format_average(average),
            entry.count
        ),
    })
}

#[derive(Default)]
struct TasteTally<'a> {
    total_deviation: f64,
    count: usize,
    closest: Option<(&'a Meeting, f64)>,
}

/// Clubber whose scores sit closest to each meeting's group average.
pub fn best_taste(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<TasteTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(group_mean) = meeting_mean(meeting) else {
            continue;
        };
        for (clubber, value) in meeting.numeric_scores() {
            let deviation = (value - group_mean).abs();
            let entry = tally.entry(clubber);
            entry.total_deviation += deviation;
            entry.count += 1;
            if entry.closest.is_none_or(|(_, closest)| deviation < closest) {
                entry.closest = Some((meeting, deviation));
            }
        }
    }

    let ((clubber, entry), average) = lowest(
        tally
            .iter()
            .filter(|(_, entry)| entry.count >= MIN_SCORES_GIVEN)
            .map(|(clubber, entry)| ((clubber, entry), entry.total_deviation / entry.count as f64)),
    )?;
    let (meeting, _) = entry.closest?;

    Some(Award {
        title: "Best Taste".to_string(),
        emoji: "🎯".to_string(),
        winner_name: clubber.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_deviation(average),
        stat_label: "average distance from the group score".to_string(),
        description: format!("{}'s scores landed closest to the club consensus", clubber),
    })
}

#[derive(Default)]
struct GemTally<'a> {
    total_difference: f64,
    count: usize,
    biggest: Option<(&'a Meeting, f64)>,
}

/// Clubber who rates films furthest above their external vote average.
///
/// Not awarded when even the best clubber sits at or below the external
/// consensus.
pub fn hidden_gem_hunter(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<GemTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(external) = meeting.film.known_vote_average() else {
            continue;
        };
        for (clubber, value) in meeting.numeric_scores() {
            let difference = value - external;
            let entry = tally.entry(clubber);
            entry.total_difference += difference;
            entry.count += 1;
            if entry.biggest.is_none_or(|(_, biggest)| difference > biggest) {
                entry.biggest = Some((meeting, difference));
            }
        }
    }

    let ((clubber, entry), average) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.count >= MIN_SCORES_GIVEN)
            .map(|(clubber, entry)| ((clubber, entry), entry.total_difference / entry.count as f64)),
    )?;
    if average <= 0.0 {
        return None;
    }
    let (meeting, _) = entry.biggest.filter(|(_, difference)| *difference > 0.0)?;

    Some(Award {
        title: "Hidden Gem Hunter".to_string(),
        emoji: "💎".to_string(),
        winner_name: clubber.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_signed(average),
        stat_label: "points above the TMDB rating".to_string(),
        description: format!(
            "{} found more to love than TMDB did, by {} points on average",
            clubber,
            format_signed(average)
        ),
    })
}
