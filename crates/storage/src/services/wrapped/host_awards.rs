use crate::dto::wrapped::{Award, AwardFilm, WinnerType};
use crate::models::Meeting;

use super::format::{format_average, format_count, format_revenue, format_runtime};
use super::stats::{Tally, highest, meeting_mean};

const MIN_RUNTIME_PICKS: usize = 2;
const MIN_REVENUE_PICKS: usize = 2;

#[derive(Default)]
struct HostTally<'a> {
    total_of_means: f64,
    meetings: usize,
    best: Option<(&'a Meeting, f64)>,
}

/// Host whose picks scored best, as an average of per-meeting averages.
pub fn best_host(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<HostTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(average) = meeting_mean(meeting) else {
            continue;
        };
        let entry = tally.entry(&meeting.host);
        entry.total_of_means += average;
        entry.meetings += 1;
        if entry.best.is_none_or(|(_, best)| average > best) {
            entry.best = Some((meeting, average));
        }
    }

    let ((host, entry), average) = highest(
        tally
            .iter()
            .map(|(host, entry)| ((host, entry), entry.total_of_means / entry.meetings as f64)),
    )?;
    let (meeting, _) = entry.best?;

    Some(Award {
        title: "Best Host".to_string(),
        emoji: "🎬".to_string(),
        winner_name: host.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_average(average),
        stat_label: "average score of their picks".to_string(),
        description: format!(
            "{}'s picks averaged {} across {} meetings",
            host,
            format_average(average),
            entry.meetings
        ),
    })
}

#[derive(Default)]
struct RuntimeTally<'a> {
    total_minutes: i64,
    picks: usize,
    longest: Option<(&'a Meeting, i32)>,
}

/// Host who picked the longest films on average.
pub fn marathon_runner(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<RuntimeTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(runtime) = meeting.film.known_runtime() else {
            continue;
        };
        let entry = tally.entry(&meeting.host);
        entry.total_minutes += i64::from(runtime);
        entry.picks += 1;
        if entry.longest.is_none_or(|(_, longest)| runtime > longest) {
            entry.longest = Some((meeting, runtime));
        }
    }

    let ((host, entry), average) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.picks >= MIN_RUNTIME_PICKS)
            .map(|(host, entry)| ((host, entry), entry.total_minutes as f64 / entry.picks as f64)),
    )?;
    let (meeting, _) = entry.longest?;

    Some(Award {
        title: "Marathon Runner".to_string(),
        emoji: "🏃".to_string(),
        winner_name: host.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_runtime(average),
        stat_label: "average runtime".to_string(),
        description: format!(
            "{}'s picks ran {} on average",
            host,
            format_runtime(average)
        ),
    })
}

#[derive(Default)]
struct LanguageTally<'a> {
    picks: usize,
    first: Option<&'a Meeting>,
    best_scored: Option<(&'a Meeting, f64)>,
}

/// Host with the most picks not originally in English.
pub fn world_cinema(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<LanguageTally<'_>> = Tally::new();

    for meeting in meetings {
        // every host gets a slot on first appearance so ties follow hosting order
        let entry = tally.entry(&meeting.host);
        if !meeting.film.is_non_english() {
            continue;
        }
        entry.picks += 1;
        entry.first.get_or_insert(meeting);
        if let Some(average) = meeting_mean(meeting)
            && entry.best_scored.is_none_or(|(_, best)| average > best)
        {
            entry.best_scored = Some((meeting, average));
        }
    }

    let ((host, entry), _) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.picks >= 1)
            .map(|(host, entry)| ((host, entry), entry.picks as f64)),
    )?;
    let meeting = entry
        .best_scored
        .map(|(meeting, _)| meeting)
        .or(entry.first)?;

    Some(Award {
        title: "World Cinema".to_string(),
        emoji: "🌍".to_string(),
        winner_name: host.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_count(entry.picks),
        stat_label: "non-English picks".to_string(),
        description: format!(
            "{} took the club around the world with {} non-English picks",
            host, entry.picks
        ),
    })
}

#[derive(Default)]
struct RevenueTally<'a> {
    total: i64,
    picks: usize,
    biggest: Option<(&'a Meeting, i64)>,
}

/// Host whose picks grossed the most in total.
pub fn box_office_boss(meetings: &[Meeting]) -> Option<Award> {
    let mut tally: Tally<RevenueTally<'_>> = Tally::new();

    for meeting in meetings {
        let Some(revenue) = meeting.film.known_revenue() else {
            continue;
        };
        let entry = tally.entry(&meeting.host);
        entry.total = entry.total.saturating_add(revenue);
        entry.picks += 1;
        if entry.biggest.is_none_or(|(_, biggest)| revenue > biggest) {
            entry.biggest = Some((meeting, revenue));
        }
    }

    let ((host, entry), _) = highest(
        tally
            .iter()
            .filter(|(_, entry)| entry.picks >= MIN_REVENUE_PICKS)
            .map(|(host, entry)| ((host, entry), entry.total as f64)),
    )?;
    let (meeting, _) = entry.biggest?;

    Some(Award {
        title: "Box Office Boss".to_string(),
        emoji: "💰".to_string(),
        winner_name: host.to_string(),
        winner_type: WinnerType::Clubber,
        film: Some(AwardFilm::from(&meeting.film)),
        stat_value: format_revenue(entry.total),
        stat_label: "combined box office".to_string(),
        description: format!(
            "{}'s picks grossed {} between them",
            host,
            format_revenue(entry.total)
        ),
    })
}
