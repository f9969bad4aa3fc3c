use std::collections::HashMap;

use crate::models::Meeting;

/// Parses a free-text score into a number.
///
/// Anything that is not a plain finite number (split ratings like `2 (8)`,
/// comments, `NaN`) yields `None` and is left out of every statistic.
pub fn parse_score(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N).
pub(crate) fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

pub(crate) fn meeting_values(meeting: &Meeting) -> Vec<f64> {
    meeting.numeric_scores().map(|(_, value)| value).collect()
}

/// Mean of a meeting's numeric scores; `None` when nobody gave a number.
pub(crate) fn meeting_mean(meeting: &Meeting) -> Option<f64> {
    mean(&meeting_values(meeting))
}

/// First candidate with the strictly greatest value.
pub(crate) fn highest<T>(candidates: impl IntoIterator<Item = (T, f64)>) -> Option<(T, f64)> {
    let mut best: Option<(T, f64)> = None;
    for (candidate, value) in candidates {
        if best.as_ref().is_none_or(|(_, current)| value > *current) {
            best = Some((candidate, value));
        }
    }
    best
}

/// First candidate with the strictly smallest value.
pub(crate) fn lowest<T>(candidates: impl IntoIterator<Item = (T, f64)>) -> Option<(T, f64)> {
    let mut best: Option<(T, f64)> = None;
    for (candidate, value) in candidates {
        if best.as_ref().is_none_or(|(_, current)| value < *current) {
            best = Some((candidate, value));
        }
    }
    best
}

/// Accumulators keyed by name, iterated in first-insertion order.
///
/// Iteration order decides ties between equal candidates, so it must not
/// depend on hashing.
pub(crate) struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> Tally<V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key) {
            Some(position) => *position,
            None => {
                self.entries.push((key.to_string(), V::default()));
                let position = self.entries.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_accepts_plain_numbers() {
        assert_eq!(parse_score("9"), Some(9.0));
        assert_eq!(parse_score(" 7.5 "), Some(7.5));
        assert_eq!(parse_score("-1"), Some(-1.0));
    }

    #[test]
    fn test_parse_score_rejects_free_text() {
        assert_eq!(parse_score("2 (8)"), None);
        assert_eq!(parse_score("not sure"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("NaN"), None);
        assert_eq!(parse_score("inf"), None);
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[9.0, 7.0]), Some(8.0));
        assert_eq!(population_std_dev(&[9.0, 7.0]), Some(1.0));
        assert_eq!(population_std_dev(&[5.0]), Some(0.0));

        let spread = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((spread - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let values = vec![("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 1.0)];
        assert_eq!(highest(values.clone()), Some(("b", 3.0)));
        assert_eq!(lowest(values), Some(("a", 1.0)));
        assert_eq!(highest(Vec::<(&str, f64)>::new()), None);
    }

    #[test]
    fn test_tally_keeps_insertion_order() {
        let mut tally: Tally<u32> = Tally::new();
        for key in ["zoe", "adam", "zoe", "mia", "adam", "zoe"] {
            *tally.entry(key) += 1;
        }

        let entries: Vec<(&str, u32)> = tally.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(entries, vec![("zoe", 3), ("adam", 2), ("mia", 1)]);
    }
}
