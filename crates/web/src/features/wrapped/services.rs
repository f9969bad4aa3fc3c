use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;
use storage::{
    dto::wrapped::WrappedResponse,
    error::Result,
    services::wrapped::compute_wrapped_awards,
};

/// Day of December from which Wrapped is revealed.
const REVEAL_DAY: u32 = 15;

/// Whether Wrapped can be shown on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrappedWindow {
    /// Outside December
    Closed,
    /// Early December: the page exists but awards stay hidden
    ComingSoon,
    Active,
}

impl WrappedWindow {
    pub fn for_day(today: NaiveDate, preview: bool) -> Self {
        if preview {
            return Self::Active;
        }
        match (today.month(), today.day()) {
            (12, day) if day >= REVEAL_DAY => Self::Active,
            (12, _) => Self::ComingSoon,
            _ => Self::Closed,
        }
    }
}

/// Returns true when `provided` matches the configured preview key.
pub fn is_preview(configured: Option<&str>, provided: Option<&str>) -> bool {
    matches!((configured, provided), (Some(key), Some(given)) if key == given)
}

/// Build the Wrapped page payload, or `None` while the window is closed.
///
/// Awards are only loaded from the database when the window is active.
pub async fn load_wrapped(
    pool: &PgPool,
    window: WrappedWindow,
    year: i32,
) -> Result<Option<WrappedResponse>> {
    match window {
        WrappedWindow::Closed => Ok(None),
        WrappedWindow::ComingSoon => Ok(Some(WrappedResponse::coming_soon(year))),
        WrappedWindow::Active => {
            let awards = compute_wrapped_awards(pool, year).await?;
            tracing::info!("Serving {} wrapped awards for {}", awards.len(), year);
            Ok(Some(WrappedResponse::active(year, awards)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_closed_outside_december() {
        assert_eq!(WrappedWindow::for_day(day(1, 1), false), WrappedWindow::Closed);
        assert_eq!(WrappedWindow::for_day(day(11, 30), false), WrappedWindow::Closed);
    }

    #[test]
    fn test_coming_soon_in_early_december() {
        assert_eq!(WrappedWindow::for_day(day(12, 1), false), WrappedWindow::ComingSoon);
        assert_eq!(WrappedWindow::for_day(day(12, 14), false), WrappedWindow::ComingSoon);
    }

    #[test]
    fn test_active_from_mid_december() {
        assert_eq!(WrappedWindow::for_day(day(12, 15), false), WrappedWindow::Active);
        assert_eq!(WrappedWindow::for_day(day(12, 31), false), WrappedWindow::Active);
    }

    #[test]
    fn test_preview_always_active() {
        assert_eq!(WrappedWindow::for_day(day(6, 1), true), WrappedWindow::Active);
        assert_eq!(WrappedWindow::for_day(day(12, 3), true), WrappedWindow::Active);
    }

    #[test]
    fn test_preview_key_matching() {
        assert!(is_preview(Some("north-pole"), Some("north-pole")));
        assert!(!is_preview(Some("north-pole"), Some("south-pole")));
        assert!(!is_preview(Some("north-pole"), None));
        assert!(!is_preview(None, Some("north-pole")));
        assert!(!is_preview(None, None));
    }
}
