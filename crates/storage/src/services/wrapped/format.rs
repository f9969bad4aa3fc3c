//! Display formatting for award statistics. Every `stat_value` is built here.

/// One decimal place, for score averages: `8.3`.
pub fn format_average(value: f64) -> String {
    format!("{:.1}", value)
}

/// Two decimal places, for deviation-based stats: `0.42`.
pub fn format_deviation(value: f64) -> String {
    format!("{:.2}", value)
}

/// Signed with one decimal place: `+1.2`.
pub fn format_signed(value: f64) -> String {
    format!("{:+.1}", value)
}

pub fn format_count(count: usize) -> String {
    count.to_string()
}

/// Minutes rendered as `3h 0m`.
pub fn format_runtime(minutes: f64) -> String {
    let total = minutes.round() as i64;
    format!("{}h {}m", total / 60, total % 60)
}

/// Abbreviated dollars: `$1.2B`, `$45M`, or the exact amount below a million.
pub fn format_revenue(revenue: i64) -> String {
    // unit is chosen on rounded millions, so 999.6M is shown in billions
    let millions = (revenue as f64 / 1_000_000.0).round();
    if millions >= 1_000.0 {
        format!("${:.1}B", revenue as f64 / 1_000_000_000.0)
    } else if revenue >= 1_000_000 {
        format!("${:.0}M", millions)
    } else {
        format!("${}", group_thousands(revenue))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
