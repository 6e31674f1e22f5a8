use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Accepts RFC 3339, a naive ISO date-time (read as UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Human-friendly age of a task, e.g. `3 hours ago` or `Jan 5, 2026`.
pub fn format_created(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(created) = created_at.and_then(parse_timestamp) else {
        return "N/A".to_string();
    };

    let elapsed = now - created;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 7 {
        ago(days, "day")
    } else {
        created.format("%b %-d, %Y").to_string()
    }
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 20, 12, 0, 0).unwrap()
    }

    fn created(offset: Duration) -> String {
        (now() - offset).to_rfc3339()
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b onclick="x('y')">Tom & Jerry</b>"#),
            "&lt;b onclick=&quot;x(&#039;y&#039;)&quot;&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn missing_or_invalid_dates_are_na() {
        assert_eq!(format_created(None, now()), "N/A");
        assert_eq!(format_created(Some(""), now()), "N/A");
        assert_eq!(format_created(Some("yesterday-ish"), now()), "N/A");
    }

    #[test]
    fn recent_and_future_dates_are_just_now() {
        assert_eq!(format_created(Some(&created(Duration::seconds(30))), now()), "Just now");
        assert_eq!(format_created(Some(&created(Duration::minutes(-5))), now()), "Just now");
    }

    #[test]
    fn relative_units_pluralise() {
        let cases = [
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::minutes(60), "1 hour ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::hours(24), "1 day ago"),
            (Duration::days(6), "6 days ago"),
        ];
        for (offset, expected) in cases {
            assert_eq!(format_created(Some(&created(offset)), now()), expected);
        }
    }

    #[test]
    fn week_old_dates_use_calendar_format() {
        assert_eq!(format_created(Some("2026-01-05T08:30:00"), now()), "Jan 5, 2026");
        assert_eq!(format_created(Some("2025-12-13"), now()), "Dec 13, 2025");
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let parsed = parse_timestamp("2026-01-20T10:59:00.123456").unwrap();
        let expected =
            Utc.with_ymd_and_hms(2026, 1, 20, 10, 59, 0).unwrap() + Duration::microseconds(123456);
        assert_eq!(parsed, expected);
        assert_eq!(format_created(Some("2026-01-20T10:59:00.123456"), now()), "1 hour ago");
    }

    #[test]
    fn partial_minutes_round_down() {
        assert_eq!(format_created(Some("2026-01-20T11:00:00.123456"), now()), "59 minutes ago");
    }
}
