//! Download progress and time formatting.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a byte progress bar for a download.
///
/// With an unknown size the bar degrades to a spinner showing the bytes
/// received so far.
pub fn download_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:30.magenta/dim} {bytes}/{total_bytes} {bytes_per_sec} {eta}")
                    .unwrap()
                    .progress_chars("█░ "),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner:.magenta} {bytes} {bytes_per_sec}")
                    .unwrap(),
            );
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        }
    }
}

/// Format a byte count for display (binary units).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a timestamp as a relative time string (e.g., "2 minutes ago").
pub fn format_relative_time(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let seconds = now.signed_duration_since(timestamp).num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return if minutes == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", minutes)
        };
    }

    let hours = minutes / 60;
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = hours / 24;
    if days < 30 {
        return if days == 1 {
            "yesterday".to_string()
        } else {
            format!("{} days ago", days)
        };
    }

    let months = days / 30;
    if months < 12 {
        return if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }

    let years = months / 12;
    if years == 1 {
        "1 year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_with_known_length() {
        let bar = download_bar(Some(2048));
        assert_eq!(bar.length(), Some(2048));
        bar.finish_and_clear();
    }

    #[test]
    fn bar_with_unknown_length() {
        let bar = download_bar(None);
        assert_eq!(bar.length(), None);
        bar.finish_and_clear();
    }

    #[test]
    fn bytes_formatting() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(60 * 1024 * 1024), "60.0 MiB");
    }

    #[test]
    fn relative_time_just_now() {
        assert_eq!(format_relative_time(chrono::Utc::now()), "just now");
    }

    #[test]
    fn relative_time_minutes() {
        let ts = chrono::Utc::now() - chrono::Duration::minutes(15);
        assert_eq!(format_relative_time(ts), "15 minutes ago");
    }

    #[test]
    fn relative_time_yesterday() {
        let ts = chrono::Utc::now() - chrono::Duration::days(1);
        assert_eq!(format_relative_time(ts), "yesterday");
    }

    #[test]
    fn relative_time_months() {
        let ts = chrono::Utc::now() - chrono::Duration::days(90);
        assert_eq!(format_relative_time(ts), "3 months ago");
    }

    #[test]
    fn relative_time_future_shows_just_now() {
        let ts = chrono::Utc::now() + chrono::Duration::hours(1);
        assert_eq!(format_relative_time(ts), "just now");
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs_f64(5.3)), "5.3s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}
