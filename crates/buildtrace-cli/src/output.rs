use chrono::Duration;
use owo_colors::OwoColorize;

use buildtrace_engine::ProjectAnalysis;

/// SUCCESS / FAILED / UNKNOWN, colored when enabled.
pub(crate) fn status(project: &ProjectAnalysis, color: bool) -> String {
    match project.succeeded {
        Some(_) if project.overall_success() => paint("SUCCESS", color, Paint::Green),
        Some(_) => paint("FAILED", color, Paint::Red),
        None if project.errors.is_empty() => paint("UNKNOWN", color, Paint::Yellow),
        None => paint("FAILED", color, Paint::Red),
    }
}

pub(crate) fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Seconds with millisecond precision, e.g. "1.250s".
pub(crate) fn format_duration(duration: Duration) -> String {
    let millis = duration.num_milliseconds().max(0);
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}

enum Paint {
    Green,
    Red,
    Yellow,
}

fn paint(text: &str, color: bool, paint: Paint) -> String {
    if !color {
        return text.to_string();
    }
    match paint {
        Paint::Green => text.green().to_string(),
        Paint::Red => text.red().to_string(),
        Paint::Yellow => text.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::milliseconds(1250)), "1.250s");
        assert_eq!(format_duration(Duration::zero()), "0.000s");
        // Negative means the timestamps never both arrived; report zero.
        assert_eq!(format_duration(Duration::milliseconds(-5)), "0.000s");
    }
}
