use chrono::{DateTime, Local, Utc};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in `color` when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render a 0.0 - 1.0 ratio as a percentage
pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Color an accuracy ratio: red below 50%, yellow below 80%, green above
pub fn accuracy(ratio: f64, use_color: bool) -> String {
    let color = if ratio < 0.5 {
        Color::RED
    } else if ratio < 0.8 {
        Color::YELLOW
    } else {
        Color::GREEN
    };
    paint(&percent(ratio), color, use_color)
}

/// Render seconds as "1h 05m", "4m 20s" or "12s"
pub fn duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

pub fn timestamp(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "never".to_string(),
    }
}

/// A fixed-width text progress bar
pub fn bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_bands_pick_colors() {
        assert_eq!(accuracy(0.3, true), format!("{}30%{}", Color::RED, Color::RESET));
        assert_eq!(accuracy(0.5, true), format!("{}50%{}", Color::YELLOW, Color::RESET));
        assert_eq!(accuracy(0.8, true), format!("{}80%{}", Color::GREEN, Color::RESET));
        assert_eq!(accuracy(0.8, false), "80%");
    }

    #[test]
    fn test_duration_and_bar() {
        assert_eq!(duration(12.4), "12s");
        assert_eq!(duration(260.0), "4m 20s");
        assert_eq!(duration(3900.0), "1h 05m");
        assert_eq!(bar(0.5, 10), "[#####-----]");
        assert_eq!(bar(1.7, 4), "[####]");
    }
}
