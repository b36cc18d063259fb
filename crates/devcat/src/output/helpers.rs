//! Common helper functions for output formatting.

use devcat_catalog::{Development, DevelopmentStatus};
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats an amount in Brazilian reais, e.g. `R$ 1.450.000`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {grouped}")
}

/// Short display label for a sales status.
pub fn status_label(status: DevelopmentStatus) -> &'static str {
    match status {
        DevelopmentStatus::Launch => "launch",
        DevelopmentStatus::Ready => "ready",
        DevelopmentStatus::UnderConstruction => "building",
    }
}

/// Colors `text` according to a sales status.
pub fn paint_status(status: DevelopmentStatus, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match status {
        DevelopmentStatus::Ready => text.green().to_string(),
        DevelopmentStatus::Launch => text.yellow().to_string(),
        DevelopmentStatus::UnderConstruction => text.blue().to_string(),
    }
}

/// City, or `City, Country` when a country is known.
pub fn format_location(dev: &Development) -> String {
    match &dev.location.country {
        Some(country) => format!("{}, {}", dev.location.city, country),
        None => dev.location.city.clone(),
    }
}

/// Display name, falling back to the slug.
pub fn display_name(dev: &Development) -> &str {
    if dev.name.is_empty() {
        &dev.slug
    } else {
        &dev.name
    }
}
