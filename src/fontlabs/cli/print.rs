use chrono::{DateTime, Utc};
use colored::Colorize;
use fontlabs::api::{CmdMessage, MessageLevel};
use fontlabs::config::{FontlabsConfig, KEYS};
use fontlabs::feed::stylesheets::google_fonts_css_url;
use fontlabs::model::Font;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 12;
const DOWNLOADS_WIDTH: usize = 8;
const TIME_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_fonts(fonts: &[Font], favorites: &[Uuid]) {
    for (i, font) in fonts.iter().enumerate() {
        let idx_str = format!("{:>4}. ", i + 1);
        let marker = if favorites.contains(&font.id) {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };

        let mut badges = String::new();
        if font.is_new {
            badges.push_str(" new");
        }
        if font.is_premium {
            badges.push_str(" premium");
        }

        let fixed_width = idx_str.width()
            + marker.width()
            + badges.width()
            + CATEGORY_WIDTH
            + DOWNLOADS_WIDTH
            + TIME_WIDTH
            + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name = truncate_to_width(&font.name, available);
        let padding = available.saturating_sub(name.width());

        println!(
            "{}{}{}{}{} {:<cw$}{:>dw$} {}",
            idx_str.dimmed(),
            marker.red(),
            name.bold(),
            badges.cyan(),
            " ".repeat(padding),
            font.category.as_str(),
            format_downloads(font.download_count()),
            format_time_ago(font.created_at).dimmed(),
            cw = CATEGORY_WIDTH,
            dw = DOWNLOADS_WIDTH,
        );
    }
}

pub(super) fn print_font_detail(font: &Font, preview_text: &str) {
    println!("{}", font.name.bold());
    println!("--------------------------------");
    println!("{:<12}{}", "slug", font.slug);
    println!("{:<12}{}", "category", font.category);
    println!("{:<12}{}", "license", font.license);
    if let Some(designer) = &font.designer {
        println!("{:<12}{}", "designer", designer);
    }
    println!("{:<12}{}", "downloads", font.download_count());
    if let Some(rating) = font.rating {
        println!("{:<12}{:.1}", "rating", rating);
    }
    if !font.font_weights.is_empty() {
        println!("{:<12}{}", "weights", font.font_weights.join(", "));
    }
    if let Some(family) = font.resource_key() {
        println!(
            "{:<12}{}",
            "stylesheet",
            google_fonts_css_url(family, &font.font_weights)
        );
    }
    if let Some(description) = &font.description {
        println!();
        println!("{}", description);
    }
    let preview = font.preview_text.as_deref().unwrap_or(preview_text);
    println!();
    println!("{}", preview.italic());
}

pub(super) fn print_config(config: &FontlabsConfig) {
    for key in KEYS {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
}

pub(super) fn print_links(hrefs: &[String]) {
    for href in hrefs {
        println!("{}", href);
    }
}

fn format_downloads(downloads: u64) -> String {
    const UNITS: &[(f64, &str)] = &[(1_000.0, "k"), (1_000_000.0, "M"), (1_000_000_000.0, "B")];

    let tenths = |scale: f64| (downloads as f64 / scale * 10.0).round() / 10.0;
    let Some(mut unit) = UNITS.iter().rposition(|(scale, _)| downloads as f64 >= *scale) else {
        return downloads.to_string();
    };
    // Rounding can carry into the next unit: 999_950 is 1.0M, not 1000.0k.
    if tenths(UNITS[unit].0) >= 1_000.0 && unit + 1 < UNITS.len() {
        unit += 1;
    }
    let (scale, suffix) = UNITS[unit];
    format!("{:.1}{}", tenths(scale), suffix)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
