//! Server-rendered HTML pages.
//!
//! Every page goes through [`page`], which wraps the body in the shared layout
//! and injects the theme from the settings record. All user-supplied text must
//! pass through [`escape`] before it is interpolated.

pub mod charts;
pub mod entries;
pub mod manage;
pub mod reports;
pub mod settings;

use axum::response::Html;
use pastel_db::models::settings::Settings;

/// Navigation links shown on every page, as `(href, label)`.
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Today"),
    ("/weekly", "Weekly"),
    ("/monthly", "Monthly"),
    ("/charts/daily", "Charts"),
    ("/manage/categories", "Categories"),
    ("/manage/activities", "Activities"),
    ("/settings", "Settings"),
    ("/entries/export.csv", "Export CSV"),
];

/// Escape text for safe inclusion in HTML element content and quoted
/// attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a minute count as `"2h 05m"`, or `"45m"` under an hour.
pub fn format_minutes(total: i64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours == 0 {
        format!("{minutes}m")
    } else {
        format!("{hours}h {minutes:02}m")
    }
}

/// Wrap `body` in the shared layout themed by `settings`.
pub fn page(settings: &Settings, title: &str, body: &str) -> Html<String> {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n      ");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | Pastel Time Tracker</title>
  <link rel="stylesheet" href="/static/style.css">
  <style>
    :root {{
      --primary: {primary};
      --accent: {accent};
      --glass-alpha: {alpha};
      --glass-blur: {blur}px;
    }}
  </style>
</head>
<body>
  <header class="glass">
    <nav>
      {nav}
    </nav>
  </header>
  <main class="glass">
    <h1>{title}</h1>
{body}
  </main>
</body>
</html>"#,
        title = escape(title),
        primary = escape(&settings.primary_hex),
        accent = escape(&settings.accent_hex),
        alpha = glass_opacity(settings.glass_alpha),
        blur = settings.glass_blur_px,
    ))
}

/// Convert the stored 0-100 percentage into a CSS opacity.
fn glass_opacity(percent: i32) -> String {
    format!("{:.2}", f64::from(percent.clamp(0, 100)) / 100.0)
}

/// An `<option>` element, marked selected when `selected` is true.
pub(crate) fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{selected}>{}</option>"#,
        escape(value),
        escape(label)
    )
}
