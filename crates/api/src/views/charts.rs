//! Ranked activity breakdown charts, drawn as horizontal bars.

use axum::response::Html;
use chrono::NaiveDate;
use pastel_db::models::report::BreakdownItem;
use pastel_db::models::settings::Settings;

use super::{escape, format_minutes, page};

/// Chart period links shown above every chart.
const PERIOD_LINKS: &[(&str, &str)] = &[
    ("/charts/daily", "Day"),
    ("/charts/weekly", "Week"),
    ("/charts/monthly", "Month"),
];

/// Share of `total` in whole percent, rounded half up.
pub fn percent_of(part: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (part * 100 + total / 2) / total
}

/// Render a breakdown in the order given (largest first, unassigned last).
pub fn render_breakdown(
    settings: &Settings,
    title: &str,
    from: NaiveDate,
    to: NaiveDate,
    items: &[BreakdownItem],
) -> Html<String> {
    let periods: String = PERIOD_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");

    let range = if from == to {
        from.to_string()
    } else {
        format!("{from} &ndash; {to}")
    };

    let mut body = format!("<p class=\"periods\">{periods}</p>\n<p class=\"range\">{range}</p>\n");

    if items.is_empty() {
        body.push_str(r#"<p class="empty">No time logged in this period.</p>"#);
        return page(settings, title, &body);
    }

    let total: i64 = items.iter().map(|i| i.total_minutes).sum();
    body.push_str("<div class=\"chart\">\n");
    for item in items {
        let pct = percent_of(item.total_minutes, total);
        body.push_str(&format!(
            r#"  <div class="bar-row">
    <span class="bar-label">{label}</span>
    <span class="bar" style="width: {pct}%"></span>
    <span class="bar-value">{time} ({pct}%)</span>
  </div>
"#,
            label = escape(&item.label),
            time = format_minutes(item.total_minutes),
        ));
    }
    body.push_str("</div>\n");
    body.push_str(&format!(
        "<p class=\"grand-total\">Total: {}</p>\n",
        format_minutes(total)
    ));

    page(settings, title, &body)
}
