//! Weekly and monthly totals pages.

use axum::response::Html;
use chrono::NaiveDate;
use pastel_db::models::report::RangeTotals;
use pastel_db::models::settings::Settings;

use super::{escape, format_minutes, page};

/// What a totals page shows and where its previous/next links point.
#[derive(Debug)]
pub struct TotalsPage<'a> {
    pub title: &'a str,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub prev_href: String,
    pub next_href: String,
    pub totals: &'a RangeTotals,
}

/// Render per-category and per-activity totals for a date range.
///
/// Categories and activities without time in the range are listed with 0.
pub fn render_totals(settings: &Settings, view: &TotalsPage<'_>) -> Html<String> {
    let mut body = format!(
        r#"<p class="range">
  <a href="{prev}">&larr; Previous</a>
  <strong>{from} &ndash; {to}</strong>
  <a href="{next}">Next &rarr;</a>
</p>
<p class="grand-total">Total: {total}</p>
"#,
        prev = escape(&view.prev_href),
        next = escape(&view.next_href),
        from = view.from,
        to = view.to,
        total = format_minutes(view.totals.grand_total()),
    );

    body.push_str("<h2>By category</h2>\n<table class=\"totals\">\n");
    body.push_str("<tr><th>Category</th><th>Time</th><th>Minutes</th></tr>\n");
    for row in &view.totals.categories {
        body.push_str(&format!(
            "<tr><td><span class=\"swatch\" style=\"background: {color}\"></span>{name}</td>\
             <td>{time}</td><td>{minutes}</td></tr>\n",
            color = escape(&row.category_color),
            name = escape(&row.category_name),
            time = format_minutes(row.total_minutes),
            minutes = row.total_minutes,
        ));
    }
    body.push_str("</table>\n");

    body.push_str("<h2>By activity</h2>\n<table class=\"totals\">\n");
    body.push_str("<tr><th>Category</th><th>Activity</th><th>Time</th><th>Minutes</th></tr>\n");
    for row in &view.totals.activities {
        body.push_str(&format!(
            "<tr><td>{category}</td><td>{activity}</td><td>{time}</td><td>{minutes}</td></tr>\n",
            category = escape(&row.category_name),
            activity = escape(&row.activity_name),
            time = format_minutes(row.total_minutes),
            minutes = row.total_minutes,
        ));
    }
    body.push_str("</table>\n");

    page(settings, view.title, &body)
}
