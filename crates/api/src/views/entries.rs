//! The home page: today's entries and the quick-add form.

use axum::response::Html;
use chrono::NaiveDate;
use pastel_db::models::activity::Activity;
use pastel_db::models::category::Category;
use pastel_db::models::entry::EntryDetail;
use pastel_db::models::settings::Settings;

use super::{escape, format_minutes, option, page};

/// Render the home page for `today`.
pub fn render_index(
    settings: &Settings,
    today: NaiveDate,
    entries: &[EntryDetail],
    categories: &[Category],
    activities: &[Activity],
) -> Html<String> {
    let mut body = String::new();

    body.push_str(&quick_add_form(settings, today, categories, activities));

    let total: i64 = entries.iter().map(|e| i64::from(e.duration_minutes)).sum();
    body.push_str(&format!(
        "<h2>Logged on {today} <small>({})</small></h2>\n",
        format_minutes(total)
    ));

    if entries.is_empty() {
        body.push_str(r#"<p class="empty">Nothing logged yet today.</p>"#);
    } else {
        body.push_str("<ul class=\"entries\">\n");
        for entry in entries {
            body.push_str(&entry_row(entry));
        }
        body.push_str("</ul>\n");
    }

    page(settings, "Today", &body)
}

fn quick_add_form(
    settings: &Settings,
    today: NaiveDate,
    categories: &[Category],
    activities: &[Activity],
) -> String {
    let mut groups = String::new();
    for category in categories {
        let options: Vec<String> = activities
            .iter()
            .filter(|a| a.category_id == category.id)
            .map(|a| option(&a.id.to_string(), &a.name, false))
            .collect();
        if options.is_empty() {
            continue;
        }
        groups.push_str(&format!(
            "<optgroup label=\"{}\">{}</optgroup>\n",
            escape(&category.name),
            options.join("")
        ));
    }

    let hint = if settings.rounding_mode == pastel_core::rounding::RoundingMode::None {
        String::new()
    } else {
        format!(
            "<p class=\"hint\">Durations are rounded {} to {} minutes.</p>",
            settings.rounding_mode, settings.rounding_increment
        )
    };

    format!(
        r#"<form method="post" action="/add-entry" class="quick-add">
  <input type="date" name="date_value" value="{today}" required>
  <select name="activity_id" required>
{groups}  </select>
  <input type="number" name="duration_minutes" min="1" max="1440" placeholder="Minutes" required>
  <input type="text" name="notes" placeholder="Notes (optional)">
  <button type="submit">Add</button>
</form>
{hint}
"#
    )
}

fn entry_row(entry: &EntryDetail) -> String {
    let label = match &entry.activity_name {
        Some(activity) => format!("{} / {}", escape(&entry.category_name), escape(activity)),
        None => escape(&entry.category_name),
    };
    let notes = entry
        .notes
        .as_deref()
        .map(|n| format!(" <span class=\"notes\">{}</span>", escape(n)))
        .unwrap_or_default();

    format!(
        r#"  <li style="border-color: {color}">
    <span class="label">{label}</span>
    <span class="duration">{duration}</span>{notes}
    <form method="post" action="/delete-entry" class="inline">
      <input type="hidden" name="entry_id" value="{id}">
      <button type="submit" aria-label="Delete entry">&times;</button>
    </form>
  </li>
"#,
        color = escape(&entry.category_color),
        duration = format_minutes(i64::from(entry.duration_minutes)),
        id = entry.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::default_settings;
    use chrono::Utc;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            color_hex: "#E6E0FF".into(),
            icon_key: None,
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn activity(id: i64, category_id: i64, name: &str) -> Activity {
        Activity {
            id,
            category_id,
            name: name.into(),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_activities_and_escapes_notes() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let entries = vec![EntryDetail {
            id: 7,
            activity_id: Some(1),
            category_id: 1,
            date: today,
            duration_minutes: 90,
            notes: Some("<script>".into()),
            category_name: "Work".into(),
            category_color: "#E6E0FF".into(),
            activity_name: Some("Coding".into()),
        }];
        let Html(html) = render_index(
            &default_settings(),
            today,
            &entries,
            &[category(1, "Work"), category(2, "Empty")],
            &[activity(1, 1, "Coding")],
        );

        assert!(html.contains(r#"<optgroup label="Work"><option value="1">Coding</option></optgroup>"#));
        assert!(!html.contains(r#"label="Empty""#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Work / Coding"));
        assert!(html.contains("1h 30m"));
        assert!(html.contains(r#"name="entry_id" value="7""#));
    }

    #[test]
    fn empty_day_shows_placeholder() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let Html(html) = render_index(&default_settings(), today, &[], &[], &[]);
        assert!(html.contains("Nothing logged yet today."));
        assert!(!html.contains("Durations are rounded"));
    }
}
