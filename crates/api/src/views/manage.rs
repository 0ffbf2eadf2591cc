//! Category and activity management pages.

use axum::response::Html;
use pastel_core::settings::DEFAULT_CATEGORY_HEX;
use pastel_core::types::DbId;
use pastel_db::models::activity::Activity;
use pastel_db::models::category::Category;
use pastel_db::models::settings::Settings;

use super::{escape, option, page};

pub fn render_categories(settings: &Settings, categories: &[Category]) -> Html<String> {
    let mut body = format!(
        r#"<form method="post" action="/manage/categories/add" class="inline-form">
  <input type="text" name="name" placeholder="Category name" maxlength="100" required>
  <input type="color" name="color_hex" value="{DEFAULT_CATEGORY_HEX}">
  <input type="text" name="icon_key" placeholder="Icon (optional)" maxlength="50">
  <button type="submit">Add category</button>
</form>
<ul class="categories">
"#
    );

    for category in categories {
        let icon = category
            .icon_key
            .as_deref()
            .map(|i| format!(" <span class=\"icon\">{}</span>", escape(i)))
            .unwrap_or_default();
        body.push_str(&format!(
            r#"  <li>
    <span class="swatch" style="background: {color}"></span>
    <a href="/manage/activities?category_id={id}">{name}</a>{icon}
    <form method="post" action="/manage/categories/delete" class="inline">
      <input type="hidden" name="category_id" value="{id}">
      <button type="submit">Delete</button>
    </form>
  </li>
"#,
            color = escape(&category.color_hex),
            id = category.id,
            name = escape(&category.name),
        ));
    }
    body.push_str("</ul>\n");

    page(settings, "Categories", &body)
}

/// Activity list, optionally narrowed to `selected` category.
pub fn render_activities(
    settings: &Settings,
    categories: &[Category],
    activities: &[Activity],
    selected: Option<DbId>,
) -> Html<String> {
    let filter_options: String = std::iter::once(option("", "All categories", selected.is_none()))
        .chain(
            categories
                .iter()
                .map(|c| option(&c.id.to_string(), &c.name, selected == Some(c.id))),
        )
        .collect();
    // The add form defaults to the filtered category, or the first one.
    let default_category = selected.or_else(|| categories.first().map(|c| c.id));
    let add_options: String = categories
        .iter()
        .map(|c| option(&c.id.to_string(), &c.name, default_category == Some(c.id)))
        .collect();

    let mut body = format!(
        r#"<form method="get" action="/manage/activities" class="inline-form">
  <select name="category_id">{filter_options}</select>
  <button type="submit">Filter</button>
</form>
<form method="post" action="/manage/activities/add" class="inline-form">
  <input type="text" name="name" placeholder="Activity name" maxlength="120" required>
  <select name="category_id" required>{add_options}</select>
  <button type="submit">Add activity</button>
</form>
<table class="activities">
<tr><th>Category</th><th>Activity</th><th></th></tr>
"#
    );

    for activity in activities {
        let category_name = categories
            .iter()
            .find(|c| c.id == activity.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        body.push_str(&format!(
            r#"<tr><td>{category}</td><td>{name}</td><td>
  <form method="post" action="/manage/activities/delete" class="inline">
    <input type="hidden" name="activity_id" value="{id}">
    <input type="hidden" name="category_id" value="{category_id}">
    <button type="submit">Delete</button>
  </form>
</td></tr>
"#,
            category = escape(category_name),
            name = escape(&activity.name),
            id = activity.id,
            category_id = activity.category_id,
        ));
    }
    body.push_str("</table>\n");

    page(settings, "Activities", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::default_settings;
    use chrono::Utc;

    fn category(id: DbId, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            color_hex: "#DFF5E1".into(),
            icon_key: Some("run".into()),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn categories_page_links_to_activities() {
        let Html(html) = render_categories(&default_settings(), &[category(3, "Exercise")]);
        assert!(html.contains(r#"<a href="/manage/activities?category_id=3">Exercise</a>"#));
        assert!(html.contains(r#"<span class="icon">run</span>"#));
        assert!(html.contains(r#"name="category_id" value="3""#));
    }

    #[test]
    fn activities_page_preselects_filter() {
        let categories = [category(1, "Exercise"), category(2, "Work")];
        let activities = [Activity {
            id: 9,
            category_id: 2,
            name: "Coding".into(),
            sort_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];
        let Html(html) = render_activities(&default_settings(), &categories, &activities, Some(2));

        assert!(html.contains(r#"<option value="2" selected>Work</option>"#));
        assert!(html.contains(r#"<option value="">All categories</option>"#));
        assert!(html.contains("<td>Work</td><td>Coding</td>"));
    }
}
