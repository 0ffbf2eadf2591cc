//! The settings form.

use axum::response::Html;
use pastel_core::calendar::VALID_WEEK_STARTS;
use pastel_core::rounding::VALID_ROUNDING_MODES;
use pastel_db::models::settings::Settings;

use super::{escape, option, page};

pub fn render_settings(settings: &Settings) -> Html<String> {
    let rounding_options: String = VALID_ROUNDING_MODES
        .iter()
        .map(|m| option(m, m, *m == settings.rounding_mode.as_str()))
        .collect();
    let week_options: String = VALID_WEEK_STARTS
        .iter()
        .map(|w| option(w, w, *w == settings.week_start.as_str()))
        .collect();

    let body = format!(
        r#"<form method="post" action="/settings" class="settings">
  <fieldset>
    <legend>Time</legend>
    <label>Rounding mode <select name="rounding_mode">{rounding_options}</select></label>
    <label>Rounding increment (minutes)
      <input type="number" name="rounding_increment" min="1" value="{increment}"></label>
    <label>Week starts on <select name="week_start">{week_options}</select></label>
  </fieldset>
  <fieldset>
    <legend>Appearance</legend>
    <label>Primary color <input type="color" name="primary_hex" value="{primary}"></label>
    <label>Accent color <input type="color" name="accent_hex" value="{accent}"></label>
    <label>Glass opacity (%)
      <input type="number" name="glass_alpha" min="0" max="100" value="{alpha}"></label>
    <label>Glass blur (px)
      <input type="number" name="glass_blur_px" min="0" value="{blur}"></label>
  </fieldset>
  <button type="submit">Save</button>
</form>
"#,
        increment = settings.rounding_increment,
        primary = escape(&settings.primary_hex),
        accent = escape(&settings.accent_hex),
        alpha = settings.glass_alpha,
        blur = settings.glass_blur_px,
    );

    page(settings, "Settings", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::default_settings;
    use pastel_core::calendar::WeekStart;
    use pastel_core::rounding::RoundingMode;

    #[test]
    fn form_reflects_current_values() {
        let mut settings = default_settings();
        settings.rounding_mode = RoundingMode::Nearest;
        settings.week_start = WeekStart::Sunday;
        settings.rounding_increment = 10;
        let Html(html) = render_settings(&settings);

        assert!(html.contains(r#"<option value="nearest" selected>nearest</option>"#));
        assert!(html.contains(r#"<option value="none">none</option>"#));
        assert!(html.contains(r#"<option value="sunday" selected>sunday</option>"#));
        assert!(html.contains(r#"name="rounding_increment" min="1" value="10""#));
        assert!(html.contains(r##"name="primary_hex" value="#7c83fd""##));
    }
}
