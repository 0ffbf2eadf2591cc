//! Integration tests for the singleton settings record.

use pastel_core::calendar::WeekStart;
use pastel_core::rounding::RoundingMode;
use pastel_db::models::settings::UpdateSettings;
use pastel_db::repositories::SettingsRepo;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_first_read_creates_documented_defaults(pool: SqlitePool) {
    let settings = SettingsRepo::get(&pool).await.unwrap();
    assert_eq!(settings.id, 1);
    assert_eq!(settings.rounding_mode, RoundingMode::None);
    assert_eq!(settings.rounding_increment, 15);
    assert_eq!(settings.week_start, WeekStart::Monday);
    assert_eq!(settings.primary_hex, "#7c83fd");
    assert_eq!(settings.accent_hex, "#E6E0FF");
    assert_eq!(settings.glass_alpha, 85);
    assert_eq!(settings.glass_blur_px, 12);

    // Repeated reads do not create more rows.
    SettingsRepo::get(&pool).await.unwrap();
    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_overwrites_every_field(pool: SqlitePool) {
    SettingsRepo::get(&pool).await.unwrap();

    let input = UpdateSettings {
        rounding_mode: RoundingMode::Nearest,
        rounding_increment: 10,
        week_start: WeekStart::Sunday,
        primary_hex: "#112233".into(),
        accent_hex: "#445566".into(),
        glass_alpha: 40,
        glass_blur_px: 0,
    };
    let saved = SettingsRepo::replace(&pool, &input).await.unwrap();
    assert_eq!(saved.rounding_mode, RoundingMode::Nearest);
    assert_eq!(saved.week_start, WeekStart::Sunday);

    let reread = SettingsRepo::get(&pool).await.unwrap();
    assert_eq!(reread.rounding_increment, 10);
    assert_eq!(reread.primary_hex, "#112233");
    assert_eq!(reread.accent_hex, "#445566");
    assert_eq!(reread.glass_alpha, 40);
    assert_eq!(reread.glass_blur_px, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_replace_before_first_read_creates_row(pool: SqlitePool) {
    let input = UpdateSettings {
        rounding_mode: RoundingMode::Up,
        ..UpdateSettings::default()
    };
    let saved = SettingsRepo::replace(&pool, &input).await.unwrap();
    assert_eq!(saved.id, 1);
    assert_eq!(saved.rounding_mode, RoundingMode::Up);
}
