//! First-start seeding of default categories and activities.

use pastel_core::settings::{SEED_ACTIVITIES, SEED_CATEGORIES};

use crate::models::activity::CreateActivity;
use crate::models::category::CreateCategory;
use crate::repositories::{ActivityRepo, CategoryRepo};
use crate::DbPool;

/// How many rows [`seed_defaults`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub activities: usize,
}

/// Insert the default categories when there are none, and the default
/// activities when there are none.
///
/// Activities whose category is missing are skipped; a failing activity insert
/// is logged and skipped rather than aborting startup.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary::default();

    if CategoryRepo::count(pool).await? == 0 {
        for (name, color) in SEED_CATEGORIES {
            let input = CreateCategory {
                name: (*name).to_string(),
                color_hex: Some((*color).to_string()),
                ..CreateCategory::default()
            };
            CategoryRepo::create(pool, &input).await?;
            summary.categories += 1;
        }
    }

    if ActivityRepo::count(pool).await? == 0 {
        for (category_name, names) in SEED_ACTIVITIES {
            let Some(category) = CategoryRepo::find_by_name(pool, category_name).await? else {
                continue;
            };
            for (idx, name) in names.iter().enumerate() {
                let input = CreateActivity {
                    name: (*name).to_string(),
                    category_id: category.id,
                    sort_order: i32::try_from(idx).ok(),
                };
                match ActivityRepo::create(pool, &input).await {
                    Ok(_) => summary.activities += 1,
                    Err(e) => {
                        tracing::warn!(error = %e, category = %category_name, activity = %name, "Skipping seed activity");
                    }
                }
            }
        }
    }

    if summary != SeedSummary::default() {
        tracing::info!(
            categories = summary.categories,
            activities = summary.activities,
            "Seeded default data",
        );
    }
    Ok(summary)
}
