//! Settings service layer

use std::collections::HashMap;

use sea_orm::*;
use serde::Deserialize;
use uuid::Uuid;

use shorefront_persistence::entity::setting;

use crate::model::site::SiteSettings;

const DEFAULT_CATEGORY: &str = "general";
const DEFAULT_TYPE: &str = "string";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default)]
    pub setting_type: Option<String>,
}

pub async fn get_all(db: &DatabaseConnection) -> anyhow::Result<Vec<setting::Model>> {
    let settings = setting::Entity::find()
        .order_by_asc(setting::Column::Category)
        .order_by_asc(setting::Column::Key)
        .all(db)
        .await?;

    Ok(settings)
}

/// Upsert settings by key. Creates fill in the category/type defaults;
/// updates only touch category/type when the entry provides them.
pub async fn upsert_many(
    db: &DatabaseConnection,
    entries: Vec<SettingEntry>,
) -> anyhow::Result<Vec<setting::Model>> {
    let mut saved = Vec::with_capacity(entries.len());

    for entry in entries {
        let existing = setting::Entity::find()
            .filter(setting::Column::Key.eq(&entry.key))
            .one(db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: setting::ActiveModel = existing.into();
                active.value = Set(entry.value);
                if let Some(category) = entry.category {
                    active.category = Set(category);
                }
                if let Some(setting_type) = entry.setting_type {
                    active.setting_type = Set(setting_type);
                }
                active.updated_at = Set(chrono::Utc::now());
                active.update(db).await?
            }
            None => {
                let active = setting::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    key: Set(entry.key),
                    value: Set(entry.value),
                    category: Set(entry.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string())),
                    setting_type: Set(entry
                        .setting_type
                        .unwrap_or_else(|| DEFAULT_TYPE.to_string())),
                    updated_at: Set(chrono::Utc::now()),
                };
                active.insert(db).await?
            }
        };
        saved.push(model);
    }

    Ok(saved)
}

/// Resolve the site-wide settings the renderer and layout need. A failed
/// query logs and falls back to the built-in defaults rather than failing
/// the page.
pub async fn site_settings(db: &DatabaseConnection) -> SiteSettings {
    let rows = setting::Entity::find()
        .filter(setting::Column::Key.is_in(SiteSettings::keys()))
        .all(db)
        .await;

    match rows {
        Ok(rows) => {
            let map: HashMap<String, String> =
                rows.into_iter().map(|row| (row.key, row.value)).collect();
            SiteSettings::from_map(&map)
        }
        Err(e) => {
            tracing::error!("Failed to fetch site settings: {}", e);
            SiteSettings::default()
        }
    }
}
