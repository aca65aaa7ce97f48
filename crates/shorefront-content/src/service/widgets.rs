//! Footer and sidebar widget service layer
//!
//! Both widget families are saved as a whole from the admin layout screen,
//! so writes are bulk replace operations over the full table.

use sea_orm::*;
use serde::Deserialize;
use uuid::Uuid;

use shorefront_common::WidgetType;
use shorefront_persistence::entity::{footer_widget, sidebar_widget};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInput {
    #[serde(default)]
    pub column_index: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub widget_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

impl WidgetInput {
    fn widget_type_or_default(&self) -> String {
        self.widget_type
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| WidgetType::default().as_str().to_string())
    }
}

/// All footer widgets ordered by (column, order).
pub async fn list_footer(db: &DatabaseConnection) -> anyhow::Result<Vec<footer_widget::Model>> {
    let widgets = footer_widget::Entity::find()
        .order_by_asc(footer_widget::Column::ColumnIndex)
        .order_by_asc(footer_widget::Column::Order)
        .all(db)
        .await?;

    Ok(widgets)
}

/// Replace every footer widget with the submitted list, atomically.
pub async fn replace_footer(
    db: &DatabaseConnection,
    widgets: Vec<WidgetInput>,
) -> anyhow::Result<Vec<footer_widget::Model>> {
    let txn = db.begin().await?;

    footer_widget::Entity::delete_many().exec(&txn).await?;

    let mut created = Vec::with_capacity(widgets.len());
    for widget in widgets {
        let entity = footer_widget::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            column_index: Set(widget.column_index.unwrap_or(0)),
            title: Set(widget.title.clone()),
            widget_type: Set(widget.widget_type_or_default()),
            content: Set(widget.content.clone()),
            order: Set(widget.order.unwrap_or(0)),
        };
        created.push(entity.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok(created)
}

/// All sidebar widgets ordered.
pub async fn list_sidebar(db: &DatabaseConnection) -> anyhow::Result<Vec<sidebar_widget::Model>> {
    let widgets = sidebar_widget::Entity::find()
        .order_by_asc(sidebar_widget::Column::Order)
        .all(db)
        .await?;

    Ok(widgets)
}

/// Replace every sidebar widget with the submitted list, atomically.
pub async fn replace_sidebar(
    db: &DatabaseConnection,
    widgets: Vec<WidgetInput>,
) -> anyhow::Result<Vec<sidebar_widget::Model>> {
    let txn = db.begin().await?;

    sidebar_widget::Entity::delete_many().exec(&txn).await?;

    let mut created = Vec::with_capacity(widgets.len());
    for widget in widgets {
        let entity = sidebar_widget::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(widget.title.clone()),
            widget_type: Set(widget.widget_type_or_default()),
            content: Set(widget.content.clone()),
            order: Set(widget.order.unwrap_or(0)),
        };
        created.push(entity.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorefront_persistence::create_tables;

    async fn test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        create_tables(&db).await.expect("schema bootstrap");
        db
    }

    fn widget(column_index: i32, order: i32, title: &str) -> WidgetInput {
        WidgetInput {
            column_index: Some(column_index),
            title: Some(title.to_string()),
            widget_type: Some("text".to_string()),
            content: None,
            order: Some(order),
        }
    }

    #[tokio::test]
    async fn test_footer_bulk_replace_leaves_only_submitted_rows() {
        let db = test_db().await;

        replace_footer(&db, vec![widget(0, 0, "Old A"), widget(1, 0, "Old B")])
            .await
            .unwrap();
        let replaced = replace_footer(&db, vec![widget(0, 0, "New")]).await.unwrap();
        assert_eq!(replaced.len(), 1);

        let listed = list_footer(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn test_footer_list_ordered_by_column_then_order() {
        let db = test_db().await;
        replace_footer(
            &db,
            vec![widget(1, 0, "C"), widget(0, 1, "B"), widget(0, 0, "A")],
        )
        .await
        .unwrap();

        let listed = list_footer(&db).await.unwrap();
        let titles: Vec<_> = listed
            .iter()
            .map(|w| w.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_sidebar_defaults_and_replace() {
        let db = test_db().await;
        let created = replace_sidebar(
            &db,
            vec![WidgetInput {
                title: Some("Links".to_string()),
                ..Default::default()
            }],
        )
        .await
        .unwrap();
        assert_eq!(created[0].widget_type, "links");
        assert_eq!(created[0].order, 0);

        let cleared = replace_sidebar(&db, vec![]).await.unwrap();
        assert!(cleared.is_empty());
        assert!(list_sidebar(&db).await.unwrap().is_empty());
    }
}
