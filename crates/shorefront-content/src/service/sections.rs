//! Page-section service layer
//!
//! Scope is the unit of every operation: `page_id = None` addresses the
//! homepage slot, `Some(id)` addresses one page. Ordering is always
//! (`order` asc, `id` asc) so equal order values resolve deterministically.

use sea_orm::*;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use shorefront_common::ShorefrontError;
use shorefront_persistence::entity::page_section;

use super::json_text;

/// Incoming section row for create and bulk replace. `settings` and
/// `content` arrive as JSON objects and are stored as text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInput {
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Partial update for a single section; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    pub settings: Option<Value>,
    pub content: Option<Value>,
    pub visible: Option<bool>,
    pub order: Option<i32>,
}

fn scope_condition(page_id: Option<&str>) -> Condition {
    match page_id {
        Some(page_id) => Condition::all().add(page_section::Column::PageId.eq(page_id)),
        None => Condition::all().add(page_section::Column::PageId.is_null()),
    }
}

/// List all sections of a scope, hidden ones included.
pub async fn list(
    db: &DatabaseConnection,
    page_id: Option<&str>,
) -> anyhow::Result<Vec<page_section::Model>> {
    let sections = page_section::Entity::find()
        .filter(scope_condition(page_id))
        .order_by_asc(page_section::Column::Order)
        .order_by_asc(page_section::Column::Id)
        .all(db)
        .await?;

    Ok(sections)
}

pub async fn get(db: &DatabaseConnection, id: &str) -> anyhow::Result<page_section::Model> {
    page_section::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ShorefrontError::NotFound("page section".to_string()).into())
}

/// Append a new section at the end of its scope, visible by default.
pub async fn create(
    db: &DatabaseConnection,
    input: SectionInput,
) -> anyhow::Result<page_section::Model> {
    let last = page_section::Entity::find()
        .filter(scope_condition(input.page_id.as_deref()))
        .order_by_desc(page_section::Column::Order)
        .one(db)
        .await?;
    let next_order = last.map(|section| section.order + 1).unwrap_or(0);

    let entity = page_section::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        page_id: Set(input.page_id),
        section_type: Set(input.section_type),
        order: Set(next_order),
        settings: Set(json_text(input.settings)),
        content: Set(json_text(input.content)),
        visible: Set(input.visible),
    };

    let model = entity.insert(db).await?;

    Ok(model)
}

/// Replace every section of a scope with the submitted list, atomically.
///
/// `order` becomes the array index; an empty list clears the scope. Entries
/// carrying a different scope must be rejected before calling this.
pub async fn replace_all(
    db: &DatabaseConnection,
    page_id: Option<&str>,
    sections: Vec<SectionInput>,
) -> anyhow::Result<Vec<page_section::Model>> {
    let txn = db.begin().await?;

    page_section::Entity::delete_many()
        .filter(scope_condition(page_id))
        .exec(&txn)
        .await?;

    let mut created = Vec::with_capacity(sections.len());
    for (index, section) in sections.into_iter().enumerate() {
        let entity = page_section::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            page_id: Set(page_id.map(String::from)),
            section_type: Set(section.section_type),
            order: Set(index as i32),
            settings: Set(json_text(section.settings)),
            content: Set(json_text(section.content)),
            visible: Set(section.visible),
        };
        created.push(entity.insert(&txn).await?);
    }

    txn.commit().await?;

    Ok(created)
}

/// Patch one section; only fields present in the patch change.
pub async fn update_one(
    db: &DatabaseConnection,
    id: &str,
    patch: SectionPatch,
) -> anyhow::Result<page_section::Model> {
    let existing = page_section::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("page section".to_string())))?;

    let mut section: page_section::ActiveModel = existing.into();
    if let Some(settings) = patch.settings {
        section.settings = Set(json_text(Some(settings)));
    }
    if let Some(content) = patch.content {
        section.content = Set(json_text(Some(content)));
    }
    if let Some(visible) = patch.visible {
        section.visible = Set(visible);
    }
    if let Some(order) = patch.order {
        section.order = Set(order);
    }

    let model = if section.is_changed() {
        section.update(db).await?
    } else {
        section.try_into_model()?
    };

    Ok(model)
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<()> {
    let res = page_section::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ShorefrontError::NotFound("page section".to_string()).into());
    }

    Ok(())
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

    fn input(section_type: &str, page_id: Option<&str>) -> SectionInput {
        SectionInput {
            page_id: page_id.map(String::from),
            section_type: section_type.to_string(),
            settings: None,
            content: None,
            visible: true,
        }
    }

    #[tokio::test]
    async fn test_create_appends_at_end_of_scope() {
        let db = test_db().await;

        let first = create(&db, input("hero", None)).await.unwrap();
        let second = create(&db, input("text", None)).await.unwrap();
        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
        assert!(second.visible);

        // A different scope starts its own sequence
        let other = create(&db, input("hero", Some("p1"))).await.unwrap();
        assert_eq!(other.order, 0);

        let listed = list(&db, None).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, second.id);
    }

    #[tokio::test]
    async fn test_scope_needs_no_page_row() {
        let db = test_db().await;

        let created = create(&db, input("hero", Some("not-yet-created")))
            .await
            .unwrap();
        assert_eq!(created.page_id.as_deref(), Some("not-yet-created"));

        let replaced = replace_all(
            &db,
            Some("not-yet-created"),
            vec![input("text", Some("not-yet-created"))],
        )
        .await
        .unwrap();
        assert_eq!(replaced.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_all_rewrites_scope_only() {
        let db = test_db().await;
        create(&db, input("hero", None)).await.unwrap();
        create(&db, input("text", None)).await.unwrap();
        let kept = create(&db, input("about", Some("p1"))).await.unwrap();

        let replaced = replace_all(&db, None, vec![input("image", None), input("contact", None)])
            .await
            .unwrap();
        assert_eq!(replaced.len(), 2);
        assert_eq!(replaced[0].section_type, "image");
        assert_eq!(replaced[0].order, 0);
        assert_eq!(replaced[1].order, 1);

        let other_scope = list(&db, Some("p1")).await.unwrap();
        assert_eq!(other_scope.len(), 1);
        assert_eq!(other_scope[0].id, kept.id);

        // Empty list clears the scope
        let cleared = replace_all(&db, None, vec![]).await.unwrap();
        assert!(cleared.is_empty());
        assert!(list(&db, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_one_patches_only_provided_fields() {
        let db = test_db().await;
        let created = create(&db, input("hero", None)).await.unwrap();

        let patch = SectionPatch {
            visible: Some(false),
            ..Default::default()
        };
        let updated = update_one(&db, &created.id, patch).await.unwrap();
        assert!(!updated.visible);
        assert_eq!(updated.section_type, "hero");
        assert_eq!(updated.settings, None);

        let missing = update_one(&db, "nope", SectionPatch::default()).await;
        let err = missing.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShorefrontError>(),
            Some(ShorefrontError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_json_blobs_stored_as_text() {
        let db = test_db().await;
        let created = create(
            &db,
            SectionInput {
                section_type: "hero".to_string(),
                settings: Some(serde_json::json!({ "paddingTop": "large" })),
                content: Some(serde_json::json!({ "title": "X" })),
                visible: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(
            created.settings.as_deref(),
            Some(r#"{"paddingTop":"large"}"#)
        );
        assert_eq!(created.content.as_deref(), Some(r#"{"title":"X"}"#));

        // An explicit null clears the column
        let patch = SectionPatch {
            settings: Some(serde_json::Value::Null),
            ..Default::default()
        };
        let updated = update_one(&db, &created.id, patch).await.unwrap();
        assert_eq!(updated.settings, None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;
        let created = create(&db, input("hero", None)).await.unwrap();
        delete(&db, &created.id).await.unwrap();

        let err = delete(&db, &created.id).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShorefrontError>(),
            Some(ShorefrontError::NotFound(_))
        ));
    }
}
