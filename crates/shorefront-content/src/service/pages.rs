//! Page service layer

use sea_orm::*;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use shorefront_common::{HOME_SLUG, PublishStatus, ShorefrontError};
use shorefront_persistence::entity::{page, page_section, user};

use super::json_text;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePage {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub settings: Option<Value>,
}

/// Turn a title into a URL slug the same way the admin UI does.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// All pages, most recently updated first.
pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<page::Model>> {
    let pages = page::Entity::find()
        .order_by_desc(page::Column::UpdatedAt)
        .all(db)
        .await?;

    Ok(pages)
}

pub async fn get(db: &DatabaseConnection, id: &str) -> anyhow::Result<page::Model> {
    page::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ShorefrontError::NotFound("page".to_string()).into())
}

/// Published page by slug; drafts and unknown slugs are both `None`.
pub async fn find_published_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> anyhow::Result<Option<page::Model>> {
    let found = page::Entity::find()
        .filter(page::Column::Slug.eq(slug))
        .filter(page::Column::Status.eq(PublishStatus::Published.as_str()))
        .one(db)
        .await?;

    Ok(found)
}

async fn first_admin(db: &DatabaseConnection) -> anyhow::Result<user::Model> {
    user::Entity::find()
        .filter(user::Column::Role.eq("admin"))
        .one(db)
        .await?
        .ok_or_else(|| ShorefrontError::NoAdminUser.into())
}

async fn slug_taken(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<&str>,
) -> anyhow::Result<bool> {
    let mut query = page::Entity::find().filter(page::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        query = query.filter(page::Column::Id.ne(id));
    }

    Ok(query.one(db).await?.is_some())
}

/// Create a page attributed to the first admin user.
pub async fn create(db: &DatabaseConnection, input: CreatePage) -> anyhow::Result<page::Model> {
    let author = first_admin(db).await?;

    let slug = input
        .slug
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| slugify(&input.title));
    if slug_taken(db, &slug, None).await? {
        return Err(ShorefrontError::SlugConflict(slug).into());
    }

    let status = input.status.unwrap_or_else(|| PublishStatus::Draft.as_str().to_string());
    let published_at = if status == PublishStatus::Published.as_str() {
        Some(chrono::Utc::now())
    } else {
        None
    };
    let now = chrono::Utc::now();

    let entity = page::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(input.title),
        slug: Set(slug),
        content: Set(input.content.unwrap_or_default()),
        excerpt: Set(input.excerpt),
        status: Set(status),
        settings: Set(json_text(input.settings)),
        author_id: Set(author.id),
        published_at: Set(published_at),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = entity.insert(db).await?;

    Ok(model)
}

/// Patch a page; publishing for the first time stamps `published_at`.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    input: UpdatePage,
) -> anyhow::Result<page::Model> {
    let existing = page::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("page".to_string())))?;
    let was_published = existing.status == PublishStatus::Published.as_str();
    let had_published_at = existing.published_at.is_some();

    if let Some(slug) = input.slug.as_deref()
        && slug != existing.slug
        && slug_taken(db, slug, Some(id)).await?
    {
        return Err(ShorefrontError::SlugConflict(slug.to_string()).into());
    }

    let mut entity: page::ActiveModel = existing.into();
    if let Some(title) = input.title {
        entity.title = Set(title);
    }
    if let Some(slug) = input.slug {
        entity.slug = Set(slug);
    }
    if let Some(content) = input.content {
        entity.content = Set(content);
    }
    if let Some(excerpt) = input.excerpt {
        entity.excerpt = Set(Some(excerpt));
    }
    if let Some(status) = input.status {
        if status == PublishStatus::Published.as_str() && (!was_published || !had_published_at) {
            entity.published_at = Set(Some(chrono::Utc::now()));
        }
        entity.status = Set(status);
    }
    if let Some(settings) = input.settings {
        entity.settings = Set(json_text(Some(settings)));
    }
    entity.updated_at = Set(chrono::Utc::now());

    let model = entity.update(db).await?;

    Ok(model)
}

/// Delete a page and its sections. The homepage row is protected.
pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<()> {
    let existing = page::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("page".to_string())))?;

    if existing.slug == HOME_SLUG {
        return Err(ShorefrontError::HomePageProtected.into());
    }

    let txn = db.begin().await?;
    page_section::Entity::delete_many()
        .filter(page_section::Column::PageId.eq(id))
        .exec(&txn)
        .await?;
    page::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    Ok(())
}
