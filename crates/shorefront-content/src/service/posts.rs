//! Post service layer
//!
//! Same shape as pages without the reserved-slug rules or per-page
//! settings blob.

use sea_orm::*;
use serde::Deserialize;
use uuid::Uuid;

use shorefront_common::{PublishStatus, ShorefrontError};
use shorefront_persistence::entity::{post, user};

use super::pages::slugify;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
}

pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<post::Model>> {
    let posts = post::Entity::find()
        .order_by_desc(post::Column::UpdatedAt)
        .all(db)
        .await?;

    Ok(posts)
}

pub async fn get(db: &DatabaseConnection, id: &str) -> anyhow::Result<post::Model> {
    post::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ShorefrontError::NotFound("post".to_string()).into())
}

async fn slug_taken(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<&str>,
) -> anyhow::Result<bool> {
    let mut query = post::Entity::find().filter(post::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        query = query.filter(post::Column::Id.ne(id));
    }

    Ok(query.one(db).await?.is_some())
}

pub async fn create(db: &DatabaseConnection, input: CreatePost) -> anyhow::Result<post::Model> {
    let author = user::Entity::find()
        .filter(user::Column::Role.eq("admin"))
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NoAdminUser))?;

    let slug = input
        .slug
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| slugify(&input.title));
    if slug_taken(db, &slug, None).await? {
        return Err(ShorefrontError::SlugConflict(slug).into());
    }

    let status = input
        .status
        .unwrap_or_else(|| PublishStatus::Draft.as_str().to_string());
    let published_at = if status == PublishStatus::Published.as_str() {
        Some(chrono::Utc::now())
    } else {
        None
    };
    let now = chrono::Utc::now();

    let entity = post::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(input.title),
        slug: Set(slug),
        content: Set(input.content.unwrap_or_default()),
        excerpt: Set(input.excerpt),
        status: Set(status),
        author_id: Set(author.id),
        published_at: Set(published_at),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = entity.insert(db).await?;

    Ok(model)
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    input: UpdatePost,
) -> anyhow::Result<post::Model> {
    let existing = post::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("post".to_string())))?;
    let had_published_at = existing.published_at.is_some();

    if let Some(slug) = input.slug.as_deref()
        && slug != existing.slug
        && slug_taken(db, slug, Some(id)).await?
    {
        return Err(ShorefrontError::SlugConflict(slug.to_string()).into());
    }

    let mut entity: post::ActiveModel = existing.into();
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
        if status == PublishStatus::Published.as_str() && !had_published_at {
            entity.published_at = Set(Some(chrono::Utc::now()));
        }
        entity.status = Set(status);
    }
    entity.updated_at = Set(chrono::Utc::now());

    let model = entity.update(db).await?;

    Ok(model)
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<()> {
    let res = post::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ShorefrontError::NotFound("post".to_string()).into());
    }

    Ok(())
}
