//! Media record service layer

use sea_orm::*;
use serde::Deserialize;
use uuid::Uuid;

use shorefront_common::ShorefrontError;
use shorefront_persistence::entity::media;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedia {
    pub file_name: String,
    pub url: String,
    pub mime_type: String,
    pub size: i64,
}

pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<media::Model>> {
    let records = media::Entity::find()
        .order_by_desc(media::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(records)
}

pub async fn create(db: &DatabaseConnection, input: CreateMedia) -> anyhow::Result<media::Model> {
    let entity = media::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        file_name: Set(input.file_name),
        url: Set(input.url),
        mime_type: Set(input.mime_type),
        size: Set(input.size),
        created_at: Set(chrono::Utc::now()),
    };

    let model = entity.insert(db).await?;

    Ok(model)
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<()> {
    let res = media::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ShorefrontError::NotFound("media".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorefront_persistence::create_tables;

    #[tokio::test]
    async fn test_media_record_lifecycle() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        create_tables(&db).await.unwrap();

        let created = create(
            &db,
            CreateMedia {
                file_name: "hero.jpg".to_string(),
                url: "/uploads/hero.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                size: 123456,
            },
        )
        .await
        .unwrap();

        let listed = list(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].file_name, "hero.jpg");

        delete(&db, &created.id).await.unwrap();
        let err = delete(&db, &created.id).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShorefrontError>(),
            Some(ShorefrontError::NotFound(_))
        ));
    }
}
