//! `SeaORM` Entity for the footer_widget table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "footer_widget")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Footer column the widget lives in (0-based)
    pub column_index: i32,
    #[sea_orm(nullable)]
    pub title: Option<String>,
    /// text | links — selects whether `content` is free text or a JSON
    /// array of {label, url}
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub widget_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
