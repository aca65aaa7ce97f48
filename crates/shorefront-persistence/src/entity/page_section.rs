//! `SeaORM` Entity for the page_section table
//!
//! One composable block of a page. `page_id = NULL` designates the singleton
//! homepage slot; absence of a parent page is a valid, meaningful state.
//! `settings` and `content` are opaque JSON text at this layer and are given
//! typed shape in shorefront-content at render time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_section")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(nullable)]
    pub page_id: Option<String>,
    /// Section discriminator: hero, products, about, text, image, contact
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub section_type: String,
    /// Display sequence within the page scope; relatively ordered, not
    /// required to be contiguous
    pub order: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub settings: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub visible: bool,
}

// `page_id` is deliberately not modeled as a relation: a scope may point
// at a page row that does not exist yet, and the homepage scope never has
// one. A foreign key would reject both.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
