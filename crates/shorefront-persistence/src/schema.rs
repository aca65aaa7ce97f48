//! Schema bootstrap for embedded and test databases
//!
//! Production deployments run against an externally managed postgres or
//! mysql schema. For embedded sqlite mode and for tests the tables are
//! created directly from the entity definitions.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema, sea_query::TableCreateStatement};
use tracing::debug;

use crate::entity::{
    footer_widget, media, menu, menu_item, page, page_section, post, setting, sidebar_widget, user,
};

/// Create all Shorefront tables if they do not exist.
pub async fn create_tables(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements: Vec<TableCreateStatement> = vec![
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(page::Entity),
        schema.create_table_from_entity(page_section::Entity),
        schema.create_table_from_entity(post::Entity),
        schema.create_table_from_entity(setting::Entity),
        schema.create_table_from_entity(menu::Entity),
        schema.create_table_from_entity(menu_item::Entity),
        schema.create_table_from_entity(footer_widget::Entity),
        schema.create_table_from_entity(sidebar_widget::Entity),
        schema.create_table_from_entity(media::Entity),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    debug!("database tables ensured");

    Ok(())
}
