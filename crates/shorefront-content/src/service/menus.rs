//! Menu service layer
//!
//! Menu items form a two-level tree via `parent_id`. The tree is stored
//! flat and reassembled here, ordered within each level.

use sea_orm::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shorefront_common::ShorefrontError;
use shorefront_persistence::entity::{menu, menu_item};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemNode {
    #[serde(flatten)]
    pub item: menu_item::Model,
    pub children: Vec<menu_item::Model>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuWithItems {
    #[serde(flatten)]
    pub menu: menu::Model,
    pub items: Vec<MenuItemNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub children: Vec<MenuItemInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenu {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItemInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenu {
    pub name: Option<String>,
    pub location: Option<String>,
    /// When present, replaces the menu's items wholesale.
    pub items: Option<Vec<MenuItemInput>>,
}

fn assemble(menu: menu::Model, mut items: Vec<menu_item::Model>) -> MenuWithItems {
    items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

    let (top, nested): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|item| item.parent_id.is_none());

    let items = top
        .into_iter()
        .map(|item| {
            let children = nested
                .iter()
                .filter(|child| child.parent_id.as_deref() == Some(item.id.as_str()))
                .cloned()
                .collect();
            MenuItemNode { item, children }
        })
        .collect();

    MenuWithItems { menu, items }
}

async fn load_items<C: ConnectionTrait>(
    db: &C,
    menu_id: &str,
) -> anyhow::Result<Vec<menu_item::Model>> {
    let items = menu_item::Entity::find()
        .filter(menu_item::Column::MenuId.eq(menu_id))
        .order_by_asc(menu_item::Column::Order)
        .all(db)
        .await?;

    Ok(items)
}

async fn insert_items<C: ConnectionTrait>(
    db: &C,
    menu_id: &str,
    items: Vec<MenuItemInput>,
) -> anyhow::Result<()> {
    for (index, input) in items.into_iter().enumerate() {
        let parent_id = Uuid::new_v4().to_string();
        let entity = menu_item::ActiveModel {
            id: Set(parent_id.clone()),
            menu_id: Set(menu_id.to_string()),
            label: Set(input.label),
            url: Set(input.url),
            parent_id: Set(None),
            order: Set(input.order.unwrap_or(index as i32)),
        };
        entity.insert(db).await?;

        for (child_index, child) in input.children.into_iter().enumerate() {
            let entity = menu_item::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                menu_id: Set(menu_id.to_string()),
                label: Set(child.label),
                url: Set(child.url),
                parent_id: Set(Some(parent_id.clone())),
                order: Set(child.order.unwrap_or(child_index as i32)),
            };
            entity.insert(db).await?;
        }
    }

    Ok(())
}

pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<MenuWithItems>> {
    let menus = menu::Entity::find()
        .order_by_asc(menu::Column::Name)
        .all(db)
        .await?;

    let mut result = Vec::with_capacity(menus.len());
    for menu in menus {
        let items = load_items(db, &menu.id).await?;
        result.push(assemble(menu, items));
    }

    Ok(result)
}

pub async fn get(db: &DatabaseConnection, id: &str) -> anyhow::Result<MenuWithItems> {
    let menu = menu::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("menu".to_string())))?;
    let items = load_items(db, &menu.id).await?;

    Ok(assemble(menu, items))
}

/// The menu placed in a layout slot ("header", "footer"), if any.
pub async fn find_by_location(
    db: &DatabaseConnection,
    location: &str,
) -> anyhow::Result<Option<MenuWithItems>> {
    let menu = menu::Entity::find()
        .filter(menu::Column::Location.eq(location))
        .one(db)
        .await?;

    match menu {
        Some(menu) => {
            let items = load_items(db, &menu.id).await?;
            Ok(Some(assemble(menu, items)))
        }
        None => Ok(None),
    }
}

pub async fn create(db: &DatabaseConnection, input: CreateMenu) -> anyhow::Result<MenuWithItems> {
    if input.name.is_empty() {
        return Err(ShorefrontError::IllegalArgument("Menu name is required".to_string()).into());
    }

    let txn = db.begin().await?;
    let entity = menu::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(input.name),
        location: Set(input.location),
    };
    let created = entity.insert(&txn).await?;
    insert_items(&txn, &created.id, input.items).await?;
    txn.commit().await?;

    get(db, &created.id).await
}

/// Update name/location; when `items` is present the old items are
/// replaced wholesale.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    input: UpdateMenu,
) -> anyhow::Result<MenuWithItems> {
    let existing = menu::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::Error::from(ShorefrontError::NotFound("menu".to_string())))?;

    let txn = db.begin().await?;

    let mut entity: menu::ActiveModel = existing.into();
    if let Some(name) = input.name {
        entity.name = Set(name);
    }
    if let Some(location) = input.location {
        entity.location = Set(Some(location));
    }
    if entity.is_changed() {
        entity.update(&txn).await?;
    }

    if let Some(items) = input.items {
        menu_item::Entity::delete_many()
            .filter(menu_item::Column::MenuId.eq(id))
            .exec(&txn)
            .await?;
        insert_items(&txn, id, items).await?;
    }

    txn.commit().await?;

    get(db, id).await
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<()> {
    let txn = db.begin().await?;
    menu_item::Entity::delete_many()
        .filter(menu_item::Column::MenuId.eq(id))
        .exec(&txn)
        .await?;
    let res = menu::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    if res.rows_affected == 0 {
        return Err(ShorefrontError::NotFound("menu".to_string()).into());
    }

    Ok(())
}
