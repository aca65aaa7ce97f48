//! SeaORM entity definitions for the Shorefront schema

pub mod footer_widget;
pub mod media;
pub mod menu;
pub mod menu_item;
pub mod page;
pub mod page_section;
pub mod post;
pub mod setting;
pub mod sidebar_widget;
pub mod user;

pub mod prelude {
    pub use super::footer_widget::Entity as FooterWidget;
    pub use super::media::Entity as Media;
    pub use super::menu::Entity as Menu;
    pub use super::menu_item::Entity as MenuItem;
    pub use super::page::Entity as Page;
    pub use super::page_section::Entity as PageSection;
    pub use super::post::Entity as Post;
    pub use super::setting::Entity as Setting;
    pub use super::sidebar_widget::Entity as SidebarWidget;
    pub use super::user::Entity as User;
}
