// GUI Components module
pub mod badges;
mod error_panel;
mod pagination;
mod search_bar;
mod sidebar;
mod status_bar;
mod user_card;

pub use error_panel::ErrorPanel;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use sidebar::{Sidebar, SidebarAction};
pub use status_bar::{Notice, StatusBar};
pub use user_card::UserCard;
