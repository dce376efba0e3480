//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod editable_title;
mod inline_error;
mod drop_slot;
mod new_item_form;
mod login_screen;
mod top_bar;
mod search_box;
mod organization_sidebar;
mod board_grid;
mod board_view;
mod list_column;
mod card_item;
mod card_detail;

pub use delete_confirm_button::ConfirmButton;
pub use editable_title::EditableTitle;
pub use inline_error::InlineError;
pub use drop_slot::DropSlot;
pub use new_item_form::NewItemForm;
pub use login_screen::LoginScreen;
pub use top_bar::TopBar;
pub use search_box::SearchBox;
pub use organization_sidebar::OrganizationSidebar;
pub use board_grid::BoardGrid;
pub use board_view::BoardView;
pub use list_column::ListColumn;
pub use card_item::CardItem;
pub use card_detail::CardDetail;
