//! UI Components
//!
//! Leptos components for the login and task list pages.

mod login_form;
mod logout_banner;
mod new_item_form;
mod category_filter;
mod task_list;
mod removal_modal;

pub use login_form::LoginForm;
pub use logout_banner::LogoutBanner;
pub use new_item_form::NewItemForm;
pub use category_filter::CategoryFilterPanel;
pub use task_list::TaskList;
pub use removal_modal::RemovalModal;
