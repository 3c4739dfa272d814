pub mod field;
pub mod layout;
pub mod modal;
pub mod page;
pub mod sidebar;
pub mod spinner;
pub mod user_filters;
pub mod user_modals;

pub use field::{SelectField, TextField};
pub use layout::{AdminLayout, ProtectedLayout};
pub use modal::Modal;
pub use page::Page;
pub use sidebar::Sidebar;
pub use spinner::LoadingOverlay;
pub use user_filters::UserFilters;
pub use user_modals::{UserDetailModal, UserEditModal};
