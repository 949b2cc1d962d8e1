//! UI Components
//!
//! Screens and reusable Leptos components.

mod admins_page;
mod alert_modal;
mod confirm_modal;
mod content_page;
mod dashboard_page;
mod loading_screen;
mod login_page;
mod mood_questions;
mod page_controls;
mod profile_modal;
mod sessions_page;
mod sidebar;
mod sound_panel;
mod users_page;

// Re-export all public items
pub use admins_page::AdminsPage;
pub use alert_modal::AlertModal;
pub use confirm_modal::ConfirmModal;
pub use content_page::ContentPage;
pub use dashboard_page::DashboardPage;
pub use loading_screen::LoadingScreen;
pub use login_page::LoginPage;
pub use mood_questions::MoodQuestionsModal;
pub use page_controls::PageControls;
pub use profile_modal::ProfileModal;
pub use sessions_page::SessionsPage;
pub use sidebar::Sidebar;
pub use sound_panel::SoundPanel;
pub use users_page::UsersPage;
