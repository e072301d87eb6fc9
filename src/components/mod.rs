//! UI Components
//!
//! Reusable Leptos components shared by both dashboards.

mod bar_chart;
mod delete_confirm_button;
mod notice_bar;
mod profile_card;
mod session_gate;
mod sidebar;
mod stat_card;
mod status_modal;

pub use bar_chart::BarChart;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_bar::{LoadBanner, NoticeBar};
pub use profile_card::{ProfileCard, ProfileKind};
pub use session_gate::SessionGate;
pub use sidebar::Sidebar;
pub use stat_card::{RecentEntry, RecentList, StatCard};
pub use status_modal::{PromptModal, StatusBadge, StatusFilterSelect, StatusModal};
