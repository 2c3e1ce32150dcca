pub mod chart;
pub mod layout;
pub mod modal;
pub mod stat_card;
pub mod toast;

pub use chart::{BarChart, BarChartSpec};
pub use layout::{page_shell, Layout};
pub use modal::Modal;
pub use stat_card::{StatCard, StatIcon};
pub use toast::ToastHost;
