pub mod dashboard;
pub mod history;

pub use dashboard::dashboard_page;
pub use history::history_page;
