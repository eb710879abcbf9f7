//! HTML template rendering handlers.

mod analytics;
mod create;
mod save;

pub use analytics::analytics_page_handler;
pub use create::create_handler;
pub use save::save_handler;
