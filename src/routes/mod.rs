pub mod alert;
pub mod api;
mod entry;
pub mod extract;
pub mod sort;

pub use entry::{API_PREFIX, app, router};
