pub mod alarms;
mod router;
pub mod user_logins;
pub mod validation;

pub use router::router;
