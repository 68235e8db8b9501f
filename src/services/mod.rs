pub mod alarm_service;
pub mod context;
pub mod crud_service;
pub mod user_login_service;

pub use context::ServiceContext;
