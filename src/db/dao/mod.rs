pub mod alarm_dao;
pub mod base;
mod context;
pub mod error;
pub mod user_login_dao;

pub use alarm_dao::AlarmDao;
pub use base::{DaoBase, IdValueOf};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use user_login_dao::UserLoginDao;
