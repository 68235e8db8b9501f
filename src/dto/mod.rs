pub mod alarm;
pub mod user_login;

pub use alarm::{AlarmDto, UserLoginRef};
pub use user_login::{UserLoginDto, UserLoginFields};
