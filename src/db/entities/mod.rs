#[allow(unused_imports)]
pub mod prelude {
    pub use super::alarm::Entity as Alarm;
    pub use super::user_login::Entity as UserLogin;
}

pub mod alarm;
pub mod user_login;
