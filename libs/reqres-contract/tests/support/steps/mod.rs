pub mod given;
pub mod then_register;
pub mod then_user;
pub mod when_register;
pub mod when_user;
