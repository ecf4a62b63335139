pub mod delete_user;
pub mod entities;
pub mod get_user_by_id;
pub mod health_check;
pub mod register;
pub mod routes;
pub mod update_user;
