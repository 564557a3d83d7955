pub mod auth_demo;
pub mod auth_page;
pub mod dashboard;
pub mod not_found;
