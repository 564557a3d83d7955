pub mod auth_form;
pub mod auth_layout;
pub mod field_input;
