pub mod error_info;
pub mod render_error;
pub mod reset_keys;
