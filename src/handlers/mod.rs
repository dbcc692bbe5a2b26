pub mod input_handler;
pub mod session_handler;
