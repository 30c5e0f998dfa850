pub mod config;
pub mod error;
pub mod event;
pub mod process;
pub mod state;
pub mod tokio;
pub mod validator;
