pub mod context;
pub mod database;
pub mod env;
pub mod error;
pub mod init;
pub mod state;
