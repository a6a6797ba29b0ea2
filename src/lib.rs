pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod shared;
pub mod storage;

pub use config::*;
pub use errors::*;
pub use models::*;
pub use services::*;
pub use storage::*;
