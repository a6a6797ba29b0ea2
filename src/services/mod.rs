pub mod fetch;
pub mod holiday_service;
pub mod normalize;
pub mod selector;
pub mod time_service;

pub use fetch::*;
pub use holiday_service::*;
pub use normalize::*;
pub use selector::*;
pub use time_service::*;
