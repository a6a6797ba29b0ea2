#![allow(dead_code)]
pub mod time;
pub mod upstream;

pub use time::*;
pub use upstream::*;
