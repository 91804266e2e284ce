#![allow(dead_code, unused_imports)]
pub mod course_api_helpers;
pub mod test_db;

pub use course_api_helpers::*;
pub use test_db::*;
