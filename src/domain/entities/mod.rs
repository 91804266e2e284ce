mod assignment;
mod course;

pub use assignment::*;
pub use course::*;
