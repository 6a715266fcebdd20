pub mod error;
pub mod news;
