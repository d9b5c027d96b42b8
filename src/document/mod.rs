pub mod host;
pub mod page;
