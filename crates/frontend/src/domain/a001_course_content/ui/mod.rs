pub mod add;
pub mod list;
pub mod page;
pub mod upload;
