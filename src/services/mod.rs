pub mod catalog;
pub mod session;
pub mod sweeper;
pub mod upload;
