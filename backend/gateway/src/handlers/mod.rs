pub mod search;
pub mod upload;
