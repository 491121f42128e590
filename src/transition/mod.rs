pub mod coordinator;
pub mod overlay;
