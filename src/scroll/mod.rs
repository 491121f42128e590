pub mod binder;
pub mod pin;
