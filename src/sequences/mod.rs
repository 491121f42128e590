pub mod intro;
pub mod sections;
