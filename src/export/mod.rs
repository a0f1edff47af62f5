pub mod escape;
pub mod report;
