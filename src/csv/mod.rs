pub mod blank;
pub mod input;
pub mod parser;
pub mod records;
