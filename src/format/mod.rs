pub mod links;
pub mod numbers;
