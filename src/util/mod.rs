pub mod address;
pub mod parse;
