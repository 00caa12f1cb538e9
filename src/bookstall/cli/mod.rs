pub mod print;
pub mod styles;
