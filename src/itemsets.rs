pub mod count;
pub mod table;
