pub mod rule;
pub mod search;
