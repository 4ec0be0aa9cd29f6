pub mod growth;
pub mod normalized;
pub mod point;
