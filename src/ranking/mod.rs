pub mod compare;
pub mod insights;
pub mod price;
pub mod query;
pub mod score;
