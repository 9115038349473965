pub mod catalog;
pub mod statics;
