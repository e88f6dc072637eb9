pub mod customer;
pub mod file;
pub mod product;
pub mod transaction;
