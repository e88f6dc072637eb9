pub mod customer;
pub mod file;
pub mod payment;
pub mod product;
pub mod transaction;
