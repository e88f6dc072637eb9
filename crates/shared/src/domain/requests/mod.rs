pub mod customer;
pub mod file;
pub mod pagination;
pub mod payment;
pub mod product;
pub mod transaction;
