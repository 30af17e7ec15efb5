pub mod catalog;
pub mod domain;
pub mod order;
pub mod shared;
