pub mod adapter;
pub mod binding;
pub mod composite;
pub mod error;
pub mod invoker;
pub mod number;
