pub mod account;
pub mod rank;
