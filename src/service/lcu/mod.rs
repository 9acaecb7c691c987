pub mod client;
pub mod locator;
pub mod parsing;
