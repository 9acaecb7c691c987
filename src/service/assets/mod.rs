pub mod catalog;
pub mod store;

pub use store::AssetStore;
