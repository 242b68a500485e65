pub mod try_on_store;

pub use try_on_store::TryOnSessionStore;
