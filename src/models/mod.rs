pub mod data_url;
pub mod product;
pub mod try_on;

pub use data_url::DataUrl;
pub use product::{image_urls, ImageRef, ProductImage};
pub use try_on::{Completion, TryOnState, TryOnTicket};
