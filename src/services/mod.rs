pub mod image_intake;
pub mod try_on_client;

pub use image_intake::{read_as_data_url, ObjectUrl};
pub use try_on_client::{run_try_on, submit_try_on, DesignTransport, TryOnClient};
