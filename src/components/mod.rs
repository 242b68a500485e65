pub mod app;
pub mod image_input;
pub mod product_images;
pub mod try_out;
pub mod virtual_room;

pub use app::App;
pub use image_input::ImageFileInput;
pub use product_images::ProductImages;
pub use try_out::TryOut;
pub use virtual_room::VirtualRoom;
