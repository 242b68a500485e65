pub mod session_context;
pub mod use_image_intake;
pub mod use_try_on;
pub mod use_try_on_session;

pub use session_context::{use_session_context, TryOnSessionProvider};
pub use use_image_intake::{use_image_intake, UseImageIntakeHandle};
pub use use_try_on::{use_try_on, UseTryOnHandle};
pub use use_try_on_session::{use_try_on_session, TryOnSessionAction, UseTryOnSessionHandle};
