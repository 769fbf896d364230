mod api;
mod component;
mod session;

pub use component::UploadControl;
pub use session::Status;
