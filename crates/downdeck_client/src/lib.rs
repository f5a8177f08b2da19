//! Downdeck client: the HTTP boundary to the download executor.
mod api;
mod error;
mod handle;
mod types;

pub use api::{ClientSettings, HttpStatusApi, StatusApi};
pub use error::ApiError;
pub use handle::{ClientCommand, ClientEvent, ClientHandle};
