pub mod error;
pub mod session_store;

pub use error::SessionError;
pub use session_store::SessionStore;
