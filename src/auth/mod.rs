//! Authentication: password digests and token sessions.

mod digest;
mod session;

pub use digest::password_digest;
pub use session::{SessionManager, SESSION_TTL_SECS};
