//! Request and response DTOs for the Web API.

mod request;
mod response;

pub use request::*;
pub use response::*;
