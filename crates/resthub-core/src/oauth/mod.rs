//! OAuth2 protocol-level types

mod protocol_error;

pub use protocol_error::{ProtocolError, ProtocolErrorKind};
