//! Wire protocol for the collaborative canvas. Pure parsing and path
//! construction, no browser APIs, so everything here tests natively.

pub mod error;
pub mod protocol;

pub use error::ProtocolError;
pub use protocol::{decode_update, draw_path, snapshot_path, stream_path, RemoteUpdate, StreamMessage};
