//! Incremental decoder for RFC 6455 ("hybi") WebSocket framing.
//!
//! The decoder never owns the socket buffer. The caller appends received
//! bytes to its own `Vec<u8>` and calls [`FrameDecoder::decode_next`] until
//! it reports [`Outcome::Incomplete`].
//!
//! ### Example
//!
//! ```rust
//! use hybi_decoder::{FrameDecoder, Outcome};
//!
//! let buf = [0x81, 0x05, b'H', b'e', b'l', b'l', b'o'];
//! let mut decoder = FrameDecoder::new();
//!
//! assert_eq!(decoder.decode_next(&buf), Outcome::Message("Hello".into()));
//! assert_eq!(decoder.bytes_decoded(), 7);
//! assert_eq!(decoder.decode_next(&buf), Outcome::Incomplete);
//! ```
mod errors;
mod mask;
mod utils;

pub mod decoder;
pub mod frame;
pub mod opcode;

pub use decoder::*;
pub use errors::DecodeError;
pub use mask::apply_mask;
pub use opcode::Opcode;
pub use utils::{read_into, send_pong};

use errors::*;
