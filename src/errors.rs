use std::io::Error;
pub use std::io::ErrorKind;

use thiserror::Error;

/// Protocol violations detected while decoding a frame.
///
/// Every variant is fatal to the connection: frame boundaries are only known
/// by parsing the previous frame, so there is nothing to resynchronize on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// FIN bit clear. Fragmented messages are not reassembled.
    #[error("non-final frames are unsupported")]
    UnsupportedFragmentation,

    /// RSV1, RSV2 or RSV3 set without a negotiated extension.
    #[error("reserved bits set")]
    ReservedBitsSet,

    /// Opcode other than `Text` or `Ping`.
    #[error("unknown or unhandled opcode: {0:#x}")]
    UnknownOpcode(u8),

    /// Control frame (Close, Ping, Pong) with a payload over 125 bytes.
    #[error("control frame payload too large: {0} bytes")]
    ControlFrameTooLarge(u64),

    /// Payload length field exceeds `max_payload_len`.
    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: u64, max: usize },

    /// Text payload is not valid UTF-8.
    #[error("invalid utf-8 payload")]
    InvalidUtf8,
}

impl From<DecodeError> for Error {
    #[inline]
    fn from(err: DecodeError) -> Self {
        invalid_data(err)
    }
}

type DynErr = Box<dyn std::error::Error + Send + Sync>;

pub fn err<T>(kind: ErrorKind, msg: impl Into<DynErr>) -> std::io::Result<T> {
    Err(Error::new(kind, msg))
}

pub fn invalid_data(msg: impl Into<DynErr>) -> Error {
    Error::new(ErrorKind::InvalidData, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_invalid_data() {
        let err = Error::from(DecodeError::ReservedBitsSet);
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "reserved bits set");
    }

    #[test]
    fn unknown_opcode_is_hex() {
        assert_eq!(
            DecodeError::UnknownOpcode(0xB).to_string(),
            "unknown or unhandled opcode: 0xb"
        );
    }
}
