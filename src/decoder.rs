#![allow(clippy::unusual_byte_groupings)]
use crate::{mask::apply_mask, utils::take, DecodeError, Opcode};
use tracing::{trace, warn};

/// Default value of [`FrameDecoder::max_payload_len`]: 16 MB
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

/// Result of a single [`FrameDecoder::decode_next`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not enough bytes to decode the next frame. Nothing was consumed;
    /// append more input and call again.
    Incomplete,
    /// A complete text frame.
    Message(Box<str>),
    /// A complete ping frame. The caller is expected to answer with a pong
    /// echoing this payload.
    Ping(Box<[u8]>),
    /// Protocol violation. The connection must be closed.
    Error(DecodeError),
}

/// Incremental decoder over a caller-owned buffer.
///
/// The decoder only remembers where the next undecoded frame starts. Each
/// call re-parses the frame at that position from scratch, so a partially
/// received header costs nothing but a retry.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    /// Maximum allowed payload length in bytes.
    ///
    /// Default: 16 MB
    pub max_payload_len: usize,

    cursor: usize,
    failed: Option<DecodeError>,
}

impl Default for FrameDecoder {
    #[inline]
    fn default() -> Self {
        Self::with_max_payload_len(DEFAULT_MAX_PAYLOAD_LEN)
    }
}

impl FrameDecoder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_max_payload_len(max_payload_len: usize) -> Self {
        Self {
            max_payload_len,
            cursor: 0,
            failed: None,
        }
    }

    /// Number of leading bytes of the buffer that have been decoded and may
    /// be discarded by the caller.
    #[inline]
    pub fn bytes_decoded(&self) -> usize {
        self.cursor
    }

    /// Whether a protocol error has been reported. A failed decoder keeps
    /// returning that error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed.is_some()
    }

    /// Drop the decoded prefix of `buf` and rebase the cursor onto the
    /// remaining bytes.
    ///
    /// This is the only operation that moves the cursor backwards: after it,
    /// [`Self::bytes_decoded`] counts from the start of the compacted buffer,
    /// not from the start of the stream. The decoder never calls it itself.
    pub fn compact(&mut self, buf: &mut Vec<u8>) {
        let decoded = self.cursor.min(buf.len());
        buf.drain(..decoded);
        self.cursor = 0;
    }

    /// Try to decode exactly one frame starting at [`Self::bytes_decoded`].
    ///
    /// `buf` must be the same buffer (possibly extended) that was passed to
    /// earlier calls.
    ///
    /// ### Example
    ///
    /// ```rust
    /// use hybi_decoder::{FrameDecoder, Outcome};
    ///
    /// let mut buf = vec![0x89, 0x02, b'h'];
    /// let mut decoder = FrameDecoder::new();
    /// assert_eq!(decoder.decode_next(&buf), Outcome::Incomplete);
    ///
    /// buf.push(b'i');
    /// assert_eq!(decoder.decode_next(&buf), Outcome::Ping((*b"hi").into()));
    /// assert_eq!(decoder.bytes_decoded(), 4);
    /// ```
    pub fn decode_next(&mut self, buf: &[u8]) -> Outcome {
        if let Some(err) = self.failed {
            return Outcome::Error(err);
        }
        match self.parse(buf) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(cursor = self.cursor, error = %err, "hybi protocol violation");
                self.failed = Some(err);
                Outcome::Error(err)
            }
        }
    }

    // ### WebSocket Frame Header
    //
    // ```txt
    //  0                   1                   2                   3
    //  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    // +-+-+-+-+-------+-+-------------+-------------------------------+
    // |F|R|R|R| opcode|M| Payload len |    Extended payload length    |
    // |I|S|S|S|  (4)  |A|     (7)     |             (16/64)           |
    // |N|V|V|V|       |S|             |   (if payload len==126/127)   |
    // | |1|2|3|       |K|             |                               |
    // +-+-+-+-+-------+-+-------------+ - - - - - - - - - - - - - - - +
    // |     Extended payload length continued, if payload len == 127  |
    // + - - - - - - - - - - - - - - - +-------------------------------+
    // |                               |Masking-key, if MASK set to 1  |
    // +-------------------------------+-------------------------------+
    // | Masking-key (continued)       |          Payload Data         |
    // +-------------------------------- - - - - - - - - - - - - - - - +
    // :                     Payload Data continued ...                :
    // + - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - +
    // |                     Payload Data continued ...                |
    // +---------------------------------------------------------------+
    // ```
    fn parse(&mut self, buf: &[u8]) -> Result<Outcome, DecodeError> {
        // All offsets below are relative to the start of the current frame.
        let frame = match buf.get(self.cursor..) {
            Some(frame) => frame,
            None => return Ok(Outcome::Incomplete),
        };
        let [b1, b2] = match take::<2>(frame, 0) {
            Some(head) => head,
            None => return Ok(Outcome::Incomplete),
        };

        let fin = b1 & 0b_1000_0000 != 0;
        let rsv = b1 & 0b_111_0000;
        let opcode = b1 & 0b_1111;
        let is_masked = b2 & 0b_1000_0000 != 0;

        if !fin {
            return Err(DecodeError::UnsupportedFragmentation);
        }
        // MUST be `0` unless an extension is negotiated that defines meanings
        // for non-zero values.
        if rsv != 0 {
            return Err(DecodeError::ReservedBitsSet);
        }

        let (len, mut offset) = match b2 & 0b_111_1111 {
            126 => match take::<2>(frame, 2) {
                Some(bytes) => (u16::from_be_bytes(bytes) as u64, 4),
                None => return Ok(Outcome::Incomplete),
            },
            127 => match take::<8>(frame, 2) {
                Some(bytes) => (u64::from_be_bytes(bytes), 10),
                None => return Ok(Outcome::Incomplete),
            },
            len => (len as u64, 2),
        };
        // Control frames MUST have a payload length of 125 bytes or less.
        if len > 125 && matches!(Opcode::try_from(opcode), Ok(op) if op.is_control()) {
            return Err(DecodeError::ControlFrameTooLarge(len));
        }
        let len = match usize::try_from(len) {
            Ok(n) if n <= self.max_payload_len => n,
            _ => {
                return Err(DecodeError::PayloadTooLarge {
                    len,
                    max: self.max_payload_len,
                })
            }
        };

        let mut key = None;
        if is_masked {
            match take::<4>(frame, offset) {
                Some(bytes) => key = Some(bytes),
                None => return Ok(Outcome::Incomplete),
            }
            offset += 4;
        }

        if frame.len() - offset < len {
            return Ok(Outcome::Incomplete);
        }
        let mut data = frame[offset..offset + len].to_vec();
        if let Some(key) = key {
            apply_mask(&mut data, key);
        }
        self.cursor += offset + len;
        trace!(opcode, len, is_masked, cursor = self.cursor, "decoded frame");

        match Opcode::try_from(opcode) {
            Ok(Opcode::Text) => String::from_utf8(data)
                .map(|text| Outcome::Message(text.into_boxed_str()))
                .map_err(|_| DecodeError::InvalidUtf8),
            Ok(Opcode::Ping) => Ok(Outcome::Ping(data.into_boxed_slice())),
            _ => Err(DecodeError::UnknownOpcode(opcode)),
        }
    }
}
