/// Defines the interpretation of the "Payload data".  If an unknown
/// opcode is received, the receiving endpoint MUST _Fail the WebSocket Connection_.
///
/// The decoder only surfaces [`Opcode::Text`] and [`Opcode::Ping`]; every
/// other value, valid or not, fails the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Continuation of a fragmented message. Fragmentation is not supported.
    Continue = 0,

    Text = 1,
    Binary = 2,

    // 3-7 are reserved for further non-control frames.
    Close = 8,

    /// A Ping frame MAY include "Application data".
    /// It SHOULD be answered with a Pong frame carrying identical data as soon as is practical.
    Ping = 9,

    /// A Pong frame sent in response to a Ping frame must have identical
    /// "Application data" as found in the message body of the Ping frame being replied to.
    Pong = 10,
    // 11-15 are reserved for further control frames
}

impl Opcode {
    /// Whether the opcode indicates a control frame.
    #[inline]
    pub fn is_control(self) -> bool {
        self as u8 >= 8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;
    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Opcode::Continue,
            1 => Opcode::Text,
            2 => Opcode::Binary,
            8 => Opcode::Close,
            9 => Opcode::Ping,
            10 => Opcode::Pong,
            _ => return Err(value),
        })
    }
}

impl From<Opcode> for u8 {
    #[inline]
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}
