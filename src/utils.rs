use crate::frame::encode;
use crate::{err, ErrorKind, Opcode};
use std::io::Result;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Read `N` bytes of `buf` starting at `at`, if they are all present.
#[inline]
pub fn take<const N: usize>(buf: &[u8], at: usize) -> Option<[u8; N]> {
    buf.get(at..at.checked_add(N)?)?.try_into().ok()
}

/// Read whatever the stream has available and append it to `buf`.
///
/// Returns the number of bytes appended, `0` means EOF. Nothing is ever
/// removed from `buf`.
///
/// ### Example
///
/// ```no_run
/// use hybi_decoder::{read_into, send_pong, FrameDecoder, Outcome};
/// # async fn run(mut stream: tokio::net::TcpStream) -> std::io::Result<()> {
///
/// let mut buf = Vec::new();
/// let mut decoder = FrameDecoder::new();
/// while read_into(&mut stream, &mut buf).await? != 0 {
///     loop {
///         match decoder.decode_next(&buf) {
///             Outcome::Incomplete => break,
///             Outcome::Message(text) => println!("{text}"),
///             Outcome::Ping(data) => send_pong(&mut stream, &data).await?,
///             Outcome::Error(err) => return Err(err.into()),
///         }
///     }
/// }
/// # Ok(()) }
/// ```
pub async fn read_into<R>(stream: &mut R, buf: &mut Vec<u8>) -> Result<usize>
where
    R: Unpin + AsyncRead,
{
    if buf.capacity() - buf.len() < 4096 {
        buf.reserve(4096);
    }
    stream.read_buf(buf).await
}

/// Write an unmasked Pong frame echoing `data`.
///
/// Control frames MUST have a payload length of 125 bytes or less.
pub async fn send_pong<W>(stream: &mut W, data: &[u8]) -> Result<()>
where
    W: Unpin + AsyncWrite,
{
    if data.len() > 125 {
        return err(
            ErrorKind::InvalidInput,
            "control frame must have a payload length of 125 bytes or less",
        );
    }
    let mut bytes = Vec::with_capacity(2 + data.len());
    encode(&mut bytes, true, Opcode::Pong.into(), data, None);
    stream.write_all(&bytes).await?;
    stream.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_bounds() {
        let buf = [1, 2, 3];
        assert_eq!(take::<2>(&buf, 0), Some([1, 2]));
        assert_eq!(take::<2>(&buf, 1), Some([2, 3]));
        assert_eq!(take::<2>(&buf, 2), None);
        assert_eq!(take::<4>(&buf, usize::MAX), None);
    }

    #[tokio::test]
    async fn pong_too_large() {
        let mut writer = vec![];
        let err = send_pong(&mut writer, &[0; 126]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(writer.is_empty());
    }
}
