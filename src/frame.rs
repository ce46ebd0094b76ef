//! Minimal frame writer backing [`send_pong`](crate::send_pong).
use crate::mask::apply_mask;

/// Append one frame to `writer`, using the shortest payload length form.
///
/// `opcode` is written as given, so reserved values can be produced too.
///
/// ### Example
///
/// ```rust
/// let mut bytes = vec![];
/// hybi_decoder::frame::encode(&mut bytes, true, 1, b"Hello", None);
/// assert_eq!(bytes, [0x81, 0x05, 0x48, 0x65, 0x6c, 0x6c, 0x6f]);
/// ```
pub fn encode(writer: &mut Vec<u8>, fin: bool, opcode: u8, data: &[u8], mask: Option<[u8; 4]>) {
    let data_len = data.len();
    let mask_bit = if mask.is_some() { 0x80 } else { 0 };
    writer.reserve(14 + data_len);

    writer.push(((fin as u8) << 7) | (opcode & 0b_1111));
    if data_len < 126 {
        writer.push(mask_bit | data_len as u8);
    } else if data_len < 65536 {
        writer.push(mask_bit | 126);
        writer.extend_from_slice(&(data_len as u16).to_be_bytes());
    } else {
        writer.push(mask_bit | 127);
        writer.extend_from_slice(&(data_len as u64).to_be_bytes());
    }

    match mask {
        None => writer.extend_from_slice(data),
        Some(key) => {
            writer.extend_from_slice(&key);
            let start = writer.len();
            writer.extend_from_slice(data);
            apply_mask(&mut writer[start..], key);
        }
    }
}
