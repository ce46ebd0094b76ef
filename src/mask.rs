/// XOR `data` in place with the masking key, as per
/// [Section 5.3](https://datatracker.ietf.org/doc/html/rfc6455#section-5.3).
///
/// Octet `i` is XORed with `key[i % 4]`, where `key` is kept in network
/// order. Applying the same key twice restores the input.
///
/// ### Example
///
/// ```rust
/// use hybi_decoder::apply_mask;
///
/// let mut data = *b"Hello";
/// apply_mask(&mut data, [0x37, 0xfa, 0x21, 0x3d]);
/// assert_eq!(data, [0x7f, 0x9f, 0x4d, 0x51, 0x58]);
/// ```
#[inline]
pub fn apply_mask(data: &mut [u8], key: [u8; 4]) {
    // TODO: Use SIMD wherever possible for best performance
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i & 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_inverse() {
        let original: Vec<u8> = (0..=255).collect();
        for key in [[0; 4], [1, 2, 3, 4], [0xff, 0x00, 0xaa, 0x55], rand::random()] {
            for len in [0, 1, 3, 4, 5, 8, 255] {
                let mut data = original[..len].to_vec();
                apply_mask(&mut data, key);
                apply_mask(&mut data, key);
                assert_eq!(data, &original[..len]);
            }
        }
    }

    #[test]
    fn key_order_is_network_order() {
        let mut data = [0; 6];
        apply_mask(&mut data, [0xa, 0xb, 0xc, 0xd]);
        assert_eq!(data, [0xa, 0xb, 0xc, 0xd, 0xa, 0xb]);
    }
}
