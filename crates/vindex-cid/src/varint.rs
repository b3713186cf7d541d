// Unsigned varint encoding
//
// Minimal LEB128 reader/writer for the multicodec prefixes inside CID byte
// forms. Values are limited to u64, nine bytes of continuation at most.

use vindex_error::{CodecError, CodecResult};

/// Append `value` to `out` as an unsigned varint
pub(crate) fn write_uvarint(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Read an unsigned varint from the front of `bytes`
///
/// Returns the value and the number of bytes consumed.
pub(crate) fn read_uvarint(bytes: &[u8]) -> CodecResult<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        if i >= 10 {
            return Err(CodecError::InvalidEncoding("varint too long".to_string()));
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(CodecError::InvalidEncoding("truncated varint".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_values_round_trip() {
        for value in [0u64, 1, 0x12, 0x70, 0x7f] {
            let mut buf = Vec::new();
            write_uvarint(value, &mut buf);
            assert_eq!(buf.len(), 1);
            assert_eq!(read_uvarint(&buf).unwrap(), (value, 1));
        }
    }

    #[test]
    fn multi_byte_values_round_trip() {
        for value in [0x80u64, 0x300, 0xffff, u64::MAX] {
            let mut buf = Vec::new();
            write_uvarint(value, &mut buf);
            let (decoded, consumed) = read_uvarint(&buf).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(consumed, buf.len());
        }
    }

    #[test]
    fn truncated_input_is_rejected() {
        assert!(read_uvarint(&[0x80]).is_err());
        assert!(read_uvarint(&[]).is_err());
    }
}
