use encoding_rs::SHIFT_JIS;

use crate::CleanError;

/// Decode a Shift-JIS byte sequence into a `String`.
///
/// No BOM handling: the corpus format predates byte-order marks. Any byte
/// sequence outside the coded set is an error rather than a replacement
/// character, so a mis-encoded file fails loudly instead of producing
/// silently mangled text.
pub fn decode_shift_jis(bytes: &[u8]) -> Result<String, CleanError> {
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(CleanError::Encoding);
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ascii_passthrough() {
        assert_eq!(decode_shift_jis(b"plain ascii\n").unwrap(), "plain ascii\n");
    }

    #[test]
    fn decode_double_byte_hiragana() {
        // "こんにちは" in Shift-JIS.
        let bytes = [
            0x82, 0xb1, 0x82, 0xf1, 0x82, 0xc9, 0x82, 0xbf, 0x82, 0xcd,
        ];
        assert_eq!(decode_shift_jis(&bytes).unwrap(), "こんにちは");
    }

    #[test]
    fn decode_rejects_byte_outside_coded_set() {
        let err = decode_shift_jis(&[0xff]).unwrap_err();
        assert!(matches!(err, CleanError::Encoding));
    }

    #[test]
    fn decode_rejects_truncated_lead_byte() {
        // 0x82 opens a double-byte sequence; EOF right after is invalid.
        let err = decode_shift_jis(&[b'a', 0x82]).unwrap_err();
        assert!(matches!(err, CleanError::Encoding));
    }

    #[test]
    fn decode_empty_input() {
        assert_eq!(decode_shift_jis(&[]).unwrap(), "");
    }
}
