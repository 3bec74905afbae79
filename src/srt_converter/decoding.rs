// Byte decoding: UTF-16 when a BOM says so, otherwise UTF-8 with a Latin-1 fallback

use tracing::{debug, warn};

use super::{Encoding, RawDocument};
use crate::error::{ConvertError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode raw subtitle bytes into a document with `\n` line breaks
///
/// A UTF-16 byte-order mark selects UTF-16. Everything else, and any UTF-16
/// payload that turns out to be malformed, goes through UTF-8 with Latin-1 as
/// the terminal fallback. Latin-1 maps every byte to a code point, so decoding
/// always yields a document.
pub fn decode(bytes: &[u8]) -> Result<RawDocument> {
    let utf16 = if let Some(payload) = bytes.strip_prefix(UTF16_LE_BOM) {
        Some((decode_utf16(payload, u16::from_le_bytes), Encoding::Utf16Le))
    } else if let Some(payload) = bytes.strip_prefix(UTF16_BE_BOM) {
        Some((decode_utf16(payload, u16::from_be_bytes), Encoding::Utf16Be))
    } else {
        None
    };

    let (text, encoding) = match utf16 {
        Some((Ok(text), encoding)) => (text, encoding),
        Some((Err(e), encoding)) => {
            // WHY: FF FE / FE FF are also plausible Latin-1 text ("ÿþ"), so a bad
            // UTF-16 payload must not stop the byte-per-char fallback
            warn!("Byte-order mark announced {} but payload is invalid ({}); falling back", encoding, e);
            decode_utf8_or_latin1(bytes)
        }
        None => decode_utf8_or_latin1(bytes),
    };

    debug!("Decoded {} bytes as {}", bytes.len(), encoding);

    Ok(RawDocument {
        text: normalize_line_breaks(text),
        encoding,
    })
}

fn decode_utf8_or_latin1(bytes: &[u8]) -> (String, Encoding) {
    let payload = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(payload) {
        Ok(text) => (text.to_owned(), Encoding::Utf8),
        Err(e) => {
            warn!("Input is not valid UTF-8 ({}), falling back to Latin-1", e);
            (decode_latin1(payload), Encoding::Latin1)
        }
    }
}

/// Latin-1 maps byte `n` to code point `U+00nn`
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn decode_utf16(payload: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    if payload.len() % 2 != 0 {
        return Err(ConvertError::Encoding {
            reason: format!("UTF-16 payload has odd length {}", payload.len()),
        });
    }

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|e| ConvertError::Encoding {
        reason: format!("invalid UTF-16: {e}"),
    })
}

/// Turn `\r\n` and lone `\r` into `\n`
fn normalize_line_breaks(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
