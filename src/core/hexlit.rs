//! RG-003: Byte ↔ hex-literal codec for C array initializers.

use std::fmt::Write;

const DEFINITION_HEAD: &str = "static const char ";
const DEFINITION_OPEN: &str = "[] = { ";
const DEFINITION_CLOSE: &str = " };";

/// Encode bytes as `0x41, 0x0, 0xff` (lowercase, no zero padding).
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{:#x}", b);
    }
    out
}

/// Decode a comma-separated list of `0x..` tokens. Blank input decodes to no bytes.
pub fn decode(tokens: &str) -> Result<Vec<u8>, String> {
    if tokens.trim().is_empty() {
        return Ok(Vec::new());
    }
    tokens
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            let digits = tok
                .strip_prefix("0x")
                .or_else(|| tok.strip_prefix("0X"))
                .ok_or_else(|| format!("invalid byte literal '{}'", tok))?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("invalid byte literal '{}'", tok));
            }
            u8::from_str_radix(digits, 16).map_err(|e| format!("invalid byte literal '{}': {}", tok, e))
        })
        .collect()
}

/// Render `static const char <identifier>[] = { <bytes> };`.
pub fn array_definition(identifier: &str, bytes: &[u8]) -> String {
    format!(
        "{}{}{}{}{}",
        DEFINITION_HEAD,
        identifier,
        DEFINITION_OPEN,
        encode(bytes),
        DEFINITION_CLOSE
    )
}

/// Split an array definition back into its identifier and bytes.
pub fn parse_definition(text: &str) -> Result<(String, Vec<u8>), String> {
    let text = text.trim();
    let malformed = || format!("malformed array definition: '{}'", preview(text));

    let rest = text.strip_prefix(DEFINITION_HEAD).ok_or_else(malformed)?;
    let (identifier, rest) = rest.split_once("[]").ok_or_else(malformed)?;
    let body = rest
        .trim_start()
        .strip_prefix('=')
        .map(str::trim_start)
        .and_then(|r| r.strip_prefix('{'))
        .and_then(|r| r.trim_end().strip_suffix(';'))
        .and_then(|r| r.trim_end().strip_suffix('}'))
        .ok_or_else(malformed)?;

    let identifier = identifier.trim();
    if !super::ident::is_identifier(identifier) {
        return Err(format!("invalid identifier '{}' in array definition", identifier));
    }
    Ok((identifier.to_string(), decode(body)?))
}

fn preview(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
