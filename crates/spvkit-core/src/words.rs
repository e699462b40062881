//! Literal string operands.
//!
//! Strings are packed four bytes per word, first byte in the low-order bits,
//! followed by a NUL terminator. The last word is zero-padded, so a string of
//! `n` bytes always occupies `(n + 1).div_ceil(4)` words.

/// Number of operand words a packed string occupies.
///
/// # Examples
/// ```
/// use spvkit_core::words::str_word_count;
/// assert_eq!(str_word_count(""), 1);
/// assert_eq!(str_word_count("abc"), 1);
/// assert_eq!(str_word_count("main"), 2);
/// ```
#[inline]
pub fn str_word_count(s: &str) -> usize {
    (s.len() + 1).div_ceil(4)
}

/// Append `s` as a packed, NUL-terminated string operand.
pub fn push_str(out: &mut Vec<u32>, s: &str) {
    debug_assert!(!s.contains('\0'), "string operand contains NUL: {s:?}");

    let bytes = s.as_bytes();
    let start = out.len();
    for chunk in bytes.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        out.push(u32::from_le_bytes(word));
    }
    // An exact multiple of four leaves no room for the terminator.
    if bytes.len() % 4 == 0 {
        out.push(0);
    }
    debug_assert_eq!(out.len() - start, str_word_count(s));
}

/// Pack `s` into a fresh word vector.
pub fn pack_str(s: &str) -> Vec<u32> {
    let mut out = Vec::with_capacity(str_word_count(s));
    push_str(&mut out, s);
    out
}

/// Decode a packed string from the start of `words`.
///
/// Returns the text and the number of words consumed, or `None` when no
/// terminator is found. Invalid UTF-8 is replaced lossily.
pub fn unpack_str(words: &[u32]) -> Option<(String, usize)> {
    let mut bytes = Vec::new();
    for (i, word) in words.iter().enumerate() {
        for byte in word.to_le_bytes() {
            if byte == 0 {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                return Some((text, i + 1));
            }
            bytes.push(byte);
        }
    }
    None
}
