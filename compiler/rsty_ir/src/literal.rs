//! Literal payload helpers.
//!
//! Literal text is stored verbatim (interned) in the tree. These helpers
//! split a numeric literal into its digits and its type suffix. Mapping a
//! suffix to a numeric kind is left to the type model.

/// Integer suffixes, longest first.
const INT_SUFFIXES: &[&str] = &[
    "i128", "u128", "isize", "usize", "i16", "i32", "i64", "u16", "u32", "u64", "i8", "u8",
];

/// Float suffixes.
const FLOAT_SUFFIXES: &[&str] = &["f32", "f64"];

/// Split an integer literal into digits and suffix.
///
/// Besides the integer suffixes this also recognises `f32`/`f64`: `1f32`
/// is an integer token whose suffix makes it a float. Hex literals only
/// take `i`/`u` suffixes because `f` is a hex digit (`0x1f32` has none).
pub fn split_int_suffix(text: &str) -> (&str, Option<&str>) {
    let is_hex = text.starts_with("0x") || text.starts_with("0X");
    let candidates = INT_SUFFIXES
        .iter()
        .chain(FLOAT_SUFFIXES.iter().filter(|_| !is_hex));
    split_with(text, candidates)
}

/// Split a float literal into digits and suffix.
pub fn split_float_suffix(text: &str) -> (&str, Option<&str>) {
    split_with(text, FLOAT_SUFFIXES.iter())
}

fn split_with<'t, 's>(
    text: &'t str,
    mut candidates: impl Iterator<Item = &'s &'static str>,
) -> (&'t str, Option<&'t str>) {
    let found = candidates.find(|suffix| {
        text.len() > suffix.len()
            && text.ends_with(**suffix)
            && text[..text.len() - suffix.len()]
                .chars()
                .any(|c| c.is_ascii_digit())
    });
    match found {
        Some(suffix) => {
            let (digits, suffix) = text.split_at(text.len() - suffix.len());
            (digits.trim_end_matches('_'), Some(suffix))
        }
        None => (text, None),
    }
}
