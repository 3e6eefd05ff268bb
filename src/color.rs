//! Fallback Colours
//!
//! Deterministic swatch colours for dreams without images.

const SATURATION: u8 = 50;
const LIGHTNESS: u8 = 70;

/// Hash `text` to a CSS `hsl()` colour.
///
/// Hashes UTF-16 code units with 32-bit wrapping arithmetic, so the result
/// depends only on the text itself.
pub fn string_to_hsl_color(text: &str) -> String {
    let hash = text
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
        });
    let hue = hash.rem_euclid(360);
    format!("hsl({}, {}%, {}%)", hue, SATURATION, LIGHTNESS)
}
