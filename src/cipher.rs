//! Decorative letter-to-glyph table used for the "cipher" styling.
//!
//! Nothing here is cryptographic. Several letters share a glyph and the
//! mapping is not meant to be inverted.

pub const CIPHER_MAP: [(char, char); 26] = [
    ('A', '3'),
    ('B', '⊃'),
    ('C', 'Ш'),
    ('D', 'ᗡ'),
    ('E', 'Ǝ'),
    ('F', 'Ⅎ'),
    ('G', '⅁'),
    ('H', 'I'),
    ('I', '⋀'),
    ('J', 'X'),
    ('K', '⋏'),
    ('L', '⅂'),
    ('M', '⨇'),
    ('N', 'ᴎ'),
    ('O', 'O'),
    ('P', 'Ԁ'),
    ('Q', 'Ό'),
    ('R', '⋊'),
    ('S', '⩍'),
    ('T', '⊥'),
    ('U', '∩'),
    ('V', '⋁'),
    ('W', 'M'),
    ('X', 'X'),
    ('Y', '⅄'),
    ('Z', 'Z'),
];

pub const RUNE_SYMBOLS: &str = "ᚠᚡᚢᚣᚤᚥᚦᚧᚨᚩᚪᚫᚬᚭᚮᚯᚰᚱᚲᚳᚴᚵᚶᚷᚸᚹᚺᚻᚼᚽᚾᚿᛀᛁᛂᛃᛄᛅᛆᛇᛈᛉᛊᛋᛌᛍᛎᛏᛐᛑᛒᛓᛔᛕᛖᛗᛘᛙᛚᛛᛜᛝᛞᛟᛠᛡᛢᛣᛤᛥᛦᛧᛨᛩᛪ᛫᛬᛭ᛮᛯᛰᛱᛲᛳᛴᛵᛶᛷᛸ";

pub const NOISE_POOL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+-=[]{}|;:,.<>?/";

/// Glyph for a single letter, ignoring case.
pub fn glyph(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    CIPHER_MAP
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map(|(_, glyph)| *glyph)
}

/// Uppercases `text` and swaps every mapped letter for its glyph.
/// Characters outside the table pass through unchanged.
pub fn encode(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| glyph(c).unwrap_or(c))
        .collect()
}

/// Distinct glyphs in table order.
pub fn glyph_pool() -> Vec<char> {
    let mut pool = Vec::with_capacity(CIPHER_MAP.len());
    for (_, glyph) in CIPHER_MAP {
        if !pool.contains(&glyph) {
            pool.push(glyph);
        }
    }
    pool
}

pub fn runes() -> Vec<char> {
    RUNE_SYMBOLS.chars().collect()
}

pub fn noise() -> Vec<char> {
    NOISE_POOL.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_length_of_uppercased_input() {
        for text in ["HexaFalls", "I am watching", "June 15-17, 2024", "abcdefghijklmnopqrstuvwxyz"] {
            let encoded = encode(text);
            assert_eq!(encoded.chars().count(), text.to_uppercase().chars().count(), "{text}");
        }
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(encode("Gravity Falls"), encode("Gravity Falls"));
        assert_eq!(encode("hexa"), encode("HEXA"));
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(encode("15-17, 2024!"), "15-17, 2024!");
        assert_eq!(encode("I AM"), "⋀ 3⨇");
    }

    #[test]
    fn every_letter_has_a_glyph() {
        for letter in 'A'..='Z' {
            assert!(glyph(letter).is_some(), "{letter}");
            assert_eq!(glyph(letter), glyph(letter.to_ascii_lowercase()));
        }
        assert_eq!(glyph('7'), None);
    }

    #[test]
    fn glyph_pool_drops_collisions() {
        let pool = glyph_pool();
        // J and X share a glyph
        assert_eq!(pool.len(), 25);
        assert_eq!(pool.iter().filter(|g| **g == 'X').count(), 1);
    }
}
