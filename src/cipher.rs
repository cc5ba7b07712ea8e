use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

/// Pythagorean value of a letter, 0 when the character carries none.
///
/// Turkish letters fold into the value of their nearest Latin letter.
pub fn letter_value(letter: char) -> u32 {
    match letter {
        'A' | 'a' | 'J' | 'j' | 'S' | 's' | 'Ş' | 'ş' => 1,
        'B' | 'b' | 'K' | 'k' | 'T' | 't' => 2,
        'C' | 'c' | 'L' | 'l' | 'U' | 'u' | 'Ç' | 'ç' | 'Ü' | 'ü' => 3,
        'D' | 'd' | 'M' | 'm' | 'V' | 'v' => 4,
        'E' | 'e' | 'N' | 'n' | 'W' | 'w' => 5,
        'F' | 'f' | 'O' | 'o' | 'X' | 'x' | 'Ö' | 'ö' => 6,
        'G' | 'g' | 'P' | 'p' | 'Y' | 'y' | 'Ğ' | 'ğ' => 7,
        'H' | 'h' | 'Q' | 'q' | 'Z' | 'z' => 8,
        'I' | 'i' | 'R' | 'r' | 'İ' | 'ı' => 9,
        _ => 0,
    }
}

pub fn is_vowel(letter: char) -> bool {
    matches!(
        letter,
        'A' | 'E' | 'I' | 'O' | 'U' | 'İ' | 'Ö' | 'Ü' | 'a' | 'e' | 'i' | 'o' | 'u' | 'ı' | 'ö' | 'ü'
    )
}

/// Valued letters of `text` in order. Characters without a value are dropped.
pub fn letter_values(text: &str) -> Vec<LetterValue> {
    text.chars()
        .map(|letter| LetterValue {
            letter,
            value: letter_value(letter),
        })
        .filter(|lv| lv.value > 0)
        .collect()
}

pub fn sum_values(values: &[LetterValue]) -> u32 {
    values.iter().map(|lv| lv.value).sum()
}
