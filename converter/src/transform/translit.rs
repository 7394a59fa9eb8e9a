//! Bulgarian Cyrillic to Latin transliteration for memory sub-names.
//!
//! Radios only display ASCII, so locations are romanized with the Bulgarian
//! streamlined system: uppercase first, the `ИЯ` ending becomes `IA`, every
//! other Cyrillic letter goes through [`BG_LAT_MAP`]. Anything not in the table
//! is kept.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Letter pairs romanized as a unit, applied before the per-letter table.
const DIGRAPHS: [(&str, &str); 1] = [("ИЯ", "IA")];

/// Per-letter table. `Ь` romanizes to nothing.
pub static BG_LAT_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('А', "A"),
        ('Б', "B"),
        ('В', "V"),
        ('Г', "G"),
        ('Д', "D"),
        ('Е', "E"),
        ('Ж', "ZH"),
        ('З', "Z"),
        ('И', "I"),
        ('Й', "Y"),
        ('К', "K"),
        ('Л', "L"),
        ('М', "M"),
        ('Н', "N"),
        ('О', "O"),
        ('П', "P"),
        ('Р', "R"),
        ('С', "S"),
        ('Т', "T"),
        ('У', "U"),
        ('Ф', "F"),
        ('Х', "H"),
        ('Ц', "TS"),
        ('Ч', "CH"),
        ('Ш', "SH"),
        ('Щ', "SHT"),
        ('Ъ', "A"),
        ('Ь', ""),
        ('Ю', "YU"),
        ('Я', "YA"),
    ])
});

/// Romanize `text` for display on a radio.
pub fn transliterate(text: &str) -> String {
    let mut upper = text.to_uppercase();
    for (from, to) in DIGRAPHS {
        upper = upper.replace(from, to);
    }

    let mut out = String::with_capacity(upper.len());
    for c in upper.chars() {
        match BG_LAT_MAP.get(&c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
