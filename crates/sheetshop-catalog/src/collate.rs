//! Danish collation for category and product-name ordering.
//!
//! Ordering follows the Danish alphabet: `æ`, `ø` and `å` sort after `z`,
//! the digraph `aa` sorts as `å`, and `ä`/`ö`/`ü` sort with `æ`/`ø`/`y`.
//! Comparison is multi-level like any locale collator: base letters first,
//! then accents, then case (upper case first), and code points as a final
//! tie-break so the order is total.

use std::cmp::Ordering;

const GROUP_PUNCT: u32 = 1 << 24;
const GROUP_DIGIT: u32 = 2 << 24;
const GROUP_LETTER: u32 = 3 << 24;
const GROUP_OTHER: u32 = 4 << 24;

const LETTER_AE: u32 = 27;
const LETTER_OE: u32 = 28;
const LETTER_AA: u32 = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

/// Compares two strings in Danish collation order.
#[must_use]
pub fn danish_cmp(a: &str, b: &str) -> Ordering {
    let ea = elements(a);
    let eb = elements(b);

    ea.iter()
        .map(|e| e.primary)
        .cmp(eb.iter().map(|e| e.primary))
        .then_with(|| {
            ea.iter()
                .map(|e| e.secondary)
                .cmp(eb.iter().map(|e| e.secondary))
        })
        .then_with(|| {
            ea.iter()
                .map(|e| e.tertiary)
                .cmp(eb.iter().map(|e| e.tertiary))
        })
        .then_with(|| a.cmp(b))
}

fn elements(s: &str) -> Vec<Element> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];

        // "aa" is a spelling of "å" (Aarhus, Aalborg).
        if matches!(c, 'a' | 'A') && matches!(chars.get(i + 1), Some('a' | 'A')) {
            let tertiary = if c.is_uppercase() { 2 } else { 3 };
            out.push(Element {
                primary: GROUP_LETTER | LETTER_AA,
                secondary: 0,
                tertiary,
            });
            i += 2;
            continue;
        }

        let tertiary = u8::from(!c.is_uppercase());
        let lower = c.to_lowercase().next().unwrap_or(c);

        if lower == 'ß' {
            for _ in 0..2 {
                out.push(Element {
                    primary: GROUP_LETTER | letter_weight('s'),
                    secondary: 1,
                    tertiary,
                });
            }
        } else {
            let (primary, secondary) = primary_and_secondary(lower);
            out.push(Element {
                primary,
                secondary,
                tertiary,
            });
        }
        i += 1;
    }

    out
}

fn letter_weight(base: char) -> u32 {
    u32::from(base) - u32::from('a') + 1
}

fn primary_and_secondary(lower: char) -> (u32, u8) {
    if lower.is_ascii_lowercase() {
        return (GROUP_LETTER | letter_weight(lower), 0);
    }
    if let Some(d) = lower.to_digit(10) {
        return (GROUP_DIGIT | d, 0);
    }

    let folded = match lower {
        'æ' => Some((LETTER_AE, 0)),
        'ä' => Some((LETTER_AE, 1)),
        'ø' => Some((LETTER_OE, 0)),
        'ö' => Some((LETTER_OE, 1)),
        'ő' => Some((LETTER_OE, 2)),
        'å' => Some((LETTER_AA, 0)),
        'ü' => Some((letter_weight('y'), 1)),
        'ű' => Some((letter_weight('y'), 2)),
        'à' | 'á' | 'â' | 'ã' | 'ā' => Some((letter_weight('a'), 1)),
        'ç' | 'ć' | 'č' => Some((letter_weight('c'), 1)),
        'ð' | 'đ' => Some((letter_weight('d'), 1)),
        'è' | 'é' | 'ê' | 'ë' | 'ē' => Some((letter_weight('e'), 1)),
        'ì' | 'í' | 'î' | 'ï' => Some((letter_weight('i'), 1)),
        'ñ' | 'ń' => Some((letter_weight('n'), 1)),
        'ò' | 'ó' | 'ô' | 'õ' | 'ō' => Some((letter_weight('o'), 1)),
        'š' | 'ś' => Some((letter_weight('s'), 1)),
        'ù' | 'ú' | 'û' | 'ū' => Some((letter_weight('u'), 1)),
        'ý' | 'ÿ' => Some((letter_weight('y'), 1)),
        'ž' | 'ź' | 'ż' => Some((letter_weight('z'), 1)),
        _ => None,
    };

    if let Some((weight, secondary)) = folded {
        return (GROUP_LETTER | weight, secondary);
    }

    if lower.is_whitespace() || lower.is_ascii_punctuation() {
        (GROUP_PUNCT | u32::from(lower), 0)
    } else {
        (GROUP_OTHER | (u32::from(lower) & 0x00FF_FFFF), 0)
    }
}
