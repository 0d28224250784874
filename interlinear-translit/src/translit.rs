//! Polytonic Greek to Latin transliteration.
//!
//! Works on NFD-decomposed clusters (base letter plus combining marks) so
//! breathing marks can be read independently of accents: rough breathing
//! prefixes `h` on vowels and turns rho into `rh`, diphthongs map as units
//! unless the second vowel carries a diaeresis, and the initial
//! capitalization of the source word carries over.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// COMBINING REVERSED COMMA ABOVE, the rough breathing mark.
const ROUGH: char = '\u{0314}';
/// COMBINING DIAERESIS, which blocks diphthong formation.
const DIAERESIS: char = '\u{0308}';

const VOWELS: &[char] = &[
    'α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω', 'Α', 'Ε', 'Η', 'Ι', 'Ο', 'Υ', 'Ω',
];

fn latin_base(ch: char) -> Option<&'static str> {
    Some(match ch {
        'α' | 'Α' => "a",
        'β' | 'Β' => "b",
        'γ' | 'Γ' => "g",
        'δ' | 'Δ' => "d",
        'ε' | 'Ε' => "e",
        'ζ' | 'Ζ' => "z",
        'η' | 'Η' => "ē",
        'θ' | 'Θ' => "th",
        'ι' | 'Ι' => "i",
        'κ' | 'Κ' => "k",
        'λ' | 'Λ' => "l",
        'μ' | 'Μ' => "m",
        'ν' | 'Ν' => "n",
        'ξ' | 'Ξ' => "x",
        'ο' | 'Ο' => "o",
        'π' | 'Π' => "p",
        'ρ' | 'Ρ' => "r",
        'σ' | 'ς' | 'Σ' => "s",
        'τ' | 'Τ' => "t",
        'υ' | 'Υ' => "y",
        'φ' | 'Φ' => "ph",
        'χ' | 'Χ' => "ch",
        'ψ' | 'Ψ' => "ps",
        'ω' | 'Ω' => "ō",
        _ => return None,
    })
}

fn diphthong(first: char, second: char) -> Option<&'static str> {
    Some(match (first, second) {
        ('ο', 'υ') => "ou",
        ('ε', 'υ') => "eu",
        ('α', 'υ') => "au",
        ('η', 'υ') => "ēu",
        ('ε', 'ι') => "ei",
        ('ο', 'ι') => "oi",
        ('α', 'ι') => "ai",
        ('υ', 'ι') => "yi",
        _ => return None,
    })
}

fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

pub fn transliterate(greek: &str) -> String {
    // Group each base character with its combining marks.
    let mut clusters: Vec<(char, Vec<char>)> = Vec::new();
    for ch in greek.nfd() {
        if is_combining_mark(ch) {
            if let Some((_, marks)) = clusters.last_mut() {
                marks.push(ch);
            }
        } else {
            clusters.push((ch, Vec::new()));
        }
    }

    let mut out = String::new();
    let mut i = 0;
    while i < clusters.len() {
        let (base, marks) = &clusters[i];
        let has_rough = marks.contains(&ROUGH);

        let Some(latin) = latin_base(*base) else {
            out.push(*base);
            i += 1;
            continue;
        };

        if matches!(base, 'ρ' | 'Ρ') && has_rough {
            out.push_str("rh");
            i += 1;
            continue;
        }

        if let Some((next, next_marks)) = clusters.get(i + 1) {
            if let Some(pair) = diphthong(lowercase(*base), lowercase(*next)) {
                if !next_marks.contains(&DIAERESIS) {
                    // Breathing marks sit on the second vowel of a
                    // word-initial diphthong.
                    if has_rough || next_marks.contains(&ROUGH) {
                        out.push('h');
                    }
                    out.push_str(pair);
                    i += 2;
                    continue;
                }
            }
        }

        if VOWELS.contains(base) && has_rough {
            out.push('h');
        }
        out.push_str(latin);
        i += 1;
    }

    // Carry the source word's initial capitalization over.
    let starts_upper = greek
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_uppercase());
    if starts_upper {
        let mut chars = out.chars();
        if let Some(first) = chars.next() {
            return first.to_uppercase().chain(chars).collect();
        }
    }
    out
}
