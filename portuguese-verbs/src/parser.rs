//! Parses free-text grammatical descriptions (`desgram`) into [`Morphology`].
//!
//! A verbal description looks like
//! `"Verbo - Ativa Indicativo Presente - 1ª Pessoa Singular"`: a leading
//! part-of-speech segment, a core segment carrying voice, mood and tense,
//! and a tail segment carrying person, number, case and gender. Matching is
//! accent- and case-insensitive, and any dimension that is not mentioned
//! stays unset.

use crate::features::{Case, Gender, Mood, Morphology, Number, Person, Tense, Voice};
use crate::text_cleanup::strip_accents;

/// Ordered longest first so "media ou passiva" shadows "media".
const VOICE_ALIASES: &[(&str, Voice)] = &[
    ("medio ou passiva", Voice::MiddleOrPassive),
    ("media ou passiva", Voice::MiddleOrPassive),
    ("media ou passivo", Voice::MiddleOrPassive),
    ("passiva", Voice::Passive),
    ("passivo", Voice::Passive),
    ("ativa", Voice::Active),
    ("ativo", Voice::Active),
    ("media", Voice::Middle),
    ("medio", Voice::Middle),
];

const MOOD_ALIASES: &[(&str, Mood)] = &[
    ("indicativo", Mood::Indicative),
    ("subjuntivo", Mood::Subjunctive),
    ("imperativo", Mood::Imperative),
    ("infinitivo", Mood::Infinitive),
    ("participio", Mood::Participle),
    ("participo", Mood::Participle),
    ("optativo", Mood::Optative),
    ("gerundio", Mood::Gerund),
];

const TENSE_ALIASES: &[(&str, Tense)] = &[
    ("presente", Tense::Present),
    ("aoristo", Tense::Aorist),
    ("imperfeito", Tense::Imperfect),
    ("futuro", Tense::Future),
    ("perfeito", Tense::Perfect),
    ("pluperfeito", Tense::Pluperfect),
];

const CASE_KEYWORDS: &[(&str, Case)] = &[
    ("nominativo", Case::Nominative),
    ("acusativo", Case::Accusative),
    ("genitivo", Case::Genitive),
    ("dativo", Case::Dative),
    ("vocativo", Case::Vocative),
];

const GENDER_KEYWORDS: &[(&str, Gender)] = &[
    ("masculino", Gender::Masculine),
    ("feminino", Gender::Feminine),
    ("neutro", Gender::Neuter),
];

const NUMBER_KEYWORDS: &[(&str, Number)] = &[
    ("singular", Number::Singular),
    ("plural", Number::Plural),
];

/// Extract a [`Morphology`] from a `desgram` description. Never fails: an
/// empty or non-verbal description yields a record with every dimension
/// unset and `extra` carrying the raw text.
pub fn parse(description: &str) -> Morphology {
    let mut morph = Morphology {
        extra: (!description.is_empty()).then(|| description.to_string()),
        ..Morphology::default()
    };
    if !description.contains("Verbo") {
        return morph;
    }

    let segments: Vec<&str> = description.split('-').map(str::trim).collect();
    let core = segments.get(1).copied().unwrap_or("");
    let tail = segments.get(2).copied().unwrap_or("");

    let normalized_core = strip_accents(&core.to_lowercase());
    let (voice, leftover) = extract_voice(&normalized_core);
    let (mood, tense) = extract_mood_tense(&leftover);
    morph.voice = voice;
    morph.mood = mood;
    morph.tense = tense;

    if !tail.is_empty() {
        let normalized_tail = strip_accents(&tail.to_lowercase());
        morph.person = extract_person(&normalized_tail);
        morph.number = find_keyword(&normalized_tail, NUMBER_KEYWORDS);
        morph.case = find_keyword(&normalized_tail, CASE_KEYWORDS);
        morph.gender = find_keyword(&normalized_tail, GENDER_KEYWORDS);
    }

    morph
}

fn extract_voice(core: &str) -> (Option<Voice>, String) {
    if core.is_empty() {
        return (None, String::new());
    }
    for (alias, voice) in VOICE_ALIASES {
        if let Some(pos) = core.find(alias) {
            let mut leftover = String::with_capacity(core.len() - alias.len());
            leftover.push_str(&core[..pos]);
            leftover.push_str(&core[pos + alias.len()..]);
            return (Some(*voice), leftover);
        }
    }
    (None, core.to_string())
}

fn extract_mood_tense(chunk: &str) -> (Option<Mood>, Option<Tense>) {
    if chunk.is_empty() {
        return (None, None);
    }

    let mut remainder = chunk.to_string();
    let mut mood = None;
    for (alias, candidate) in MOOD_ALIASES {
        if let Some(pos) = remainder.find(alias) {
            mood = Some(*candidate);
            remainder.replace_range(pos..pos + alias.len(), "");
            break;
        }
    }

    let mut tense = None;
    for token in remainder.split_whitespace() {
        let token = token.replace('º', "");
        if let Some(candidate) = find_keyword_exact(&token, TENSE_ALIASES) {
            tense = Some(candidate);
            break;
        }
        // "PluPerfeito 2º" and friends collapse onto the plain pluperfect.
        if token.starts_with("pluperfeito") {
            tense = Some(Tense::Pluperfect);
            break;
        }
    }
    if tense.is_none() && remainder.contains("pluperfeito") {
        tense = Some(Tense::Pluperfect);
    }

    (mood, tense)
}

/// Matches `1ª pessoa` / `2 pessoa` / `3ª  pessoa` anywhere in the tail.
fn extract_person(tail: &str) -> Option<Person> {
    let chars: Vec<char> = tail.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        let Some(person) = Person::from_digit(*ch) else {
            continue;
        };
        let mut j = i + 1;
        if chars.get(j) == Some(&'ª') {
            j += 1;
        }
        while chars.get(j).is_some_and(|c| c.is_whitespace()) {
            j += 1;
        }
        if chars[j..].starts_with(&['p', 'e', 's', 's', 'o', 'a']) {
            return Some(person);
        }
    }
    None
}

fn find_keyword<T: Copy>(chunk: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| chunk.contains(keyword))
        .map(|(_, value)| *value)
}

fn find_keyword_exact<T: Copy>(token: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(keyword, _)| *keyword == token)
        .map(|(_, value)| *value)
}
