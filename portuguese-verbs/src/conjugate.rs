//! Locates the verb lemma inside a gloss phrase and splices its inflected
//! form back in.
//!
//! The conjugator dispatches on mood class: finite moods select a paradigm
//! slot by person and number, non-finite moods render infinitive, participle
//! or gerund periphrases, and anything unrecognized passes the phrase
//! through unchanged. Missing dimensions always degrade to a no-op, never to
//! an error.

use crate::features::{Mood, Morphology, Number, Paradigm, Person, Tense, VerbClass, Voice};
use crate::tables::ConjugationTables;
use crate::text_cleanup::{restore_case, tidy_spaces};

/// The first phrase token that looks like an infinitive.
///
/// `start`/`end` are byte offsets into the phrase the locator scanned; the
/// splice step slices that same string, so the offsets stay valid across
/// multi-byte characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaInfo {
    pub lemma: String,
    pub root: String,
    pub reflexive: bool,
    pub start: usize,
    pub end: usize,
}

/// Regular class endings plus the irregular phonetic spellings.
const INFINITIVE_ENDINGS: &[&str] = &["uzir", "ar", "er", "ir", "or", "ôr", "ír", "êr"];

/// Paradigms tried, in order, when an irregular verb does not supply the
/// requested one.
const FALLBACK_PARADIGMS: &[Paradigm] = &[
    Paradigm::PresentIndicative,
    Paradigm::Preterite,
    Paradigm::Imperfect,
    Paradigm::Pluperfect,
    Paradigm::Future,
];

/// Scan a phrase for the first token that looks like a Portuguese
/// infinitive, optionally carrying a `-se` reflexive suffix.
pub fn find_lemma(phrase: &str) -> Option<LemmaInfo> {
    let mut iter = phrase.char_indices().peekable();
    while let Some((start, ch)) = iter.next() {
        if !ch.is_alphabetic() {
            continue;
        }
        let mut end = start + ch.len_utf8();
        while let Some(&(idx, next)) = iter.peek() {
            if !next.is_alphabetic() {
                break;
            }
            end = idx + next.len_utf8();
            iter.next();
        }
        if phrase[end..].starts_with("-se") {
            end += 3;
            iter.next();
            iter.next();
            iter.next();
        }
        let token = &phrase[start..end];
        if is_infinitive(token) {
            let (root, reflexive) = match token.strip_suffix("-se") {
                Some(stripped) => (stripped.to_string(), true),
                None => (token.to_string(), false),
            };
            return Some(LemmaInfo {
                lemma: token.to_string(),
                root,
                reflexive,
                start,
                end,
            });
        }
    }
    None
}

fn is_infinitive(token: &str) -> bool {
    let lowered = token.to_lowercase();
    let lowered = lowered.strip_suffix("-se").unwrap_or(&lowered);
    let lowered = lowered.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    INFINITIVE_ENDINGS
        .iter()
        .any(|ending| lowered.ends_with(ending))
}

/// Subject pronoun for the tag's person and number, when both are present.
pub fn resolve_subject(tables: &ConjugationTables, morph: &Morphology) -> Option<&'static str> {
    let person = morph.person?;
    let number = morph.number?;
    tables.subject_pronoun(person, number)
}

/// Split a gloss into its comma/semicolon-delimited clauses.
pub fn split_phrases(base_text: &str) -> Vec<String> {
    base_text
        .split([',', ';'])
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(str::to_string)
        .collect()
}

/// Conjugate one clause: locate the lemma, inflect it per the morphology,
/// and return the resolved subject pronoun alongside the tidied predicate.
/// A clause without a locatable lemma comes back unchanged and subjectless.
pub fn build_phrase(
    tables: &ConjugationTables,
    phrase: &str,
    morph: &Morphology,
) -> (Option<&'static str>, String) {
    let Some(lemma) = find_lemma(phrase) else {
        return (None, tidy_spaces(phrase));
    };
    let subject = resolve_subject(tables, morph);
    let predicate = conjugate_predicate(tables, phrase, &lemma, morph);
    (subject, tidy_spaces(&predicate))
}

/// Conjugate every clause of an entry, rendering the subject pronoun only on
/// the first one.
pub fn conjugate_entry<I, S>(tables: &ConjugationTables, phrases: I, morph: &Morphology) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .enumerate()
        .map(|(idx, phrase)| {
            let (subject, predicate) = build_phrase(tables, phrase.as_ref(), morph);
            match subject {
                Some(subject) if idx == 0 => tidy_spaces(&format!("{subject} {predicate}")),
                _ => predicate,
            }
        })
        .collect()
}

fn conjugate_predicate(
    tables: &ConjugationTables,
    phrase: &str,
    lemma: &LemmaInfo,
    morph: &Morphology,
) -> String {
    if morph.is_finite() {
        return conjugate_finite(tables, phrase, lemma, morph);
    }
    if morph.is_infinitive() {
        return conjugate_infinitive(tables, phrase, lemma, morph);
    }
    if morph.is_participle() {
        return conjugate_participle(tables, phrase, lemma, morph);
    }
    match morph.mood {
        Some(Mood::Gerund) => conjugate_gerund(tables, phrase, lemma),
        Some(Mood::Optative) => {
            // Portuguese has no optative; the subjunctive is the closest fit.
            let as_subjunctive = Morphology {
                mood: Some(Mood::Subjunctive),
                ..morph.clone()
            };
            conjugate_finite(tables, phrase, lemma, &as_subjunctive)
        }
        _ => phrase.to_string(),
    }
}

fn conjugate_finite(
    tables: &ConjugationTables,
    phrase: &str,
    lemma: &LemmaInfo,
    morph: &Morphology,
) -> String {
    let Some(paradigm) = morph.mood.and_then(|mood| finite_paradigm(mood, morph.tense)) else {
        return phrase.to_string();
    };
    let (Some(person), Some(number)) = (morph.person, morph.number) else {
        return phrase.to_string();
    };
    let slot = slot_index(person, number);

    let root = lemma.root.to_lowercase();
    let Some(form) = base_form(tables, &root, paradigm, slot) else {
        return phrase.to_string();
    };

    let replacement = match morph.voice {
        Some(Voice::Passive) => match passive_form(tables, &root, morph, slot) {
            Some(passive) => passive,
            None => form,
        },
        Some(Voice::Middle | Voice::MiddleOrPassive) => {
            // Middle-ish voices default to a reflexive reading.
            attach_reflexive(&form, tables.reflexive_pronoun(person, number))
        }
        _ if lemma.reflexive => attach_reflexive(&form, tables.reflexive_pronoun(person, number)),
        _ => form,
    };
    let replacement = restore_case(&lemma.root, &replacement);

    splice(phrase, lemma, &replacement)
}

fn conjugate_infinitive(
    tables: &ConjugationTables,
    phrase: &str,
    lemma: &LemmaInfo,
    morph: &Morphology,
) -> String {
    let root = lemma.root.to_lowercase();
    let form = match morph.tense {
        Some(Tense::Aorist | Tense::Perfect) => format!("ter {}", past_participle(tables, &root)),
        Some(Tense::Future) => format!("vir a {root}"),
        _ => root,
    };
    let form = restore_case(&lemma.root, &form);
    splice(phrase, lemma, &form)
}

fn conjugate_participle(
    tables: &ConjugationTables,
    phrase: &str,
    lemma: &LemmaInfo,
    morph: &Morphology,
) -> String {
    let root = lemma.root.to_lowercase();
    let form = match morph.tense {
        Some(Tense::Present) => gerund(tables, &root),
        Some(Tense::Aorist | Tense::Perfect) => {
            format!("tendo {}", past_participle(tables, &root))
        }
        Some(Tense::Future) => format!("prestes a {root}"),
        _ => past_participle(tables, &root),
    };
    let form = restore_case(&lemma.root, &form);
    splice(phrase, lemma, &form)
}

fn conjugate_gerund(tables: &ConjugationTables, phrase: &str, lemma: &LemmaInfo) -> String {
    let root = lemma.root.to_lowercase();
    let form = restore_case(&lemma.root, &gerund(tables, &root));
    splice(phrase, lemma, &form)
}

fn splice(phrase: &str, lemma: &LemmaInfo, replacement: &str) -> String {
    format!(
        "{}{}{}",
        &phrase[..lemma.start],
        replacement,
        &phrase[lemma.end..]
    )
}

/// Paradigm for a finite (mood, tense) pair, with mood-only defaults when
/// the tense is missing or unmapped.
fn finite_paradigm(mood: Mood, tense: Option<Tense>) -> Option<Paradigm> {
    let paradigm = match (mood, tense) {
        (Mood::Indicative, Some(Tense::Present)) => Paradigm::PresentIndicative,
        (Mood::Indicative, Some(Tense::Imperfect)) => Paradigm::Imperfect,
        (Mood::Indicative, Some(Tense::Aorist)) => Paradigm::Preterite,
        (Mood::Indicative, Some(Tense::Perfect)) => Paradigm::CompoundPerfect,
        (Mood::Indicative, Some(Tense::Future)) => Paradigm::Future,
        (Mood::Indicative, Some(Tense::Pluperfect)) => Paradigm::Pluperfect,
        (Mood::Indicative, _) => Paradigm::PresentIndicative,
        (Mood::Subjunctive, Some(Tense::Present | Tense::Aorist)) => Paradigm::PresentSubjunctive,
        (Mood::Subjunctive, Some(Tense::Perfect)) => Paradigm::ImperfectSubjunctive,
        (Mood::Subjunctive, Some(Tense::Future)) => Paradigm::FutureSubjunctive,
        (Mood::Subjunctive, _) => Paradigm::PresentSubjunctive,
        (Mood::Imperative, _) => Paradigm::Imperative,
        _ => return None,
    };
    Some(paradigm)
}

/// 0-5 slot within a paradigm row: person offset, plus three for plural.
fn slot_index(person: Person, number: Number) -> usize {
    person.index() + if number == Number::Plural { 3 } else { 0 }
}

/// Layered form resolution: irregular exact hit, then regular endings, then
/// the irregular fallback paradigm order. `None` means no rule applies and
/// the phrase must stay unchanged.
fn base_form(
    tables: &ConjugationTables,
    lemma: &str,
    paradigm: Paradigm,
    slot: usize,
) -> Option<String> {
    if let Some(forms) = tables.irregular_forms(lemma, paradigm) {
        return Some(forms[slot].to_string());
    }

    let class = verb_class(lemma);
    let endings = class.and_then(|class| tables.regular_endings(paradigm, class));
    match (class, endings) {
        (Some(class), Some(endings)) => Some(format!("{}{}", stem(lemma, class), endings[slot])),
        _ if tables.has_irregular(lemma) => FALLBACK_PARADIGMS
            .iter()
            .find_map(|fallback| tables.irregular_forms(lemma, *fallback))
            .map(|forms| forms[slot].to_string()),
        _ => None,
    }
}

/// Passive periphrasis: "ser" in the voice-mapped paradigm plus the past
/// participle of the main verb.
fn passive_form(
    tables: &ConjugationTables,
    lemma: &str,
    morph: &Morphology,
    slot: usize,
) -> Option<String> {
    let paradigm = morph
        .mood
        .map(|mood| passive_aux_paradigm(mood, morph.tense))
        .unwrap_or(Paradigm::PresentIndicative);
    let aux_forms = tables
        .irregular_forms("ser", paradigm)
        .or_else(|| tables.irregular_forms("ser", Paradigm::PresentIndicative))?;
    Some(format!("{} {}", aux_forms[slot], past_participle(tables, lemma)))
}

fn passive_aux_paradigm(mood: Mood, tense: Option<Tense>) -> Paradigm {
    match (mood, tense) {
        (Mood::Indicative, Some(Tense::Present)) => Paradigm::PresentIndicative,
        (Mood::Indicative, Some(Tense::Imperfect)) => Paradigm::Imperfect,
        (Mood::Indicative, Some(Tense::Aorist)) => Paradigm::Preterite,
        (Mood::Indicative, Some(Tense::Perfect)) => Paradigm::CompoundPerfect,
        (Mood::Indicative, Some(Tense::Future)) => Paradigm::Future,
        (Mood::Indicative, Some(Tense::Pluperfect)) => Paradigm::Pluperfect,
        (Mood::Subjunctive, Some(Tense::Present | Tense::Aorist)) => Paradigm::PresentSubjunctive,
        (Mood::Subjunctive, Some(Tense::Future)) => Paradigm::FutureSubjunctive,
        _ => Paradigm::PresentIndicative,
    }
}

fn attach_reflexive(form: &str, pronoun: Option<&'static str>) -> String {
    match pronoun {
        Some(pronoun) => format!("{pronoun} {form}"),
        None => format!("{form}-se"),
    }
}

fn verb_class(lemma: &str) -> Option<VerbClass> {
    if lemma.ends_with("ar") {
        Some(VerbClass::Ar)
    } else if lemma.ends_with("er") {
        Some(VerbClass::Er)
    } else if lemma.ends_with("ir") {
        Some(VerbClass::Ir)
    } else if lemma.ends_with("or") || lemma.ends_with("êr") || lemma.ends_with("ôr") {
        Some(VerbClass::Er)
    } else if lemma.ends_with("ír") {
        Some(VerbClass::Ir)
    } else {
        None
    }
}

/// Stem of a lemma for its class: the class suffix when it is literally
/// present, otherwise the last two characters (the phonetic spellings
/// ôr/êr/ír/or).
fn stem(lemma: &str, class: VerbClass) -> &str {
    if let Some(stripped) = lemma.strip_suffix(class.suffix()) {
        return stripped;
    }
    let mut chars = lemma.chars();
    chars.next_back();
    chars.next_back();
    chars.as_str()
}

fn past_participle(tables: &ConjugationTables, lemma: &str) -> String {
    if let Some(participle) = tables.irregular_participle(lemma) {
        return participle.to_string();
    }
    match verb_class(lemma) {
        Some(VerbClass::Ar) => format!("{}ado", stem(lemma, VerbClass::Ar)),
        Some(class @ (VerbClass::Er | VerbClass::Ir)) => format!("{}ido", stem(lemma, class)),
        None => lemma.to_string(),
    }
}

fn gerund(tables: &ConjugationTables, lemma: &str) -> String {
    if let Some(gerund) = tables.irregular_gerund(lemma) {
        return gerund.to_string();
    }
    match verb_class(lemma) {
        Some(VerbClass::Ar) => format!("{}ando", stem(lemma, VerbClass::Ar)),
        Some(VerbClass::Er) => format!("{}endo", stem(lemma, VerbClass::Er)),
        Some(VerbClass::Ir) => format!("{}indo", stem(lemma, VerbClass::Ir)),
        None => lemma.to_string(),
    }
}
