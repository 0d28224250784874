//! Morphological feature values extracted from dictionary tag strings.
//!
//! These mirror the grammatical dimensions the Greek lexicon encodes in its
//! free-text `desgram` descriptions: mood, tense, voice, person, number,
//! case and gender. Every dimension is optional; a tag that does not mention
//! a dimension leaves it unset rather than guessing.

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Mood {
    #[serde(rename = "indicativo")]
    Indicative,
    #[serde(rename = "subjuntivo")]
    Subjunctive,
    #[serde(rename = "imperativo")]
    Imperative,
    #[serde(rename = "infinitivo")]
    Infinitive,
    #[serde(rename = "participio")]
    Participle,
    #[serde(rename = "optativo")]
    Optative,
    #[serde(rename = "gerundio")]
    Gerund,
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Tense {
    #[serde(rename = "presente")]
    Present,
    #[serde(rename = "aoristo")]
    Aorist,
    #[serde(rename = "imperfeito")]
    Imperfect,
    #[serde(rename = "futuro")]
    Future,
    #[serde(rename = "perfeito")]
    Perfect,
    #[serde(rename = "pluperfeito")]
    Pluperfect,
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Voice {
    #[serde(rename = "ativa")]
    Active,
    #[serde(rename = "passiva")]
    Passive,
    #[serde(rename = "media")]
    Middle,
    #[serde(rename = "media_passiva")]
    MiddleOrPassive,
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Person {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Person {
    /// Zero-based offset within a paradigm's singular (or plural) half.
    pub fn index(self) -> usize {
        match self {
            Person::First => 0,
            Person::Second => 1,
            Person::Third => 2,
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Person::First),
            '2' => Some(Person::Second),
            '3' => Some(Person::Third),
            _ => None,
        }
    }
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Number {
    #[serde(rename = "singular")]
    Singular,
    #[serde(rename = "plural")]
    Plural,
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Case {
    #[serde(rename = "nominativo")]
    Nominative,
    #[serde(rename = "acusativo")]
    Accusative,
    #[serde(rename = "genitivo")]
    Genitive,
    #[serde(rename = "dativo")]
    Dative,
    #[serde(rename = "vocativo")]
    Vocative,
}

#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Gender {
    #[serde(rename = "masculino")]
    Masculine,
    #[serde(rename = "feminino")]
    Feminine,
    #[serde(rename = "neutro")]
    Neuter,
}

/// One of the three regular conjugation families, named by infinitive ending.
#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum VerbClass {
    #[serde(rename = "ar")]
    Ar,
    #[serde(rename = "er")]
    Er,
    #[serde(rename = "ir")]
    Ir,
}

impl VerbClass {
    pub fn suffix(self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }
}

/// A Portuguese tense/mood paradigm: a named set of six person/number forms.
///
/// `CompoundPerfect` (pretérito perfeito composto) is periphrastic and has no
/// ending rows; requesting it falls through the layered form resolution.
#[derive(
    Clone, Copy, Debug, serde::Serialize, serde::Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Paradigm {
    #[serde(rename = "presente_indicativo")]
    PresentIndicative,
    #[serde(rename = "preterito_perfeito")]
    Preterite,
    #[serde(rename = "preterito_perfeito_composto")]
    CompoundPerfect,
    #[serde(rename = "preterito_imperfeito")]
    Imperfect,
    #[serde(rename = "mais_que_perfeito")]
    Pluperfect,
    #[serde(rename = "futuro_presente")]
    Future,
    #[serde(rename = "presente_subjuntivo")]
    PresentSubjunctive,
    #[serde(rename = "preterito_imperfeito_subjuntivo")]
    ImperfectSubjunctive,
    #[serde(rename = "futuro_subjuntivo")]
    FutureSubjunctive,
    #[serde(rename = "imperativo")]
    Imperative,
}

/// Normalized morphological description of one dictionary entry.
///
/// Built once per entry from its `desgram` string and immutable afterwards.
/// `extra` keeps the raw tag for traceability.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
pub struct Morphology {
    pub tense: Option<Tense>,
    pub mood: Option<Mood>,
    pub voice: Option<Voice>,
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub gender: Option<Gender>,
    pub extra: Option<String>,
}

impl Morphology {
    pub fn is_finite(&self) -> bool {
        matches!(
            self.mood,
            Some(Mood::Indicative | Mood::Subjunctive | Mood::Imperative)
        )
    }

    pub fn is_participle(&self) -> bool {
        self.mood == Some(Mood::Participle)
    }

    pub fn is_infinitive(&self) -> bool {
        self.mood == Some(Mood::Infinitive)
    }

    pub fn is_nonfinite(&self) -> bool {
        !self.is_finite()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Mood::Indicative => "indicativo",
            Mood::Subjunctive => "subjuntivo",
            Mood::Imperative => "imperativo",
            Mood::Infinitive => "infinitivo",
            Mood::Participle => "particípio",
            Mood::Optative => "optativo",
            Mood::Gerund => "gerúndio",
        };
        write!(f, "{word}")
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Tense::Present => "presente",
            Tense::Aorist => "aoristo",
            Tense::Imperfect => "imperfeito",
            Tense::Future => "futuro",
            Tense::Perfect => "perfeito",
            Tense::Pluperfect => "pluperfeito",
        };
        write!(f, "{word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_moods() {
        for mood in [Mood::Indicative, Mood::Subjunctive, Mood::Imperative] {
            let morph = Morphology {
                mood: Some(mood),
                ..Morphology::default()
            };
            assert!(morph.is_finite());
            assert!(!morph.is_nonfinite());
        }
    }

    #[test]
    fn test_nonfinite_moods() {
        for mood in [Mood::Infinitive, Mood::Participle, Mood::Optative, Mood::Gerund] {
            let morph = Morphology {
                mood: Some(mood),
                ..Morphology::default()
            };
            assert!(!morph.is_finite());
            assert!(morph.is_nonfinite());
        }
        assert!(Morphology::default().is_nonfinite());
    }

    #[test]
    fn test_empty_morphology_has_no_dimensions() {
        let morph = Morphology::default();
        assert_eq!(morph.tense, None);
        assert_eq!(morph.mood, None);
        assert_eq!(morph.voice, None);
        assert_eq!(morph.person, None);
        assert_eq!(morph.number, None);
        assert_eq!(morph.case, None);
        assert_eq!(morph.gender, None);
    }

    #[test]
    fn test_person_index() {
        assert_eq!(Person::First.index(), 0);
        assert_eq!(Person::Second.index(), 1);
        assert_eq!(Person::Third.index(), 2);
        assert_eq!(Person::from_digit('2'), Some(Person::Second));
        assert_eq!(Person::from_digit('4'), None);
    }
}
