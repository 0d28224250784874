//! Static Portuguese conjugation data.
//!
//! Regular endings for the three verb classes, full paradigm rows for the
//! high-frequency irregular verbs, irregular participles and gerunds, and
//! the pronoun tables. Every paradigm row carries exactly six forms in the
//! fixed order 1st/2nd/3rd singular, 1st/2nd/3rd plural. The tables are
//! built once behind [`TABLES`] and never mutated, so they can be shared
//! freely across concurrent callers.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::features::{Number, Paradigm, Person, VerbClass};

pub static TABLES: LazyLock<ConjugationTables> = LazyLock::new(ConjugationTables::new);

type Forms = [&'static str; 6];

pub struct ConjugationTables {
    regular: FxHashMap<(Paradigm, VerbClass), Forms>,
    irregular: FxHashMap<&'static str, FxHashMap<Paradigm, Forms>>,
    irregular_participles: FxHashMap<&'static str, &'static str>,
    irregular_gerunds: FxHashMap<&'static str, &'static str>,
    subject_pronouns: FxHashMap<(Person, Number), &'static str>,
    reflexive_pronouns: FxHashMap<(Person, Number), &'static str>,
}

impl ConjugationTables {
    fn new() -> Self {
        let regular = REGULAR_ENDINGS
            .iter()
            .map(|(paradigm, class, endings)| ((*paradigm, *class), *endings))
            .collect();
        let irregular = IRREGULAR_VERBS
            .iter()
            .map(|(lemma, rows)| {
                let paradigms = rows
                    .iter()
                    .map(|(paradigm, forms)| (*paradigm, *forms))
                    .collect();
                (*lemma, paradigms)
            })
            .collect();
        let irregular_participles = IRREGULAR_PARTICIPLES.iter().copied().collect();
        let irregular_gerunds = IRREGULAR_GERUNDS.iter().copied().collect();
        let subject_pronouns = SUBJECT_PRONOUNS
            .iter()
            .map(|(person, number, pronoun)| ((*person, *number), *pronoun))
            .collect();
        let reflexive_pronouns = REFLEXIVE_PRONOUNS
            .iter()
            .map(|(person, number, pronoun)| ((*person, *number), *pronoun))
            .collect();
        Self {
            regular,
            irregular,
            irregular_participles,
            irregular_gerunds,
            subject_pronouns,
            reflexive_pronouns,
        }
    }

    /// Regular endings for a (paradigm, class) pair. `CompoundPerfect` has no
    /// rows: it is periphrastic and resolves through fallbacks instead.
    pub fn regular_endings(&self, paradigm: Paradigm, class: VerbClass) -> Option<&Forms> {
        self.regular.get(&(paradigm, class))
    }

    /// Full irregular forms for an exact (lemma, paradigm) hit.
    pub fn irregular_forms(&self, lemma: &str, paradigm: Paradigm) -> Option<&Forms> {
        self.irregular.get(lemma)?.get(&paradigm)
    }

    pub fn has_irregular(&self, lemma: &str) -> bool {
        self.irregular.contains_key(lemma)
    }

    pub fn irregular_participle(&self, lemma: &str) -> Option<&'static str> {
        self.irregular_participles.get(lemma).copied()
    }

    pub fn irregular_gerund(&self, lemma: &str) -> Option<&'static str> {
        self.irregular_gerunds.get(lemma).copied()
    }

    pub fn subject_pronoun(&self, person: Person, number: Number) -> Option<&'static str> {
        self.subject_pronouns.get(&(person, number)).copied()
    }

    pub fn reflexive_pronoun(&self, person: Person, number: Number) -> Option<&'static str> {
        self.reflexive_pronouns.get(&(person, number)).copied()
    }
}

#[rustfmt::skip]
const REGULAR_ENDINGS: &[(Paradigm, VerbClass, Forms)] = &[
    (Paradigm::PresentIndicative, VerbClass::Ar, ["o", "as", "a", "amos", "ais", "am"]),
    (Paradigm::PresentIndicative, VerbClass::Er, ["o", "es", "e", "emos", "eis", "em"]),
    (Paradigm::PresentIndicative, VerbClass::Ir, ["o", "es", "e", "imos", "is", "em"]),
    (Paradigm::Preterite, VerbClass::Ar, ["ei", "aste", "ou", "amos", "astes", "aram"]),
    (Paradigm::Preterite, VerbClass::Er, ["i", "este", "eu", "emos", "estes", "eram"]),
    (Paradigm::Preterite, VerbClass::Ir, ["i", "iste", "iu", "imos", "istes", "iram"]),
    (Paradigm::Imperfect, VerbClass::Ar, ["ava", "avas", "ava", "ávamos", "áveis", "avam"]),
    (Paradigm::Imperfect, VerbClass::Er, ["ia", "ias", "ia", "íamos", "íeis", "iam"]),
    (Paradigm::Imperfect, VerbClass::Ir, ["ia", "ias", "ia", "íamos", "íeis", "iam"]),
    (Paradigm::Pluperfect, VerbClass::Ar, ["ara", "aras", "ara", "áramos", "áreis", "aram"]),
    (Paradigm::Pluperfect, VerbClass::Er, ["era", "eras", "era", "êramos", "êreis", "eram"]),
    (Paradigm::Pluperfect, VerbClass::Ir, ["ira", "iras", "ira", "íramos", "íreis", "iram"]),
    (Paradigm::Future, VerbClass::Ar, ["arei", "arás", "ará", "aremos", "areis", "arão"]),
    (Paradigm::Future, VerbClass::Er, ["erei", "erás", "erá", "eremos", "ereis", "erão"]),
    (Paradigm::Future, VerbClass::Ir, ["irei", "irás", "irá", "iremos", "ireis", "irão"]),
    (Paradigm::PresentSubjunctive, VerbClass::Ar, ["e", "es", "e", "emos", "eis", "em"]),
    (Paradigm::PresentSubjunctive, VerbClass::Er, ["a", "as", "a", "amos", "ais", "am"]),
    (Paradigm::PresentSubjunctive, VerbClass::Ir, ["a", "as", "a", "amos", "ais", "am"]),
    (Paradigm::ImperfectSubjunctive, VerbClass::Ar, ["asse", "asses", "asse", "ássemos", "ásseis", "assem"]),
    (Paradigm::ImperfectSubjunctive, VerbClass::Er, ["esse", "esses", "esse", "êssemos", "êsseis", "essem"]),
    (Paradigm::ImperfectSubjunctive, VerbClass::Ir, ["isse", "isses", "isse", "íssemos", "ísseis", "issem"]),
    (Paradigm::FutureSubjunctive, VerbClass::Ar, ["ar", "ares", "ar", "armos", "ardes", "arem"]),
    (Paradigm::FutureSubjunctive, VerbClass::Er, ["er", "eres", "er", "ermos", "erdes", "erem"]),
    (Paradigm::FutureSubjunctive, VerbClass::Ir, ["ir", "ires", "ir", "irmos", "irdes", "irem"]),
    (Paradigm::Imperative, VerbClass::Ar, ["", "a", "e", "emos", "ai", "em"]),
    (Paradigm::Imperative, VerbClass::Er, ["", "e", "a", "amos", "ei", "am"]),
    (Paradigm::Imperative, VerbClass::Ir, ["", "e", "a", "amos", "i", "am"]),
];

#[rustfmt::skip]
const IRREGULAR_VERBS: &[(&str, &[(Paradigm, Forms)])] = &[
    ("ser", &[
        (Paradigm::PresentIndicative, ["sou", "és", "é", "somos", "sois", "são"]),
        (Paradigm::Preterite, ["fui", "foste", "foi", "fomos", "fostes", "foram"]),
        (Paradigm::Imperfect, ["era", "eras", "era", "éramos", "éreis", "eram"]),
        (Paradigm::Pluperfect, ["fora", "foras", "fora", "fôramos", "fôreis", "foram"]),
        (Paradigm::Future, ["serei", "serás", "será", "seremos", "sereis", "serão"]),
        (Paradigm::PresentSubjunctive, ["seja", "sejas", "seja", "sejamos", "sejais", "sejam"]),
        (Paradigm::ImperfectSubjunctive, ["fosse", "fosses", "fosse", "fôssemos", "fôsseis", "fossem"]),
        (Paradigm::FutureSubjunctive, ["for", "fores", "for", "formos", "fordes", "forem"]),
        (Paradigm::Imperative, ["", "sê", "seja", "sejamos", "sede", "sejam"]),
    ]),
    ("estar", &[
        (Paradigm::PresentIndicative, ["estou", "estás", "está", "estamos", "estáis", "estão"]),
        (Paradigm::Preterite, ["estive", "estiveste", "esteve", "estivemos", "estivestes", "estiveram"]),
        (Paradigm::Imperfect, ["estava", "estavas", "estava", "estávamos", "estáveis", "estavam"]),
        (Paradigm::Future, ["estarei", "estarás", "estará", "estaremos", "estareis", "estarão"]),
        (Paradigm::PresentSubjunctive, ["esteja", "estejas", "esteja", "estejamos", "estejais", "estejam"]),
        (Paradigm::ImperfectSubjunctive, ["estivesse", "estivesses", "estivesse", "estivéssemos", "estivésseis", "estivessem"]),
        (Paradigm::FutureSubjunctive, ["estiver", "estiveres", "estiver", "estivermos", "estiverdes", "estiverem"]),
        (Paradigm::Imperative, ["", "está", "esteja", "estejamos", "estai", "estejam"]),
    ]),
    ("ter", &[
        (Paradigm::PresentIndicative, ["tenho", "tens", "tem", "temos", "tendes", "têm"]),
        (Paradigm::Preterite, ["tive", "tiveste", "teve", "tivemos", "tivestes", "tiveram"]),
        (Paradigm::Imperfect, ["tinha", "tinhas", "tinha", "tínhamos", "tínheis", "tinham"]),
        (Paradigm::Future, ["terei", "terás", "terá", "teremos", "tereis", "terão"]),
        (Paradigm::PresentSubjunctive, ["tenha", "tenhas", "tenha", "tenhamos", "tenhais", "tenham"]),
        (Paradigm::ImperfectSubjunctive, ["tivesse", "tivesses", "tivesse", "tivéssemos", "tivésseis", "tivessem"]),
        (Paradigm::FutureSubjunctive, ["tiver", "tiveres", "tiver", "tivermos", "tiverdes", "tiverem"]),
        (Paradigm::Imperative, ["", "tem", "tenha", "tenhamos", "tende", "tenham"]),
    ]),
    ("haver", &[
        (Paradigm::PresentIndicative, ["hei", "hás", "há", "havemos", "haveis", "hão"]),
        (Paradigm::Preterite, ["houve", "houveste", "houve", "houvemos", "houvestes", "houveram"]),
        (Paradigm::Imperfect, ["havia", "havias", "havia", "havíamos", "havíeis", "haviam"]),
        (Paradigm::Future, ["haverei", "haverás", "haverá", "haveremos", "havereis", "haverão"]),
        (Paradigm::PresentSubjunctive, ["haja", "hajas", "haja", "hajamos", "hajais", "hajam"]),
        (Paradigm::FutureSubjunctive, ["houver", "houveres", "houver", "houvermos", "houverdes", "houverem"]),
        (Paradigm::Imperative, ["", "há", "haja", "hajamos", "hai", "hajam"]),
    ]),
    ("ir", &[
        (Paradigm::PresentIndicative, ["vou", "vais", "vai", "vamos", "ides", "vão"]),
        (Paradigm::Preterite, ["fui", "foste", "foi", "fomos", "fostes", "foram"]),
        (Paradigm::Imperfect, ["ia", "ias", "ia", "íamos", "íeis", "iam"]),
        (Paradigm::Future, ["irei", "irás", "irá", "iremos", "ireis", "irão"]),
        (Paradigm::PresentSubjunctive, ["vá", "vás", "vá", "vamos", "vades", "vão"]),
        (Paradigm::FutureSubjunctive, ["for", "fores", "for", "formos", "fordes", "forem"]),
        (Paradigm::Imperative, ["", "vai", "vá", "vamos", "ide", "vão"]),
    ]),
    ("dar", &[
        (Paradigm::PresentIndicative, ["dou", "dás", "dá", "damos", "dais", "dão"]),
        (Paradigm::Preterite, ["dei", "deste", "deu", "demos", "destes", "deram"]),
        (Paradigm::Imperfect, ["dava", "davas", "dava", "dávamos", "dáveis", "davam"]),
        (Paradigm::Future, ["darei", "darás", "dará", "daremos", "dareis", "darão"]),
        (Paradigm::PresentSubjunctive, ["dê", "dês", "dê", "demos", "deis", "deem"]),
        (Paradigm::FutureSubjunctive, ["der", "deres", "der", "dermos", "derdes", "derem"]),
        (Paradigm::Imperative, ["", "dá", "dê", "demos", "dai", "deem"]),
    ]),
    ("ver", &[
        (Paradigm::PresentIndicative, ["vejo", "vês", "vê", "vemos", "vedes", "veem"]),
        (Paradigm::Preterite, ["vi", "viste", "viu", "vimos", "vistes", "viram"]),
        (Paradigm::Imperfect, ["via", "vias", "via", "víamos", "víeis", "viam"]),
        (Paradigm::Future, ["verei", "verás", "verá", "veremos", "vereis", "verão"]),
        (Paradigm::PresentSubjunctive, ["veja", "vejas", "veja", "vejamos", "vejais", "vejam"]),
        (Paradigm::FutureSubjunctive, ["vir", "vires", "vir", "virmos", "virdes", "virem"]),
        (Paradigm::Imperative, ["", "vê", "veja", "vejamos", "vede", "vejam"]),
    ]),
    ("vir", &[
        (Paradigm::PresentIndicative, ["venho", "vens", "vem", "vimos", "vindes", "vêm"]),
        (Paradigm::Preterite, ["vim", "vieste", "veio", "viemos", "viestes", "vieram"]),
        (Paradigm::Imperfect, ["vinha", "vinhas", "vinha", "vínhamos", "vínheis", "vinham"]),
        (Paradigm::Future, ["virei", "virás", "virá", "viremos", "vireis", "virão"]),
        (Paradigm::PresentSubjunctive, ["venha", "venhas", "venha", "venhamos", "venhais", "venham"]),
        (Paradigm::FutureSubjunctive, ["vier", "vieres", "vier", "viermos", "vierdes", "vierem"]),
        (Paradigm::Imperative, ["", "vem", "venha", "venhamos", "vinde", "venham"]),
    ]),
    ("fazer", &[
        (Paradigm::PresentIndicative, ["faço", "fazes", "faz", "fazemos", "fazeis", "fazem"]),
        (Paradigm::Preterite, ["fiz", "fizeste", "fez", "fizemos", "fizestes", "fizeram"]),
        (Paradigm::Imperfect, ["fazia", "fazias", "fazia", "fazíamos", "fazíeis", "faziam"]),
        (Paradigm::Future, ["farei", "farás", "fará", "faremos", "fareis", "farão"]),
        (Paradigm::PresentSubjunctive, ["faça", "faças", "faça", "façamos", "façais", "façam"]),
        (Paradigm::FutureSubjunctive, ["fizer", "fizeres", "fizer", "fizermos", "fizerdes", "fizerem"]),
        (Paradigm::Imperative, ["", "faz", "faça", "façamos", "fazei", "façam"]),
    ]),
    ("dizer", &[
        (Paradigm::PresentIndicative, ["digo", "dizes", "diz", "dizemos", "dizeis", "dizem"]),
        (Paradigm::Preterite, ["disse", "disseste", "disse", "dissemos", "dissestes", "disseram"]),
        (Paradigm::Imperfect, ["dizia", "dizias", "dizia", "dizíamos", "dizíeis", "diziam"]),
        (Paradigm::Future, ["direi", "dirás", "dirá", "diremos", "direis", "dirão"]),
        (Paradigm::PresentSubjunctive, ["diga", "digas", "diga", "digamos", "digais", "digam"]),
        (Paradigm::FutureSubjunctive, ["disser", "disseres", "disser", "dissermos", "disserdes", "disserem"]),
        (Paradigm::Imperative, ["", "diz", "diga", "digamos", "dizei", "digam"]),
    ]),
    ("poder", &[
        (Paradigm::PresentIndicative, ["posso", "podes", "pode", "podemos", "podeis", "podem"]),
        (Paradigm::Preterite, ["pude", "pudeste", "pôde", "pudemos", "pudestes", "puderam"]),
        (Paradigm::Imperfect, ["podia", "podias", "podia", "podíamos", "podíeis", "podiam"]),
        (Paradigm::Future, ["poderei", "poderás", "poderá", "poderemos", "podereis", "poderão"]),
        (Paradigm::PresentSubjunctive, ["possa", "possas", "possa", "possamos", "possais", "possam"]),
        (Paradigm::FutureSubjunctive, ["puder", "puderes", "puder", "pudermos", "puderdes", "puderem"]),
        (Paradigm::Imperative, ["", "pode", "possa", "possamos", "podei", "possam"]),
    ]),
    ("trazer", &[
        (Paradigm::PresentIndicative, ["trago", "trazes", "traz", "trazemos", "trazeis", "trazem"]),
        (Paradigm::Preterite, ["trouxe", "trouxeste", "trouxe", "trouxemos", "trouxestes", "trouxeram"]),
        (Paradigm::Future, ["trarei", "trarás", "trará", "traremos", "trareis", "trarão"]),
        (Paradigm::PresentSubjunctive, ["traga", "tragas", "traga", "tragamos", "tragais", "tragam"]),
        (Paradigm::FutureSubjunctive, ["trouxer", "trouxeres", "trouxer", "trouxermos", "trouxerdes", "trouxerem"]),
        (Paradigm::Imperative, ["", "traz", "traga", "tragamos", "trazei", "tragam"]),
    ]),
    ("querer", &[
        (Paradigm::PresentIndicative, ["quero", "queres", "quer", "queremos", "quereis", "querem"]),
        (Paradigm::Preterite, ["quis", "quiseste", "quis", "quisemos", "quisestes", "quiseram"]),
        (Paradigm::Imperfect, ["queria", "querias", "queria", "queríamos", "queríeis", "queriam"]),
        (Paradigm::Future, ["quererei", "quererás", "quererá", "quereremos", "querereis", "quererão"]),
        (Paradigm::PresentSubjunctive, ["queira", "queiras", "queira", "queiramos", "queirais", "queiram"]),
        (Paradigm::FutureSubjunctive, ["quiser", "quiseres", "quiser", "quisermos", "quiserdes", "quiserem"]),
        (Paradigm::Imperative, ["", "quer", "queira", "queiramos", "querei", "queiram"]),
    ]),
    ("saber", &[
        (Paradigm::PresentIndicative, ["sei", "sabes", "sabe", "sabemos", "sabeis", "sabem"]),
        (Paradigm::Preterite, ["soube", "soubeste", "soube", "soubemos", "soubestes", "souberam"]),
        (Paradigm::Imperfect, ["sabia", "sabias", "sabia", "sabíamos", "sabíeis", "sabiam"]),
        (Paradigm::Future, ["saberei", "saberás", "saberá", "saberemos", "sabereis", "saberão"]),
        (Paradigm::PresentSubjunctive, ["saiba", "saibas", "saiba", "saibamos", "saibais", "saibam"]),
        (Paradigm::FutureSubjunctive, ["souber", "souberes", "souber", "soubermos", "souberdes", "souberem"]),
        (Paradigm::Imperative, ["", "sabe", "saiba", "saibamos", "sabei", "saibam"]),
    ]),
    ("pôr", &[
        (Paradigm::PresentIndicative, ["ponho", "pões", "põe", "pomos", "pondes", "põem"]),
        (Paradigm::Preterite, ["pus", "puseste", "pôs", "pusemos", "pusestes", "puseram"]),
        (Paradigm::Imperfect, ["punha", "punhas", "punha", "púnhamos", "púnheis", "punham"]),
        (Paradigm::Future, ["porei", "porás", "porá", "poremos", "poreis", "porão"]),
        (Paradigm::PresentSubjunctive, ["ponha", "ponhas", "ponha", "ponhamos", "ponhais", "ponham"]),
        (Paradigm::FutureSubjunctive, ["puser", "puseres", "puser", "pusermos", "puserdes", "puserem"]),
        (Paradigm::Imperative, ["", "põe", "ponha", "ponhamos", "ponde", "ponham"]),
    ]),
];

const IRREGULAR_PARTICIPLES: &[(&str, &str)] = &[
    ("ser", "sido"),
    ("estar", "estado"),
    ("ter", "tido"),
    ("haver", "havido"),
    ("ir", "ido"),
    ("ver", "visto"),
    ("vir", "vindo"),
    ("fazer", "feito"),
    ("dizer", "dito"),
    ("poder", "podido"),
    ("trazer", "trazido"),
    ("querer", "querido"),
    ("saber", "sabido"),
    ("dar", "dado"),
    ("pôr", "posto"),
];

const IRREGULAR_GERUNDS: &[(&str, &str)] = &[
    ("ser", "sendo"),
    ("estar", "estando"),
    ("ir", "indo"),
    ("ver", "vendo"),
    ("vir", "vindo"),
    ("pôr", "pondo"),
    ("ter", "tendo"),
    ("fazer", "fazendo"),
    ("dizer", "dizendo"),
    ("trazer", "trazendo"),
];

const SUBJECT_PRONOUNS: &[(Person, Number, &str)] = &[
    (Person::First, Number::Singular, "eu"),
    (Person::Second, Number::Singular, "tu"),
    (Person::Third, Number::Singular, "ele(a)"),
    (Person::First, Number::Plural, "nós"),
    (Person::Second, Number::Plural, "vocês"),
    (Person::Third, Number::Plural, "eles(as)"),
];

const REFLEXIVE_PRONOUNS: &[(Person, Number, &str)] = &[
    (Person::First, Number::Singular, "me"),
    (Person::Second, Number::Singular, "te"),
    (Person::Third, Number::Singular, "se"),
    (Person::First, Number::Plural, "nos"),
    (Person::Second, Number::Plural, "vos"),
    (Person::Third, Number::Plural, "se"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_endings_cover_all_classes() {
        for paradigm in [
            Paradigm::PresentIndicative,
            Paradigm::Preterite,
            Paradigm::Imperfect,
            Paradigm::Pluperfect,
            Paradigm::Future,
            Paradigm::PresentSubjunctive,
            Paradigm::ImperfectSubjunctive,
            Paradigm::FutureSubjunctive,
            Paradigm::Imperative,
        ] {
            for class in [VerbClass::Ar, VerbClass::Er, VerbClass::Ir] {
                assert!(
                    TABLES.regular_endings(paradigm, class).is_some(),
                    "missing endings for {paradigm:?}/{class:?}"
                );
            }
        }
    }

    #[test]
    fn test_compound_perfect_has_no_regular_endings() {
        for class in [VerbClass::Ar, VerbClass::Er, VerbClass::Ir] {
            assert!(TABLES.regular_endings(Paradigm::CompoundPerfect, class).is_none());
        }
    }

    #[test]
    fn test_irregular_lookup() {
        let forms = TABLES
            .irregular_forms("ser", Paradigm::PresentIndicative)
            .unwrap();
        assert_eq!(forms, &["sou", "és", "é", "somos", "sois", "são"]);
        assert!(TABLES.irregular_forms("amar", Paradigm::PresentIndicative).is_none());
    }

    #[test]
    fn test_irregular_partial_coverage() {
        // "trazer" and "haver" carry no imperfect row; the conjugator falls
        // back through other paradigms instead.
        assert!(TABLES.irregular_forms("trazer", Paradigm::Imperfect).is_none());
        assert!(TABLES.irregular_forms("haver", Paradigm::Imperfect).is_some());
        assert!(TABLES.irregular_forms("haver", Paradigm::ImperfectSubjunctive).is_none());
    }

    #[test]
    fn test_every_irregular_has_present_indicative() {
        for (lemma, _) in IRREGULAR_VERBS {
            assert!(
                TABLES.irregular_forms(lemma, Paradigm::PresentIndicative).is_some(),
                "{lemma} has no present indicative row"
            );
        }
    }

    #[test]
    fn test_irregular_participles_and_gerunds() {
        assert_eq!(TABLES.irregular_participle("fazer"), Some("feito"));
        assert_eq!(TABLES.irregular_participle("pôr"), Some("posto"));
        assert_eq!(TABLES.irregular_participle("amar"), None);
        assert_eq!(TABLES.irregular_gerund("pôr"), Some("pondo"));
        assert_eq!(TABLES.irregular_gerund("amar"), None);
    }

    #[test]
    fn test_pronoun_tables() {
        assert_eq!(TABLES.subject_pronoun(Person::First, Number::Singular), Some("eu"));
        assert_eq!(TABLES.subject_pronoun(Person::Third, Number::Plural), Some("eles(as)"));
        assert_eq!(TABLES.reflexive_pronoun(Person::First, Number::Plural), Some("nos"));
        assert_eq!(TABLES.reflexive_pronoun(Person::Third, Number::Singular), Some("se"));
    }
}
