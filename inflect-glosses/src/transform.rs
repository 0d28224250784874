//! Recomputes the inflected `traducao` and `pt` columns of the dictionary.
//!
//! Verb entries get their translation re-derived from the `verbete` clause
//! list and the `desgram` morphology; every entry gets `pt` recomputed as
//! the first clause of `traducao`. Processing is best-effort per entry: a
//! tag the parser cannot make sense of leaves the entry's translation
//! untouched rather than aborting the batch.

use indicatif::{ProgressBar, ProgressStyle};
use portuguese_verbs::{TABLES, conjugate_entry, parse, split_phrases};

use crate::dict::{Dictionary, Entry};

pub fn transform_dictionary(dictionary: Dictionary) -> Dictionary {
    let pb = ProgressBar::new(dictionary.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} entries ({per_sec}, {eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut inflected = 0usize;
    let transformed = dictionary
        .into_iter()
        .map(|(lemma, mut entry)| {
            pb.inc(1);
            if entry.is_verb() {
                if let Some(traducao) = build_translation(&entry) {
                    entry.traducao = Some(traducao);
                    inflected += 1;
                }
            }
            entry.pt = Some(first_clause(entry.traducao.as_deref()));
            (lemma, entry)
        })
        .collect();
    pb.finish();

    log::info!("Re-inflected {inflected} verb entries");
    transformed
}

/// Derive the inflected translation from the entry's `verbete` clause list.
/// Returns `None` when there is nothing to work from (no verbete, or an
/// empty clause list), leaving the existing translation in place.
fn build_translation(entry: &Entry) -> Option<String> {
    let verbete = entry.verbete.as_deref()?;
    let base = match verbete.split_once(':') {
        Some((_, clauses)) => clauses.trim(),
        None => verbete,
    };
    if base.is_empty() {
        return None;
    }

    let morphology = parse(entry.desgram.as_deref().unwrap_or(""));
    let mut phrases = split_phrases(base);
    if phrases.is_empty() {
        phrases.push(base.to_string());
    }

    let rendered = conjugate_entry(&TABLES, &phrases, &morphology);
    Some(rendered.join(", "))
}

/// `pt` is the part of the translation before its first comma.
fn first_clause(traducao: Option<&str>) -> String {
    match traducao {
        Some(traducao) if !traducao.is_empty() => match traducao.split_once(',') {
            Some((head, _)) => head.trim().to_string(),
            None => traducao.trim().to_string(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> Entry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_verb_entry_is_reinflected() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "agapao".to_string(),
            entry(
                r#"{
                    "verbete": "G25: amar, estimar",
                    "traducao": "amar, estimar",
                    "classegram": "V",
                    "desgram": "Verbo - Ativa Indicativo Presente - 1ª Pessoa Singular"
                }"#,
            ),
        );

        let transformed = transform_dictionary(dictionary);
        let agapao = &transformed["agapao"];
        assert_eq!(agapao.traducao.as_deref(), Some("eu amo, estimo"));
        assert_eq!(agapao.pt.as_deref(), Some("eu amo"));
    }

    #[test]
    fn test_non_verb_entry_passes_through() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "kai".to_string(),
            entry(r#"{"verbete": "G2532: e, também", "traducao": "e, também", "classegram": "Conj"}"#),
        );

        let transformed = transform_dictionary(dictionary);
        let kai = &transformed["kai"];
        assert_eq!(kai.traducao.as_deref(), Some("e, também"));
        assert_eq!(kai.pt.as_deref(), Some("e"));
    }

    #[test]
    fn test_pt_recomputed_even_without_traducao() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "amen".to_string(),
            entry(r#"{"classegram": "Heb", "pt": "stale value"}"#),
        );

        let transformed = transform_dictionary(dictionary);
        assert_eq!(transformed["amen"].pt.as_deref(), Some(""));
    }

    #[test]
    fn test_degraded_tag_keeps_existing_translation() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "poieo".to_string(),
            entry(
                r#"{
                    "verbete": "G4160: fazer, produzir",
                    "traducao": "fazer, produzir",
                    "classegram": "V",
                    "desgram": "Verbo"
                }"#,
            ),
        );

        // The tag has no core segment, so the clauses come back unchanged.
        let transformed = transform_dictionary(dictionary);
        let poieo = &transformed["poieo"];
        assert_eq!(poieo.traducao.as_deref(), Some("fazer, produzir"));
        assert_eq!(poieo.pt.as_deref(), Some("fazer"));
    }

    #[test]
    fn test_verbete_is_never_modified() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(
            "agapao".to_string(),
            entry(
                r#"{
                    "verbete": "G25: amar",
                    "classegram": "V",
                    "desgram": "Verbo - Ativa Indicativo Presente - 3ª Pessoa Singular"
                }"#,
            ),
        );

        let transformed = transform_dictionary(dictionary);
        let agapao = &transformed["agapao"];
        assert_eq!(agapao.verbete.as_deref(), Some("G25: amar"));
        assert_eq!(agapao.traducao.as_deref(), Some("ele(a) ama"));
    }

    #[test]
    fn test_verbete_without_colon() {
        let result = build_translation(&entry(
            r#"{
                "verbete": "partir, sair",
                "classegram": "V",
                "desgram": "Verbo - Ativa Indicativo Aoristo - 3ª Pessoa Plural"
            }"#,
        ));
        assert_eq!(result.as_deref(), Some("eles(as) partiram, sairam"));
    }

    #[test]
    fn test_missing_verbete_yields_nothing() {
        let result = build_translation(&entry(r#"{"classegram": "V", "desgram": "Verbo"}"#));
        assert_eq!(result, None);
        let result = build_translation(&entry(r#"{"verbete": "G1:", "classegram": "V"}"#));
        assert_eq!(result, None);
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let mut dictionary = Dictionary::new();
        for key in ["gamma", "alpha", "beta"] {
            dictionary.insert(key.to_string(), Entry::default());
        }
        let transformed = transform_dictionary(dictionary);
        let keys: Vec<_> = transformed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_first_clause() {
        assert_eq!(first_clause(Some("eu amo, estimo")), "eu amo");
        assert_eq!(first_clause(Some("partir")), "partir");
        assert_eq!(first_clause(Some("")), "");
        assert_eq!(first_clause(None), "");
    }
}
