pub mod conjugate;
pub mod features;
pub mod parser;
pub mod tables;
pub mod text_cleanup;

pub use conjugate::{LemmaInfo, build_phrase, conjugate_entry, find_lemma, resolve_subject, split_phrases};
pub use features::{Case, Gender, Mood, Morphology, Number, Paradigm, Person, Tense, VerbClass, Voice};
pub use parser::parse;
pub use tables::{ConjugationTables, TABLES};
