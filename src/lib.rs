//! Turn a table of named grammar productions into a validated, immutable [`Grammar`].
//!
//! Productions are added to a [`ProductionTable`], either directly, from a grammar document,
//! or by merging a vocabulary. [`ProductionTable::resolve`] then checks that every
//! non-terminal refers to a defined production, finds the root, and warns about productions
//! that are never used.

mod grammar;
mod util;

pub use grammar::copy;
pub use grammar::{
    Dependencies, EbnfWriter, Expr, FileVocabulary, Grammar, GrammarError, GrammarSpec,
    GrammarVisitor, InlineVocabulary, MissingProduction, MissingProductions, Production,
    ProductionMap, ProductionSpec, ProductionTable, Referrer, ResolutionOption,
    VocabularyReference, VocabularySpec,
};
pub use util::{Log, LogEntry, LogLevel};
