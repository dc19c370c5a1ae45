pub mod copy;
mod dependencies;
mod expr;
mod grammar;
mod production;
mod resolve;
mod specs;
mod table;
mod visitor;
mod vocabulary;

use std::fmt;
use std::io;

pub use dependencies::{Dependencies, MissingProduction, MissingProductions, Referrer};
pub use expr::Expr;
pub use grammar::{Grammar, ProductionMap};
pub use production::Production;
pub use resolve::ResolutionOption;
pub use specs::{GrammarSpec, ProductionSpec, VocabularySpec};
pub use table::ProductionTable;
pub use visitor::{EbnfWriter, GrammarVisitor};
pub use vocabulary::{FileVocabulary, InlineVocabulary, VocabularyReference};

#[derive(thiserror::Error, fmt::Debug)]
pub enum GrammarError {
    // Assembly
    #[error("Grammar language name must not be empty")]
    EmptyLanguage,
    #[error("Duplicate definition of '{0}' production")]
    DuplicateDefinition(String),

    // Resolution
    #[error("{0}")]
    MissingProductions(MissingProductions),

    // Queries
    #[error("No production named '{0}' in the grammar")]
    ProductionNotFound(String),

    // Documents
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Parse error in '{filename}'{loc}: {message}", loc = display_pos(.pos))]
    Parse {
        filename: String,
        /// 0-indexed (row, col), if known.
        pos: Option<(usize, usize)>,
        message: String,
    },
    #[error("Unknown document format for '{0}': expected a .ron or .json file")]
    UnknownFormat(String),
}

fn display_pos(pos: &Option<(usize, usize)>) -> String {
    match pos {
        Some((row, col)) => format!(" at {}:{}", row + 1, col + 1),
        None => String::new(),
    }
}

impl GrammarError {
    pub(crate) fn from_ron_error(filename: &str, error: ron::error::SpannedError) -> GrammarError {
        // Serde ron uses 1-indexed positions, with 0,0 as a sentinel value.
        let (row, col) = (error.position.line, error.position.col);
        let pos = if row == 0 || col == 0 {
            None
        } else {
            Some((row - 1, col - 1))
        };
        GrammarError::Parse {
            filename: filename.to_owned(),
            pos,
            message: format!("{}", error.code),
        }
    }

    pub(crate) fn from_json_error(filename: &str, error: serde_json::Error) -> GrammarError {
        // Also 1-indexed, with 0 meaning "no position".
        let (row, col) = (error.line(), error.column());
        let pos = if row == 0 || col == 0 {
            None
        } else {
            Some((row - 1, col - 1))
        };
        GrammarError::Parse {
            filename: filename.to_owned(),
            pos,
            message: format!("{}", error),
        }
    }
}
