use super::production::Production;
use super::specs::VocabularySpec;
use super::GrammarError;
use std::path::PathBuf;

/// A source of productions to merge into a grammar.
pub trait VocabularyReference {
    /// How to refer to this vocabulary in diagnostics.
    fn name(&self) -> String;

    fn resolve(&self) -> Result<Vec<Production>, GrammarError>;
}

/// A vocabulary stored in a `.ron` or `.json` document.
#[derive(Debug, Clone)]
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    pub fn new(path: impl Into<PathBuf>) -> FileVocabulary {
        FileVocabulary { path: path.into() }
    }
}

impl VocabularyReference for FileVocabulary {
    fn name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn resolve(&self) -> Result<Vec<Production>, GrammarError> {
        Ok(VocabularySpec::load(&self.path)?.into_productions())
    }
}

/// A vocabulary built in memory. Its productions are tagged with its language when resolved.
#[derive(Debug, Clone)]
pub struct InlineVocabulary {
    language: String,
    productions: Vec<Production>,
}

impl InlineVocabulary {
    pub fn new(language: impl Into<String>, productions: Vec<Production>) -> InlineVocabulary {
        InlineVocabulary {
            language: language.into(),
            productions,
        }
    }
}

impl VocabularyReference for InlineVocabulary {
    fn name(&self) -> String {
        self.language.clone()
    }

    fn resolve(&self) -> Result<Vec<Production>, GrammarError> {
        Ok(self
            .productions
            .iter()
            .cloned()
            .map(|production| production.with_vocabulary(self.language.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Expr;

    #[test]
    fn test_inline_vocabulary_tags_productions() {
        let vocabulary = InlineVocabulary::new(
            "common",
            vec![Production::new("Space", Expr::Literal(" ".to_owned()))],
        );
        let productions = vocabulary.resolve().unwrap();
        assert_eq!(productions[0].vocabulary.as_deref(), Some("common"));
        assert_eq!(vocabulary.name(), "common");
    }

    #[test]
    fn test_missing_file() {
        let vocabulary = FileVocabulary::new("no/such/vocabulary.ron");
        assert!(matches!(
            vocabulary.resolve(),
            Err(GrammarError::Io { path, .. }) if path.ends_with("vocabulary.ron")
        ));
    }
}
