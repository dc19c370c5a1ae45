use super::production::Production;
use super::specs::GrammarSpec;
use super::vocabulary::{FileVocabulary, VocabularyReference};
use super::GrammarError;
use crate::log;
use crate::util::IndexedMap;
use std::path::Path;

/// The productions of a grammar that is still being assembled, in definition order.
#[derive(Debug, Clone)]
pub struct ProductionTable {
    pub(super) language: String,
    pub(super) case_sensitive: bool,
    pub(super) productions: IndexedMap<Production>,
}

impl ProductionTable {
    pub fn new(
        language: impl Into<String>,
        case_sensitive: bool,
    ) -> Result<ProductionTable, GrammarError> {
        let language = language.into();
        if language.is_empty() {
            return Err(GrammarError::EmptyLanguage);
        }
        Ok(ProductionTable {
            language,
            case_sensitive,
            productions: IndexedMap::new(),
        })
    }

    /// Build a table from a grammar document. Vocabulary paths are relative to `base_dir`.
    pub fn from_spec(spec: GrammarSpec, base_dir: &Path) -> Result<ProductionTable, GrammarError> {
        let language = spec.language;
        let mut table = ProductionTable::new(language.as_str(), spec.case_sensitive)?;
        for production in spec.productions {
            table.add(production.into_production(Some(language.as_str())))?;
        }
        for path in spec.vocabularies {
            table.add_vocabulary(&FileVocabulary::new(base_dir.join(path)))?;
        }
        Ok(table)
    }

    /// Read a `.ron` or `.json` grammar document, along with any vocabularies it imports.
    pub fn load(path: &Path) -> Result<ProductionTable, GrammarError> {
        let spec = GrammarSpec::load(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        ProductionTable::from_spec(spec, base_dir)
    }

    /// Add a production. Fails if there's already a production with the same name. A production
    /// without a vocabulary tag is tagged with this table's language.
    pub fn add(&mut self, mut production: Production) -> Result<(), GrammarError> {
        if production.vocabulary.is_none() {
            production.vocabulary = Some(self.language.clone());
        }
        match self.productions.insert(production.name.clone(), production) {
            Ok(_) => Ok(()),
            Err(name) => {
                log!(Error, "Duplicate definition of '{}' production", name);
                Err(GrammarError::DuplicateDefinition(name))
            }
        }
    }

    /// Add every production of an external vocabulary. Any name clash fails the whole merge.
    pub fn add_vocabulary<V: VocabularyReference + ?Sized>(
        &mut self,
        vocabulary: &V,
    ) -> Result<(), GrammarError> {
        let productions = vocabulary.resolve()?;
        log!(
            Info,
            "Merging {} productions from vocabulary '{}' into '{}'",
            productions.len(),
            vocabulary.name(),
            self.language
        );
        for production in productions {
            self.add(production)?;
        }
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn get(&self, name: &str) -> Option<&Production> {
        self.productions.get_by_name(name)
    }

    /// Iterate over the productions in the order they were added.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Production> {
        self.productions.values()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
