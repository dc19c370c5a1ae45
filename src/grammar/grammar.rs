#![allow(clippy::module_inception)]

use super::production::Production;
use super::visitor::GrammarVisitor;
use super::GrammarError;
use crate::util::OrderedMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The final production map of a grammar, keyed by production name.
pub type ProductionMap = OrderedMap<String, Production>;

/// A resolved grammar. Immutable once built: every non-terminal in it refers to a production
/// that exists.
///
/// Equality compares the language, the case sensitivity, and the productions. Hashing only
/// looks at the language, so grammars for the same language with different productions hash
/// the same.
#[derive(Debug, Clone)]
pub struct Grammar {
    language: String,
    case_sensitive: bool,
    productions: ProductionMap,
}

impl Grammar {
    pub(super) fn new(
        language: String,
        case_sensitive: bool,
        productions: ProductionMap,
    ) -> Grammar {
        Grammar {
            language,
            case_sensitive,
            productions,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn case_sensitive_by_default(&self) -> bool {
        self.case_sensitive
    }

    /// The description of the named production, which may not have one.
    pub fn production_description(&self, name: &str) -> Result<Option<&str>, GrammarError> {
        let production = self
            .productions
            .get(name)
            .ok_or_else(|| GrammarError::ProductionNotFound(name.to_owned()))?;
        Ok(production.description.as_deref())
    }

    pub fn production(&self, name: &str) -> Option<&Production> {
        self.productions.get(name)
    }

    /// Iterate over the productions in map order.
    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.productions.values()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Visit every production in map order, stopping at the first error.
    pub fn accept<V: GrammarVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        for production in self.productions.values() {
            production.accept(visitor)?;
        }
        Ok(())
    }
}

impl PartialEq for Grammar {
    fn eq(&self, other: &Grammar) -> bool {
        self.case_sensitive == other.case_sensitive
            && self.language == other.language
            && self.productions == other.productions
    }
}

impl Eq for Grammar {}

impl Hash for Grammar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.language.hash(state);
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grammar{{{}}}", self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Expr;
    use std::collections::hash_map::DefaultHasher;

    fn grammar(language: &str, names: &[&str]) -> Grammar {
        let productions = names
            .iter()
            .map(|name| (name.to_string(), Production::new(*name, Expr::Epsilon)))
            .collect();
        Grammar::new(language.to_owned(), true, productions)
    }

    fn hash_of(grammar: &Grammar) -> u64 {
        let mut hasher = DefaultHasher::new();
        grammar.hash(&mut hasher);
        hasher.finish()
    }

    struct FailOn(&'static str, Vec<String>);

    impl GrammarVisitor for FailOn {
        type Error = String;

        fn visit_production(&mut self, production: &Production) -> Result<(), String> {
            if production.name == self.0 {
                return Err(format!("refusing {}", production.name));
            }
            self.1.push(production.name.clone());
            Ok(())
        }
    }

    #[test]
    fn test_equality_and_hash() {
        let g1 = grammar("lang", &["lang", "a"]);
        let g2 = grammar("lang", &["lang", "a"]);
        let g3 = grammar("lang", &["lang", "b"]);
        assert_eq!(g1, g2);
        assert_ne!(g1, g3);
        assert_eq!(hash_of(&g1), hash_of(&g3));

        let insensitive = Grammar::new("lang".to_owned(), false, g1.productions.clone());
        assert_ne!(g1, insensitive);
    }

    #[test]
    fn test_accept_propagates_visitor_error() {
        let g = grammar("lang", &["lang", "a", "b"]);
        let mut visitor = FailOn("b", Vec::new());
        assert_eq!(g.accept(&mut visitor), Err("refusing b".to_owned()));
        assert_eq!(visitor.1, ["lang", "a"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(grammar("cypher", &[]).to_string(), "Grammar{cypher}");
    }
}
