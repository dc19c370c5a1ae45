use super::dependencies::{Dependencies, Referrer};
use super::grammar::{Grammar, ProductionMap};
use super::table::ProductionTable;
use super::GrammarError;
use crate::log;
use bit_set::BitSet;

/// Flags that alter how a production table is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionOption {
    /// Don't require a production named after the language. Instead, every production whose
    /// vocabulary is the language counts as a root: the grammar's own productions, plus any
    /// imported from a vocabulary of the same language.
    AllowRootless,
    /// Meant to drop unused productions from the grammar. Currently this only silences the
    /// unused-production warning: nothing is removed.
    SkipUnusedProductions,
}

impl ProductionTable {
    /// Check every non-terminal of every production, and turn the table into a grammar.
    ///
    /// All missing productions (including a missing root) are reported together in one
    /// `GrammarError::MissingProductions`. Productions that can't be reached from the root are
    /// logged as a warning but don't cause a failure. `copy` chooses the final representation
    /// of the production map, e.g. [`copy::sorted`](crate::copy::sorted).
    pub fn resolve(
        self,
        copy: impl FnOnce(ProductionMap) -> ProductionMap,
        options: &[ResolutionOption],
    ) -> Result<Grammar, GrammarError> {
        let mut dependencies = Dependencies::new();
        let unused = self.resolve_references(options, &mut dependencies);
        dependencies.report_missing_productions()?;

        if !unused.is_empty() {
            let names = unused
                .iter()
                .map(|id| self.productions[id].name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if options.contains(&ResolutionOption::SkipUnusedProductions) {
                // TODO: remove these from the final map, once it's settled whether pruning
                // should also drop productions that only unused productions refer to.
                log!(Debug, "Keeping unused productions: {}", names);
            } else {
                log!(Warn, "Unused productions: {}", names);
            }
        }

        let ProductionTable {
            language,
            case_sensitive,
            productions,
        } = self;
        let productions = productions
            .into_values()
            .map(|production| (production.name.clone(), production))
            .collect();
        log!(Info, "Resolved grammar '{}'", language);
        Ok(Grammar::new(language, case_sensitive, copy(productions)))
    }

    /// Find the root, then look up the references of every production (not just the reachable
    /// ones), recording the missing ones in `dependencies`. Returns the ids of the productions
    /// that were never reached.
    fn resolve_references(
        &self,
        options: &[ResolutionOption],
        dependencies: &mut Dependencies,
    ) -> BitSet {
        let mut unused = (&self.productions).into_iter().collect::<BitSet>();

        if let Some(root) = self.productions.id(&self.language) {
            unused.remove(root);
        } else if options.contains(&ResolutionOption::AllowRootless) {
            for id in &self.productions {
                if self.productions[id].vocabulary.as_deref() == Some(self.language.as_str()) {
                    unused.remove(id);
                }
            }
        } else {
            let referrer = Referrer::Root {
                language: self.language.clone(),
            };
            dependencies.missing_production(&self.language, referrer);
        }

        let productions = &self.productions;
        let mut lookup = |name: &str| match productions.id(name) {
            Some(id) => {
                unused.remove(id);
                productions.get(id)
            }
            None => None,
        };
        for production in productions.values() {
            production.resolve(&mut lookup, dependencies);
        }

        unused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::identity;
    use crate::grammar::{Expr, Production};

    fn nt(name: &str) -> Expr {
        Expr::NonTerminal(name.to_owned())
    }

    fn table(language: &str, productions: Vec<Production>) -> ProductionTable {
        let mut table = ProductionTable::new(language, true).unwrap();
        for production in productions {
            table.add(production).unwrap();
        }
        table
    }

    fn unused_names(table: &ProductionTable, options: &[ResolutionOption]) -> Vec<String> {
        let mut deps = Dependencies::new();
        table
            .resolve_references(options, &mut deps)
            .iter()
            .map(|id| table.productions[id].name.clone())
            .collect()
    }

    #[test]
    fn test_reached_through_references() {
        let t = table(
            "lang",
            vec![
                Production::new("lang", nt("a")),
                Production::new("a", Expr::Sequence(vec![nt("b"), nt("a")])),
                Production::new("b", Expr::Epsilon),
                Production::new("island", Expr::Epsilon),
            ],
        );
        assert_eq!(unused_names(&t, &[]), ["island"]);
    }

    #[test]
    fn test_unreachable_productions_still_mark_their_references() {
        // `orphan` is never reached, but it is still resolved, so `helper` counts as used.
        let t = table(
            "lang",
            vec![
                Production::new("lang", Expr::Epsilon),
                Production::new("orphan", nt("helper")),
                Production::new("helper", Expr::Epsilon),
            ],
        );
        assert_eq!(unused_names(&t, &[]), ["orphan"]);
    }

    #[test]
    fn test_rootless_marks_productions_of_the_language() {
        let t = table(
            "mylang",
            vec![
                Production::new("first", Expr::Epsilon).with_vocabulary("mylang"),
                Production::new("second", Expr::Epsilon).with_vocabulary("mylang"),
                Production::new("other", Expr::Epsilon).with_vocabulary("elsewhere"),
                Production::new("local", Expr::Epsilon),
            ],
        );
        assert_eq!(unused_names(&t, &[ResolutionOption::AllowRootless]), ["other"]);
    }

    #[test]
    fn test_missing_root_is_reported_with_missing_references() {
        let t = table("lang", vec![Production::new("start", nt("Nowhere"))]);
        match t.resolve(identity, &[]) {
            Err(GrammarError::MissingProductions(missing)) => {
                assert_eq!(missing.names().collect::<Vec<_>>(), ["lang", "Nowhere"]);
                assert_eq!(missing.missing_root(), Some("lang"));
            }
            other => panic!("expected missing productions, got {:?}", other),
        }
    }

    #[test]
    fn test_rootless_local_productions_are_roots() {
        let t = table(
            "lang",
            vec![
                Production::new("start", Expr::Epsilon),
                Production::new("finish", Expr::Epsilon),
            ],
        );
        assert!(unused_names(&t, &[ResolutionOption::AllowRootless]).is_empty());
        assert_eq!(unused_names(&t, &[]), ["start", "finish"]);
        let grammar = t.resolve(identity, &[ResolutionOption::AllowRootless]).unwrap();
        assert_eq!(grammar.len(), 2);
    }
}
