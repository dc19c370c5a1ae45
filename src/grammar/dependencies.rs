use super::GrammarError;
use crate::log;
use crate::util::OrderedMap;
use std::fmt;

/// Who asked for a production that turned out not to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Referrer {
    /// The grammar itself, looking for its root production (named after the language).
    Root { language: String },
    /// A non-terminal reference in the body of the named production.
    Production(String),
}

/// A production that was referenced but never defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingProduction {
    pub name: String,
    /// Everyone that referenced it, in the order they were encountered.
    pub referrers: Vec<Referrer>,
}

/// Every missing production found in one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingProductions(pub Vec<MissingProduction>);

/// Collects the names that lookups failed to find during a resolution pass, so that all of
/// them can be reported together once the pass is over.
#[derive(Debug, Default)]
pub struct Dependencies {
    missing: OrderedMap<String, Vec<Referrer>>,
}

impl Dependencies {
    pub fn new() -> Dependencies {
        Dependencies {
            missing: OrderedMap::new(),
        }
    }

    /// Record that `referrer` needed a production called `name`, and there was none.
    pub fn missing_production(&mut self, name: &str, referrer: Referrer) {
        if let Some(referrers) = self.missing.get_mut(name) {
            if !referrers.contains(&referrer) {
                referrers.push(referrer);
            }
        } else {
            self.missing.insert(name.to_owned(), vec![referrer]);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Fail with every missing production at once, if there were any.
    pub fn report_missing_productions(self) -> Result<(), GrammarError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        let missing = MissingProductions(
            self.missing
                .into_iter()
                .map(|(name, referrers)| MissingProduction { name, referrers })
                .collect(),
        );
        log!(Error, "{}", missing);
        Err(GrammarError::MissingProductions(missing))
    }
}

impl MissingProductions {
    /// The names of the missing productions, in the order they were first referenced.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|missing| missing.name.as_str())
    }

    /// The language name, if the grammar lacked its root production.
    pub fn missing_root(&self) -> Option<&str> {
        self.0
            .iter()
            .flat_map(|missing| &missing.referrers)
            .find_map(|referrer| match referrer {
                Referrer::Root { language } => Some(language.as_str()),
                Referrer::Production(_) => None,
            })
    }
}

impl fmt::Display for Referrer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Referrer::Root { language } => write!(f, "root of grammar '{}'", language),
            Referrer::Production(name) => write!(f, "production '{}'", name),
        }
    }
}

impl fmt::Display for MissingProductions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Missing productions:")?;
        for missing in &self.0 {
            write!(f, "\n\t'{}' required by ", missing.name)?;
            for (i, referrer) in missing.referrers.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", referrer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn referrer(name: &str) -> Referrer {
        Referrer::Production(name.to_owned())
    }

    #[test]
    fn test_empty_reports_nothing() {
        let deps = Dependencies::new();
        assert!(deps.is_empty());
        assert!(deps.report_missing_productions().is_ok());
    }

    #[test]
    fn test_aggregates_by_name() {
        let mut deps = Dependencies::new();
        deps.missing_production("X", referrer("a"));
        deps.missing_production("Y", referrer("a"));
        deps.missing_production("X", referrer("b"));
        deps.missing_production("X", referrer("b"));

        match deps.report_missing_productions() {
            Err(GrammarError::MissingProductions(missing)) => {
                assert_eq!(missing.names().collect::<Vec<_>>(), ["X", "Y"]);
                assert_eq!(missing.0[0].referrers, vec![referrer("a"), referrer("b")]);
                assert_eq!(missing.missing_root(), None);
                assert_eq!(
                    missing.to_string(),
                    "Missing productions:\n\t'X' required by production 'a', production 'b'\n\t'Y' required by production 'a'"
                );
            }
            other => panic!("expected missing productions, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_root() {
        let mut deps = Dependencies::new();
        deps.missing_production(
            "mylang",
            Referrer::Root {
                language: "mylang".to_owned(),
            },
        );
        match deps.report_missing_productions() {
            Err(GrammarError::MissingProductions(missing)) => {
                assert_eq!(missing.missing_root(), Some("mylang"));
                assert!(missing.to_string().contains("root of grammar 'mylang'"));
            }
            other => panic!("expected missing productions, got {:?}", other),
        }
    }
}
