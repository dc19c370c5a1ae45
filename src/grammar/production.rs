use super::dependencies::Dependencies;
use super::expr::Expr;
use super::visitor::GrammarVisitor;

/// A named grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub name: String,
    pub description: Option<String>,
    /// The language this production was defined in: the host grammar's language for its own
    /// productions, or the vocabulary's language for imported ones. `None` until the production is
    /// added to a table, which fills in its own language.
    pub vocabulary: Option<String>,
    pub body: Expr,
}

impl Production {
    pub fn new(name: impl Into<String>, body: Expr) -> Production {
        Production {
            name: name.into(),
            description: None,
            vocabulary: None,
            body,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Production {
        self.description = Some(description.into());
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Production {
        self.vocabulary = Some(vocabulary.into());
        self
    }

    /// Check every non-terminal in the body against `lookup`.
    pub fn resolve<'t>(
        &self,
        lookup: &mut dyn FnMut(&str) -> Option<&'t Production>,
        dependencies: &mut Dependencies,
    ) {
        self.body.resolve_references(&self.name, lookup, dependencies);
    }

    pub fn accept<V: GrammarVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_production(self)
    }
}
