use super::dependencies::{Dependencies, Referrer};
use super::production::Production;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The body of a production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Expr {
    /// Matches the empty string.
    Epsilon,
    Literal(String),
    /// A named character class, e.g. `ID_Start`. Opaque to resolution.
    CharacterSet(String),
    /// A reference to another production, by name.
    NonTerminal(String),
    Sequence(Vec<Expr>),
    Alternatives(Vec<Expr>),
    Optional(Box<Expr>),
    Repetition {
        min: usize,
        #[serde(default)]
        max: Option<usize>,
        expr: Box<Expr>,
    },
}

impl Expr {
    /// Look up every non-terminal in this expression, recording the ones that don't exist.
    /// `referrer` is the name of the production this expression belongs to.
    pub fn resolve_references<'t>(
        &self,
        referrer: &str,
        lookup: &mut dyn FnMut(&str) -> Option<&'t Production>,
        dependencies: &mut Dependencies,
    ) {
        for name in self.non_terminals() {
            if lookup(name).is_none() {
                let referrer = Referrer::Production(referrer.to_owned());
                dependencies.missing_production(name, referrer);
            }
        }
    }

    /// The names of every production this expression refers to, in order of appearance.
    pub fn non_terminals(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Epsilon | Expr::Literal(_) | Expr::CharacterSet(_) => (),
                Expr::NonTerminal(name) => names.push(name.as_str()),
                Expr::Sequence(exprs) | Expr::Alternatives(exprs) => {
                    stack.extend(exprs.iter().rev())
                }
                Expr::Optional(expr) | Expr::Repetition { expr, .. } => stack.push(expr),
            }
        }
        names
    }

    fn needs_parens_in_sequence(&self) -> bool {
        matches!(self, Expr::Alternatives(exprs) if exprs.len() > 1)
    }
}

/// EBNF has no escapes, so text holding both quote characters is written as a concatenation:
/// single-quoted runs joined by `"'"`.
fn write_literal(f: &mut fmt::Formatter, text: &str) -> fmt::Result {
    if !text.contains('\'') {
        return write!(f, "'{}'", text);
    }
    if !text.contains('"') {
        return write!(f, "\"{}\"", text);
    }
    let mut first = true;
    for (i, run) in text.split('\'').enumerate() {
        if i > 0 {
            write!(f, "{}\"'\"", if first { "" } else { " " })?;
            first = false;
        }
        if !run.is_empty() {
            write!(f, "{}'{}'", if first { "" } else { " " }, run)?;
            first = false;
        }
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Epsilon => write!(f, "()"),
            Expr::Literal(text) => write_literal(f, text),
            Expr::CharacterSet(set) => write!(f, "[:{}:]", set),
            Expr::NonTerminal(name) => write!(f, "{}", name),
            Expr::Sequence(exprs) => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    if expr.needs_parens_in_sequence() {
                        write!(f, "({})", expr)?;
                    } else {
                        write!(f, "{}", expr)?;
                    }
                }
                Ok(())
            }
            Expr::Alternatives(exprs) => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", expr)?;
                }
                Ok(())
            }
            Expr::Optional(expr) => write!(f, "[{}]", expr),
            Expr::Repetition {
                min: 0,
                max: None,
                expr,
            } => write!(f, "{{{}}}", expr),
            Expr::Repetition { min, max, expr } => match max {
                Some(max) => write!(f, "({}){{{},{}}}", expr, min, max),
                None => write!(f, "({}){{{},}}", expr, min),
            },
        }
    }
}
