use super::production::Production;
use std::fmt;

/// Something that walks the productions of a grammar. Errors it raises are passed back to the
/// caller of `Grammar::accept` untouched.
pub trait GrammarVisitor {
    type Error;

    fn visit_production(&mut self, production: &Production) -> Result<(), Self::Error>;
}

/// Writes each visited production as an EBNF-style rule:
///
/// ```text
/// (* description *)
/// name ::= body ;
/// ```
pub struct EbnfWriter<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> EbnfWriter<W> {
    pub fn new(out: W) -> EbnfWriter<W> {
        EbnfWriter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> GrammarVisitor for EbnfWriter<W> {
    type Error = fmt::Error;

    fn visit_production(&mut self, production: &Production) -> Result<(), fmt::Error> {
        if let Some(description) = &production.description {
            writeln!(self.out, "(* {} *)", description)?;
        }
        writeln!(self.out, "{} ::= {} ;", production.name, production.body)
    }
}
