mod histogram;

use std::fmt::Display;

pub use histogram::*;

use crate::parser::cnf::Header;

/// The validated result of a whole CNF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub header: Header,
    pub histogram: SpaceHistogram,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.header.vars, self.header.clauses)?;
        if !self.histogram.is_empty() {
            write!(f, " {}", self.histogram)?;
        }
        Ok(())
    }
}
