//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_gb::structures::literal::{CLiteral, Literal};
//! # use otter_gb::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false),
//!                   CLiteral::new(15, true),
//!                   CLiteral::new(4,  false)];
//!
//! assert_eq!(clause.size(), 5);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 -4 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Reason clauses given to an [analyzer](crate::analyzer) are only ever read.

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether some atom occurs with both polarities in the clause.
    fn is_tautology(&self) -> bool;

    /// The (deduplicated) literals of the clause, in literal order.
    fn literal_set(&self) -> BTreeSet<CLiteral>;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str())
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();

        for literal in self {
            let the_represetnation = match literal.polarity() {
                true => format!("{} ", literal.atom()),
                false => format!("-{} ", literal.atom()),
            };
            the_string.push_str(the_represetnation.as_str())
        }

        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }

        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn is_tautology(&self) -> bool {
        let set = self.literal_set();
        set.iter().any(|literal| set.contains(&literal.negate()))
    }

    fn literal_set(&self) -> BTreeSet<CLiteral> {
        self.iter().copied().collect()
    }
}
