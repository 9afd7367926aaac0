//! Formula representation and PDDL combinators.
//!
//! A [`Formula`] is either a single text token or an ordered group of formulas.
//! Combinators keep the opening token, the body and the closing `)` as separate
//! elements of a group so the printer can indent the body one level deeper
//! than its delimiters.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::object::Object;

/// A PDDL expression: a text token or a parenthesized group of sub-formulas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Formula {
    Atom(String),
    Group(Vec<Formula>),
}

impl Formula {
    pub fn atom(token: impl Into<String>) -> Self {
        Formula::Atom(token.into())
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Formula::Atom(token) => Some(token),
            Formula::Group(_) => None,
        }
    }

    /// Elements this formula contributes when placed in the body of a group:
    /// a group contributes its children, an atom contributes itself.
    pub fn into_items(self) -> Vec<Formula> {
        match self {
            Formula::Group(items) => items,
            atom @ Formula::Atom(_) => vec![atom],
        }
    }
}

impl Default for Formula {
    /// The empty conjunction `(and)`.
    fn default() -> Self {
        Formula::Atom("(and)".to_string())
    }
}

impl From<&str> for Formula {
    fn from(token: &str) -> Self {
        Formula::Atom(token.to_string())
    }
}

impl From<String> for Formula {
    fn from(token: String) -> Self {
        Formula::Atom(token)
    }
}

impl From<Vec<Formula>> for Formula {
    fn from(items: Vec<Formula>) -> Self {
        Formula::Group(items)
    }
}

/// `(name token)` on a single line.
pub fn inline_group(name: &str, token: &str) -> String {
    format!("({} {})", name, token)
}

/// `["(name", items, ")"]`. The closing paren is never part of the head token.
///
/// Compound items are spliced into the body so that a nested block starts at
/// the same depth as its sibling literals.
pub fn group<I, F>(name: &str, items: I) -> Formula
where
    I: IntoIterator<Item = F>,
    F: Into<Formula>,
{
    let body = items
        .into_iter()
        .flat_map(|item| item.into().into_items())
        .collect();
    Formula::Group(vec![
        Formula::Atom(format!("({}", name)),
        Formula::Group(body),
        Formula::Atom(")".to_string()),
    ])
}

/// `(name arg1 arg2 ...)`; a predicate without arguments renders as `(name)`.
pub fn predicate<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    if args.is_empty() {
        return format!("({})", name);
    }
    inline_group(name, &args.iter().map(AsRef::as_ref).join(" "))
}

pub fn and<I, F>(formulas: I) -> Formula
where
    I: IntoIterator<Item = F>,
    F: Into<Formula>,
{
    group("and", formulas)
}

pub fn or<I, F>(formulas: I) -> Formula
where
    I: IntoIterator<Item = F>,
    F: Into<Formula>,
{
    group("or", formulas)
}

/// Negation of a literal stays inline; negation of a compound formula becomes a block.
pub fn not(formula: impl Into<Formula>) -> Formula {
    match formula.into() {
        Formula::Atom(token) => Formula::Atom(inline_group("not", &token)),
        compound => group("not", [compound]),
    }
}

pub fn for_all(var: &str, var_type: &str, body: impl Into<Formula>) -> Formula {
    quantifier("forall", var, var_type, body.into())
}

pub fn exists(var: &str, var_type: &str, body: impl Into<Formula>) -> Formula {
    quantifier("exists", var, var_type, body.into())
}

fn quantifier(head: &str, var: &str, var_type: &str, body: Formula) -> Formula {
    let bound = Object::new(&format!("?{}", var), var_type);
    group(&format!("{} {}", head, bound), [body])
}

/// Conditional effect: exactly one condition and one consequence.
pub fn when(condition: impl Into<Formula>, implies: impl Into<Formula>) -> Formula {
    group("when", [condition.into(), implies.into()])
}
