//! Conventional-notation propositions such as `on(box, table)`.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PddlError, Result};
use crate::formula::predicate;
use crate::printer::ToPddl;

lazy_static! {
    // head, then everything between the first '(' and the next ')'
    static ref PROPOSITION: Regex =
        Regex::new(r"^([^(]*)\(([^)]*)\)").expect("proposition pattern is valid");
}

/// Parses `head(arg1, arg2)` into `("head", ["arg1", "arg2"])`.
///
/// Whitespace inside the argument list is dropped before splitting on `,`.
/// An empty argument list (`head()`) yields no arguments. Anything after the
/// closing `)` is ignored.
pub fn parse_proposition(text: &str) -> Result<(String, Vec<String>)> {
    let captures = PROPOSITION
        .captures(text)
        .ok_or_else(|| PddlError::MalformedProposition(text.to_string()))?;

    let head = captures[1].trim();
    if head.is_empty() {
        return Err(PddlError::MalformedProposition(text.to_string()));
    }

    let args: String = captures[2].chars().filter(|c| !c.is_whitespace()).collect();
    let args = if args.is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::to_string).collect()
    };

    Ok((head.to_string(), args))
}

pub fn parse_head(text: &str) -> Result<String> {
    parse_proposition(text).map(|(head, _)| head)
}

pub fn parse_args(text: &str) -> Result<Vec<String>> {
    parse_proposition(text).map(|(_, args)| args)
}

/// A ground proposition: a predicate name applied to object names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Proposition {
    name: String,
    arguments: Vec<String>,
}

impl Proposition {
    pub fn new(name: &str, arguments: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl ToPddl for Proposition {
    /// PDDL form, e.g. `(on box table)`
    fn to_pddl(&self) -> String {
        predicate(&self.name, self.arguments.as_slice())
    }
}

impl FromStr for Proposition {
    type Err = PddlError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arguments) = parse_proposition(s)?;
        Ok(Self { name, arguments })
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arguments.iter().join(", "))
    }
}
