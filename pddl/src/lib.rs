// PDDL problem builder
// Assembles PDDL problem definitions in memory and renders them as indented s-expression text

pub mod config;
pub mod error;
pub mod formula;
pub mod object;
pub mod printer;
pub mod problem;
pub mod proposition;

pub use config::{ObjectConfig, ProblemConfig};
pub use error::{PddlError, Result};
pub use formula::{
    and, exists, for_all, group, inline_group, not, or, predicate, when, Formula,
};
pub use object::{Object, ObjectSet};
pub use printer::{render, ToPddl};
pub use problem::{Problem, PropositionSet};
pub use proposition::{parse_args, parse_head, parse_proposition, Proposition};
