use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::config::ProblemConfig;
use crate::error::Result;
use crate::formula::{group, inline_group, predicate, Formula};
use crate::object::{Object, ObjectSet};
use crate::printer::{render, ToPddl};
use crate::proposition::parse_proposition;

/// Deduplicated set of rendered propositions, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropositionSet {
    propositions: BTreeSet<String>,
}

impl PropositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the proposition was already present.
    pub fn insert(&mut self, proposition: String) -> bool {
        if self.propositions.contains(&proposition) {
            debug!("Proposition '{}' already in initial state", proposition);
            return false;
        }
        self.propositions.insert(proposition)
    }

    pub fn contains(&self, proposition: &str) -> bool {
        self.propositions.contains(proposition)
    }

    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.propositions.iter().map(String::as_str)
    }
}

/// A PDDL problem definition under construction.
///
/// Objects and initial propositions accumulate monotonically; the goal is
/// replaced wholesale. [`Problem::definition`] assembles the complete
/// `(define (problem ...) ...)` formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    name: String,
    domain: String,
    objects: ObjectSet,
    initial_state: PropositionSet,
    goal: Formula,
}

impl Problem {
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            objects: ObjectSet::new(),
            initial_state: PropositionSet::new(),
            goal: Formula::default(),
        }
    }

    pub fn from_config(config: ProblemConfig) -> Result<Self> {
        config.into_problem()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_name(&self) -> &str {
        &self.domain
    }

    pub fn object_set(&self) -> &ObjectSet {
        &self.objects
    }

    pub fn propositions(&self) -> &PropositionSet {
        &self.initial_state
    }

    pub fn goal_formula(&self) -> &Formula {
        &self.goal
    }

    /// Returns `false` if an object with the same name and type exists.
    pub fn add_object(&mut self, name: &str, object_type: &str) -> bool {
        self.objects.insert(Object::new(name, object_type))
    }

    /// Adds a proposition to the initial state.
    ///
    /// Text already in PDDL form (starting with `(`) is stored verbatim;
    /// anything else is read as `head(arg, ...)` and converted.
    pub fn add_initial_proposition(&mut self, proposition: &str) -> Result<bool> {
        let canonical = if proposition.starts_with('(') {
            proposition.to_string()
        } else {
            let (head, args) = parse_proposition(proposition)?;
            let converted = predicate(&head, args.as_slice());
            trace!("Converted '{}' to '{}'", proposition, converted);
            converted
        };
        Ok(self.initial_state.insert(canonical))
    }

    /// Adds every proposition; stops at the first malformed one.
    pub fn set_initial_state<I, S>(&mut self, propositions: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for proposition in propositions {
            self.add_initial_proposition(proposition.as_ref())?;
        }
        Ok(())
    }

    pub fn set_goal(&mut self, goal: impl Into<Formula>) {
        self.goal = goal.into();
        trace!("Goal of problem '{}' replaced", self.name);
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn with_object(mut self, name: &str, object_type: &str) -> Self {
        self.add_object(name, object_type);
        self
    }

    pub fn with_initial_proposition(mut self, proposition: &str) -> Result<Self> {
        self.add_initial_proposition(proposition)?;
        Ok(self)
    }

    pub fn with_goal(mut self, goal: impl Into<Formula>) -> Self {
        self.set_goal(goal);
        self
    }

    pub fn problem_header(&self) -> String {
        inline_group("problem", &self.name)
    }

    pub fn domain_header(&self) -> String {
        inline_group(":domain", &self.domain)
    }

    pub fn objects(&self) -> Formula {
        self.objects.to_formula()
    }

    pub fn initial_state(&self) -> Formula {
        group(":init", self.initial_state.iter())
    }

    /// A literal goal stays on the `(:goal ...)` line; a compound goal is a block.
    pub fn goal(&self) -> Formula {
        match &self.goal {
            Formula::Atom(goal) => {
                Formula::Group(vec![Formula::Atom(inline_group(":goal", goal))])
            }
            compound => group(":goal", [compound.clone()]),
        }
    }

    pub fn definition(&self) -> Formula {
        group(
            &format!("define {}", self.problem_header()),
            [
                Formula::Atom(self.domain_header()),
                self.objects(),
                self.initial_state(),
                self.goal(),
            ],
        )
    }
}

impl ToPddl for Problem {
    fn to_pddl(&self) -> String {
        render(&self.definition(), 0)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pddl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PddlError;
    use crate::formula::and;

    #[test]
    fn test_add_object_dedup() {
        let mut problem = Problem::new("p", "d");
        assert!(problem.add_object("box", "block"));
        assert!(!problem.add_object("box", "block"));
        assert!(problem.add_object("box", "crate"));
        assert_eq!(problem.object_set().len(), 2);
    }

    #[test]
    fn test_pddl_proposition_stored_verbatim() {
        let mut problem = Problem::new("p", "d");
        assert!(problem.add_initial_proposition("(on  box table)").unwrap());
        assert!(problem.propositions().contains("(on  box table)"));
    }

    #[test]
    fn test_conventional_proposition_converted() {
        let mut problem = Problem::new("p", "d");
        assert!(problem.add_initial_proposition("on(box, table)").unwrap());
        assert!(!problem.add_initial_proposition("(on box table)").unwrap());
        assert_eq!(problem.propositions().len(), 1);
        assert!(problem.propositions().contains("(on box table)"));
    }

    #[test]
    fn test_malformed_proposition_propagates() {
        let mut problem = Problem::new("p", "d");
        let err = problem.add_initial_proposition("garbage").unwrap_err();
        assert!(matches!(err, PddlError::MalformedProposition(_)));
        assert!(problem.propositions().is_empty());
    }

    #[test]
    fn test_set_initial_state_absorbs_duplicates() {
        let mut problem = Problem::new("p", "d");
        problem
            .set_initial_state(["clear(a)", "(clear a)", "on(a,b)"])
            .unwrap();
        let props: Vec<&str> = problem.propositions().iter().collect();
        assert_eq!(props, vec!["(clear a)", "(on a b)"]);
    }

    #[test]
    fn test_headers() {
        let problem = Problem::new("prob1", "dom1");
        assert_eq!(problem.problem_header(), "(problem prob1)");
        assert_eq!(problem.domain_header(), "(:domain dom1)");
    }

    #[test]
    fn test_default_goal_is_inline() {
        let problem = Problem::new("p", "d");
        assert_eq!(
            problem.goal(),
            Formula::Group(vec![Formula::atom("(:goal (and))")])
        );
    }

    #[test]
    fn test_compound_goal_is_block() {
        let problem = Problem::new("p", "d").with_goal(and(["(on a b)"]));
        assert_eq!(
            render(&problem.goal(), 0),
            "(:goal\n\t(and\n\t\t(on a b)\n\t)\n)\n"
        );
    }

    #[test]
    fn test_fluent_construction() {
        let problem = Problem::new("p", "")
            .with_domain("blocks")
            .with_object("a", "block")
            .with_initial_proposition("clear(a)")
            .unwrap();
        assert_eq!(problem.domain_name(), "blocks");
        assert_eq!(problem.object_set().len(), 1);
        assert!(problem.propositions().contains("(clear a)"));
    }
}
