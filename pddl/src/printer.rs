//! Tab-indented rendering of formulas.

use std::fmt;

use crate::formula::Formula;

/// Renders `formula` one token per line.
///
/// A token reached at depth `indent` gets `indent - 1` leading tabs; a group
/// renders each child one level deeper.
pub fn render(formula: &Formula, indent: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, formula, indent);
    out
}

fn render_into(out: &mut String, formula: &Formula, indent: usize) {
    match formula {
        Formula::Atom(token) => {
            for _ in 0..indent.saturating_sub(1) {
                out.push('\t');
            }
            out.push_str(token);
            out.push('\n');
        }
        Formula::Group(items) => {
            for item in items {
                render_into(out, item, indent + 1);
            }
        }
    }
}

/// Types that can be written out as PDDL text
pub trait ToPddl {
    fn to_pddl(&self) -> String;
}

impl ToPddl for Formula {
    fn to_pddl(&self) -> String {
        render(self, 0)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, 0))
    }
}
