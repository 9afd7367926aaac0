//! Declarative problem descriptions.
//!
//! A problem can be written as TOML and loaded into a [`Problem`]:
//!
//! ```toml
//! name = "prob1"
//! domain = "dom1"
//! init = ["on(box, table)", "(clear box)"]
//! goal = "(on box table)"
//!
//! [[objects]]
//! name = "box"
//! type = "block"
//! ```
//!
//! `goal` is either a single string or a nested array in the same shape the
//! formula combinators produce.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PddlError, Result};
use crate::formula::Formula;
use crate::problem::Problem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub init: Vec<String>,
    #[serde(default)]
    pub goal: Option<Formula>,
}

impl ProblemConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PddlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn into_problem(self) -> Result<Problem> {
        let mut problem = Problem::new(&self.name, &self.domain);
        for object in &self.objects {
            problem.add_object(&object.name, &object.object_type);
        }
        problem.set_initial_state(&self.init)?;
        if let Some(goal) = self.goal {
            problem.set_goal(goal);
        }
        debug!(
            "Loaded problem '{}' with {} objects and {} initial propositions",
            problem.name(),
            problem.object_set().len(),
            problem.propositions().len()
        );
        Ok(problem)
    }
}
