//! Scenario files: a descriptor tree, its configuration, the starting state
//! and a list of interactions to replay.

use std::fs;
use std::path::{Path, PathBuf};

use searchable_select::SelectError;
use searchable_select::config::SelectConfig;
use searchable_select::descriptor::Descriptor;
use searchable_select::select::SelectState;
use serde::Deserialize;
use thiserror::Error;

/// Demo error type.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("no scenario given and no default scenario path available")]
    NoScenario,
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// One replayed interaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Type new search text.
    Search(String),
    /// Click the option at a position in the visible list.
    Click(usize),
    /// Click the null option.
    Reset,
    /// Toggle the loading flag.
    Loading(bool),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SelectConfig,
    #[serde(default)]
    pub state: SelectState,
    pub tree: Descriptor,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, DemoError> {
        serde_json::from_str(json).map_err(|source| DemoError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let json = fs::read_to_string(path).map_err(|source| DemoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_scenario() {
        let json = r#"{
            "tree": { "role": { "other": "select" }, "children": [
                { "role": "placeholder", "children": "pick" },
                { "role": "option", "children": "one" }
            ] },
            "steps": [ { "search": "on" }, { "click": 0 }, "reset", { "loading": true } ]
        }"#;

        let scenario = Scenario::from_json(Path::new("inline.json"), json).unwrap();

        assert!(scenario.config.has_reset);
        assert_eq!(scenario.state, SelectState::default());
        assert_eq!(scenario.tree.children.len(), 2);
        assert_eq!(
            scenario.steps,
            vec![
                Step::Search("on".to_string()),
                Step::Click(0),
                Step::Reset,
                Step::Loading(true),
            ]
        );
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Scenario::from_json(Path::new("broken.json"), "{").unwrap_err();

        assert!(matches!(err, DemoError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
