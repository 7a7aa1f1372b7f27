use serde::{Deserialize, Serialize};

use crate::{
    branching::variables::VariableIndex,
    error::{BranchError, Result},
};

/// Every branch choice is a two-way split: `<= split_point` or
/// `> split_point`.
pub const ALTERNATIVES: u32 = 2;

/// An immutable record of one branching decision.
///
/// A `BranchChoice` identifies the variable that was chosen, the value the
/// domain will be split at, and the number of alternatives. Choices are
/// archivable so that a search engine can checkpoint a path through the
/// search tree and replay it later, possibly on another worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchChoice {
    /// The position of the chosen variable in its [`VariableSet`].
    ///
    /// [`VariableSet`]: crate::branching::variables::VariableSet
    pub variable: VariableIndex,
    /// Alternative 0 narrows the variable to `<= split_point`, alternative 1
    /// to `> split_point`.
    pub split_point: i64,
    /// Always [`ALTERNATIVES`]; carried so an archived choice is
    /// self-describing.
    pub alternatives: u32,
}

impl BranchChoice {
    pub fn new(variable: VariableIndex, split_point: i64) -> Self {
        Self {
            variable,
            split_point,
            alternatives: ALTERNATIVES,
        }
    }

    /// Serializes the choice for checkpointing.
    pub fn archive(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(BranchError::from)?)
    }

    /// Reconstructs a choice from an archive produced by [`archive`].
    ///
    /// [`archive`]: BranchChoice::archive
    pub fn from_archive(archive: &str) -> Result<Self> {
        Ok(serde_json::from_str(archive).map_err(BranchError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn archived_choice_replays_identically() {
        let choice = BranchChoice::new(3, -7);
        let restored = BranchChoice::from_archive(&choice.archive().unwrap()).unwrap();
        assert_eq!(restored, choice);
        assert_eq!(restored.alternatives, ALTERNATIVES);
    }

    #[test]
    fn malformed_archive_is_rejected() {
        assert!(BranchChoice::from_archive("not a choice").is_err());
    }
}
