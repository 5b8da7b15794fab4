/// Data dependency models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of data dependency a transform was recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    /// Value written in one iteration is read in another
    LoopCarried,
    /// Dependency confined to a single iteration
    LoopIndependent,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::LoopCarried => "loop_carried",
            DependencyType::LoopIndependent => "loop_independent",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data dependency on one array between a write and a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// Array name
    pub variable: String,
    /// Index expressions of the reads involved
    pub read_indices: Vec<String>,
    /// Index expressions of the writes involved
    pub write_indices: Vec<String>,
    /// Whether the dependency crosses iterations
    pub loop_carried: bool,
    /// Symbolic iteration class at which write and read meet (advisory)
    pub distance: Option<i64>,
    /// Human-readable conflict
    pub conflict_description: Option<String>,
}

impl DependencyInfo {
    /// Create a dependency with no indices and no conflict
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            read_indices: Vec::new(),
            write_indices: Vec::new(),
            loop_carried: false,
            distance: None,
            conflict_description: None,
        }
    }

    /// Loop-carried conflict between one write index and one read index
    pub fn loop_carried_conflict(
        variable: impl Into<String>,
        write_index: impl Into<String>,
        read_index: impl Into<String>,
        distance: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            read_indices: vec![read_index.into()],
            write_indices: vec![write_index.into()],
            loop_carried: true,
            distance: Some(distance),
            conflict_description: Some(description.into()),
        }
    }

    /// Whether this dependency prevents vectorization
    pub fn has_conflict(&self) -> bool {
        self.loop_carried && self.conflict_description.is_some()
    }

    /// Whether the write and read meet inside the iteration space rather
    /// than in adjacent iterations
    ///
    /// True when the description calls it an overlap, or when the distance
    /// class is beyond adjacent iterations (complementary index patterns).
    pub fn is_index_overlap(&self) -> bool {
        let described = self
            .conflict_description
            .as_deref()
            .map_or(false, |d| d.to_lowercase().contains("overlap"));

        described || self.distance.map_or(false, |d| d > 1)
    }

    pub fn first_read_index(&self) -> Option<&str> {
        self.read_indices.first().map(String::as_str)
    }

    pub fn first_write_index(&self) -> Option<&str> {
        self.write_indices.first().map(String::as_str)
    }
}
