//! Generator locations.

use std::path::{Path, PathBuf};

/// Input document, relative to the workspace root.
pub const DEFAULT_INPUT: &str = "schema/automation.json";

/// Generated file, relative to the workspace root.
pub const DEFAULT_OUTPUT: &str = "generated/types.rs";

/// Input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    input: PathBuf,
    output: PathBuf,
}

impl GeneratorConfig {
    /// Creates a configuration with explicit paths.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Returns the workspace root the default paths are resolved against.
    #[must_use]
    pub fn workspace_root() -> PathBuf {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .parent()
            .unwrap_or(manifest_dir)
            .to_path_buf()
    }

    /// Sets the input document path.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Returns the input document path.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the output file path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let root = Self::workspace_root();
        Self::new(root.join(DEFAULT_INPUT), root.join(DEFAULT_OUTPUT))
    }
}
