//! Generation options.

use std::path::{Path, PathBuf};

/// Options for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Namespace wrapping all generated declarations, if any.
    pub namespace: Option<String>,
    /// Path of the definitions artifact. The declarations artifact shares its
    /// base name with an `hpp` extension.
    pub output_file: PathBuf,
}

impl CodegenOptions {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        CodegenOptions {
            namespace: None,
            output_file: output_file.into(),
        }
    }

    /// Wrap generated code in `namespace`.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Path of the declarations artifact.
    pub fn header_file(&self) -> PathBuf {
        self.output_file.with_extension("hpp")
    }

    /// File name used in the definitions artifact's `#include`.
    pub fn header_include_name(&self) -> String {
        let header = self.header_file();
        header
            .file_name()
            .map_or_else(|| header.to_string_lossy().into_owned(), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions::new(Path::new("out.cpp"))
    }
}
