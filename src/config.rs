use crate::error::BuildError;
use std::env;
use std::path::{Path, PathBuf};

pub const SOURCE_PATTERNS: &[&str] = &["**/*.glsl"];
// compiled artifacts land in the resource tree next to the source tree
pub const OUTPUT_ROOT_OFFSET: &str = "../res/shaders";
pub const COMPILED_EXTENSION: &str = "spv";

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub source_patterns: Vec<String>,
}

impl BuildConfig {
    pub fn new<P, Q>(source_root: P, output_root: Q) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self {
            source_root: source_root.as_ref().to_path_buf(),
            output_root: output_root.as_ref().to_path_buf(),
            source_patterns: SOURCE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn from_current_dir() -> Result<Self, BuildError> {
        let source_root = env::current_dir().map_err(|err| {
            BuildError::configuration(Path::new("."), &format!("cannot resolve working directory: {err}"))
        })?;
        let output_root = source_root.join(OUTPUT_ROOT_OFFSET);
        Ok(Self::new(source_root, output_root))
    }

    pub fn set_source_patterns(mut self, patterns: &[&str]) -> Self {
        self.source_patterns = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.source_root.is_dir() {
            return Err(BuildError::configuration(
                &self.source_root,
                "source root does not exist or is not a directory",
            ));
        }
        Ok(())
    }

    // a/b/c.glsl under the source root maps to <output_root>/a/b/c.glsl.spv
    pub fn output_path_for(&self, source_path: &Path) -> Result<PathBuf, BuildError> {
        let rel_path = source_path.strip_prefix(&self.source_root).map_err(|_| {
            BuildError::configuration(source_path, "source file is outside the source root")
        })?;
        let mut out_path = self.output_root.join(rel_path).into_os_string();
        out_path.push(".");
        out_path.push(COMPILED_EXTENSION);
        Ok(PathBuf::from(out_path))
    }
}
