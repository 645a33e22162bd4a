use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid build configuration ({path}): {message}")]
    ConfigurationError { path: String, message: String },
    #[error("Error while compiling shader ({file_path}): {message}")]
    CompileError { file_path: String, message: String },
}

impl BuildError {
    pub fn configuration(path: &Path, message: &str) -> Self {
        Self::ConfigurationError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    pub fn compile(file_path: &Path, message: &str) -> Self {
        Self::CompileError {
            file_path: file_path.display().to_string(),
            message: message.to_string(),
        }
    }
}
