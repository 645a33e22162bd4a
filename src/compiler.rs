use crate::error::BuildError;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::warn;

pub const GLSLANG_BINARY: &str = "glslangValidator";
// vulkan semantics, fixed target version
const TARGET_FLAG: &str = "-V100";

pub trait ShaderCompiler {
    // soft availability check, a missing compiler only fails the first real compile
    fn probe(&self) {}

    fn compile(&self, source_path: &Path, output_path: &Path) -> Result<(), BuildError>;
}

pub struct GlslangCompiler;

impl GlslangCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl ShaderCompiler for GlslangCompiler {
    fn probe(&self) {
        let probe = Command::new(GLSLANG_BINARY).stdout(Stdio::null()).status();
        if let Err(err) = probe {
            warn!("could not probe for {GLSLANG_BINARY}: {err}");
        }
    }

    fn compile(&self, source_path: &Path, output_path: &Path) -> Result<(), BuildError> {
        let output = Command::new(GLSLANG_BINARY)
            .arg(TARGET_FLAG)
            .arg("-o")
            .arg(output_path)
            .arg(source_path)
            .output()
            .map_err(|err| BuildError::compile(source_path, &err.to_string()))?;
        let _ = io::stdout().write_all(&output.stdout);
        let _ = io::stderr().write_all(&output.stderr);
        if !output.status.success() {
            return Err(BuildError::compile(
                source_path,
                &format!("{GLSLANG_BINARY} exited with {}", output.status),
            ));
        }
        Ok(())
    }
}
