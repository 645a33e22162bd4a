use anyhow::{Context, Result};
use crate::compiler::ShaderCompiler;
use crate::config::BuildConfig;
use crate::error::BuildError;
use glob::glob;
use if_chain::if_chain;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct ShaderBuildRunner<C> {
    config: BuildConfig,
    compiler: C,
}

impl<C: ShaderCompiler> ShaderBuildRunner<C> {
    pub fn new(config: BuildConfig, compiler: C) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self { config, compiler })
    }

    pub fn run(&self) -> Result<()> {
        self.compiler.probe();
        let sources = self.enumerate_sources()?;
        info!(
            "found {} shader sources under {}",
            sources.len(),
            self.config.source_root.display()
        );
        let mut compiled = 0usize;
        for source_path in &sources {
            if self.compile_shader(source_path)? {
                compiled += 1;
            }
        }
        info!(
            "compiled {} shaders, {} already up to date",
            compiled,
            sources.len() - compiled
        );
        Ok(())
    }

    fn enumerate_sources(&self) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();
        for pattern in &self.config.source_patterns {
            let pattern = self.config.source_root.join(pattern);
            let matches = glob(&pattern.to_string_lossy())
                .with_context(|| format!("invalid source pattern {}", pattern.display()))?;
            sources.extend(matches.filter_map(|entry| entry.ok()));
        }
        // overlapping patterns must not process a file twice
        Ok(sources.into_iter().unique().collect())
    }

    fn compile_shader(&self, source_path: &Path) -> Result<bool> {
        let output_path = self.config.output_path_for(source_path)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {}", parent.display()))?;
        }
        let source_mtime = fs::metadata(source_path)
            .with_context(|| format!("failed to stat {}", source_path.display()))?
            .modified()?;
        // the output carrying the source timestamp means it was built from this exact version
        if_chain! {
            if let Ok(output_meta) = fs::metadata(&output_path);
            if let Ok(output_mtime) = output_meta.modified();
            if output_mtime == source_mtime;
            then {
                debug!("{} is up to date", output_path.display());
                return Ok(false);
            }
        }
        info!("compiling {}", source_path.display());
        self.compiler.compile(source_path, &output_path)?;
        // restamp the output so the next run sees matching timestamps
        let output_file = fs::File::options()
            .write(true)
            .open(&output_path)
            .with_context(|| format!("failed to reopen {}", output_path.display()))?;
        output_file.set_modified(source_mtime)?;
        Ok(true)
    }
}
