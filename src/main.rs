use crate::compiler::GlslangCompiler;
use crate::config::BuildConfig;
use crate::runner::ShaderBuildRunner;
use anyhow::Result;

mod compiler;
mod config;
mod error;
mod runner;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = BuildConfig::from_current_dir()?;
    let runner = ShaderBuildRunner::new(config, GlslangCompiler::new())?;
    runner.run()
}
