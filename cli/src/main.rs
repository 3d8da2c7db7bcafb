use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use opset::{CppHeaderEmitter, Emitter, RustModuleEmitter};
use tracing_subscriber::EnvFilter;

/// Opset - compile a VM instruction-set specification into toolchain artifacts
#[derive(Parser, Debug)]
#[command(name = "opset")]
#[command(about = "Compile an instruction-set specification", long_about = None)]
struct Args {
    /// Path to the JSON specification document
    input: PathBuf,

    /// Path the rendered artifact is written to
    output: PathBuf,

    /// Target consumer to render for
    #[arg(long, value_enum, default_value = "cpp")]
    target: Target,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
    /// C++ header (`BYTECODE` enum + lookup maps)
    Cpp,
    /// Standalone Rust module
    Rust,
}

impl Target {
    fn emitter(self) -> &'static dyn Emitter {
        match self {
            Target::Cpp => &CppHeaderEmitter,
            Target::Rust => &RustModuleEmitter,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let compilation = opset::compile_path(&args.input).into_diagnostic()?;
    let content = compilation.render(args.target.emitter());
    opset::write_artifact(&args.output, &content).into_diagnostic()?;

    tracing::info!(
        instructions = compilation.descriptor.len(),
        output = %args.output.display(),
        "artifact written"
    );
    Ok(())
}
