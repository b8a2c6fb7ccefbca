use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use doit_abi::{
    build_manifest, check_requires, load_requires, render_header, resolve_surface, SurfaceFilter,
};

#[derive(Parser)]
#[command(name = "doit-abi")]
#[command(about = "Publishes the doit runtime ABI for code generators.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the exported primitives as JSON.
    Manifest(OutputArgs),
    /// Print a C header declaring the exported primitives.
    Header(OutputArgs),
    /// Check that a generated program's required symbols are all exported.
    Check {
        #[arg(long)]
        requires: PathBuf,
    },
    /// Print the C symbol for each source name.
    Mangle {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Defaults to $DOIT_ABI_SURFACE, then `all`.
    #[arg(long, value_enum)]
    surface: Option<SurfaceFilter>,

    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("doit-abi: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Manifest(args) => {
            let surface = resolve_surface(args.surface)?;
            let mut bytes = serde_json::to_vec_pretty(&build_manifest(surface))?;
            bytes.push(b'\n');
            write_output(args.out.as_deref(), &bytes)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Header(args) => {
            let surface = resolve_surface(args.surface)?;
            let header = render_header(&build_manifest(surface));
            write_output(args.out.as_deref(), header.as_bytes())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { requires } => {
            let req = load_requires(&requires)?;
            let report = check_requires(&req)?;
            println!("{}", serde_json::to_string(&report)?);
            if report.ok {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!(
                    "doit-abi: {} required symbol(s) not exported by the runtime: {}",
                    report.missing.len(),
                    report.missing.join(", ")
                );
                Ok(ExitCode::from(1))
            }
        }
        Command::Mangle { names } => {
            let mut stdout = std::io::stdout().lock();
            for name in &names {
                writeln!(stdout, "{}", doit_rt::mangle::mangle(name))?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn write_output(out: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir: {}", parent.display()))?;
            }
            std::fs::write(path, bytes).with_context(|| format!("write: {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}
