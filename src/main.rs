use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use miette::Result;

use braid::{tty, Image, RunState};

/// Braid is a fast & convenient virtual machine for LC3 binaries.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Quickly provide a `.obj` file to run
    path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a binary `.obj` file and connect it to the terminal
    Run {
        /// `.obj` file to run
        name: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let path = match args.command {
        Some(Command::Run { name }) => name,
        None => match args.path {
            Some(path) => path,
            None => {
                println!("\n~ braid v{VERSION} - Copyright (c) 2024 The braid developers ~");
                println!("{SHORT_INFO}");
                return Ok(());
            }
        },
    };

    run_image(&path)?;
    println!(
        "{:>12} target {}",
        "Completed".green().bold(),
        path.display()
    );
    Ok(())
}

fn run_image(path: &Path) -> Result<()> {
    println!("{:>12} target {}", "Loading".green().bold(), path.display());
    let image = Image::read_from(path)?;
    println!(
        "{:>12} image at 0x{:04x}",
        "Running".green().bold(),
        image.orig()
    );
    // The console owns the terminal (raw mode included) until the machine is
    // dropped at the end of this scope
    let mut program = RunState::from_image(&image, tty::open());
    program.run()
}

const SHORT_INFO: &str = r"
Welcome to braid, a virtual machine for binaries built against the LC3 ISA.
Please use `-h` or `--help` to access the usage instructions and documentation.
";

const VERSION: &str = env!("CARGO_PKG_VERSION");
