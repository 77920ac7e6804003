//! `kutta`: integrate an equation described by a TOML run file.
//!
//! ```text
//! kutta <run.toml> [--output PATH] [--verbose]
//! ```
//!
//! The CSV trace goes to `--output`, else to the run file's `output`, else to
//! stdout. The run report is printed once the solver finishes.

mod equations;
mod error;
mod run;
mod run_file;

use std::{
    error::Error,
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use error::RunError;
use run_file::RunFile;

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct Args {
    run: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, RunError> {
        let mut run = None;
        let mut output = None;
        let mut verbose = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--output" | "-o" => output = Some(args.next().ok_or(RunError::Usage)?.into()),
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Err(RunError::Usage),
                flag if flag.starts_with('-') => {
                    return Err(RunError::UnexpectedArgument(flag.to_owned()));
                }
                path if run.is_none() => run = Some(PathBuf::from(path)),
                other => return Err(RunError::UnexpectedArgument(other.to_owned())),
            }
        }

        Ok(Self {
            run: run.ok_or(RunError::Usage)?,
            output,
            verbose,
        })
    }
}

fn load(path: &Path) -> Result<RunFile, RunError> {
    let text = fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_owned(),
        source,
    })?;
    text.parse()
}

fn create(path: &Path) -> Result<BufWriter<File>, RunError> {
    let create_error = |source| RunError::Create {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(create_error)?;
    }
    File::create(path).map(BufWriter::new).map_err(create_error)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse(std::env::args().skip(1))?;
    let run = load(&args.run)?;

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        run.log_level()?
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match args.output.or_else(|| run.output.clone()) {
        Some(path) => {
            let report = run::execute(&run, create(&path)?)?;
            log::info!("trace written to {}", path.display());
            print!("{report}");
        }
        None => {
            let report = run::execute(&run, io::stdout().lock())?;
            eprint!("{report}");
        }
    }

    Ok(())
}
