use std::{
    env,
    fs::{read_to_string, write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use minicc::{compile_source, config::Config, display_error};
use tracing::{error, info, Level};

const USAGE: &str = "Usage: minicc [-v|--verbose] <file>";

fn parse_args(args: &[String]) -> Option<(Config, PathBuf)> {
    let mut verbose = false;
    let mut file_path = None;

    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ if file_path.is_none() && !arg.starts_with('-') => file_path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    file_path.map(|path| (Config::new(verbose), path))
}

fn output_path(file_path: &Path) -> PathBuf {
    let mut output = file_path.as_os_str().to_owned();
    output.push(".s");
    PathBuf::from(output)
}

/// Compiles one file. `Ok(false)` means the source was rejected and a
/// diagnostic has already been printed.
fn run(config: &Config, file_path: &Path) -> anyhow::Result<bool> {
    let start = Instant::now();

    let source = read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    let assembly = match compile_source(&source, &file_name, config) {
        Ok(assembly) => assembly,
        Err(err) => {
            eprint!("{}", display_error(&err, &file_path.display().to_string(), &source));
            return Ok(false);
        }
    };

    info!("Compiled in {:?}", start.elapsed());

    let output = output_path(file_path);
    write(&output, assembly).with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {}", output.display());
    Ok(true)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some((config, file_path)) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(&config, &file_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
