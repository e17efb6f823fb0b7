//! mdview CLI - convert Markdown to HTML
//!
//! Usage: `mdview [--document] [--safe] [FILE | -]`

use std::io::{self, Read, Write};
use std::process::ExitCode;

use mdview::{Document, Options};

const USAGE: &str = "usage: mdview [--document] [--safe] [FILE | -]

Reads Markdown from FILE (or stdin) and writes HTML to stdout.

  --document   wrap the output in a complete HTML page
  --safe       escape raw HTML and keep code content literal
  -h, --help   show this message";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("unexpected argument `{0}`: only one input file is accepted")]
    ExtraArgument(String),
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    fn is_usage(&self) -> bool {
        matches!(self, CliError::UnknownFlag(_) | CliError::ExtraArgument(_))
    }

    fn exit_code(&self) -> ExitCode {
        if self.is_usage() {
            ExitCode::from(2)
        } else {
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// Input path; `None` reads stdin.
    input: Option<String>,
    document: bool,
    safe: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--document" => parsed.document = true,
            "--safe" => parsed.safe = true,
            "-h" | "--help" => parsed.help = true,
            "-" if parsed.input.is_none() => {}
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::UnknownFlag(arg));
            }
            _ if parsed.input.is_some() || arg == "-" => {
                return Err(CliError::ExtraArgument(arg));
            }
            _ => parsed.input = Some(arg),
        }
    }
    Ok(parsed)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let input = read_input(args.input.as_deref())?;
    log::debug!(
        "read {} bytes from {}",
        input.len(),
        args.input.as_deref().unwrap_or("stdin")
    );

    let options = if args.safe { Options::hardened() } else { Options::default() };
    let mut html = mdview::to_html_with_options(&input, &options);
    if args.document {
        html = Document::default().wrap(&html);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    if !html.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mdview: {err}");
            if err.is_usage() {
                eprintln!("{USAGE}");
            }
            err.exit_code()
        }
    }
}
