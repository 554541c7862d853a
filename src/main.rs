//! Purpose: `python_test_json` CLI entry point used as a webhook test hook.
//! Role: Binary crate root; parses `--body`, renders the greeting, prints it on stdout.
//! Invariants: Success writes exactly one line to stdout and exits 0.
//! Invariants: Failures write nothing to stdout; errors go to stderr (JSON when not a tty).
//! Invariants: Diagnostics never echo the raw `--body` payload.
//! Invariants: Process exit code is derived from `to_exit_code`.
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

use clap::{Parser, ValueEnum, error::ErrorKind as ClapErrorKind};
use python_test_json::{Error, ErrorKind, body, greeting, to_exit_code};
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const BIN_NAME: &str = "python_test_json";

fn main() {
    init_tracing();
    let exit_code = match run(std::env::args_os()) {
        Ok(()) => 0,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run<I>(args: I) -> Result<(), (Error, ColorMode)>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            return err.print().map_err(|io_err| {
                (
                    Error::new(ErrorKind::Io, "failed to write help").with_source(io_err),
                    ColorMode::Auto,
                )
            });
        }
        Err(err) => return Err((clap_error_to_error(&err), ColorMode::Auto)),
    };

    let color_mode = cli.color;
    debug!(kind = greeting::value_kind(&cli.body), "decoded --body");

    let line = greeting::render(&cli.body).map_err(|err| (err, color_mode))?;
    debug!(len = line.len(), "rendered greeting");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")
        .and_then(|_| stdout.flush())
        .map_err(|io_err| {
            (
                Error::new(ErrorKind::Io, "failed to write greeting to stdout").with_source(io_err),
                color_mode,
            )
        })
}

#[derive(Parser, Debug)]
#[command(
    name = "python_test_json",
    version,
    about = "Webhook test hook: prints the `message` field of a JSON body followed by \" World !\"",
    long_about = None,
    after_help = r#"EXAMPLES
  $ python_test_json --body '{"message": "Hello"}'
  Hello World !"#
)]
struct Cli {
    #[arg(
        long,
        help = "Body of type JSON.",
        allow_hyphen_values = true,
        value_parser = body::parse_body
    )]
    body: Value,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Body decode failures come back as our own error; everything else is a usage error.
fn clap_error_to_error(err: &clap::Error) -> Error {
    if let Some(body_err) = err
        .source()
        .and_then(|source| source.downcast_ref::<Error>())
    {
        return body_err.detached();
    }
    Error::new(ErrorKind::Usage, clap_error_summary(err)).with_hint(clap_error_hint(err))
}

/// First paragraph of clap's rendering, joined onto one line.
fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let parts: Vec<&str> = rendered
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect();
    if parts.is_empty() {
        return "invalid arguments".to_string();
    }
    let joined = parts.join(" ");
    match joined.strip_prefix("error:") {
        Some(rest) => rest.trim().to_string(),
        None => joined,
    }
}

fn clap_error_hint(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("Usage: "))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Try `{BIN_NAME} --help`."))
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorReport<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    kind: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    causes: Vec<String>,
}

const RED: &str = "31";
const YELLOW: &str = "33";

fn paint(label: &str, ansi: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{ansi}m{label}\u{1b}[0m")
    } else {
        label.to_string()
    }
}

impl<'a> ErrorReport<'a> {
    fn from_error(err: &'a Error) -> Self {
        let causes = std::iter::successors(err.source(), |&source| source.source())
            .map(ToString::to_string)
            .collect();
        Self {
            kind: format!("{:?}", err.kind()),
            message: err.message(),
            hint: err.hint(),
            field: err.field(),
            causes,
        }
    }

    fn json_line(self) -> String {
        serde_json::to_string(&ErrorEnvelope { error: self }).unwrap_or_else(|_| {
            "{\"error\":{\"kind\":\"Io\",\"message\":\"json encode failed\"}}".to_string()
        })
    }

    fn text(&self, use_color: bool) -> String {
        let mut out = format!("{} {}", paint("error:", RED, use_color), self.message);
        let details = [
            ("hint:", self.hint),
            ("field:", self.field),
            ("caused by:", self.causes.first().map(String::as_str)),
        ];
        for (label, detail) in details {
            if let Some(detail) = detail {
                out.push('\n');
                out.push_str(&paint(label, YELLOW, use_color));
                out.push(' ');
                out.push_str(detail);
            }
        }
        out
    }
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let report = ErrorReport::from_error(err);
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", report.text(color_mode.use_color(is_tty)));
    } else {
        eprintln!("{}", report.json_line());
    }
}
