mod output;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use theme_typings_core::config::load_categories;
use theme_typings_core::{CommandFormatter, Template, TypingsOptions, generate_from_path};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "theme-typings",
    version,
    about = "Generate TypeScript typings from a design-system theme"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate theme token typings from a JSON theme file.
    Tokens(TokensArgs),
}

#[derive(Args, Debug)]
struct TokensArgs {
    /// Theme file (JSON)
    #[arg(value_name = "THEME")]
    theme: PathBuf,

    /// Output file. Defaults to the typings file of the installed styled-system package.
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Output shape: "default" or "augmentation"
    #[arg(long, default_value = "default", value_parser = Template::from_str)]
    template: Template,

    /// Omit the string fallback from component size/variant unions
    #[arg(long)]
    strict_component_types: bool,

    /// Omit the string fallback from token unions
    #[arg(long)]
    strict_token_types: bool,

    /// Skip the formatter
    #[arg(long)]
    no_format: bool,

    /// Formatter command line; reads stdin, writes stdout
    #[arg(long, default_value = "prettier --parser typescript")]
    formatter: String,

    /// Token category table (JSON) replacing the built-in one
    #[arg(long, value_name = "CATEGORIES")]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_tracing(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.compact().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.log_format);

    match cli.command {
        Command::Tokens(args) => tokens(&args),
    }
}

fn tokens(args: &TokensArgs) -> Result<()> {
    let categories = match &args.config {
        Some(path) => load_categories(path)
            .with_context(|| format!("invalid category config {}", path.display()))?,
        None => theme_typings_core::default_categories(),
    };
    let options = TypingsOptions {
        categories,
        strict_token_types: args.strict_token_types,
        strict_component_types: args.strict_component_types,
        format: !args.no_format,
        template: args.template,
    };
    let formatter = formatter_from_command_line(&args.formatter)?;

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let out = output::resolve_output_path(args.out.as_deref(), &cwd)?;

    info!(
        theme = %args.theme.display(),
        template = %options.template,
        formatter = ?options.format.then(|| formatter.program()),
        "generating theme typings"
    );
    let typings = generate_from_path(&args.theme, &options, &formatter)
        .context("failed to generate theme typings")?;

    output::write_atomically(&out, &typings)?;
    info!(out = %out.display(), bytes = typings.len(), "wrote theme typings");
    Ok(())
}

fn formatter_from_command_line(command_line: &str) -> Result<CommandFormatter> {
    let mut words = command_line.split_whitespace();
    let Some(program) = words.next() else {
        bail!("formatter command is empty");
    };
    Ok(CommandFormatter::new(program, words))
}
