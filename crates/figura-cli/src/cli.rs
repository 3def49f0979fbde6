//! Command-line interface for the figura utility
//!
//! Reads a figure descriptor file and plots the figures in the terminal.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::colorizer::colorize_frame;
use figura::core::logging::init_logging;
use figura::figures::{DrawingDriver, DriveReport, PlotConfig, DEFAULT_INPUT};
use figura::plot::{AsciiPlot, AsciiPlotOptions, DisplaySink, PlotFrame};
use figura::CharacterSet;

/// Figura - Plot geometric figures from a descriptor file
#[derive(Parser, Debug)]
#[command(name = "figura")]
#[command(about = "Plot circles, rectangles and triangles described in a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Figure descriptor file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Character set to use for the plot
    #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
    pub style: StyleChoice,

    /// When to use colors in output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Plot area width in columns
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(10..=1000))]
    pub width: u16,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Supported output character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if stdout is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct FiguraApp;

impl FiguraApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        Self::init_logging(&cli);

        if cli.verbose {
            eprintln!("Figura v{}", env!("CARGO_PKG_VERSION"));
        }

        let sink: DisplaySink = if Self::should_colorize(cli.color) {
            Box::new(|frame: &PlotFrame| write_frame(&colorize_frame(frame)))
        } else {
            Box::new(|frame: &PlotFrame| write_frame(&frame.to_string()))
        };

        debug!(input = %cli.input.display(), style = ?cli.style, width = cli.width, "Starting");
        let mut stdout = io::stdout();
        let report = self.execute(&cli, &mut stdout, sink)?;
        stdout.flush()?;
        debug!(outcome = ?report.outcome, drawn = report.drawn, "Run complete");

        if cli.verbose {
            eprintln!(
                "Drew {} figure(s), skipped {} line(s), reported {} line(s)",
                report.drawn,
                report.skipped,
                report.diagnostics.len()
            );
        }
        Ok(())
    }

    /// Draw `cli.input`, writing progress to `out` and the plot to `sink`
    pub fn execute<W: Write>(&self, cli: &Cli, out: &mut W, sink: DisplaySink) -> Result<DriveReport> {
        let options = AsciiPlotOptions {
            width: usize::from(cli.width),
            style: cli.style.into(),
            ..AsciiPlotOptions::default()
        };
        let mut config = PlotConfig::default();
        if let Some(title) = &cli.title {
            config.title = title.clone();
        }

        let plot = AsciiPlot::with_sink(options, sink);
        let mut driver = DrawingDriver::with_config(plot, config);
        driver.run(&cli.input, out)
    }

    /// Explicit flags win; otherwise the environment decides, then `-v`
    fn init_logging(cli: &Cli) {
        let level = cli.log_level.map(|l| l.as_str()).or_else(|| {
            let from_env = std::env::var_os("FIGURA_LOG_LEVEL").is_some()
                || std::env::var_os("RUST_LOG").is_some();
            (cli.verbose && !from_env).then_some(LogLevel::Info.as_str())
        });
        let format = cli.log_format.map(|f| f.as_str());

        if let Err(e) = init_logging(level, format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    }

    /// Determine if the plot should be colorized
    fn should_colorize(color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&io::stdout())
            }
        }
    }
}

fn write_frame(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}
