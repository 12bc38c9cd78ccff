use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter};
use owo_colors::{
    colors::{Blue, Green, Magenta, Red, Yellow},
    OwoColorize, Stream, Style,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub const FULL_VERSION: &str = env!("CARGO_PKG_VERSION");

type ArgResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "motifmark",
          version = FULL_VERSION,
          about = "Draws motif occurrences over the exon/intron structure of each sequence",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Enable or disable color output in logging
    #[arg(long, value_enum, default_value_t = Color::Auto, global = true, help_heading = "Advanced")]
    color: Color,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Motif Plotter")]
    Plot(PlotArgs),
    #[clap(about = "FASTA Single-liner")]
    Oneline(OnelineArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Plot(_) => "plot",
            Command::Oneline(_) => "oneline",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    /// FASTA file with sequences; uppercase marks exons, lowercase introns
    #[arg(
        short = 'f',
        long = "fasta",
        value_name = "FASTA",
        value_parser = check_file_exists,
        required = true
    )]
    pub fasta_path: PathBuf,

    /// Text file with one motif per line (IUPAC codes allowed)
    #[arg(
        short = 'm',
        long = "motifs",
        value_name = "MOTIFS",
        value_parser = check_file_exists,
        required = true
    )]
    pub motifs_path: PathBuf,

    /// Output image path
    #[arg(
        short = 'o',
        long = "image",
        value_name = "IMAGE",
        value_parser = check_image_path,
        required = true
    )]
    pub output_path: PathBuf,

    /// Font family to use for text elements
    #[arg(long = "font-family", value_name = "FONT", help_heading = "Plotting")]
    pub font_family: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct OnelineArgs {
    /// FASTA file with sequences wrapped over any number of lines
    #[arg(
        short = 'f',
        long = "fasta",
        value_name = "FASTA",
        value_parser = check_file_exists,
        required = true
    )]
    pub fasta_path: PathBuf,

    /// Output FASTA with one sequence line per record
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT",
        value_parser = check_prefix_path,
        required = true
    )]
    pub output_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn apply(self) {
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

pub fn init_verbose(args: &Cli) {
    args.color.apply();

    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(format_log)
        .filter_level(filter_level)
        .init();
}

#[inline(always)]
fn level_style(level: Level) -> (&'static str, Style) {
    match level {
        Level::Error => ("ERROR", Style::new().fg::<Red>().bold()),
        Level::Warn => ("WARN", Style::new().fg::<Yellow>()),
        Level::Info => ("INFO", Style::new().fg::<Green>()),
        Level::Debug => ("DEBUG", Style::new().fg::<Blue>()),
        Level::Trace => ("TRACE", Style::new().fg::<Magenta>()),
    }
}

fn format_log(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    let (label, style) = level_style(record.level());
    let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let painted_label = label.if_supports_color(Stream::Stderr, |t| style.style(t));
    writeln!(buf, "{ts} [{}] - {}", painted_label, record.args())
}

fn check_prefix_path(s: &str) -> ArgResult<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(PathBuf::from(s))
}

fn check_image_path(s: &str) -> ArgResult<PathBuf> {
    let prefix_check = check_prefix_path(s)?;
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") => Ok(prefix_check),
        _ => Err("Image must have an extension of .svg or .png".to_string()),
    }
}

fn check_file_exists(s: &str) -> ArgResult<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
