//! CLI entry point for arbor

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use arbor::{ExportError, IgnoreSet, TextFormatter, TreeWalker, WalkStats, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
/// Colors apply only to the terminal status messages; the exported file is
/// always plain text.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Export a directory tree as a connector-drawn text file")]
#[command(version)]
struct Args {
    /// Root directory to export
    path: PathBuf,

    /// Destination file, overwritten if it already exists
    #[arg(
        short = 'o',
        long = "output-file",
        default_value = "folder_structure.txt"
    )]
    output_file: PathBuf,

    /// Add a directory name to the ignore list (can be used multiple times)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    ignore_dir: Vec<String>,

    /// Add a file name to the ignore list (can be used multiple times)
    #[arg(long = "ignore-file", value_name = "NAME")]
    ignore_file: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    match export(&args) {
        Ok(stats) => {
            if let Err(e) = print_confirmation(&args.output_file, stats, use_color) {
                eprintln!("arbor: error writing output: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            print_error(&e, use_color);
            process::exit(1);
        }
    }
}

/// Validate the root, then stream the tree into the output file.
fn export(args: &Args) -> Result<WalkStats, ExportError> {
    // Checked before the output file is opened so a bad root never clobbers
    // an existing export.
    if !args.path.is_dir() {
        return Err(ExportError::NotADirectory(args.path.clone()));
    }

    let ignore = IgnoreSet::default()
        .with_dirs(args.ignore_dir.iter().cloned())
        .with_files(args.ignore_file.iter().cloned());
    let walker = TreeWalker::new(WalkerConfig {
        ignore,
        max_depth: args.level,
    });

    let file = File::create(&args.output_file)?;
    let mut formatter = TextFormatter::new(BufWriter::new(file));
    let stats = walker.walk(&args.path, &mut formatter)?;
    formatter.into_inner().flush()?;
    Ok(stats)
}

fn print_confirmation(output: &Path, stats: WalkStats, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(
        stdout,
        "✅ Folder structure exported to '{}'",
        output.display()
    )?;
    stdout.reset()?;
    writeln!(stdout, " ({} directories, {} files)", stats.dirs, stats.files)
}

fn print_error(err: &ExportError, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = write!(stderr, "❌ Error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {err}");
}
