use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stroke-recall",
    version,
    about = "Trace a reference shape, redraw it from memory, and score the match",
    long_about = "Single-stroke drawing practice. Record a traced stroke over a reference image, \
                  then compare a stroke drawn from memory against it and get a 0-100 score"
)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved practice session
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the traced stroke (starts a new practice when --image is given)
    Trace {
        /// Stroke JSON file
        #[arg(short, long)]
        input: PathBuf,
        /// Reference image the stroke was traced over
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Score a stroke drawn from memory against the recorded trace
    Analyze {
        /// Stroke JSON file drawn from memory
        #[arg(short, long)]
        memory: PathBuf,
        /// Use this trace instead of the recorded one (and record it)
        #[arg(short, long)]
        trace: Option<PathBuf>,
        /// The hint overlay was shown while drawing
        #[arg(long)]
        hint_used: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the last saved result
    Resume {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the saved practice session
    Reset,
    /// Resample a stroke to evenly spaced points and print it as JSON
    Resample {
        /// Stroke JSON file
        #[arg(short, long)]
        input: PathBuf,
        /// Number of output points
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version and effective configuration
    #[command(name = "info")]
    Info,
}
