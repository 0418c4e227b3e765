use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "qalign - pairwise protein structure comparison: global sequence alignment, rigid-body superposition, and per-residue similarity scoring.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two protein structures: align their sequences, superpose their
    /// coordinates, and score per-residue similarity.
    Compare(CompareArgs),
    /// Download structure files from RCSB into the local structure directory.
    Fetch(FetchArgs),
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First structure: a PDB id (downloaded when missing) or a local file path.
    #[arg(required = true, value_name = "ID_OR_PATH")]
    pub structure_a: String,

    /// Second structure: a PDB id (downloaded when missing) or a local file path.
    #[arg(required = true, value_name = "ID_OR_PATH")]
    pub structure_b: String,

    /// Path for the four-line result artifact.
    #[arg(short, long, default_value = "result.txt", value_name = "PATH")]
    pub output: PathBuf,

    /// Substitution matrix CSV; the bundled BLOSUM62 is used when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub matrix: Option<PathBuf>,

    /// Comparison configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the linear gap penalty from the config file.
    #[arg(long, value_name = "INT", allow_hyphen_values = true)]
    pub gap_penalty: Option<i32>,

    /// Restrict both structures to a single chain.
    #[arg(long, value_name = "CHAIN")]
    pub chain: Option<char>,

    /// Residue name to drop while parsing. Can be used multiple times.
    #[arg(long = "exclude-residue", value_name = "NAME")]
    pub exclude_residues: Vec<String>,

    /// Directory for downloaded structure files.
    #[arg(long, default_value = "pdbfiles", value_name = "DIR")]
    pub dir: PathBuf,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// PDB ids to download.
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,

    /// Directory for downloaded structure files.
    #[arg(long, default_value = "pdbfiles", value_name = "DIR")]
    pub dir: PathBuf,

    /// Re-download and overwrite existing files.
    #[arg(long)]
    pub force: bool,
}
