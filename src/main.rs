use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use size_comparison::cmd::{self, LocateRequest, OutputFormat};
use std::path::PathBuf;
use std::process;

/// Bundle size comparison for pull requests
///
/// Compares the size snapshot of a pull request build against the snapshot of its
/// merge base and reports which modules and pages grew or shrank.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Directory containing .size-comparison.toml
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a baseline snapshot with a target snapshot
    Compare {
        /// Snapshot of the merge base
        baseline: PathBuf,

        /// Snapshot of the pull request build
        target: PathBuf,

        /// Pull request number, used for preview links
        #[arg(long = "pr", value_name = "N")]
        pull_request: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the category and label of bundle identifiers
    Classify {
        /// Bundle identifiers
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Print where the snapshots of a comparison are stored
    Locate {
        /// Git ref the baseline was built from
        #[arg(long = "ref", value_name = "REF")]
        git_ref: String,

        /// Merge-base commit
        #[arg(long)]
        commit: String,

        /// CI build id of the pull request
        #[arg(long, value_name = "N")]
        build_id: Option<u64>,

        /// Pull request number
        #[arg(long = "pr", value_name = "N")]
        pull_request: Option<u64>,

        /// Download URL of the pull request's snapshot artifact
        #[arg(long, value_name = "URL")]
        artifact_url: Option<String>,
    },

    /// Write a .size-comparison.toml with the default rules
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let root = cli.project_root.as_path();
    let result = match &cli.command {
        Commands::Compare {
            baseline,
            target,
            pull_request,
            format,
        } => cmd::cmd_compare(root, baseline, target, *pull_request, *format),
        Commands::Classify { ids } => cmd::cmd_classify(root, ids),
        Commands::Locate {
            git_ref,
            commit,
            build_id,
            pull_request,
            artifact_url,
        } => cmd::cmd_locate(
            root,
            &LocateRequest {
                git_ref,
                commit,
                build_id: *build_id,
                pull_request: *pull_request,
                artifact_url: artifact_url.as_deref(),
            },
        ),
        Commands::Init => cmd::cmd_init(root),
        Commands::Completions { shell } => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
    };

    if let Err(e) = result {
        use size_comparison::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
