use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_release_notes::cli::{run_export, ExportArgs};
use git_release_notes::config;
use git_release_notes::git::Git2Repository;
use git_release_notes::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-release-notes",
    about = "Generate categorized release notes from git history"
)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10, help = "Number of commits to export")]
    num_commits: usize,

    #[arg(short, long, default_value = "main", help = "Branch to analyze")]
    branch: String,

    #[arg(long, default_value = ".", help = "Path to the git repository")]
    repo_path: PathBuf,

    #[arg(short, long, default_value = "release_notes.json", help = "JSON output file")]
    output: PathBuf,

    #[arg(short, long, default_value = "RELEASE_NOTES.md", help = "Markdown output file")]
    markdown: PathBuf,

    #[arg(long, help = "Do not generate the markdown file")]
    no_markdown: bool,

    #[arg(long, help = "Only include notes for the latest stable release")]
    latest_release_only: bool,

    #[arg(long, help = "Include an ASCII timeline of commits")]
    timeline: bool,

    #[arg(long, value_name = "REGEX", help = "Exclude commits whose title matches (repeatable)")]
    exclude_title: Vec<String>,

    #[arg(long, value_name = "REGEX", help = "Exclude commits whose author matches (repeatable)")]
    exclude_author: Vec<String>,

    #[arg(long, value_name = "REGEX", help = "Exclude commits whose message matches (repeatable)")]
    exclude_message: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    fn export_args(&self) -> ExportArgs {
        ExportArgs {
            repo_path: self.repo_path.clone(),
            branch: self.branch.clone(),
            num_commits: self.num_commits,
            output: self.output.clone(),
            markdown: (!self.no_markdown).then(|| self.markdown.clone()),
            latest_release_only: self.latest_release_only,
            timeline: self.timeline,
            exclude_title: self.exclude_title.clone(),
            exclude_author: self.exclude_author.clone(),
            exclude_message: self.exclude_message.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-release-notes {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&ui::format_extraction_start(args.num_commits, &args.branch));

    let repo = match Git2Repository::open(&args.repo_path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    match run_export(&repo, &args.export_args(), &config) {
        Ok(report) => ui::display_report(&report),
        Err(e) => {
            ui::display_error(&format!("Failed to export release notes: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
