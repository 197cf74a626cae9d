//! Export workflow orchestration
//!
//! Runs the read → filter → classify → render → write pipeline against any
//! [`Repository`]. Kept apart from `main.rs` so the workflow can be driven
//! programmatically (and against a mock repository) without clap.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info, instrument};

use crate::analyzer::{Classifier, CommitFilter};
use crate::boundary::BoundaryWarning;
use crate::config::{Config, FiltersConfig};
use crate::domain::{Commit, ReleaseData, RepositoryInfo, Tag, TagCurator};
use crate::error::Result;
use crate::git::{normalize_remote_url, Repository};
use crate::render::{generate_markdown, MarkdownOptions};

/// Remote whose URL is used to link commits
pub const ORIGIN_REMOTE: &str = "origin";

/// Arguments for the export workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Path of the repository being read
    pub repo_path: PathBuf,

    /// Branch (or any revision) to walk
    pub branch: String,

    /// Maximum number of commits read from history
    pub num_commits: usize,

    /// Destination of the JSON document
    pub output: PathBuf,

    /// Destination of the Markdown document, if one is wanted
    pub markdown: Option<PathBuf>,

    pub latest_release_only: bool,

    pub timeline: bool,

    pub exclude_title: Vec<String>,
    pub exclude_author: Vec<String>,
    pub exclude_message: Vec<String>,
}

impl Default for ExportArgs {
    fn default() -> Self {
        ExportArgs {
            repo_path: PathBuf::from("."),
            branch: "main".to_string(),
            num_commits: 10,
            output: PathBuf::from("release_notes.json"),
            markdown: Some(PathBuf::from("RELEASE_NOTES.md")),
            latest_release_only: false,
            timeline: false,
            exclude_title: Vec::new(),
            exclude_author: Vec::new(),
            exclude_message: Vec::new(),
        }
    }
}

impl ExportArgs {
    /// Configured exclusion lists followed by the ones given on the command line
    pub fn filters(&self, config: &FiltersConfig) -> FiltersConfig {
        let merge = |configured: &[String], extra: &[String]| -> Vec<String> {
            configured.iter().chain(extra).cloned().collect()
        };

        FiltersConfig {
            exclude_title: merge(&config.exclude_title, &self.exclude_title),
            exclude_author: merge(&config.exclude_author, &self.exclude_author),
            exclude_message: merge(&config.exclude_message, &self.exclude_message),
        }
    }

    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions {
            latest_release_only: self.latest_release_only,
            timeline: self.timeline,
        }
    }
}

/// The in-memory result of reading and classifying a repository
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub data: ReleaseData,

    /// Commits dropped by the exclusion filters
    pub excluded_count: usize,

    pub warnings: Vec<BoundaryWarning>,
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub commit_count: usize,
    pub excluded_count: usize,
    pub json_path: PathBuf,
    pub markdown_path: Option<PathBuf>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Read, filter and classify commits into the exported document.
///
/// Exclusion patterns are compiled before the repository is touched, so a
/// malformed pattern fails the run without reading any history. Missing tag
/// or remote metadata degrades to an empty tag list or URL and is reported
/// as a [`BoundaryWarning`].
#[instrument(skip(repo, args, config, now), fields(branch = %args.branch, max = args.num_commits))]
pub fn extract<R, Tz>(
    repo: &R,
    args: &ExportArgs,
    config: &Config,
    now: DateTime<Tz>,
) -> Result<Extraction>
where
    R: Repository,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let filter = CommitFilter::compile(&args.filters(&config.filters))?;
    let classifier = Classifier::new(&config.classifier);

    let history = repo.commits(&args.branch, args.num_commits)?;

    let mut warnings = Vec::new();

    let tags = repo.tags().unwrap_or_else(|e| {
        debug!(error = %e, "tags unavailable, continuing without release markers");
        warnings.push(BoundaryWarning::TagsUnavailable {
            reason: e.to_string(),
        });
        Vec::new()
    });
    let mut tags_by_commit: HashMap<String, Vec<String>> = HashMap::new();
    for tag in tags {
        tags_by_commit.entry(tag.target).or_default().push(tag.name);
    }

    let mut excluded_count = 0;
    let mut commits = Vec::with_capacity(history.len());

    for info in history {
        if filter.excludes(&info) {
            debug!(hash = %info.hash, "commit excluded");
            excluded_count += 1;
            continue;
        }

        let category = classifier.classify(info.first_line(), &info.author, &info.message);
        let tags = tags_by_commit.remove(&info.hash).unwrap_or_default();
        commits.push(Commit::new(info, category, tags));
    }

    let url = match repo.remote_url(ORIGIN_REMOTE) {
        Ok(Some(url)) => normalize_remote_url(&url),
        Ok(None) => {
            warnings.push(BoundaryWarning::MissingRemote {
                remote: ORIGIN_REMOTE.to_string(),
            });
            String::new()
        }
        Err(e) => {
            debug!(error = %e, "remote lookup failed");
            warnings.push(BoundaryWarning::MissingRemote {
                remote: ORIGIN_REMOTE.to_string(),
            });
            String::new()
        }
    };

    let exported_tags: Vec<Tag> = commits
        .iter()
        .flat_map(|c| {
            c.tags
                .iter()
                .map(move |name| Tag::new(name.as_str(), c.hash.as_str()))
        })
        .collect();
    let markers = TagCurator::default().curate(&exported_tags);
    debug!(
        tags = exported_tags.len(),
        markers = markers.len(),
        "release markers on exported commits"
    );
    if !exported_tags.is_empty() && markers.is_empty() {
        warnings.push(BoundaryWarning::NoReleaseMarkers {
            tag_count: exported_tags.len(),
        });
    }

    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoCommits {
            branch: args.branch.clone(),
            excluded: excluded_count,
        });
    }

    info!(
        commits = commits.len(),
        excluded = excluded_count,
        "commits classified"
    );

    let name = RepositoryInfo::resolve_name(&args.repo_path, &url);
    let repository = RepositoryInfo::new(name, args.branch.clone(), url);

    Ok(Extraction {
        data: ReleaseData::new(repository, commits, now),
        excluded_count,
        warnings,
    })
}

/// Main export workflow
///
/// 1. Extract and classify commits
/// 2. Write the JSON document
/// 3. Render and write the Markdown document, when requested
pub fn run_export<R: Repository>(
    repo: &R,
    args: &ExportArgs,
    config: &Config,
) -> Result<ExportReport> {
    let extraction = extract(repo, args, config, Local::now())?;
    write_outputs(&extraction, args)
}

/// Write the artifacts of an extraction to the paths named in `args`
#[instrument(skip_all, fields(output = %args.output.display()))]
pub fn write_outputs(extraction: &Extraction, args: &ExportArgs) -> Result<ExportReport> {
    fs::write(&args.output, extraction.data.to_json()?)?;
    debug!("JSON document written");

    if let Some(path) = &args.markdown {
        let markdown = generate_markdown(&extraction.data, &args.markdown_options());
        fs::write(path, markdown)?;
        debug!(markdown = %path.display(), "Markdown document written");
    }

    Ok(ExportReport {
        commit_count: extraction.data.commits.len(),
        excluded_count: extraction.excluded_count,
        json_path: args.output.clone(),
        markdown_path: args.markdown.clone(),
        warnings: extraction.warnings.clone(),
    })
}
