use camino::Utf8PathBuf;

const EQUITY_ROOT: &str = "equity-fundamentals-analytics";

const EQUITY_FOLDERS: &[&str] = &[
    "data/raw",
    "data/clean",
    "data/feature",
    "data/analytics",
    "notebooks/intake",
    "notebooks/cleaning",
    "notebooks/features",
    "notebooks/analytics",
    "src/equity_analytics/config",
    "tests",
    "docs",
];

const EQUITY_FILES: &[&str] = &[
    "README.md",
    "requirements.txt",
    ".gitignore",
    "LICENSE",
    "src/equity_analytics/__init__.py",
    "docs/architecture.md",
    "docs/workflow.md",
    "docs/metrics_dictionary.md",
    "docs/project_tracker.md",
];

/// A project layout: the root directory plus the folders and empty files
/// created beneath it. Folder and file paths are relative to `root`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    pub root: Utf8PathBuf,
    pub folders: Vec<Utf8PathBuf>,
    pub files: Vec<Utf8PathBuf>,
}

impl Layout {
    pub fn new<R, F, P>(root: R, folders: F, files: P) -> Self
    where
        R: Into<Utf8PathBuf>,
        F: IntoIterator,
        F::Item: Into<Utf8PathBuf>,
        P: IntoIterator,
        P::Item: Into<Utf8PathBuf>,
    {
        Self {
            root: root.into(),
            folders: folders.into_iter().map(Into::into).collect(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in data-analytics template.
    pub fn equity_fundamentals() -> Self {
        Self::new(
            EQUITY_ROOT,
            EQUITY_FOLDERS.iter().copied(),
            EQUITY_FILES.iter().copied(),
        )
    }
}
