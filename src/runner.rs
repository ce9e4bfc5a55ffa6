use std::path::PathBuf;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use tracing::info;

use crate::cli::Cli;
use crate::layout::Layout;
use crate::scaffold::{self, Report};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);
    let base = ctx.base_dir()?;
    let layout = Layout::equity_fundamentals();

    let report = if ctx.dry_run {
        scaffold::plan(&base, &layout)
    } else {
        scaffold::run(&base, &layout)?
    };

    if ctx.dry_run {
        for entry in report.created() {
            info!(kind = entry.kind.as_str(), "would create {}", report.root.join(&entry.path));
        }
    } else if report.is_noop() {
        info!("all paths already present; nothing created");
    }
    info!(
        created = report.created_count(),
        total = report.entries.len(),
        "scaffold finished"
    );
    println!("{}", confirmation(&report, ctx.dry_run));
    Ok(())
}

/// The single stdout line for a run; per-path detail goes to the log.
fn confirmation(report: &Report, dry_run: bool) -> String {
    match (dry_run, report.is_noop()) {
        (true, true) => format!(
            "Dry run: project structure already complete at {}",
            report.root
        ),
        (true, false) => format!(
            "Dry run: project structure would be created at {} ({} of {} paths pending)",
            report.root,
            report.created_count(),
            report.entries.len()
        ),
        (false, _) => format!("Project structure created at {}", report.root),
    }
}

struct CliContext {
    chdir: Option<PathBuf>,
    dry_run: bool,
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            chdir: cli.chdir.clone(),
            dry_run: cli.dry_run,
        }
    }
}

impl CliContext {
    /// Directory the project root is created in. Relative paths stay relative
    /// so the confirmation reads `./equity-fundamentals-analytics`.
    fn base_dir(&self) -> Result<Utf8PathBuf> {
        match &self.chdir {
            Some(path) => Utf8PathBuf::from_path_buf(path.clone())
                .map_err(|_| anyhow!("base directory must be valid UTF-8")),
            None => Ok(Utf8PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::{Entry, EntryKind, Outcome};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("equity-scaffold-runner-{ts}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    fn cli(chdir: Option<PathBuf>, dry_run: bool) -> Cli {
        Cli {
            chdir,
            dry_run,
            verbose: 0,
        }
    }

    #[test]
    fn base_defaults_to_current_directory() {
        let ctx = CliContext::from(&cli(None, false));
        let base = ctx.base_dir().unwrap();
        assert_eq!(base, ".");
        assert_eq!(
            base.join("equity-fundamentals-analytics"),
            "./equity-fundamentals-analytics"
        );
    }

    #[test]
    fn confirmation_names_root() {
        let report = Report {
            root: Utf8PathBuf::from("./equity-fundamentals-analytics"),
            root_outcome: Outcome::Created,
            entries: Vec::new(),
        };
        assert_eq!(
            confirmation(&report, false),
            "Project structure created at ./equity-fundamentals-analytics"
        );
    }

    fn demo_report(root_outcome: Outcome, file_outcome: Outcome) -> Report {
        Report {
            root: Utf8PathBuf::from("./demo"),
            root_outcome,
            entries: vec![
                Entry {
                    kind: EntryKind::Folder,
                    path: Utf8PathBuf::from("docs"),
                    outcome: Outcome::Existed,
                },
                Entry {
                    kind: EntryKind::File,
                    path: Utf8PathBuf::from("docs/workflow.md"),
                    outcome: file_outcome,
                },
            ],
        }
    }

    #[test]
    fn dry_run_confirmation_is_one_line() {
        let message = confirmation(&demo_report(Outcome::Existed, Outcome::Created), true);
        assert_eq!(
            message,
            "Dry run: project structure would be created at ./demo (1 of 2 paths pending)"
        );
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn dry_run_on_complete_layout_says_nothing_pending() {
        let message = confirmation(&demo_report(Outcome::Existed, Outcome::Existed), true);
        assert_eq!(
            message,
            "Dry run: project structure already complete at ./demo"
        );
    }

    #[test]
    fn dry_run_confirmation_for_full_layout_stays_one_line() {
        let base = unique_temp_dir();
        let layout = Layout::equity_fundamentals();

        let pending = scaffold::plan(&base, &layout);
        assert_eq!(confirmation(&pending, true).lines().count(), 1);

        scaffold::run(&base, &layout).unwrap();
        let done = scaffold::plan(&base, &layout);
        assert!(confirmation(&done, true).contains("already complete"));

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn run_with_chdir_scaffolds_under_base() {
        let base = unique_temp_dir();
        run(cli(Some(base.clone().into_std_path_buf()), false)).unwrap();

        let root = base.join("equity-fundamentals-analytics");
        assert!(root.join("notebooks").join("intake").is_dir());
        assert!(root.join("docs").join("metrics_dictionary.md").is_file());

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn dry_run_with_chdir_creates_nothing() {
        let base = unique_temp_dir();
        run(cli(Some(base.clone().into_std_path_buf()), true)).unwrap();
        assert!(!base.exists());
    }
}
