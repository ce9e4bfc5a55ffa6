use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::layout::Layout;
use crate::util::fs::{ensure_dir, ensure_empty_file};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Folder => "folder",
            EntryKind::File => "file",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Created,
    Existed,
}

impl Outcome {
    fn from_created(created: bool) -> Self {
        if created {
            Outcome::Created
        } else {
            Outcome::Existed
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    /// Path relative to the project root, as listed in the layout.
    pub path: Utf8PathBuf,
    pub outcome: Outcome,
}

/// What a scaffold run did (or, for [`plan`], would do) to each layout path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub root: Utf8PathBuf,
    pub root_outcome: Outcome,
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn created(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == Outcome::Created)
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn is_noop(&self) -> bool {
        self.root_outcome == Outcome::Existed && self.created_count() == 0
    }
}

/// Create `layout` beneath `base`.
///
/// The root is resolved once and joined onto every folder and file, so the
/// process working directory is never touched. The first filesystem error
/// aborts the run; anything created up to that point stays on disk.
pub fn run(base: &Utf8Path, layout: &Layout) -> Result<Report> {
    let root = base.join(&layout.root);
    let root_created =
        ensure_dir(&root).with_context(|| format!("creating project root {}", root))?;
    log_outcome(EntryKind::Folder, &root, root_created);

    let mut entries = Vec::with_capacity(layout.folders.len() + layout.files.len());

    for folder in &layout.folders {
        let target = root.join(folder);
        let created =
            ensure_dir(&target).with_context(|| format!("creating directory {}", target))?;
        log_outcome(EntryKind::Folder, &target, created);
        entries.push(Entry {
            kind: EntryKind::Folder,
            path: folder.clone(),
            outcome: Outcome::from_created(created),
        });
    }

    for file in &layout.files {
        let target = root.join(file);
        let created =
            ensure_empty_file(&target).with_context(|| format!("creating file {}", target))?;
        log_outcome(EntryKind::File, &target, created);
        entries.push(Entry {
            kind: EntryKind::File,
            path: file.clone(),
            outcome: Outcome::from_created(created),
        });
    }

    Ok(Report {
        root,
        root_outcome: Outcome::from_created(root_created),
        entries,
    })
}

/// Report what [`run`] would do without writing anything.
///
/// A file whose parent folder is listed earlier in the layout is still judged
/// against the current filesystem, so on an empty base every entry reads as
/// `Created`.
pub fn plan(base: &Utf8Path, layout: &Layout) -> Report {
    let root = base.join(&layout.root);
    let probe = |kind: EntryKind, path: &Utf8PathBuf| Entry {
        kind,
        path: path.clone(),
        outcome: Outcome::from_created(!root.join(path).exists()),
    };

    let entries = layout
        .folders
        .iter()
        .map(|folder| probe(EntryKind::Folder, folder))
        .chain(layout.files.iter().map(|file| probe(EntryKind::File, file)))
        .collect();

    Report {
        root_outcome: Outcome::from_created(!root.exists()),
        root,
        entries,
    }
}

fn log_outcome(kind: EntryKind, path: &Utf8Path, created: bool) {
    if created {
        info!(kind = kind.as_str(), "created {}", path);
    } else {
        debug!(kind = kind.as_str(), "exists {}", path);
    }
}
