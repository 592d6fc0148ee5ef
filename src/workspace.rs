use crate::model::SourceFile;
use crate::util;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Ordered project/item tree, decoupled from any IDE automation surface.
/// Scan order is project order, then item order, and for each item its
/// children are fully visited before the item's own file.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub items: Vec<Item>,
}

/// A named workspace entry. An item may carry its own file, nested items, or
/// both (an IDE groups e.g. designer files under a parent source file).
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub path: Option<PathBuf>,
    pub children: Vec<Item>,
}

impl Item {
    pub fn leaf(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path: Some(path),
            children: Vec::new(),
        }
    }
}

impl Workspace {
    /// Candidate files in scan order, read from disk. Only items whose name
    /// ends with `extension` (case-insensitive) are read; an unreadable file
    /// is warned about and skipped rather than aborting the walk.
    pub fn source_files(&self, extension: &str) -> Vec<SourceFile> {
        let mut files = Vec::new();
        self.visit(&mut |item| {
            if !util::has_suffix_ignore_case(&item.name, extension) {
                return;
            }
            let Some(path) = &item.path else {
                return;
            };
            match util::read_to_string(path) {
                Ok(text) => files.push(SourceFile::new(util::normalize_path(path), text)),
                Err(err) => eprintln!("medloc: Warning: {err:#}, skipping"),
            }
        });
        files
    }

    /// Candidate paths in scan order, without reading file contents.
    pub fn candidate_paths(&self, extension: &str) -> Vec<String> {
        let mut paths = Vec::new();
        self.visit(&mut |item| {
            if !util::has_suffix_ignore_case(&item.name, extension) {
                return;
            }
            if let Some(path) = &item.path {
                paths.push(util::normalize_path(path));
            }
        });
        paths
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Item)) {
        for project in &self.projects {
            for item in &project.items {
                visit_item(item, f);
            }
        }
    }

    /// Build a workspace from a directory tree. The walk respects gitignore
    /// rules, skips `.git`/`bin`/`obj`, and orders entries by relative path
    /// so scans are deterministic. Each top-level entry becomes a project.
    pub fn from_dir(root: &Path) -> Result<Workspace> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .require_git(false)
            .filter_entry(|entry| !is_ignored_entry(entry))
            .build();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(value) => value,
                Err(err) => {
                    eprintln!("medloc: Warning: walk error: {err}");
                    continue;
                }
            };
            if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(root)
                .with_context(|| {
                    format!(
                        "strip prefix {} from {}",
                        root.display(),
                        entry.path().display()
                    )
                })?
                .to_path_buf();
            paths.push((rel, entry.into_path()));
        }
        paths.sort_by(|a, b| a.0.cmp(&b.0));

        let mut top_level: Vec<Item> = Vec::new();
        for (rel, abs) in paths {
            let components: Vec<String> = rel
                .components()
                .filter_map(|comp| match comp {
                    Component::Normal(os) => Some(os.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect();
            insert_path(&mut top_level, &components, abs);
        }

        let projects = top_level
            .into_iter()
            .map(|item| {
                let name = item.name.clone();
                let items = if item.children.is_empty() {
                    vec![item]
                } else {
                    item.children
                };
                Project { name, items }
            })
            .collect();
        Ok(Workspace { projects })
    }
}

fn visit_item<'a>(item: &'a Item, f: &mut dyn FnMut(&'a Item)) {
    for child in &item.children {
        visit_item(child, f);
    }
    f(item);
}

fn insert_path(items: &mut Vec<Item>, components: &[String], path: PathBuf) {
    let Some((head, rest)) = components.split_first() else {
        return;
    };
    let idx = match items.iter().position(|item| item.name == *head) {
        Some(idx) => idx,
        None => {
            items.push(Item {
                name: head.clone(),
                path: None,
                children: Vec::new(),
            });
            items.len() - 1
        }
    };
    if rest.is_empty() {
        items[idx].path = Some(path);
    } else {
        insert_path(&mut items[idx].children, rest, path);
    }
}

fn is_ignored_entry(entry: &ignore::DirEntry) -> bool {
    match entry.file_name() {
        name if name == OsStr::new(".git") => true,
        name if name == OsStr::new("bin") => true,
        name if name == OsStr::new("obj") => true,
        _ => false,
    }
}
