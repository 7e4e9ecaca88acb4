//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use fhex_core::{
    application::{ApplicationError, ports::Filesystem},
    error::HubResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service and
/// inspect the result through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Seed an empty directory (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_all(path.as_ref());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> HubResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> HubResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

fn not_found(path: &Path, what: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{what} does not exist"),
    }
}

/// Whether any component of `path` below `root` is named `exclude`.
fn passes_through(path: &Path, root: &Path, exclude: &str) -> bool {
    path.strip_prefix(root).is_ok_and(|rel| {
        rel.components()
            .any(|c| matches!(c, Component::Normal(name) if name == exclude))
    })
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> HubResult<()> {
        self.write()?.add_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HubResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(not_found(path, "Parent directory").into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> HubResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File").into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    fn list_dir(&self, path: &Path) -> HubResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory").into());
        }

        let is_child = |p: &&PathBuf| p.parent() == Some(path);
        let mut children: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(is_child)
            .chain(inner.files.keys().filter(is_child))
            .cloned()
            .collect();
        children.sort();
        Ok(children)
    }

    fn walk_files(&self, path: &Path, exclude: &str) -> HubResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory").into());
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(path) && !passes_through(p, path, exclude))
            .cloned()
            .collect())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path, exclude: &str) -> HubResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(from) {
            return Err(not_found(from, "Directory").into());
        }
        if inner.files.contains_key(to) || inner.directories.contains(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination already exists".into(),
            }
            .into());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from) && !passes_through(p, from, exclude))
            .filter_map(|p| p.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(from) && !passes_through(p, from, exclude))
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        inner.add_dir_all(to);
        for dir in dirs {
            inner.directories.insert(dir);
        }
        inner.files.extend(files);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> HubResult<()> {
        self.write()?
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path, "File").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file("/a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/hub")).unwrap();
        assert!(other.is_dir(Path::new("/hub")));
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::new()
            .with_file("/hub/examples/a/README.md", "")
            .with_file("/hub/examples/b.txt", "")
            .with_dir("/hub/examples/c");

        let children = fs.list_dir(Path::new("/hub/examples")).unwrap();
        assert_eq!(
            children,
            vec![
                PathBuf::from("/hub/examples/a"),
                PathBuf::from("/hub/examples/b.txt"),
                PathBuf::from("/hub/examples/c"),
            ]
        );
    }

    #[test]
    fn walk_and_copy_skip_excluded() {
        let fs = MemoryFilesystem::new()
            .with_file("/t/contracts/A.sol", "a")
            .with_file("/t/node_modules/x/B.sol", "b");

        let walked = fs.walk_files(Path::new("/t"), "node_modules").unwrap();
        assert_eq!(walked, vec![PathBuf::from("/t/contracts/A.sol")]);

        fs.copy_dir_all(Path::new("/t"), Path::new("/c"), "node_modules")
            .unwrap();
        assert_eq!(fs.read_file("/c/contracts/A.sol").as_deref(), Some("a"));
        assert!(!fs.exists(Path::new("/c/node_modules")));
    }

    #[test]
    fn copy_refuses_existing_destination() {
        let fs = MemoryFilesystem::new().with_dir("/t").with_dir("/c");
        assert!(
            fs.copy_dir_all(Path::new("/t"), Path::new("/c"), "node_modules")
                .is_err()
        );
    }

    #[test]
    fn remove_missing_file_errors() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("/nope")).is_err());
    }
}
