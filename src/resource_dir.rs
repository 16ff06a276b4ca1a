//! Resource directory lookup.
//!
//! Assets are loaded with paths relative to a `resources` folder, so before
//! anything is loaded the process working directory is pointed at that folder.
//! The folder is searched for in the working directory, next to the
//! executable, and up to three parent directories above the executable, in
//! that order. This covers running from the repository root, running the
//! binary out of `target/<profile>`, and running from nested build layouts.

use std::env;
use std::path::{Path, PathBuf};

/// Searches the standard locations for `folder_name` and, on the first hit,
/// makes it the process working directory.
///
/// Returns `true` if a directory was found and entered. Returns `false` (and
/// leaves the working directory untouched) if no candidate exists or the
/// executable path cannot be determined and the working-directory candidate
/// is absent.
pub fn search_and_set_resource_dir(folder_name: &str) -> bool {
    let cwd = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("could not read working directory: {err}");
            return false;
        }
    };
    let app_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match locate_resource_dir(folder_name, &cwd, app_dir.as_deref()) {
        Some(dir) => match env::set_current_dir(&dir) {
            Ok(()) => {
                log::info!("resource directory: {}", dir.display());
                true
            }
            Err(err) => {
                log::warn!("could not enter {}: {err}", dir.display());
                false
            }
        },
        None => false,
    }
}

/// Returns the first existing candidate for the resource folder.
///
/// Candidates, in precedence order: `cwd/folder`, `app_dir/folder`, then
/// `folder` one, two, and three levels above `app_dir`. The walk stops after
/// three parent levels regardless of what exists further up.
fn locate_resource_dir(folder_name: &str, cwd: &Path, app_dir: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![cwd.join(folder_name)];
    if let Some(app_dir) = app_dir {
        let mut base = app_dir.to_path_buf();
        candidates.push(base.join(folder_name));
        for _ in 0..3 {
            base.push("..");
            candidates.push(base.join(folder_name));
        }
    }
    candidates.into_iter().find(|dir| dir.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Builds an isolated directory tree for one test.
    ///
    /// Layout: `<tmp>/<name>/a/b/c/app`, with the app dir nested three levels
    /// deep so every parent-walk candidate stays inside the tree.
    struct TestTree {
        root: PathBuf,
    }

    impl TestTree {
        fn new(name: &str) -> Self {
            let root = env::temp_dir().join(format!("wabbit-{}-{}", name, std::process::id()));
            // A leftover tree from a previous run would leak stale candidates.
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(root.join("a/b/c/app")).expect("create test tree");
            Self { root }
        }

        fn cwd(&self) -> PathBuf {
            self.root.clone()
        }

        fn app_dir(&self) -> PathBuf {
            self.root.join("a/b/c/app")
        }
    }

    impl Drop for TestTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    /// The working-directory candidate wins over everything else.
    #[test]
    fn prefers_working_directory() {
        let tree = TestTree::new("prefers-cwd");
        fs::create_dir(tree.cwd().join("resources")).unwrap();
        fs::create_dir(tree.app_dir().join("resources")).unwrap();

        let found = locate_resource_dir("resources", &tree.cwd(), Some(&tree.app_dir()))
            .expect("should find a candidate");
        assert_eq!(found, tree.cwd().join("resources"));
    }

    /// With no working-directory hit, the application directory is next.
    #[test]
    fn falls_back_to_app_dir() {
        let tree = TestTree::new("app-dir");
        fs::create_dir(tree.app_dir().join("resources")).unwrap();
        // A decoy one level up must lose to the app dir itself.
        fs::create_dir(tree.root.join("a/b/c/resources")).unwrap();

        let found = locate_resource_dir("resources", &tree.cwd(), Some(&tree.app_dir()))
            .expect("should find a candidate");
        assert_eq!(found, tree.app_dir().join("resources"));
    }

    /// Parents of the app dir are checked nearest-first.
    #[test]
    fn walks_parents_nearest_first() {
        let tree = TestTree::new("parents");
        fs::create_dir(tree.root.join("a/b/resources")).unwrap();
        fs::create_dir(tree.root.join("a/resources")).unwrap();

        let found = locate_resource_dir("resources", &tree.cwd(), Some(&tree.app_dir()))
            .expect("should find a candidate");
        // a/b/c/app/../.. resolves to a/b.
        assert_eq!(
            found.canonicalize().unwrap(),
            tree.root.join("a/b/resources").canonicalize().unwrap()
        );
    }

    /// The walk stops three levels above the app dir.
    #[test]
    fn stops_after_three_parent_levels() {
        let tree = TestTree::new("termination");
        // Four levels above a/b/c/app is the tree root's parent; plant the
        // folder exactly one level out of reach: app -> c -> b -> a (3 up),
        // so root/resources is the fourth level and must not be found.
        fs::create_dir(tree.root.join("resources")).unwrap();

        // cwd deliberately has no resources folder either.
        let found = locate_resource_dir("resources", &tree.app_dir(), Some(&tree.app_dir()));
        assert!(found.is_none());
    }

    /// No executable path: only the working directory is consulted.
    #[test]
    fn no_app_dir_checks_cwd_only() {
        let tree = TestTree::new("no-app");
        assert!(locate_resource_dir("resources", &tree.cwd(), None).is_none());

        fs::create_dir(tree.cwd().join("resources")).unwrap();
        let found =
            locate_resource_dir("resources", &tree.cwd(), None).expect("cwd candidate exists");
        assert_eq!(found, tree.cwd().join("resources"));
    }
}
