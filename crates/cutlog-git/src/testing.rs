//! Throwaway repositories for tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use crate::GitRepo;

/// Create an empty repository
pub fn init_repo() -> (TempDir, GitRepo) {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    let repo = GitRepo::open(temp.path());
    (temp, repo)
}

/// Create a repository with one commit per message, oldest first
pub fn repo_with_commits(messages: &[&str]) -> (TempDir, GitRepo) {
    let (temp, repo) = init_repo();
    for message in messages {
        commit(temp.path(), message);
    }
    (temp, repo)
}

/// Commit a change to `file.txt` on HEAD
pub fn commit(path: &Path, message: &str) -> Oid {
    let repo = Repository::open(path).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();

    let file = path.join("file.txt");
    let previous = std::fs::read_to_string(&file).unwrap_or_default();
    std::fs::write(&file, format!("{}{}\n", previous, message)).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("file.txt")).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Put a lightweight tag on HEAD
pub fn tag_head(path: &Path, name: &str) {
    let repo = Repository::open(path).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}
