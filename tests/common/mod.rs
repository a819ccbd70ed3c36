// Shared helpers for building throwaway git repositories
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

pub fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");
    (temp_dir, repo)
}

fn signature(time: i64) -> Signature<'static> {
    Signature::new("Test User", "test@example.com", &Time::new(time, 0))
        .expect("Could not create signature")
}

/// Commit an empty tree on top of HEAD with the given committer time
pub fn commit(repo: &Repository, message: &str, time: i64) -> Oid {
    let sig = signature(time);
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parents: Vec<Commit<'_>> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("Could not peel HEAD")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Could not create commit")
}

pub fn tag_lightweight(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

pub fn tag_annotated(repo: &Repository, name: &str, oid: Oid, time: i64) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag(name, &object, &signature(time), "release", false)
        .expect("Could not create annotated tag");
}
