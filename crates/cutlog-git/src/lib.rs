//! cutlog git - git history reading for changelog generation
//!
//! Shells out to the `git` executable to list release tags and commit
//! subjects. Failures never propagate: a git invocation that cannot run or
//! exits non-zero reads as empty output.

mod commits;
mod repository;
mod tags;

#[cfg(test)]
pub(crate) mod testing;

pub use repository::GitRepo;
