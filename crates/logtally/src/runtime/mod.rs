//! Process plumbing: logging init and pipeline orchestration.

pub mod boot;
pub mod run;
