// Domain-driven module structure for the logtally reporter.

// Core pipeline
pub mod classify;
pub mod parser;
pub mod report;
pub mod stats;

// Plumbing
pub mod cli;
pub mod conf;
pub mod ingest;
pub mod runtime;
