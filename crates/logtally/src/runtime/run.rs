//! Run — the batch extract/classify/aggregate pipeline.

use std::error::Error;
use std::io;

use tracing::{error, info, warn};

use crate::classify::OsClassifier;
use crate::cli::Cli;
use crate::conf::ReportConfig;
use crate::ingest;
use crate::parser::{validate, ClassifiedRecord, FieldExtractor};
use crate::report;
use crate::stats::Aggregates;

/// Execute one full run: load config, ingest every log file, collect the
/// valid classified records, aggregate, and print the reports to stdout.
///
/// Configuration and pattern failures are fatal and surface as the returned
/// error before any file is read. A file that cannot be read is logged and
/// skipped; a line the pattern rejects is logged and excluded. Neither
/// aborts the run.
pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = ReportConfig::from_file(&cli.conf)?;
    let extractor = FieldExtractor::new(&config.pattern)?;
    let classifier = OsClassifier::new(&config.os, &config.bots);

    let mut records = Vec::new();
    for path in &cli.logs {
        let lines = match ingest::read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                error!("Unable to read log file {}: {}", path.display(), e);
                continue;
            }
        };
        info!("Read {} lines from {}", lines.len(), path.display());
        process_lines(&extractor, &classifier, &lines, &mut records);
    }
    info!("Collected {} valid records", records.len());

    let aggregates = Aggregates::collect(&records, cli.top);
    let stdout = io::stdout();
    report::render(&aggregates, cli.top, &mut stdout.lock())?;
    Ok(())
}

/// Extract, validate, and classify each line, appending the survivors.
fn process_lines(
    extractor: &FieldExtractor,
    classifier: &OsClassifier,
    lines: &[String],
    records: &mut Vec<ClassifiedRecord>,
) {
    for line in lines {
        let Some(record) = extractor.extract(line) else {
            warn!("Unparsed line: {}", line);
            continue;
        };
        if !validate::is_valid(&record) {
            // Extraction already matched the line; a failed range check is
            // dropped without further diagnostics.
            continue;
        }
        let os = classifier.classify(&record.agent);
        records.push(record.with_os(os));
    }
}

// ── Tests ───────────────────────────────────────────────────────
