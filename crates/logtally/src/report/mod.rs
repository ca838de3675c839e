//! Plain-text rendering of the aggregated views.
//!
//! Pure formatting: fixed-width left-justified columns, one table per view,
//! rows in the date order the aggregator already established. No business
//! logic lives here.

use std::io::{self, Write};

use crate::stats::Aggregates;

const DATE_WIDTH: usize = 12;
const AGENT_WIDTH: usize = 84;
const OS_WIDTH: usize = 40;
const COUNT_WIDTH: usize = 8;

/// Write the three report tables to `out`, in fixed order: totals, top-N
/// agents, GET/POST ratios. Each table gets a header line framed by blank
/// lines.
pub fn render(agg: &Aggregates, top_n: usize, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total requests by date:")?;
    writeln!(out)?;
    for (date, count) in &agg.totals {
        writeln!(out, "{date:<DATE_WIDTH$}{count:<COUNT_WIDTH$}")?;
    }

    writeln!(out)?;
    writeln!(out, "Top {top_n} common agents by date:")?;
    writeln!(out)?;
    for (date, agents) in &agg.top_agents {
        for (agent, count) in agents {
            writeln!(out, "{date:<DATE_WIDTH$}{agent:<AGENT_WIDTH$}{count:<COUNT_WIDTH$}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "GET/POST ratio by OS by date:")?;
    writeln!(out)?;
    for (date, by_os) in &agg.ratios {
        for (os, ratio) in by_os {
            let ratio = ratio.to_string();
            writeln!(out, "{date:<DATE_WIDTH$}{os:<OS_WIDTH$}{ratio:<COUNT_WIDTH$}")?;
        }
    }

    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────
