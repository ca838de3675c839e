//! Aggregate — grouped statistical views over classified records.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::parser::ClassifiedRecord;

use super::count::Counter;

/// A GET/POST ratio. A zero POST count is a sentinel, never an arithmetic
/// fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Finite(f64),
    Infinity,
}

impl Ratio {
    pub fn of(get: u64, post: u64) -> Self {
        if post == 0 {
            Ratio::Infinity
        } else {
            Ratio::Finite(get as f64 / post as f64)
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole ratios still render with a decimal place (`2.0`).
            Ratio::Finite(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Ratio::Finite(v) => write!(f, "{v}"),
            Ratio::Infinity => write!(f, "infinity"),
        }
    }
}

/// The three report views, each keyed by date string.
///
/// `BTreeMap` keys iterate in ascending lexical order, which is exactly the
/// report's ordering contract: dates are opaque strings and sort as such,
/// not in calendar order.
#[derive(Debug)]
pub struct Aggregates {
    /// Request count per date.
    pub totals: BTreeMap<String, u64>,
    /// Per date, the top-N agents by descending frequency (ties in
    /// first-encounter order).
    pub top_agents: BTreeMap<String, Vec<(String, u64)>>,
    /// Per date, per OS label, the GET/POST ratio. OS labels are the union
    /// of labels seen in GET and in POST records for that date.
    pub ratios: BTreeMap<String, BTreeMap<String, Ratio>>,
}

impl Aggregates {
    /// Single pass over the full record collection; records are immutable
    /// input and the returned views are independent of each other.
    pub fn collect(records: &[ClassifiedRecord], top_n: usize) -> Self {
        let mut totals: BTreeMap<String, u64> = BTreeMap::new();
        let mut agents: BTreeMap<String, Counter> = BTreeMap::new();
        let mut gets: BTreeMap<String, Counter> = BTreeMap::new();
        let mut posts: BTreeMap<String, Counter> = BTreeMap::new();

        for rec in records {
            *totals.entry(rec.date.clone()).or_insert(0) += 1;
            agents.entry(rec.date.clone()).or_default().add(&rec.agent);
            match rec.method.as_str() {
                "GET" => gets.entry(rec.date.clone()).or_default().add(&rec.os),
                "POST" => posts.entry(rec.date.clone()).or_default().add(&rec.os),
                _ => {}
            }
        }

        let top_agents = agents
            .iter()
            .map(|(date, counter)| (date.clone(), counter.top(top_n)))
            .collect();

        let mut ratios: BTreeMap<String, BTreeMap<String, Ratio>> = BTreeMap::new();
        for date in totals.keys() {
            let get = gets.get(date);
            let post = posts.get(date);

            let mut labels: BTreeSet<&str> = BTreeSet::new();
            if let Some(c) = get {
                labels.extend(c.keys());
            }
            if let Some(c) = post {
                labels.extend(c.keys());
            }
            if labels.is_empty() {
                continue;
            }

            let by_os = labels
                .into_iter()
                .map(|os| {
                    let g = get.map(|c| c.get(os)).unwrap_or(0);
                    let p = post.map(|c| c.get(os)).unwrap_or(0);
                    (os.to_string(), Ratio::of(g, p))
                })
                .collect();
            ratios.insert(date.clone(), by_os);
        }

        Self {
            totals,
            top_agents,
            ratios,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, method: &str, agent: &str, os: &str) -> ClassifiedRecord {
        ClassifiedRecord {
            date: date.to_string(),
            method: method.to_string(),
            agent: agent.to_string(),
            os: os.to_string(),
        }
    }

    #[test]
    fn test_totals_by_date() {
        let records = vec![
            rec("10/Oct/2016", "GET", "a", "Windows"),
            rec("10/Oct/2016", "POST", "b", "Windows"),
            rec("11/Oct/2016", "GET", "a", "Linux"),
        ];
        let agg = Aggregates::collect(&records, 3);
        assert_eq!(agg.totals.get("10/Oct/2016"), Some(&2));
        assert_eq!(agg.totals.get("11/Oct/2016"), Some(&1));
    }

    #[test]
    fn test_ratio_finite() {
        let mut records = Vec::new();
        for _ in 0..4 {
            records.push(rec("D", "GET", "a", "Windows"));
        }
        for _ in 0..2 {
            records.push(rec("D", "POST", "a", "Windows"));
        }
        let agg = Aggregates::collect(&records, 3);
        assert_eq!(agg.ratios["D"]["Windows"], Ratio::Finite(2.0));
    }

    #[test]
    fn test_ratio_zero_posts_is_infinity_sentinel() {
        let records = vec![
            rec("D", "GET", "a", "Windows"),
            rec("D", "GET", "a", "Windows"),
            rec("D", "GET", "a", "Windows"),
        ];
        let agg = Aggregates::collect(&records, 3);
        assert_eq!(agg.ratios["D"]["Windows"], Ratio::Infinity);
    }

    #[test]
    fn test_ratio_unions_get_and_post_labels() {
        let records = vec![
            rec("D", "GET", "a", "Windows"),
            rec("D", "POST", "b", "Linux"),
        ];
        let agg = Aggregates::collect(&records, 3);
        let by_os = &agg.ratios["D"];
        assert_eq!(by_os["Windows"], Ratio::Infinity);
        assert_eq!(by_os["Linux"], Ratio::Finite(0.0));
    }

    #[test]
    fn test_non_get_post_methods_count_toward_totals_only() {
        let records = vec![
            rec("D", "HEAD", "a", "Windows"),
            rec("D", "DELETE", "a", "Windows"),
        ];
        let agg = Aggregates::collect(&records, 3);
        assert_eq!(agg.totals["D"], 2);
        assert!(agg.ratios.get("D").is_none());
    }

    #[test]
    fn test_top_n_membership_on_ties() {
        let mut records = Vec::new();
        for (agent, n) in [("A", 5), ("B", 3), ("C", 3), ("E", 1)] {
            for _ in 0..n {
                records.push(rec("D", "GET", agent, ""));
            }
        }
        let agg = Aggregates::collect(&records, 3);
        let top = &agg.top_agents["D"];
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], ("A".to_string(), 5));
        // B and C tie; both make the cut in either order, E is excluded.
        let tied: Vec<&str> = top[1..].iter().map(|(a, _)| a.as_str()).collect();
        assert!(tied.contains(&"B") && tied.contains(&"C"));
    }

    #[test]
    fn test_dates_iterate_in_lexical_order() {
        let records = vec![
            rec("12/Oct/2016", "GET", "a", ""),
            rec("02/Nov/2016", "GET", "a", ""),
            rec("11/Jan/2017", "GET", "a", ""),
        ];
        let agg = Aggregates::collect(&records, 3);
        let dates: Vec<&String> = agg.totals.keys().collect();
        // Lexical, not calendar, order.
        assert_eq!(dates, ["02/Nov/2016", "11/Jan/2017", "12/Oct/2016"]);
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(Ratio::of(4, 2).to_string(), "2.0");
        assert_eq!(Ratio::of(4, 3).to_string(), (4.0f64 / 3.0).to_string());
        assert_eq!(Ratio::of(3, 0).to_string(), "infinity");
        assert_eq!(Ratio::of(0, 2).to_string(), "0.0");
    }
}
