//! Os — heuristic user-agent to OS mapping.

/// Classification label for bot traffic and unclassifiable agents.
pub const MISC: &str = "misc";

/// Maps a raw user-agent string to a best-guess OS label.
///
/// Works on the first parenthesized comment of the user-agent, split on `;`.
/// Two token lists drive the heuristic, both matched by case-insensitive
/// containment:
///
/// - OS tokens: among the comment fields containing any token, the longest
///   trimmed field wins (ties between equal-length fields are unconstrained).
/// - Bot tokens: the positional candidate field (index 2 when the comment has
///   more than two fields, else the last) is checked; a hit overrides the
///   result to [`MISC`].
pub struct OsClassifier {
    os_tokens: Vec<String>,
    bot_tokens: Vec<String>,
}

impl OsClassifier {
    /// Tokens are stored lowercased so each lookup lowercases only the field.
    pub fn new(os_tokens: &[String], bot_tokens: &[String]) -> Self {
        Self {
            os_tokens: os_tokens.iter().map(|t| t.to_lowercase()).collect(),
            bot_tokens: bot_tokens.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Classify one user-agent string. Never fails: malformed or absent
    /// parenthetical content degrades to an empty label or [`MISC`].
    pub fn classify(&self, agent: &str) -> String {
        let Some(comment) = first_parenthetical(agent) else {
            // Nothing to inspect. Bot mode labels unknown traffic `misc`,
            // OS mode leaves it unclassified.
            return if self.bot_tokens.is_empty() {
                String::new()
            } else {
                MISC.to_string()
            };
        };

        let fields: Vec<&str> = comment.split(';').collect();

        let mut os = String::new();
        for field in &fields {
            let lower = field.to_lowercase();
            if self.os_tokens.iter().any(|t| lower.contains(t.as_str())) {
                let trimmed = field.trim();
                if trimmed.len() > os.len() {
                    os = trimmed.to_string();
                }
            }
        }

        if !self.bot_tokens.is_empty() {
            // split() always yields at least one field, so last() is safe.
            let candidate = if fields.len() > 2 {
                fields[2]
            } else {
                *fields.last().unwrap_or(&"")
            }
            .trim();

            let lower = candidate.to_lowercase();
            if self.bot_tokens.iter().any(|t| lower.contains(t.as_str())) {
                return MISC.to_string();
            }
            if self.os_tokens.is_empty() {
                return candidate.to_string();
            }
        }

        os
    }
}

/// The first `(...)` group of a user-agent, or `None` when absent.
fn first_parenthetical(agent: &str) -> Option<&str> {
    let open = agent.find('(')?;
    let close = agent[open + 1..].find(')')? + open + 1;
    Some(&agent[open + 1..close])
}

// ── Tests ───────────────────────────────────────────────────────
