/// Best-effort OS classification from raw user-agent strings.
///
/// User-agent strings are adversarial input: they can be absent, truncated,
/// or deliberately forged. Classification is therefore never authoritative —
/// it degrades to an empty label or the literal `misc` instead of failing.
pub mod os;

pub use os::OsClassifier;
