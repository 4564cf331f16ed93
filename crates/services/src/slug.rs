//! Slug derivation for public invitation URLs.
//!
//! Normalization is total over any input; allocation (existence check plus
//! timestamp disambiguation) lives in the invitation DAO because it needs
//! storage access.

use chrono::Utc;

/// Lowercase, whitespace runs become hyphens, everything outside
/// `[a-z0-9-]` is dropped, hyphen runs collapse, ends are trimmed.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !out.is_empty();
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        }
        // Anything else is dropped without breaking the current run.
    }
    out
}

/// What a proposal falls back to when the inputs carry no usable
/// characters, so a later disambiguation suffix never lands on an
/// empty base.
pub const FALLBACK_SLUG: &str = "undangan";

/// Proposed slug for a new invitation: an explicit custom slug wins,
/// otherwise `{groom}-{bride}`, with a fixed fallback when both
/// normalize to nothing.
pub fn propose(groom_name: &str, bride_name: &str, custom: Option<&str>) -> String {
    let proposed = match custom {
        Some(c) if !c.trim().is_empty() => slugify(c),
        _ => slugify(&format!("{} {}", groom_name, bride_name)),
    };
    if proposed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        proposed
    }
}

/// Disambiguation suffix for a taken slug: current time in base-36.
/// No retry loop follows; a same-millisecond collision is accepted risk
/// and caught by the unique index.
pub fn disambiguate(slug: &str) -> String {
    format!("{}-{}", slug, to_base36(Utc::now().timestamp_millis() as u64))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).expect("base36 digits are ASCII")
}
