use std::borrow::Cow;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks domain syntax: dot-separated labels of `[a-zA-Z0-9-]`, 1-63 bytes
/// each, no leading or trailing hyphen, at most 253 bytes overall.
///
/// Single-label domains such as `corp` are only accepted when
/// `allow_single_label` is set. Does not fold case; callers lowercase first.
pub fn is_valid_domain(domain: &str, allow_single_label: bool) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let mut labels = 0usize;
    for label in domain.split('.') {
        if !is_valid_label(label.as_bytes()) {
            return false;
        }
        labels += 1;
    }

    allow_single_label || labels > 1
}

fn is_valid_label(label: &[u8]) -> bool {
    match (label.first(), label.last()) {
        (None, _) | (Some(b'-'), _) | (_, Some(b'-')) => false,
        _ => {
            label.len() <= MAX_LABEL_LEN
                && label.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
        }
    }
}

/// Pulls the domain out of an email field and lowercases it.
///
/// The field is trimmed and split at the last `@`, so `a@b@c` yields `c`.
/// A quoted value the CSV reader left intact (` "a@b.com"`) is unquoted first.
/// Returns `None` when there is no `@`, the local part is empty, the domain
/// is empty, or the field holds control bytes such as a line break. Borrows
/// from `email` unless unquoting or ASCII case folding is needed.
pub fn extract_domain(email: &str) -> Option<Cow<'_, str>> {
    match unquote(email.trim()) {
        Cow::Borrowed(field) => domain_part(field).map(fold_case),
        Cow::Owned(field) => domain_part(&field).map(|d| Cow::Owned(d.to_ascii_lowercase())),
    }
}

fn domain_part(field: &str) -> Option<&str> {
    let field = field.trim();
    // Line breaks mean an unbalanced quote swallowed the following lines.
    if field.bytes().any(|b| b.is_ascii_control()) {
        return None;
    }

    let at = field.rfind('@')?;
    if at == 0 || at + 1 >= field.len() {
        return None;
    }
    Some(&field[at + 1..])
}

fn fold_case(domain: &str) -> Cow<'_, str> {
    if domain.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(domain.to_ascii_lowercase())
    } else {
        Cow::Borrowed(domain)
    }
}

/// Strips one pair of enclosing double quotes and collapses `""` to `"`.
///
/// The CSV reader only honours a quote at the very start of a field, so
/// `name, "email"` reaches us as ` "email"`.
pub(crate) fn unquote(field: &str) -> Cow<'_, str> {
    let inner = match field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return Cow::Borrowed(field),
    };

    if inner.contains("\"\"") {
        Cow::Owned(inner.replace("\"\"", "\""))
    } else {
        Cow::Borrowed(inner)
    }
}
