//! Escape decoding and URL scheme extraction.
//!
//! URL targets are the arguments of `url(...)`, the bare string arguments of
//! `image-set(...)`, and the string form of `@import`.
//!
//! Checks run on a folded copy of the text: CSS escapes decoded, whitespace
//! and control characters removed, lowercased. The original text is never
//! modified.

/// Decode CSS escapes: `\61` -> `a`, `\;` -> `;`.
pub(crate) fn decode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let mut hex = String::new();
        while hex.len() < 6 {
            match chars.peek() {
                Some(h) if h.is_ascii_hexdigit() => {
                    hex.push(*h);
                    chars.next();
                }
                _ => break,
            }
        }

        if hex.is_empty() {
            match chars.next() {
                Some('\n') | None => {}
                Some(other) => out.push(other),
            }
            continue;
        }

        // One whitespace character terminates a hex escape.
        if matches!(chars.peek(), Some(' ' | '\t' | '\n' | '\r' | '\x0c')) {
            chars.next();
        }
        let decoded = u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .filter(|c| *c != '\0')
            .unwrap_or('\u{FFFD}');
        out.push(decoded);
    }

    out
}

/// Decoded, lowercased, with whitespace and control characters removed.
pub(crate) fn fold_for_matching(text: &str) -> String {
    decode_escapes(text)
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Targets of every `url(...)` in already-folded text.
pub(crate) fn url_targets(folded: &str) -> Vec<&str> {
    let mut targets = Vec::new();
    let mut rest = folded;

    while let Some(pos) = rest.find("url(") {
        let after = &rest[pos + 4..];
        let (target, remaining) = read_target(after, ')');
        targets.push(target);
        rest = remaining;
    }

    targets
}

/// Bare string arguments of every `image-set(...)` (and `-webkit-image-set`)
/// in already-folded text. `url()` arguments are left to [`url_targets`].
pub(crate) fn image_set_targets(folded: &str) -> Vec<&str> {
    let mut targets = Vec::new();
    let mut rest = folded;

    while let Some(pos) = rest.find("image-set(") {
        let mut args = &rest[pos + "image-set(".len()..];
        let mut depth = 1usize;

        while depth > 0 {
            let Some(ch) = args.chars().next() else {
                break;
            };
            match ch {
                '"' | '\'' => {
                    let (target, remaining) = read_target(args, ')');
                    if depth == 1 {
                        targets.push(target);
                    }
                    args = remaining;
                    continue;
                }
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            args = &args[ch.len_utf8()..];
        }

        rest = args;
    }

    targets
}

/// Target of an `@import` prelude written as a bare string.
pub(crate) fn import_string_target(folded: &str) -> Option<&str> {
    if folded.starts_with('"') || folded.starts_with('\'') {
        Some(read_target(folded, ')').0)
    } else {
        None
    }
}

/// Read a quoted target or, unquoted, up to `terminator`.
fn read_target(text: &str, terminator: char) -> (&str, &str) {
    match text.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &text[1..];
            match body.find(quote) {
                Some(end) => (&body[..end], &body[end + 1..]),
                None => (body, ""),
            }
        }
        _ => match text.find(terminator) {
            Some(end) => (&text[..end], &text[end + 1..]),
            None => (text, ""),
        },
    }
}

/// Scheme of `url`, if it has one.
///
/// A `:` after a `/`, `?` or `#` belongs to a relative path, not a scheme.
pub(crate) fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let head = &url[..colon];
    if head.contains(['/', '?', '#']) {
        return None;
    }
    Some(head)
}
