//! Whole-input HTML tag stripping.
//!
//! Tags are removed, their inner text is kept: `<script>alert(1)</script>`
//! becomes `alert(1)`. Callers that splice the result into HTML outside a
//! `<style>` element must escape it themselves.

/// Characters that turn a preceding `<` into a tag opener (`<a`, `</`, `<!`, `<?`).
fn opens_tag(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '/' | '!' | '?')
}

/// Remove every HTML tag from `input`, keeping text between tags.
///
/// A tag runs from its opener to the next `>` or end of input. The check is
/// made against the output, so `<<b>script>` cannot reassemble into a tag
/// once `<b>` is gone. One pass, linear in the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        if in_tag {
            in_tag = ch != '>';
            continue;
        }
        if opens_tag(ch) && out.ends_with('<') {
            out.pop();
            in_tag = true;
            continue;
        }
        out.push(ch);
    }

    out
}
