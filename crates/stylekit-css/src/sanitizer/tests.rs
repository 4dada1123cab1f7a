//! End-to-end sanitizer behavior.

use super::*;
use crate::policy::SanitizerLimits;

#[test]
fn braces_in_strings_survive_and_behavior_is_removed() {
    let out = sanitize(".foo::before { content: \"{\"; behavior: url(http://evil); }");
    assert_eq!(out, ".foo::before {content:\"{\"}");
    assert!(!out.contains("behavior"));

    let out = sanitize(".foo::before { content: \"{}\"; behavior: url(http://evil); }");
    assert_eq!(out, ".foo::before {content:\"{}\"}");
    assert!(!out.contains("behavior"));
}

#[test]
fn declaration_list_is_preserved() {
    assert_eq!(
        sanitize(".example { color: red; background-color: blue; }"),
        ".example {color:red; background-color:blue}"
    );
}

#[test]
fn unsafe_url_collapses_rule_to_bare_selector() {
    assert_eq!(sanitize("div { background: url(\"javascript:alert(1)\"); }"), "div");
    assert_eq!(sanitize(".img { filter: url(\"javascript:alert(1)\"); }"), ".img");
}

#[test]
fn parens_inside_quoted_url_survive() {
    assert_eq!(
        sanitize("div { background: url(\"https://example.com/image(1).png\"); }"),
        "div {background:url(\"https://example.com/image(1).png\")}"
    );
}

#[test]
fn stripped_tags_leave_inner_text() {
    assert_eq!(
        sanitize(".safe { color: red; }<script>alert(1)</script>"),
        ".safe {color:red}alert(1)"
    );
}

#[test]
fn semicolons_in_strings_survive() {
    assert_eq!(
        sanitize(".q { content: \";\"; quotes: 'foo;bar' 'x' }"),
        ".q {content:\";\"; quotes:'foo;bar' 'x'}"
    );
}

#[test]
fn comments_are_removed() {
    assert_eq!(
        sanitize("/* header */\n:root {\n  /* note */\n  --commented-token: 42px;\n}\n"),
        ":root {--commented-token:42px}"
    );
}

#[test]
fn at_rules_are_serialized_compactly() {
    assert_eq!(
        sanitize("@media (max-width: 600px) {\n  .a { color: red; }\n}\n@import url(https://a.test/x.css);"),
        "@media (max-width: 600px) {.a {color:red}}@import url(https://a.test/x.css);"
    );
}

#[test]
fn empty_and_whitespace_input() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("   \n\t "), "");
    assert_eq!(sanitize("/* only a comment */"), "");
}

#[test]
fn sanitize_is_idempotent() {
    let inputs = [
        ".example { color: red; background-color: blue; }",
        "div { background: url(\"javascript:alert(1)\"); } .b { color: red }",
        "div { behavior: x } @media print { .a { color: red } }",
        "<style>.a{color:red}</style><script>x</script>",
        "@import url(a.css) screen; .a { width: calc(100% - (2 * 10px)) }",
        "a /* c */ { b : c }",
        ".x { content: \"\\\"}\" }",
        "foo; bar { a: b }",
        "@font-face { font-family: \"X\"; src: url(x.woff) }",
        ".a { color: red",
        "a{b:c}}}}d{e:f}",
        "//**/* {}",
        ".a{x:1}<<b>script>",
        "@media screen { .a { color: red } stray }",
        "div {} @media x {}",
        ".safe { color: red; }<script>alert(1)</script>",
        ":root { --a: 1px; --b: \"x;y\"; } [data-theme=\"dark\"] { --a: 2px }",
        ".a { width: f(g(h(i(j(1))))) }",
        "@charset \"utf-8\"; div {} @charset \"x\";",
        "div { background: url(javascript:x) } p { color: red }",
        "a { behavior: x } b { behavior: y } @media print { c { color: red } }",
        "ur { a: url(javascript:y) } l(javascript:x) { b: 1 } .ok { c: d }",
        "a/ { behavior: x } *b { c: d }",
        "f( { behavior: x } @import url(https://a.test/a.css);",
    ];

    for input in inputs {
        let once = sanitize(input);
        let twice = sanitize(&once);
        assert_eq!(twice, once, "not idempotent for input {input:?}");
    }
}

#[test]
fn output_never_contains_denied_content() {
    let inputs = [
        ".a { behavior: url(x.htc) }",
        ".a { -moz-binding: url(x.xml#xss) }",
        ".a { background: url(javascript:alert(1)) }",
        ".a { background: url('vbscript:x') }",
        ".a { width: expression(alert(1)) }",
        "@import 'javascript:alert(1)';",
        "@import url(data:text/css,x);",
    ];

    for input in inputs {
        let out = sanitize(input).to_lowercase();
        assert!(!out.contains("behavior"), "{input:?} -> {out:?}");
        assert!(!out.contains("binding"), "{input:?} -> {out:?}");
        assert!(!out.contains("javascript:"), "{input:?} -> {out:?}");
        assert!(!out.contains("vbscript:"), "{input:?} -> {out:?}");
        assert!(!out.contains("expression("), "{input:?} -> {out:?}");
        assert!(!out.contains("data:"), "{input:?} -> {out:?}");
    }
}

#[test]
fn custom_policy_extends_deny_list() {
    let sanitizer =
        CssSanitizer::new(SanitizerPolicy::default().with_denied_properties(["position"]));
    assert_eq!(
        sanitizer.sanitize(".a { position: fixed; color: red }"),
        ".a {color:red}"
    );
}

#[test]
fn custom_policy_can_allow_data_urls() {
    let sanitizer =
        CssSanitizer::new(SanitizerPolicy::default().with_url_schemes(["http", "https", "data"]));
    assert_eq!(
        sanitizer.sanitize(".a { background: url(data:image/png;base64,AA) }"),
        ".a {background:url(data:image/png;base64,AA)}"
    );
}

#[test]
fn oversized_input_is_truncated_not_rejected() {
    let policy = SanitizerPolicy::default().with_limits(SanitizerLimits {
        max_input_bytes: 24,
        ..SanitizerLimits::default()
    });
    let sanitizer = CssSanitizer::new(policy);
    assert_eq!(
        sanitizer.sanitize(".a { color: red; } .b { color: blue; }"),
        ".a {color:red}.b"
    );
}

#[test]
fn sanitize_value_accepts_plain_values() {
    let sanitizer = CssSanitizer::default();
    assert_eq!(sanitizer.sanitize_value("#123456"), Some("#123456".into()));
    assert_eq!(
        sanitizer.sanitize_value("  0 1px 2px rgba(0, 0, 0, .2) "),
        Some("0 1px 2px rgba(0, 0, 0, .2)".into())
    );
    assert_eq!(
        sanitizer.sanitize_value("\"Inter\", sans-serif"),
        Some("\"Inter\", sans-serif".into())
    );
}

#[test]
fn sanitize_value_strips_markup() {
    let sanitizer = CssSanitizer::default();
    assert_eq!(sanitizer.sanitize_value("<b>bold</b>"), Some("bold".into()));
}

#[test]
fn sanitize_value_rejects_breakouts() {
    let sanitizer = CssSanitizer::default();
    assert_eq!(sanitizer.sanitize_value("red; color: blue"), None);
    assert_eq!(sanitizer.sanitize_value("1px } body { color: red"), None);
    assert_eq!(sanitizer.sanitize_value("url(javascript:alert(1))"), None);
    assert_eq!(sanitizer.sanitize_value("\"unterminated"), None);
    assert_eq!(sanitizer.sanitize_value("   "), None);
}

#[test]
fn nested_tag_payload_near_input_limit_is_fast() {
    let n = 349_000;
    let input = format!("{}{}", "<".repeat(n), "a>".repeat(n));
    assert!(input.len() <= SanitizerLimits::default().max_input_bytes);

    let started = std::time::Instant::now();
    assert_eq!(sanitize(&input), "");
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
}

#[test]
fn dropped_rule_leaves_selector_without_separator() {
    let out = sanitize("div { background: url(javascript:x) } p { color: red }");
    assert_eq!(out, "divp {color:red}");
    assert_eq!(sanitize(&out), out);
}
