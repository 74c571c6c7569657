//! Allow-list HTML sanitizer for product descriptions.
//!
//! Description cells may contain light formatting typed by whoever maintains
//! the spreadsheet. The fragment is parsed with an HTML5 parser and
//! re-serialized keeping only a handful of formatting tags; everything else
//! is flattened to its text. Anchors keep a validated `href` and always open
//! in a new tab without an opener.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

/// Tags that survive sanitization.
const ALLOWED_TAGS: &[&str] = &["p", "br", "ul", "ol", "li", "strong", "em", "b", "i", "a"];

/// Elements whose content is code or foreign markup rather than readable
/// text. They are dropped together with their content.
const DROPPED_TAGS: &[&str] = &[
    "script", "style", "template", "noscript", "iframe", "object", "embed", "svg", "math",
    "textarea", "title", "xmp", "noembed", "noframes",
];

/// Anchor attributes kept (subject to validation) besides the forced
/// `rel`/`target` pair.
const ANCHOR_ATTRS: &[&str] = &["href", "title"];

static SAFE_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?:|mailto:|tel:)").expect("valid href scheme regex"));

/// Sanitizes an HTML fragment down to the formatting allow-list.
///
/// Returns the trimmed, re-serialized markup. Empty input yields an empty
/// string.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    write_children(fragment.root_element(), &mut out);
    out.trim().to_owned()
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&html_escape::encode_text(&**text)),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, out);
                }
            }
            // Comments, doctypes and processing instructions are dropped.
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_TAGS.contains(&name) {
        return;
    }

    if !ALLOWED_TAGS.contains(&name) {
        let mut text = String::new();
        push_text_content(element, &mut text);
        out.push_str(&html_escape::encode_text(&text));
        return;
    }

    out.push('<');
    out.push_str(name);
    if name == "a" {
        write_anchor_attrs(element, out);
    }
    out.push('>');

    if name == "br" {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_anchor_attrs(element: ElementRef<'_>, out: &mut String) {
    // Attribute storage is unordered, so kept attributes are emitted in
    // ANCHOR_ATTRS order.
    for &attr in ANCHOR_ATTRS {
        let Some(value) = element.value().attr(attr) else {
            continue;
        };
        if attr == "href" && !SAFE_HREF.is_match(value) {
            tracing::debug!(href = value, "dropping anchor href with disallowed scheme");
            continue;
        }
        push_attr(out, attr, value);
    }
    push_attr(out, "rel", "noopener noreferrer");
    push_attr(out, "target", "_blank");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

/// Appends the readable text of `element`, skipping dropped elements.
fn push_text_content(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) if !DROPPED_TAGS.contains(&inner.name()) => {
                if let Some(inner_ref) = ElementRef::wrap(child) {
                    push_text_content(inner_ref, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
