//! Tests for the outer-markup entry points.

use facet_testhelpers::test;
use outer_html::{
    Document, OuterHtmlError, OuterHtmlOptions, VOID_TAGS, outer_html, outer_html_preserving,
    parse, parse_fragment,
};

fn strip_indentation(code: &str) -> String {
    code.replace("\r\n", "").replace('\t', "")
}

#[test]
fn test_flat_is_default() {
    let html = r#"<div class="a"><p>One<br>Two</p><input type="text"></div>"#;

    let mut doc = parse_fragment(html);
    let div = doc.top_level_elements()[0];
    let with_none = outer_html(&mut doc, div, None).unwrap();
    let with_default = outer_html(&mut doc, div, Some(&OuterHtmlOptions::default())).unwrap();
    let explicit = OuterHtmlOptions::from_json(r#"{"indent": false}"#).unwrap();
    let with_explicit = outer_html(&mut doc, div, Some(&explicit)).unwrap();

    assert_eq!(with_none, html);
    assert_eq!(with_none, with_default);
    assert_eq!(with_none, with_explicit);
}

#[test]
fn test_flat_is_repeatable_and_leaves_tree_alone() {
    let mut doc = parse_fragment("<section><h1>T</h1><hr><p>a <b>b</b></p></section>");
    let section = doc.top_level_elements()[0];
    let shape_before = doc.dump(doc.document).to_string();

    let first = outer_html(&mut doc, section, None).unwrap();
    let second = outer_html(&mut doc, section, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "<section><h1>T</h1><hr><p>a <b>b</b></p></section>");
    assert_eq!(doc.dump(doc.document).to_string(), shape_before);
}

#[test]
fn test_no_void_end_tags_survive() {
    let mut doc = Document::new();
    let root = doc.append_element(doc.document, "div");
    for tag in VOID_TAGS {
        doc.append_element(root, tag);
    }

    let flat = outer_html(&mut doc, root, None).unwrap();
    let indented = doc.to_html_indented(root).unwrap();
    for tag in VOID_TAGS {
        let end_tag = format!("</{tag}>");
        assert!(!flat.contains(&end_tag), "{end_tag} in {flat}");
        assert!(!indented.contains(&end_tag), "{end_tag} in {indented}");
        assert!(flat.contains(&format!("<{tag}>")));
    }
}

#[test]
fn test_depth_tabs() {
    let mut doc = Document::new();
    let a = doc.append_element(doc.document, "div");
    let b = doc.append_element(a, "section");
    let c = doc.append_element(b, "p");
    doc.append_text(c, "deep");

    let code = doc.to_html_indented(a).unwrap();
    assert_eq!(
        code,
        "\r\n<div>\r\n\t<section>\r\n\t\t<p>deep</p>\r\n\t</section>\r\n</div>"
    );
    assert!(code.contains("\r\n<div>"));
    assert!(code.contains("\r\n\t<section>"));
    assert!(code.contains("\r\n\t\t<p>"));
}

#[test]
fn test_leaf_and_branch_suffix() {
    let mut doc = parse_fragment("<ul><li>text only</li><li><em>x</em></li><li></li></ul>");
    let ul = doc.top_level_elements()[0];
    let code = doc.to_html_indented(ul).unwrap();
    assert_eq!(
        code,
        concat!(
            "\r\n<ul>",
            "\r\n\t<li>text only</li>",
            "\r\n\t<li>\r\n\t\t<em>x</em>\r\n\t</li>",
            "\r\n\t<li></li>",
            "\r\n</ul>"
        )
    );
}

#[test]
fn test_indented_matches_flat_without_whitespace() {
    let cases = [
        "<div><span>hi</span></div>",
        r#"<table><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"#,
        r#"<form action="/go"><label>Name <input name="n"></label><br><button>Go</button></form>"#,
        "<nav><a href=\"/\">Home</a><a href=\"/x?a=1&amp;b=2\">X</a></nav>",
    ];
    for html in cases {
        let mut doc = parse_fragment(html);
        let root = doc.top_level_elements()[0];
        let flat = outer_html(&mut doc, root, None).unwrap();
        let indented = doc.to_html_indented(root).unwrap();
        assert_eq!(strip_indentation(&indented), flat, "for {html}");
    }
}

#[test]
fn test_div_span_example() {
    let mut doc = parse_fragment("<div><span>hi</span></div>");
    let div = doc.top_level_elements()[0];
    let opts = OuterHtmlOptions::new().indent();
    assert_eq!(
        doc.outer_html(div, &opts).unwrap(),
        "\r\n<div>\r\n\t<span>hi</span>\r\n</div>"
    );
}

#[test]
fn test_depth_counts_from_document_root() {
    // html > body > div: the div sits two elements deep
    let mut doc = parse("<html><body><div><p>x</p></div></body></html>");
    let div = doc.first_element_by_tag("div").unwrap();
    let code = doc.to_html_indented(div).unwrap();
    assert_eq!(code, "\r\n\t\t<div>\r\n\t\t\t<p>x</p>\r\n\t\t</div>");
}

#[test]
fn test_indent_mutates_tree() {
    let mut doc = parse("<html><body><div><p>x</p></div></body></html>");
    let body = doc.first_element_by_tag("body").unwrap();
    let div = doc.first_element_by_tag("div").unwrap();
    doc.to_html_indented(div).unwrap();

    // The div's own leading whitespace now sits in <body>
    assert_eq!(
        doc.to_html(body).unwrap(),
        "<body>\r\n\t\t<div>\r\n\t\t\t<p>x</p>\r\n\t\t</div></body>"
    );
    // Indenting again piles more whitespace on
    let twice = doc.to_html_indented(div).unwrap();
    assert_eq!(
        twice,
        "\r\n\t\t<div>\r\n\t\t\t\r\n\t\t\t<p>x</p>\r\n\t\t\r\n\t\t</div>"
    );
}

#[test]
fn test_preserving_leaves_tree_alone() {
    let doc = parse_fragment("<div><span>hi</span></div>");
    let div = doc.top_level_elements()[0];
    let shape_before = doc.dump(doc.document).to_string();

    let opts = OuterHtmlOptions::new().indent();
    let first = outer_html_preserving(&doc, div, &opts).unwrap();
    let second = outer_html_preserving(&doc, div, &opts).unwrap();

    assert_eq!(first, "\r\n<div>\r\n\t<span>hi</span>\r\n</div>");
    assert_eq!(first, second);
    assert_eq!(doc.dump(doc.document).to_string(), shape_before);
}

#[test]
fn test_invalid_handles_are_rejected() {
    let mut doc = parse_fragment("<p>text<!-- c --></p>");
    let p = doc.top_level_elements()[0];
    let children: Vec<_> = doc.children(p).collect();

    for id in [doc.document, children[0], children[1]] {
        let err = outer_html(&mut doc, id, None).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(matches!(err, OuterHtmlError::NotAnElement { .. }));
    }

    p.remove_subtree(&mut doc.arena);
    let err = doc.to_html_indented(p).unwrap_err();
    assert!(matches!(err, OuterHtmlError::RemovedNode { .. }));
}

#[test]
fn test_stale_handle_after_slot_reuse() {
    let mut doc = parse_fragment("<div><p></p><q>x</q></div>");
    let div = doc.top_level_elements()[0];
    let children = doc.child_elements(div);
    let (p, q) = (children[0], children[1]);
    p.remove_subtree(&mut doc.arena);

    // Serializing allocates (and frees) a placeholder; the span then takes
    // the slot `p` used to live in
    assert_eq!(outer_html(&mut doc, q, None).unwrap(), "<q>x</q>");
    let span = doc.append_element(div, "span");

    let err = outer_html(&mut doc, p, None).unwrap_err();
    assert!(err.is_invalid_argument(), "{err:?}");
    assert!(matches!(err, OuterHtmlError::RemovedNode { .. }));
    assert_eq!(doc.to_html(span).unwrap(), "<span></span>");
}

#[test]
fn test_handle_from_another_document() {
    let big = parse_fragment("<div><p>1</p><p>2</p><p>3</p></div>");
    let div = big.top_level_elements()[0];
    let far = big.descendant_elements(div).pop().unwrap();

    let mut small = Document::new();
    let err = outer_html(&mut small, far, None).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_serialize_detached_subtree() {
    let mut doc = parse_fragment("<div><p>a</p><p>b</p></div>");
    let div = doc.top_level_elements()[0];
    let second = doc.child_elements(div)[1];
    doc.detach(second);

    assert_eq!(doc.to_html(second).unwrap(), "<p>b</p>");
    assert_eq!(doc.parent(second), None);
    assert_eq!(doc.to_html(div).unwrap(), "<div><p>a</p></div>");
}

#[test]
fn test_attributes_are_kept_in_order() {
    let mut doc = Document::new();
    let a = doc.append_element(doc.document, "a");
    doc.set_attr(a, "href", "/x?a=1&b=2").unwrap();
    doc.set_attr(a, "title", "Say \"hi\"").unwrap();
    doc.append_text(a, "x < y");

    assert_eq!(
        doc.to_html(a).unwrap(),
        r#"<a href="/x?a=1&amp;b=2" title="Say &quot;hi&quot;">x &lt; y</a>"#
    );
}
