use html::debug::outline;
use html::{Dom, TreeBuilderConfig, parse, parse_with_config};

fn tree(source: &str) -> Vec<String> {
    let dom = parse(source).expect("parse");
    outline(&dom, usize::MAX)
}

fn child_names(dom: &Dom, id: html::Id) -> Vec<String> {
    dom.children(id)
        .map(|n| match n.tag_name() {
            Some(name) => name.to_string(),
            None => format!("#text({})", n.text().unwrap_or("")),
        })
        .collect()
}

#[test]
fn well_formed_nesting_lands_under_body() {
    assert_eq!(
        tree("<a><b>x</b></a>"),
        vec![
            "<html>",
            "  <body>",
            "    <a>",
            "      <b>",
            "        \"x\"",
        ]
    );
}

#[test]
fn root_is_always_html() {
    for source in ["", "x", "<p>", "</p>", "<title>t</title>", "<!doctype html>", "<html>"] {
        let dom = parse(source).unwrap();
        assert_eq!(dom.root_node().tag_name(), Some("html"), "source: {source:?}");
        assert_eq!(dom.root_node().parent, None);
    }
}

#[test]
fn empty_input_yields_html_with_body() {
    assert_eq!(tree(""), vec!["<html>", "  <body>"]);
}

#[test]
fn head_only_tag_goes_into_implied_head() {
    assert_eq!(
        tree("<title>t</title>"),
        vec!["<html>", "  <head>", "    <title>", "      \"t\""]
    );
}

#[test]
fn body_follows_head_when_content_follows() {
    let dom = parse("<title>t</title><p>hello</p>").unwrap();
    assert_eq!(child_names(&dom, dom.root()), vec!["head", "body"]);
    assert_eq!(
        outline(&dom, usize::MAX),
        vec![
            "<html>",
            "  <head>",
            "    <title>",
            "      \"t\"",
            "  <body>",
            "    <p>",
            "      \"hello\"",
        ]
    );
}

#[test]
fn text_after_head_tag_closes_head() {
    assert_eq!(
        tree("<meta charset=utf-8>Hello"),
        vec![
            "<html>",
            "  <head>",
            "    <meta charset=\"utf-8\">",
            "  <body>",
            "    \"Hello\"",
        ]
    );
}

#[test]
fn explicit_structure_is_not_duplicated() {
    assert_eq!(
        tree("<html><head><style>p{}</style></head><body><p>x</p></body></html>"),
        vec![
            "<html>",
            "  <head>",
            "    <style>",
            "      \"p{}\"",
            "  <body>",
            "    <p>",
            "      \"x\"",
        ]
    );
}

#[test]
fn explicit_body_after_open_head_closes_head() {
    let dom = parse("<head><link rel=x><body>b").unwrap();
    assert_eq!(child_names(&dom, dom.root()), vec!["head", "body"]);
}

#[test]
fn unmatched_close_tag_closes_top_element() {
    assert_eq!(
        tree("<div>hello</span>after"),
        vec![
            "<html>",
            "  <body>",
            "    <div>",
            "      \"hello\"",
            "    \"after\"",
        ]
    );
}

#[test]
fn close_tags_never_pop_the_root() {
    assert_eq!(
        tree("</x></y></z>text"),
        vec![
            "<html>",
            "  <body>",
            "  <body>",
            "  <body>",
            "  <body>",
            "    \"text\"",
        ]
    );
}

#[test]
fn self_closing_tags_are_siblings_not_parents() {
    let dom = parse("<img><p>x</p>").unwrap();
    let body = dom.find_first_element("body").unwrap();
    assert_eq!(child_names(&dom, body.id), vec!["img", "p"]);
    let img = dom.find_first_element("img").unwrap();
    assert!(img.children.is_empty());
}

#[test]
fn br_inside_paragraph_does_not_swallow_following_text() {
    assert_eq!(
        tree("<p>one<br>two</p>"),
        vec![
            "<html>",
            "  <body>",
            "    <p>",
            "      \"one\"",
            "      <br>",
            "      \"two\"",
        ]
    );
}

#[test]
fn comments_and_doctype_produce_no_nodes() {
    assert_eq!(
        tree("<!DOCTYPE html><!-- note --><p>x</p>"),
        vec!["<html>", "  <body>", "    <p>", "      \"x\""]
    );
}

#[test]
fn unclosed_elements_are_closed_at_end_of_input() {
    assert_eq!(
        tree("<ul><li>one<li>two"),
        vec![
            "<html>",
            "  <body>",
            "    <ul>",
            "      <li>",
            "        \"one\"",
            "        <li>",
            "          \"two\"",
        ]
    );
}

#[test]
fn tag_names_and_attribute_keys_are_lowercased() {
    let dom = parse("<DIV ID=Main>x</DIV>").unwrap();
    let div = dom.find_first_element("div").unwrap();
    assert_eq!(div.tag_name(), Some("div"));
    assert_eq!(div.attr("id"), Some("Main"));
}

#[test]
fn attribute_values_keep_quotes_by_default() {
    let dom = parse(r#"<a href="x.html">link</a>"#).unwrap();
    let a = dom.find_first_element("a").unwrap();
    assert_eq!(a.attr("href"), Some("\"x.html\""));
}

#[test]
fn attribute_quotes_stripped_when_configured() {
    let config = TreeBuilderConfig {
        strip_attribute_quotes: true,
        ..TreeBuilderConfig::default()
    };
    let dom = parse_with_config(r#"<a href="x.html" title='t'>link</a>"#, config).unwrap();
    let a = dom.find_first_element("a").unwrap();
    assert_eq!(a.attr("href"), Some("x.html"));
    assert_eq!(a.attr("title"), Some("t"));
}

#[test]
fn duplicate_attributes_keep_the_later_value() {
    let dom = parse("<p a=1 b=2 a=3>x</p>").unwrap();
    let p = dom.find_first_element("p").unwrap();
    let attrs: Vec<(&str, &str)> = p.attributes().unwrap().iter().collect();
    assert_eq!(attrs, vec![("a", "3"), ("b", "2")]);
}
