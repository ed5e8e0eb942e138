//! Integration tests for resource injection.
//!
//! Tests cover:
//! 1. Script nodes carry the exact tag and attribute set
//! 2. Stylesheet nodes carry the exact tag and attribute set
//! 3. Nodes land in call order at the end of the body
//! 4. No deduplication — same href twice yields two nodes
//! 5. A document without a body drops the request silently
//! 6. Dropped requests are not replayed when the body appears
//! 7. Hrefs pass through verbatim, validated or not

use aviary_shell::inject::{InMemoryDocument, ResourceInjector};

// ─── Test 1: script node shape ───────────────────────────────────────────────

#[test]
fn add_script_appends_one_script_node() {
    let mut injector = ResourceInjector::new(InMemoryDocument::new());

    injector.add_script("app/boot.js");

    let body = injector.document().body().unwrap();
    assert_eq!(body.len(), 1);
    let node = &body[0];
    assert_eq!(node.tag, "script");
    assert_eq!(node.attribute("type"), Some("text/javascript"));
    assert_eq!(node.attribute("src"), Some("app/boot.js"));
    assert_eq!(node.attributes.len(), 2, "no extra attributes");
}

// ─── Test 2: stylesheet node shape ───────────────────────────────────────────

#[test]
fn add_stylesheet_appends_one_link_node() {
    let mut injector = ResourceInjector::new(InMemoryDocument::new());

    injector.add_stylesheet("themes/night.css");

    let body = injector.document().body().unwrap();
    assert_eq!(body.len(), 1);
    let node = &body[0];
    assert_eq!(node.tag, "link");
    assert_eq!(node.attribute("rel"), Some("stylesheet"));
    assert_eq!(node.attribute("type"), Some("text/css"));
    assert_eq!(node.attribute("href"), Some("themes/night.css"));
    assert_eq!(node.attributes.len(), 3, "no extra attributes");
}

// ─── Test 3: call order preserved ────────────────────────────────────────────

#[test]
fn nodes_append_in_call_order() {
    let mut injector = ResourceInjector::new(InMemoryDocument::new());

    injector.add_script("a.js");
    injector.add_stylesheet("b.css");
    injector.add_script("c.js");

    let body = injector.document().body().unwrap();
    let tags: Vec<&str> = body.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, ["script", "link", "script"]);
    assert_eq!(body[2].attribute("src"), Some("c.js"), "newest node is last");
}

// ─── Test 4: no deduplication ────────────────────────────────────────────────

#[test]
fn same_href_twice_yields_two_nodes() {
    let mut injector = ResourceInjector::new(InMemoryDocument::new());

    injector.add_script("a.js");
    injector.add_script("a.js");

    let body = injector.document().body().unwrap();
    assert_eq!(body.len(), 2, "injection never deduplicates");
    assert_eq!(body[0], body[1]);
}

// ─── Test 5: missing body is a silent no-op ──────────────────────────────────

#[test]
fn missing_body_drops_request_without_panicking() {
    let mut injector = ResourceInjector::new(InMemoryDocument::detached());

    injector.add_script("a.js");
    injector.add_stylesheet("b.css");

    assert!(injector.document().body().is_none(), "no body was conjured");
}

// ─── Test 6: dropped requests stay dropped ───────────────────────────────────

#[test]
fn late_body_does_not_replay_dropped_requests() {
    let mut injector = ResourceInjector::new(InMemoryDocument::detached());

    injector.add_script("early.js");
    injector.document_mut().attach_body();

    assert_eq!(
        injector.document().body().unwrap().len(),
        0,
        "the early request was permanently dropped"
    );

    injector.add_script("late.js");
    let body = injector.document().body().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].attribute("src"), Some("late.js"));
}

// ─── Test 7: hrefs are passed through verbatim ───────────────────────────────

#[test]
fn hrefs_are_not_validated() {
    let mut injector = ResourceInjector::new(InMemoryDocument::new());

    for href in ["", "   ", "not a uri", "https://example.com/x.js?v=1#frag"] {
        injector.add_script(href);
    }

    let body = injector.document().body().unwrap();
    assert_eq!(body.len(), 4);
    assert_eq!(body[0].attribute("src"), Some(""));
    assert_eq!(body[1].attribute("src"), Some("   "));
    assert_eq!(body[2].attribute("src"), Some("not a uri"));
    assert_eq!(
        body[3].attribute("src"),
        Some("https://example.com/x.js?v=1#frag")
    );
}
