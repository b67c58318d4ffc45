use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use vyatta_config_core::{from_json_str, parse, Leaf, Node, ParseError};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn read_fixture(path: &str) -> String {
    fs::read_to_string(fixture(path)).expect("fixture should be readable")
}

#[test]
fn parses_router_config_into_expected_tree() {
    let parsed = parse(&read_fixture("fixtures/vyos-router.conf")).expect("parse should succeed");
    let expected =
        from_json_str(&read_fixture("fixtures/vyos-router.json")).expect("json should load");

    assert_eq!(parsed, expected);
    assert_eq!(
        parsed.labels(),
        vec!["container", "firewall", "interfaces", "protocols"]
    );
}

#[test]
fn named_and_unnamed_labels() {
    let doc = parse(&read_fixture("fixtures/vyos-router.conf")).expect("parse should succeed");
    let firewall = doc.get("firewall").expect("firewall should exist");

    assert_eq!(
        firewall.labels(),
        vec!["ipv4", "zone LAN", "zone LOCAL", "zone WAN"]
    );
    assert!(doc.get("interfaces").is_some());
}

#[test]
fn flags_parse_to_true_leaves() {
    let doc = parse(&read_fixture("fixtures/vyos-router.conf")).expect("parse should succeed");
    let zone = doc
        .get("firewall")
        .and_then(|fw| fw.get_section("zone LOCAL"))
        .expect("zone LOCAL should exist");

    assert_eq!(zone.get_leaf("local-zone"), Some(&Leaf::Flag));
}

#[test]
fn comment_attaches_to_following_route() {
    let doc = parse(&read_fixture("fixtures/static-route.conf")).expect("parse should succeed");
    let route = doc
        .get_path(&["protocols", "static", "route 0.0.0.0/0"])
        .expect("route should exist");

    let vyatta_config_core::NodeRef::Section(route) = route else {
        panic!("route should be a section");
    };
    assert_eq!(route.comment.as_deref(), Some("/* Default route */"));
    assert_eq!(
        route.get("next-hop"),
        Some(&Node::Leaf(Leaf::Scalar("192.168.1.254".to_string())))
    );

    let statics = doc
        .get("protocols")
        .and_then(|p| p.get_section("static"))
        .expect("static should exist");
    assert_eq!(statics.comment, None);
}

#[test]
fn top_level_comment_attaches_to_first_section_only() {
    let doc =
        parse(&read_fixture("fixtures/vyatta-commented.conf")).expect("parse should succeed");

    let interfaces = doc.get("interfaces").expect("interfaces should exist");
    assert_eq!(
        interfaces.comment.as_deref(),
        Some("/* Vyatta configuration */")
    );
    assert_eq!(
        interfaces
            .get_section("ethernet eth0")
            .and_then(|eth| eth.comment.as_deref()),
        Some("/* Ethernet interface */")
    );
    assert_eq!(doc.get("system").and_then(|s| s.comment.clone()), None);
    assert_eq!(doc.get("protocols").and_then(|s| s.comment.clone()), None);
}

#[test]
fn repeated_keys_become_arrays() {
    let doc = parse(&read_fixture("fixtures/vyos-service.conf")).expect("parse should succeed");
    let allow = doc
        .get_path(&["service", "https", "allow-client", "address"])
        .expect("address should exist");

    assert_eq!(
        allow,
        vyatta_config_core::NodeRef::Leaf(&Leaf::Array(vec![
            "193.19.208.33/29".to_string(),
            "0.0.0.0/0".to_string(),
        ]))
    );
}

#[test]
fn unclosed_block_is_malformed() {
    let err = parse(&read_fixture("fixtures/unclosed.conf")).expect_err("parse should fail");
    assert_eq!(
        err,
        ParseError::UnclosedSection {
            label: "interfaces".to_string(),
            line: 1,
        }
    );
}

#[test]
fn lone_opener_is_malformed() {
    let err = parse("interfaces {").expect_err("parse should fail");
    assert!(matches!(err, ParseError::UnclosedSection { .. }));
    assert_eq!(err.to_string(), "line 1: section 'interfaces' is never closed");
}

#[test]
fn crlf_input_parses_like_lf() {
    let lf = read_fixture("fixtures/static-route.conf");
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(
        parse(&crlf).expect("crlf parse"),
        parse(&lf).expect("lf parse")
    );
}
