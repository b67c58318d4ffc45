use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("fixtures")
        .join(path)
}

fn vyatta_config() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vyatta-config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn inspect_section_to_depth() {
    vyatta_config()
        .arg("inspect")
        .arg(fixture("vyos-router.conf"))
        .arg("--section")
        .arg("interfaces")
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout("interfaces\n  ethernet eth0\n  ethernet eth1\n  loopback lo\n");
}

#[test]
fn inspect_whole_document_lists_every_top_level_section() {
    vyatta_config()
        .arg("inspect")
        .arg(fixture("vyos-router.conf"))
        .arg("--depth")
        .arg("0")
        .assert()
        .success()
        .stdout("container\nfirewall\ninterfaces\nprotocols\n");
}

#[test]
fn inspect_unknown_section_fails() {
    vyatta_config()
        .arg("inspect")
        .arg(fixture("vyos-router.conf"))
        .arg("--section")
        .arg("nat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("section 'nat' not found"));
}

#[test]
fn get_prints_scalar_value() {
    vyatta_config()
        .arg("get")
        .arg(fixture("vyos-router.conf"))
        .arg("interfaces")
        .arg("ethernet eth0")
        .arg("mtu")
        .assert()
        .success()
        .stdout("1500\n");
}

#[test]
fn get_accepts_joined_path_and_prints_flag() {
    vyatta_config()
        .arg("get")
        .arg(fixture("vyos-router.conf"))
        .arg("firewall > zone LOCAL > local-zone")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn get_prints_array_values_one_per_line() {
    vyatta_config()
        .arg("get")
        .arg(fixture("address-group.conf"))
        .arg("firewall > group > address-group SINGLE_IP > address")
        .assert()
        .success()
        .stdout("78.41.204.36\n1.1.1.1\n");
}

#[test]
fn get_section_prints_generated_body() {
    vyatta_config()
        .arg("get")
        .arg(fixture("address-group.conf"))
        .arg("firewall")
        .arg("group")
        .arg("network-group NETWORK")
        .assert()
        .success()
        .stdout("description \"Private Network\"\nnetwork 192.168.0.1/24\n");
}

#[test]
fn get_missing_path_fails() {
    vyatta_config()
        .arg("get")
        .arg(fixture("vyos-router.conf"))
        .arg("interfaces")
        .arg("ethernet eth9")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "path 'interfaces > ethernet eth9' not found",
        ));
}

#[test]
fn verbose_flag_logs_to_stderr_only() {
    vyatta_config()
        .arg("-vv")
        .arg("inspect")
        .arg(fixture("static-route.conf"))
        .assert()
        .success()
        .stdout("protocols\n  static\n    route 0.0.0.0/0\n      next-hop = 192.168.1.254\n")
        .stderr(predicate::str::contains("parsed config"));
}
