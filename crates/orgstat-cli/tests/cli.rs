// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORG_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div id="org-repositories"><div class="org-repos repo-list"><ul>
<li><h3><a href="/esm-tools/pyfesom2" itemprop="name codeRepository"> pyfesom2 </a></h3>
  <a class="muted-link" href="/esm-tools/pyfesom2/issues"> 3 </a>
  <a class="muted-link" href="/esm-tools/pyfesom2/pulls"> 1 </a>
  <span class="no-wrap">Updated <relative-time datetime="2021-01-10T13:00:00Z">Jan 10, 2021</relative-time></span>
</li>
<li><h3><a href="/esm-tools/esm_tools" itemprop="name codeRepository"> esm_tools </a></h3>
  <a class="muted-link" href="/esm-tools/esm_tools/issues"> 10 </a>
  <a class="muted-link" href="/esm-tools/esm_tools/pulls"> 4 </a>
  <span class="no-wrap">Updated <relative-time datetime="2021-01-11T12:24:25Z">Jan 11, 2021</relative-time></span>
</li>
<li><h3><a href="/esm-tools/esm_parser" itemprop="name codeRepository"> esm_parser </a></h3>
  <a class="muted-link" href="/esm-tools/esm_parser/issues"> 3 </a>
</li>
</ul></div></div>
</body></html>"#;

async fn org_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esm-tools"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn orgstat(server: &MockServer, config_home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("orgstat");
    cmd.env_clear()
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("ORGSTAT_GITHUB__BASE_URL", server.uri())
        .env("ORGSTAT_GITHUB__TIMEOUT_SECONDS", "5");
    cmd
}

#[tokio::test]
async fn test_text_report_prints_cpu_time_then_table() {
    let server = org_server(ResponseTemplate::new(200).set_body_string(ORG_PAGE)).await;
    let config_home = tempfile::tempdir().unwrap();

    let output = orgstat(&server, &config_home).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    let elapsed: f64 = lines.next().unwrap().parse().expect("CPU seconds line");
    assert!(elapsed >= 0.0);

    let table = lines.collect::<Vec<_>>().join("\n");
    for column in [
        "tool name",
        "number of issues",
        "number of pull requests",
        "last updated",
    ] {
        assert!(table.contains(column), "missing column {column}");
    }

    let esm_tools = table.find("esm_tools").unwrap();
    let pyfesom2 = table.find("pyfesom2").unwrap();
    let esm_parser = table.find("esm_parser").unwrap();
    assert!(esm_tools < pyfesom2 && pyfesom2 < esm_parser);
}

#[tokio::test]
async fn test_json_report_with_configured_order() {
    let server = org_server(ResponseTemplate::new(200).set_body_string(ORG_PAGE)).await;
    let config_home = tempfile::tempdir().unwrap();

    let output = orgstat(&server, &config_home)
        .env("ORGSTAT_UI__FORMAT", "json")
        .env("ORGSTAT_REPORT__SORT_BY", "name")
        .env("ORGSTAT_REPORT__ORDER", "ascending")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["repositories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["esm_parser", "esm_tools", "pyfesom2"]);
    assert_eq!(json["sort_by"], "name");
    assert_eq!(json["order"], "ascending");
    assert!(json["repositories"][0]["pull_request_count"].is_null());
    assert!(json["elapsed_cpu_seconds"].is_f64());
}

#[tokio::test]
async fn test_config_file_selects_organization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/awi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ORG_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let config_home = tempfile::tempdir().unwrap();
    let app_dir = config_home.path().join("orgstat");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(
        app_dir.join("config.toml"),
        "[github]\norganization = \"awi\"\n",
    )
    .unwrap();

    orgstat(&server, &config_home)
        .assert()
        .success()
        .stdout(predicate::str::contains("esm_tools"));
}

#[tokio::test]
async fn test_missing_organization_fails_with_hint() {
    let server = org_server(ResponseTemplate::new(404)).await;
    let config_home = tempfile::tempdir().unwrap();

    orgstat(&server, &config_home)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("404"))
        .stderr(predicate::str::contains("github.organization"));
}

#[tokio::test]
async fn test_unexpected_page_layout_fails() {
    let server = org_server(
        ResponseTemplate::new(200).set_body_string("<html><body>Maintenance</body></html>"),
    )
    .await;
    let config_home = tempfile::tempdir().unwrap();

    orgstat(&server, &config_home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("org-repositories"));
}
