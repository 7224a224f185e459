mod support;

use std::fs;

use tempfile::tempdir;

use support::{closed_port_url, run_botsim, spawn_http_server, status_for_path};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn e2e_run_writes_summary_and_json() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let out_path = dir.path().join("results.json");
    let out_arg = out_path.to_string_lossy().into_owned();

    let output = run_botsim(
        [
            "--url", url.as_str(), "--count", "12", "--concurrency", "3", "--delay", "0", "--seed",
            "7", "--output", out_arg.as_str(), "--verbose",
        ],
        dir.path(),
    )?;
    if !output.status.success() {
        return Err(format!("botsim failed: {}", stderr_of(&output)));
    }

    let stdout = stdout_of(&output);
    for needle in ["BOT SIMULATION SUMMARY", "Total Requests: 12", "Failed: 0"] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in output:\n{}", needle, stdout));
        }
    }

    let content = fs::read_to_string(&out_path).map_err(|err| format!("read failed: {}", err))?;
    let parsed: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| format!("invalid JSON: {}", err))?;
    let records = parsed
        .as_array()
        .ok_or_else(|| "Expected a JSON array".to_owned())?;
    if records.len() != 12 {
        return Err(format!("Expected 12 records, got {}", records.len()));
    }

    for (expected_id, record) in records.iter().enumerate() {
        let id = record.get("request_id").and_then(serde_json::Value::as_u64);
        if id != u64::try_from(expected_id).ok() {
            return Err(format!("Records not sorted by id: {}", record));
        }
        let record_url = record
            .get("url")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| format!("Missing url: {}", record))?;
        let path = record_url
            .strip_prefix(url.as_str())
            .ok_or_else(|| format!("Unexpected url {}", record_url))?;
        let status = record.get("status").and_then(serde_json::Value::as_u64);
        if status != Some(u64::from(status_for_path(path))) {
            return Err(format!("Status does not match path: {}", record));
        }
        if record.get("success").and_then(serde_json::Value::as_bool) != Some(true) {
            return Err(format!("Expected success: {}", record));
        }
    }

    if server.requests().len() != 12 {
        return Err(format!(
            "Server saw {} requests",
            server.requests().len()
        ));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_target_still_exits_cleanly() -> Result<(), String> {
    let url = closed_port_url()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_botsim(
        ["-u", url.as_str(), "-n", "4", "-d", "0", "--timeout", "2s"],
        dir.path(),
    )?;
    if !output.status.success() {
        return Err(format!("Failed requests must not fail the run: {}", stderr_of(&output)));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Failed: 4") || !stdout.contains("0 (Error): 4") {
        return Err(format!("Unexpected summary:\n{}", stdout));
    }
    if stdout.contains("Average Response Time") {
        return Err("Average must be omitted when nothing responded".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_settings() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!(
        r#"url = "{}"
count = 5
categories = ["monitoring"]
delay = 0.0
concurrency = 2

[[profiles]]
category = "monitoring"
user_agent = "ConfigProbe/1.0"
"#,
        url
    );
    fs::write(dir.path().join("botsim.toml"), config)
        .map_err(|err| format!("write failed: {}", err))?;

    let output = run_botsim(["--seed", "1"], dir.path())?;
    if !output.status.success() {
        return Err(format!("botsim failed: {}", stderr_of(&output)));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Total Requests: 5") || !stdout.contains("  monitoring: 5") {
        return Err(format!("Unexpected summary:\n{}", stdout));
    }
    let requests = server.requests();
    if requests.len() != 5 || requests.iter().any(|request| request.user_agent.is_none()) {
        return Err(format!("Unexpected requests: {:?}", requests));
    }
    Ok(())
}

#[test]
fn e2e_empty_categories_is_an_error() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("custom.json");
    fs::write(&config_path, r#"{"categories": []}"#)
        .map_err(|err| format!("write failed: {}", err))?;
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_botsim(["--url", url.as_str(), "--config", config_arg.as_str()], dir.path())?;
    if output.status.success() {
        return Err("Expected an empty profile pool to fail".to_owned());
    }
    if !server.requests().is_empty() {
        return Err("No request may be issued for an empty pool".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_missing_url_is_an_error() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_botsim(["--count", "1"], dir.path())?;
    if output.status.success() {
        return Err("Expected missing URL to fail".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_list_categories() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_botsim(["--list-categories"], dir.path())?;
    if !output.status.success() {
        return Err(format!("list failed: {}", stderr_of(&output)));
    }
    let stdout = stdout_of(&output);
    for name in [
        "search_engine",
        "scraping_framework",
        "http_library",
        "ai_bot",
        "monitoring",
        "social_media",
        "seo_tool",
        "browser",
        "malicious",
    ] {
        if !stdout.contains(name) {
            return Err(format!("Missing category '{}' in:\n{}", name, stdout));
        }
    }
    Ok(())
}
