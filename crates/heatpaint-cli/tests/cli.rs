use std::path::Path;
use std::process::{Command, Output};

fn heatpaint(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heatpaint"))
        .args(args)
        .env("HEATPAINT_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn preview_json_for_fixed_font_text() {
    let tmp = tempfile::tempdir().unwrap();
    let out = heatpaint(
        &tmp.path().join("config.json"),
        &["preview", "text", "HI", "--fixed-font", "--today", "2024-01-01", "--json"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let schedule: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = schedule.as_array().unwrap();
    assert_eq!(entries.len(), 28);
    assert_eq!(entries[0]["timestamp"], "2023-01-01T12:00:00");
    assert_eq!(entries[0]["commits"], 5);
}

#[test]
fn preview_image_draws_seven_rows() {
    let tmp = tempfile::tempdir().unwrap();
    let img_path = tmp.path().join("diag.png");
    image::GrayImage::from_fn(200, 14, |x, _| image::Luma([if x < 100 { 0 } else { 255 }]))
        .save(&img_path)
        .unwrap();

    let out = heatpaint(
        &tmp.path().join("config.json"),
        &["preview", "image", img_path.to_str().unwrap(), "--today", "2024-01-01"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(100x7)"));
    let rows: Vec<&str> = stdout.lines().skip(1).take(7).collect();
    assert_eq!(rows.len(), 7);
    // 2023-01-01 was a Sunday.
    assert!(rows[0].starts_with("Sun █"));
    assert!(rows.iter().all(|r| r.ends_with('.')));
}

#[test]
fn unknown_mode_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let out = heatpaint(&tmp.path().join("config.json"), &["preview", "video", "clip.mp4"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown input type 'video'"));
}

#[test]
fn missing_image_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.png");
    let out = heatpaint(
        &tmp.path().join("config.json"),
        &["preview", "image", missing.to_str().unwrap()],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read input"));
}

#[test]
fn config_roundtrip_through_the_binary() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config.json");
    assert!(heatpaint(&config, &["config", "set", "max_commits", "2"]).status.success());

    let out = heatpaint(&config, &["config", "get", "max_commits"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "2");

    let out = heatpaint(
        &config,
        &["preview", "text", "I", "--fixed-font", "--today", "2024-01-01", "--json"],
    );
    let schedule: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(schedule.as_array().unwrap().iter().all(|e| e["commits"] == 2));
}

#[test]
fn config_set_keeps_numeric_message_and_refuses_zero_max() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config.json");
    assert!(heatpaint(&config, &["config", "set", "message", "2024"]).status.success());
    let out = heatpaint(&config, &["config", "get", "message"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "\"2024\"");

    let out = heatpaint(&config, &["config", "set", "max_commits", "0"]);
    assert!(!out.status.success());
    let out = heatpaint(&config, &["config", "get", "max_commits"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "(not set)");
}
