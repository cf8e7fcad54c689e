use std::path::PathBuf;
use std::process::Command;

use desktop_runtime::{hotkeys::resolve, ConfigLoader, HotkeyAction, KeyChord, Overlay};
use pretty_assertions::assert_eq;

fn sample_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts/snap_and_switch.json")
}

fn sample_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("desktop.example.toml")
}

#[test]
fn sample_config_loads_its_hotkey_table() {
    let config = ConfigLoader::new(sample_config())
        .load()
        .expect("sample config loads");
    assert_eq!(config.taskbar_height, 48);
    assert_eq!(config.hotkeys.len(), 5);

    let run_dialog = resolve(&config.hotkeys, &KeyChord::new("R").meta());
    assert_eq!(
        run_dialog,
        vec![&HotkeyAction::ToggleOverlay {
            overlay: Overlay::RunDialog
        }]
    );
    let explorer = resolve(&config.hotkeys, &KeyChord::new("e").meta());
    assert!(matches!(
        explorer.as_slice(),
        [HotkeyAction::OpenWindow { request }] if request.title == "File Manager"
    ));
}

#[test]
fn sample_script_prints_final_view() {
    let output = Command::new(env!("CARGO_BIN_EXE_desktop_headless"))
        .arg("--config")
        .arg(sample_config())
        .arg("--viewport")
        .arg("1280x800")
        .arg("--log-level")
        .arg("off")
        .arg(sample_script())
        .output()
        .expect("run desktop_headless");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report is json");
    let windows = report["view"]["windows"].as_array().expect("windows");
    let titles: Vec<_> = windows.iter().filter_map(|w| w["title"].as_str()).collect();
    assert_eq!(titles, vec!["Terminal", "Calculator", "Text Editor"]);

    let terminal = &windows[0];
    assert_eq!(terminal["position"]["x"], 0);
    assert_eq!(terminal["size"]["width"], 640);
    assert!(windows.iter().all(|w| w["is_minimized"] == true));
    assert_eq!(report["view"]["overlays"]["run_dialog"], false);
}

#[test]
fn missing_script_fails_with_context() {
    let output = Command::new(env!("CARGO_BIN_EXE_desktop_headless"))
        .arg("--log-level")
        .arg("off")
        .arg("does-not-exist.json")
        .output()
        .expect("run desktop_headless");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read script"));
}
