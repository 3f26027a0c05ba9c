use labflow::cli::args::RuntimeArgs;
use labflow::cli::commands::apply_overrides;
use labflow::config::settings::Settings;

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.timeout_secs, 60);
    assert_eq!(s.assistant_name, "Flo");
    assert!(s.webhook_url.starts_with("https://"));
    assert!(s.user_name.is_none());
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert_eq!(Settings::load_from_file(Some(&path)).unwrap(), Settings::default());
}

#[test]
fn test_init_then_refuse_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let written = Settings::init(false, Some(&path)).unwrap();
    assert_eq!(written, path);
    assert!(path.exists());
    assert!(Settings::init(false, Some(&path)).is_err());
    assert!(Settings::init(true, Some(&path)).is_ok());
}

#[test]
fn test_set_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut s = Settings::default();
    s.set("webhook-url", " http://localhost:5678/webhook/x ").unwrap();
    s.set("timeout", "15").unwrap();
    s.set("user", "Ana").unwrap();
    s.save_with(Some(&path)).unwrap();

    let loaded = Settings::load_from_file(Some(&path)).unwrap();
    assert_eq!(loaded.webhook_url, "http://localhost:5678/webhook/x");
    assert_eq!(loaded.timeout().as_secs(), 15);
    assert_eq!(loaded.user_name.as_deref(), Some("Ana"));
}

#[test]
fn test_set_rejects_bad_input() {
    let mut s = Settings::default();
    assert!(s.set("colour", "teal").is_err());
    assert!(s.set("timeout", "soon").is_err());
    s.set("user", "   ").unwrap();
    assert!(s.user_name.is_none());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "user_name = \"Budi\"\n").unwrap();
    let loaded = Settings::load_from_file(Some(&path)).unwrap();
    assert_eq!(loaded.user_name.as_deref(), Some("Budi"));
    assert_eq!(loaded.timeout_secs, 60);
}

#[test]
fn test_runtime_flags_override() {
    let runtime = RuntimeArgs {
        user: Some(" Ana ".into()),
        webhook_url: Some("http://127.0.0.1:9/hook".into()),
        timeout_secs: Some(5),
        config: None,
    };
    let s = apply_overrides(Settings::default(), &runtime);
    assert_eq!(s.user_name.as_deref(), Some("Ana"));
    assert_eq!(s.webhook_url, "http://127.0.0.1:9/hook");
    assert_eq!(s.timeout_secs, 5);
}
