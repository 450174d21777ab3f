//! Integration tests for settings loading.

use std::path::PathBuf;

use tempfile::tempdir;
use vault_cli::settings::Settings;
use vault_model::{DigestLength, ProcessingType};
use vault_persistence::DEFAULT_NAMESPACE;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml"));

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.storage.namespace, DEFAULT_NAMESPACE);
    assert_eq!(settings.editor.default_type, ProcessingType::None);
    assert_eq!(settings.display.title_length, 30);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[editor]\ndefault_type = \"sha256-16\"\n").unwrap();

    let settings = Settings::load_from(&path);

    assert_eq!(
        settings.editor.default_type,
        ProcessingType::Sha256(DigestLength::Chars16)
    );
    assert_eq!(settings.storage.namespace, DEFAULT_NAMESPACE);
    assert_eq!(settings.display.title_length, 30);
}

#[test]
fn test_unknown_default_type_falls_back_to_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[editor]\ndefault_type = \"rot13\"\n").unwrap();

    let settings = Settings::load_from(&path);

    assert_eq!(settings.editor.default_type, ProcessingType::None);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[storage\nnamespace = ").unwrap();

    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_blank_values_are_normalized() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[storage]\nnamespace = \"  \"\n\n[display]\ntitle_length = 0\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path);

    assert_eq!(settings.storage.namespace, DEFAULT_NAMESPACE);
    assert_eq!(settings.display.title_length, 30);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let mut settings = Settings::default();
    settings.storage.directory = Some(PathBuf::from("/srv/vault"));
    settings.storage.namespace = "notes".to_string();
    settings.editor.default_type = ProcessingType::Capitalize;
    settings.display.title_length = 12;

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path);

    assert_eq!(loaded, settings);
    assert_eq!(loaded.data_dir(), PathBuf::from("/srv/vault"));
}

#[test]
fn test_default_settings_shape() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "storage": {
        "directory": null,
        "namespace": "text-vault-entries"
      },
      "editor": {
        "default_type": "none"
      },
      "display": {
        "title_length": 30
      }
    }
    "#);
}
