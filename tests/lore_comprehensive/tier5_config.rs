//! Tier 5: Configuration loading and overrides

use crate::test_utils::*;
use lorekeeper::{ConfigError, LoreConfig, PromptMode};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

#[test]
fn file_settings_drive_retrieval() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lorekeeper.toml");
    fs::write(
        &path,
        r#"
        [retrieval]
        top_k = 1

        [generation]
        top_k_context = 4096
        "#,
    )
    .unwrap();

    let config = LoreConfig::load_from(&path).unwrap();
    let retriever = retriever(stone_iron_river(), config);
    let plan = retriever.build_prompt("stone boundary").unwrap();

    assert_eq!(titles(&plan.entries), vec!["Stone Circle"]);
    assert_eq!(plan.options.num_ctx, 4096);
    assert_eq!(plan.options.num_predict, 768);
}

#[test]
fn missing_file_means_defaults() {
    let dir = TempDir::new().unwrap();
    let config = LoreConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, LoreConfig::default());
}

#[test]
fn overrides_switch_to_full_corpus() {
    let vars: HashMap<&str, &str> = [("LORE_USE_RAG", "false"), ("LORE_MODEL", "llama3:8b")]
        .into_iter()
        .collect();
    let mut config = LoreConfig::default();
    config
        .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
        .unwrap();
    assert_eq!(config.generation.model, "llama3:8b");

    let plan = retriever(stone_iron_river(), config)
        .build_prompt("stone")
        .unwrap();
    assert_eq!(plan.mode, PromptMode::FullCorpus);
    assert_eq!(plan.entries.len(), 3);
    assert_eq!(plan.options.model, "llama3:8b");
}

#[test]
fn invalid_override_is_rejected() {
    let mut config = LoreConfig::default();
    let err = config
        .apply_overrides(|name| (name == "LORE_RAG_TOP_K").then(|| "0".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lorekeeper.toml");
    fs::write(&path, "[retrieval\ntop_k = ").unwrap();
    assert!(matches!(
        LoreConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}
