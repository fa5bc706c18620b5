//! Tier 2: Prompt assembly and retrieval plans

use crate::test_utils::*;
use lorekeeper::prompt::{self, policy};
use lorekeeper::{LoreConfig, LoreError, PromptMode, Retriever, SharedCorpus};
use std::sync::Arc;

#[test]
fn loader_skips_blank_entries_and_compresses_bodies() {
    let corpus = load(archive());
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.report().skipped_empty, 1);

    let meirothea = corpus.index().get(0).unwrap();
    assert_eq!(
        meirothea.compressed(),
        "Meirothea\n\nMeirothea walked the salt roads."
    );
    let roads = corpus.index().get(1).unwrap();
    assert!(roads.compressed().contains("abbeys.\nPilgrims"));
}

#[test]
fn rag_prompt_contains_only_selected_entries() {
    let retriever = retriever(archive(), LoreConfig::default());
    let plan = retriever.build_prompt("Who walked the salt roads?").unwrap();

    assert_eq!(plan.mode, PromptMode::TopK);
    assert_eq!(plan.entries[0].slug, "salt-roads");
    assert!(titles(&plan.entries).contains(&"2nd - Meirothea"));
    assert!(!titles(&plan.entries).contains(&"Harvest Rite"));

    assert!(plan.system_prompt.starts_with(policy::SYSTEM_PROMPT_BASE));
    assert!(plan.system_prompt.contains(
        "ENTRY: 2nd - Meirothea\n\
         Citation key: [[Redeemers:meirothea|2nd - Meirothea]]\n\
         Author: Brother Aldric\n\
         Date: Year 412\n\
         Category: Redeemers\n\n"
    ));
    assert_eq!(
        plan.system_prompt.matches(prompt::ENTRY_SEPARATOR).count(),
        plan.entries.len() - 1
    );
    assert_eq!(plan.options.num_ctx, 8192);
}

#[test]
fn unmatched_question_still_gets_context() {
    let retriever = retriever(archive(), LoreConfig::default());
    let plan = retriever.build_prompt("dragons and wyverns").unwrap();
    assert_eq!(
        titles(&plan.entries),
        vec!["2nd - Meirothea", "Salt Roads", "The Abbey of Heves"]
    );
}

#[test]
fn full_corpus_mode_uses_precomposed_prompt() {
    let mut config = LoreConfig::default();
    config.retrieval.use_rag = false;
    let retriever = retriever(archive(), config);

    let plan = retriever.build_prompt("anything").unwrap();
    let snapshot = retriever.shared().snapshot();
    assert_eq!(plan.mode, PromptMode::FullCorpus);
    assert_eq!(plan.system_prompt, snapshot.full_corpus_prompt());
    assert_eq!(plan.entries.len(), snapshot.len());
    assert_eq!(plan.options.num_ctx, 32768);
    assert!(plan.system_prompt.contains("LORE ENTRIES (COMPLETE CORPUS)"));
}

#[test]
fn empty_corpus_is_reported() {
    let retriever = Retriever::new(Arc::new(SharedCorpus::new()), LoreConfig::default());
    let err = retriever.build_prompt("stone").unwrap_err();
    assert!(matches!(err, LoreError::EmptyCorpus));
    assert_eq!(err.to_string(), "lore corpus not loaded");
}

#[test]
fn stats_track_the_full_prompt() {
    let corpus = load(archive());
    let stats = corpus.stats(&LoreConfig::default().retrieval);
    assert_eq!(stats.entries, 4);
    assert_eq!(
        stats.corpus_size_chars,
        corpus.full_corpus_prompt().chars().count()
    );
    assert_eq!(stats.rag_top_k, Some(7));

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["entries"], 4);
    assert_eq!(json["rag_enabled"], true);
}
