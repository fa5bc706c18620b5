//! Tier 4: Citation validation against the loaded corpus

use crate::test_utils::*;
use lorekeeper::{citations, CitationKey, LoreConfig};

#[test]
fn answer_citing_plan_entries_is_clean() {
    let retriever = retriever(archive(), LoreConfig::default());
    let plan = retriever.build_prompt("salt roads").unwrap();

    let keys: Vec<String> = plan
        .entries
        .iter()
        .map(|e| e.citation_key().as_str().to_string())
        .collect();
    let answer = format!(
        "The roads run to the coast {}.\n\n[[Sources]]\n{}\n[[/Sources]]",
        keys[0],
        keys.join("\n")
    );

    let report = citations::validate(retriever.shared().snapshot().index(), &answer);
    assert_eq!(report.valid.len(), keys.len());
    assert!(report.unknown.is_empty());
    assert!(report.is_clean());
}

#[test]
fn invented_citation_is_flagged() {
    let corpus = load(archive());
    let answer = "Meirothea founded the abbey \
                  [[Redeemers:meirothea|2nd - Meirothea]] \
                  [[Places:abbey-of-light|Abbey of Light]].\n[[Sources]]\n[[/Sources]]";

    let report = citations::validate(corpus.index(), answer);
    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.unknown.len(), 1);
    assert_eq!(report.unknown[0].slug, "abbey-of-light");
    assert!(!report.is_clean());
}

#[test]
fn skipped_entries_cannot_be_cited() {
    let corpus = load(archive());
    assert!(!corpus.index().contains_citation("Places", "empty", "Empty"));
    assert!(corpus
        .index()
        .contains_citation("Places", "salt-roads", "Salt Roads"));
}

#[test]
fn citation_keys_are_derived_not_stored() {
    let corpus = load(archive());
    for entry in corpus.index().citation_entries() {
        let derived = CitationKey::derive(&entry.category, &entry.slug, &entry.title);
        assert_eq!(entry.citation_key(), derived);
        assert_eq!(citations::extract(derived.as_str()).len(), 1);
    }
}

#[test]
fn refusal_answer_has_no_citations() {
    let corpus = load(archive());
    let report = citations::validate(corpus.index(), "The Archives hold no record of this.");
    assert!(report.valid.is_empty());
    assert!(report.unknown.is_empty());
    assert!(!report.has_sources_block);
}
