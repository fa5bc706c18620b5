//! Shared fixtures for the comprehensive suite

use lorekeeper::{
    CitationEntry, Corpus, CorpusLoader, LoreConfig, RawRecord, Retriever, SharedCorpus,
};
use std::sync::Arc;

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// The three-document corpus used for ranking checks
pub fn stone_iron_river() -> Vec<RawRecord> {
    vec![
        RawRecord::new(
            "Stone Circle",
            "stone-circle",
            "Sites",
            "The ancient circle of stones marks a boundary.",
        ),
        RawRecord::new(
            "Iron Age",
            "iron-age",
            "History",
            "Iron tools reshaped the boundary settlements.",
        ),
        RawRecord::new(
            "River Song",
            "river-song",
            "Songs",
            "A song about water and stone.",
        ),
    ]
}

/// A larger corpus with markup, authors and dates
pub fn archive() -> Vec<RawRecord> {
    vec![
        RawRecord::new(
            "2nd - Meirothea",
            "meirothea",
            "Redeemers",
            "<!-- draft -->## Meirothea\n\n**Meirothea** walked the *salt roads*<sup>1</sup>.",
        )
        .with_author("Brother Aldric")
        .with_date("Year 412"),
        RawRecord::new(
            "Salt Roads",
            "salt-roads",
            "Places",
            "The salt roads link the coast to the inland abbeys.<br/>Pilgrims use them.",
        ),
        RawRecord::new("Empty", "empty", "Places", "  \n "),
        RawRecord::new(
            "The Abbey of Heves",
            "abbey-heves",
            "Places",
            "An abbey in the hills, keeper of the oldest archive.",
        )
        .with_date("Year 380"),
        RawRecord::new(
            "Harvest Rite",
            "harvest-rite",
            "Rites",
            "Grain is offered at the first frost.",
        ),
    ]
}

pub fn load(records: Vec<RawRecord>) -> Corpus {
    init_tracing();
    CorpusLoader::new().load(records)
}

pub fn retriever(records: Vec<RawRecord>, config: LoreConfig) -> Retriever {
    let shared = Arc::new(SharedCorpus::with_corpus(load(records)));
    Retriever::new(shared, config)
}

pub fn titles<'a>(entries: impl IntoIterator<Item = &'a CitationEntry>) -> Vec<&'a str> {
    entries.into_iter().map(|e| e.title.as_str()).collect()
}
