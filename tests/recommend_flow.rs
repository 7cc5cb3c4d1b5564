//! End-to-end flows over the public API: ingestion, clicks and the tiered
//! recommendation fallback.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Write};

use recomendar::prelude::*;

fn ingest(id: u64, publisher_id: u64, text: &str) -> ArticleIngest {
    ArticleIngest {
        id,
        publisher_id,
        category_id: 0,
        text: text.to_string(),
        recommendable: true,
    }
}

fn read(user_id: u64, publisher_id: u64, article_id: u64) -> ReadEvent {
    ReadEvent {
        user_id,
        publisher_id,
        article_id,
    }
}

/// Four articles with distinct publishers; the user read article 1.
fn sports_and_music_engine() -> Recommender {
    let mut engine = Recommender::new(TextNormalizer::new());
    let articles = [
        (1, 1, "messi barcelona madrid ronaldo"),
        (2, 2, "messi barcelona valencia liga"),
        (3, 3, "madonna radio hollywood"),
        (4, 4, "madonna radio hollywood barcelona"),
    ];
    for (id, publisher_id, text) in articles {
        engine
            .add_article(ingest(id, publisher_id, text))
            .expect("ingestion should succeed");
    }
    engine
}

#[test]
fn read_history_ranking_orders_by_shared_weighted_terms() {
    let mut engine = sports_and_music_engine();
    engine.record_read(&read(7, 1, 1));

    // Article 2 shares the most weighted terms with the read article,
    // article 4 shares one, article 3 shares none.
    let ids = engine.recommend(7, 3).expect("recommend should succeed");
    assert_eq!(ids, vec![2, 4, 3]);
}

#[test]
fn limit_beyond_store_returns_everything_unread() {
    let mut engine = sports_and_music_engine();
    engine.record_read(&read(7, 1, 1));

    let ids = engine.recommend(7, 50).expect("recommend should succeed");
    assert_eq!(ids, vec![2, 4, 3]);
}

#[test]
fn recommendations_are_distinct_known_ids() {
    let mut engine = sports_and_music_engine();
    engine.record_read(&read(7, 1, 1));

    for user in [7, 8] {
        let ids = engine.recommend(user, 3).expect("recommend should succeed");
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|id| engine.contains_article(*id)));
        assert!(ids.len() <= 3);
    }
}

#[test]
fn empty_store_recommends_nothing() {
    let engine = Recommender::default();
    for limit in [0, 1, 100] {
        assert!(engine
            .recommend(42, limit)
            .expect("recommend should succeed")
            .is_empty());
    }
}

#[test]
fn tiers_degrade_from_history_to_preference_to_cold_start() {
    let mut engine = sports_and_music_engine();

    // No signal at all: cold start returns from the whole store.
    let cold = engine.recommend(99, 10).expect("recommend should succeed");
    assert_eq!(cold, vec![1, 2, 3, 4]);

    // A click on an article the engine never saw: publisher preference only.
    engine.record_read(&read(99, 2, 555));
    let preferred = engine.recommend(99, 10).expect("recommend should succeed");
    assert_eq!(preferred, vec![2]);

    // A click that resolves: similarity ranking takes over.
    engine.record_read(&read(99, 1, 1));
    let ranked = engine.recommend(99, 10).expect("recommend should succeed");
    assert_eq!(ranked, vec![2, 4, 3]);
}

#[test]
fn vectors_stay_aligned_across_the_whole_flow() {
    let mut engine = sports_and_music_engine();

    // Replace an article, then add a new one with fresh terms.
    engine
        .add_article(ingest(2, 2, "valencia liga europa"))
        .expect("ingestion should succeed");
    engine
        .add_article(ingest(5, 5, "eurovision oslo final"))
        .expect("ingestion should succeed");

    let vocab_size = engine.vocabulary().len();
    for article in engine.articles() {
        let vector = engine.vector(article.id()).expect("vector should exist");
        assert_eq!(vector.len(), vocab_size);
    }
    assert_eq!(engine.len(), 5);
}

#[test]
fn stop_words_from_file_shape_the_vocabulary() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");
    let path = dir.path().join("stop_words.txt");
    let mut file = File::create(&path).expect("create should succeed");
    writeln!(file, "the\nto\n\nis").expect("write should succeed");

    let mut normalizer = TextNormalizer::new();
    let reader = File::open(&path).map(BufReader::new).ok();
    normalizer.load_stop_words(reader);
    assert_eq!(normalizer.stop_words().len(), 3);

    let mut engine = Recommender::new(normalizer);
    engine
        .add_article(ingest(1, 1, "the striker returns to barcelona"))
        .expect("ingestion should succeed");

    assert!(!engine.vocabulary().contains("the"));
    assert!(!engine.vocabulary().contains("to"));
    assert!(engine.vocabulary().contains("barcelona"));
}

#[test]
fn seeded_engines_sample_identically() {
    let build = || {
        let mut engine = Recommender::new(TextNormalizer::new()).with_random_state(23);
        for id in 1..=6u64 {
            engine
                .add_article(ingest(id, id, &format!("article number {id}")))
                .expect("ingestion should succeed");
        }
        engine
    };

    let first = build();
    let second = build();
    assert_eq!(
        first.recommend(42, 3).expect("recommend should succeed"),
        second.recommend(42, 3).expect("recommend should succeed")
    );
}
