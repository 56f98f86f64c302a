//! Query normalization and unusual inputs.

use super::common::{make_index, make_pool, sample_index, sample_pool};
use emosearch::search;

#[test]
fn test_query_is_case_insensitive() {
    let pool = sample_pool();
    let index = sample_index();
    assert_eq!(search("HEART", &pool, &index), search("heart", &pool, &index));
    assert_eq!(search("HeArT", &pool, &index), vec!["❤️", "💕", "💔"]);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let index = make_index(&[("🍎", &["Apple"])]);
    assert_eq!(search("apple", &make_pool(&["🍎"]), &index), vec!["🍎"]);
}

#[test]
fn test_surrounding_and_repeated_whitespace() {
    let pool = sample_pool();
    let index = sample_index();
    assert_eq!(
        search("  red \t  heart ", &pool, &index),
        search("red heart", &pool, &index)
    );
}

#[test]
fn test_single_character_term() {
    // "하" appears in every heart keyword and nowhere else
    let results = search("하", &sample_pool(), &sample_index());
    assert_eq!(results, vec!["❤️", "💕", "💔"]);
}

#[test]
fn test_multi_word_keyword_matches_single_term() {
    // "two hearts" contains "hearts"; no other keyword does
    assert_eq!(search("hearts", &sample_pool(), &sample_index()), vec!["💕"]);
}

#[test]
fn test_query_longer_than_every_keyword() {
    assert!(search("heartheartheart", &sample_pool(), &sample_index()).is_empty());
}

#[test]
fn test_repeated_term_counts_twice() {
    let pool = sample_pool();
    let index = sample_index();
    // Still AND over the same term; membership unchanged
    assert_eq!(search("pizza pizza", &pool, &index), vec!["🍕"]);
}

#[test]
fn test_emoji_as_query() {
    let index = make_index(&[("🍕", &["🍕", "pizza"])]);
    assert_eq!(search("🍕", &make_pool(&["🍕"]), &index), vec!["🍕"]);
}

#[test]
fn test_zwj_sequence_candidate() {
    let flag = "🏳️\u{200d}🌈";
    let index = make_index(&[(flag, &["무지개깃발", "rainbow flag"])]);
    assert_eq!(search("rainbow", &make_pool(&[flag]), &index), vec![flag]);
}
