//! Core search contract: purity, AND semantics, empty and no-match queries.

use super::common::{as_set, make_index, make_pool, sample_index, sample_pool};
use emosearch::{search, RankedSearchEngine};

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn test_same_arguments_same_output() {
    let pool = sample_pool();
    let index = sample_index();
    for query in ["하트", "heart", "red heart", "웃음 눈물", "a", ""] {
        let first = search(query, &pool, &index);
        let second = search(query, &pool, &index);
        assert_eq!(first, second, "query {:?} not deterministic", query);
    }
}

#[test]
fn test_engine_reuse_has_no_memory() {
    let engine = RankedSearchEngine::new();
    let pool = sample_pool();
    let index = sample_index();
    let before = engine.search("heart", &pool, &index);
    let _ = engine.search("pizza", &pool, &index);
    let _ = engine.search("", &pool, &index);
    assert_eq!(engine.search("heart", &pool, &index), before);
}

// ============================================================================
// AND SEMANTICS
// ============================================================================

#[test]
fn test_two_terms_is_intersection() {
    let pool = sample_pool();
    let index = sample_index();

    let both = as_set(&search("웃음 눈물", &pool, &index));
    let a = as_set(&search("웃음", &pool, &index));
    let b = as_set(&search("눈물", &pool, &index));

    let expected: std::collections::HashSet<_> = a.intersection(&b).cloned().collect();
    assert_eq!(both, expected);
    assert_eq!(search("웃음 눈물", &pool, &index), vec!["😂"]);
}

#[test]
fn test_one_missing_term_excludes() {
    let pool = sample_pool();
    let index = sample_index();
    // 🍎 has "red" but no heart keyword
    assert_eq!(search("red heart", &pool, &index), vec!["❤️"]);
}

#[test]
fn test_term_order_does_not_change_membership() {
    let pool = sample_pool();
    let index = sample_index();
    assert_eq!(
        as_set(&search("heart red", &pool, &index)),
        as_set(&search("red heart", &pool, &index))
    );
}

// ============================================================================
// EMPTY QUERY
// ============================================================================

#[test]
fn test_empty_query_returns_pool() {
    let pool = sample_pool();
    assert_eq!(search("", &pool, &sample_index()), pool);
}

#[test]
fn test_whitespace_query_returns_pool() {
    let pool = sample_pool();
    assert_eq!(search(" \t\n ", &pool, &sample_index()), pool);
}

#[test]
fn test_empty_query_keeps_candidates_without_keywords() {
    let pool = make_pool(&["❤️", "🦄"]);
    assert_eq!(search("", &pool, &sample_index()), pool);
}

// ============================================================================
// NO MATCH
// ============================================================================

#[test]
fn test_unknown_keyword_returns_nothing() {
    assert!(search("zzz_no_such_keyword", &sample_pool(), &sample_index()).is_empty());
}

#[test]
fn test_empty_pool_returns_nothing() {
    assert!(search("heart", &[], &sample_index()).is_empty());
}

#[test]
fn test_candidate_without_keywords_never_matches() {
    let pool = make_pool(&["🦄"]);
    let index = make_index(&[("🐴", &["unicorn"])]);
    assert!(search("unicorn", &pool, &index).is_empty());
}

// ============================================================================
// RESULT SHAPE
// ============================================================================

#[test]
fn test_results_are_subset_of_pool() {
    let pool = make_pool(&["❤️", "💕"]);
    // 💔 is in the index but not the pool
    let results = search("하트", &pool, &sample_index());
    assert_eq!(as_set(&results), as_set(&pool));
}

#[test]
fn test_duplicate_pool_entries_appear_once() {
    let pool = make_pool(&["❤️", "💕", "❤️", "💕", "❤️"]);
    assert_eq!(search("하트", &pool, &sample_index()), vec!["❤️", "💕"]);
}
