//! Scoring properties: tier strength, primary keyword, length affinity.

use super::common::{make_pool, organic_score};
use super::word_strategy;
use emosearch::scoring::{
    keyword_score, tier_score, EXACT_SCORE, LENGTH_AFFINITY_BONUS, PREFIX_SCORE,
    PRIMARY_KEYWORD_BONUS, SUBSTRING_SCORE,
};
use emosearch::{search, KeywordIndex, MatchTier};
use proptest::prelude::*;

#[test]
fn test_tier_scores_strictly_ordered() {
    assert!(EXACT_SCORE > PREFIX_SCORE);
    assert!(PREFIX_SCORE > SUBSTRING_SCORE);
    assert_eq!(tier_score(MatchTier::Exact), EXACT_SCORE);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A keyword equal to the term always classifies as exact.
    #[test]
    fn prop_self_match_is_exact(word in word_strategy(), position in 0usize..4) {
        let (score, tier) = keyword_score(&word, &word, position).unwrap();
        prop_assert_eq!(tier, MatchTier::Exact);
        let primary = if position == 0 { PRIMARY_KEYWORD_BONUS } else { 0 };
        prop_assert_eq!(score, EXACT_SCORE + primary + LENGTH_AFFINITY_BONUS);
    }

    /// Extending a keyword past the term makes it a prefix match.
    #[test]
    fn prop_extension_is_prefix(word in word_strategy(), suffix in word_strategy()) {
        let keyword = format!("{}{}", word, suffix);
        let (_, tier) = keyword_score(&keyword, &word, 1).unwrap();
        prop_assert_eq!(tier, MatchTier::Prefix);
    }

    /// Moving the only matching keyword to the front adds exactly the primary bonus.
    #[test]
    fn prop_primary_position_bonus(word in word_strategy()) {
        let mut index = KeywordIndex::new();
        index.insert("front", [word.as_str(), "zzz"]);
        index.insert("back", ["zzz", word.as_str()]);
        let front = organic_score(&word, "front", &index).unwrap();
        let back = organic_score(&word, "back", &index).unwrap();
        prop_assert_eq!(front - back, PRIMARY_KEYWORD_BONUS);
    }

    /// With one keyword each, exact beats prefix beats substring.
    #[test]
    fn prop_tiers_rank_in_order(word in word_strategy(), pad in word_strategy()) {
        let mut index = KeywordIndex::new();
        index.insert("sub", [format!("z{}{}", word, pad)]);
        index.insert("pre", [format!("{}{}", word, pad)]);
        index.insert("exact", [word.clone()]);
        let results = search(&word, &make_pool(&["sub", "pre", "exact"]), &index);
        prop_assert_eq!(results, vec!["exact", "pre", "sub"]);
    }
}
