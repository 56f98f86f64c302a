//! Picker sessions driven the way a UI would drive them.

use emosearch::{Catalog, PickerSession, Scope, DEFAULT_DEBOUNCE_MS};

fn session() -> PickerSession {
    PickerSession::new(Catalog::embedded().unwrap())
}

#[test]
fn test_typing_burst_runs_one_search() {
    let mut session = session();
    let keystrokes = ["r", "re", "red", "red ", "red h", "red he", "red hea", "red hear", "red heart"];
    for (i, text) in keystrokes.iter().enumerate() {
        let now = i as u64 * 50;
        assert!(!session.input(text, now));
        assert!(!session.tick(now));
    }
    // last keystroke at 400
    assert!(!session.tick(400 + DEFAULT_DEBOUNCE_MS - 1));
    assert!(session.tick(400 + DEFAULT_DEBOUNCE_MS));
    assert!(!session.tick(10_000));

    assert_eq!(session.query(), "red heart");
    assert_eq!(session.results(), ["❤️"]);
    assert_eq!(session.result_message().unwrap(), "\"red heart\" 검색 결과: 1개");
}

#[test]
fn test_results_stay_until_search_runs() {
    let mut session = session();
    session.search_now("pizza");
    session.input("하트", 1_000);
    assert_eq!(session.results(), ["🍕"]);
    assert!(session.is_pending());
    assert!(session.flush());
    assert_eq!(session.results()[0], "❤️");
}

#[test]
fn test_custom_delay() {
    let mut session = PickerSession::with_delay(Catalog::embedded().unwrap(), 0);
    session.input("pizza", 5);
    assert!(session.tick(5));
    assert_eq!(session.results(), ["🍕"]);
}

#[test]
fn test_category_switch_cancels_pending_search() {
    let mut session = session();
    session.input("pizza", 0);
    session.select_category(Scope::parse("love"));
    assert!(!session.is_pending());
    assert!(!session.tick(1_000));
    assert_eq!(session.results(), session.catalog().pool(&Scope::parse("love")));
    assert_eq!(session.result_message(), None);
}

#[test]
fn test_search_within_category() {
    let mut session = session();
    session.select_category(Scope::parse("love"));
    session.search_now("heart");
    let love = session.catalog().pool(&Scope::parse("love")).to_vec();
    assert!(!session.results().is_empty());
    assert!(session.results().iter().all(|c| love.contains(c)));

    let scoped = session.results().to_vec();

    session.select_category(Scope::All);
    session.search_now("heart");
    assert!(scoped.iter().all(|c| session.results().contains(c)));
    assert!(session.results().len() > scoped.len());
}

#[test]
fn test_unknown_category_is_empty() {
    let mut session = session();
    session.select_category(Scope::parse("nonexistent"));
    assert!(session.results().is_empty());
    session.search_now("하트");
    assert_eq!(session.result_message().unwrap(), "\"하트\" 검색 결과가 없습니다.");
}

#[test]
fn test_query_is_normalized_in_message() {
    let mut session = session();
    session.search_now("  PIZZA ");
    assert_eq!(session.query(), "pizza");
    assert_eq!(session.result_message().unwrap(), "\"pizza\" 검색 결과: 1개");
}

#[test]
fn test_collector_across_searches() {
    let mut session = session();
    session.search_now("하트");
    session.pick(0);
    session.pick(1);
    session.search_now("pizza");
    session.pick(0);
    session.select_category(Scope::parse("flags"));
    session.pick(0);

    assert_eq!(session.collector().len(), 4);
    assert_eq!(session.collector().text(), "❤️♥️🍕🇰🇷");

    session.clear_collector();
    assert_eq!(session.collector().text(), "");
    // clearing picks leaves results alone
    assert_eq!(session.results()[0], "🇰🇷");
}
