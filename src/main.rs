// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use emosearch::{Catalog, CatalogError, PickerSession, Scope};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Search {
            query,
            category,
            limit,
            scores,
        } => run_search(&catalog, &query, &category, limit, scores),
        Commands::Categories => {
            print_categories(&catalog);
            Ok(())
        }
        Commands::Inspect { emoji: None } => {
            print_stats(&catalog);
            Ok(())
        }
        Commands::Inspect { emoji: Some(emoji) } => run_inspect(&catalog, &emoji),
        Commands::Repl { category, limit } => run_repl(catalog, &category, limit),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    Catalog::load_or_embedded(path)
}

/// Resolve a category argument, rejecting ids the catalog doesn't have.
fn resolve_scope(catalog: &Catalog, category: &str) -> Result<Scope, String> {
    let scope = Scope::parse(category);
    match &scope {
        Scope::Category(id) if catalog.category(id).is_none() => Err(format!(
            "unknown category '{}' (try `emosearch categories`)",
            id
        )),
        _ => Ok(scope),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    catalog: &Catalog,
    query: &str,
    category: &str,
    limit: usize,
    scores: bool,
) -> Result<(), String> {
    let scope = resolve_scope(catalog, category)?;
    let engine = catalog.engine();
    let results = engine.search_scored(query, catalog.pool(&scope), catalog.keywords());
    let normalized = emosearch::normalize(query);

    section_top(&format!("SEARCH \"{}\" in {}", normalized, scope));

    if results.is_empty() {
        row(&format!(" \"{}\" 검색 결과가 없습니다.", normalized));
        section_bot();
        return Ok(());
    }

    if scores {
        for (rank, scored) in results.iter().take(limit).enumerate() {
            row(&format!(
                " {} {} {}  {}",
                right(&(rank + 1).to_string(), 3),
                left(&scored.candidate, 3),
                score_value(scored.score),
                tier_badges(scored.tiers)
            ));
        }
    } else {
        let shown: Vec<&str> = results
            .iter()
            .take(limit)
            .map(|s| s.candidate.as_str())
            .collect();
        for line in shown.chunks(16) {
            row(&format!(" {}", line.join(" ")));
        }
    }

    section_mid("RESULTS");
    row(&format!(" \"{}\" 검색 결과: {}개", normalized, results.len()));
    if results.len() > limit {
        row(&hint(&format!(" showing {} of {}", limit, results.len())));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// CATALOG INSPECTION
// ═══════════════════════════════════════════════════════════════════════════

fn print_categories(catalog: &Catalog) {
    section_top("CATEGORIES");
    for category in catalog.categories() {
        row(&format!(
            " {} {} {}",
            left(&paint(Color::Blue, Weight::Bold, &category.id), 12),
            left(category.display_label(), 14),
            right(&category.emojis.len().to_string(), 5)
        ));
    }
    section_mid("TOTAL");
    row(&format!(
        " {} unique emoji, {} keywords",
        catalog.all().len(),
        catalog.keywords().keyword_count()
    ));
    section_bot();
}

fn print_stats(catalog: &Catalog) {
    let stats = catalog.stats();
    let count = |n: usize| right(&n.to_string(), 8);
    let warn_count = |n: usize| {
        if n == 0 {
            count(n)
        } else {
            paint(Color::Yellow, Weight::Bold, &count(n))
        }
    };

    section_top("CATALOG");
    row(&format!(" categories          {}", count(stats.categories)));
    row(&format!(" category entries    {}", count(stats.entries)));
    row(&format!(" unique emoji        {}", count(stats.unique)));
    row(&format!(" keywords            {}", count(stats.keywords)));
    section_mid("CURATION");
    row(&format!(" curated pairs       {}", count(stats.curated_pairs)));
    row(&format!(" group boosts        {}", count(stats.group_boosts)));
    section_mid("CHECKS");
    row(&format!(" without keywords    {}", warn_count(stats.without_keywords)));
    row(&format!(" orphaned keywords   {}", warn_count(stats.orphaned_keywords)));
    section_bot();
}

fn run_inspect(catalog: &Catalog, emoji: &str) -> Result<(), String> {
    let emoji = emoji.trim();
    let keywords = catalog.keywords().keywords(emoji);
    let categories: Vec<&str> = catalog
        .categories()
        .iter()
        .filter(|c| c.emojis.iter().any(|e| e == emoji))
        .map(|c| c.id.as_str())
        .collect();

    if keywords.is_empty() && categories.is_empty() {
        return Err(format!("'{}' is not in the catalog", emoji));
    }

    section_top(&format!("INSPECT {}", emoji));
    row(&format!(
        " categories: {}",
        if categories.is_empty() {
            hint("(none)")
        } else {
            categories.join(", ")
        }
    ));

    section_mid("KEYWORDS");
    if keywords.is_empty() {
        row(&hint(" (none; this emoji can only appear for an empty query)"));
    }
    for (position, keyword) in keywords.iter().enumerate() {
        let marker = if position == 0 {
            paint(Color::Green, Weight::Normal, " primary")
        } else {
            String::new()
        };
        row(&format!(" {} {}{}", right(&position.to_string(), 3), keyword, marker));
    }

    let curation = catalog.curation();
    let mut curated: Vec<(String, i64)> = Vec::new();
    for table in [&curation.overrides, &curation.pins] {
        for query in table.queries() {
            let bonus = table.get(query, emoji);
            if bonus != 0 {
                curated.push((query.to_string(), bonus));
            }
        }
    }
    for def in &curation.group_boosts {
        if categories.contains(&def.category.as_str()) {
            for query in &def.queries {
                curated.push((emosearch::normalize(query), def.bonus));
            }
        }
    }

    if !curated.is_empty() {
        // Merge per query; overrides, pins and group boosts all add up
        curated.sort();
        let mut merged: Vec<(String, i64)> = Vec::new();
        for (query, bonus) in curated {
            match merged.last_mut() {
                Some((last, total)) if *last == query => *total += bonus,
                _ => merged.push((query, bonus)),
            }
        }

        section_mid("CURATION");
        for (query, bonus) in merged {
            row(&format!(" {} {}", left(&query, 12), score_value(bonus)));
        }
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// REPL
// ═══════════════════════════════════════════════════════════════════════════

fn run_repl(catalog: Catalog, category: &str, limit: usize) -> Result<(), String> {
    let scope = resolve_scope(&catalog, category)?;
    let mut session = PickerSession::new(catalog);
    session.select_category(scope);

    println!(
        "{}",
        hint("type to search · :cat ID · :all · :pick N · :copy · :clear · :quit")
    );

    let started = Instant::now();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", paint(Color::Cyan, Weight::Bold, &format!("[{}]>", session.scope())));
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        let line = line.trim();

        match line.strip_prefix(':') {
            Some(command) => {
                if !repl_command(&mut session, command, limit) {
                    break;
                }
            }
            None => {
                // Each line is a complete input; flush instead of waiting out the delay
                let now_ms = started.elapsed().as_millis() as u64;
                session.input(line, now_ms);
                session.flush();
                print_session_results(&session, limit);
            }
        }
    }
    Ok(())
}

/// Handle a `:command`. Returns false to exit.
fn repl_command(session: &mut PickerSession, command: &str, limit: usize) -> bool {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "q" | "exit"), _) => return false,
        (Some("all"), _) => {
            session.select_category(Scope::All);
            print_session_results(session, limit);
        }
        (Some("cat"), Some(id)) => {
            if session.catalog().category(id).is_none() {
                println!("{}", error_line(&format!("unknown category '{}'", id)));
            } else {
                session.select_category(Scope::parse(id));
                print_session_results(session, limit);
            }
        }
        (Some("cat"), None) => {
            let ids: Vec<&str> = session
                .catalog()
                .categories()
                .iter()
                .map(|c| c.id.as_str())
                .collect();
            println!("{}", ids.join(" "));
        }
        (Some("pick"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => match session.pick(n - 1) {
                Some(picked) => println!("+ {}", picked),
                None => println!("{}", error_line("no such result")),
            },
            _ => println!("{}", error_line("usage: :pick N (1-based)")),
        },
        (Some("copy"), _) => {
            if session.collector().is_empty() {
                println!("{}", hint("(collector is empty)"));
            } else {
                println!("{}", session.collector().text());
            }
        }
        (Some("clear"), _) => {
            session.clear_collector();
            println!("{}", hint("collector cleared"));
        }
        _ => println!("{}", error_line(&format!("unknown command ':{}'", command))),
    }
    true
}

fn print_session_results(session: &PickerSession, limit: usize) {
    let results = session.results();
    if !results.is_empty() {
        let numbered: Vec<String> = results
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, c)| {
                let number = paint(Color::Gray, Weight::Normal, &(i + 1).to_string());
                format!("{} {}", number, c)
            })
            .collect();
        println!("{}", numbered.join("  "));
    }
    if let Some(message) = session.result_message() {
        println!("{}", hint(&message));
    }
}
