use larder::{
    InMemorySource, MatchConfig, MatchRecord, Matcher, MealTypeFilter, NormalizeConfig,
    RecipeCandidate, UserInventory, normalize, normalize_with,
};

fn catalog() -> Vec<RecipeCandidate> {
    vec![
        RecipeCandidate::new("1", "Shakshuka", ["egg", "tomato", "onion", "cumin"]),
        RecipeCandidate::new("2", "Tomato soup", ["tomato", "onion", "butter"]),
        RecipeCandidate::new("3", "French omelette", ["egg", "butter"]),
        RecipeCandidate::new("4", "Caprese", ["tomato", "mozzarella", "basil"]),
        RecipeCandidate::new("5", "Onion rings", ["onion", "flour", "egg", "oil"]),
        RecipeCandidate::new("6", "Boiled egg", ["egg"]),
    ]
}

fn summary(records: &[MatchRecord]) -> Vec<(String, usize, usize, bool)> {
    records
        .iter()
        .map(|r| {
            (
                r.candidate.id.clone(),
                r.match_count,
                r.missing_count,
                r.perfect,
            )
        })
        .collect()
}

#[test]
fn normalization_is_idempotent_for_every_config() {
    let inputs = [
        "  Green   Onion ",
        "Jalapen\u{0303}o, sliced",
        "ＴＯＦＵ",
        "salt & pepper",
        "",
    ];
    for normalize_unicode in [false, true] {
        for collapse_whitespace in [false, true] {
            for strip_punctuation in [false, true] {
                let cfg = NormalizeConfig {
                    normalize_unicode,
                    collapse_whitespace,
                    strip_punctuation,
                    ..Default::default()
                };
                for input in inputs {
                    let once = normalize_with(input, &cfg);
                    let twice = normalize_with(once.as_str(), &cfg);
                    assert_eq!(once, twice, "not idempotent for {input:?} with {cfg:?}");
                }
            }
        }
    }
}

#[test]
fn equivalent_inventories_produce_identical_results() {
    let matcher = Matcher::with_defaults();
    let a = UserInventory::new(["Tomato", " ONION "], ["egg"]);
    let b = UserInventory::new(["tomato", "onion"], ["EGG  "]);

    let tokens_a = matcher.user_tokens(&a).unwrap();
    let tokens_b = matcher.user_tokens(&b).unwrap();
    assert_eq!(tokens_a, tokens_b);

    let run_a = matcher.match_candidates(catalog(), &tokens_a);
    let run_b = matcher.match_candidates(catalog(), &tokens_b);
    assert_eq!(run_a, run_b);
}

#[test]
fn repeated_runs_are_identical() {
    let matcher = Matcher::with_defaults();
    let tokens = matcher
        .user_tokens(&UserInventory::new(["egg", "tomato"], ["butter"]))
        .unwrap();

    let first = summary(&matcher.match_candidates(catalog(), &tokens));
    for _ in 0..20 {
        assert_eq!(summary(&matcher.match_candidates(catalog(), &tokens)), first);
    }
}

#[test]
fn batch_ranking_is_fully_determined() {
    let matcher = Matcher::with_defaults();
    let tokens = matcher
        .user_tokens(&UserInventory::new(["egg", "tomato"], ["butter"]))
        .unwrap();

    let records = matcher.match_candidates(catalog(), &tokens);
    assert_eq!(
        summary(&records),
        vec![
            ("6".to_string(), 1, 0, true),
            ("3".to_string(), 2, 0, true),
            ("2".to_string(), 2, 1, false),
            ("1".to_string(), 2, 2, false),
            ("4".to_string(), 1, 2, false),
            ("5".to_string(), 1, 3, false),
        ]
    );
}

#[test]
fn streaming_ranking_is_fully_determined() {
    let matcher = Matcher::new(MatchConfig::streaming(3), NormalizeConfig::default()).unwrap();
    let tokens = matcher
        .user_tokens(&UserInventory::new(["egg", "tomato"], ["butter"]))
        .unwrap();

    let records = matcher.match_candidates(catalog(), &tokens);
    assert_eq!(
        summary(&records),
        vec![
            ("3".to_string(), 2, 0, true),
            ("2".to_string(), 2, 1, false),
            ("1".to_string(), 2, 2, false),
        ]
    );
}

#[tokio::test]
async fn search_through_source_matches_direct_scoring() {
    let matcher = Matcher::with_defaults();
    let inventory = UserInventory::new(["egg"], ["butter", "tomato"]);
    let source = InMemorySource::new(catalog());

    let searched = matcher
        .search(&source, &inventory, &MealTypeFilter::new())
        .await
        .unwrap();
    let tokens = matcher.user_tokens(&inventory).unwrap();
    let direct = matcher.match_candidates(catalog(), &tokens);

    assert_eq!(searched, direct);
}

#[test]
fn token_equality_follows_normalized_value() {
    assert_eq!(normalize("Basil"), normalize(" basil"));
    assert_ne!(normalize("basil"), normalize("basil leaves"));
    assert!(normalize("basil").overlaps(&normalize("basil leaves")));
}
