mod common;

use assert2::check;
use bottle_sniper::comparator::compare;
use bottle_sniper::config::MatchConfig;
use bottle_sniper::engine::Engine;
use bottle_sniper::matcher::Matcher;
use bottle_sniper::model::{CompareError, PriceSign, RawProduct};
use bottle_sniper::normalizer::Normalizer;
use common::{catalog, ids, query};
use rstest::rstest;

#[rstest]
#[case("Blue-Bottle RUM, 700ml ($49.99)", &["blue", "bottle", "rum", "700ml", "4999"])]
#[case("Château   Margaux_2015!", &["château", "margaux", "2015"])]
#[case("A b C d E f G h", &["a", "b", "c", "d", "e"])]
#[case("", &[])]
#[case("   ", &[])]
fn normalize_yields_clean_tokens(#[case] name: &str, #[case] expected: &[&str]) {
    let q = Normalizer::default().normalize(name);
    check!(q.keywords == expected);
    for kw in &q.keywords {
        check!(!kw.is_empty());
        check!(kw.chars().all(|c| c.is_alphanumeric() && !c.is_uppercase()));
    }
}

#[rstest]
#[case(&["blue", "bottle", "rum", "700ml", "deluxe"], true)]
#[case(&["blue", "deluxe", "extra", "rare", "aged"], false)]
#[case(&["bottl", "70"], true)]
#[case(&[], false)]
fn coverage_threshold(#[case] keywords: &[&str], #[case] matched: bool) {
    let entries = catalog(&[("1", "Blue Bottle Rum 700ml", 40.0)]);
    let found = Matcher::default().find_matches(&query(keywords), &entries);
    check!(found.is_empty() != matched);
}

#[test]
fn empty_query_never_matches() {
    let entries = catalog(&[("1", "", 1.0), ("2", "a", 1.0), ("3", "blue bottle", 1.0)]);
    check!(Matcher::default().find_matches(&query(&[]), &entries).is_empty());
}

#[test]
fn results_follow_name_order_not_coverage() {
    let entries = catalog(&[
        ("c", "Cherry rum spiced dark", 3.0),
        ("a", "Apple rum", 1.0),
        ("b", "Banana rum spiced", 2.0),
    ]);
    let matcher = Matcher::new(&MatchConfig {
        min_match_ratio: 0.3,
        ..MatchConfig::default()
    });
    let found = matcher.find_matches(&query(&["rum", "spiced", "dark"]), &entries);
    check!(ids(&found) == vec!["a", "b", "c"]);
}

#[rstest]
#[case(100.0, 80.0, 20.0, 20.0, PriceSign::Cheaper)]
#[case(80.0, 100.0, -20.0, -25.0, PriceSign::MoreExpensive)]
#[case(100.0, 100.0, 0.0, 0.0, PriceSign::Equal)]
fn savings_outcomes(
    #[case] current: f64,
    #[case] listed: f64,
    #[case] delta: f64,
    #[case] percentage: f64,
    #[case] sign: PriceSign,
) {
    let outcome = compare(Some(current), listed).unwrap().unwrap();
    check!(outcome.delta == delta);
    check!((outcome.percentage - percentage).abs() < 1e-9);
    check!(outcome.sign == sign);
}

#[test]
fn zero_reference_price_is_rejected() {
    check!(compare(Some(0.0), 50.0) == Err(CompareError::InvalidPrice(0.0)));
}

#[test]
fn same_input_same_output() {
    let entries = catalog(&[
        ("1", "Blue Bottle Rum 700ml", 40.0),
        ("2", "Blue Bottle Gin", 30.0),
        ("3", "Red Bottle Rum", 35.0),
    ]);
    let engine = Engine::new(&MatchConfig::default(), "https://shop.test/asset/");
    let product = RawProduct {
        name: "Blue Bottle Rum".into(),
        price: Some(45.0),
    };

    let first = serde_json::to_string(&engine.compare_product(&product, &entries).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.compare_product(&product, &entries).unwrap()).unwrap();
    check!(first == second);

    let q1 = engine.normalizer().normalize(&product.name);
    let q2 = engine.normalizer().normalize(&product.name);
    check!(ids(&engine.matcher().find_matches(&q1, &entries)) == ids(&engine.matcher().find_matches(&q2, &entries)));
}

#[test]
fn dedupe_option_changes_threshold_denominator() {
    let entries = catalog(&[("1", "rum 700ml", 10.0)]);
    let name = "700 700 700 oak";

    let plain = MatchConfig::default();
    let q = Normalizer::new(&plain).normalize(name);
    // every repeat counts: 3 of 4 covered, 3 needed
    check!(Matcher::new(&plain).find_matches(&q, &entries).len() == 1);

    let deduped = MatchConfig {
        dedupe_keywords: true,
        ..MatchConfig::default()
    };
    let q = Normalizer::new(&deduped).normalize(name);
    check!(q.keywords == vec!["700", "oak"]);
    // 1 of 2 covered, 2 needed
    check!(Matcher::new(&deduped).find_matches(&q, &entries).is_empty());
}
