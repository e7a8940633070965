//! Library-level tests for the scoring engine
//!
//! Covers the engine's externally observable properties: score bounds,
//! determinism, the documented banding examples, monotonicity, and
//! recommendation gating.

use kina::engine;
use kina::models::{BandLabel, RiskTier, SignalKind, Transcript};
use kina::scoring::{self, ScoringConfig};

/// A healthy sample: varied vocabulary, 2.4 words/sec, two conjunction-rich
/// sentences, mildly positive tone.
const HEALTHY_TEXT: &str = "This morning I walked through the park because the air felt fresh \
and calm. Later I met my neighbor near the market, and we talked about our gardens for a while.";
const HEALTHY_DURATION: f64 = 13.0;

/// A concerning sample: repetitive, slow, choppy, negative.
const CONCERNING_TEXT: &str = "bad. bad. bad. sad. sad. bad.";
const CONCERNING_DURATION: f64 = 30.0;

fn analyze(text: &str, duration: f64) -> kina::models::AnalysisReport {
    engine::analyze_with_defaults(&Transcript::new(text, "en", duration))
        .expect("analysis should succeed")
}

#[test]
fn component_and_overall_scores_stay_in_bounds() {
    let samples = [
        ("", 0.0),
        (HEALTHY_TEXT, HEALTHY_DURATION),
        (CONCERNING_TEXT, CONCERNING_DURATION),
        ("one two three", 1.0),
        ("word", 600.0),
        ("Sentences. Without! Any? Words of note.", 15.0),
    ];
    for (text, duration) in samples {
        let report = analyze(text, duration);
        assert_eq!(report.components.len(), 4);
        for component in &report.components {
            assert!(
                (0.0..=100.0).contains(&component.score),
                "component {} out of bounds: {}",
                component.kind,
                component.score
            );
        }
        assert!(
            (0.0..=100.0).contains(&report.overall_score),
            "overall out of bounds: {}",
            report.overall_score
        );
        assert!(report.cognitive_age >= 20.0);
    }
}

#[test]
fn identical_inputs_yield_identical_reports() {
    let first = analyze(HEALTHY_TEXT, HEALTHY_DURATION);
    let second = analyze(HEALTHY_TEXT, HEALTHY_DURATION);
    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn two_thirds_diversity_lands_one_band_below_optimal() {
    // 9 words, 6 unique -> ratio 0.667 -> the 80-point Good band, not 100.
    let report = analyze(
        "sunny morning walks help and calm sunny morning walks",
        10.0,
    );
    let lexical = report
        .component(SignalKind::LexicalDiversity)
        .expect("lexical component");
    assert_eq!(report.stats.total_words, 9);
    assert_eq!(report.stats.unique_words, 6);
    assert_eq!(lexical.score, 80.0);
    assert_eq!(lexical.band, BandLabel::Good);
}

#[test]
fn optimal_speaking_rate_scores_100() {
    // 75 words in 30 seconds -> 2.5 words/sec.
    let words = vec!["word"; 75].join(" ");
    let report = analyze(&words, 30.0);
    let fluency = report
        .component(SignalKind::SpeechFluency)
        .expect("fluency component");
    assert_eq!(fluency.score, 100.0);
    assert_eq!(fluency.band, BandLabel::Optimal);
}

#[test]
fn conjunction_rich_sentence_of_optimal_length_scores_100() {
    let report = analyze(
        "I went to the store because I needed groceries, and I also wanted to buy flowers.",
        10.0,
    );
    let complexity = report
        .component(SignalKind::SentenceComplexity)
        .expect("complexity component");
    assert_eq!(report.stats.sentence_count, 1);
    assert_eq!(complexity.score, 100.0);
    assert_eq!(complexity.band, BandLabel::Optimal);
}

#[test]
fn cognitive_age_at_optimal_overall_is_baseline() {
    let config = ScoringConfig::default();
    assert!((config.age.estimate(85.0) - 35.0).abs() < 1e-9);
}

#[test]
fn lexical_score_is_monotone_in_the_raw_ratio() {
    let config = ScoringConfig::default();
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=100 {
        let ratio = step as f64 / 100.0;
        let (score, _) = scoring::lookup(&config.bands.lexical, ratio);
        assert!(
            score >= previous,
            "score decreased at ratio {ratio}: {previous} -> {score}"
        );
        previous = score;
    }
}

#[test]
fn healthy_sample_gets_exactly_one_all_clear_message() {
    let report = analyze(HEALTHY_TEXT, HEALTHY_DURATION);
    for component in &report.components {
        assert!(
            component.score >= 70.0,
            "expected all components healthy, {} scored {}",
            component.kind,
            component.score
        );
    }
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("look healthy"));
    assert_eq!(report.risk, RiskTier::Low);
}

#[test]
fn concerning_sample_gets_per_component_messages_in_order() {
    let report = analyze(CONCERNING_TEXT, CONCERNING_DURATION);
    assert_eq!(report.recommendations.len(), 4);
    assert!(report.recommendations[0].contains("Vocabulary"));
    assert!(report.recommendations[1].contains("slow"));
    assert!(report.recommendations[2].contains("Sentence structure"));
    assert!(report.recommendations[3].contains("tone"));
    assert_eq!(report.risk, RiskTier::Higher);
}

#[test]
fn empty_transcript_and_zero_duration_never_panic() {
    let report = analyze("", 0.0);
    for component in &report.components {
        assert_eq!(component.score, 0.0);
        assert_eq!(component.band, BandLabel::VeryPoor);
    }
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.risk, RiskTier::Higher);
}

#[test]
fn reports_are_pure_data_with_no_shared_state() {
    // Concurrent analyses of different inputs must not interfere.
    let healthy = std::thread::spawn(|| analyze(HEALTHY_TEXT, HEALTHY_DURATION));
    let concerning = std::thread::spawn(|| analyze(CONCERNING_TEXT, CONCERNING_DURATION));
    let healthy = healthy.join().expect("healthy analysis");
    let concerning = concerning.join().expect("concerning analysis");
    assert!(healthy.overall_score > concerning.overall_score);
}
