//! End-to-end scoring through the public API.

mod common;

use common::fixtures::{
    FIELD, ScorerBuilder, VERSION, document, encode, encode_versioned, seeded_vector,
};
use fvscore::{
    DocumentFields, FallbackReason, FeatureVectorScoringPlugin, ScoringError, ScriptParams,
};
use serde_json::json;

#[test]
fn test_self_similarity_at_realistic_dimension() {
    let query = seeded_vector(7, 128);
    let scorer = ScorerBuilder::new()
        .query(&query)
        .base_constant(0.25)
        .factor_constant(4.0)
        .build();

    let score = scorer.calculate_score(Some(&encode(&query))).unwrap();
    assert!((score - 4.25).abs() < 1e-9, "got {score}");
}

#[test]
fn test_cosine_bounded_for_random_documents() {
    let scorer = ScorerBuilder::new().query(&seeded_vector(1, 64)).build();

    for seed in 2..50 {
        let eval = scorer.evaluate(Some(&encode(&seeded_vector(seed, 64)))).unwrap();
        let cosine = eval.cosine().expect("non-zero documents are scored");
        assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&cosine));
        assert_eq!(eval.score(), 1.0 + cosine);
    }
}

#[test]
fn test_ranking_prefers_aligned_documents() {
    let scorer = ScorerBuilder::new().query(&[1.0, 0.0, 0.0]).build();

    let mut docs = vec![
        ("orthogonal", "0,1,0"),
        ("aligned", "2,0,0"),
        ("opposed", "-1,0,0"),
        ("diagonal", "1,1,0"),
    ];
    docs.sort_by(|a, b| {
        let sa = scorer.calculate_score(Some(a.1)).unwrap();
        let sb = scorer.calculate_score(Some(b.1)).unwrap();
        sb.partial_cmp(&sa).unwrap()
    });

    let order: Vec<_> = docs.iter().map(|(name, _)| *name).collect();
    assert_eq!(order, vec!["aligned", "diagonal", "orthogonal", "opposed"]);
}

#[test]
fn test_versioned_documents() {
    let query = [0.5, 0.5, 0.0];
    let scorer = ScorerBuilder::new().query(&query).version(VERSION).build();

    let current = encode_versioned(VERSION, &query);
    let stale = encode_versioned("20230101", &query);

    assert!((scorer.calculate_score(Some(&current)).unwrap() - 2.0).abs() < 1e-12);

    let eval = scorer.evaluate(Some(&stale)).unwrap();
    assert_eq!(eval.fallback_reason(), Some(FallbackReason::VersionMismatch));
    assert_eq!(eval.score(), 1.0);
}

#[test]
fn test_run_against_host_documents() -> anyhow::Result<()> {
    let scorer = ScorerBuilder::new().query(&[3.0, 4.0]).build();

    assert_eq!(scorer.run(&document("3,4"))?, 2.0);
    assert_eq!(scorer.run(&document("   "))?, 1.0);
    assert_eq!(scorer.run(&document("3,4,5"))?, 1.0);

    let json_doc = json!({ FIELD: "4,-3", "title": "orthogonal" });
    let json_doc = json_doc.as_object().unwrap();
    assert_eq!(json_doc.field_value(FIELD), Some("4,-3"));
    assert_eq!(scorer.run(json_doc)?, 1.0);

    let null_doc = json!({ FIELD: null });
    let eval = scorer.evaluate_document(null_doc.as_object().unwrap())?;
    assert_eq!(eval.fallback_reason(), Some(FallbackReason::MissingField));

    Ok(())
}

#[test]
fn test_malformed_component_propagates() {
    let scorer = ScorerBuilder::new().query(&[1.0, 2.0]).build();

    let err = scorer.run(&document("1,2x")).unwrap_err();
    match err {
        ScoringError::Parse { field, source } => {
            assert_eq!(field, FIELD);
            assert_eq!(source.index(), 1);
            assert_eq!(source.token(), "2x");
        }
    }
}

#[test]
fn test_plugin_round_trip_from_json_params() -> anyhow::Result<()> {
    let plugin = FeatureVectorScoringPlugin::new();
    let (script_name, factory) = plugin.script();
    assert_eq!(script_name, fvscore::SCRIPT_NAME);

    let params = ScriptParams::from_json(
        r#"{"field":"feature_vector","inputFeatureVector":"1.0, 0.0","version":"v2","baseConstant":0,"factorConstant":"10"}"#,
    )?;
    let scorer = factory.new_script(&params)?;

    assert_eq!(scorer.calculate_score(Some("v2|1,0"))?, 10.0);
    assert_eq!(scorer.calculate_score(Some("v2|0,1"))?, 0.0);
    assert_eq!(scorer.calculate_score(Some("v1|1,0"))?, 0.0);
    Ok(())
}

#[test]
fn test_shared_scorer_across_threads() {
    let scorer = ScorerBuilder::new().query(&seeded_vector(42, 32)).build();
    let docs: Vec<String> = (0..200).map(|s| encode(&seeded_vector(s, 32))).collect();

    let sequential: Vec<f64> = docs
        .iter()
        .map(|d| scorer.calculate_score(Some(d)).unwrap())
        .collect();

    let parallel: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = docs
            .chunks(25)
            .map(|chunk| {
                let scorer = &scorer;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|d| scorer.calculate_score(Some(d)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, parallel);
}
