use serde_json::{Map, Value};

use cfn_resolvers::errors::ResolverError;
use cfn_resolvers::handlers::{RandomStringResolver, ResourceResolver};

fn props(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

async fn generate(length_property: Value) -> Result<String, ResolverError> {
    let data = RandomStringResolver
        .resolve(&props(serde_json::json!({ "Length": length_property })))
        .await?;
    Ok(data.get("RandomString").cloned().unwrap_or_default())
}

#[tokio::test]
async fn test_generates_exact_length_from_letter_alphabet() {
    let value = generate(serde_json::json!("16")).await.unwrap();

    assert_eq!(value.chars().count(), 16, "Output must be exactly 16 characters");
    assert!(
        value.chars().all(|c| c.is_ascii_alphabetic()),
        "Every character must be in [A-Za-z], got: {value}"
    );
}

#[tokio::test]
async fn test_accepts_numeric_length_property() {
    // CloudFormation sends strings, but a raw JSON number is accepted too
    let value = generate(serde_json::json!(24)).await.unwrap();
    assert_eq!(value.chars().count(), 24);
}

#[tokio::test]
async fn test_rejects_zero_negative_and_non_numeric_lengths() {
    for bad in ["0", "-5", "abc", "1.5", ""] {
        let err = generate(serde_json::json!(bad)).await.unwrap_err();
        assert!(
            matches!(err, ResolverError::InvalidProperty { name: "Length", .. }),
            "Length {bad:?} should be rejected, got: {err}"
        );
    }
}

#[tokio::test]
async fn test_rejects_missing_length() {
    let err = RandomStringResolver
        .resolve(&props(serde_json::json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolverError::MissingProperty("Length")));
}

#[tokio::test]
async fn test_rejects_absurd_lengths() {
    let err = generate(serde_json::json!("1000000")).await.unwrap_err();
    assert!(
        matches!(err, ResolverError::InvalidProperty { name: "Length", .. }),
        "Lengths beyond the cap should be rejected, got: {err}"
    );
}

#[tokio::test]
async fn test_successive_calls_keep_the_invariants() {
    // No exact-inequality assumption; both draws must independently honor
    // the length and charset contract
    for _ in 0..2 {
        let value = generate(serde_json::json!("32")).await.unwrap();
        assert_eq!(value.chars().count(), 32);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
    }
}
