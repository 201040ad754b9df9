//! Integration tests for the full extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{
        extract_records, EmptyClassification, EmptyResponsePolicy, ExtractConfig, ExtractError,
        RecordPipeline,
    };
    use grantscout_domain::GrantType;

    #[test]
    fn test_fenced_response_end_to_end() {
        let text = "以下の案件が見つかりました。\n\
                    ```json\n\
                    {\"items\": [\n\
                      {\"title\": \"小規模事業者持続化補助金\",\n\
                       \"summary\": \"販路開拓の取組を支援\",\n\
                       \"source_url\": \"https://www.example.go.jp/jizokuka\",\n\
                       \"grant_type\": \"補助金\",\n\
                       \"confidence\": 0.85,\n\
                       \"deadline\": \"2025-12-31\",\n\
                       \"amount_max\": 500000,\n\
                       \"rate_max\": 0.66,\n\
                       \"reasons\": [\"一次情報に基づく\"]},\n\
                      {\"title\": \"キャリアアップ助成金\",\n\
                       \"summary\": \"正社員化を支援\",\n\
                       \"source_url\": \"https://www.example.go.jp/careerup\",\n\
                       \"grant_type\": \"助成金\",\n\
                       \"confidence\": 0.7}\n\
                    ]}\n\
                    ```\n\
                    いずれも公式ページをご確認ください。";

        let records = extract_records(text, 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "小規模事業者持続化補助金");
        assert_eq!(records[0].grant_type, GrantType::Subsidy);
        assert_eq!(records[0].amount_max, Some(500_000));
        assert_eq!(records[0].rate_max, Some(0.66));
        assert_eq!(records[1].grant_type, GrantType::Grant);
        assert_eq!(records[1].confidence, 0.7);
    }

    #[test]
    fn test_unfenced_prose_wrapped_response() {
        let text = "調査の結果、次の1件が該当します: \
                    [{\"name\": \"IT導入補助金\", \"description\": \"ツール導入を支援\", \
                      \"url\": \"https://www.example.go.jp/it\"}] \
                    詳細は公式ページ参照。";

        let records = extract_records(text, 10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "IT導入補助金");
        assert_eq!(records[0].summary, "ツール導入を支援");
        assert_eq!(records[0].source_url, "https://www.example.go.jp/it");
        // Missing confidence lands on the fallback value
        assert_eq!(records[0].confidence, 0.2);
    }

    #[test]
    fn test_no_result_prose_yields_empty_success() {
        let text = "条件に合致する補助金・助成金は見つかりませんでした。";
        let records = extract_records(text, 10).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_garbage_yields_undecodable_error() {
        let result = extract_records("Sorry, I cannot help with that.", 10);
        assert!(matches!(
            result,
            Err(ExtractError::UndecodableOutput { .. })
        ));
    }

    #[test]
    fn test_unexpected_shape_is_a_hard_failure() {
        // Valid JSON, but neither an items object nor an array. The no-result
        // classifier must not rescue it even though the text also contains a
        // phrase-free sentence.
        let result = extract_records("{\"ok\": true}", 10);
        assert!(matches!(result, Err(ExtractError::UnexpectedShape { .. })));
    }

    #[test]
    fn test_diagnostic_snippet_is_bounded() {
        let config = ExtractConfig {
            snippet_chars: 32,
            ..ExtractConfig::default()
        };
        let pipeline = RecordPipeline::new(config).unwrap();
        let garbage = "x".repeat(10_000);

        match pipeline.run(&garbage, 5) {
            Err(ExtractError::UndecodableOutput { snippet }) => {
                assert_eq!(snippet.chars().count(), 32);
            }
            other => panic!("expected UndecodableOutput, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_custom_empty_policy() {
        struct AlwaysEmpty;
        impl EmptyResponsePolicy for AlwaysEmpty {
            fn classify(&self, _text: &str) -> EmptyClassification {
                EmptyClassification::LegitimateEmpty
            }
        }

        let pipeline = RecordPipeline::with_policy(ExtractConfig::default(), AlwaysEmpty).unwrap();
        let records = pipeline.run("total nonsense", 5).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_normalized_invariants_hold() {
        let text = "{\"items\": [\
                    {\"title\": \"施設整備補助金\", \"source_url\": \"https://a.go.jp/\"},\
                    {\"name\": \"雇用助成金\", \"link\": \"https://b.go.jp/\", \"confidence\": 0}\
                    ]}";

        let records = extract_records(text, 10).unwrap();
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(record.confidence > 0.0 && record.confidence <= 1.0);
            assert!(record.reasons.len() <= 3);
        }
    }
}
