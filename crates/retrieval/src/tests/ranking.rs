//! Tests for retrieval ranking correctness.

use crate::corpus::Corpus;
use crate::engine::QueryEngine;
use crate::tfidf::TfidfVectorizer;

#[cfg(test)]
mod tests {
    use super::*;
    use ree_core::AppError;

    /// Helper to build an engine over raw snippet texts.
    fn engine_over(texts: &[&str]) -> QueryEngine {
        let corpus = Corpus::from_pairs(
            texts
                .iter()
                .map(|t| (t.to_string(), "test.txt".to_string())),
        );
        let model = TfidfVectorizer::default()
            .fit(corpus.documents())
            .unwrap();
        QueryEngine::new(corpus, model)
    }

    const MAGNET_CORPUS: [&str; 3] = [
        "Neodymium is used in magnets.",
        "Dysprosium improves magnet performance at high temperature.",
        "Lanthanum is used in catalysts.",
    ];

    #[test]
    fn test_magnet_scenario_ranks_related_documents_first() {
        let engine = engine_over(&MAGNET_CORPUS);

        let answer = engine.answer("magnet", 2).unwrap();

        assert_eq!(answer.evidence.len(), 2);

        // The two magnet documents are retrieved; the catalyst one is not
        let texts: Vec<&str> = answer.evidence.iter().map(|e| e.text.as_str()).collect();
        assert!(texts.contains(&MAGNET_CORPUS[0]));
        assert!(texts.contains(&MAGNET_CORPUS[1]));
        assert!(!texts.contains(&MAGNET_CORPUS[2]));

        // The synthesized answer is drawn only from the retrieved texts
        assert_eq!(
            answer.synthesized,
            format!("{} {}", texts[0], texts[1])
        );
    }

    #[test]
    fn test_scores_are_ordered_descending() {
        let engine = engine_over(&[
            "Neodymium magnets drive motors.",
            "Magnet alloys and magnet coatings.",
            "Lanthanum catalysts crack oil.",
            "Cerium polishes glass.",
        ]);

        let answer = engine.answer("magnet alloys", 4).unwrap();

        for pair in answer.evidence.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "Scores should be ordered: {} >= {}",
                pair[0].score,
                pair[1].score
            );
        }
    }

    #[test]
    fn test_equal_scores_keep_corpus_order() {
        // A stopword-only question scores every document 0, so the ranking
        // must fall back to corpus order.
        let engine = engine_over(&MAGNET_CORPUS);

        let answer = engine.answer("the and of", 3).unwrap();

        assert!(answer.evidence.iter().all(|e| e.score == 0.0));
        let texts: Vec<&str> = answer.evidence.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, MAGNET_CORPUS.to_vec());
    }

    #[test]
    fn test_top_k_bound() {
        let engine = engine_over(&MAGNET_CORPUS);

        assert_eq!(engine.answer("magnet", 1).unwrap().evidence.len(), 1);
        assert_eq!(engine.answer("magnet", 3).unwrap().evidence.len(), 3);
        // More than the corpus holds returns everything, not an error
        assert_eq!(engine.answer("magnet", 10).unwrap().evidence.len(), 3);
    }

    #[test]
    fn test_k_below_one_is_rejected() {
        let engine = engine_over(&MAGNET_CORPUS);

        let err = engine.answer("magnet", 0).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_terms_never_error() {
        let engine = engine_over(&MAGNET_CORPUS);

        let answer = engine.answer("xylophone zeppelin quark", 2).unwrap();

        assert_eq!(answer.evidence.len(), 2);
        assert!(answer.evidence.iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn test_empty_question_returns_first_k_by_index() {
        let engine = engine_over(&MAGNET_CORPUS);

        let answer = engine.answer("", 2).unwrap();

        assert_eq!(answer.evidence.len(), 2);
        assert_eq!(answer.evidence[0].text, MAGNET_CORPUS[0]);
        assert_eq!(answer.evidence[1].text, MAGNET_CORPUS[1]);
    }

    #[test]
    fn test_repeated_answers_are_identical() {
        let engine = engine_over(&MAGNET_CORPUS);

        let first = engine.answer("magnet performance", 2).unwrap();
        let second = engine.answer("magnet performance", 2).unwrap();

        assert_eq!(first.synthesized, second.synthesized);
        assert_eq!(first.evidence.len(), second.evidence.len());
        for (a, b) in first.evidence.iter().zip(second.evidence.iter()) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.source, b.source);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_rebuilt_engine_answers_identically() {
        let first = engine_over(&MAGNET_CORPUS).answer("magnet", 3).unwrap();
        let second = engine_over(&MAGNET_CORPUS).answer("magnet", 3).unwrap();

        assert_eq!(first.synthesized, second.synthesized);
        let scores_a: Vec<f32> = first.evidence.iter().map(|e| e.score).collect();
        let scores_b: Vec<f32> = second.evidence.iter().map(|e| e.score).collect();
        assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn test_synthesized_answer_has_at_most_four_sentences() {
        let engine = engine_over(&[
            "One. Two. Three.",
            "Four. Five. Six.",
            "Seven. Eight. Nine.",
        ]);

        let answer = engine.answer("", 3).unwrap();

        let sentence_count = answer
            .synthesized
            .split_inclusive(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();
        assert!(sentence_count >= 1);
        assert!(sentence_count <= 4);
    }

    #[test]
    fn test_evidence_carries_source_tags() {
        let corpus = Corpus::from_pairs(vec![
            ("From a file.".to_string(), "mining.txt".to_string()),
            ("From a table.".to_string(), "elements.csv".to_string()),
        ]);
        let model = TfidfVectorizer::default()
            .fit(corpus.documents())
            .unwrap();
        let engine = QueryEngine::new(corpus, model);

        let answer = engine.answer("table", 2).unwrap();

        assert_eq!(answer.evidence[0].source, "elements.csv");
        assert_eq!(answer.evidence[1].source, "mining.txt");
    }
}
