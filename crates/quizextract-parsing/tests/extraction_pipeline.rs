//! End-to-end tests for the extraction pipeline using an in-memory backend.
//!
//! Each test feeds page texts through [`MockBackend`] so the full path
//! (page joining, segmentation, option detection, numbering) is exercised
//! without a PDF on disk.

use std::path::Path;

use quizextract_core::mock::MockResponse;
use quizextract_core::MockBackend;
use quizextract_parsing::options::is_option_line;
use quizextract_parsing::section::segment_blocks;
use quizextract_parsing::{ParsingError, QuestionExtractor, extract_questions};

const SAMPLE_PDF: &str = "sample.pdf";

/// A two-page quiz with a preamble, a dropped block and mixed markers.
fn mixed_pages() -> Vec<&'static str> {
    vec![
        "Aptitude Practice Paper\nTime: 30 minutes\n1. What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6",
        "2. Name a color?\nA) Red\nQ3 Which is a prime?\n a. 4\n b. 9\n c. 7\nE) 11\n4. Pick the odd one out\nA. apple\nnot an option\nB. banana\n(C) cherry",
    ]
}

#[test]
fn scenario_single_question() {
    let backend = MockBackend::with_pages(["1. What is 2+2?\nA) 3\nB) 4\nC) 5\n"]);
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();

    assert_eq!(result.questions.len(), 1);
    let q = &result.questions[0];
    assert_eq!(q.id, 1);
    assert_eq!(q.section, "general");
    assert_eq!(q.question, "1. What is 2+2?");
    assert_eq!(q.options, vec!["A) 3", "B) 4", "C) 5"]);
    assert_eq!(q.correct_answer, 0);
    assert_eq!(q.explanation, "Extracted from PDF");
}

#[test]
fn scenario_single_option_block_dropped() {
    let backend = MockBackend::with_pages(["2. Name a color?\nA) Red\n"]);
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    assert!(result.questions.is_empty());
    assert_eq!(result.skip_stats.too_few_options, 1);
}

#[test]
fn scenario_no_page_text() {
    let backend = MockBackend::new(MockResponse::Pages(vec![None, Some(String::new())]));
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    assert!(result.questions.is_empty());
}

#[test]
fn open_failure_propagates() {
    let backend = MockBackend::failing("no such file");
    let err = extract_questions(Path::new("missing.pdf"), &backend).unwrap_err();
    assert!(matches!(err, ParsingError::Backend(_)));
    assert!(err.to_string().contains("no such file"));
}

#[test]
fn mixed_document_extracts_expected_questions() {
    let backend = MockBackend::with_pages(mixed_pages());
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();

    let questions: Vec<&str> = result.questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(
        questions,
        vec!["1. What is 2+2?", "Q3 Which is a prime?", "4. Pick the odd one out"]
    );
    assert_eq!(result.questions[1].options, vec!["a. 4", "b. 9", "c. 7"]);
    assert_eq!(result.questions[2].options, vec!["A. apple", "B. banana"]);
}

#[test]
fn page_break_starts_block_when_next_page_opens_with_marker() {
    // The joined text has a newline after page one, so page two's first
    // line is a candidate block start.
    let backend = MockBackend::with_pages(["1. First\nA) a\nB) b", "2. Second\nA) c\nB) d"]);
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    assert_eq!(result.questions.len(), 2);
    assert_eq!(result.questions[0].options, vec!["A) a", "B) b"]);
}

#[test]
fn question_spanning_page_break_keeps_options_from_both_pages() {
    let backend = MockBackend::with_pages(["1. Split question\nA) a", "B) b\nC) c"]);
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.questions[0].options, vec!["A) a", "B) b", "C) c"]);
}

#[test]
fn count_invariant_matches_blocks_with_enough_options() {
    let text = mixed_pages().iter().map(|p| format!("{p}\n")).collect::<String>();
    let extractor = QuestionExtractor::new();

    let qualifying = segment_blocks(&text)
        .into_iter()
        .filter_map(|b| extractor.parse_block(b))
        .filter(|(_, options)| options.len() >= 2)
        .count();

    let result = extractor.extract_from_text(&text);
    assert_eq!(result.questions.len(), qualifying);
}

#[test]
fn ids_are_contiguous_from_one() {
    let backend = MockBackend::with_pages(mixed_pages());
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    let ids: Vec<usize> = result.questions.iter().map(|q| q.id).collect();
    let expected: Vec<usize> = (1..=result.questions.len()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn every_option_matches_marker_and_minimum_holds() {
    let backend = MockBackend::with_pages(mixed_pages());
    let result = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    for q in &result.questions {
        assert!(q.options.len() >= 2, "record {} has too few options", q.id);
        for option in &q.options {
            assert!(is_option_line(option), "non-option leaked: {option:?}");
            assert_eq!(option, option.trim(), "option not trimmed: {option:?}");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let backend = MockBackend::with_pages(mixed_pages());
    let first = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    let second = extract_questions(Path::new(SAMPLE_PDF), &backend).unwrap();
    assert_eq!(first.questions, second.questions);
    assert_eq!(first.skip_stats, second.skip_stats);
    assert_eq!(backend.call_count(), 2);
}
