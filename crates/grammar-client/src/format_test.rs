//! Unit tests for the annotated-message formatter.

use super::*;

fn correction(input: &str, output: &str, etype: &str, help: &[&str]) -> Correction {
    Correction {
        input: input.to_string(),
        output: output.to_string(),
        error_type: ErrorType::from(etype.to_string()),
        help: help.iter().map(|s| s.to_string()).collect(),
        help_mobile: Vec::new(),
        examples: Vec::new(),
    }
}

fn sentence(text: &str, corrections: Vec<Correction>) -> SentenceResult {
    SentenceResult {
        sentence: text.to_string(),
        corrections,
    }
}

fn result(sentences: Vec<SentenceResult>) -> CheckResult {
    CheckResult { sentences }
}

/// **Test: two corrections produce the original ⇨ corrected line and one note per correction, in order.**
#[test]
fn test_dialect_and_spelling_corrections() {
    let checked = result(vec![sentence(
        "내가 뭐라꼬 그랫는지",
        vec![
            correction("뭐라꼬", "뭐라고", "dialect", &["'뭐라꼬'는 '뭐라고'의 방언입니다."]),
            correction(
                "그랫는지",
                "그랬는지",
                "spell",
                &["'그랫는지'의 옳은 표기는 '그랬는지'입니다."],
            ),
        ],
    )]);

    assert_eq!(
        format_result(&checked),
        "► _내가 뭐라꼬 그랫는지_ ⇨ *내가 뭐라고 그랬는지*\n\
         ▸ 뭐라꼬 ⇐ '뭐라꼬'는 '뭐라고'의 방언입니다.\n\
         ▸ 그랫는지 ⇐ '그랫는지'의 옳은 표기는 '그랬는지'입니다.\n\
         \n"
    );
}

/// **Test: a no_error correction without output leaves the sentence unchanged and adds no note.**
#[test]
fn test_no_error_correction_is_ignored() {
    let checked = result(vec![sentence(
        "이 대화의 목적은",
        vec![correction("목적은", "", "no_error", &[])],
    )]);

    let message = format_result(&checked);
    assert_eq!(message, "► _이 대화의 목적은_\n\n");
    assert!(!message.contains('⇨'));
    assert!(!message.contains('▸'));
}

/// **Test: a sentence with empty text contributes nothing, whatever its corrections.**
#[test]
fn test_empty_sentence_is_skipped() {
    let checked = result(vec![
        sentence("", vec![correction("x", "y", "spell", &["ignored"])]),
        sentence("그냥 문장", vec![]),
    ]);

    assert_eq!(format_result(&checked), "► _그냥 문장_\n\n");
}

/// **Test: each correction replaces only the first remaining occurrence of its input.**
#[test]
fn test_first_occurrence_replacement_in_order() {
    let corrections = vec![
        correction("가가", "다다", "spell", &[]),
        correction("가가", "라라", "spell", &[]),
    ];
    assert_eq!(apply_corrections("가가 나나 가가", &corrections), "다다 나나 라라");

    let manual = "가가 나나 가가".replacen("가가", "다다", 1).replacen("가가", "라라", 1);
    assert_eq!(apply_corrections("가가 나나 가가", &corrections), manual);
}

/// **Test: later corrections operate on the partially corrected text, not the original.**
#[test]
fn test_later_correction_sees_partial_result() {
    let corrections = vec![
        correction("ab", "b", "spell", &[]),
        correction("bb", "c", "spell", &[]),
    ];
    assert_eq!(apply_corrections("abb", &corrections), "c");
}

/// **Test: a flagged span with no suggestion still gets a note but no correction arrow.**
#[test]
fn test_suspicious_span_without_change() {
    let checked = result(vec![sentence(
        "이놈의 봇시키가 알지 모를지",
        vec![correction(
            "봇시키가",
            "봇시키가",
            "spell",
            &["맞춤법 오류가 의심되는 구절입니다."],
        )],
    )]);

    assert_eq!(
        format_result(&checked),
        "► _이놈의 봇시키가 알지 모를지_\n▸ 봇시키가 ⇐ 맞춤법 오류가 의심되는 구절입니다.\n\n"
    );
}

/// **Test: help notes are joined with single spaces and blocks keep sentence order.**
#[test]
fn test_multiple_sentences_and_joined_help() {
    let checked = result(vec![
        sentence("이 대화의 목적은", vec![]),
        sentence(
            "그냥 테스트해 보는 거여따.",
            vec![correction(
                "거여따.",
                "거였다.",
                "ending",
                &["올바르지 않은 어미의 사용입니다.", "'거였다.'로 고쳐 씁니다."],
            )],
        ),
    ]);

    assert_eq!(
        format_result(&checked),
        "► _이 대화의 목적은_\n\
         \n\
         ► _그냥 테스트해 보는 거여따._ ⇨ *그냥 테스트해 보는 거였다.*\n\
         ▸ 거여따. ⇐ 올바르지 않은 어미의 사용입니다. '거였다.'로 고쳐 씁니다.\n\
         \n"
    );
}

#[test]
fn test_empty_result_formats_to_empty_string() {
    assert_eq!(format_result(&CheckResult::default()), "");
}

/// **Test: an untagged correction without help still rewrites the sentence and gets an empty note.**
#[test]
fn test_untagged_correction_without_help() {
    let checked = result(vec![sentence(
        "가나",
        vec![Correction {
            error_type: ErrorType::default(),
            ..correction("가", "다", "", &[])
        }],
    )]);

    assert_eq!(format_result(&checked), "► _가나_ ⇨ *다나*\n▸ 가 ⇐ \n\n");
}
