//! Annotated-message formatter.
//!
//! Output (Telegram legacy Markdown), one block per non-empty sentence:
//!
//! ```text
//! ► _이 대화의 목적은_
//!
//! ► _내가 뭐라꼬 그랫는지_ ⇨ *내가 뭐라고 그랬는지*
//! ▸ 뭐라꼬 ⇐ '뭐라꼬'는 '뭐라고'의 방언입니다.
//! ▸ 그랫는지 ⇐ '그랫는지'의 옳은 표기는 '그랬는지'입니다.
//!
//! ► _이놈의 봇시키가 알지 모를지_
//! ▸ 봇시키가 ⇐ 맞춤법 오류가 의심되는 구절입니다.
//! ```

use crate::types::{CheckResult, Correction, SentenceResult};

const SENTENCE_MARK: &str = "►";
const NOTE_MARK: &str = "▸";
const CORRECTED_ARROW: &str = "⇨";
const HELP_ARROW: &str = "⇐";

/// Applies corrections in order, each replacing only the first occurrence of its input in the
/// partially corrected text. `no_error` corrections are skipped.
pub fn apply_corrections(sentence: &str, corrections: &[Correction]) -> String {
    corrections
        .iter()
        .filter(|c| c.error_type.is_error())
        .fold(sentence.to_string(), |corrected, c| {
            corrected.replacen(&c.input, &c.output, 1)
        })
}

/// Formats a whole check result. Sentences with empty text produce nothing.
pub fn format_result(result: &CheckResult) -> String {
    let mut message = String::new();
    for sentence in result.sentences.iter().filter(|s| !s.sentence.is_empty()) {
        write_sentence(&mut message, sentence);
    }
    message
}

fn write_sentence(out: &mut String, sentence: &SentenceResult) {
    let notes: String = sentence
        .corrections
        .iter()
        .filter(|c| c.error_type.is_error())
        .map(|c| format!("{} {} {} {}\n", NOTE_MARK, c.input, HELP_ARROW, c.help.join(" ")))
        .collect();

    let corrected = apply_corrections(&sentence.sentence, &sentence.corrections);
    if corrected == sentence.sentence {
        out.push_str(&format!("{} _{}_\n", SENTENCE_MARK, sentence.sentence));
    } else {
        out.push_str(&format!(
            "{} _{}_ {} *{}*\n",
            SENTENCE_MARK, sentence.sentence, CORRECTED_ARROW, corrected
        ));
    }
    out.push_str(&notes);
    out.push('\n');
}
