//! Per-locale message templates for quiz statistics.
//!
//! Locale 0 is English (left-to-right); every other locale renders the
//! Hebrew templates (right-to-left), matching the tour's two supported
//! languages. RTL templates substitute numerals with their digit sequence
//! reversed.

use waystone_core::locale::LocaleId;
use waystone_core::text::{TextDirection, format_number};

struct LocaleMessages {
    direction: TextDirection,
    question_stats: &'static str,
    final_score: &'static str,
    no_data: &'static str,
}

const ENGLISH: LocaleMessages = LocaleMessages {
    direction: TextDirection::LeftToRight,
    question_stats: "{percent}% of participants answered correctly.",
    final_score: "You answered {score}/{total} questions correctly!\n{percent}% of participants got this score.",
    no_data: "No data",
};

const HEBREW: LocaleMessages = LocaleMessages {
    direction: TextDirection::RightToLeft,
    question_stats: "%{percent} מתוך המשתתפים ענו נכון.",
    final_score: "ענית על {score}/{total} תשובות נכונות!\n%{percent} מהמשתתפים קיבלו ציון זה.",
    no_data: "אין נתונים",
};

fn messages_for(locale: LocaleId) -> &'static LocaleMessages {
    if locale == 0 { &ENGLISH } else { &HEBREW }
}

/// Truncates a percentage for display, as whole percents.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_percent(percent: f64) -> u32 {
    percent.clamp(0.0, 100.0) as u32
}

/// Renders the per-question statistics line.
#[must_use]
pub fn question_stats_text(locale: LocaleId, percent: f64) -> String {
    let messages = messages_for(locale);
    messages.question_stats.replace(
        "{percent}",
        &format_number(whole_percent(percent), messages.direction),
    )
}

/// Renders the final score message. A missing percentage renders the
/// locale's "no data" marker in place of the number.
#[must_use]
pub fn final_score_text(locale: LocaleId, score: u32, total: u32, percent: Option<f64>) -> String {
    let messages = messages_for(locale);
    let percent_text = percent.map_or_else(
        || messages.no_data.to_owned(),
        |p| format_number(whole_percent(p), messages.direction),
    );
    messages
        .final_score
        .replace("{score}", &format_number(score, messages.direction))
        .replace("{total}", &format_number(total, messages.direction))
        .replace("{percent}", &percent_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_stats_ltr_keeps_digit_order() {
        assert_eq!(
            question_stats_text(0, 87.0),
            "87% of participants answered correctly."
        );
    }

    #[test]
    fn test_question_stats_rtl_reverses_digits() {
        assert_eq!(question_stats_text(1, 87.0), "%78 מתוך המשתתפים ענו נכון.");
    }

    #[test]
    fn test_final_score_ltr() {
        assert_eq!(
            final_score_text(0, 3, 5, Some(42.9)),
            "You answered 3/5 questions correctly!\n42% of participants got this score."
        );
    }

    #[test]
    fn test_final_score_rtl_reverses_each_number() {
        assert_eq!(
            final_score_text(1, 12, 15, Some(87.0)),
            "ענית על 21/51 תשובות נכונות!\n%78 מהמשתתפים קיבלו ציון זה."
        );
    }

    #[test]
    fn test_final_score_without_data() {
        assert_eq!(
            final_score_text(0, 2, 5, None),
            "You answered 2/5 questions correctly!\nNo data% of participants got this score."
        );
    }
}
