//! Embedded demo content: one welcome text, two puzzle symbols, and a
//! short quiz, each in English (locale 0) and Hebrew (locale 1).

use waystone_puzzle::PuzzleEntry;
use waystone_quiz::QuizData;

const PUZZLE_ENTRIES: &str = r#"[
  {
    "symbol_key": "menorah",
    "titles": ["Menorah", "מנורה"]
  },
  {
    "symbol_key": "rosette",
    "titles": ["Rosette", "רוזטה"]
  }
]"#;

const QUIZ: &str = r#"{
  "quiz_id": "waystone-tour",
  "questions": [
    {
      "correct_answer_index": 0,
      "texts": [
        {
          "question": "Which symbol sits at the center of the stone's front panel?",
          "answers": ["The menorah", "The rosette", "The arches"]
        },
        {
          "question": "איזה סמל נמצא במרכז הלוח הקדמי של האבן?",
          "answers": ["המנורה", "הרוזטה", "הקשתות"]
        }
      ]
    },
    {
      "correct_answer_index": 2,
      "texts": [
        {
          "question": "How many flames does the carved lamp hold?",
          "answers": ["Five", "Six", "Seven"]
        },
        {
          "question": "כמה להבות יש למנורה המגולפת?",
          "answers": ["חמש", "שש", "שבע"]
        }
      ]
    }
  ]
}"#;

/// Parses the embedded puzzle entries.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the embedded JSON is malformed.
pub fn puzzle_entries() -> Result<Vec<PuzzleEntry>, serde_json::Error> {
    serde_json::from_str(PUZZLE_ENTRIES)
}

/// Parses the embedded quiz.
///
/// # Errors
///
/// Returns a `serde_json::Error` if the embedded JSON is malformed.
pub fn quiz() -> Result<QuizData, serde_json::Error> {
    serde_json::from_str(QUIZ)
}

/// Welcome text shown by the typewriter widget, per locale.
#[must_use]
pub fn welcome_text(locale: waystone_core::locale::LocaleId) -> &'static str {
    if locale == 0 {
        "Welcome to the stone! Walk around it, find its carved symbols, and test what you learn."
    } else {
        "ברוכים הבאים אל האבן! הקיפו אותה, מצאו את הסמלים המגולפים, ובחנו את מה שלמדתם."
    }
}
