//! Turns raw generated text into display markup.
//!
//! Text transforms run in a fixed order: paragraph breaks, line breaks,
//! `**bold**`, then `*italic*`. Both emphasis rules are non-greedy, so
//! unbalanced or nested markers pair with the nearest star. For quiz
//! content the line-break separated result is then walked line by line to
//! group questions, options and answers into blocks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::ContentType;

const PARAGRAPH_BREAK: &str = "</p><p>";
const LINE_BREAK: &str = "<br>";

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("BOLD is a valid regex pattern"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("ITALIC is a valid regex pattern"));
static QUESTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("QUESTION_LINE is a valid regex pattern"));
static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-D]\)").expect("OPTION_LINE is a valid regex pattern"));
static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)correct|answer").expect("ANSWER_LINE is a valid regex pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    pub markup: String,
    pub question_blocks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Question,
    Option,
    Answer,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    OutsideQuestion,
    InsideQuestion,
}

pub fn format_output(raw: &str, content_type: ContentType) -> FormattedOutput {
    let markup = format_text(raw);

    if !content_type.includes_quiz() {
        return FormattedOutput {
            markup,
            question_blocks: 0,
        };
    }

    let formatted = extract_quiz_structure(&markup);
    log::debug!(
        "Formatted quiz output into {} question block(s)",
        formatted.question_blocks
    );
    formatted
}

/// Escapes, converts breaks and emphasis, and wraps in one paragraph.
pub fn format_text(raw: &str) -> String {
    let text = escape_html(&raw.replace("\r\n", "\n"))
        .replace("\n\n", PARAGRAPH_BREAK)
        .replace('\n', LINE_BREAK);
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");

    format!("<p>{}</p>", text)
}

/// First matching rule wins: question, option, answer keyword, plain text.
pub fn classify_line(line: &str) -> LineKind {
    let visible = strip_paragraph_tags(line);

    if QUESTION_LINE.is_match(visible) {
        LineKind::Question
    } else if OPTION_LINE.is_match(visible) {
        LineKind::Option
    } else if ANSWER_LINE.is_match(line) {
        LineKind::Answer
    } else {
        LineKind::Text
    }
}

pub fn extract_quiz_structure(markup: &str) -> FormattedOutput {
    let mut html = String::with_capacity(markup.len() + 256);
    let mut state = BlockState::OutsideQuestion;
    let mut question_blocks = 0;

    for line in markup.split(LINE_BREAK) {
        match classify_line(line) {
            LineKind::Question => {
                if state == BlockState::InsideQuestion {
                    html.push_str("</div>");
                }
                html.push_str("<div class=\"quiz-question\"><strong>");
                html.push_str(line);
                html.push_str("</strong>");
                state = BlockState::InsideQuestion;
                question_blocks += 1;
            }
            LineKind::Option => {
                html.push_str("<div class=\"quiz-option\">");
                html.push_str(line);
                html.push_str("</div>");
            }
            LineKind::Answer => {
                html.push_str("<div class=\"correct-answer\">✓ ");
                html.push_str(line);
                html.push_str("</div>");
            }
            LineKind::Text => {
                html.push_str(line);
                html.push_str(LINE_BREAK);
            }
        }
    }

    if state == BlockState::InsideQuestion {
        html.push_str("</div>");
    }

    FormattedOutput {
        markup: html,
        question_blocks,
    }
}

/// Paragraph tags from the text transforms are not part of what the reader sees.
fn strip_paragraph_tags(line: &str) -> &str {
    let mut rest = line;
    loop {
        if let Some(stripped) = rest.strip_prefix("</p>") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("<p>") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
