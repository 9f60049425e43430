#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{ContentType, Difficulty, GenerationRequest};

    /// A valid request for the given selection.
    pub fn request(topic: &str, difficulty: Difficulty, content_type: ContentType) -> GenerationRequest {
        GenerationRequest::new(topic, difficulty, content_type).expect("fixture topic is valid")
    }

    /// One request per difficulty/content-type pair.
    pub fn all_selections(topic: &str) -> Vec<GenerationRequest> {
        Difficulty::ALL
            .into_iter()
            .flat_map(|d| ContentType::ALL.into_iter().map(move |c| (d, c)))
            .map(|(d, c)| request(topic, d, c))
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// Asserts `expected` question blocks, each holding options A to D
    /// followed by exactly one highlighted answer.
    pub fn assert_quiz_blocks(markup: &str, expected: usize) {
        let blocks: Vec<&str> = markup
            .split("<div class=\"quiz-question\">")
            .skip(1)
            .collect();
        assert_eq!(blocks.len(), expected, "question block count");

        for (index, block) in blocks.iter().enumerate() {
            let labels: Vec<&str> = block
                .split("<div class=\"quiz-option\">")
                .skip(1)
                .map(|rest| &rest[..2])
                .collect();
            assert_eq!(labels, ["A)", "B)", "C)", "D)"], "options of block {}", index + 1);

            assert_eq!(
                block.matches("<div class=\"correct-answer\">").count(),
                1,
                "answers in block {}",
                index + 1
            );
            let answer = block.find("<div class=\"correct-answer\">");
            let last_option = block.rfind("<div class=\"quiz-option\">");
            assert!(answer > last_option, "answer follows options in block {}", index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::assert_quiz_blocks;

    #[test]
    fn test_quiz_block_assertion_accepts_nested_answer() {
        let markup = concat!(
            "<div class=\"quiz-question\"><strong>1. Q?</strong>",
            "<div class=\"quiz-option\">A) a</div><div class=\"quiz-option\">B) b</div>",
            "<div class=\"quiz-option\">C) c</div><div class=\"quiz-option\">D) d</div>",
            "<div class=\"correct-answer\">✓ Correct: B</div></div>"
        );

        assert_quiz_blocks(markup, 1);
    }

    #[test]
    fn test_all_selections_covers_every_pair() {
        let requests = all_selections("Optics");

        assert_eq!(requests.len(), 9);
        assert!(requests.iter().all(|r| r.topic == "Optics"));
    }
}
