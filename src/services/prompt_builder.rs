use crate::{
    constants::prompts::{FORMAT_INSTRUCTIONS, NOTES_INSTRUCTIONS, QUIZ_INSTRUCTIONS},
    models::domain::GenerationRequest,
};

/// Builds the instruction sent to the generation endpoint. Expects a topic
/// that has already been trimmed and validated.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!(
        "You are an expert educational assistant. Create study material for the topic: \"{}\" at {} level.\n\n",
        request.topic, request.difficulty
    );

    if request.content_type.includes_notes() {
        prompt.push_str(NOTES_INSTRUCTIONS);
    }

    if request.content_type.includes_quiz() {
        prompt.push_str(QUIZ_INSTRUCTIONS);
    }

    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}
