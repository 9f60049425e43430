pub const NOTES_INSTRUCTIONS: &str = "Provide:
1. A clear summary (2-3 paragraphs)
2. Key points (5-7 bullet points)
3. Important concepts to remember

";

pub const QUIZ_INSTRUCTIONS: &str = "Also create 5 multiple choice questions with:
- 4 options each (A, B, C, D)
- Correct answer marked
- Brief explanation for each answer

";

pub const FORMAT_INSTRUCTIONS: &str = "Format the response in a clear, structured way.";

/// Shown under every generation error.
pub const CREDENTIAL_HINT: &str =
    "Make sure your API key is set in STUDY_API_KEY (or a .env file) and USE_DEMO_MODE=false.";

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please add your API key (set STUDY_API_KEY)";
