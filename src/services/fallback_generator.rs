//! Canned study material used when no generation backend is configured.
//!
//! Output is a pure function of the request: the same topic, difficulty and
//! content type always give the same bytes.

use crate::models::domain::GenerationRequest;

pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// One demo multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoQuestion {
    pub heading: &'static str,
    pub stem: String,
    pub options: [&'static str; 4],
    pub correct: char,
    pub explanation: String,
}

pub fn generate(request: &GenerationRequest) -> String {
    let topic = request.topic.as_str();
    let difficulty = request.difficulty.as_str();

    let mut content = format!(
        "# {topic}\n**Difficulty Level:** {}\n\n",
        difficulty.to_uppercase()
    );

    if request.content_type.includes_notes() {
        content.push_str(&notes_section(topic, difficulty));
    }

    if request.content_type.includes_quiz() {
        content.push_str(&quiz_section(topic, difficulty));
    }

    content
}

fn notes_section(topic: &str, difficulty: &str) -> String {
    let mut notes = String::from("## 📖 Comprehensive Summary\n\n");

    notes.push_str(&format!(
        "{topic} is a fundamental concept that plays a crucial role in its field. \
         Understanding {topic} requires a systematic approach that combines theoretical knowledge with practical application. \
         At the {difficulty} level, we'll explore this topic in depth, covering essential principles, real-world applications, and advanced concepts.\n\n"
    ));
    notes.push_str(&format!(
        "The study of {topic} has evolved significantly over time, incorporating new methodologies and technologies. \
         Modern approaches to {topic} emphasize both foundational understanding and innovative problem-solving techniques. \
         This comprehensive guide will help you master the core concepts and develop practical skills.\n\n"
    ));

    notes.push_str("### 🕰️ Background and Context\n\n");
    notes.push_str(&format!(
        "{topic} emerged as a response to specific challenges and needs in its domain. \
         Over the years, researchers and practitioners have refined our understanding, leading to the sophisticated frameworks we use today. \
         The evolution of {topic} reflects broader trends in technology, methodology, and theoretical development.\n\n"
    ));

    notes.push_str("### 🎯 Core Concepts and Principles\n\n");
    notes.push_str(&format!(
        "**1. Fundamental Definition:**\n\
         {topic} can be defined as a systematic approach to understanding and solving problems within its domain. \
         It encompasses various techniques, methodologies, and best practices that have been proven effective through research and application.\n\n"
    ));
    notes.push_str(&format!(
        "**2. Key Components:**\n\
         The study of {topic} involves several interconnected components that work together to create a comprehensive framework. \
         Each component plays a vital role in the overall understanding and application of the concept.\n\n"
    ));
    notes.push_str(&format!(
        "**3. Theoretical Framework:**\n\
         The theoretical foundation of {topic} is built on established principles from related fields. \
         These theories provide the conceptual basis for practical applications and guide decision-making processes.\n\n"
    ));

    notes.push_str("### 📌 Essential Key Points\n\n");
    for (label, body) in key_points(topic) {
        notes.push_str(&format!("• **{label}:** {body}\n\n"));
    }

    notes.push_str("### 🚀 Advanced Concepts\n\n");
    notes.push_str(&format!(
        "For {difficulty} level learners, it's important to explore more sophisticated aspects of {topic}. \
         This includes understanding complex interactions, optimization techniques, and advanced problem-solving strategies. \
         Advanced practitioners should also be familiar with edge cases, performance considerations, and scalability issues.\n\n"
    ));

    notes.push_str("### 💡 Practical Tips for Mastery\n\n");
    notes.push_str("**Study Strategies:**\n");
    for tip in STUDY_STRATEGIES {
        notes.push_str(&format!("- {tip}\n"));
    }
    notes.push('\n');
    notes.push_str("**Application Guidelines:**\n");
    for tip in APPLICATION_GUIDELINES {
        notes.push_str(&format!("- {tip}\n"));
    }
    notes.push('\n');

    notes.push_str("### ⚠️ Important Reminders\n\n");
    notes.push_str(&format!(
        "Remember that mastering {topic} is a journey that requires consistent effort and practice. \
         Don't rush through the fundamentals: a strong foundation is essential for advanced understanding. \
         Apply concepts in practical scenarios whenever possible, as hands-on experience reinforces theoretical knowledge. \
         Collaborate with others, ask questions, and don't hesitate to revisit challenging concepts.\n\n"
    ));
    notes.push_str(&format!(
        "The {difficulty} level approach to {topic} balances depth with accessibility, ensuring you build comprehensive understanding \
         while maintaining engagement and practical relevance. Keep practicing, stay curious, and enjoy the learning process!\n\n"
    ));

    notes
}

const STUDY_STRATEGIES: [&str; 5] = [
    "Break down complex concepts into manageable chunks",
    "Practice regularly with hands-on exercises and real-world examples",
    "Connect new knowledge to existing understanding",
    "Seek out diverse resources and perspectives",
    "Engage with communities and experts in the field",
];

const APPLICATION_GUIDELINES: [&str; 5] = [
    "Start with simple scenarios before tackling complex problems",
    "Document your learning process and insights",
    "Experiment with different approaches and techniques",
    "Learn from mistakes and iterate on solutions",
    "Stay updated with latest developments and research",
];

/// The seven bulleted key points, each naming the topic.
pub fn key_points(topic: &str) -> [(&'static str, String); 7] {
    [
        (
            "Foundation and Basics",
            format!(
                "Understanding {topic} begins with grasping its fundamental principles and core definitions. \
                 This includes recognizing the problem space it addresses and the solutions it provides."
            ),
        ),
        (
            "Practical Applications",
            format!(
                "{topic} has numerous real-world applications across various industries and contexts. \
                 From everyday scenarios to complex professional environments, its principles can be applied effectively."
            ),
        ),
        (
            "Methodological Approaches",
            format!(
                "Different methodologies exist for implementing {topic}, each with its own strengths and use cases. \
                 Understanding when and how to apply each approach is crucial for success."
            ),
        ),
        (
            "Best Practices and Standards",
            format!(
                "The field of {topic} has established best practices that guide effective implementation. \
                 Following these standards ensures quality outcomes and minimizes common pitfalls."
            ),
        ),
        (
            "Common Challenges",
            format!(
                "Practitioners often encounter specific challenges when working with {topic}. \
                 Being aware of these challenges and their solutions is essential for effective problem-solving."
            ),
        ),
        (
            "Tools and Resources",
            format!(
                "Various tools, frameworks, and resources are available to support work in {topic}. \
                 Familiarity with these resources enhances efficiency and effectiveness."
            ),
        ),
        (
            "Future Trends",
            format!(
                "The study of {topic} continues to evolve with emerging technologies and methodologies. \
                 Staying informed about trends helps maintain relevance and competitive advantage."
            ),
        ),
    ]
}

/// Lines inside a question block are joined by single line breaks so each
/// one stays a separate formatter line. Blocks end with a paragraph break and
/// a rule.
fn quiz_section(topic: &str, difficulty: &str) -> String {
    let mut quiz = String::from("## 📝 Comprehensive Quiz\n\n");
    quiz.push_str(&format!(
        "Test your understanding of {topic} with these carefully crafted questions:\n"
    ));

    for (index, question) in demo_questions(topic, difficulty).iter().enumerate() {
        quiz.push_str(&format!(
            "{}. **{}:** {}\n",
            index + 1,
            question.heading,
            question.stem
        ));
        for (label, option) in OPTION_LABELS.iter().zip(question.options) {
            quiz.push_str(&format!("{label}) {option}\n"));
        }
        quiz.push_str(&format!("**Correct Answer: {}**\n", question.correct));
        quiz.push_str(&format!("**Explanation:** {}\n\n---\n", question.explanation));
    }

    quiz.push_str("\n### 🎯 Quiz Summary\n\n");
    quiz.push_str(&format!(
        "These questions cover fundamental concepts, practical applications, learning strategies, best practices, \
         and success factors related to {topic}. Review any questions you found challenging and revisit \
         the corresponding sections in the notes above. Remember, understanding why the right options hold \
         is more valuable than memorizing them.\n\n"
    ));

    quiz
}

/// The five demo questions. Option B is always the right one.
pub fn demo_questions(topic: &str, difficulty: &str) -> [DemoQuestion; 5] {
    [
        DemoQuestion {
            heading: "Fundamental Understanding",
            stem: format!("What is the primary purpose and main objective of {topic}?"),
            options: [
                "To create unnecessary complexity in problem-solving",
                "To provide a systematic, structured approach to understanding and solving domain-specific problems",
                "To replace all traditional methods without consideration",
                "To serve as a theoretical concept with no practical application",
            ],
            correct: 'B',
            explanation: format!(
                "{topic} is designed to provide a systematic and structured approach to problem-solving. \
                 It combines theoretical frameworks with practical methodologies to address real-world challenges effectively. \
                 This approach has been refined through research and practical application across various contexts."
            ),
        },
        DemoQuestion {
            heading: "Practical Applications",
            stem: format!(
                "Which of the following best describes the practical applications of {topic}?"
            ),
            options: [
                "Limited to academic and theoretical contexts only",
                "Applicable across diverse industries and real-world scenarios with proven effectiveness",
                "Only useful in very specific, narrow circumstances",
                "Outdated and no longer relevant in modern contexts",
            ],
            correct: 'B',
            explanation: format!(
                "{topic} has broad practical applications across multiple industries and contexts. \
                 From everyday scenarios to complex professional environments, its principles can be effectively applied. \
                 Real-world implementations have demonstrated its value and versatility in solving diverse challenges."
            ),
        },
        DemoQuestion {
            heading: "Learning Approach",
            stem: format!(
                "At the {difficulty} level, what should be your primary focus when studying {topic}?"
            ),
            options: [
                "Memorizing every detail without understanding context",
                "Understanding core concepts, practicing regularly, and applying knowledge in practical scenarios",
                "Skipping fundamentals and jumping to advanced topics",
                "Only reading theory without any hands-on practice",
            ],
            correct: 'B',
            explanation: format!(
                "Effective learning at the {difficulty} level requires a balanced approach. \
                 Focus on understanding fundamental concepts deeply, practice regularly with hands-on exercises, \
                 and apply your knowledge in practical scenarios. This combination of theory and practice leads to true mastery."
            ),
        },
        DemoQuestion {
            heading: "Best Practices",
            stem: format!("Which approach represents best practices when working with {topic}?"),
            options: [
                "Using a single method for all situations regardless of context",
                "Following established standards, adapting to specific contexts, and learning from experience",
                "Ignoring documented best practices and guidelines",
                "Avoiding collaboration and working in isolation",
            ],
            correct: 'B',
            explanation: format!(
                "Best practices in {topic} involve following established standards while remaining flexible \
                 enough to adapt to specific contexts. Learning from both successes and failures, collaborating with others, \
                 and staying updated with current methodologies are all essential components of professional practice."
            ),
        },
        DemoQuestion {
            heading: "Key Success Factors",
            stem: format!("What is the most important factor for achieving mastery in {topic}?"),
            options: [
                "Speed of learning without depth of understanding",
                "Consistent practice, deep understanding of principles, and practical application over time",
                "Memorization of facts without comprehension",
                "Avoiding challenging aspects and focusing only on easy topics",
            ],
            correct: 'B',
            explanation: format!(
                "True mastery of {topic} comes from consistent, deliberate practice combined with \
                 deep understanding of underlying principles. Practical application reinforces learning and reveals nuances \
                 that theory alone cannot teach. This long-term, comprehensive approach builds genuine expertise."
            ),
        },
    ]
}
