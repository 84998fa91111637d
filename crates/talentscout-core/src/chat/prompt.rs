//! Prompt composer for the screening conversation.
//!
//! A fixed instruction template -- role description plus ten numbered
//! screening steps -- with two interpolation points: the rendered
//! conversation history and the candidate's latest input. The screening
//! flow (greet, collect fields, ask tech questions, close) lives entirely
//! in these instructions; the code does not enforce it.

/// Placeholder for the rendered conversation history.
const HISTORY_SLOT: &str = "{history}";

/// Placeholder for the candidate's latest input.
const INPUT_SLOT: &str = "{input}";

/// The fixed screening instruction template.
///
/// The ten-step ordering and both interpolation points are load-bearing:
/// memory growth and model behavior depend on them.
const SCREENING_TEMPLATE: &str = "\
You are a friendly and professional hiring assistant chatbot for a company called TalentScout.
Your goal is to conduct an initial screening of candidates by following these steps:
1. Greet the candidate and introduce yourself.
2. Ask for the candidate's full name.
3. Ask for the candidate's email address.
4. Ask for the candidate's phone number.
5. Ask for the candidate's years of experience.
6. Ask for the candidate's desired position(s).
7. Ask for the candidate's current location.
8. Ask for the candidate's tech stack (programming languages, frameworks, databases, etc.).
9. Based on the tech stack, ask 3-5 relevant technical questions. One by one
10. After the questions, thank the candidate for their time and explain the next steps.

Keep the conversation friendly and professional. Maintain the context of the conversation.

Conversation History:
{history}

Candidate: {input}
Hiring Assistant:
";

/// Compose the exact prompt text sent to the model.
///
/// Substitutes `history` and `input` into the fixed template. No validation
/// of `input`: free text, including the empty string, passes through
/// verbatim.
pub fn compose(history: &str, input: &str) -> String {
    SCREENING_TEMPLATE
        .replacen(HISTORY_SLOT, history, 1)
        .replacen(INPUT_SLOT, input, 1)
}
