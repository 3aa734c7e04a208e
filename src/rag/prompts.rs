//! Prompts for financial advice queries

use crate::models::Persona;

/// Instruction/message pair handed to the generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvicePrompt {
    pub instruction: String,
    pub message: String,
}

/// Build the persona-aware system instruction
pub fn build_system_instruction(persona: Persona) -> String {
    format!(
        r"You are 'Arthavivek', a friendly and wise financial coach for India's youth.
Your user is a '{persona}'. Your goal is to provide simple, safe, and encouraging financial education, NOT specific investment advice.
RULES:
1.  Use the provided 'CONTEXT' to form your primary answer.
2.  Format your answer using markdown. Use headings, bold text, and bullet points to make it easy to read.
3.  **If the user's question is not related to finance, economics, investing, or careers, you MUST politely decline to answer. Gently guide them back to financial topics. Do not answer non-financial questions.**
4.  Do NOT recommend any specific stocks, mutual funds, or products.
5.  Speak in a mix of simple English and Hindi (Hinglish).
6.  Keep the tone encouraging, like a knowledgeable friend.
7.  Do not include a disclaimer in your response, as it is already handled by the user interface."
    )
}

/// Build the user turn: context block, then the question as asked
pub fn build_user_message(context: &str, query: &str) -> String {
    format!("CONTEXT:\n{context}\n\nMY QUESTION:\n{query}")
}

pub fn build_advice_prompt(context: &str, query: &str, persona: Persona) -> AdvicePrompt {
    AdvicePrompt {
        instruction: build_system_instruction(persona),
        message: build_user_message(context, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_persona() {
        let instruction = build_system_instruction(Persona::Student);
        assert!(instruction.contains("Your user is a 'Student (विद्यार्थी)'"));

        let instruction = build_system_instruction(Persona::Professional);
        assert!(instruction.contains("Early-Career Professional (युवा पेशेवर)"));
    }

    #[test]
    fn test_instruction_carries_constraints() {
        let instruction = build_system_instruction(Persona::Student);
        assert!(instruction.contains("'CONTEXT'"));
        assert!(instruction.contains("markdown"));
        assert!(instruction.contains("politely decline"));
        assert!(instruction.contains("Do NOT recommend any specific stocks"));
        assert!(instruction.contains("Hinglish"));
        assert!(instruction.contains("Do not include a disclaimer"));
    }

    #[test]
    fn test_instruction_differs_only_by_persona() {
        let student = build_system_instruction(Persona::Student);
        let professional = build_system_instruction(Persona::Professional);
        assert_ne!(student, professional);
        assert_eq!(
            student.replace(Persona::Student.label(), ""),
            professional.replace(Persona::Professional.label(), "")
        );
    }

    #[test]
    fn test_user_message_layout() {
        let message = build_user_message("SIPs start at ₹100.", "Can I invest ₹500?");
        assert_eq!(
            message,
            "CONTEXT:\nSIPs start at ₹100.\n\nMY QUESTION:\nCan I invest ₹500?"
        );
    }

    #[test]
    fn test_query_is_not_transformed() {
        let query = "  what's  an   ELSS?? ";
        let prompt = build_advice_prompt("ctx", query, Persona::Student);
        assert!(prompt.message.ends_with(query));
    }
}
