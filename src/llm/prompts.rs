//! Prompt used to condense raw article text into a knowledge passage

use super::GenerationRequest;

/// Longest slice of article text sent for summarisation, in characters
pub const MAX_SOURCE_CHARS: usize = 4000;

const SUMMARY_INSTRUCTION: &str = "You are an expert financial analyst. Your job is to read the \
provided article text and create a concise, easy-to-understand summary.\n\
This summary will be the 'content' field in a larger JSON object.\n\
Focus on extracting the key educational points. The summary should be detailed enough to be \
useful on its own.";

/// Build the summarisation request for one article
pub fn build_summary_request(source_text: &str, temperature: f32) -> GenerationRequest {
    let excerpt: String = source_text.chars().take(MAX_SOURCE_CHARS).collect();
    let message = format!(
        "Please read the following article text and provide a detailed but simplified summary.\n\n\
         Article Text: \"{excerpt}\""
    );
    GenerationRequest::new(SUMMARY_INSTRUCTION, message, temperature)
}
