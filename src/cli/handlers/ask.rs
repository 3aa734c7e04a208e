//! Advice query handler

use crate::app::ArthaVivek;
use crate::cli::output::print_advice;
use crate::models::Persona;
use crate::translate::find_language;
use crate::translate::is_english;
use crate::ArthaVivekError;
use crate::Result;

pub async fn handle_ask_command(
    app: &ArthaVivek,
    question: &str,
    persona: &str,
    language: Option<&str>,
    json: bool,
) -> Result<()> {
    let persona: Persona = persona.parse()?;
    if let Some(language) = language {
        if !is_english(language) && find_language(language).is_none() {
            return Err(ArthaVivekError::InvalidInput(format!(
                "Language not supported: {language}"
            )));
        }
    }

    let advice = app.pipeline()?.get_advice(question, persona).await;
    let advice = app.translation()?.localize(advice, language).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print_advice(&advice);
    }

    Ok(())
}
