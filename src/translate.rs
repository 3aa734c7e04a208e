//! Translation of generated answers into Indian languages
//!
//! Answers are produced in English. A `Translator` renders them in one of
//! the supported languages; `TranslationService` wraps it with the English
//! pass-through and the fixed user-facing messages.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use tracing::error;
use tracing::warn;

use crate::errors::Result;
use crate::llm::GenerationRequest;
use crate::llm::GenerationService;
use crate::rag::AdviceResult;

/// Source language of every generated answer
pub const ENGLISH: &str = "English";

/// Shown instead of a translation when the target language is unknown
pub const LANGUAGE_NOT_SUPPORTED_MESSAGE: &str = "Language not supported.";

/// Shown instead of a translation when the translator fails
pub const TRANSLATION_FAILED_MESSAGE: &str =
    "Translation service failed. Please check your internet connection.";

const TRANSLATION_TEMPERATURE: f32 = 0.2;

/// A supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Label in the native script, as offered to users
    pub label: &'static str,
    /// English name
    pub name: &'static str,
    /// BCP-47 style code
    pub code: &'static str,
}

const fn lang(label: &'static str, name: &'static str, code: &'static str) -> Language {
    Language { label, name, code }
}

/// Official and 8th Schedule languages, plus Bhojpuri
pub static SUPPORTED_LANGUAGES: [Language; 18] = [
    lang("हिन्दी (Hindi)", "Hindi", "hi"),
    lang("অসমীয়া (Assamese)", "Assamese", "as"),
    lang("বাংলা (Bengali)", "Bengali", "bn"),
    lang("ગુજરાતી (Gujarati)", "Gujarati", "gu"),
    lang("कोंकणी (Konkani)", "Konkani", "gom"),
    lang("मैथिली (Maithili)", "Maithili", "mai"),
    lang("മലയാളം (Malayalam)", "Malayalam", "ml"),
    lang("ꯃꯤꯇꯩꯂꯣꯟ (Manipuri/Meitei)", "Manipuri", "mni-Mtei"),
    lang("मराठी (Marathi)", "Marathi", "mr"),
    lang("ଓଡିଆ (Odia)", "Odia", "or"),
    lang("ਪੰਜਾਬੀ (Punjabi)", "Punjabi", "pa"),
    lang("संस्कृतम् (Sanskrit)", "Sanskrit", "sa"),
    lang("संथाली (Santali)", "Santali", "sat"),
    lang("सिन्धी (Sindhi)", "Sindhi", "sd"),
    lang("தமிழ் (Tamil)", "Tamil", "ta"),
    lang("తెలుగు (Telugu)", "Telugu", "te"),
    lang("اردو (Urdu)", "Urdu", "ur"),
    lang("भोजपुरी (Bhojpuri)", "Bhojpuri", "bho"),
];

/// Whether `name` asks for the untranslated English answer
pub fn is_english(name: &str) -> bool {
    let name = name.trim();
    name.eq_ignore_ascii_case(ENGLISH) || name.eq_ignore_ascii_case("en")
}

/// Look up a language by native label, English name or code (case-insensitive)
pub fn find_language(name: &str) -> Option<&'static Language> {
    let name = name.trim();
    SUPPORTED_LANGUAGES.iter().find(|language| {
        language.label == name
            || language.name.eq_ignore_ascii_case(name)
            || language.code.eq_ignore_ascii_case(name)
    })
}

/// Renders English text in another language
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, language: &Language) -> Result<String>;
}

/// Translator backed by the chat generation client
pub struct LlmTranslator {
    generator: Arc<dyn GenerationService>,
}

impl LlmTranslator {
    pub fn new(generator: Arc<dyn GenerationService>) -> Self {
        Self { generator }
    }
}

fn translation_instruction(language: &Language) -> String {
    format!(
        "You are a professional translator for personal-finance content. \
         Translate the user's text from English into {} ({}).\n\
         - Preserve all markdown formatting: headings, bold text and bullet points.\n\
         - Keep numbers, currency amounts (₹), URLs and acronyms such as SIP, UPI or SEBI unchanged.\n\
         - Return ONLY the translated text, with no explanations or preamble.",
        language.name, language.code
    )
}

#[async_trait]
impl Translator for LlmTranslator {
    async fn translate(&self, text: &str, language: &Language) -> Result<String> {
        let request =
            GenerationRequest::new(translation_instruction(language), text, TRANSLATION_TEMPERATURE);
        self.generator.generate(&request).await
    }
}

/// How a translation request was served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    /// English requested; text returned unchanged
    Original,
    Translated,
    Unsupported,
    Failed,
}

/// Translated text, or one of the fixed messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub language: String,
    pub text: String,
    pub status: TranslationStatus,
}

/// Translation with the English pass-through and fixed fallbacks. Never fails.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub fn from_generator(generator: Arc<dyn GenerationService>) -> Self {
        Self::new(Arc::new(LlmTranslator::new(generator)))
    }

    pub async fn translate(&self, text: &str, target_language: &str) -> Translation {
        let outcome = |text: &str, status| Translation {
            language: target_language.to_string(),
            text: text.to_string(),
            status,
        };

        if is_english(target_language) {
            return outcome(text, TranslationStatus::Original);
        }

        let Some(language) = find_language(target_language) else {
            warn!("Unsupported translation target: {}", target_language);
            return outcome(LANGUAGE_NOT_SUPPORTED_MESSAGE, TranslationStatus::Unsupported);
        };

        debug!("Translating {} chars into {}", text.chars().count(), language.code);
        match self.translator.translate(text, language).await {
            Ok(translated) => outcome(&translated, TranslationStatus::Translated),
            Err(e) => {
                error!("Translation into {} failed: {}", language.code, e);
                outcome(TRANSLATION_FAILED_MESSAGE, TranslationStatus::Failed)
            }
        }
    }

    /// Attach a translation of the answer. Fixed (non-generated) answers and
    /// English targets are left alone.
    pub async fn localize(&self, mut advice: AdviceResult, target_language: Option<&str>) -> AdviceResult {
        match target_language {
            Some(target) if advice.status.is_generated() && !is_english(target) => {
                advice.translation = Some(self.translate(&advice.answer, target).await);
                advice
            }
            _ => advice,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;

    use super::*;
    use crate::errors::ArthaVivekError;
    use crate::rag::AdviceStatus;

    /// Prefixes the text with the language code; optionally fails
    struct EchoTranslator {
        fail: bool,
        calls: AtomicUsize,
        last_code: Mutex<Option<String>>,
    }

    impl EchoTranslator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: AtomicUsize::new(0),
                last_code: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(&self, text: &str, language: &Language) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_code.lock().unwrap() = Some(language.code.to_string());
            if self.fail {
                return Err(ArthaVivekError::LlmError("connection reset".to_string()));
            }
            Ok(format!("[{}] {}", language.code, text))
        }
    }

    fn advice(answer: &str, status: AdviceStatus) -> AdviceResult {
        AdviceResult {
            answer: answer.to_string(),
            videos: vec![],
            blogs: vec![],
            status,
            translation: None,
        }
    }

    #[test]
    fn test_find_language_by_label_name_or_code() {
        assert_eq!(find_language("हिन्दी (Hindi)").unwrap().code, "hi");
        assert_eq!(find_language("tamil").unwrap().code, "ta");
        assert_eq!(find_language("MNI-MTEI").unwrap().name, "Manipuri");
        assert!(find_language("Klingon").is_none());
        assert!(find_language("English").is_none());
    }

    #[test]
    fn test_is_english() {
        assert!(is_english("English"));
        assert!(is_english(" en "));
        assert!(!is_english("Hindi"));
    }

    #[tokio::test]
    async fn test_english_passes_through() {
        let translator = EchoTranslator::new(false);
        let service = TranslationService::new(translator.clone());

        let translation = service.translate("Start a SIP early.", "English").await;
        assert_eq!(translation.text, "Start a SIP early.");
        assert_eq!(translation.status, TranslationStatus::Original);
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_language_returns_fixed_message() {
        let translator = EchoTranslator::new(false);
        let service = TranslationService::new(translator.clone());

        let translation = service.translate("Start a SIP early.", "Klingon").await;
        assert_eq!(translation.text, LANGUAGE_NOT_SUPPORTED_MESSAGE);
        assert_eq!(translation.status, TranslationStatus::Unsupported);
        assert_eq!(translation.language, "Klingon");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translator_failure_returns_fixed_message() {
        let service = TranslationService::new(EchoTranslator::new(true));

        let translation = service.translate("Start a SIP early.", "मराठी (Marathi)").await;
        assert_eq!(translation.text, TRANSLATION_FAILED_MESSAGE);
        assert_eq!(translation.status, TranslationStatus::Failed);
    }

    #[tokio::test]
    async fn test_translates_with_resolved_code() {
        let translator = EchoTranslator::new(false);
        let service = TranslationService::new(translator.clone());

        let translation = service.translate("UPI is instant.", "bengali").await;
        assert_eq!(translation.text, "[bn] UPI is instant.");
        assert_eq!(translation.status, TranslationStatus::Translated);
        assert_eq!(translator.last_code.lock().unwrap().as_deref(), Some("bn"));
    }

    #[tokio::test]
    async fn test_localize_only_touches_generated_answers() {
        let service = TranslationService::new(EchoTranslator::new(false));

        let answered = service
            .localize(advice("Save first.", AdviceStatus::Answered), Some("Hindi"))
            .await;
        assert_eq!(answered.answer, "Save first.");
        assert_eq!(answered.translation.unwrap().text, "[hi] Save first.");

        let failed = service
            .localize(advice("Sorry", AdviceStatus::GenerationFailed), Some("Hindi"))
            .await;
        assert!(failed.translation.is_none());

        let english = service
            .localize(advice("Save first.", AdviceStatus::Answered), Some("English"))
            .await;
        assert!(english.translation.is_none());

        let untouched = service
            .localize(advice("Save first.", AdviceStatus::Degraded), None)
            .await;
        assert!(untouched.translation.is_none());
    }

    #[tokio::test]
    async fn test_llm_translator_builds_instruction() {
        struct Capture(Mutex<Option<GenerationRequest>>);

        #[async_trait]
        impl GenerationService for Capture {
            async fn generate(&self, request: &GenerationRequest) -> Result<String> {
                *self.0.lock().unwrap() = Some(request.clone());
                Ok("अनुवाद".to_string())
            }
        }

        let capture = Arc::new(Capture(Mutex::new(None)));
        let translator = LlmTranslator::new(capture.clone());
        let language = find_language("Hindi").unwrap();

        let text = translator.translate("**Budget** first", language).await.unwrap();
        assert_eq!(text, "अनुवाद");

        let request = capture.0.lock().unwrap().clone().unwrap();
        assert!(request.instruction.contains("Hindi (hi)"));
        assert!(request.instruction.contains("markdown"));
        assert_eq!(request.message, "**Budget** first");
    }
}
