//! Composition root: builds clients once and hands them to the services

use std::sync::Arc;

use tracing::info;
use tracing::warn;

use crate::config::AppConfig;
use crate::database::Database;
use crate::errors::ArthaVivekError;
use crate::errors::Result;
use crate::hub::KnowledgeHub;
use crate::ingest::Ingestor;
use crate::llm::GenerationService;
use crate::llm::LlmService;
use crate::rag::AdvicePipeline;
use crate::store::KnowledgeStore;
use crate::translate::TranslationService;

/// Returned by services that need the generation client when it could not be built
pub const LLM_NOT_CONFIGURED_MESSAGE: &str =
    "LLM client is not configured; set llm.api_key (or LLM_API_KEY) and check the [llm] settings";

/// Services that exist only when the generation client could be built
struct GenerationServices {
    generator: Arc<dyn GenerationService>,
    pipeline: Arc<AdvicePipeline>,
    translation: Arc<TranslationService>,
}

/// Owns the store and generation clients for the lifetime of the process
pub struct ArthaVivek {
    database: Option<Arc<Database>>,
    generation: Option<GenerationServices>,
    hub: Arc<KnowledgeHub>,
    summary_temperature: f32,
}

impl ArthaVivek {
    /// Connect to the database and build the generation client.
    ///
    /// Neither failure is fatal here. Without a database, advice requests
    /// answer with the unavailable message. Without a generation client,
    /// only the commands that generate text (`pipeline`, `translation`,
    /// summarising `ingestor`) report `ConfigError`.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let generator = match LlmService::from_config(config) {
            Ok(service) => {
                info!("Generation client ready ({})", service.model());
                Some(Arc::new(service) as Arc<dyn GenerationService>)
            }
            Err(e) => {
                warn!("Generation client unavailable: {}", e);
                None
            }
        };

        let database = match connect_database(config).await {
            Ok(database) => {
                info!("Connected to knowledge store");
                Some(Arc::new(database))
            }
            Err(e) => {
                warn!("Knowledge store unavailable: {}", e);
                None
            }
        };

        Ok(Self::from_parts(config, database, generator))
    }

    /// Assemble services from already-built clients
    pub fn from_parts(
        config: &AppConfig,
        database: Option<Arc<Database>>,
        generator: Option<Arc<dyn GenerationService>>,
    ) -> Self {
        let store = database
            .clone()
            .map(|database| database as Arc<dyn KnowledgeStore>);

        let generation = generator.map(|generator| GenerationServices {
            pipeline: Arc::new(AdvicePipeline::from_config(
                config,
                store.clone(),
                generator.clone(),
            )),
            translation: Arc::new(TranslationService::from_generator(generator.clone())),
            generator,
        });
        let hub = Arc::new(KnowledgeHub::new(store, config.updates_limit()));

        Self {
            database,
            generation,
            hub,
            summary_temperature: config.llm.summary_temperature,
        }
    }

    fn generation(&self) -> Result<&GenerationServices> {
        self.generation
            .as_ref()
            .ok_or_else(|| ArthaVivekError::ConfigError(LLM_NOT_CONFIGURED_MESSAGE.to_string()))
    }

    /// # Errors
    /// - `ConfigError` when the generation client is not configured
    pub fn pipeline(&self) -> Result<Arc<AdvicePipeline>> {
        Ok(self.generation()?.pipeline.clone())
    }

    /// # Errors
    /// - `ConfigError` when the generation client is not configured
    pub fn translation(&self) -> Result<Arc<TranslationService>> {
        Ok(self.generation()?.translation.clone())
    }

    pub fn hub(&self) -> Arc<KnowledgeHub> {
        self.hub.clone()
    }

    pub fn database(&self) -> Option<&Arc<Database>> {
        self.database.as_ref()
    }

    pub fn store_available(&self) -> bool {
        self.database.is_some()
    }

    pub fn generation_available(&self) -> bool {
        self.generation.is_some()
    }

    /// Ingestor writing to the database; with `summarize`, records that only
    /// carry source text are summarised with the generation client
    ///
    /// # Errors
    /// - `StoreUnavailable` when no database is connected
    /// - `ConfigError` when `summarize` is set and the generation client is not configured
    pub fn ingestor(&self, summarize: bool) -> Result<Ingestor> {
        let database = self
            .database
            .clone()
            .ok_or(ArthaVivekError::StoreUnavailable)?;
        let ingestor = Ingestor::new(database);
        if !summarize {
            return Ok(ingestor);
        }
        let generator = self.generation()?.generator.clone();
        Ok(ingestor.with_summarizer(generator, self.summary_temperature))
    }
}

async fn connect_database(config: &AppConfig) -> Result<Database> {
    let database = Database::from_config(config).await?;
    database.ping().await?;
    Ok(database)
}
