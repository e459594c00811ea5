use std::sync::Arc;

use medisense_analysis::Analyzer;
use medisense_bedrock::transaction::{ReportAnalyzer, ReportEnhancer};
use medisense_storage::expiring::{ExpiringStore, MemoryExpiringStore};
use medisense_storage::otp::OtpService;
use medisense_storage::persistence::{AnalysisStore, MemoryAnalysisStore, S3AnalysisStore};
use medisense_storage::session::SessionService;

use crate::config::{ServiceConfig, StoreBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub analyses: Arc<dyn AnalysisStore>,
    pub otp: Arc<OtpService>,
    pub sessions: Arc<SessionService>,
    /// Present only when a Bedrock model is configured.
    pub report_analyzer: Option<Arc<dyn ReportEnhancer>>,
}

impl AppState {
    /// State with in-process collaborators only. Never touches AWS.
    pub fn in_memory(config: &ServiceConfig) -> Self {
        let analyses: Arc<dyn AnalysisStore> = Arc::new(MemoryAnalysisStore::new());
        Self::assemble(config, analyses, None)
    }

    pub async fn from_config(config: &ServiceConfig) -> Self {
        if config.store == StoreBackend::Memory && config.bedrock_model.is_none() {
            return Self::in_memory(config);
        }

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;

        let analyses: Arc<dyn AnalysisStore> = match config.store {
            StoreBackend::S3 => Arc::new(S3AnalysisStore::new(
                medisense_storage::client::build_client(&sdk_config),
                config.bucket.clone(),
            )),
            StoreBackend::Memory => Arc::new(MemoryAnalysisStore::new()),
        };

        let report_analyzer = config.bedrock_model.as_ref().map(|model_id| {
            Arc::new(ReportAnalyzer::new(
                medisense_bedrock::client::build_client(&sdk_config),
                model_id.clone(),
                config.enhanced_timeout,
            )) as Arc<dyn ReportEnhancer>
        });

        Self::assemble(config, analyses, report_analyzer)
    }

    fn assemble(
        config: &ServiceConfig,
        analyses: Arc<dyn AnalysisStore>,
        report_analyzer: Option<Arc<dyn ReportEnhancer>>,
    ) -> Self {
        // One store backs both codes and sessions; their keys are prefixed.
        let expiring: Arc<dyn ExpiringStore<String>> =
            Arc::new(MemoryExpiringStore::<String>::new());
        Self {
            analyzer: Analyzer::new().with_debug(config.development),
            analyses,
            otp: Arc::new(OtpService::new(expiring.clone(), config.otp_ttl)),
            sessions: Arc::new(SessionService::new(expiring, config.session_ttl)),
            report_analyzer,
        }
    }
}
