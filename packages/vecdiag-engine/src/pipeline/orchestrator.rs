//! Analysis orchestrator
//!
//! Composes compiler invocation, dependency extraction, classification and
//! suggestion into one analysis, and keeps the session store.

use super::report::render_text;
use crate::config::EngineConfig;
use crate::errors::Result;
use crate::features::compiler::{CompilerPort, GccCompiler};
use crate::features::dependency::DependencyAnalyzer;
use crate::features::diagnostics::{
    base_status, extract_diagnostic_messages, vectorization_issues, DiagnosticClassifier,
};
use crate::features::session::{FailedAttempt, SessionStore, TransformRecord};
use crate::features::suggestion::SuggestionEngine;
use crate::shared::models::VectorizationAnalysis;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Vectorization analysis orchestrator
pub struct AnalysisOrchestrator {
    config: EngineConfig,
    compiler: Arc<dyn CompilerPort>,
    analyzer: DependencyAnalyzer,
    classifier: DiagnosticClassifier,
    suggester: SuggestionEngine,
    sessions: SessionStore,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator backed by the configured GCC executable
    pub fn new(config: EngineConfig) -> Self {
        let compiler = Arc::new(GccCompiler::new(config.compiler.clone()));
        Self::with_compiler(config, compiler)
    }

    /// Create with a custom compiler collaborator
    pub fn with_compiler(config: EngineConfig, compiler: Arc<dyn CompilerPort>) -> Self {
        Self {
            config,
            compiler,
            analyzer: DependencyAnalyzer::new(),
            classifier: DiagnosticClassifier::new(),
            suggester: SuggestionEngine::new(),
            sessions: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Session store owned by this orchestrator
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Create (or reset) a session
    pub async fn create_session(&self, session_id: &str) -> String {
        self.sessions.create(session_id);
        info!("Created compilation session {}", session_id);
        format!("Created compilation session: {session_id}")
    }

    /// Analyze why `source` does or does not vectorize
    ///
    /// With a known `session_id`, the session's successful transforms feed
    /// the suggestions and the result is appended to its history. An unknown
    /// id is ignored.
    pub async fn analyze(
        &self,
        source: &str,
        session_id: Option<&str>,
    ) -> Arc<VectorizationAnalysis> {
        let start = Instant::now();

        let output = self.compiler.compile(source).await;
        let dependencies = self.analyzer.analyze(source);

        let messages = extract_diagnostic_messages(&output.stderr);
        let base = base_status(&output.outcome, &messages);
        let issues = vectorization_issues(&messages);
        let status = self.classifier.classify(base, &dependencies, &issues);

        let prior = session_id.and_then(|id| self.sessions.successful_transforms(id));
        let suggestions =
            self.suggester
                .suggest(source, &dependencies, &issues, prior.as_deref());

        let analysis = Arc::new(
            VectorizationAnalysis::new(status, source)
                .with_dependencies(dependencies)
                .with_messages(messages)
                .with_suggestions(suggestions),
        );

        if let Some(id) = session_id {
            if !self.sessions.append_history(id, Arc::clone(&analysis)) {
                debug!(session = id, "unknown session, analysis not recorded");
            }
        }

        info!(
            compiler = self.compiler.name(),
            status = %analysis.status,
            base = %base,
            dependencies = analysis.dependencies.len(),
            suggestions = analysis.suggested_transformations.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "analysis complete"
        );

        analysis
    }

    /// Analyze and render the text report
    pub async fn analyze_report(&self, source: &str, session_id: Option<&str>) -> String {
        let analysis = self.analyze(source, session_id).await;
        render_text(&analysis, &self.config.report)
    }

    /// Record a transformation that made a loop vectorize
    pub fn record_successful_transform(
        &self,
        session_id: &str,
        record: TransformRecord,
    ) -> Result<()> {
        debug!(
            session = session_id,
            variable = %record.variable,
            transform = %record.transform_type,
            "recording successful transform"
        );
        Ok(self.sessions.record_success(session_id, record)?)
    }

    /// Record a transformation that did not help
    pub fn record_failed_attempt(&self, session_id: &str, attempt: FailedAttempt) -> Result<()> {
        debug!(
            session = session_id,
            variable = %attempt.variable,
            reason = %attempt.reason,
            "recording failed attempt"
        );
        Ok(self.sessions.record_failure(session_id, attempt)?)
    }

    /// Store pattern data under `key` in a session
    pub fn learn_pattern(
        &self,
        session_id: &str,
        key: impl Into<String>,
        data: serde_json::Value,
    ) -> Result<()> {
        Ok(self.sessions.learn_pattern(session_id, key, data)?)
    }

    /// Drop all sessions
    pub fn shutdown(&self) {
        let dropped = self.sessions.len();
        self.sessions.clear();
        info!("Orchestrator shut down, {} sessions dropped", dropped);
    }
}
