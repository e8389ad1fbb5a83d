//! API state definition

use std::sync::Arc;

use prosa::DocumentAnalyzer;

use crate::config::Config;
use crate::service::AnalysisService;

/// Application state
///
/// Shared by every request; read-only after startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Arc<Config>,
  /// Analysis adapter
  pub service: AnalysisService,
}

impl AppState {
  /// Creates a new AppState
  ///
  /// - Production: `Arc::new(ProseAnalyzer::new())`
  /// - Test: a stub analyzer
  #[must_use]
  pub fn new(config: Config, analyzer: Arc<dyn DocumentAnalyzer>) -> Self {
    let service = AnalysisService::new(analyzer, config.analysis_timeout);
    Self {
      config: Arc::new(config),
      service,
    }
  }
}
