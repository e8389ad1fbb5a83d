//! Analysis adapter between the HTTP handlers and a [`DocumentAnalyzer`]

use std::sync::Arc;
use std::time::Duration;

use prosa::{Document, DocumentAnalyzer, DocumentOptions};
use tracing::{error, warn};

use crate::errors::{ApiError, Result};
use crate::models::{EntityDto, SentenceDto, TokenDto};

/// Runs one analysis per request and projects the document for each endpoint
///
/// The analyzer runs on the blocking pool and is bounded by `timeout`.
/// A timed-out analysis keeps its blocking thread until it returns; its
/// result is dropped.
#[derive(Clone)]
pub struct AnalysisService {
  analyzer: Arc<dyn DocumentAnalyzer>,
  timeout: Duration,
}

impl AnalysisService {
  /// Creates the adapter
  ///
  /// # Arguments
  /// * `analyzer` - Shared analyzer (production: `ProseAnalyzer`, tests: stubs)
  /// * `timeout` - Upper bound on one analysis
  #[must_use]
  pub fn new(analyzer: Arc<dyn DocumentAnalyzer>, timeout: Duration) -> Self {
    Self { analyzer, timeout }
  }

  /// Tokens with POS tag and IOB label, in document order
  ///
  /// # Errors
  /// Analysis failure or timeout
  pub async fn tokens(&self, text: String) -> Result<Vec<TokenDto>> {
    let options = DocumentOptions::none().with_tag().with_extract();
    let document = self.analyze(text, options).await?;
    Ok(document.tokens.into_iter().map(TokenDto::from).collect())
  }

  /// Named entities, in document order
  ///
  /// # Errors
  /// Analysis failure or timeout
  pub async fn entities(&self, text: String) -> Result<Vec<EntityDto>> {
    let options = DocumentOptions::none().with_extract();
    let document = self.analyze(text, options).await?;
    Ok(document.entities.into_iter().map(EntityDto::from).collect())
  }

  /// Sentences, in document order
  ///
  /// # Errors
  /// Analysis failure or timeout
  pub async fn sentences(&self, text: String) -> Result<Vec<SentenceDto>> {
    let options = DocumentOptions::none().with_segment();
    let document = self.analyze(text, options).await?;
    Ok(document.sentences.into_iter().map(SentenceDto::from).collect())
  }

  async fn analyze(&self, text: String, options: DocumentOptions) -> Result<Document> {
    // CPU bound: keep it off the async workers
    let analyzer = Arc::clone(&self.analyzer);
    let task = tokio::task::spawn_blocking(move || analyzer.analyze(&text, options));

    match tokio::time::timeout(self.timeout, task).await {
      Ok(Ok(Ok(document))) => Ok(document),
      Ok(Ok(Err(e))) => {
        warn!(error = %e, "analysis failed");
        Err(e.into())
      }
      Ok(Err(e)) => {
        error!(error = %e, "analyzer task aborted");
        Err(ApiError::analysis("analyzer task aborted"))
      }
      Err(_) => {
        let timeout_ms = self.timeout.as_millis();
        warn!(timeout_ms, "analysis timed out");
        Err(ApiError::AnalysisTimeout(timeout_ms))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use prosa::{AnalyzerResult, DocEntity, DocSentence, DocToken};

  use super::*;

  /// Records the options of every call and returns a fixed document
  #[derive(Default)]
  struct RecordingAnalyzer {
    calls: Mutex<Vec<DocumentOptions>>,
  }

  impl DocumentAnalyzer for RecordingAnalyzer {
    fn analyze(&self, text: &str, options: DocumentOptions) -> AnalyzerResult<Document> {
      self.calls.lock().unwrap().push(options);
      let mut token = DocToken::new(text, 0, text.len());
      token.tag = "NNP".to_string();
      token.label = "B-GPE".to_string();
      Ok(Document {
        tokens: vec![token],
        sentences: vec![DocSentence {
          text: text.to_string(),
          start: 0,
          end: text.len(),
        }],
        entities: vec![DocEntity {
          text: text.to_string(),
          label: "GPE".to_string(),
          start: 0,
          end: text.len(),
        }],
      })
    }
  }

  fn service(analyzer: &Arc<RecordingAnalyzer>) -> AnalysisService {
    let shared: Arc<dyn DocumentAnalyzer> = analyzer.clone();
    AnalysisService::new(shared, Duration::from_secs(5))
  }

  #[tokio::test]
  async fn each_endpoint_requests_only_its_stages() {
    let analyzer = Arc::new(RecordingAnalyzer::default());
    let service = service(&analyzer);

    service.tokens("Utrecht".to_string()).await.unwrap();
    service.entities("Utrecht".to_string()).await.unwrap();
    service.sentences("Utrecht".to_string()).await.unwrap();

    let calls = analyzer.calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].tag && calls[0].extract && !calls[0].segment);
    assert!(calls[1].extract && !calls[1].segment);
    assert!(calls[2].segment && !calls[2].extract);
  }

  #[tokio::test]
  async fn projections_keep_only_public_fields() {
    let analyzer = Arc::new(RecordingAnalyzer::default());
    let service = service(&analyzer);

    let tokens = service.tokens("Utrecht".to_string()).await.unwrap();
    assert_eq!(
      tokens,
      vec![TokenDto {
        tag: "NNP".to_string(),
        text: "Utrecht".to_string(),
        label: "B-GPE".to_string(),
      }]
    );

    let entities = service.entities("Utrecht".to_string()).await.unwrap();
    assert_eq!(entities[0].label, "GPE");

    let sentences = service.sentences("Utrecht".to_string()).await.unwrap();
    assert_eq!(sentences[0].text, "Utrecht");
  }
}
