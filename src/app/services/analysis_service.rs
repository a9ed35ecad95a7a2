use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use anyhow::anyhow;

use crate::analysis::report::Report;
use crate::analysis::resolver::{trim_name, ReportResolver, ReportSource};
use crate::app::error::AnalysisError;

pub struct AnalysisService {
  source: Arc<dyn ReportSource>,
}

impl AnalysisService {

  pub fn new(source: Arc<dyn ReportSource>) -> Self {
    AnalysisService { source }
  }

  pub fn builtin() -> Self {
    let resolver: ReportResolver = ReportResolver::builtin();
    log::info!("Loaded {} pre-authored company reports", resolver.known_companies().len());
    AnalysisService::new(Arc::new(resolver))
  }

  /// Trimmed company name, or `InvalidInput` when missing or blank.
  pub fn validate(company: Option<&str>) -> Result<&str, AnalysisError> {
    match company.map(trim_name) {
      Some(name) if !name.is_empty() => Ok(name),
      _ => Err(AnalysisError::InvalidInput),
    }
  }

  pub fn analyze(&self, company: Option<&str>) -> Result<Report, AnalysisError> {
    let name: &str = Self::validate(company)?;

    log::debug!("Resolving report for {:?}", name);

    let report: Report = panic::catch_unwind(AssertUnwindSafe(|| self.source.resolve(name)))
      .map_err(|payload| AnalysisError::Internal(anyhow!("report resolution panicked: {}", panic_message(&*payload))))?;

    if !report.is_complete() {
      log::warn!("Report for {:?} has empty sections", name);
    }

    return Ok(report);
  }

  pub fn known_companies(&self) -> Vec<String> {
    self.source.known_companies()
  }

}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    return message.to_string();
  }
  if let Some(message) = payload.downcast_ref::<String>() {
    return message.clone();
  }
  return "unknown panic payload".to_string();
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use crate::analysis::catalog::CompanyCatalog;
  use crate::analysis::template::ReportTemplate;

  pub(crate) struct PanickingSource;

  impl ReportSource for PanickingSource {
    fn resolve(&self, _company: &str) -> Report {
      panic!("catalog corrupted")
    }

    fn known_companies(&self) -> Vec<String> {
      Vec::new()
    }
  }

  pub(crate) fn failing_service() -> AnalysisService {
    AnalysisService::new(Arc::new(PanickingSource))
  }

  #[test]
  fn test_validate_rejects_blank_names() {
    assert!(matches!(AnalysisService::validate(None), Err(AnalysisError::InvalidInput)));
    assert!(matches!(AnalysisService::validate(Some("")), Err(AnalysisError::InvalidInput)));
    assert!(matches!(AnalysisService::validate(Some("   \t ")), Err(AnalysisError::InvalidInput)));
    assert_eq!(AnalysisService::validate(Some("  Acme ")).unwrap(), "Acme");
    assert!(matches!(AnalysisService::validate(Some("\u{feff} ")), Err(AnalysisError::InvalidInput)));
  }

  #[test]
  fn test_blank_name_never_reaches_source() {
    let service = failing_service();
    // A panicking source would turn into Internal if it were called.
    assert!(matches!(service.analyze(Some("  ")), Err(AnalysisError::InvalidInput)));
  }

  #[test]
  fn test_analyze_known_and_generic() {
    let service = AnalysisService::builtin();

    let amazon = service.analyze(Some(" Amazon ")).unwrap();
    assert_eq!(amazon.competitors[0].name, "Walmart");

    let acme = service.analyze(Some("Acme Corp")).unwrap();
    assert!(acme.swot.strengths[0].contains("Acme Corp"));
  }

  #[test]
  fn test_panic_becomes_internal_error() {
    let service = failing_service();
    match service.analyze(Some("Acme")) {
      Err(AnalysisError::Internal(cause)) => assert!(cause.to_string().contains("catalog corrupted")),
      other => panic!("expected internal error, got {:?}", other.map(|_| ())),
    }
  }

  #[test]
  fn test_known_companies_sorted() {
    assert_eq!(AnalysisService::builtin().known_companies(), vec!["amazon", "flipkart", "tata", "zomato"]);
  }

  #[test]
  fn test_listing_follows_injected_catalog() {
    let custom = ReportTemplate::generic().render("Initech");
    let catalog = Arc::new(CompanyCatalog::new(vec![("initech".to_string(), custom.clone())]));
    let service = AnalysisService::new(Arc::new(ReportResolver::new(catalog, ReportTemplate::generic())));

    assert_eq!(service.known_companies(), vec!["initech"]);
    for key in service.known_companies() {
      assert_eq!(service.analyze(Some(&key)).unwrap(), custom);
    }
    // Names outside the injected table fall back even if the builtin table has them.
    assert!(service.analyze(Some("amazon")).unwrap().swot.strengths[0].starts_with("amazon has"));
  }
}
