use std::sync::Arc;

use crate::analysis::catalog::CompanyCatalog;
use crate::analysis::report::Report;
use crate::analysis::template::ReportTemplate;

/// Anything that can turn a company name into a report.
pub trait ReportSource: Send + Sync {
  fn resolve(&self, company: &str) -> Report;

  /// Sorted keys that resolve to a pre-authored report.
  fn known_companies(&self) -> Vec<String>;
}

/// Strips surrounding whitespace and byte-order marks.
pub fn trim_name(raw: &str) -> &str {
  raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Lookup key for a raw company name: trimmed, then lowercased.
pub fn normalize_key(raw: &str) -> String {
  trim_name(raw).to_lowercase()
}

/// Exact-match lookup over a catalog with a templated fallback.
///
/// Callers must reject blank names before calling `resolve`.
#[derive(Debug, Clone)]
pub struct ReportResolver {
  catalog: Arc<CompanyCatalog>,
  template: Arc<ReportTemplate>,
}

impl ReportResolver {
  pub fn new(catalog: Arc<CompanyCatalog>, template: Arc<ReportTemplate>) -> Self {
    ReportResolver { catalog, template }
  }

  pub fn builtin() -> Self {
    ReportResolver::new(CompanyCatalog::builtin(), ReportTemplate::generic())
  }
}

impl ReportSource for ReportResolver {
  fn resolve(&self, company: &str) -> Report {
    let name: &str = trim_name(company);
    match self.catalog.get(&normalize_key(name)) {
      Some(report) => report.clone(),
      None => self.template.render(name),
    }
  }

  fn known_companies(&self) -> Vec<String> {
    self.catalog.keys()
  }
}
