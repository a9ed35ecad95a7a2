use std::sync::Arc;

use crate::analysis::report::Report;
use crate::app::error::AnalysisError;
use crate::app::services::analysis_service::AnalysisService;

pub struct AnalysisController {
  services : Arc<AnalysisService>
}

impl AnalysisController {
  pub fn new(services: Arc<AnalysisService>) -> Self {
    AnalysisController { services }
  }

  pub async fn analyze(&self, company: Option<&str>) -> Result<Report, AnalysisError> {
    let result = self.services.analyze(company);

    if let Err(e) = &result {
      match e {
        AnalysisError::InvalidInput => log::warn!("Rejected analysis request: {}", e),
        AnalysisError::Internal(cause) => log::error!("Analysis failed for {:?}: {:#}", company, cause),
      }
    }

    return result;
  }

  pub async fn get_known_companies(&self) -> Vec<String> {
    self.services.known_companies()
  }

}
