use actix_web::{web, App};
use std::sync::Arc;

use crate::app::routes::routes::Routes;

use super::controller::analysis_controller::AnalysisController;
use super::services::analysis_service::AnalysisService;

#[derive(Clone)]
pub struct AppState {
  pub analysis_controller: Arc<AnalysisController>
}

impl AppState {

  pub fn new() -> Self {
    Self::from_service(Arc::new(AnalysisService::builtin()))
  }

  pub fn from_service(analysis_service: Arc<AnalysisService>) -> Self {
    let analysis_controller : Arc<AnalysisController> = Arc::new(AnalysisController::new(analysis_service));
    AppState { analysis_controller }
  }
}

pub struct CreateApp {
  app_state: AppState,
}

impl CreateApp {
  pub fn from_state(app_state: AppState) -> Self {
    CreateApp { app_state }
  }

  pub fn build_app(&self,) -> App<impl actix_web::dev::ServiceFactory<actix_web::dev::ServiceRequest,Config = (),Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,Error = actix_web::Error,InitError = (),>,> {
    App::new()
    .app_data(web::Data::new(self.app_state.analysis_controller.clone()))
    .configure(Routes::configure)
  }
}
