use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::app::controller::analysis_controller::AnalysisController;
use crate::app::error::AnalysisError;

#[derive(Deserialize, Serialize)]
pub struct AnalyzeRequest {
  #[serde(default)]
  company: Option<String>,
}


pub struct Routes;

impl Routes {

  pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(Self::json_config());
    cfg.service(web::resource("/").route(web::get().to(Self::health)));
    cfg.service(web::resource("/api/companies").route(web::get().to(Self::get_companies)));
    cfg.service(web::resource("/api/analyze").route(web::post().to(Self::analyze)));
  }

  /// Bodies are parsed as JSON whatever their content type. A body that does
  /// not parse is a client error, reported like a missing company name (400),
  /// not as a failed analysis.
  fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
      .content_type_required(false)
      .content_type(|_| true)
      .error_handler(|err, _req| {
        log::warn!("Malformed analysis request body: {}", err);
        AnalysisError::InvalidInput.into()
      })
  }

  async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
      "status": "ok",
      "Info": "Welcome to the company analysis service.",
      "code": 200,
    }))
  }

  async fn get_companies(controller: web::Data<Arc<AnalysisController>>) -> impl Responder {
    let companies: Vec<String> = controller.get_known_companies().await;
    HttpResponse::Ok().json(serde_json::json!({ "companies": companies }))
  }

  async fn analyze(controller: web::Data<Arc<AnalysisController>>, request: web::Json<AnalyzeRequest>) -> Result<HttpResponse, AnalysisError> {
    let report = controller.analyze(request.company.as_deref()).await?;
    Ok(HttpResponse::Ok().json(report))
  }

}

#[cfg(test)]
mod tests {
  use actix_web::{http::StatusCode, test};
  use serde_json::Value;

  use crate::app::factory::{AppState, CreateApp};
  use crate::app::services::analysis_service::tests::failing_service;

  async fn post_company(body: Value) -> (StatusCode, Value) {
    let app = test::init_service(CreateApp::from_state(AppState::new()).build_app()).await;
    let req = test::TestRequest::post().uri("/api/analyze").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
  }

  #[actix_web::test]
  async fn test_health() {
    let app = test::init_service(CreateApp::from_state(AppState::new()).build_app()).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
  }

  #[actix_web::test]
  async fn test_known_company_report() {
    let (status, body) = post_company(serde_json::json!({ "company": "  AMAZON " })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["competitors"].as_array().unwrap().len(), 3);
    assert_eq!(body["competitors"][0]["name"], "Walmart");
    assert_eq!(body["competitors"][0]["keyStrength"], "Physical + online omnichannel presence");
    assert!(body.get("pestle").is_none());
  }

  #[actix_web::test]
  async fn test_generic_company_report() {
    let (status, body) = post_company(serde_json::json!({ "company": "Acme Corp" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["swot"]["strengths"][0].as_str().unwrap().contains("Acme Corp"));
    assert!(body["marketing"]["keyMessages"][0].as_str().unwrap().contains("Acme Corp"));
    assert!(body["pestle"]["political"].as_str().unwrap().starts_with("Acme Corp"));
  }

  #[actix_web::test]
  async fn test_blank_company_is_rejected() {
    for body in [serde_json::json!({ "company": "" }), serde_json::json!({ "company": "    " }), serde_json::json!({}), serde_json::json!({ "company": null })] {
      let (status, payload) = post_company(body).await;
      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(payload["error"], "Company name is required");
    }
  }

  #[actix_web::test]
  async fn test_malformed_body_is_rejected() {
    let app = test::init_service(CreateApp::from_state(AppState::new()).build_app()).await;
    let req = test::TestRequest::post()
      .uri("/api/analyze")
      .insert_header(("content-type", "application/json"))
      .set_payload("{not json")
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Company name is required");
  }

  #[actix_web::test]
  async fn test_body_parsed_without_json_content_type() {
    let app = test::init_service(CreateApp::from_state(AppState::new()).build_app()).await;

    let plain = test::TestRequest::post()
      .uri("/api/analyze")
      .insert_header(("content-type", "text/plain"))
      .set_payload(r#"{"company":"amazon"}"#)
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, plain).await;
    assert_eq!(body["competitors"][0]["name"], "Walmart");

    let bare = test::TestRequest::post()
      .uri("/api/analyze")
      .set_payload(r#"{"company":"flipkart"}"#)
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, bare).await;
    assert_eq!(body["pricing"]["strategy"], "Competitive pricing with festival discounts");
  }

  #[actix_web::test]
  async fn test_resolver_failure_is_opaque() {
    let state = AppState::from_service(std::sync::Arc::new(failing_service()));
    let app = test::init_service(CreateApp::from_state(state).build_app()).await;
    let req = test::TestRequest::post().uri("/api/analyze").set_json(serde_json::json!({ "company": "Acme" })).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Failed to generate analysis" }));
  }

  #[actix_web::test]
  async fn test_list_companies() {
    let app = test::init_service(CreateApp::from_state(AppState::new()).build_app()).await;
    let req = test::TestRequest::get().uri("/api/companies").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["companies"], serde_json::json!(["amazon", "flipkart", "tata", "zomato"]));
  }
}
