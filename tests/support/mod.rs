#![allow(dead_code)]

use std::sync::Arc;

use marathon_resource::adapter::outbound::marathon::MarathonClient;
use marathon_resource::application::DeploymentDriver;
use marathon_resource::port::HttpResponse;
use marathon_resource::testkit::transport::ScriptedTransport;
use reqwest::StatusCode;
use url::Url;

pub const V1: &str = "2015-02-11T09:31:50.021Z";
pub const V2: &str = "2015-04-11T09:31:50.021Z";
pub const V3: &str = "2015-06-11T09:31:50.021Z";

pub const DESCRIPTOR: &str = r#"{"id": "/web", "cmd": "serve", "instances": 2}"#;

/// A driver talking to Marathon through `transport`.
pub fn driver(transport: &ScriptedTransport) -> DeploymentDriver {
    let client = MarathonClient::new(
        Arc::new(transport.clone()),
        Url::parse("http://marathon.local/").unwrap(),
    );
    DeploymentDriver::new(Arc::new(client))
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse::with_body(StatusCode::OK, body)
}

pub fn deployment(id: &str, version: &str) -> HttpResponse {
    ok(&format!(r#"{{"deploymentId":"{id}","version":"{version}"}}"#))
}

pub fn active(ids: &[&str]) -> HttpResponse {
    let entries: Vec<String> = ids.iter().map(|id| format!(r#"{{"id":"{id}"}}"#)).collect();
    ok(&format!("[{}]", entries.join(",")))
}

pub fn versions(list: &[&str]) -> HttpResponse {
    ok(&serde_json::json!({ "versions": list }).to_string())
}
