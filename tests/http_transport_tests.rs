//! Marathon client over the reqwest transport against a mock server.

use std::sync::Arc;
use std::time::Duration;

use marathon_resource::adapter::outbound::http::ReqwestTransport;
use marathon_resource::adapter::outbound::marathon::MarathonClient;
use marathon_resource::domain::AppDescriptor;
use marathon_resource::error::ClientError;
use marathon_resource::port::{BasicAuth, Orchestrator};
use url::Url;
use wiremock::matchers::{basic_auth, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const V1: &str = "2015-02-11T09:31:50.021Z";
const V2: &str = "2015-04-11T09:31:50.021Z";

fn client(base: &str) -> MarathonClient {
    MarathonClient::new(Arc::new(ReqwestTransport::new()), Url::parse(base).unwrap())
}

#[tokio::test]
async fn basic_auth_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/deployments"))
        .and(basic_auth("ci", "hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": "d1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri()).with_basic_auth(Some(BasicAuth {
        user_name: "ci".into(),
        password: "hunter2".into(),
    }));

    assert!(client.check_deployment("d1").await.unwrap());
}

#[tokio::test]
async fn api_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/deployments"))
        .and(header("authorization", "token=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri()).with_api_token(Some("abc".into()));

    assert!(!client.check_deployment("d1").await.unwrap());
}

#[tokio::test]
async fn token_is_the_only_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri())
        .with_basic_auth(Some(BasicAuth {
            user_name: "u".into(),
            password: "p".into(),
        }))
        .with_api_token(Some("abc".into()));
    client.check_deployment("d1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let auth: Vec<&str> = requests[0]
        .headers
        .get_all("authorization")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(auth, vec!["token=abc"]);
}

#[tokio::test]
async fn update_puts_descriptor() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/apps/web"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({"id": "/web", "cmd": "serve"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"deploymentId": "d1", "version": V2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = AppDescriptor::from_slice(br#"{"id": "/web", "cmd": "serve"}"#).unwrap();
    let handle = client(&server.uri()).update_app(&app).await.unwrap();

    assert_eq!(handle.deployment_id, "d1");
    assert_eq!(handle.version, V2);
}

#[tokio::test]
async fn conflict_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/apps/web"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({"message": "App is locked"})),
        )
        .mount(&server)
        .await;

    let app = AppDescriptor::new("/web");
    let err = client(&server.uri()).update_app(&app).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::UnexpectedStatus { got: 409, ref wanted } if wanted == &[200, 201]
    ));
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marathon/v2/apps/web/versions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"versions": [V2, V1]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let versions = client(&format!("{}/marathon/", server.uri()))
        .latest_versions("/web", V1)
        .await
        .unwrap();

    assert_eq!(versions, vec![V1.to_string(), V2.to_string()]);
}

#[tokio::test]
async fn delete_ignores_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/deployments/d1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server.uri()).delete_deployment("d1").await.unwrap();
}

#[tokio::test]
async fn slow_response_hits_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/deployments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = MarathonClient::new(
        Arc::new(ReqwestTransport::with_timeout(Duration::from_millis(100)).unwrap()),
        Url::parse(&server.uri()).unwrap(),
    );
    let err = client.check_deployment("d1").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let err = client("http://127.0.0.1:1/")
        .get_app("/web", V1)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "transport_error");
}
