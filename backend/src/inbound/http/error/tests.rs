//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("user repository error: cursor exhausted")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}))
}

async fn decode(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::payload_too_large("big"), StatusCode::PAYLOAD_TOO_LARGE)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error_case: Error) {
    let response = ResponseError::error_response(&internal_error_case);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace header is set")
        .to_str()
        .expect("header is ascii")
        .to_owned();
    assert_eq!(header, TRACE_ID);

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn unavailable_errors_keep_their_message() {
    let error = Error::service_unavailable("user repository unavailable");

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(payload.message(), "user repository unavailable");
}

#[rstest]
#[case::content_type(JsonPayloadError::ContentType, "request body must be application/json")]
#[actix_web::test]
async fn json_errors_become_invalid_requests(
    #[case] err: JsonPayloadError,
    #[case] expected: &str,
) {
    let req = TestRequest::default().to_http_request();

    let response = json_error_handler(err, &req).error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), expected);
}

#[rstest]
#[case::streamed(JsonPayloadError::Overflow { limit: 16 })]
#[case::declared(JsonPayloadError::OverflowKnownLength { length: 64, limit: 16 })]
#[actix_web::test]
async fn oversized_bodies_answer_payload_too_large(#[case] err: JsonPayloadError) {
    let req = TestRequest::default().to_http_request();

    let response = json_error_handler(err, &req).error_response();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let payload = decode(response).await;
    assert_eq!(payload.code(), ErrorCode::PayloadTooLarge);
    assert_eq!(payload.details(), Some(&json!({ "limit": 16 })));
}

#[rstest]
#[actix_web::test]
async fn deserialisation_errors_name_the_cause() {
    let inner = serde_json::from_str::<u8>("\"x\"").expect_err("string is not a number");
    let req = TestRequest::default().to_http_request();

    let response = json_error_handler(JsonPayloadError::Deserialize(inner), &req).error_response();

    let payload = decode(response).await;
    assert!(payload.message().starts_with("invalid request body: "));
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_report_method_and_path() {
    let req = TestRequest::patch().uri("/accounts").to_http_request();

    let err = not_found(req).await.expect_err("fallback always fails");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(
        err.details(),
        Some(&json!({"method": "PATCH", "path": "/accounts"}))
    );
}
