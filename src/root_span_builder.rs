use actix_web::{
  dev::{ServiceRequest, ServiceResponse},
  http::StatusCode,
  Error,
  ResponseError,
};
use tracing::{field::Empty, Span};
use tracing_actix_web::RootSpanBuilder;

/// Like the default root span of tracing-actix-web, without the user agent and client ip
/// fields. Failed requests also get a warn or error event of their own.
pub struct QuieterRootSpanBuilder;

impl RootSpanBuilder for QuieterRootSpanBuilder {
  fn on_request_start(request: &ServiceRequest) -> Span {
    let request_id = tracing_actix_web::root_span_macro::private::get_request_id(request);

    tracing::info_span!(
      "HTTP request",
      http.method = %request.method(),
      http.target = %request.uri().path(),
      http.status_code = Empty,
      request_id = %request_id,
      exception.message = Empty,
      exception.details = Empty,
    )
  }

  fn on_request_end<B>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
    let failure = match outcome {
      Ok(response) => match response.response().error() {
        Some(error) => Some((error.as_response_error(), response.status())),
        None => {
          span.record("http.status_code", response.status().as_u16());
          None
        }
      },
      Err(error) => {
        let response_error = error.as_response_error();
        Some((response_error, response_error.status_code()))
      }
    };

    if let Some((response_error, status_code)) = failure {
      record_error(&span, response_error, status_code);
    }
  }
}

fn record_error(span: &Span, response_error: &dyn ResponseError, status_code: StatusCode) {
  // pre-formatted, see https://github.com/tokio-rs/tracing/issues/1565
  let error_display = format!("{}", response_error);
  let error_debug = format!("{:?}", response_error);
  span.record("http.status_code", status_code.as_u16());
  span.record("exception.message", tracing::field::display(&error_display));
  span.record("exception.details", tracing::field::display(&error_debug));

  let _entered = span.enter();
  if status_code.is_client_error() {
    tracing::warn!("{}", error_display);
  } else {
    tracing::error!("{}\n{}", error_display, error_debug);
  }
}
