use crate::error::{VoidError, VoidErrorType};
use actix_web::{dev::ServiceResponse, middleware::ErrorHandlerResponse, HttpResponse};

/// Errors which are not a `VoidError`, for example a malformed form body rejected by an
/// extractor, are converted into the same json shape.
pub fn jsonify_plain_text_errors<BODY>(
  res: ServiceResponse<BODY>,
) -> actix_web::Result<ErrorHandlerResponse<BODY>> {
  let maybe_error = res.response().error();

  // Only expected to be called for errors
  let Some(error) = maybe_error else {
    return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
  };
  // A VoidError is already json
  if error.as_error::<VoidError>().is_some() {
    return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
  }

  let message = error.to_string();
  let (req, res) = res.into_parts();
  let response = HttpResponse::build(res.status()).json(VoidErrorType::Unknown(message));

  let service_response = ServiceResponse::new(req, response);
  Ok(ErrorHandlerResponse::Response(
    service_response.map_into_right_body(),
  ))
}
