use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc};
use voids_api_common::{
  claims::Claims,
  context::VoidContext,
  utils::{blocking, read_auth_token},
};
use voids_db_views::structs::LocalUserView;
use voids_utils::error::VoidResult;

/// Resolves the jwt of a request into a [`LocalUserView`] request extension.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: VoidContext,
}

impl SessionMiddleware {
  pub fn new(context: VoidContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: VoidContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = read_auth_token(req.request())?;

      // An invalid or logged out token is treated like no token, pages which need a login
      // answer with `not_logged_in` through the extractor.
      let mut logged_in = false;
      if let Some(jwt) = &jwt {
        match local_user_view_from_jwt(jwt, &context).await {
          Ok(local_user_view) => {
            req.extensions_mut().insert(local_user_view);
            logged_in = true;
          }
          Err(e) => tracing::debug!("ignoring auth token: {}", e.error_type),
        }
      }

      let mut res = svc.call(req).await?;

      // Pages of a logged in user show their name
      let cache_value = if logged_in {
        "private"
      } else {
        "public, max-age=60"
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

#[tracing::instrument(skip_all)]
async fn local_user_view_from_jwt(jwt: &str, context: &VoidContext) -> VoidResult<LocalUserView> {
  let user_id = Claims::validate(jwt, context).await?;
  blocking(context.pool(), move |conn| LocalUserView::read(conn, user_id)).await?
}
