use actix::{
  fut,
  Actor,
  ActorContext,
  ActorFutureExt,
  AsyncContext,
  ContextFutureSpawner,
  Handler,
  Running,
  StreamHandler,
  WrapFuture,
};
use actix_web::{
  web::{Data, Payload},
  Error,
  HttpRequest,
  HttpResponse,
};
use actix_web_actors::ws;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use voids_api_common::{
  context::VoidContext,
  websocket::handlers::{Connect, Disconnect, WsMessage},
};
use voids_utils::ConnectionId;

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(25);

/// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// One browser tab watching vote updates. Only receives, anything the client sends apart from
/// pings is ignored.
pub struct WsChatSession {
  /// unique session id, assigned by the chat server
  id: ConnectionId,

  /// Time of the last ping or pong from the client
  hb: Instant,

  context: VoidContext,
}

#[tracing::instrument(skip_all)]
pub async fn websocket(
  req: HttpRequest,
  body: Payload,
  context: Data<VoidContext>,
) -> Result<HttpResponse, Error> {
  ws::start(
    WsChatSession {
      id: 0,
      hb: Instant::now(),
      context: context.get_ref().clone(),
    },
    &req,
    body,
  )
}

/// Sends a ping every HEARTBEAT_INTERVAL and drops the session once the client stayed silent for
/// CLIENT_TIMEOUT.
fn hb(ctx: &mut ws::WebsocketContext<WsChatSession>) {
  ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
    if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
      debug!("websocket {} timed out", act.id);
      act.context.chat_server().do_send(Disconnect { id: act.id });
      ctx.stop();
      return;
    }

    ctx.ping(b"");
  });
}

impl Actor for WsChatSession {
  type Context = ws::WebsocketContext<Self>;

  fn started(&mut self, ctx: &mut Self::Context) {
    hb(ctx);

    // No other events are handled until the chat server answered
    let addr = ctx.address();
    self
      .context
      .chat_server()
      .send(Connect {
        addr: addr.recipient(),
      })
      .into_actor(self)
      .then(|res, act, ctx| {
        match res {
          Ok(id) => act.id = id,
          Err(e) => {
            warn!("chat server unavailable: {}", e);
            ctx.stop();
          }
        }
        fut::ready(())
      })
      .wait(ctx);
  }

  fn stopping(&mut self, _: &mut Self::Context) -> Running {
    self
      .context
      .chat_server()
      .do_send(Disconnect { id: self.id });
    Running::Stop
  }
}

/// Vote updates from the chat server go out unchanged as text frames.
impl Handler<WsMessage> for WsChatSession {
  type Result = ();

  fn handle(&mut self, msg: WsMessage, ctx: &mut Self::Context) {
    ctx.text(msg.0);
  }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsChatSession {
  fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
    let msg = match msg {
      Err(e) => {
        debug!("websocket protocol error: {}", e);
        ctx.stop();
        return;
      }
      Ok(msg) => msg,
    };

    match msg {
      ws::Message::Ping(msg) => {
        self.hb = Instant::now();
        ctx.pong(&msg);
      }
      ws::Message::Pong(_) => {
        self.hb = Instant::now();
      }
      ws::Message::Text(_) | ws::Message::Binary(_) => {
        debug!("ignoring message from websocket {}", self.id);
      }
      ws::Message::Close(reason) => {
        ctx.close(reason);
        ctx.stop();
      }
      ws::Message::Continuation(_) => {
        ctx.stop();
      }
      ws::Message::Nop => (),
    }
  }
}
