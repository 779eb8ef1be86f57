use bytes::Bytes;
use futures_util::future::BoxFuture;
use ledger_core::{CallContext, transport::grpc::GrpcTransport};
use prost::Message;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tonic::Status;

type Handler = Box<dyn Fn(Bytes) -> Result<Bytes, Status> + Send + Sync>;

/// An in-memory gRPC backend that answers registered method paths with canned messages.
#[derive(Default)]
pub struct MockGrpc {
    handlers: HashMap<String, Handler>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, Option<u64>)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockGrpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answers `path` by decoding the request as `Req` and encoding what `f` returns.
    pub fn on<Req, Res, F>(mut self, path: &str, f: F) -> Self
    where
        Req: Message + Default,
        Res: Message,
        F: Fn(Req) -> Result<Res, Status> + Send + Sync + 'static,
    {
        let handler = move |bytes: Bytes| {
            let request = Req::decode(bytes).map_err(|e| Status::invalid_argument(e.to_string()))?;
            f(request).map(|response| Bytes::from(response.encode_to_vec()))
        };
        self.handlers.insert(path.to_string(), Box::new(handler));
        self
    }

    /// Method paths called so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Query heights of the calls so far, in order.
    pub fn heights(&self) -> Vec<Option<u64>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, height)| *height)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl GrpcTransport for MockGrpc {
    fn unary<'a>(
        &'a self,
        path: &'a str,
        request: Bytes,
        ctx: &'a CallContext,
    ) -> BoxFuture<'a, Result<Bytes, Status>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), ctx.height));

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let result = match self.handlers.get(path) {
                Some(handler) => handler(request),
                None => Err(Status::unimplemented(format!("no handler for {path}"))),
            };

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        })
    }
}
