//! # Ledger Client
//!
//! [`LedgerClient`] wires the pieces of the core together for one chain: the argument
//! parser built from the [`ClientConfig`], the module registry, the query dispatcher over the
//! configured transports, and the tx router.
//!
//! ```rust,no_run
//! use ledger_core::{ClientConfig, LedgerClient, TxRequest, UnsignedTx, modules::bank};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_json(r#"{ "grpc_url": "http://localhost:9090" }"#)?;
//! let client = LedgerClient::connect(config).await?;
//!
//! let send = bank::send(client.args(), "cosmos1...", "cosmos1...", "10uatom")?;
//! let mut tx = UnsignedTx::new().with_gas_limit(200_000);
//! client.route_tx(&mut tx, TxRequest::new(send))?;
//! # Ok(())
//! # }
//! ```
use crate::{
    args::ArgParser,
    config::{ClientConfig, ConfigError},
    dispatch::QueryDispatcher,
    error::Error,
    modules::distribution,
    msg::{Backend, QueryRequest, TxRequest},
    registry::Registry,
    router::TxBuilder,
    transport::{
        CallContext,
        grpc::{ClientConnectError, GrpcClient},
        rest::RestClient,
        rpc::RpcClient,
    },
};
use serde::Deserialize;
use std::sync::Arc;

/// Errors that can occur when building a [`LedgerClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connect(#[from] ClientConnectError),
}

#[derive(Debug, Clone)]
pub struct LedgerClient {
    args: ArgParser,
    dispatcher: QueryDispatcher,
}

impl LedgerClient {
    /// Validates `config` and connects its gRPC endpoint, if any.
    ///
    /// The REST and RPC clients connect on first use.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientBuildError> {
        config.validate()?;

        let grpc = match &config.grpc_url {
            Some(url) => Some(GrpcClient::connect(url).await?),
            None => None,
        };

        Ok(Self::build(&config, grpc))
    }

    /// Like [`LedgerClient::connect`], deferring the gRPC connection to the first call.
    pub fn connect_lazy(config: ClientConfig) -> Result<Self, ClientBuildError> {
        config.validate()?;

        let grpc = config
            .grpc_url
            .as_deref()
            .map(GrpcClient::connect_lazy)
            .transpose()?;

        Ok(Self::build(&config, grpc))
    }

    fn build(config: &ClientConfig, grpc: Option<GrpcClient>) -> Self {
        tracing::debug!(
            chain_id = %config.chain_id,
            backend = %config.backend,
            grpc = ?config.grpc_url,
            rest = ?config.rest_url,
            "building ledger client"
        );

        let mut dispatcher = QueryDispatcher::new(Arc::new(Registry::standard()))
            .with_default_backend(config.backend);

        if let Some(grpc) = grpc {
            dispatcher = dispatcher.with_grpc(grpc);
        }
        if let Some(url) = &config.rest_url {
            dispatcher = dispatcher.with_rest(RestClient::new(url.clone()));
        }
        if let Some(url) = &config.rpc_url {
            dispatcher = dispatcher.with_rpc(RpcClient::new(url.clone()));
        }
        if let Some(timeout) = config.timeout() {
            dispatcher = dispatcher.with_default_timeout(timeout);
        }

        Self::from_parts(config.arg_parser(), dispatcher)
    }

    /// Assembles a client from an argument parser and a configured dispatcher.
    pub fn from_parts(args: ArgParser, dispatcher: QueryDispatcher) -> Self {
        Self { args, dispatcher }
    }

    pub fn args(&self) -> &ArgParser {
        &self.args
    }

    pub fn registry(&self) -> &Registry {
        self.dispatcher.registry()
    }

    pub fn dispatcher(&self) -> &QueryDispatcher {
        &self.dispatcher
    }

    pub async fn query(&self, request: QueryRequest) -> Result<String, Error> {
        self.dispatcher.query(request).await
    }

    pub async fn query_with(
        &self,
        request: QueryRequest,
        ctx: &CallContext,
    ) -> Result<String, Error> {
        self.dispatcher.query_with(request, ctx).await
    }

    /// Attaches the messages of `request` to `builder`.
    pub fn route_tx<B>(&self, builder: &mut B, request: TxRequest) -> Result<(), Error>
    where
        B: TxBuilder + ?Sized,
    {
        self.registry().route_tx(builder, request)
    }

    /// Attaches one reward withdrawal per validator `delegator` is bonded to.
    ///
    /// The validators are looked up with `query-delegator-validators` on `backend`, or on the
    /// default backend when `None`. Returns how many messages were attached.
    pub async fn withdraw_all_rewards<B>(
        &self,
        builder: &mut B,
        delegator: &str,
        backend: Option<Backend>,
    ) -> Result<usize, Error>
    where
        B: TxBuilder + ?Sized,
    {
        let mut query =
            QueryRequest::new(distribution::query_delegator_validators(&self.args, delegator)?);
        query.backend = backend;

        let json = self.query(query).await?;
        let validators = delegator_validators(&json)?;

        tracing::debug!(
            delegator,
            count = validators.len(),
            "withdrawing rewards from every validator"
        );

        let withdraw = distribution::withdraw_all_rewards(&self.args, delegator, &validators)?;
        self.route_tx(builder, TxRequest::new(withdraw))?;

        Ok(validators.len())
    }
}

#[derive(Deserialize)]
struct DelegatorValidators {
    #[serde(default)]
    validators: Vec<String>,
}

fn delegator_validators(json: &str) -> Result<Vec<String>, Error> {
    let response: DelegatorValidators = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("invalid delegator validators response: {e}")))?;
    Ok(response.validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_delegator_validators_response() {
        let validators =
            delegator_validators(r#"{"validators":["cosmosvaloper1a","cosmosvaloper1b"]}"#)
                .unwrap();

        assert_eq!(validators, vec!["cosmosvaloper1a", "cosmosvaloper1b"]);
        assert!(delegator_validators("{}").unwrap().is_empty());
        assert_eq!(
            delegator_validators("not json").unwrap_err().kind(),
            ErrorKind::Parse
        );
    }

    #[tokio::test]
    async fn test_connect_lazy_from_config() {
        let config = ClientConfig::from_json(
            r#"{
                "grpc_url": "http://127.0.0.1:9090",
                "rest_url": "http://127.0.0.1:1317",
                "account_prefix": "osmo"
            }"#,
        )
        .unwrap();

        let client = LedgerClient::connect_lazy(config).unwrap();

        assert_eq!(client.args().prefixes().account, "osmo");
        assert_eq!(client.registry().len(), 11);
        assert_eq!(client.dispatcher().default_backend(), Backend::Binary);
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let err = LedgerClient::connect_lazy(ClientConfig::default()).unwrap_err();

        assert!(matches!(err, ClientBuildError::Config(ConfigError::NoEndpoint)));
    }
}
