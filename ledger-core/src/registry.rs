//! # Module Registry
//!
//! The set of modules known to a client, indexed by name. A registry is read-only once
//! built and can be shared across tasks without locking.
//!
//! Two ways to obtain one:
//!
//! * [`Registry::global`]: the process-wide registry of every standard module, built on
//!   first use by a run-once initializer. Every call returns the same instance.
//! * [`Registry::new`]: an isolated registry over any set of modules, handed to the
//!   dispatcher and the tx router explicitly.
//!
//! Adding a protocol domain means writing one [`Module`] and listing it in
//! [`crate::modules::all`].
use crate::{
    error::Error,
    module::Module,
    modules,
    msg::TxRequest,
    router::{self, TxBuilder},
};
use std::{collections::HashMap, sync::OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Registry {
    modules: HashMap<&'static str, Module>,
}

impl Registry {
    /// Indexes `modules` by name. A later module replaces an earlier one with the same name.
    pub fn new(modules: impl IntoIterator<Item = Module>) -> Self {
        let modules = modules
            .into_iter()
            .map(|module| (module.name(), module))
            .collect();
        Self { modules }
    }

    /// A fresh registry of every standard module.
    pub fn standard() -> Self {
        Self::new(modules::all())
    }

    /// The process-wide registry of every standard module.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            tracing::debug!("initializing the global module registry");
            Registry::standard()
        })
    }

    /// The module registered as `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Like [`Registry::get`], failing with `NotFound` for unknown names.
    pub fn module(&self, name: &str) -> Result<&Module, Error> {
        self.get(name)
            .ok_or_else(|| Error::NotFound(format!("module '{name}' is not registered")))
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Attaches the messages of `request` to `builder` through the module it names.
    pub fn route_tx<B>(&self, builder: &mut B, request: TxRequest) -> Result<(), Error>
    where
        B: TxBuilder + ?Sized,
    {
        let module = self.module(&request.module)?;
        router::route_tx(module, builder, &request.msg_type, request.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_standard_registry_names() {
        let registry = Registry::standard();

        assert_eq!(
            registry.names(),
            vec![
                "auth",
                "authz",
                "bank",
                "base",
                "distribution",
                "feegrant",
                "gov",
                "mint",
                "slashing",
                "staking",
                "tx",
            ]
        );
    }

    #[test]
    fn test_unknown_module_is_absent() {
        let registry = Registry::standard();

        assert!(registry.get("ibc").is_none());
        assert_eq!(
            registry.module("ibc").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_isolated_registry() {
        let registry = Registry::new([modules::bank::module()]);

        assert_eq!(registry.names(), vec!["bank"]);
        assert!(registry.get("staking").is_none());
    }
}
