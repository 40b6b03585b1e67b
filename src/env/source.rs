//! Environment sources.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Read-only view of a process environment.
pub trait EnvSource: Send + Sync + 'static {
    /// Value of a single variable, `None` if unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Every variable, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars_os so that non-UTF-8 entries are listed instead of panicking
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

/// Fixed in-memory environment.
#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MapEnv {
    fn from(pairs: [(K, V); N]) -> Self {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Arc<S> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env() {
        let env = MapEnv::from([("A", "1")]).with("B", "2");
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("C"), None);
        assert_eq!(env.vars().len(), 2);
    }

    #[test]
    fn test_process_env_sees_path_like_vars() {
        // Something is always set in a test process
        assert!(!ProcessEnv.vars().is_empty());
    }
}
