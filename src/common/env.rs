use anyhow::Context;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::hash::Hash;
use std::str::FromStr;

/// Where configuration values are looked up.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<K, V> EnvSource for HashMap<K, V>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.as_ref().to_owned())
    }
}

pub trait FromEnv: Sized {
    /// Missing variables fall back to `default`, set-but-invalid ones are an error.
    fn from_env_or<E: EnvSource + ?Sized>(
        source: &E,
        env_var: &str,
        default: Self,
    ) -> anyhow::Result<Self>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env_or<E: EnvSource + ?Sized>(
        source: &E,
        env_var: &str,
        default: Self,
    ) -> anyhow::Result<Self> {
        match source.var(env_var) {
            Some(value) => T::from_str(&value)
                .with_context(|| format!("Invalid value for {env_var}: {value:?}")),
            None => Ok(default),
        }
    }
}
