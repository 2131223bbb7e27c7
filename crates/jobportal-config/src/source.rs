//! Key/value sources the loader reads configuration from.
//!
//! The loader never calls [`std::env::var`] itself. It goes through an
//! [`EnvSource`], so the process environment can be swapped for a map in
//! tests or when embedding the loader.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Read-only access to environment-style variables.
pub trait EnvSource {
    /// Returns the raw value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
///
/// Values that are not valid unicode are reported as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.as_ref().to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
