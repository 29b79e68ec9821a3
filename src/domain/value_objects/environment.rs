//! Environment value object
//!
//! Every stack lands in exactly one of three environments. `ByEnvironment`
//! is a total mapping over them, so no lookup can miss.

use serde::Serialize;

/// Deployment environment of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
    Unknown,
}

impl Environment {
    /// All environments in output order
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Prod, Environment::Unknown];

    /// Environments whose stacks are deployed
    pub const DEPLOYABLE: [Environment; 2] = [Environment::Dev, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
            Environment::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Environment::Unknown)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ByEnvironment<T> {
    pub dev: T,
    pub prod: T,
    pub unknown: T,
}

impl<T> ByEnvironment<T> {
    pub fn get(&self, env: Environment) -> &T {
        match env {
            Environment::Dev => &self.dev,
            Environment::Prod => &self.prod,
            Environment::Unknown => &self.unknown,
        }
    }

    pub fn get_mut(&mut self, env: Environment) -> &mut T {
        match env {
            Environment::Dev => &mut self.dev,
            Environment::Prod => &mut self.prod,
            Environment::Unknown => &mut self.unknown,
        }
    }

    /// Apply `f` to each slot, keeping the environment alongside
    pub fn map<U, F>(self, mut f: F) -> ByEnvironment<U>
    where
        F: FnMut(Environment, T) -> U,
    {
        ByEnvironment {
            dev: f(Environment::Dev, self.dev),
            prod: f(Environment::Prod, self.prod),
            unknown: f(Environment::Unknown, self.unknown),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Environment, &T)> {
        Environment::ALL.into_iter().map(move |env| (env, self.get(env)))
    }
}
