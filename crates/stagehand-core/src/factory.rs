//! Widget factory: builds widgets from a type name and raw argument strings.
//!
//! Each widget type registers one or more constructors, each with a fixed
//! parameter list. Building picks the first registered constructor whose
//! arity matches and whose parameters all accept their argument text.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::widget::Widget;

/// Primitive kinds a constructor parameter can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Passed through unchanged.
    Text,
    /// Parsed as a signed integer.
    Integer,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Text => "text",
            ParamKind::Integer => "an integer",
        })
    }
}

/// An argument that cannot be read as the parameter's kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read `{value}` as {expected}")]
pub struct CoercionError {
    pub value: String,
    pub expected: ParamKind,
}

/// A coerced argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Text(String),
    Integer(i64),
}

impl Arg {
    /// Coerce raw argument text to `kind`.
    pub fn coerce(raw: &str, kind: ParamKind) -> Result<Self, CoercionError> {
        match kind {
            ParamKind::Text => Ok(Arg::Text(raw.to_string())),
            ParamKind::Integer => raw.parse().map(Arg::Integer).map_err(|_| CoercionError {
                value: raw.to_string(),
                expected: kind,
            }),
        }
    }
}

/// Coerced arguments handed to a constructor, in parameter order.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: Vec<Arg>,
}

impl Args {
    /// Coerce `raw` against `params`, failing on the first mismatch.
    pub fn coerce(raw: &[&str], params: &[ParamKind]) -> Result<Self, CoercionError> {
        let values = raw
            .iter()
            .zip(params)
            .map(|(text, kind)| Arg::coerce(text, *kind))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text argument at `index`.
    pub fn text(&self, index: usize) -> Result<&str, BuildError> {
        match self.values.get(index) {
            Some(Arg::Text(text)) => Ok(text),
            _ => Err(BuildError::new(format!("argument {} is not text", index))),
        }
    }

    /// Integer argument at `index`.
    pub fn integer(&self, index: usize) -> Result<i64, BuildError> {
        match self.values.get(index) {
            Some(Arg::Integer(value)) => Ok(*value),
            _ => Err(BuildError::new(format!("argument {} is not an integer", index))),
        }
    }
}

/// A constructor failed after its arguments were accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct BuildError {
    pub reason: String,
}

impl BuildError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Result of a constructor.
pub type BuildResult = Result<Box<dyn Widget>, BuildError>;

type BuildFn = Box<dyn Fn(&Args) -> BuildResult>;

/// One way of constructing a widget type.
struct Constructor {
    params: Vec<ParamKind>,
    build: BuildFn,
}

/// Why a build request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("unknown widget type `{0}`")]
    UnknownType(String),
    #[error("no constructor of `{type_name}` accepts {args:?}")]
    NoMatchingConstructor {
        type_name: String,
        args: Vec<String>,
    },
    #[error("widget `{type_name}` failed to construct: {source}")]
    Build {
        type_name: String,
        #[source]
        source: BuildError,
    },
}

/// Registry of widget types, keyed by descriptor type name.
#[derive(Default)]
pub struct WidgetRegistry {
    types: HashMap<String, Vec<Constructor>>,
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("WidgetRegistry").field("types", &names).finish()
    }
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for `type_name`.
    ///
    /// A type may have several constructors; they are tried in registration
    /// order.
    pub fn register<F>(&mut self, type_name: &str, params: &[ParamKind], build: F) -> &mut Self
    where
        F: Fn(&Args) -> BuildResult + 'static,
    {
        self.types
            .entry(type_name.to_string())
            .or_default()
            .push(Constructor {
                params: params.to_vec(),
                build: Box::new(build),
            });
        self
    }

    /// Whether `type_name` has at least one constructor.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a widget of `type_name` from raw argument strings.
    pub fn build(
        &self,
        type_name: &str,
        raw_args: &[&str],
    ) -> Result<Box<dyn Widget>, FactoryError> {
        let constructors = self
            .types
            .get(type_name)
            .ok_or_else(|| FactoryError::UnknownType(type_name.to_string()))?;

        for constructor in constructors {
            if constructor.params.len() != raw_args.len() {
                continue;
            }
            let args = match Args::coerce(raw_args, &constructor.params) {
                Ok(args) => args,
                Err(e) => {
                    log::debug!("Skipping `{}` constructor: {}", type_name, e);
                    continue;
                }
            };
            return (constructor.build)(&args).map_err(|source| FactoryError::Build {
                type_name: type_name.to_string(),
                source,
            });
        }

        Err(FactoryError::NoMatchingConstructor {
            type_name: type_name.to_string(),
            args: raw_args.iter().map(|a| a.to_string()).collect(),
        })
    }
}
