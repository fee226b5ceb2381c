//! Declarations of expected environment variables.

use std::fmt;
use std::sync::Arc;

use super::value::{Value, VarKind};

/// Predicate run against a converted value; `false` fails validation.
pub type Validator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A named, typed declaration of an expected environment variable.
///
/// Built with chained setters:
///
/// ```
/// use envkit::VarSpec;
///
/// let port = VarSpec::int("PORT")
///     .default(3000)
///     .description("HTTP listen port")
///     .validator(|v| v.as_int().is_some_and(|p| p > 0));
/// assert_eq!(port.full_name(), "PORT");
/// ```
#[derive(Clone)]
pub struct VarSpec {
    name: String,
    kind: VarKind,
    default: Option<Value>,
    required: bool,
    description: String,
    choices: Vec<Value>,
    validator: Option<Validator>,
    prefix: String,
}

impl VarSpec {
    pub fn new(name: impl Into<String>, kind: VarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            required: false,
            description: String::new(),
            choices: Vec::new(),
            validator: None,
            prefix: String::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::String)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::Bool)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::Float)
    }

    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::List)
    }

    pub fn map(name: impl Into<String>) -> Self {
        Self::new(name, VarKind::Map)
    }

    /// Value used when the variable is unset. It is not converted or checked.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Restrict converted values to this set. An empty set allows anything.
    pub fn choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub(crate) fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// The key looked up in the environment: `PREFIX_NAME`, or `NAME` without a prefix.
    pub fn full_name(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.prefix, self.name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VarKind {
        self.kind
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description_text(&self) -> &str {
        &self.description
    }

    pub fn allowed(&self) -> &[Value] {
        &self.choices
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn accepts(&self, value: &Value) -> bool {
        self.choices.is_empty() || self.choices.iter().any(|choice| choice.loosely_eq(value))
    }

    pub(crate) fn validates(&self, value: &Value) -> bool {
        self.validator.as_ref().is_none_or(|validator| validator(value))
    }

    /// Choices rendered as a bracketed list, e.g. `["INFO", "WARN"]`.
    pub(crate) fn choices_repr(&self) -> String {
        let items: Vec<String> = self.choices.iter().map(Value::repr).collect();
        format!("[{}]", items.join(", "))
    }
}

impl fmt::Debug for VarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("description", &self.description)
            .field("choices", &self.choices)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("prefix", &self.prefix)
            .finish()
    }
}
