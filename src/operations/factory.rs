// ============================================================================
// Operation Factory
// Creates operations by name from a registry of constructors
// ============================================================================

use super::{Addition, Division, Multiplication, Rounded, Subtraction};
use crate::domain::{FactoryConfig, OperationKind};
use crate::interfaces::{Operation, OperationError, OperationResult};
use crate::numeric::{Operand, RoundingMode};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Produces a fresh operation instance on every call
pub type OperationConstructor = Arc<dyn Fn() -> Box<dyn Operation> + Send + Sync>;

/// Result scale and rounding mode, when a factory rounds its results
type Rounding = Option<(u32, RoundingMode)>;

// ============================================================================
// Factory
// ============================================================================

/// Name-to-constructor registry for operations.
///
/// Keys are stored lowercase and matched case-insensitively. Registering an
/// existing key replaces its constructor.
///
/// # Example
/// ```
/// use decimal_ops::prelude::*;
/// use rust_decimal::Decimal;
///
/// let factory = OperationFactory::new();
/// let op = factory.create_operation("ADD").unwrap();
/// assert_eq!(op.name(), "Addition");
/// assert_eq!(op.execute(Decimal::from(5), Decimal::from(3)).unwrap(), Decimal::from(8));
/// ```
#[derive(Clone)]
pub struct OperationFactory {
    registry: HashMap<String, OperationConstructor>,

    /// Scale and rounding applied to every created operation
    rounding: Rounding,
}

impl OperationFactory {
    /// Create a factory seeded with the built-in operations
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.seed_builtins();
        factory
    }

    /// Create a factory with no registered operations
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
            rounding: None,
        }
    }

    /// Creates a factory from configuration
    ///
    /// # Returns
    /// * `Result<OperationFactory, String>` - Configured factory or error
    ///
    /// # Example
    /// ```
    /// use decimal_ops::prelude::*;
    /// use rust_decimal::Decimal;
    ///
    /// let factory = OperationFactory::from_config(&FactoryConfig::monetary()).unwrap();
    /// let third = factory.evaluate("divide", Decimal::ONE, Decimal::from(3)).unwrap();
    /// assert_eq!(third, Decimal::new(33, 2));
    /// ```
    pub fn from_config(config: &FactoryConfig) -> Result<Self, String> {
        config.validate()?;

        let mut factory = Self::empty();
        if config.include_builtins {
            factory.seed_builtins();
        }
        factory.rounding = config.result_scale.map(|scale| (scale, config.rounding));

        Ok(factory)
    }

    fn seed_builtins(&mut self) {
        for kind in OperationKind::ALL {
            self.registry
                .insert(kind.key().to_string(), builtin_constructor(kind));
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Create a new instance of the operation registered under `name`
    ///
    /// # Errors
    /// Returns `UnknownOperation` carrying `name` exactly as given when no
    /// entry matches.
    pub fn create_operation(&self, name: &str) -> OperationResult<Box<dyn Operation>> {
        let (constructor, rounding) = self.lookup(name)?;
        Ok(instantiate(&constructor, rounding))
    }

    /// Resolve `name` to its constructor and this factory's rounding,
    /// without running the constructor
    fn lookup(&self, name: &str) -> OperationResult<(OperationConstructor, Rounding)> {
        let key = name.to_lowercase();
        match self.registry.get(&key) {
            Some(constructor) => Ok((Arc::clone(constructor), self.rounding)),
            None => {
                tracing::warn!(requested = name, "unknown operation requested");
                Err(OperationError::UnknownOperation(name.to_string()))
            }
        }
    }

    /// Create the operation registered under `name` and execute it once
    pub fn evaluate(&self, name: &str, a: Operand, b: Operand) -> OperationResult<Operand> {
        self.create_operation(name)?.execute(a, b)
    }

    /// Check whether `name` is registered (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(&name.to_lowercase())
    }

    /// Registered keys, sorted
    pub fn operation_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register `constructor` under `name`, replacing any existing entry
    ///
    /// # Errors
    /// Returns `Registration` if the name is blank or the constructor
    /// produces an operation without a name. The registry is left untouched.
    pub fn register_operation<F>(&mut self, name: &str, constructor: F) -> OperationResult<()>
    where
        F: Fn() -> Box<dyn Operation> + Send + Sync + 'static,
    {
        let key = check_registration(name, &constructor)?;
        self.insert(key, Arc::new(constructor));
        Ok(())
    }

    /// Register operation type `O` under `name`, constructed via `Default`
    pub fn register<O>(&mut self, name: &str) -> OperationResult<()>
    where
        O: Operation + Default + 'static,
    {
        self.register_operation(name, || Box::new(O::default()) as Box<dyn Operation>)
    }

    /// Remove `name` from the registry. Returns whether an entry existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        let removed = self.registry.remove(&key).is_some();
        if removed {
            tracing::info!(key = %key, "unregistered operation");
        }
        removed
    }

    fn insert(&mut self, key: String, constructor: OperationConstructor) {
        let replaced = self.registry.insert(key.clone(), constructor).is_some();
        tracing::info!(key = %key, replaced, "registered operation");
    }
}

impl Default for OperationFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OperationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFactory")
            .field("operations", &self.operation_names())
            .field("rounding", &self.rounding)
            .finish()
    }
}

/// Constructor for a built-in operation
fn builtin_constructor(kind: OperationKind) -> OperationConstructor {
    match kind {
        OperationKind::Add => Arc::new(|| Box::new(Addition) as Box<dyn Operation>),
        OperationKind::Subtract => Arc::new(|| Box::new(Subtraction) as Box<dyn Operation>),
        OperationKind::Multiply => Arc::new(|| Box::new(Multiplication) as Box<dyn Operation>),
        OperationKind::Divide => Arc::new(|| Box::new(Division) as Box<dyn Operation>),
    }
}

/// Run `constructor` and apply rounding. Never called with a registry lock held,
/// so constructors may themselves register operations.
fn instantiate(constructor: &OperationConstructor, rounding: Rounding) -> Box<dyn Operation> {
    let operation = constructor();
    tracing::debug!(operation = operation.name(), "created operation");

    match rounding {
        Some((scale, mode)) => Box::new(Rounded::new(operation, scale, mode)),
        None => operation,
    }
}

/// Structural check run before any registration mutates a registry.
/// Returns the normalized key.
fn check_registration<F>(name: &str, constructor: &F) -> OperationResult<String>
where
    F: Fn() -> Box<dyn Operation>,
{
    let key = name.to_lowercase();
    if key.trim().is_empty() {
        tracing::warn!(requested = name, "rejected registration with blank name");
        return Err(OperationError::Registration(
            "operation name must not be blank".to_string(),
        ));
    }

    let probe = constructor();
    if probe.name().trim().is_empty() {
        tracing::warn!(key = %key, "rejected registration of unnamed operation");
        return Err(OperationError::Registration(format!(
            "constructor for '{}' produced an operation without a name",
            name
        )));
    }

    Ok(key)
}

// ============================================================================
// Process-wide Registry
// ============================================================================

static GLOBAL_FACTORY: LazyLock<RwLock<OperationFactory>> =
    LazyLock::new(|| RwLock::new(OperationFactory::new()));

/// Create an operation from the process-wide registry
///
/// # Example
/// ```
/// use decimal_ops::prelude::*;
///
/// let op = create_operation("Divide").unwrap();
/// assert_eq!(op.name(), "Division");
/// assert!(create_operation("bogus").is_err());
/// ```
pub fn create_operation(name: &str) -> OperationResult<Box<dyn Operation>> {
    // The read guard is released before the constructor runs
    let (constructor, rounding) = GLOBAL_FACTORY.read().lookup(name)?;
    Ok(instantiate(&constructor, rounding))
}

/// Register an operation constructor in the process-wide registry
pub fn register_operation<F>(name: &str, constructor: F) -> OperationResult<()>
where
    F: Fn() -> Box<dyn Operation> + Send + Sync + 'static,
{
    // Probe the constructor before taking the write lock
    let key = check_registration(name, &constructor)?;
    GLOBAL_FACTORY.write().insert(key, Arc::new(constructor));
    Ok(())
}

/// Register operation type `O` in the process-wide registry
pub fn register<O>(name: &str) -> OperationResult<()>
where
    O: Operation + Default + 'static,
{
    register_operation(name, || Box::new(O::default()) as Box<dyn Operation>)
}

/// Keys registered in the process-wide registry, sorted
pub fn operation_names() -> Vec<String> {
    GLOBAL_FACTORY.read().operation_names()
}
