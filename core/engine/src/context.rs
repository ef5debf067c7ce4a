//! FILENAME: core/engine/src/context.rs
//! PURPOSE: Variable binding for evaluation.
//! CONTEXT: The evaluator asks a VariableScope for the value of every
//! identifier that is neither a constant nor a function. The calculator
//! passes an empty context; the sampler binds a single name per sample.

use std::collections::HashMap;

/// Name-to-value lookup consulted for free variables.
pub trait VariableScope {
    fn lookup(&self, name: &str) -> Option<f64>;
}

/// A map of named variables. Empty by default, which is what the
/// calculator evaluates against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalContext {
    variables: HashMap<String, f64>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style binding: `EvalContext::new().with_variable("x", 5.0)`.
    pub fn with_variable(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }
}

impl VariableScope for EvalContext {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }
}

/// Exactly one bound variable. Built per sample by the sampler.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    pub name: &'a str,
    pub value: f64,
}

impl<'a> Binding<'a> {
    pub fn new(name: &'a str, value: f64) -> Self {
        Binding { name, value }
    }
}

impl VariableScope for Binding<'_> {
    fn lookup(&self, name: &str) -> Option<f64> {
        (name == self.name).then_some(self.value)
    }
}
