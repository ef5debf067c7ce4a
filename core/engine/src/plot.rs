//! FILENAME: core/engine/src/plot.rs
//! PURPOSE: The list of functions currently plotted by the grapher.
//! CONTEXT: Each PlotFunction keeps its expression, a palette colour and the
//! samples computed for the current range. Adding or editing a function
//! re-samples it; changing the range re-samples all of them. A function
//! whose sweep fails, or that has no point inside the range, is never stored.

use crate::error::EvalError;
use crate::sampler::{PlotRange, Sampled, Sampler};
use serde::Serialize;
use thiserror::Error;

/// Name of the variable every plotted function is sampled over.
pub const PLOT_VARIABLE: &str = "x";

/// Line colours, assigned in order and reused after the tenth function.
pub const PLOT_COLORS: [&str; 10] = [
    "#2196F3", "#F44336", "#4CAF50", "#FF9800", "#9C27B0", "#00BCD4", "#E91E63", "#8BC34A",
    "#FF5722", "#673AB7",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("No plotted function at index {0}")]
    NoSuchFunction(usize),

    /// Every sample hit a domain error, so there is nothing to draw.
    #[error("Could not evaluate function: {0}")]
    NoPoints(String),
}

/// A single plotted function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotFunction {
    expression: String,
    color_index: usize,
    samples: Sampled,
}

impl PlotFunction {
    fn sample(expression: &str, color_index: usize, range: PlotRange) -> Result<Self, PlotError> {
        let samples = Sampler::new(expression, PLOT_VARIABLE, range)?.run()?;
        if samples.points.is_empty() {
            return Err(PlotError::NoPoints(expression.trim().to_string()));
        }
        Ok(PlotFunction {
            expression: expression.trim().to_string(),
            color_index,
            samples,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Hex colour string like "#2196F3".
    pub fn color(&self) -> &'static str {
        PLOT_COLORS[self.color_index % PLOT_COLORS.len()]
    }

    pub fn samples(&self) -> &Sampled {
        &self.samples
    }
}

/// Owns every plotted function and the range they are sampled over.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotList {
    functions: Vec<PlotFunction>,
    range: PlotRange,
}

impl PlotList {
    pub fn new(range: PlotRange) -> Self {
        PlotList {
            functions: Vec::new(),
            range,
        }
    }

    pub fn range(&self) -> PlotRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlotFunction> {
        self.functions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlotFunction> {
        self.functions.iter()
    }

    /// Samples and appends a new function. The colour is picked from the
    /// palette by the current list length, so after a removal the next
    /// function may share a colour with an existing one.
    pub fn add(&mut self, expression: &str) -> Result<&PlotFunction, PlotError> {
        let color_index = self.functions.len() % PLOT_COLORS.len();
        let function = PlotFunction::sample(expression, color_index, self.range)?;

        log::debug!(
            target: "engine",
            "plot add '{}' color={} points={} skipped={}",
            function.expression,
            function.color(),
            function.samples.points.len(),
            function.samples.skipped
        );

        let index = self.functions.len();
        self.functions.push(function);
        Ok(&self.functions[index])
    }

    /// Replaces the expression at `index`, keeping its colour.
    pub fn update(&mut self, index: usize, expression: &str) -> Result<&PlotFunction, PlotError> {
        let color_index = self
            .functions
            .get(index)
            .ok_or(PlotError::NoSuchFunction(index))?
            .color_index;

        let function = PlotFunction::sample(expression, color_index, self.range)?;
        log::debug!(target: "engine", "plot update #{} -> '{}'", index, function.expression);

        self.functions[index] = function;
        Ok(&self.functions[index])
    }

    pub fn remove(&mut self, index: usize) -> Result<PlotFunction, PlotError> {
        if index >= self.functions.len() {
            return Err(PlotError::NoSuchFunction(index));
        }
        let removed = self.functions.remove(index);
        log::debug!(target: "engine", "plot remove #{} '{}'", index, removed.expression);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Re-samples every function over a new range. If any function fails
    /// the list, including its range, is left as it was.
    pub fn set_range(&mut self, range: PlotRange) -> Result<(), PlotError> {
        range.validate()?;

        let replotted = self
            .functions
            .iter()
            .map(|f| PlotFunction::sample(&f.expression, f.color_index, range))
            .collect::<Result<Vec<_>, _>>()?;

        self.functions = replotted;
        self.range = range;
        Ok(())
    }
}
