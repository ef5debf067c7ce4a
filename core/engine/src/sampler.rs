//! FILENAME: core/engine/src/sampler.rs
//! PURPOSE: Samples a function expression over a range of x values.
//! CONTEXT: The grapher parses a definition once, then evaluates it at evenly
//! spaced points. A Domain error at one point (sqrt(x) for x < 0, tan at a
//! pole) only drops that point. Any other error means the expression itself
//! is broken, so the sweep stops and nothing is returned.

use crate::context::Binding;
use crate::error::{EvalError, EvalResult};
use crate::evaluator::Evaluator;
use parser::{parse_definition, Expression};
use serde::{Deserialize, Serialize};

/// The x range and resolution of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotRange {
    pub x_min: f64,
    pub x_max: f64,
    pub sample_count: usize,
}

impl Default for PlotRange {
    fn default() -> Self {
        PlotRange {
            x_min: -10.0,
            x_max: 10.0,
            sample_count: 500,
        }
    }
}

impl PlotRange {
    pub fn new(x_min: f64, x_max: f64, sample_count: usize) -> Self {
        PlotRange {
            x_min,
            x_max,
            sample_count,
        }
    }

    pub fn validate(&self) -> EvalResult<()> {
        if self.sample_count == 0 {
            return Err(EvalError::evaluation("Sample count must be at least 1"));
        }
        if !self.x_min.is_finite() || !self.x_max.is_finite() {
            return Err(EvalError::evaluation("Range bounds must be finite"));
        }
        if self.x_min >= self.x_max {
            return Err(EvalError::evaluation("x min must be less than x max"));
        }
        Ok(())
    }

    /// The i-th of `sample_count` evenly spaced points; the last one is exactly x_max.
    pub fn x_at(&self, index: usize) -> f64 {
        if self.sample_count <= 1 || index == 0 {
            return self.x_min;
        }
        if index + 1 >= self.sample_count {
            return self.x_max;
        }
        let step = (self.x_max - self.x_min) / (self.sample_count - 1) as f64;
        self.x_min + index as f64 * step
    }
}

/// One step of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Point { x: f64, y: f64 },
    /// Evaluation at `x` hit a Domain error.
    Skipped { x: f64, error: EvalError },
}

/// The collected result of a completed sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sampled {
    pub points: Vec<(f64, f64)>,
    pub skipped: usize,
}

/// A parsed function ready to be swept over a range.
#[derive(Debug, Clone)]
pub struct Sampler {
    body: Expression,
    variable: String,
    range: PlotRange,
}

impl Sampler {
    /// Parses `expression` (with or without an `f(x) =` header) and checks it
    /// only refers to `variable`. Nothing is evaluated yet.
    pub fn new(expression: &str, variable: &str, range: PlotRange) -> EvalResult<Self> {
        range.validate()?;

        let definition = parse_definition(expression)?;

        if let Some(header) = &definition.header {
            if header.parameter != variable {
                return Err(EvalError::Syntax {
                    message: format!(
                        "Function parameter '{}' does not match variable '{}'",
                        header.parameter, variable
                    ),
                    position: None,
                });
            }
        }

        if let Some(name) = definition.body.variables().into_iter().find(|n| *n != variable) {
            return Err(EvalError::UnknownSymbol {
                name: name.to_string(),
            });
        }

        Ok(Sampler {
            body: definition.body,
            variable: variable.to_string(),
            range,
        })
    }

    /// Starts a fresh lazy sweep. Each call restarts from x_min.
    pub fn iter(&self) -> SampleIter<'_> {
        SampleIter {
            sampler: self,
            index: 0,
            failed: false,
        }
    }

    /// Runs the whole sweep, dropping Domain errors and stopping at anything else.
    pub fn run(&self) -> EvalResult<Sampled> {
        let mut sampled = Sampled::default();

        for sample in self.iter() {
            match sample? {
                Sample::Point { x, y } => sampled.points.push((x, y)),
                Sample::Skipped { .. } => sampled.skipped += 1,
            }
        }

        log::debug!(
            target: "engine",
            "sampled {} on [{}, {}]: {} points, {} skipped",
            self.variable,
            self.range.x_min,
            self.range.x_max,
            sampled.points.len(),
            sampled.skipped
        );

        Ok(sampled)
    }

    fn sample_at(&self, x: f64) -> EvalResult<Sample> {
        let binding = Binding::new(&self.variable, x);
        match Evaluator::new(&binding).evaluate(&self.body) {
            Ok(y) => Ok(Sample::Point { x, y }),
            Err(error) if error.is_domain() => {
                log::trace!(target: "engine", "skipping x={}: {}", x, error);
                Ok(Sample::Skipped { x, error })
            }
            Err(error) => Err(error),
        }
    }
}

/// Lazy iterator over a sweep. Yields one item per x value and ends
/// early after the first non-Domain error.
pub struct SampleIter<'a> {
    sampler: &'a Sampler,
    index: usize,
    failed: bool,
}

impl Iterator for SampleIter<'_> {
    type Item = EvalResult<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.sampler.range.sample_count {
            return None;
        }

        let x = self.sampler.range.x_at(self.index);
        self.index += 1;

        let result = self.sampler.sample_at(x);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.failed {
            0
        } else {
            self.sampler.range.sample_count.saturating_sub(self.index)
        };
        (0, Some(remaining))
    }
}

/// Grapher entry point: samples `expression` at `sample_count` evenly spaced
/// values of `variable` from `range_min` to `range_max` inclusive.
pub fn sample(
    expression: &str,
    variable: &str,
    range_min: f64,
    range_max: f64,
    sample_count: usize,
) -> EvalResult<Sampled> {
    Sampler::new(
        expression,
        variable,
        PlotRange::new(range_min, range_max, sample_count),
    )?
    .run()
}
