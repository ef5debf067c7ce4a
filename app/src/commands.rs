//! FILENAME: app/src/commands.rs
// PURPOSE: The work behind each subcommand.
// CONTEXT: Commands return their output as strings so main only has to print
//          them, and so integration tests can call them directly.

use engine::{format_result, PlotList, PlotRange};

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::{log_debug, log_enter, log_exit, log_info, log_warn};

/// Output of the `plot` command.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    /// CSV or JSON text for stdout.
    pub rendered: String,
    /// One line per function that lost points to domain errors.
    pub notes: Vec<String>,
}

/// Evaluates a calculator expression and formats the result.
pub fn calc(expression: &str) -> Result<String, AppError> {
    log_enter!("CALC", "calc", "expr={:?}", expression);

    let value = engine::evaluate(expression)?;
    let display = format_result(value);

    log_exit!("CALC", "calc", "result={}", display);
    Ok(display)
}

/// Samples every expression over `range` and renders the result.
pub fn plot(
    expressions: &[String],
    range: PlotRange,
    format: OutputFormat,
) -> Result<PlotReport, AppError> {
    log_enter!(
        "PLOT",
        "plot",
        "count={} range=[{}, {}] samples={}",
        expressions.len(),
        range.x_min,
        range.x_max,
        range.sample_count
    );

    range.validate()?;
    let mut list = PlotList::new(range);

    for expression in expressions {
        list.add(expression).map_err(|source| AppError::Plot {
            expression: expression.clone(),
            source,
        })?;
    }

    let notes: Vec<String> = list
        .iter()
        .filter(|f| f.samples().skipped > 0)
        .map(|f| {
            format!(
                "f(x) = {}: {} point(s) skipped (outside domain)",
                f.expression(),
                f.samples().skipped
            )
        })
        .collect();

    for note in &notes {
        log_warn!("PLOT", "{}", note);
    }

    let rendered = match format {
        OutputFormat::Csv => render_csv(&list),
        OutputFormat::Json => serde_json::to_string_pretty(&list)?,
    };

    log_info!("PLOT", "plotted {} function(s)", list.len());
    log_exit!("PLOT", "plot");
    Ok(PlotReport { rendered, notes })
}

/// Re-serializes the tokens of an expression in normalized form.
pub fn tokens(expression: &str) -> Result<String, AppError> {
    let tokens = parser::tokenize(expression).map_err(engine::EvalError::from)?;
    log_debug!("CALC", "tokens count={}", tokens.len());
    Ok(parser::render_tokens(tokens.iter().map(|t| &t.token)))
}

fn render_csv(list: &PlotList) -> String {
    let mut out = String::from("function,color,x,y\n");
    for function in list.iter() {
        for (x, y) in &function.samples().points {
            out.push_str(&format!(
                "\"{}\",{},{},{}\n",
                function.expression().replace('"', "\"\""),
                function.color(),
                x,
                y
            ));
        }
    }
    out
}
