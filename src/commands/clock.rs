use crate::OutputFormat;
use crate::clock::{DurationValue, Operator};
use anyhow::{Context, Result};
use serde::Serialize;

/// What a value command hands to the console.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operands: Vec<DurationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    pub total_seconds: i128,
    pub display: String,
}

impl Report {
    pub fn single(value: &DurationValue) -> Self {
        Self {
            operands: vec![*value],
            operator: None,
            total_seconds: value.normalized().total_seconds(),
            display: value.to_display_string(),
        }
    }

    pub fn combined(lhs: &DurationValue, rhs: &DurationValue, op: Operator) -> Self {
        let display = match op {
            Operator::Add => lhs.add(rhs),
            Operator::Subtract => lhs.subtract(rhs),
        };
        Self {
            operands: vec![*lhs, *rhs],
            operator: Some(op),
            total_seconds: lhs.combined_hms(rhs, op).total_seconds(),
            display,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.display.clone()),
            OutputFormat::Json => {
                serde_json::to_string(self).context("Failed to serialize report")
            }
        }
    }
}

fn create(fields: [i64; 3]) -> Result<DurationValue> {
    let [hours, minutes, seconds] = fields;
    DurationValue::create(hours, minutes, seconds)
        .with_context(|| format!("Invalid duration {}h {}m {}s", hours, minutes, seconds))
}

pub fn show(fields: [i64; 3], format: OutputFormat) -> Result<()> {
    let value = create(fields)?;
    println!("{}", Report::single(&value).render(format)?);
    Ok(())
}

pub fn combine(lhs: [i64; 3], rhs: [i64; 3], op: Operator, format: OutputFormat) -> Result<()> {
    let lhs = create(lhs)?;
    let rhs = create(rhs)?;
    println!("{}", Report::combined(&lhs, &rhs, op).render(format)?);
    Ok(())
}

/// Same as [`combine`] with the operator given as text (`+`, `-`, `add`, `sub`).
pub fn calc(lhs: [i64; 3], op: &str, rhs: [i64; 3], format: OutputFormat) -> Result<()> {
    let op: Operator = op.parse()?;
    combine(lhs, rhs, op, format)
}

/// Sample session: two values, their sum, both differences, then a
/// negative construction that fails.
pub fn demo_reports() -> Result<Vec<Report>> {
    let time1 = create([20, 0, 738])?;
    let time2 = create([5, 33, 20])?;

    Ok(vec![
        Report::single(&time1),
        Report::single(&time2),
        Report::combined(&time1, &time2, Operator::Add),
        Report::combined(&time1, &time2, Operator::Subtract),
        Report::combined(&time2, &time1, Operator::Subtract),
    ])
}

pub fn demo(format: OutputFormat) -> Result<()> {
    for report in demo_reports()? {
        println!("{}", report.render(format)?);
    }

    let time3 = create([-5, 33, 20])?;
    println!("{}", Report::single(&time3).render(format)?);
    Ok(())
}
