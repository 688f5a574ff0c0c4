pub mod cli;

#[cfg(test)]
mod tests;

use med_algos::DistanceTable;
use med_types::{Cost, CostModel};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Everything printed for a single pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source: String,
    pub target: String,
    pub distance: Cost,
    /// From the end to the beginning.
    pub instructions: Vec<String>,
    /// From the source to the target.
    pub steps: Vec<String>,
}

impl Report {
    pub fn new(source: &str, target: &str, cm: CostModel) -> anyhow::Result<Report> {
        let a: Vec<char> = source.chars().collect();
        let b: Vec<char> = target.chars().collect();
        let table = DistanceTable::new(&a, &b, cm)?;
        let instructions = table
            .instructions()
            .map(|i| i.map(|i| i.to_string()))
            .collect::<Result<_, _>>()?;
        let steps = table
            .step_by_step()
            .map(|s| s.map(String::from_iter))
            .collect::<Result<_, _>>()?;
        Ok(Report {
            source: source.to_string(),
            target: target.to_string(),
            distance: table.min_dist(),
            instructions,
            steps,
        })
    }

    pub fn print(&self, out: &mut impl Write, silent: bool) -> std::io::Result<()> {
        if silent {
            return writeln!(out, "{}\t{}\t{}", self.source, self.target, self.distance);
        }
        writeln!(out, "Strings: {} & {}", self.source, self.target)?;
        writeln!(out, "Minimum Edit Distance is: {}", self.distance)?;
        writeln!(
            out,
            "Instructions Extracted from results:(from the end to the beginning)"
        )?;
        for instruction in &self.instructions {
            writeln!(out, "{instruction}")?;
        }
        writeln!(out, "Editing Source to Target Step by Step:")?;
        for step in &self.steps {
            writeln!(out, "{step}")?;
        }
        Ok(())
    }
}
