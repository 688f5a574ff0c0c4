use anyhow::Context;
use clap::Parser;
use log::debug;
use med_bin::{cli::Cli, Report};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let cm = args.costs.cost_model()?;

    let mut output = match &args.output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let mut pairs = 0;
    args.process_input_pairs(|a, b| {
        let report = Report::new(a, b, cm)?;
        report.print(&mut stdout, args.silent)?;
        if let Some(output) = &mut output {
            serde_json::to_writer(&mut *output, &report)?;
            writeln!(output)?;
        }
        pairs += 1;
        Ok(())
    })?;
    debug!("Aligned {pairs} pairs");

    if let Some(mut output) = output {
        output.flush()?;
    }
    Ok(())
}
