use anyhow::{bail, ensure, Context};
use clap::{value_parser, Parser};
use itertools::Itertools;
use log::info;
use med_types::{seq_to_string, CostModel, Cost};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Compute the minimum edit distance between two strings, the edits that
/// achieve it, and every intermediate string from source to target.
#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// The source string.
    #[clap(default_value = "shayan")]
    pub source: String,

    /// The target string.
    #[clap(default_value = "daneshvar")]
    pub target: String,

    /// A .seq or .txt file, or a directory of them, with pairs to align.
    ///
    /// .txt files contain the source and target on alternating lines.
    /// .seq files prefix the source with `>` and the target with `<`.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write one JSON object per pair to this file.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    /// Only print the distance of each pair.
    #[arg(short, long)]
    pub silent: bool,

    #[clap(flatten, next_help_heading = "Costs")]
    pub costs: CostArgs,

    /// Options to generate random pairs.
    #[clap(flatten, next_help_heading = "Generated input")]
    pub generate: GenerateArgs,
}

#[derive(Parser, Serialize, Deserialize, Debug, Clone)]
pub struct CostArgs {
    /// Cost of replacing one element by another.
    #[clap(long, default_value_t = 2, allow_negative_numbers = true)]
    pub sub: Cost,

    /// Cost of deleting an element of the source.
    #[clap(long, default_value_t = 1, allow_negative_numbers = true)]
    pub del: Cost,

    /// Cost of inserting an element of the target.
    #[clap(long, default_value_t = 1, allow_negative_numbers = true)]
    pub ins: Cost,

    /// A JSON file with `sub`, `del` and `ins`. Overrides the flags above.
    #[clap(long, value_parser = value_parser!(PathBuf))]
    pub cost_model: Option<PathBuf>,
}

impl CostArgs {
    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        let cm = if let Some(path) = &self.cost_model {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let cm: CostModel = serde_json::from_reader(BufReader::new(f))
                .with_context(|| format!("parsing cost model {}", path.display()))?;
            cm.validate()?;
            cm
        } else {
            CostModel::new(self.sub, self.del, self.ins)?
        };
        info!("Using {cm:?}");
        Ok(cm)
    }
}

#[derive(Parser, Serialize, Deserialize, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of random pairs to generate instead of aligning the given pair.
    #[clap(long)]
    pub cnt: Option<usize>,

    /// Length of the generated sources.
    #[clap(short = 'n', long, default_value_t = 20)]
    pub length: usize,

    /// Fraction of the length that is edited to obtain the target.
    #[clap(short, long, default_value_t = 0.1)]
    pub error_rate: f32,

    /// Seed for the generated pairs. Random when not given.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Call the given function for each pair in the input: the pairs in
    /// `--input`, `--cnt` generated pairs, or the positional pair.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(&str, &str) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            let files = if input.is_file() {
                vec![input.clone()]
            } else {
                let mut files: Vec<PathBuf> = input
                    .read_dir()
                    .with_context(|| format!("{} is not a file or directory", input.display()))?
                    .map(|entry| Ok(entry?.path()))
                    .collect::<std::io::Result<_>>()?;
                files.sort();
                files
            };
            for f in files {
                for (a, b) in read_pairs(&f)? {
                    run_pair(&a, &b)?;
                }
            }
        } else if let Some(cnt) = self.generate.cnt {
            let seed = self.generate.seed.unwrap_or_else(|| {
                let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
                eprintln!("Seed: {seed}");
                seed
            });
            let ref mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..cnt {
                let a = med_test::random_sequence(self.generate.length, rng);
                let b = med_test::mutate(&a, self.generate.error_rate, rng);
                run_pair(&seq_to_string(&a), &seq_to_string(&b))?;
            }
        } else {
            run_pair(&self.source, &self.target)?;
        }
        Ok(())
    }
}

/// Read the pairs in a `.txt` or `.seq` file.
pub fn read_pairs(f: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let ext = f
        .extension()
        .and_then(|ext| ext.to_str())
        .with_context(|| format!("{} has no file extension", f.display()))?;
    if ext != "seq" && ext != "txt" {
        bail!("Unknown file extension {ext:?} of {}. Must be in {{seq,txt}}.", f.display());
    }
    let file = File::open(f).with_context(|| format!("opening {}", f.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?;
    ensure!(
        lines.len() % 2 == 0,
        "{} has an odd number of lines",
        f.display()
    );
    lines
        .into_iter()
        .tuples()
        .map(|(a, b)| {
            if ext == "seq" {
                match (a.strip_prefix('>'), b.strip_prefix('<')) {
                    (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
                    _ => bail!("{}: expected lines starting with '>' and '<'", f.display()),
                }
            } else {
                Ok((a, b))
            }
        })
        .collect()
}
