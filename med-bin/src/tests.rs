use crate::{
    cli::{read_pairs, Cli},
    Report,
};
use clap::Parser;
use med_types::{Cost, CostModel};
use std::io::Write;

/// All pairs `cli` feeds to the per-pair closure.
fn collect_pairs(cli: &Cli) -> Vec<(String, String)> {
    let mut pairs = vec![];
    cli.process_input_pairs(|a, b| {
        pairs.push((a.to_string(), b.to_string()));
        Ok(())
    })
    .unwrap();
    pairs
}

#[test]
fn demo_report() {
    let report = Report::new("shayan", "daneshvar", CostModel::default()).unwrap();
    assert_eq!(report.distance, 9);
    assert_eq!(report.instructions.len(), 9);
    assert_eq!(report.instructions[0], "← : Insert r");
    assert_eq!(report.steps.first().unwrap(), "shayan");
    assert_eq!(report.steps.last().unwrap(), "daneshvar");

    let mut out = vec![];
    report.print(&mut out, false).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Strings: shayan & daneshvar");
    assert_eq!(lines[1], "Minimum Edit Distance is: 9");
    assert_eq!(
        lines[2],
        "Instructions Extracted from results:(from the end to the beginning)"
    );
    assert_eq!(lines[3], "← : Insert r");
    assert_eq!(lines[12], "Editing Source to Target Step by Step:");
    assert_eq!(lines[13..], report.steps);

    let mut out = vec![];
    report.print(&mut out, true).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "shayan\tdaneshvar\t9\n");
}

#[test]
fn report_json() {
    let report = Report::new("ab", "ba", CostModel::new(10, 1, 1).unwrap()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"source":"ab","target":"ba","distance":2,"instructions":["← : Insert a","↑ : Delete a"],"steps":["ab","aba","ba"]}"#
    );
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn unicode_elements() {
    let report = Report::new("añb", "ab", CostModel::default()).unwrap();
    assert_eq!(report.distance, 1);
    assert_eq!(report.instructions, ["↑ : Delete ñ"]);
}

#[test]
fn invalid_costs() {
    let cm = CostModel {
        sub: 1,
        del: -1,
        ins: 1,
    };
    let err = Report::new("a", "b", cm).unwrap_err();
    assert!(err.to_string().contains("del cost is -1"), "{err}");
}

#[test]
fn huge_costs() {
    let cm = CostModel::new(Cost::MAX, 1, 1).unwrap();
    let err = Report::new("abc", "xyz", cm).unwrap_err();
    assert!(err.to_string().contains("cost overflow"), "{err}");
}

#[test]
fn cost_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costs.json");
    std::fs::write(&path, r#"{"sub": 3, "del": 1, "ins": 2}"#).unwrap();
    let cli = Cli::try_parse_from(["med", "--sub", "7", "--cost-model", path.to_str().unwrap()])
        .unwrap();
    assert_eq!(
        cli.costs.cost_model().unwrap(),
        CostModel::new(3, 1, 2).unwrap()
    );

    std::fs::write(&path, r#"{"sub": 3, "del": -1, "ins": 2}"#).unwrap();
    let err = cli.costs.cost_model().unwrap_err();
    assert!(err.to_string().contains("del cost is -1"), "{err}");

    std::fs::write(&path, r#"{"sub": 3}"#).unwrap();
    assert!(cli.costs.cost_model().is_err());

    let missing = dir.path().join("missing.json");
    let cli = Cli::try_parse_from(["med", "--cost-model", missing.to_str().unwrap()]).unwrap();
    assert!(cli.costs.cost_model().is_err());

    let cli = Cli::try_parse_from(["med", "--sub", "5", "--ins", "-2"]).unwrap();
    assert!(cli.costs.cost_model().is_err());
    let cli = Cli::try_parse_from(["med", "--sub", "5"]).unwrap();
    assert_eq!(cli.costs.cost_model().unwrap(), CostModel::new(5, 1, 1).unwrap());
}

#[test]
fn positional_pair() {
    let cli = Cli::try_parse_from(["med"]).unwrap();
    assert_eq!(
        collect_pairs(&cli),
        [("shayan".to_string(), "daneshvar".to_string())]
    );
    let cli = Cli::try_parse_from(["med", "kitten", "sitting"]).unwrap();
    assert_eq!(
        collect_pairs(&cli),
        [("kitten".to_string(), "sitting".to_string())]
    );
}

#[test]
fn input_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Files are read in sorted order.
    std::fs::write(dir.path().join("b.txt"), "kitten\nsitting\n").unwrap();
    std::fs::write(dir.path().join("a.seq"), ">ACGT\n<AGT\n>T\n<\n").unwrap();
    let cli = Cli::try_parse_from(["med", "-i", dir.path().to_str().unwrap()]).unwrap();
    assert_eq!(
        collect_pairs(&cli),
        [
            ("ACGT".to_string(), "AGT".to_string()),
            ("T".to_string(), "".to_string()),
            ("kitten".to_string(), "sitting".to_string()),
        ]
    );

    // A single file works as well.
    let file = dir.path().join("b.txt");
    let cli = Cli::try_parse_from(["med", "--input", file.to_str().unwrap()]).unwrap();
    assert_eq!(collect_pairs(&cli).len(), 1);

    // Any file with another extension fails the whole directory.
    std::fs::write(dir.path().join("c.fasta"), ">x\nACGT\n").unwrap();
    let cli = Cli::try_parse_from(["med", "-i", dir.path().to_str().unwrap()]).unwrap();
    assert!(cli.process_input_pairs(|_, _| Ok(())).is_err());

    let missing = dir.path().join("missing");
    let cli = Cli::try_parse_from(["med", "-i", missing.to_str().unwrap()]).unwrap();
    assert!(cli.process_input_pairs(|_, _| Ok(())).is_err());
}

#[test]
fn generated_pairs() {
    let args = ["med", "--cnt", "5", "-n", "12", "--seed", "42"];
    let pairs = collect_pairs(&Cli::try_parse_from(args).unwrap());
    assert_eq!(pairs.len(), 5);
    for (a, _) in &pairs {
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| "ACGT".contains(c)));
    }
    // The same seed gives the same pairs.
    assert_eq!(collect_pairs(&Cli::try_parse_from(args).unwrap()), pairs);

    let args = ["med", "--cnt", "3", "-n", "8", "-e", "0", "--seed", "7"];
    for (a, b) in collect_pairs(&Cli::try_parse_from(args).unwrap()) {
        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
    }

    // The positional pair is ignored when generating.
    let args = ["med", "x", "y", "--cnt", "0", "--seed", "1"];
    assert!(collect_pairs(&Cli::try_parse_from(args).unwrap()).is_empty());
}

#[test]
fn read_txt_and_seq_pairs() {
    let dir = tempfile::tempdir().unwrap();

    let txt = dir.path().join("pairs.txt");
    let mut f = std::fs::File::create(&txt).unwrap();
    writeln!(f, "kitten\nsitting\nshayan\ndaneshvar").unwrap();
    assert_eq!(
        read_pairs(&txt).unwrap(),
        [
            ("kitten".to_string(), "sitting".to_string()),
            ("shayan".to_string(), "daneshvar".to_string())
        ]
    );

    let seq = dir.path().join("pairs.seq");
    let mut f = std::fs::File::create(&seq).unwrap();
    writeln!(f, ">ACGT\n<AGT").unwrap();
    assert_eq!(
        read_pairs(&seq).unwrap(),
        [("ACGT".to_string(), "AGT".to_string())]
    );

    let bad = dir.path().join("bad.seq");
    let mut f = std::fs::File::create(&bad).unwrap();
    writeln!(f, "ACGT\nAGT").unwrap();
    assert!(read_pairs(&bad).is_err());

    let odd = dir.path().join("odd.txt");
    let mut f = std::fs::File::create(&odd).unwrap();
    writeln!(f, "ACGT").unwrap();
    assert!(read_pairs(&odd).is_err());

    assert!(read_pairs(&dir.path().join("pairs.fasta")).is_err());
}
