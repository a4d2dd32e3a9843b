use processor::{format_report, Processor, Report};
use scheduler::{Batch, Policy, ProcessDescriptor};

use std::env;
use std::fs;
use std::num::NonZeroUsize;

mod properties;

const OUTPUTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../outputs");

fn write_logs(folder: &str, name: &str, report: &Report, logs: &str) {
    let quantum = quantum();
    let policy = report.policy;
    fs::create_dir_all(format!("{OUTPUTS}/{policy}/{folder}")).unwrap();
    fs::write(
        format!("{OUTPUTS}/{policy}/{folder}/{name}___{quantum}.log"),
        logs,
    )
    .unwrap();
}

fn read_logs(folder: &str, name: &str, report: &Report) -> String {
    let quantum = quantum();
    let policy = report.policy;
    fs::read_to_string(format!(
        "{OUTPUTS}/{policy}/{folder}/{name}___{quantum}.log"
    ))
    .unwrap()
}

fn run(folder: &str, name: &str, report: &Report) {
    let output = format_report(report);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, report, &output);
    } else {
        let reference = read_logs(folder, name, report);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

/// Runs every policy over `batch` and compares each report with its reference.
fn check(folder: &str, name: &str, batch: &Batch) {
    for policy in policies() {
        let report = Processor::run(policy, batch);
        run(folder, name, &report);
    }
}

fn quantum() -> NonZeroUsize {
    let quantum = env::var("QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<usize>()
        .unwrap();
    NonZeroUsize::new(quantum).unwrap()
}

fn policies() -> [Policy; 3] {
    [
        Policy::Fcfs,
        Policy::Srtf,
        Policy::RoundRobin {
            quantum: quantum(),
        },
    ]
}

fn batch(processes: &[(i64, i64, i64)]) -> Batch {
    Batch::new(processes.iter().copied().map(ProcessDescriptor::from)).unwrap()
}
