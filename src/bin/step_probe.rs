use std::env;
use std::time::Instant;

use algoviz::problems::dp::{Fibonacci, Knapsack, Lcs};
use algoviz::problems::graph::{Bfs, Graph};
use algoviz::problems::math::Sieve;
use algoviz::{Algorithm, Answer};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("step_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Step Probe: producer throughput and answer verification");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs every step-producer family across increasing input sizes to check:");
    eprintln!(
        "  - Correctness: extracted answers match brute-force baselines (up to size {})",
        options.verify_limit
    );
    eprintln!("  - Step counts: sequence lengths stay linear in the input size");
    eprintln!("  - Cost: wall-clock time and RSS delta per production run");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/5] Fibonacci table fill...");
    measurements.extend(run_fibonacci(&options, &mut sys));
    eprintln!();

    eprintln!("[2/5] 0/1 knapsack rows...");
    measurements.extend(run_knapsack(&options, &mut sys));
    eprintln!();

    eprintln!("[3/5] LCS rows...");
    measurements.extend(run_lcs(&options, &mut sys));
    eprintln!();

    eprintln!("[4/5] BFS on ring-with-chords graphs...");
    measurements.extend(run_bfs(&options, &mut sys));
    eprintln!();

    eprintln!("[5/5] Sieve of Eratosthenes...");
    measurements.extend(run_sieve(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("step_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 256usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin step_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input size to verify via baseline (default: 256)
  -h, --help                    Print this help message

Examples:
  cargo run --bin step_probe
  cargo run --bin step_probe -- --format table --verify-limit 64
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    steps: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "ok",
            VerificationStatus::Failed => "FAIL",
            VerificationStatus::NotChecked => "--",
        }
    }
}

fn run_fibonacci(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 16, 32, 64, 90];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("fibonacci", format!("n={n}"), sys, || {
                let algo = Fibonacci::new(n);
                let steps = algo.produce();
                let answer = algo.extract(&steps);
                let verification = if n <= options.verify_limit {
                    let expected = iterative_fib(n);
                    verify(answer == Answer::Value(expected), || {
                        format!("expected {expected}, got {answer}")
                    })
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (steps.len(), verification)
            });
            report(&m);
            m
        })
        .collect()
}

fn run_knapsack(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[4, 8, 12, 16, 20];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("knapsack", format!("items={n}"), sys, || {
                let weights: Vec<i64> = (0..n).map(|i| (i as i64 * 7 % 13) + 1).collect();
                let values: Vec<i64> = (0..n).map(|i| (i as i64 * 11 % 17) + 1).collect();
                let capacity = 3 * n;
                let algo = Knapsack::new(weights.clone(), values.clone(), capacity);
                let steps = algo.produce();
                let answer = algo.extract(&steps);
                let verification = if n <= options.verify_limit && n <= 20 {
                    let expected = brute_force_knapsack(&weights, &values, capacity as i64);
                    let got = match &answer {
                        Answer::Items { value, .. } => *value,
                        _ => i64::MIN,
                    };
                    verify(got == expected, || format!("expected {expected}, got {got}"))
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (steps.len(), verification)
            });
            report(&m);
            m
        })
        .collect()
}

fn run_lcs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[16, 64, 256, 512];
    SIZES
        .iter()
        .map(|&len| {
            let m = measure("lcs", format!("len={len}"), sys, || {
                let a = deterministic_dna(len);
                let b = deterministic_dna_offset(len, 1);
                let algo = Lcs::new(&a, &b);
                let steps = algo.produce();
                let answer = algo.extract(&steps);
                let verification = if len <= options.verify_limit {
                    let expected = rolling_lcs_len(a.as_bytes(), b.as_bytes());
                    verify(answer == Answer::Value(expected), || {
                        format!("expected {expected}, got {answer}")
                    })
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (steps.len(), verification)
            });
            report(&m);
            m
        })
        .collect()
}

fn run_bfs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 32, 128, 512];
    SIZES
        .iter()
        .map(|&n| {
            let m = measure("bfs", format!("vertices={n}"), sys, || {
                let graph = ring_with_chords(n);
                let target = n - 1;
                let algo = Bfs::new(graph, 0, Some(target));
                let steps = algo.produce();
                let answer = algo.extract(&steps);
                let verification = if n <= options.verify_limit {
                    let reached = matches!(
                        &answer,
                        Answer::Path(p) if p.first() == Some(&0) && p.last() == Some(&target)
                    );
                    verify(reached, || format!("no valid path in answer {answer}"))
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (steps.len(), verification)
            });
            report(&m);
            m
        })
        .collect()
}

fn run_sieve(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[50, 500, 5_000, 50_000];
    SIZES
        .iter()
        .map(|&limit| {
            let m = measure("sieve", format!("limit={limit}"), sys, || {
                let algo = Sieve::new(limit);
                let steps = algo.produce();
                let answer = algo.extract(&steps);
                let verification = if limit <= options.verify_limit {
                    let expected = trial_division_primes(limit);
                    verify(answer == Answer::Sequence(expected.clone()), || {
                        format!("expected {} primes", expected.len())
                    })
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (steps.len(), verification)
            });
            report(&m);
            m
        })
        .collect()
}

fn verify<F>(ok: bool, detail: F) -> (VerificationStatus, Option<String>)
where
    F: FnOnce() -> String,
{
    if ok {
        (VerificationStatus::Passed, None)
    } else {
        (VerificationStatus::Failed, Some(detail()))
    }
}

fn report(m: &Measurement) {
    eprintln!(
        "      [{}] {} {}: steps={}, time={:.4}s, status={}",
        m.verification_status.icon(),
        m.scenario,
        m.size_desc,
        m.steps,
        m.wall_s,
        m.verification_status.label()
    );
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (usize, (VerificationStatus, Option<String>)),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (steps, (status, detail)) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        steps,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("All verified scenarios passed.");
    } else {
        eprintln!("{failed} scenario(s) failed; see details above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,steps,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.4},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>8}  {:>10}  {:>14}  {:>12}",
        "scenario",
        "size",
        "steps",
        "wall_s",
        "rss_delta_kib",
        "status",
        col1 = col1,
        col2 = col2
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<8}  {:-<10}  {:-<14}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>8}  {:>10.4}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"steps\":{},\"wall_s\":{:.4},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.steps,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn deterministic_dna(len: usize) -> String {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[i % ALPHABET.len()] as char)
        .collect()
}

fn deterministic_dna_offset(len: usize, offset: usize) -> String {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()] as char)
        .collect()
}

/// Ring 0-1-...-(n-1)-0 plus a chord from each vertex to the one two
/// ahead, so BFS has real branching to explore.
fn ring_with_chords(n: usize) -> Graph {
    let adjacency: Vec<Vec<usize>> = (0..n)
        .map(|v| {
            let mut row = vec![(v + 1) % n, (v + n - 1) % n];
            if n > 4 {
                row.push((v + 2) % n);
                row.push((v + n - 2) % n);
            }
            row.sort_unstable();
            row.dedup();
            row
        })
        .collect();
    Graph::new(n, adjacency)
}

fn iterative_fib(n: usize) -> i64 {
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

fn brute_force_knapsack(weights: &[i64], values: &[i64], capacity: i64) -> i64 {
    let n = weights.len();
    let mut best = 0i64;
    for mask in 0u32..(1 << n) {
        let mut weight = 0i64;
        let mut value = 0i64;
        for (i, (&w, &v)) in weights.iter().zip(values).enumerate() {
            if mask & (1 << i) != 0 {
                weight += w;
                value += v;
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}

fn rolling_lcs_len(s: &[u8], t: &[u8]) -> i64 {
    let m = t.len();
    let mut prev = vec![0i64; m + 1];
    let mut curr = vec![0i64; m + 1];
    for &cs in s {
        for j in 1..=m {
            curr[j] = if cs == t[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }
    prev[m]
}

fn trial_division_primes(limit: usize) -> Vec<i64> {
    (2..=limit.max(1))
        .filter(|&n| {
            let mut d = 2;
            while d * d <= n {
                if n % d == 0 {
                    return false;
                }
                d += 1;
            }
            true
        })
        .map(|n| n as i64)
        .collect()
}
