//! Multiplies two filled matrices single-threaded and in parallel, and
//! reports previews and timings.
//!
//! ```bash
//! bmm --size 1000 --block 50 --threads 4
//! BMM_LOG=debug bmm --size 10 --block 3 --threads 2
//! ```

use bmm::{
    Config, CoveragePolicy, Fill, MatmulError, Matrix, Preview, multiply, multiply_parallel,
};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FillKind {
    /// m[i][j] = i + j
    Index,
    /// seeded uniform values in 0..16
    Random,
}

#[derive(Debug, Parser)]
#[clap(about = "Blocked integer matrix multiply, single-threaded vs partitioned")]
struct Opt {
    #[clap(short, long, help = "dimension N of the square matrices", default_value_t = 1024)]
    size: usize,
    #[clap(short, long, help = "tile edge B (defaults to min(32, N))")]
    block: Option<usize>,
    #[clap(short, long, help = "worker threads T", default_value_t = Config::DEFAULT_THREADS)]
    threads: usize,
    #[clap(long, help = "refuse partitions that leave output cells uncomputed")]
    strict: bool,
    #[clap(long, value_enum, help = "input fill", default_value_t = FillKind::Index)]
    fill: FillKind,
    #[clap(long, help = "seed for --fill random", default_value_t = 0)]
    seed: u64,
}

impl Opt {
    fn config(&self) -> Result<Config, MatmulError> {
        let mut config = Config::new(self.size).with_threads(self.threads);
        if let Some(block) = self.block {
            config = config.with_block_size(block);
        }
        if self.strict {
            config = config.with_coverage(CoveragePolicy::Strict);
        }
        config.validate()?;
        Ok(config)
    }

    fn fill(&self) -> Fill {
        match self.fill {
            FillKind::Index => Fill::IndexSum,
            FillKind::Random => Fill::Random { seed: self.seed },
        }
    }
}

/// Filter from `BMM_LOG` (e.g. `debug`, `bmm=trace`), warn when unset.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("BMM_LOG")
        .from_env_lossy()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    match run(&opt) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the parallel result agreed with the single-threaded one
/// on every cell its partition covers.
fn run(opt: &Opt) -> Result<bool, MatmulError> {
    let config = &opt.config()?;
    let fill = opt.fill();
    let n = config.size;

    println!("=== Blocked Matrix Multiplication ===\n");
    println!(
        "N = {}, block = {}, threads = {}, fill = {:?}\n",
        n, config.block_size, config.threads, fill
    );

    let a = Matrix::<i32>::filled(n, fill);
    let b = Matrix::<i32>::filled(n, fill);

    println!("Partial Matrix A:");
    print!("{}", Preview::new(&a));
    println!("Partial Matrix B:");
    print!("{}", Preview::new(&b));

    let mut c_single = Matrix::zeros(n);
    let start = Instant::now();
    multiply(&a, &b, &mut c_single, config.block_size);
    let single_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut c_parallel = Matrix::zeros(n);
    let start = Instant::now();
    let partition = multiply_parallel(&a, &b, &mut c_parallel, config)?;
    let parallel_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!("Partial Result Matrix C (single-threaded):");
    print!("{}", Preview::new(&c_single));
    println!("Partial Result Matrix C ({} threads):", config.threads);
    print!("{}", Preview::new(&c_parallel));

    println!("{}", "-".repeat(50));
    println!("{:<18} {:10.2} ms", "Single-threaded", single_ms);
    println!(
        "{:<18} {:10.2} ms  ({:.1}×)",
        format!("{} threads", config.threads),
        parallel_ms,
        single_ms / parallel_ms
    );
    println!(
        "Partition: stride {}, {} regions, {} idle threads",
        partition.stride(),
        partition.len(),
        partition.idle_threads()
    );

    let mismatched = partition
        .regions()
        .iter()
        .flat_map(|region| region.rows().flat_map(move |i| region.cols().map(move |j| (i, j))))
        .filter(|&(i, j)| c_single[(i, j)] != c_parallel[(i, j)])
        .count();

    if !partition.is_complete() {
        println!(
            "Coverage gap: {} of {} output cells were not computed by the parallel path",
            partition.uncovered_cells(),
            n * n
        );
    }
    if mismatched == 0 {
        println!("Computed cells match the single-threaded result.");
        Ok(true)
    } else {
        println!("MISMATCH: {} cells differ from the single-threaded result", mismatched);
        Ok(false)
    }
}
