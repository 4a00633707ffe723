/// counter-loop: arbitrary-precision accumulation workload
///
/// Runs 100000 iterations of `add += i; sub -= i; mul *= 2; div //= 2`
/// from all-ones seeds and prints `dummy: <add + sub + mul + div>`.
///
/// # Usage
/// ```bash
/// counter-loop
/// RUST_LOG=debug counter-loop
/// ```
use anyhow::Result;
use counter_loop::cli::{write_line, Cli};
use counter_loop::counter::CounterLoop;
use counter_loop::types::LoopConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse_lenient();
    if !cli.ignored.is_empty() {
        log::debug!("ignoring {} argument(s): {:?}", cli.ignored.len(), cli.ignored);
    }

    let mut counter = CounterLoop::new(LoopConfig::default())?;
    counter.run();

    let stdout = std::io::stdout();
    write_line(&mut stdout.lock(), &counter.summary_line())?;
    Ok(())
}
