/// counter-loop-native: fixed-width accumulation workloads
///
/// # Usage
/// ```bash
/// counter-loop-native --variant go
/// counter-loop-native --variant cpp --iterations 1000 --json
/// counter-loop-native --variant mixed
/// ```
use anyhow::Result;
use clap::Parser;
use counter_loop::cli::{write_line, NativeCli};
use counter_loop::native::NativeLoop;
use counter_loop::types::LoopConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = NativeCli::parse();
    let config = LoopConfig {
        iterations: cli.iterations,
    };

    let mut workload = NativeLoop::new(cli.variant, config);
    workload.run();

    let output = if cli.json {
        let json_result = serde_json::json!({
            "variant": cli.variant,
            "iterations": cli.iterations,
            "snapshot": workload.snapshot(),
        });
        serde_json::to_string_pretty(&json_result)?
    } else {
        workload.summary_line()
    };

    let stdout = std::io::stdout();
    write_line(&mut stdout.lock(), &output)?;
    Ok(())
}
