/// Command line surfaces for the counter binaries
use crate::native::NativeVariant;
use crate::types::{Result, DEFAULT_ITERATIONS};
use clap::Parser;
use std::io::Write;

/// `counter-loop` takes no inputs; anything passed is collected and ignored.
#[derive(Parser, Debug)]
#[command(name = "counter-loop")]
#[command(about = "Arbitrary-precision accumulation loop for instruction profilers", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parse process arguments, never failing; unparseable input is treated as ignored
    pub fn parse_lenient() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            log::debug!("ignoring unparseable arguments: {:?}", e.kind());
            Self {
                ignored: std::env::args_os()
                    .skip(1)
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            }
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "counter-loop-native", author, version)]
#[command(about = "Fixed-width (wrapping u64) accumulation loops for instruction profilers", long_about = None)]
pub struct NativeCli {
    /// Workload variant
    #[arg(long, value_enum, default_value_t = NativeVariant::Go)]
    pub variant: NativeVariant,

    /// Number of loop iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Print the final accumulator snapshot as JSON instead of the summary line
    #[arg(long)]
    pub json: bool,
}

/// Write one line to `out` and flush it
pub fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
