
use plotfn::{CompileMode, Compiler};
use plotfn::graphics::dataset::XDataSet;
use plotfn::graphics::plot::PlotDirective;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

/// plotfn compiles a math expression such as `(1/9x)^2` and evaluates
/// or samples it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Arguments to call the function with, in variable order.
  #[arg(long = "at", value_name = "X", allow_negative_numbers = true)]
  at: Vec<f64>,

  /// Samples the function over an interval and prints the points as
  /// JSON.
  #[arg(long, num_args = 3, value_names = ["MIN", "MAX", "COUNT"], allow_negative_numbers = true)]
  sample: Option<Vec<String>>,

  /// Treat `^` as right-associative.
  #[arg(long)]
  right_assoc_power: bool,

  /// Reject calls with more arguments than variables.
  #[arg(long)]
  strict_arguments: bool,

  /// Do not multiply a variable by a directly preceding number or `)`.
  #[arg(long)]
  no_implicit_multiplication: bool,

  /// Increases log verbosity. May be repeated.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  /// The expression to compile, such as `(1/9x)^2`.
  #[arg(allow_hyphen_values = true)]
  expression: String,
}

impl Args {
  fn compile_mode(&self) -> CompileMode {
    let mut mode = CompileMode::new();
    mode.set_right_assoc_power_flag(self.right_assoc_power);
    mode.set_strict_arguments_flag(self.strict_arguments);
    mode.set_no_implicit_multiplication_flag(self.no_implicit_multiplication);
    mode
  }
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::WARN,
    1 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .init();
}

fn parse_sample(values: &[String]) -> anyhow::Result<XDataSet> {
  let [min, max, count] = values else {
    bail!("--sample expects MIN MAX COUNT");
  };
  let min: f64 = min.parse().with_context(|| format!("invalid MIN '{min}'"))?;
  let max: f64 = max.parse().with_context(|| format!("invalid MAX '{max}'"))?;
  let count: usize = count.parse().with_context(|| format!("invalid COUNT '{count}'"))?;
  if !(min <= max) {
    bail!("invalid interval ({min} .. {max})");
  }
  Ok(XDataSet::pixel_columns(min, max, count))
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  init_logging(args.verbose);

  let function = Compiler::new(args.compile_mode())
    .compile(&args.expression)
    .with_context(|| format!("failed to compile '{}'", args.expression))?;

  if let Some(sample) = &args.sample {
    let dataset = parse_sample(sample)?;
    let plot = PlotDirective::from_compiled_function(&dataset, &function)?;
    println!("{}", serde_json::to_string(&plot)?);
    return Ok(());
  }

  if args.at.is_empty() {
    let variables: Vec<&str> = function.variables().collect();
    println!("variables: {}", variables.join(", "));
    println!("postfix: {}", function.postfix());
    if function.arity() > 0 {
      return Ok(());
    }
  }

  let value = function.call(&args.at)
    .with_context(|| format!("failed to evaluate '{}'", args.expression))?;
  println!("{value}");
  Ok(())
}
