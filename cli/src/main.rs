//! `shift-divide <NUMERATOR> <DENOMINATOR>`: prints the quotient on stdout.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shift_divide::{FromDecimal, NonZero, ShiftDiv, ShiftMul, Steps, Word};
use tracing::{Level, debug, trace};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "shift-divide",
    version,
    about = "Integer division using only shifts and subtractions",
    allow_negative_numbers = true
)]
struct Args {
    /// Left operand: the dividend, or the multiplicand for `--op mul`.
    numerator: String,

    /// Right operand: the divisor, or the multiplier for `--op mul`.
    denominator: String,

    /// Operation applied to the two operands.
    #[arg(long, value_enum, default_value_t = Op::Div)]
    op: Op,

    /// Integer width both operands are parsed into.
    #[arg(short, long, value_enum, default_value_t = Width::U64)]
    width: Width,

    /// Log parsed operands (-v) and every reduction step (-vv) to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Op {
    /// Quotient.
    Div,
    /// Remainder.
    Rem,
    /// Quotient and remainder, separated by a space.
    Divrem,
    /// Product.
    Mul,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    U8,
    U16,
    U32,
    U64,
    U128,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("{}", run(&args)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<String> {
    match args.width {
        Width::U8 => eval::<u8>(args),
        Width::U16 => eval::<u16>(args),
        Width::U32 => eval::<u32>(args),
        Width::U64 => eval::<u64>(args),
        Width::U128 => eval::<u128>(args),
    }
}

fn eval<T>(args: &Args) -> Result<String>
where
    T: Word + FromDecimal + ShiftDiv + ShiftMul + Display,
{
    let lhs = T::from_decimal(&args.numerator)
        .with_context(|| format!("invalid numerator {:?}", args.numerator))?;
    let rhs = T::from_decimal(&args.denominator)
        .with_context(|| format!("invalid denominator {:?}", args.denominator))?;
    debug!(%lhs, %rhs, op = ?args.op, width = ?args.width, "parsed operands");

    if args.op != Op::Mul && tracing::enabled!(Level::TRACE) {
        if let Ok(divisor) = NonZero::try_new(rhs) {
            for step in Steps::new(lhs, divisor) {
                trace!(
                    chunk = %step.chunk,
                    multiple = %step.multiple,
                    residual = %step.residual,
                    "reduction step"
                );
            }
        }
    }

    let output = match args.op {
        Op::Div => lhs.shift_div(rhs)?.to_string(),
        Op::Rem => lhs.shift_rem(rhs)?.to_string(),
        Op::Divrem => {
            let (quo, rem) = lhs.shift_div_rem(rhs)?;
            format!("{quo} {rem}")
        }
        Op::Mul => lhs.shift_mul(rhs)?.to_string(),
    };
    debug!(%output, "done");

    Ok(output)
}
