use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use sortviz::{GifSink, Order, PpmSink, RunOpts, Selection};

#[derive(Parser, Debug)]
#[command(name = "sortviz", version)]
#[command(about = "Sort random colors and write every intermediate state as image frames")]
struct Cli {
    /// Output file name; the format extension is appended.
    #[arg(long, default_value = "default")]
    out: String,

    /// Which sorting algorithm to visualize.
    #[arg(long, default_value = "all", value_name = "merge|bubble|selection|heap|radix|all")]
    sort: String,

    /// Output image container.
    #[arg(long, value_enum, default_value = "ppm")]
    format: Format,

    /// Lengthen the inter-frame delay (animated output only).
    #[arg(long, default_value_t = false)]
    slow: bool,

    /// Working-array length (canvas width in pixels).
    #[arg(long, default_value_t = 250)]
    len: usize,

    /// Strip height in pixels per frame.
    #[arg(long, default_value_t = 6)]
    strip_height: u32,

    /// Comparison predicate for the run.
    #[arg(long, value_enum, default_value = "greater-than")]
    order: OrderArg,

    /// RNG seed for the initial array (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Static stacked-strip ASCII PPM (P3).
    Ppm,
    /// Animated GIF.
    Gif,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Ppm => "ppm",
            Format::Gif => "gif",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    /// Swap when left > right: key-ascending output.
    GreaterThan,
    /// Swap when left < right: key-descending output.
    LessThan,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::GreaterThan => Order::GreaterThan,
            OrderArg::LessThan => Order::LessThan,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Parse the sort selection before any array is seeded.
    let selection: Selection = cli.sort.parse()?;

    let mut opts = RunOpts {
        selection,
        len: cli.len,
        strip_height: cli.strip_height,
        order: cli.order.into(),
        seed: cli.seed,
        ..RunOpts::default()
    };
    if cli.slow {
        opts.delay_cs = opts.delay_cs.saturating_mul(3);
        opts.radix_delay_cs = opts.radix_delay_cs.saturating_mul(3);
    }

    let out_path = PathBuf::from(format!("{}.{}", cli.out, cli.format.extension()));
    match cli.format {
        Format::Ppm => {
            let mut sink = PpmSink::new(&out_path);
            sortviz::run(&opts, &mut sink)?;
        }
        Format::Gif => {
            let mut sink = GifSink::new(&out_path);
            sortviz::run(&opts, &mut sink)?;
        }
    }

    println!("Complete and written to {}", out_path.display());
    Ok(())
}
