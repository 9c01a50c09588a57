use clap::{Parser, Subcommand, ValueEnum};
use cheb_kernel::{
    ChebConfig, ChebError, ChebSeries, Interval, barycentric_at, barycentric_weights,
    chebyshev_points, clenshaw_at, coefficients_to_values, multiply_coefficients,
    roots_on_canonical_domain, standard_chop,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "cheb", about = "Chebyshev series kernel CLI")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chebyshev points of the second kind
    Points {
        /// Number of points
        n: usize,
    },
    /// Barycentric weights for Chebyshev points of the second kind
    Weights {
        /// Number of weights
        n: usize,
    },
    /// Cutoff length of a coefficient sequence
    Chop {
        /// First-kind coefficients, lowest degree first
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        /// Relative tolerance (default machine epsilon)
        #[arg(long)]
        tol: Option<f64>,
    },
    /// Evaluate a series at a point of [-1, 1]
    Eval {
        /// Evaluation point
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// First-kind coefficients, lowest degree first
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        /// Interpolate the series values at Chebyshev points instead of
        /// running Clenshaw on the coefficients
        #[arg(long)]
        barycentric: bool,
    },
    /// Real roots of a series on [-1, 1]
    Roots {
        /// First-kind coefficients, lowest degree first
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        /// Imaginary-part tolerance (default 100 * eps)
        #[arg(long)]
        htol: Option<f64>,
    },
    /// Product of two equal-length series, truncated to that length
    Multiply {
        /// Coefficients of the first factor (comma-separated)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        a: Vec<f64>,
        /// Coefficients of the second factor (comma-separated)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        b: Vec<f64>,
    },
    /// Adaptively approximate a sample function on [a, b]
    Approx {
        /// Function to approximate
        #[arg(value_enum)]
        function: SampleFunction,
        /// Left end of the interval
        #[arg(long, default_value = "-1", allow_negative_numbers = true)]
        a: f64,
        /// Right end of the interval
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        b: f64,
        /// Also print the roots
        #[arg(long)]
        roots: bool,
        /// Print every coefficient
        #[arg(long)]
        coeffs: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleFunction {
    Sin,
    Cos,
    Exp,
    /// 1 / (1 + 25 x^2)
    Runge,
    /// cos(20 x)
    Oscillatory,
    /// sqrt(|x|), which does not converge
    Kink,
}

impl SampleFunction {
    fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
            Self::Runge => 1.0 / (1.0 + 25.0 * x * x),
            Self::Oscillatory => (20.0 * x).cos(),
            Self::Kink => x.abs().sqrt(),
        }
    }
}

fn fail(e: ChebError) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn print_list(values: &[f64]) {
    for (k, v) in values.iter().enumerate() {
        println!("{k:>5}  {v:+.17e}");
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level_filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);
    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .init();

    let config = ChebConfig::default();

    match cli.command {
        Commands::Points { n } => print_list(&chebyshev_points(n)),

        Commands::Weights { n } => print_list(&barycentric_weights(n)),

        Commands::Chop { coeffs, tol } => {
            let cutoff = standard_chop(&coeffs, tol.unwrap_or(config.eps));
            println!("{cutoff} of {} coefficients kept", coeffs.len());
        }

        Commands::Eval {
            x,
            coeffs,
            barycentric,
        } => {
            if !Interval::canonical().contains(x) {
                eprintln!("warning: {x} lies outside [-1, 1]");
            }
            let y = if barycentric {
                let n = coeffs.len();
                let values = coefficients_to_values(&coeffs);
                barycentric_at(x, &values, &chebyshev_points(n), &barycentric_weights(n))
            } else {
                clenshaw_at(x, &coeffs)
            }
            .unwrap_or_else(|e| fail(e));
            println!("{y:+.17e}");
        }

        Commands::Roots { coeffs, htol } => {
            let htol = htol.unwrap_or(config.default_htol());
            let roots =
                roots_on_canonical_domain(&coeffs, htol, &config).unwrap_or_else(|e| fail(e));
            if roots.is_empty() {
                println!("no roots in [-1, 1]");
            } else {
                print_list(&roots);
            }
        }

        Commands::Multiply { a, b } => {
            let p = multiply_coefficients(&a, &b).unwrap_or_else(|e| fail(e));
            print_list(&p);
        }

        Commands::Approx {
            function,
            a,
            b,
            roots,
            coeffs,
        } => {
            let interval = Interval::new(a, b).unwrap_or_else(|e| fail(e));
            let series = ChebSeries::from_fn(|x| function.eval(x), interval, &config)
                .unwrap_or_else(|e| fail(e));
            info!(length = series.length(), "approximation built");
            println!(
                "length {} on [{a}, {b}]{}",
                series.length(),
                if series.converged() {
                    ""
                } else {
                    " (not converged)"
                }
            );
            if coeffs {
                print_list(series.coefficients());
            }
            if roots {
                let rts = series.roots(&config).unwrap_or_else(|e| fail(e));
                println!("{} roots", rts.len());
                print_list(&rts);
            }
        }
    }
}
