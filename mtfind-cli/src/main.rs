use clap::Parser;
use colored::Colorize;
use mtfind::{read_input, search, MatcherKind, SearchConfig, SearchResult};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Multithreaded substring search with `?` wildcards", long_about = None)]
struct Cli {
    /// File to search
    file: PathBuf,

    /// Pattern to search for; `?` matches any single byte
    pattern: String,

    /// Number of partitions to scan in parallel (default: CPU cores)
    #[arg(short = 'j', long)]
    partitions: Option<NonZeroUsize>,

    /// Matching strategy (brute-force|boyer-moore)
    #[arg(short, long, default_value = "boyer-moore")]
    matcher: MatcherKind,

    /// Show only statistics, not matches
    #[arg(short, long)]
    stats: bool,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_config = SearchConfig {
        pattern: cli.pattern,
        input_path: cli.file,
        partition_count: cli
            .partitions
            .unwrap_or_else(|| NonZeroUsize::new(num_cpus::get()).unwrap()),
        matcher: cli.matcher,
        stats_only: cli.stats,
        log_level: cli.log_level,
    };

    // Default locations plus any custom file; CLI values take precedence
    let config = SearchConfig::load_from(cli.config.as_deref())?.merge_with_cli(cli_config);
    init_tracing(&config.log_level);

    info!(
        "Find {:?} in file {}",
        config.pattern,
        config.input_path.display()
    );

    let buffer = read_input(&config.input_path)?;
    let result = search(&buffer, &config)?;
    print_search_results(&result, config.stats_only);
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_search_results(result: &SearchResult, stats_only: bool) {
    if stats_only {
        println!(
            "Found {} matches across {} partitions",
            result.total_matches, result.partitions_scanned
        );
        return;
    }

    println!("{}", result.total_matches);
    for m in &result.matches {
        println!(
            "{} {} {}",
            m.display_line().to_string().green(),
            m.display_column(),
            m.text_lossy()
        );
    }
}
