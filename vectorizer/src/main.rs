use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use vectorizer::{run_build, BuildOptions};

#[derive(Parser)]
#[command(name = "vectorizer")]
#[command(about = "Build a TF-IDF term-document matrix from Wikipedia dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the matrix from a dump file or a directory of dump chunks
    Build {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Output path for the tab-separated frequency report
        #[arg(long)]
        report: String,
        /// Stop-word file, one word per line
        #[arg(long)]
        stopwords: String,
        /// Number of vocabulary terms to retain
        #[arg(long, default_value_t = 50_000)]
        vocab_size: usize,
        /// Number of partitions for parallel processing
        #[arg(long, default_value_t = 16)]
        partitions: usize,
        /// Record opening delimiter
        #[arg(long, default_value = "<page>")]
        open_delim: String,
        /// Record closing delimiter
        #[arg(long, default_value = "</page>")]
        close_delim: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            report,
            stopwords,
            vocab_size,
            partitions,
            open_delim,
            close_delim,
        } => {
            let opts = BuildOptions {
                input: input.into(),
                report: report.clone().into(),
                stopwords: stopwords.into(),
                vocab_size,
                partitions,
                open_delim,
                close_delim,
            };
            let matrix = run_build(&opts)?;
            tracing::info!(
                vocab_size = matrix.columns.len(),
                num_docs = matrix.num_docs,
                report = %report,
                "matrix build complete"
            );
            Ok(())
        }
    }
}
