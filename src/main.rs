use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tf_idf_cluster::{
    loader::load_corpus_dir, recluster, ClusterReport, ClusteringConfig, ClusteringPipeline, MemoryStore,
};

/// Cluster a directory of text documents with TF-IDF and k-means
#[derive(Debug, Parser)]
#[command(name = "tf-idf-cluster", version)]
struct Cli {
    /// Directory tree holding one document per file
    corpus: PathBuf,

    /// Number of clusters
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for centroid initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Corpus cap
    #[arg(long)]
    max_documents: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClusteringConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(k) = cli.clusters {
        config.num_clusters = k;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_documents) = cli.max_documents {
        config.max_documents = max_documents;
    }
    let pipeline = ClusteringPipeline::new(config)?;

    let documents = load_corpus_dir(&cli.corpus, pipeline.config().max_documents)
        .with_context(|| format!("reading corpus {}", cli.corpus.display()))?;
    let mut store: MemoryStore<String> = documents.into_iter().collect();

    let report = recluster(&mut store, &pipeline)?;
    let stats = store.cluster_statistics();

    if cli.json {
        let out = serde_json::json!({
            "report": report,
            "statistics": stats,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match &report {
        Some(report) => print_summary(report, &store),
        None => println!("nothing to cluster in {}", cli.corpus.display()),
    }
    println!("documents per cluster:");
    for (label, count) in &stats {
        println!("  {label:>3}: {count}");
    }
    Ok(())
}

fn print_summary(report: &ClusterReport<String>, store: &MemoryStore<String>) {
    println!(
        "{} documents, {} terms, k = {}, seed = {}",
        report.assignments.len(),
        report.vocabulary_size,
        report.n_clusters,
        report.seed
    );
    println!(
        "k-means: {} iterations ({}), inertia {:.6}",
        report.iterations,
        if report.converged { "converged" } else { "hit iteration cap" },
        report.inertia
    );
    if let Some(score) = report.silhouette {
        println!("silhouette: {score:.4}");
    }
    for label in 0..report.n_clusters {
        let members: Vec<&String> = report.members(label).collect();
        let preview: Vec<&str> = members
            .iter()
            .take(5)
            .map(|id| store.title_of(id).unwrap_or(id.as_str()))
            .collect();
        println!("cluster {label}: {} documents, e.g. {}", members.len(), preview.join(" | "));
    }
}
