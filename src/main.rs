use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

use cliquescope::config::Config;
use cliquescope::dataset::Dataset;
use cliquescope::frequency;
use cliquescope::output::{self, terminal};
use cliquescope::pipeline::timeline;
use cliquescope::similarity::{SimilarityMetric, SimilarityReport};
use cliquescope::temporal::{self, policy::PolicyKind, RelevancePolicy};
use cliquescope::{Clique, NodeId, TimeSlice};

/// cliquescope: frequency, relevance, and similarity analysis over cliques.
///
/// Reads pre-extracted cliques per time slice from a JSON dataset and answers
/// which entities recur, which cliques matter to a reference set, and how
/// similar two sets of relevant cliques are.
#[derive(Parser)]
#[command(name = "cliquescope", version, about)]
struct Cli {
    /// Dataset file (overrides CLIQUESCOPE_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count how often each entity appears across cliques
    Freq {
        /// Restrict to one time slice (default: all slices)
        #[arg(long)]
        time: Option<TimeSlice>,

        /// Rows to show (default: CLIQUESCOPE_TOP_N)
        #[arg(long)]
        top: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count how often each size-k entity combination appears
    Combos {
        /// Combination size (must be at least 1)
        #[arg(short, long)]
        k: usize,

        /// Restrict to one time slice (default: all slices)
        #[arg(long)]
        time: Option<TimeSlice>,

        /// Rows to show (default: CLIQUESCOPE_TOP_N)
        #[arg(long)]
        top: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the cliques at a time slice relevant to a reference set
    Extract {
        /// Time slice to query
        #[arg(long)]
        time: TimeSlice,

        /// Reference set members, comma separated (e.g. 1,2,alice)
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<NodeId>,

        /// Relevance policy: unrestricted (alias any), fractured (alias alpha), or core (alias beta)
        #[arg(long, default_value = "unrestricted")]
        policy: PolicyKind,

        /// Alpha (fractured) or beta (core); defaults from config
        #[arg(long)]
        threshold: Option<f64>,

        /// Drop repeated cliques reached through several members
        #[arg(long)]
        distinct: bool,

        /// Emit JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Compare the relevant cliques of two reference sets or time slices
    Compare {
        /// First reference set, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<NodeId>,

        /// First time slice
        #[arg(long)]
        time: TimeSlice,

        /// Second reference set (default: same as --members)
        #[arg(long, value_delimiter = ',')]
        other_members: Vec<NodeId>,

        /// Second time slice (default: same as --time)
        #[arg(long)]
        other_time: Option<TimeSlice>,

        /// Relevance policy: unrestricted (alias any), fractured (alias alpha), or core (alias beta)
        #[arg(long, default_value = "unrestricted")]
        policy: PolicyKind,

        /// Alpha (fractured) or beta (core); defaults from config
        #[arg(long)]
        threshold: Option<f64>,

        /// Show only this metric (default: all four)
        #[arg(long)]
        metric: Option<SimilarityMetric>,

        /// Deduplicate each side before scoring
        #[arg(long)]
        distinct: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score similarity between consecutive time slices for one reference set
    Timeline {
        /// Reference set members, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<NodeId>,

        /// Relevance policy: unrestricted (alias any), fractured (alias alpha), or core (alias beta)
        #[arg(long, default_value = "unrestricted")]
        policy: PolicyKind,

        /// Alpha (fractured) or beta (core); defaults from config
        #[arg(long)]
        threshold: Option<f64>,

        /// Similarity metric (default: delta)
        #[arg(long, default_value = "delta")]
        metric: SimilarityMetric,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show dataset status (size, slices, clique and entity counts)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cliquescope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.dataset {
        config.dataset_path = path;
    }

    match cli.command {
        Commands::Freq { time, top, json } => {
            let dataset = open_dataset(&config)?;
            let cliques = select_cliques(&dataset, time);
            let table = frequency::entity_frequencies(&cliques);

            if json {
                output::print_json(&table)?;
            } else {
                terminal::display_frequency_table(
                    "Entity frequencies",
                    &table,
                    top.unwrap_or(config.top_n),
                    |id| id.to_string(),
                );
            }
        }

        Commands::Combos { k, time, top, json } => {
            let dataset = open_dataset(&config)?;
            let cliques = select_cliques(&dataset, time);
            let table = frequency::combination_frequencies(&cliques, k)?;

            if json {
                output::print_json(&table)?;
            } else {
                terminal::display_frequency_table(
                    &format!("Size-{k} combinations"),
                    &table,
                    top.unwrap_or(config.top_n),
                    |combo| output::format_members(combo),
                );
            }
        }

        Commands::Extract {
            time,
            members,
            policy,
            threshold,
            distinct,
            json,
        } => {
            let dataset = open_dataset(&config)?;
            let reference: BTreeSet<NodeId> = members.into_iter().collect();
            let policy = resolve_policy(policy, threshold, &config);

            let cliques = extract(&dataset, &reference, time, &policy, distinct);

            if json {
                output::print_json(&cliques)?;
            } else {
                terminal::display_cliques(
                    &format!("Relevant cliques at slice {time}, {policy}"),
                    &cliques,
                );
            }
        }

        Commands::Compare {
            members,
            time,
            other_members,
            other_time,
            policy,
            threshold,
            metric,
            distinct,
            json,
        } => {
            if other_members.is_empty() && other_time.is_none() {
                anyhow::bail!(
                    "Nothing to compare: pass --other-members, --other-time, or both."
                );
            }

            let dataset = open_dataset(&config)?;
            let policy = resolve_policy(policy, threshold, &config);

            let left_ref: BTreeSet<NodeId> = members.into_iter().collect();
            let right_ref: BTreeSet<NodeId> = if other_members.is_empty() {
                left_ref.clone()
            } else {
                other_members.into_iter().collect()
            };
            let right_time = other_time.unwrap_or(time);

            let left = extract(&dataset, &left_ref, time, &policy, distinct);
            let right = extract(&dataset, &right_ref, right_time, &policy, distinct);

            if left.is_empty() && right.is_empty() {
                warn!(time, right_time, "Both sides extracted no cliques");
            }

            let report = SimilarityReport::compute(&left, &right);
            info!(
                left = left.len(),
                right = right.len(),
                delta = report.delta,
                "Compared clique collections"
            );

            if json {
                output::print_json(&report)?;
            } else {
                println!(
                    "Comparing slice {} vs slice {} under {}",
                    time, right_time, policy
                );
                terminal::display_similarity_report(&report, metric);
            }
        }

        Commands::Timeline {
            members,
            policy,
            threshold,
            metric,
            json,
        } => {
            let dataset = open_dataset(&config)?;
            let reference: BTreeSet<NodeId> = members.into_iter().collect();
            let policy = resolve_policy(policy, threshold, &config);

            let steps =
                timeline::slice_similarity_timeline(dataset.index(), &reference, &policy, metric);

            if json {
                output::print_json(&steps)?;
            } else {
                terminal::display_timeline(&steps, metric);
            }
        }

        Commands::Status => {
            cliquescope::status::show(&config.dataset_path)?;
        }
    }

    Ok(())
}

/// Check the dataset exists and load it.
fn open_dataset(config: &Config) -> Result<Dataset> {
    config.require_dataset()?;
    Dataset::load(&config.dataset_path)
}

/// Cliques from one slice, or from every slice when `time` is unset.
fn select_cliques(dataset: &Dataset, time: Option<TimeSlice>) -> Vec<Clique<NodeId>> {
    match time {
        Some(t) => {
            let cliques = dataset.slice(t).to_vec();
            if cliques.is_empty() {
                // stderr only: stdout may be carrying --json output
                warn!(time = t, "Slice has no recorded cliques");
            }
            cliques
        }
        None => dataset.all_cliques(),
    }
}

/// Attach the threshold (flag, else config default) to the chosen policy.
fn resolve_policy(kind: PolicyKind, threshold: Option<f64>, config: &Config) -> RelevancePolicy {
    let threshold = match kind {
        PolicyKind::Unrestricted => {
            if threshold.is_some() {
                warn!("--threshold is ignored for the unrestricted policy");
            }
            0.0
        }
        PolicyKind::Fractured => threshold.unwrap_or(config.alpha),
        PolicyKind::Core => threshold.unwrap_or(config.beta),
    };
    RelevancePolicy::from_kind(kind, threshold)
}

fn extract(
    dataset: &Dataset,
    reference: &BTreeSet<NodeId>,
    time: TimeSlice,
    policy: &RelevancePolicy,
    distinct: bool,
) -> Vec<Clique<NodeId>> {
    if distinct {
        temporal::extract_distinct(dataset.index(), reference, time, policy)
    } else {
        temporal::extract(dataset.index(), reference, time, policy)
    }
}
