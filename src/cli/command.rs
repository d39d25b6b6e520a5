use crate::*;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Cluster equities by annual gain and intraday volatility", long_about = None)]
pub enum Command {
    #[command(about = "Cluster records into k groups and print ticker membership")]
    Fit {
        #[command(flatten)]
        source: Source,
        #[arg(short, long)]
        k: usize,
        #[command(flatten)]
        tuning: Tuning,
        #[arg(short, long, help = "write membership here instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(about = "Print the SSE curve over a range of k", alias = "sse")]
    Elbow {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = ELBOW_K_FROM)]
        from: usize,
        #[arg(long, default_value_t = ELBOW_K_TO)]
        to: usize,
        #[command(flatten)]
        tuning: Tuning,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Score a range of k by mean silhouette and pick the best", alias = "sil")]
    Silhouette {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = SILHOUETTE_K_FROM)]
        from: usize,
        #[arg(long, default_value_t = SILHOUETTE_K_TO)]
        to: usize,
        #[command(flatten)]
        tuning: Tuning,
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
pub struct Source {
    #[arg(short, long, help = "records of `<ticker> <gain> <volatility>`")]
    input: PathBuf,
}

#[derive(clap::Args)]
pub struct Tuning {
    #[arg(long, value_enum, default_value_t = Init::Range)]
    init: Init,
    #[arg(long, help = "move empty centroids onto a random sample")]
    reseed: bool,
    #[arg(long, default_value_t = SWEEP_SEED)]
    seed: u64,
    #[arg(long, default_value_t = KMEANS_ITERATION_LIMIT)]
    limit: usize,
    #[arg(long, default_value_t = KMEANS_TOLERANCE)]
    tolerance: Energy,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Init {
    Range,
    Seeded,
}

impl Tuning {
    fn config(&self, k: usize) -> Config {
        Config::new(k)
            .with_init(match self.init {
                Init::Range => Initialization::Range,
                Init::Seeded => Initialization::Seeded,
            })
            .with_vacancy(match self.reseed {
                true => Vacancy::Reseed,
                false => Vacancy::Freeze,
            })
            .with_limit(self.limit)
            .with_tolerance(self.tolerance)
    }
}

impl Source {
    fn dataset(&self) -> anyhow::Result<Dataset> {
        let loaded = Loader::open(&self.input)?;
        if loaded.rejected() > 0 {
            log::warn!(
                "{:<32}{} malformed records in {}",
                "skipped records",
                loaded.rejected(),
                self.input.display()
            );
        }
        Ok(Dataset::try_from(loaded.into_samples())?)
    }
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Fit {
                source,
                k,
                tuning,
                output,
            } => {
                let ref dataset = source.dataset()?;
                let rng = SmallRng::seed_from_u64(tuning.seed);
                let fit = Engine::from_dataset(dataset, tuning.config(k), rng)?.cluster()?;
                log::info!(
                    "{:<32}k={} iterations={} sse={:.6}",
                    if fit.converged() { "fit converged" } else { "fit exhausted" },
                    fit.k(),
                    fit.iterations(),
                    Elbow::sse(dataset.points(), &fit)
                );
                eprint!("{}", Summary::new(dataset, &fit));
                let membership = Membership::new(dataset, &fit).to_string();
                match output {
                    Some(path) => std::fs::write(&path, membership)?,
                    None => std::io::stdout().write_all(membership.as_bytes())?,
                }
                Ok(())
            }
            Self::Elbow {
                source,
                from,
                to,
                tuning,
                json,
            } => {
                let ref dataset = source.dataset()?;
                let series = Sweep::new(dataset, from..=to)
                    .with_config(tuning.config(from))
                    .with_seed(tuning.seed)
                    .elbow()?;
                match json {
                    true => println!("{}", serde_json::to_string_pretty(&series)?),
                    false => print!("{}", series),
                }
                Ok(())
            }
            Self::Silhouette {
                source,
                from,
                to,
                tuning,
                json,
            } => {
                let ref dataset = source.dataset()?;
                let selection = Sweep::new(dataset, from..=to)
                    .with_config(tuning.config(from))
                    .with_seed(tuning.seed)
                    .silhouette()?;
                match json {
                    true => println!("{}", serde_json::to_string_pretty(&selection)?),
                    false => print!("{}", selection),
                }
                Ok(())
            }
        }
    }
}
