//! The per-graph pipeline: ingest, simplify, aggregate, fit, persist.
//!
//! Each graph walks `Started -> Ingested -> Simplified -> Aggregated ->
//! FitAttempted -> Done`. A graph that cannot make a transition becomes a
//! [`Failure`] carrying the last stage it reached; the other graphs of a
//! batch are unaffected. A failed fit is not a failure: it is recorded in
//! the [`Report`].

use crate::{
    config::Config,
    error::{Error, Result},
    fit::{ContinuousMle, Fit, FitError, PowerLawFit},
    generate::Generator,
    graph::{degree_histogram, simplify, DegreeHistogram, Graph, GraphInfo},
    ingest::read_file,
    sink::{CsvSink, HistogramSink},
    types::Vertex,
};
use derive_more::Display;
use log::{debug, error, info, warn};
use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[display(fmt = "started")]
    Started,
    #[display(fmt = "ingested")]
    Ingested,
    #[display(fmt = "simplified")]
    Simplified,
    #[display(fmt = "aggregated")]
    Aggregated,
    #[display(fmt = "fit attempted")]
    FitAttempted,
    #[display(fmt = "done")]
    Done,
}

/// A graph to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// An edge-list file, persisted under its file name.
    File(PathBuf),
    /// A generated graph, persisted under its logical name.
    Generated(String, Generator),
}

impl Target {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Target::File(path.into())
    }

    /// The standard generated graph called `name`.
    pub fn generated(name: &str) -> Result<Self> {
        Ok(Target::Generated(name.to_owned(), Generator::by_name(name)?))
    }

    pub fn name(&self) -> String {
        match self {
            Target::File(path) => file_name(path),
            Target::Generated(name, _) => name.clone(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The outcome of a graph that reached `Done`.
#[derive(Debug)]
pub struct Report {
    pub name: String,
    /// Vertices and directed edges of the raw graph.
    pub raw: GraphInfo,
    /// Malformed records skipped during ingestion.
    pub skipped: usize,
    /// Vertices and undirected edges of the simple graph.
    pub simple: GraphInfo,
    pub histogram: DegreeHistogram,
    pub fit: std::result::Result<Fit, FitError>,
    pub output: PathBuf,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(
            f,
            "  raw graph: {} directed edges, {} vertices",
            self.raw.num_edges(),
            self.raw.num_vertices()
        )?;
        if self.skipped > 0 {
            write!(f, " ({} malformed records skipped)", self.skipped)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  simple graph: {} undirected edges, {} vertices",
            self.simple.num_edges(),
            self.simple.num_vertices()
        )?;
        writeln!(
            f,
            "  distribution: {} distinct degrees, written to {}",
            self.histogram.len(),
            self.output.display()
        )?;
        match &self.fit {
            Ok(fit) => write!(f, "  gamma: {}", fit),
            Err(e) => write!(f, "  gamma: fit failed ({})", e),
        }
    }
}

/// A graph that did not reach `Done`.
#[derive(Debug, Display)]
#[display(fmt = "{}: failed after {}: {}", name, stage, error)]
pub struct Failure {
    pub name: String,
    /// The last stage the graph reached.
    pub stage: Stage,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<Report>,
    pub failures: Vec<Failure>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Error::BatchFailed` with the number of failed graphs, if any.
    pub fn check(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::BatchFailed(self.failures.len()))
        }
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        for failure in &self.failures {
            writeln!(f, "FAILED {}", failure)?;
        }
        write!(
            f,
            "{} done, {} failed",
            self.reports.len(),
            self.failures.len()
        )
    }
}

pub struct Pipeline<F, S> {
    config: Config,
    estimator: F,
    sink: S,
    pool: rayon::ThreadPool,
}

impl Pipeline<ContinuousMle, CsvSink> {
    /// A pipeline writing CSV files to `config.output_dir`.
    pub fn from_config(config: Config) -> Result<Self> {
        let sink = CsvSink::new(config.output_dir.clone());
        Self::new(config, ContinuousMle, sink)
    }
}

impl<F, S> Pipeline<F, S>
where
    F: PowerLawFit + Sync,
    S: HistogramSink,
{
    pub fn new(config: Config, estimator: F, sink: S) -> Result<Self> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        Ok(Self {
            config,
            estimator,
            sink,
            pool: builder.build()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Processes every target; failures never stop the batch.
    pub fn run_batch(&mut self, targets: &[Target]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for target in targets {
            match self.run(target) {
                Ok(report) => outcome.reports.push(report),
                Err(failure) => {
                    error!("{}", failure);
                    outcome.failures.push(failure);
                }
            }
        }
        outcome
    }

    pub fn run(&mut self, target: &Target) -> std::result::Result<Report, Failure> {
        let name = target.name();
        match target {
            Target::File(path) => {
                info!("{}: ingesting {}...", name, path.display());
                let (profile, policy) = (self.config.profile, self.config.policy);
                let ingested = self
                    .pool
                    .install(|| read_file(path, profile, policy))
                    .map_err(|error| Failure {
                        name: name.clone(),
                        stage: Stage::Started,
                        error,
                    })?;
                self.run_graph(&name, &ingested.graph, ingested.skipped)
            }
            Target::Generated(_, generator) => {
                info!("{}: generating {}...", name, generator);
                let graph = self.pool.install(|| generator.generate());
                self.run_graph(&name, &graph, 0)
            }
        }
    }

    /// Runs an ingested raw graph through the remaining stages.
    pub fn run_graph<V: Vertex>(
        &mut self,
        name: &str,
        graph: &Graph<V>,
        skipped: usize,
    ) -> std::result::Result<Report, Failure> {
        let fail = |stage, error| Failure {
            name: name.to_owned(),
            stage,
            error,
        };
        let raw = graph.info();
        info!(
            "{}: raw graph has {} directed edges and {} vertices",
            name,
            raw.num_edges(),
            raw.num_vertices()
        );

        info!("{}: simplifying...", name);
        let simple_graph = self.pool.install(|| simplify(graph));
        let simple = simple_graph
            .info()
            .map_err(|e| fail(Stage::Ingested, e))?;
        info!(
            "{}: simple graph has {} undirected edges and {} vertices",
            name,
            simple.num_edges(),
            simple.num_vertices()
        );

        info!("{}: aggregating degrees...", name);
        let histogram = self.pool.install(|| degree_histogram(&simple_graph));
        debug!("{}: degree distribution\n{}", name, histogram);
        debug_assert_eq!(histogram.num_vertices(), simple.num_vertices());
        debug_assert_eq!(histogram.degree_sum(), 2 * simple.num_edges());

        info!("{}: fitting...", name);
        let sample = histogram.sample(self.config.sample_shape);
        let estimator = &self.estimator;
        let fit = self.pool.install(|| estimator.fit(&sample));
        match &fit {
            Ok(fit) => info!("{}: gamma = {}", name, fit),
            Err(e) => warn!("{}: fit failed: {}", name, e),
        }

        let output = self
            .sink
            .write(name, &histogram)
            .map_err(|e| fail(Stage::FitAttempted, e))?;
        info!("{}: wrote distribution to {}", name, output.display());

        Ok(Report {
            name: name.to_owned(),
            raw,
            skipped,
            simple,
            histogram,
            fit,
            output,
        })
    }
}
