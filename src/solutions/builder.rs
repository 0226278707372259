use log::info;
use rayon::prelude::*;

use crate::expression::Equation;
use crate::solutions::map::SolutionMap;
use crate::solutions::observer::{NoopObserver, ProgressObserver};
use crate::solver::constants::NUM_DIGITS;
use crate::solver::{EquationSearcher, SolverError};
use crate::utils::{number_range, validate_num_digits};

/// Configuration for a full run over the number range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub num_digits: usize,
    /// Worker threads for parallel runs; `None` uses the global rayon pool
    pub threads: Option<usize>,
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            num_digits: NUM_DIGITS,
            threads: None,
            parallel: true,
        }
    }
}

impl BuildConfig {
    /// # Errors
    ///
    /// Returns a configuration error unless `num_digits` is supported.
    pub fn validate(&self) -> Result<(), SolverError> {
        validate_num_digits(self.num_digits)?;
        Ok(())
    }
}

/// Runs the searcher over every number and assembles the results
#[derive(Debug, Clone, Default)]
pub struct SolutionMapBuilder {
    config: BuildConfig,
    searcher: EquationSearcher,
}

impl SolutionMapBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self::with_searcher(config, EquationSearcher::new())
    }

    pub fn with_searcher(config: BuildConfig, searcher: EquationSearcher) -> Self {
        Self { config, searcher }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// # Errors
    ///
    /// See [`SolutionMapBuilder::build_with_observer`].
    pub fn build(&self) -> Result<SolutionMap, SolverError> {
        self.build_with_observer(&NoopObserver)
    }

    /// # Errors
    ///
    /// Returns a configuration error before any search if the digit count is
    /// unsupported, or an error if the worker pool cannot be created.
    pub fn build_with_observer(
        &self,
        observer: &dyn ProgressObserver,
    ) -> Result<SolutionMap, SolverError> {
        self.config.validate()?;

        let (low, high) = number_range();
        let total = (high - low + 1) as usize;
        info!(
            "Searching {} numbers from {} to {} ({})",
            total,
            low,
            high,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );
        observer.on_start(total);

        let map = match (self.config.parallel, self.config.threads) {
            (false, _) => self.build_sequential(low, high, observer)?,
            (true, None) => self.build_parallel(low, high, observer)?,
            (true, Some(threads)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| self.build_parallel(low, high, observer))?
            }
        };

        let summary = map.summary();
        info!("{}", summary);
        observer.on_finish(&summary);
        Ok(map)
    }

    fn solve_one(
        &self,
        number: u32,
        observer: &dyn ProgressObserver,
    ) -> Result<Option<Equation>, SolverError> {
        let equation = self.searcher.search(number)?;
        observer.on_number(number, equation.as_ref());
        Ok(equation)
    }

    fn build_sequential(
        &self,
        low: u32,
        high: u32,
        observer: &dyn ProgressObserver,
    ) -> Result<SolutionMap, SolverError> {
        let mut map = SolutionMap::default();
        for number in low..=high {
            let equation = self.solve_one(number, observer)?;
            map.record(number, equation);
        }
        Ok(map)
    }

    /// Each rayon split fills its own partial map; partial maps cover disjoint
    /// numbers, so merge order does not affect the result.
    fn build_parallel(
        &self,
        low: u32,
        high: u32,
        observer: &dyn ProgressObserver,
    ) -> Result<SolutionMap, SolverError> {
        (low..=high)
            .into_par_iter()
            .try_fold(SolutionMap::default, |mut map, number| {
                let equation = self.solve_one(number, observer)?;
                map.record(number, equation);
                Ok::<_, SolverError>(map)
            })
            .try_reduce(SolutionMap::default, |left, right| Ok(left.merge(right)))
    }
}

/// Build the solution map for every `num_digits`-digit number with default settings.
///
/// # Errors
///
/// Returns a configuration error, without searching, unless `num_digits` is 4.
pub fn build(num_digits: usize) -> Result<SolutionMap, SolverError> {
    SolutionMapBuilder::new(BuildConfig {
        num_digits,
        ..BuildConfig::default()
    })
    .build()
}
