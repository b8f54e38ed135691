use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::options::{GaOptions, LogLevel};
use super::trace::{ConfigSnapshot, ExecutionTrace, GenerationRecord, ALGORITHM_NAME};
use crate::chromosome::{best_individual, Chromosome, Population, ScoredIndividual};
use crate::crossover::{CrossoverStrategy, CrossoverType};
use crate::error::{GeneticError, OptionExt, Result};
use crate::evaluation::{Evaluation, EvaluationType};
use crate::gene::{GeneFactory, GeneType};
use crate::mutation::{MutationStrategy, MutationType};
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, SelectionType};

/// Lifecycle of a [`GeneticAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Configured, but no population yet.
    Unconfigured,
    /// A scored population is in place.
    Initialized,
    Running,
    Completed,
}

/// The strategy instances built from a set of options.
#[derive(Debug)]
struct Strategies {
    gene: Box<dyn GeneFactory>,
    evaluation: Box<dyn Evaluation>,
    selection: Box<dyn SelectionStrategy>,
    crossover: Box<dyn CrossoverStrategy>,
    mutation: Box<dyn MutationStrategy>,
}

impl Strategies {
    fn build(options: &GaOptions) -> Result<Self> {
        Ok(Self {
            gene: options
                .get_gene_type()
                .build(Some(options.get_gene_bounds()))?,
            evaluation: options.get_evaluation_type().build(),
            selection: options
                .get_selection_type()
                .build(options.get_selection_rate())?,
            crossover: options.get_crossover_type().build(),
            mutation: options
                .get_mutation_type()
                .build(options.get_mutation_rate())?,
        })
    }
}

/// Runs a generational genetic algorithm over a pluggable set of strategies.
///
/// Every generation selects parents from the current population, breeds a
/// full population of offspring, mutates them, scores them and replaces the
/// current population with the result.
///
/// # Example
///
/// ```rust
/// use triga::evolution::{GaOptions, GeneticAlgorithm};
///
/// let options = GaOptions::builder()
///     .pop_size(10)
///     .num_generations(5)
///     .expected_solution("equilateral")
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let mut ga = GeneticAlgorithm::new(options).unwrap();
/// let (config, trace) = ga.execute().unwrap();
///
/// assert_eq!(config.pop_size, 10);
/// assert_eq!(trace.len(), 5);
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm {
    options: GaOptions,
    strategies: Strategies,
    current_pop: Population,
    state: RunState,
    rng: RandomNumberGenerator,
}

impl GeneticAlgorithm {
    /// Creates an algorithm from validated options.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `options` fail [`GaOptions::validate`].
    pub fn new(options: GaOptions) -> Result<Self> {
        if let Err(e) = options.validate() {
            warn!(error = %e, "Rejected genetic algorithm configuration");
            return Err(e);
        }

        let strategies = Strategies::build(&options)?;
        let rng = match options.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        Ok(Self {
            options,
            strategies,
            current_pop: Vec::new(),
            state: RunState::Unconfigured,
            rng,
        })
    }

    pub fn options(&self) -> &GaOptions {
        &self.options
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn current_pop(&self) -> &[ScoredIndividual] {
        &self.current_pop
    }

    /// The fittest individual of the current population.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` before a population exists.
    pub fn best(&self) -> Result<&ScoredIndividual> {
        best_individual(&self.current_pop).ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Replaces the current population.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty population and
    /// `InvalidChromosome` if a chromosome does not have `chromo_len` genes.
    pub fn set_current_pop(&mut self, population: Population) -> Result<()> {
        if population.is_empty() {
            return Err(GeneticError::Configuration(
                "Current population must have individuals".to_string(),
            ));
        }
        let chromo_len = self.options.get_chromo_len();
        if let Some(bad) = population
            .iter()
            .find(|individual| individual.chromosome.len() != chromo_len)
        {
            return Err(GeneticError::InvalidChromosome(format!(
                "Expected {} genes, got {}",
                chromo_len,
                bad.chromosome.len()
            )));
        }

        self.current_pop = population;
        self.state = RunState::Initialized;
        Ok(())
    }

    pub fn chromo_len(&self) -> usize {
        self.options.get_chromo_len()
    }

    pub fn pop_size(&self) -> usize {
        self.options.get_pop_size()
    }

    pub fn num_generations(&self) -> usize {
        self.options.get_num_generations()
    }

    pub fn gene_type(&self) -> &'static str {
        self.strategies.gene.name()
    }

    pub fn evaluation_type(&self) -> &'static str {
        self.strategies.evaluation.name()
    }

    pub fn expected_solution(&self) -> &str {
        self.options.get_expected_solution()
    }

    pub fn selection_type(&self) -> &'static str {
        self.strategies.selection.name()
    }

    pub fn selection_rate(&self) -> f64 {
        self.strategies.selection.rate()
    }

    pub fn crossover_type(&self) -> &'static str {
        self.strategies.crossover.name()
    }

    pub fn mutation_type(&self) -> &'static str {
        self.strategies.mutation.name()
    }

    pub fn mutation_rate(&self) -> f64 {
        self.strategies.mutation.rate()
    }

    pub fn set_chromo_len(&mut self, chromo_len: usize) -> Result<()> {
        self.reconfigure(|options| {
            options.set_chromo_len(chromo_len);
            Ok(())
        })
    }

    pub fn set_pop_size(&mut self, pop_size: usize) -> Result<()> {
        self.reconfigure(|options| {
            options.set_pop_size(pop_size);
            Ok(())
        })
    }

    pub fn set_num_generations(&mut self, num_generations: usize) -> Result<()> {
        self.reconfigure(|options| {
            options.set_num_generations(num_generations);
            Ok(())
        })
    }

    /// Switches the gene type by name. The gene bounds fall back to the new type's defaults.
    pub fn set_gene_type(&mut self, name: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_gene_type(name.parse::<GeneType>()?);
            Ok(())
        })
    }

    pub fn set_gene_bounds(&mut self, min_value: f64, max_value: f64) -> Result<()> {
        self.reconfigure(|options| {
            options.set_gene_bounds(min_value, max_value);
            Ok(())
        })
    }

    pub fn set_evaluation_type(&mut self, name: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_evaluation_type(name.parse::<EvaluationType>()?);
            Ok(())
        })
    }

    pub fn set_expected_solution(&mut self, expected_solution: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_expected_solution(expected_solution);
            Ok(())
        })
    }

    pub fn set_selection_type(&mut self, name: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_selection_type(name.parse::<SelectionType>()?);
            Ok(())
        })
    }

    pub fn set_selection_rate(&mut self, selection_rate: f64) -> Result<()> {
        self.reconfigure(|options| {
            options.set_selection_rate(selection_rate);
            Ok(())
        })
    }

    pub fn set_crossover_type(&mut self, name: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_crossover_type(name.parse::<CrossoverType>()?);
            Ok(())
        })
    }

    pub fn set_mutation_type(&mut self, name: &str) -> Result<()> {
        self.reconfigure(|options| {
            options.set_mutation_type(name.parse::<MutationType>()?);
            Ok(())
        })
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) -> Result<()> {
        self.reconfigure(|options| {
            options.set_mutation_rate(mutation_rate);
            Ok(())
        })
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.options.set_log_level(log_level);
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.options.set_parallel_threshold(threshold);
    }

    /// Reseeds the random number generator.
    pub fn set_seed(&mut self, seed: u64) {
        self.options.set_seed(Some(seed));
        self.rng = RandomNumberGenerator::from_seed(seed);
    }

    /// Applies `change` to a copy of the options and commits it only if every
    /// field stays valid. A committed change discards the current population.
    fn reconfigure<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut GaOptions) -> Result<()>,
    {
        let mut options = self.options.clone();
        let rebuilt = change(&mut options)
            .and_then(|_| options.validate_fields())
            .and_then(|_| Strategies::build(&options));

        match rebuilt {
            Ok(strategies) => {
                self.options = options;
                self.strategies = strategies;
                self.current_pop.clear();
                self.state = RunState::Unconfigured;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected configuration change");
                Err(e)
            }
        }
    }

    /// Creates and scores a fresh random population of `pop_size` individuals.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are inconsistent, for
    /// example a chromosome too short for the chosen crossover.
    pub fn init_pop(&mut self) -> Result<&[ScoredIndividual]> {
        if let Err(e) = self.options.validate() {
            warn!(error = %e, "Cannot initialize population");
            return Err(e);
        }

        let chromo_len = self.options.get_chromo_len();
        let mut chromosomes = Vec::with_capacity(self.options.get_pop_size());
        for _ in 0..self.options.get_pop_size() {
            chromosomes.push(Chromosome::random(
                chromo_len,
                self.strategies.gene.as_ref(),
                &mut self.rng,
            ));
        }

        self.current_pop = self.evaluate(chromosomes)?;
        self.state = RunState::Initialized;
        Ok(&self.current_pop)
    }

    /// Scores every chromosome against the expected solution, keeping input order.
    ///
    /// Populations of at least `parallel_threshold` chromosomes are scored on
    /// the rayon thread pool.
    ///
    /// # Errors
    ///
    /// Returns `FitnessCalculation` for a non-finite score and any error the
    /// evaluation itself reports.
    pub fn evaluate(&self, chromosomes: Vec<Chromosome>) -> Result<Population> {
        let evaluation = self.strategies.evaluation.as_ref();
        let expected = self.options.get_expected_solution();

        if chromosomes.len() >= self.options.get_parallel_threshold() {
            chromosomes
                .into_par_iter()
                .map(|chromosome| score_checked(evaluation, chromosome, expected))
                .collect()
        } else {
            chromosomes
                .into_iter()
                .map(|chromosome| score_checked(evaluation, chromosome, expected))
                .collect()
        }
    }

    /// Picks the parents of the next generation.
    pub fn select(&mut self, population: &[ScoredIndividual]) -> Result<Population> {
        self.strategies
            .selection
            .select(population, self.options.get_pop_size(), &mut self.rng)
    }

    /// Breeds `pop_size` offspring from the selected parents.
    ///
    /// Each offspring comes from two parents drawn with replacement; the
    /// crossover yields two children and one of them is kept at random.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `selected` is empty.
    pub fn cross(&mut self, selected: &[ScoredIndividual]) -> Result<Vec<Chromosome>> {
        if selected.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let chromo_len = self.options.get_chromo_len();
        let mut offspring = Vec::with_capacity(self.options.get_pop_size());
        for _ in 0..self.options.get_pop_size() {
            let parent1 = &selected[self.rng.index(selected.len())].chromosome;
            let parent2 = &selected[self.rng.index(selected.len())].chromosome;
            let (child1, child2) =
                self.strategies
                    .crossover
                    .cross(chromo_len, parent1, parent2, &mut self.rng)?;
            offspring.push(if self.rng.coin() { child1 } else { child2 });
        }
        Ok(offspring)
    }

    /// Mutates the offspring, returning a new generation of chromosomes.
    pub fn mutate(&mut self, offspring: Vec<Chromosome>) -> Result<Vec<Chromosome>> {
        self.strategies.mutation.mutate(
            offspring,
            self.options.get_chromo_len(),
            self.strategies.gene.as_ref(),
            &mut self.rng,
        )
    }

    /// The configuration this algorithm runs with, as reported after a run.
    pub fn config_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            evaluation_type: self.evaluation_type().to_string(),
            expected_solution: self.expected_solution().to_string(),
            algorithm: ALGORITHM_NAME.to_string(),
            num_generations: self.num_generations(),
            pop_size: self.pop_size(),
            chromo_len: self.chromo_len(),
            gene_type: self.gene_type().to_string(),
            selection_type: self.selection_type().to_string(),
            selection_rate: self.selection_rate(),
            crossover_type: self.crossover_type().to_string(),
            mutation_type: self.mutation_type().to_string(),
            mutation_rate: self.mutation_rate(),
        }
    }

    /// Runs `num_generations` generations from a fresh random population.
    ///
    /// # Errors
    ///
    /// Any error aborts the run, clears the population and leaves the
    /// algorithm `Unconfigured`.
    pub fn execute(&mut self) -> Result<(ConfigSnapshot, ExecutionTrace)> {
        self.execute_with_cancel(&AtomicBool::new(false))
    }

    /// Like [`execute`](Self::execute), but checks `cancel` before every
    /// generation and stops early once it is set. The trace then holds the
    /// generations completed so far and reports itself as cancelled.
    pub fn execute_with_cancel(
        &mut self,
        cancel: &AtomicBool,
    ) -> Result<(ConfigSnapshot, ExecutionTrace)> {
        self.init_pop()?;
        self.state = RunState::Running;

        let num_generations = self.options.get_num_generations();
        let logging = self.options.get_log_level() != LogLevel::None;
        if logging {
            info!(
                num_generations,
                pop_size = self.options.get_pop_size(),
                chromo_len = self.options.get_chromo_len(),
                expected_solution = self.options.get_expected_solution(),
                "Starting genetic algorithm"
            );
        }

        let mut records = Vec::with_capacity(num_generations);
        let mut cancelled = false;
        for generation in 1..=num_generations {
            if cancel.load(Ordering::Relaxed) {
                if logging {
                    info!(generation, "Run cancelled");
                }
                cancelled = true;
                break;
            }

            match self.run_generation(generation) {
                Ok(record) => records.push(record),
                Err(e) => {
                    if logging {
                        warn!(generation, error = %e, "Generation failed");
                    }
                    self.current_pop.clear();
                    self.state = RunState::Unconfigured;
                    return Err(e);
                }
            }
        }

        self.state = RunState::Completed;
        Ok((self.config_snapshot(), ExecutionTrace::new(records, cancelled)))
    }

    fn run_generation(&mut self, generation: usize) -> Result<GenerationRecord> {
        let initial = self.current_pop.clone();
        let selected = self.select(&initial)?;
        let crossed = self.cross(&selected)?;
        let mutated = self.mutate(crossed.clone())?;
        let evaluated = self.evaluate(mutated.clone())?;

        self.log_generation(generation, selected.len(), &evaluated);
        self.current_pop = evaluated.clone();

        Ok(GenerationRecord {
            generation,
            initial_population: initial,
            selected_population: selected,
            crossover_population: crossed,
            mutated_population: mutated,
            evaluated_population: evaluated,
        })
    }

    fn log_generation(&self, generation: usize, selected: usize, evaluated: &[ScoredIndividual]) {
        let log_level = self.options.get_log_level();
        if log_level == LogLevel::None {
            return;
        }

        let best_fitness = best_individual(evaluated).map(|individual| individual.fitness);
        info!(generation, selected, best_fitness = ?best_fitness, "Generation complete");

        if log_level == LogLevel::Verbose {
            for individual in evaluated {
                debug!(
                    generation,
                    chromosome = %individual.chromosome,
                    fitness = individual.fitness,
                    "Evaluated individual"
                );
            }
        }
    }
}

fn score_checked(
    evaluation: &dyn Evaluation,
    chromosome: Chromosome,
    expected_solution: &str,
) -> Result<ScoredIndividual> {
    let scored = evaluation.score(chromosome, expected_solution)?;
    if !scored.fitness.is_finite() {
        return Err(GeneticError::FitnessCalculation(format!(
            "Non-finite fitness score encountered: {}",
            scored.fitness
        )));
    }
    Ok(scored)
}
