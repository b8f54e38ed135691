//! # Run Trace
//!
//! What a run hands back: a [`ConfigSnapshot`] of the settings it ran with and
//! an [`ExecutionTrace`] holding one [`GenerationRecord`] per completed
//! generation. Both can be flattened into labelled columns for display.

use crate::chromosome::{best_individual, Chromosome, Population, ScoredIndividual};

/// The name a run reports for its algorithm.
pub const ALGORITHM_NAME: &str = "genetic-algorithm";

/// The configuration a run executed with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub evaluation_type: String,
    pub expected_solution: String,
    pub algorithm: String,
    pub num_generations: usize,
    pub pop_size: usize,
    pub chromo_len: usize,
    pub gene_type: String,
    pub selection_type: String,
    pub selection_rate: f64,
    pub crossover_type: String,
    pub mutation_type: String,
    pub mutation_rate: f64,
}

impl ConfigSnapshot {
    /// Labelled values in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Evaluation type", self.evaluation_type.clone()),
            ("Expected solution", self.expected_solution.clone()),
            ("Algorithm", self.algorithm.clone()),
            ("Generations", self.num_generations.to_string()),
            ("Population size", self.pop_size.to_string()),
            ("Chromosome length", self.chromo_len.to_string()),
            ("Gen type", self.gene_type.clone()),
            ("Selection type", self.selection_type.clone()),
            ("Selection rate", self.selection_rate.to_string()),
            ("Crossover type", self.crossover_type.clone()),
            ("Mutation type", self.mutation_type.clone()),
            ("Mutation rate", self.mutation_rate.to_string()),
        ]
    }
}

/// Every intermediate population of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// 1-based generation number.
    pub generation: usize,
    pub initial_population: Population,
    pub selected_population: Population,
    pub crossover_population: Vec<Chromosome>,
    pub mutated_population: Vec<Chromosome>,
    pub evaluated_population: Population,
}

impl GenerationRecord {
    /// The fittest individual this generation produced.
    pub fn best(&self) -> Option<&ScoredIndividual> {
        best_individual(&self.evaluated_population)
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best().map(|individual| individual.fitness)
    }
}

/// The per-generation record of a run, in generation order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutionTrace {
    records: Vec<GenerationRecord>,
    cancelled: bool,
}

impl ExecutionTrace {
    pub fn new(records: Vec<GenerationRecord>, cancelled: bool) -> Self {
        Self { records, cancelled }
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the run stopped on a cancellation request before its last generation.
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }

    /// The population the first generation started from.
    pub fn initial_population(&self) -> Option<&[ScoredIndividual]> {
        self.records
            .first()
            .map(|record| record.initial_population.as_slice())
    }

    /// The population the last generation ended with.
    pub fn final_population(&self) -> Option<&[ScoredIndividual]> {
        self.records
            .last()
            .map(|record| record.evaluated_population.as_slice())
    }

    /// Best fitness of each evaluated population, in generation order.
    pub fn best_fitness_per_generation(&self) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(GenerationRecord::best_fitness)
            .collect()
    }

    /// The fittest individual seen anywhere in the run, the starting population included.
    ///
    /// Earlier individuals win ties.
    pub fn best_individual(&self) -> Option<&ScoredIndividual> {
        let initial = self.initial_population().into_iter().flatten();
        let evaluated = self
            .records
            .iter()
            .flat_map(|record| record.evaluated_population.iter());

        best_individual(initial.chain(evaluated))
    }

    /// Column-oriented view of the trace, one rendered cell per generation.
    pub fn columns(&self) -> Vec<(&'static str, Vec<String>)> {
        let column = |render: fn(&GenerationRecord) -> String| -> Vec<String> {
            self.records.iter().map(render).collect()
        };

        vec![
            ("Generation", column(|r| r.generation.to_string())),
            ("Initial population", column(|r| format_scored(&r.initial_population))),
            ("Selected population", column(|r| format_scored(&r.selected_population))),
            ("Crossover population", column(|r| format_chromosomes(&r.crossover_population))),
            ("Mutated population", column(|r| format_chromosomes(&r.mutated_population))),
            ("Evaluated population", column(|r| format_scored(&r.evaluated_population))),
        ]
    }
}

fn format_scored(population: &[ScoredIndividual]) -> String {
    let cells: Vec<String> = population
        .iter()
        .map(|individual| format!("{} {}", individual.chromosome, individual.fitness))
        .collect();
    format!("[{}]", cells.join(", "))
}

fn format_chromosomes(chromosomes: &[Chromosome]) -> String {
    let cells: Vec<String> = chromosomes.iter().map(ToString::to_string).collect();
    format!("[{}]", cells.join(", "))
}
