use triga::{
    error::GeneticError,
    evolution::{GaOptions, GeneticAlgorithm, LogLevel, RunState, SizeProfile},
    gene::GeneType,
};

fn is_config_error<T>(result: triga::Result<T>) -> bool {
    matches!(result, Err(GeneticError::Configuration(_)))
}

#[test]
fn test_defaults() {
    let ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();

    assert_eq!(ga.chromo_len(), 3);
    assert_eq!(ga.pop_size(), 10);
    assert_eq!(ga.num_generations(), 50);
    assert_eq!(ga.gene_type(), "real-number");
    assert_eq!(ga.selection_type(), "random");
    assert_eq!(ga.selection_rate(), 0.5);
    assert_eq!(ga.crossover_type(), "uniform");
    assert_eq!(ga.mutation_type(), "random-resetting");
    assert_eq!(ga.mutation_rate(), 0.3);
    assert_eq!(ga.evaluation_type(), "triangle-classification");
    assert_eq!(ga.expected_solution(), "scalene");
    assert_eq!(ga.state(), RunState::Unconfigured);
    assert!(ga.current_pop().is_empty());
}

#[test]
fn test_unknown_strategy_names_are_rejected() {
    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();

    assert!(is_config_error(ga.set_gene_type("binary")));
    assert!(is_config_error(ga.set_selection_type("roulette")));
    assert!(is_config_error(ga.set_crossover_type("three-point")));
    assert!(is_config_error(ga.set_mutation_type("swap")));
    assert!(is_config_error(ga.set_evaluation_type("knapsack")));
}

#[test]
fn test_range_checks() {
    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();

    assert!(is_config_error(ga.set_chromo_len(0)));
    assert!(is_config_error(ga.set_chromo_len(10_000)));
    assert!(is_config_error(ga.set_pop_size(0)));
    assert!(is_config_error(ga.set_num_generations(0)));
    assert!(is_config_error(ga.set_selection_rate(-0.1)));
    assert!(is_config_error(ga.set_selection_rate(f64::NAN)));
    assert!(is_config_error(ga.set_mutation_rate(1.01)));
    assert!(is_config_error(ga.set_gene_bounds(5.0, 5.0)));

    assert!(ga.set_chromo_len(9999).is_ok());
    assert!(ga.set_mutation_rate(0.0).is_ok());
    assert!(ga.set_mutation_rate(1.0).is_ok());
}

#[test]
fn test_compact_profile() {
    let options = GaOptions::builder()
        .size_profile(SizeProfile::Compact)
        .num_generations(10)
        .build()
        .unwrap();
    let mut ga = GeneticAlgorithm::new(options).unwrap();

    assert!(is_config_error(ga.set_pop_size(11)));
    assert!(ga.set_pop_size(10).is_ok());
}

#[test]
fn test_gene_range_must_be_sampleable() {
    let options = GaOptions::builder().gene_bounds(-f64::MAX, f64::MAX).build();
    assert!(is_config_error(options));

    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();
    assert!(is_config_error(ga.set_gene_bounds(-f64::MAX, f64::MAX)));
    assert_eq!(ga.init_pop().unwrap().len(), 10);
}

#[test]
fn test_integer_bounds_must_be_whole() {
    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();
    ga.set_gene_type("integer").unwrap();

    assert!(is_config_error(ga.set_gene_bounds(0.5, 10.0)));
    assert!(ga.set_gene_bounds(1.0, 10.0).is_ok());
}

#[test]
fn test_degenerate_selection_rate_fails_at_init() {
    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();

    // Valid on its own, but keeps no parent out of ten.
    ga.set_selection_rate(0.05).unwrap();
    assert!(is_config_error(ga.init_pop()));
    assert!(is_config_error(ga.execute()));

    ga.set_selection_rate(0.1).unwrap();
    assert_eq!(ga.init_pop().unwrap().len(), 10);
}

#[test]
fn test_short_chromosome_for_evaluation_fails_at_init() {
    let mut ga = GeneticAlgorithm::new(GaOptions::default()).unwrap();
    ga.set_chromo_len(2).unwrap();

    assert!(is_config_error(ga.init_pop()));
}

#[test]
fn test_new_rejects_inconsistent_options() {
    let mut options = GaOptions::default();
    options.set_log_level(LogLevel::Minimal);
    assert!(GeneticAlgorithm::new(options).is_ok());

    let options = GaOptions::builder().chromo_len(1).build();
    assert!(is_config_error(options));
}

#[test]
fn test_gene_type_switch_restores_default_bounds() {
    let options = GaOptions::builder()
        .gene_bounds(-5.0, 5.0)
        .build()
        .unwrap();
    let mut ga = GeneticAlgorithm::new(options).unwrap();
    assert_eq!(ga.options().get_gene_bounds(), (-5.0, 5.0));

    ga.set_gene_type("integer").unwrap();
    assert_eq!(ga.options().get_gene_type(), GeneType::Integer);
    assert_eq!(ga.options().get_gene_bounds(), (0.0, 100.0));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use triga::evolution::{ExecutionTrace, GaOptions, GeneticAlgorithm};

    #[test]
    fn test_options_json() {
        let options = GaOptions::builder().pop_size(8).seed(1).build().unwrap();
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"selection_type\":\"random\""));
        assert!(json.contains("\"crossover_type\":\"uniform\""));

        let parsed: GaOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_trace_json() {
        let options = GaOptions::builder()
            .num_generations(2)
            .seed(2)
            .build()
            .unwrap();
        let mut ga = GeneticAlgorithm::new(options).unwrap();
        let (config, trace) = ga.execute().unwrap();

        let config_json = serde_json::to_value(&config).unwrap();
        assert_eq!(config_json["algorithm"], "genetic-algorithm");
        assert_eq!(config_json["pop_size"], 10);

        let json = serde_json::to_string(&trace).unwrap();
        let parsed: ExecutionTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
