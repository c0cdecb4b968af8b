use otter_gb::{
    analyzer::Analyzer,
    config::{strategy::StrategyConfig, Config},
    reports::AnalysisResult,
    ring::order::MonomialOrder,
    structures::clause::{CClause, Clause},
};
use rand::SeedableRng;

mod common;
use common::{entailed, init_logger, models, random_batch, MinimalPCG32};

const ATOMS: u32 = 7;

/// Checks the result of an analysis of `batch` against the models of `batch`.
fn check(batch: &[CClause], result: &AnalysisResult) {
    match result {
        AnalysisResult::Skipped => {}

        AnalysisResult::Contradiction(_) => {
            assert!(models(batch, ATOMS).is_empty(), "Contradiction on a satisfiable batch")
        }

        AnalysisResult::Redundant => {
            assert!(batch.iter().all(|reason| reason.is_tautology()))
        }

        AnalysisResult::Other(clauses) => {
            assert!(!models(batch, ATOMS).is_empty(), "Missed contradiction");

            for clause in clauses {
                assert!(entailed(batch, ATOMS, clause), "Not entailed: {clause:?}");
                assert!(!clause.is_tautology());
                assert!(batch
                    .iter()
                    .all(|reason| reason.literal_set() != clause.literal_set()));
            }
        }
    }
}

#[test]
fn learnt_clauses_are_entailed() {
    init_logger();
    let mut rng = MinimalPCG32::from_seed(73_u64.to_le_bytes());
    let mut analyzer = Analyzer::new(ATOMS as usize, Config::default()).unwrap();
    let host_activity = vec![1.0, 0.5, 2.0, 0.0, 1.5, 1.0, 3.0];

    for _ in 0..200 {
        let batch = random_batch(&mut rng, ATOMS, 6, 3);
        let result = analyzer.analyze(&batch, &host_activity).unwrap();
        check(&batch, &result);
    }
}

#[test]
fn results_are_independent_of_strategy() {
    let mut rng = MinimalPCG32::from_seed(2_u64.to_le_bytes());

    let mut configs = Vec::default();
    for lazy in [true, false] {
        for linear_algebra in [true, false] {
            for recursion in [true, false] {
                let mut strategy = StrategyConfig::default();
                strategy.lazy.value = lazy;
                strategy.modified_linear_algebra.value = linear_algebra;
                strategy.recursion.value = recursion;
                configs.push(Config {
                    strategy,
                    ..Default::default()
                });
            }
        }
    }

    for _ in 0..50 {
        let batch = random_batch(&mut rng, ATOMS, 5, 3);

        let results = configs
            .iter()
            .map(|config| {
                let mut analyzer = Analyzer::new(ATOMS as usize, config.clone()).unwrap();
                analyzer.analyze(&batch, &vec![1.0; ATOMS as usize]).unwrap()
            })
            .collect::<Vec<_>>();

        check(&batch, &results[0]);
        assert!(results.iter().all(|result| *result == results[0]));
    }
}

#[test]
fn other_orders() {
    let mut rng = MinimalPCG32::from_seed(11_u64.to_le_bytes());
    let orders = [
        MonomialOrder::Lex,
        MonomialOrder::DegLex,
        MonomialOrder::BlockDegLex(vec![2, 5]),
    ];

    for order in orders {
        let config = Config {
            order,
            ..Default::default()
        };
        let mut analyzer = Analyzer::new(ATOMS as usize, config).unwrap();

        for _ in 0..50 {
            let batch = random_batch(&mut rng, ATOMS, 6, 3);
            let result = analyzer.analyze(&batch, &vec![1.0; ATOMS as usize]).unwrap();
            check(&batch, &result);
        }
    }
}
