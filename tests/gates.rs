use otter_gb::{
    analyzer::Analyzer,
    config::{Config, Scheduler},
    reports::AnalysisResult,
};

mod common;
use common::clause;

mod clock {
    use super::*;

    #[test]
    fn default_period() {
        let analyzer = Analyzer::new(1, Config::default()).unwrap();

        let open = (0..200_000)
            .filter(|conflicts| analyzer.check_clock(*conflicts, 0))
            .collect::<Vec<_>>();
        assert_eq!(open, vec![49_999, 99_999, 149_999, 199_999]);
    }

    #[test]
    fn configured_period() {
        let config = Config {
            scheduler: Scheduler { conflict: Some(3) },
            ..Default::default()
        };
        let analyzer = Analyzer::new(1, config).unwrap();

        assert!(!analyzer.check_clock(0, 0));
        assert!(!analyzer.check_clock(1, 4));
        assert!(analyzer.check_clock(2, 0));
        assert!(analyzer.check_clock(5, 9));
    }

    #[test]
    fn no_period() {
        let config = Config {
            scheduler: Scheduler { conflict: None },
            ..Default::default()
        };
        let analyzer = Analyzer::new(1, config).unwrap();

        assert!((0..100_000).all(|conflicts| !analyzer.check_clock(conflicts, 0)));
    }
}

mod sparsity {
    use super::*;

    #[test]
    fn threshold() {
        let mut config = Config::default();
        assert!(config.sparsity_threshold.set(1.0));

        let mut analyzer = Analyzer::new(5, config).unwrap();
        let host_activity = vec![1.0; 5];

        // Three atoms over two reasons.
        let reasons = vec![clause(&[1, 2]), clause(&[-1, 3])];
        assert_eq!(
            analyzer.analyze(&reasons, &host_activity),
            Ok(AnalysisResult::Skipped)
        );

        // Two atoms over two reasons.
        let reasons = vec![clause(&[1, 2]), clause(&[-1, 2])];
        assert!(matches!(
            analyzer.analyze(&reasons, &host_activity),
            Ok(AnalysisResult::Other(_))
        ));

        assert_eq!(analyzer.counters.analyses, 2);
        assert_eq!(analyzer.counters.skipped, 1);
    }

    #[test]
    fn at_threshold() {
        let mut analyzer = Analyzer::new(7, Config::default()).unwrap();

        // Six atoms over three reasons.
        let reasons = vec![clause(&[1, 2]), clause(&[3, 4]), clause(&[5, 6])];
        assert_ne!(
            analyzer.analyze(&reasons, &vec![1.0; 7]),
            Ok(AnalysisResult::Skipped)
        );
        assert!(analyzer.should_skip(3, 7));
    }
}
