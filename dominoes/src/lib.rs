pub mod config;
pub mod solver;
pub mod types;
pub mod verify;

pub use config::*;
pub use solver::*;
pub use types::*;
pub use verify::{check_chain, verify_maximal, CheckResult};

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::{check_chain, max_chain, verify::max_chain_length, Domino};

    #[derive(Debug, Deserialize)]
    struct Case {
        name: String,
        dominoes: Vec<Domino>,
        expected: usize,
    }

    fn load_cases() -> Vec<Case> {
        serde_json::from_str(include_str!("../fixtures/cases.json")).expect("valid fixture")
    }

    #[test]
    fn fixture_table() {
        let _ = env_logger::builder().is_test(true).try_init();

        let cases = load_cases();
        assert_eq!(cases.len(), 50);

        for case in cases {
            let input = &case.dominoes;

            let computed = max_chain_length(input).unwrap();
            assert_eq!(
                computed, case.expected,
                "Reference length mismatch for {}",
                case.name
            );

            let chain = match max_chain(input) {
                Ok(chain) => chain,
                Err(e) => panic!("Solver failed for {}: {e}", case.name),
            };
            let check = check_chain(input, &chain);
            assert!(
                check.is_correct(),
                "Invalid chain for {}: {check:?}",
                case.name
            );
            assert_eq!(
                chain.len(),
                case.expected,
                "Chain length incorrect for {}: {chain:?}",
                case.name
            );
        }
    }
}
