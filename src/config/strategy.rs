/*!
Configuration of a [basis-construction strategy](crate::engine::GroebnerStrategy).

These are switches for tuning the engine.
The basis obtained by a strategy is the reduced basis of the ideal, regardless of the switches, though the work done to obtain the basis varies.

- `lazy` --- Generators are only lead-reduced when added, and tails are left to the final tail reduction.
  Otherwise, generators are fully reduced when added.
- `modified_linear_algebra` --- Pairs of the lowest degree are reduced as a batch and then row-reduced together over GF(2).
  Otherwise, pairs are reduced one at a time.
- `recursion` --- Adding a generator requeues any existing generator whose leading monomial is divisible by the leading monomial of the added generator.
  Otherwise, such generators remain until minimization.
- `ll_on_last_block` --- Linear algebra is only used on batches whose pairs lie in the last block of a block order.
  For a non-block order the ring is a single (and so last) block.
- `log` --- Debug logs for each generator and pair.
- `draw_matrices` --- Trace logs of each matrix used during linear algebra.
*/

use super::ConfigOption;

/// Configuration of a strategy.
#[derive(Clone, Debug)]
pub struct StrategyConfig {
    pub lazy: ConfigOption<bool>,

    pub modified_linear_algebra: ConfigOption<bool>,

    pub recursion: ConfigOption<bool>,

    pub ll_on_last_block: ConfigOption<bool>,

    pub log: ConfigOption<bool>,

    pub draw_matrices: ConfigOption<bool>,

    /// Polynomials with at most this many variables have their implications computed by enumerating their zeros.
    pub implication_limit: ConfigOption<usize>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            lazy: ConfigOption {
                name: "lazy",
                min: false,
                max: true,
                value: true,
            },

            modified_linear_algebra: ConfigOption {
                name: "modified_linear_algebra",
                min: false,
                max: true,
                value: true,
            },

            recursion: ConfigOption {
                name: "recursion",
                min: false,
                max: true,
                value: false,
            },

            ll_on_last_block: ConfigOption {
                name: "ll_on_last_block",
                min: false,
                max: true,
                value: true,
            },

            log: ConfigOption {
                name: "strategy_log",
                min: false,
                max: true,
                value: false,
            },

            draw_matrices: ConfigOption {
                name: "draw_matrices",
                min: false,
                max: true,
                value: false,
            },

            implication_limit: ConfigOption {
                name: "implication_limit",
                min: 0,
                max: 16,
                value: 8,
            },
        }
    }
}
