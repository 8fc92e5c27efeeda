//! Statistics behind the distribution and estimate plots.
//!
//! Every function here ignores non-finite input and works on `f32`.

pub mod boxstats;
pub mod estimate;
pub mod kde;
pub mod letter_values;
pub mod swarm;

pub use boxstats::{percentile, sorted_finite, BoxStats};
pub use estimate::{aggregate, bootstrap_ci, mean, min_max, std_dev, Aggregate, ErrorBar, Estimator};
pub use kde::{Bandwidth, Kde};
pub use letter_values::{KDepth, LetterValues};
pub use swarm::{Beeswarm, SwarmLayout};
