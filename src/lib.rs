#![warn(clippy::pedantic)]
// Noisy doc/signature lints that would require annotating most pub functions
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Style preference: keeping format!("{}", x) over format!("{x}") for readability with complex exprs
#![allow(clippy::uninlined_format_args)]
// Intentional casts in cache statistics (u64 counters to f64 ratios)
#![allow(clippy::cast_precision_loss)]
// Module structure: the classifier module exposes classifier::MessageClassifier by design
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod responses;
pub mod router;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
