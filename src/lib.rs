//! Introductory Drills
//!
//! Small console exercises on types, input, conditionals, loops and arrays.
//! Each drill is its own binary under `src/bin/`; the algorithms live here so
//! they can be tested and compared side by side.
//!
//! ## Patterns Covered
//!
//! 1. **Linear scans** (`scan`) - top two, minimum, three smallest, position averages
//! 2. **Frequency tables** (`frequency`) - most frequent value, repeat listing, digit counts
//! 3. **Transforms** (`transform`) - in-place reversal, min/max exchange, unique list
//! 4. **Checks** (`checks`) - palindrome, non-decreasing order
//! 5. **Counting** (`counting`) - tuples under a linear constraint, naive and derived
//! 6. **Numbers** (`numbers`) - primes, digits, powers, sequences, parity
//! 7. **Patterns** (`patterns`) - diamond, cross, multiplication tables
//!
//! ## Running Drills
//!
//! ```bash
//! echo "5 10 20 3 30 7" | cargo run --bin arrays_top_two
//! echo "7 1 2 1 2 2 3 2" | cargo run --bin arrays_most_frequent
//! echo "123" | cargo run --bin loops_reverse_number
//! RUST_LOG=trace cargo run --bin loops_diamond <<< 4
//! ```

pub mod basics;
pub mod bounded;
pub mod checks;
pub mod config;
pub mod counting;
pub mod error;
pub mod frequency;
pub mod input;
pub mod logging;
pub mod numbers;
pub mod output;
pub mod patterns;
pub mod runner;
pub mod scan;
pub mod transform;

pub use bounded::BoundedBuf;
pub use config::Settings;
pub use error::{DrillError, DrillResult};
pub use input::Scanner;
