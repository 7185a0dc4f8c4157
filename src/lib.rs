//! Packwise
//!
//! Packwise works out which fixed-size packs to ship so that an order is covered
//! with as few surplus items as possible, and with as few packs as possible at
//! that total.
//!
//! ```
//! use packwise::solvers::solve;
//!
//! let shipment = solve(12_001, [250, 500, 1000, 2000, 5000])?;
//!
//! assert_eq!(shipment.total_items(), 12_250);
//! assert_eq!(shipment.quantity(5000), 2);
//! # Ok::<(), packwise::solvers::SolverError>(())
//! ```

pub mod cli;
pub mod config;
pub mod packs;
pub mod prelude;
pub mod report;
pub mod shipment;
pub mod solvers;
pub mod store;
