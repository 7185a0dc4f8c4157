//! Packwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, PackConfig},
    packs::{DEFAULT_PACK_SIZES, PackSizeError, PackSizes},
    report::{ReportError, ShipmentReport},
    shipment::{PackQuantity, Shipment},
    solvers::{
        Solver, SolverError,
        dp::{MAX_HORIZON, PackSolver, horizon},
        solve,
    },
    store::PackSizeStore,
};
