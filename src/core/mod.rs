//! The simulation core: schedule resolution, interest accrual, the
//! day-stepped loop, and document export.

pub mod engine;
pub mod export;
pub mod interest;
pub mod schedule;

pub use engine::{simulate, SimulationOutcome, StopRule};
pub use export::build_document;
pub use interest::{interest_event_name, monthly_accrual};
pub use schedule::{due_flows, DueEvent};
