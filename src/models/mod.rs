//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by every scheduling
//! discipline: the input `Process` and the output `Solution`
//! (Gantt timeline plus per-process metrics).
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook | Presentation |
//! |------------|----------|--------------|
//! | Process | Job / PCB | Table row |
//! | GanttSegment | Time slice | Gantt bar |
//! | ProcessMetrics | Completion stats | Result row |
//! | Solution | Schedule | Chart + table |

mod process;
mod schedule;

pub use process::{Process, IDLE_LABEL};
pub use schedule::{GanttSegment, ProcessMetrics, Solution};
