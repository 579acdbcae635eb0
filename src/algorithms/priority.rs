//! Static priority scheduling, with and without preemption.
//!
//! Lower priority value = higher priority. Ties on priority are broken by
//! earliest arrival, then input index. In the preemptive variant a newcomer
//! takes the CPU only with a strictly lower priority value.

use super::simulation::{run_preemptive, run_to_completion};
use super::CpuScheduler;
use crate::dispatching::rules;
use crate::models::{Process, Solution};

/// Priority scheduling; the selected process runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl CpuScheduler for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "PNP"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        run_to_completion(processes, &rules::HighestPriority)
    }
}

/// Priority scheduling with preemption on arrival of a more important process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl CpuScheduler for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "PP"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        run_preemptive(processes, &rules::HighestPriority)
    }
}
