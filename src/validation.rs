//! Input validation for scheduling requests.
//!
//! Checks the shape of a [`SolveRequest`] before any simulation runs.
//! Detects:
//! - Mismatched array lengths
//! - Negative arrival times and non-positive burst times
//! - Missing or non-positive time quantum (round robin)
//! - Missing priorities (priority disciplines)
//! - Duplicate or reserved job labels
//! - Time horizons that do not fit in `i64`
//!
//! All problems are collected; validation does not stop at the first one.

use crate::models::IDLE_LABEL;
use crate::scheduler::SolveRequest;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An input array does not have one entry per process.
    LengthMismatch,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// Round robin requested without a time quantum.
    MissingTimeQuantum,
    /// Time quantum is zero or negative.
    NonPositiveTimeQuantum,
    /// Priority discipline requested without priorities.
    MissingPriorities,
    /// Two processes share a job label.
    DuplicateLabel,
    /// A job label collides with the idle marker.
    ReservedLabel,
    /// The latest arrival plus all burst times exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. `burst_times` has one entry per arrival time
/// 2. No negative arrival time, no non-positive burst time
/// 3. Round robin: time quantum present and positive
/// 4. Priority disciplines: priorities present, one per process
/// 5. Custom labels (if any): one per process, unique, not the idle marker
/// 6. The latest arrival plus the total burst time fits in `i64`
///
/// Parameters an algorithm does not use are ignored.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SolveRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let n = request.arrival_times.len();

    if request.burst_times.len() != n {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} arrival times but {} burst times",
                n,
                request.burst_times.len()
            ),
        ));
    }

    for (i, &at) in request.arrival_times.iter().enumerate() {
        if at < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Arrival time #{} is negative: {at}", i + 1),
            ));
        }
    }

    for (i, &bt) in request.burst_times.iter().enumerate() {
        if bt <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Burst time #{} must be positive: {bt}", i + 1),
            ));
        }
    }

    if request.algorithm.requires_time_quantum() {
        match request.time_quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingTimeQuantum,
                format!("{} requires a time quantum", request.algorithm),
            )),
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveTimeQuantum,
                format!("Time quantum must be positive: {q}"),
            )),
            Some(_) => {}
        }
    }

    if request.algorithm.requires_priorities() {
        match &request.priorities {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriorities,
                format!("{} requires priorities", request.algorithm),
            )),
            Some(priorities) if priorities.len() != n => errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!("{} arrival times but {} priorities", n, priorities.len()),
            )),
            Some(_) => {}
        }
    }

    if let Some(labels) = &request.job_labels {
        check_labels(labels, n, &mut errors);
    }

    if time_horizon(&request.arrival_times, &request.burst_times).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows i64",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value a schedule can reach.
///
/// The CPU never idles once all processes have arrived, so no segment ends
/// after the latest arrival plus the sum of all bursts. Values rejected by
/// the sign checks are left out.
fn time_horizon(arrival_times: &[i64], burst_times: &[i64]) -> Option<i64> {
    let latest = arrival_times.iter().copied().max().unwrap_or(0).max(0);
    burst_times
        .iter()
        .filter(|&&bt| bt > 0)
        .try_fold(latest, |horizon, &bt| horizon.checked_add(bt))
}

fn check_labels(labels: &[String], n: usize, errors: &mut Vec<ValidationError>) {
    if labels.len() != n {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("{} arrival times but {} job labels", n, labels.len()),
        ));
    }

    let mut seen = HashSet::new();
    for label in labels {
        if label == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedLabel,
                format!("Job label '{label}' is reserved for idle time"),
            ));
        }
        if !seen.insert(label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("Duplicate job label: {label}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;

    fn kinds(request: &SolveRequest) -> Vec<ValidationErrorKind> {
        validate_request(request)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_request() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![0, 2, 4], vec![5, 3, 2]);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_empty_request_is_valid() {
        let request = SolveRequest::new(Algorithm::Srtf, vec![], vec![]);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let request = SolveRequest::new(Algorithm::Sjf, vec![0, 1], vec![3]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::LengthMismatch]);
    }

    #[test]
    fn test_non_positive_burst() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![0, 1], vec![0, -2]);
        assert_eq!(
            kinds(&request),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_negative_arrival() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![-1], vec![2]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_round_robin_quantum() {
        let missing = SolveRequest::new(Algorithm::RoundRobin, vec![0], vec![2]);
        assert_eq!(kinds(&missing), vec![ValidationErrorKind::MissingTimeQuantum]);

        let zero = missing.clone().with_time_quantum(0);
        assert_eq!(kinds(&zero), vec![ValidationErrorKind::NonPositiveTimeQuantum]);

        let ok = missing.with_time_quantum(2);
        assert!(validate_request(&ok).is_ok());
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        let request =
            SolveRequest::new(Algorithm::Fcfs, vec![0], vec![2]).with_time_quantum(-4);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_priorities_required() {
        for algorithm in [Algorithm::PriorityNonPreemptive, Algorithm::PriorityPreemptive] {
            let request = SolveRequest::new(algorithm, vec![0, 1], vec![2, 2]);
            assert_eq!(kinds(&request), vec![ValidationErrorKind::MissingPriorities]);

            let short = request.clone().with_priorities(vec![1]);
            assert_eq!(kinds(&short), vec![ValidationErrorKind::LengthMismatch]);

            let ok = request.with_priorities(vec![1, 2]);
            assert!(validate_request(&ok).is_ok());
        }
    }

    #[test]
    fn test_priorities_ignored_for_other_algorithms() {
        let request =
            SolveRequest::new(Algorithm::Sjf, vec![0, 1], vec![2, 2]).with_priorities(vec![1]);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_job_labels() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![0, 1, 2], vec![1, 1, 1])
            .with_job_labels(vec!["a".into(), "a".into(), IDLE_LABEL.into()]);
        let found = kinds(&request);
        assert!(found.contains(&ValidationErrorKind::DuplicateLabel));
        assert!(found.contains(&ValidationErrorKind::ReservedLabel));

        let short = SolveRequest::new(Algorithm::Fcfs, vec![0, 1], vec![1, 1])
            .with_job_labels(vec!["a".into()]);
        assert_eq!(kinds(&short), vec![ValidationErrorKind::LengthMismatch]);
    }

    #[test]
    fn test_late_arrival_overflow() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![i64::MAX - 1], vec![5]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::TimeOverflow]);
    }

    #[test]
    fn test_total_burst_overflow() {
        let request = SolveRequest::new(Algorithm::Sjf, vec![0, 0], vec![i64::MAX, 1]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::TimeOverflow]);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let request = SolveRequest::new(Algorithm::Fcfs, vec![i64::MAX - 5, 0], vec![2, 3]);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let request = SolveRequest::new(Algorithm::RoundRobin, vec![0, -1], vec![0]);
        let found = kinds(&request);
        assert!(found.len() >= 4);
        assert!(found.contains(&ValidationErrorKind::LengthMismatch));
        assert!(found.contains(&ValidationErrorKind::NegativeArrival));
        assert!(found.contains(&ValidationErrorKind::NonPositiveBurst));
        assert!(found.contains(&ValidationErrorKind::MissingTimeQuantum));
    }
}
