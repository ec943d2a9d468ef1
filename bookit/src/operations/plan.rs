//! Plan types for lifecycle operations.
//!
//! This module defines the plan structures that describe what a create,
//! approve, or cancel will do, without actually doing it.

use crate::reservation::{NewReservation, ReservationId, Status};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one write against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Persist a new reservation in WAITING.
    InsertReservation(NewReservation),

    /// Move a reservation from one status to another.
    ///
    /// Applied as a compare-and-set: the write only lands if the stored
    /// status still equals `from`.
    SetStatus {
        /// Reservation to update.
        id: ReservationId,
        /// Status observed while planning.
        from: Status,
        /// Target status.
        to: Status,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertReservation(r) => format!(
                "Create reservation of resource {} for actor {} from {} to {}",
                r.resource(),
                r.requester(),
                r.start().to_rfc3339(),
                r.end().to_rfc3339()
            ),
            Self::SetStatus { id, from, to } => {
                format!("Change status of reservation {id} from {from} to {to}")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Approve reservation 4");
    /// assert_eq!(plan.description, "Approve reservation 4");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookit::operations::{OperationPlan, PlanAction};
    /// use bookit::{ReservationId, Status};
    ///
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::SetStatus {
    ///     id: ReservationId::new(4),
    ///     from: Status::Waiting,
    ///     to: Status::Approved,
    /// });
    ///
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
