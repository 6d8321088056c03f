use log::{debug, error};

use crate::{
    AdjustmentRepository, AdjustmentState, Catalog, Feedback, FeedbackRepository,
    FeedbackSession, PlanEngine, PlanPayload, PlanRepository, PlanRequest, PlanRow, ReadError,
    RowID, RowSelector, StorageError, WriteError,
};

pub struct Service<'a, R> {
    repository: R,
    engine: PlanEngine<'a>,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoPlan) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<'a, R> Service<'a, R> {
    pub fn new(repository: R, catalog: &'a Catalog) -> Self {
        Self {
            repository,
            engine: PlanEngine::new(catalog),
        }
    }
}

impl<R> Service<'_, R>
where
    R: AdjustmentRepository + PlanRepository + FeedbackRepository,
{
    /// Generate and store a new plan using the stored adjustments.
    ///
    /// Any feedback given on the previous plan is closed.
    pub fn generate_plan(&self, request: &PlanRequest) -> Result<PlanPayload, WriteError> {
        let adjustments = self.get_adjustments()?;
        let plan = self.engine.generate(request, &adjustments);

        log_on_error!(self.repository.write_plan(&plan), WriteError, "store", "plan")?;
        log_on_error!(
            self.repository.write_feedback(&FeedbackSession::new(plan.id)),
            WriteError,
            "reset",
            "feedback"
        )?;

        Ok(plan)
    }

    pub fn get_plan(&self) -> Result<PlanPayload, ReadError> {
        log_on_error!(
            self.repository
                .read_plan()
                .and_then(|plan| plan.ok_or(ReadError::Storage(StorageError::NoPlan))),
            ReadError,
            "get",
            "plan"
        )
    }

    pub fn record_feedback(
        &self,
        id: RowID,
        feedback: Feedback,
    ) -> Result<AdjustmentState, WriteError> {
        let plan = self.get_plan()?;
        let mut adjustments = self.get_adjustments()?;
        let mut session = log_on_error!(
            self.repository.read_feedback(),
            ReadError,
            "get",
            "feedback"
        )?;

        if session.plan_id != Some(plan.id) {
            session = FeedbackSession::new(plan.id);
        }

        if !session.select(&mut adjustments, &plan.rows, id, feedback) {
            return Ok(adjustments);
        }

        log_on_error!(
            self.repository.write_adjustments(&adjustments),
            WriteError,
            "store",
            "adjustments"
        )?;
        log_on_error!(
            self.repository.write_feedback(&session),
            WriteError,
            "store",
            "feedback"
        )?;

        Ok(adjustments)
    }

    /// Swap a row of the stored plan for its confidence alternative.
    ///
    /// Returns the updated row, or `None` if the row cannot be swapped.
    pub fn apply_alternative(&self, id: RowID) -> Result<Option<PlanRow>, WriteError> {
        let mut plan = self.get_plan()?;

        if !plan.apply_alternative(RowSelector::Id(id)) {
            debug!("row {id} has no confidence alternative to apply");
            return Ok(None);
        }

        log_on_error!(self.repository.write_plan(&plan), WriteError, "store", "plan")?;

        Ok(plan.row(id).cloned())
    }

    pub fn get_adjustments(&self) -> Result<AdjustmentState, ReadError> {
        log_on_error!(
            self.repository.read_adjustments(),
            ReadError,
            "get",
            "adjustments"
        )
    }

    pub fn reset_adjustments(&self) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_adjustments(&AdjustmentState::default()),
            WriteError,
            "reset",
            "adjustments"
        )?;
        let session = log_on_error!(
            self.repository.read_feedback(),
            ReadError,
            "get",
            "feedback"
        )?;
        log_on_error!(
            self.repository.write_feedback(&FeedbackSession {
                selections: Default::default(),
                ..session
            }),
            WriteError,
            "reset",
            "feedback"
        )
    }
}
