//! Per-block drain of the deferred action FIFO.

use agora_exec::StateScope;
use agora_store::{ActionStore, KvState};
use agora_types::{Address, BlockContext, Event, GovParams};

use crate::action::{DeferredAction, SlashEvent, UnjailRequest};
use crate::error::ActionError;
use crate::validator::{ValidatorError, ValidatorKeeper};

/// Processes every queued action once per block, each in its own scope.
pub struct ActionProcessor<'a> {
    actions: &'a dyn ActionStore,
    validators: &'a dyn ValidatorKeeper,
}

impl<'a> ActionProcessor<'a> {
    pub fn new(actions: &'a dyn ActionStore, validators: &'a dyn ValidatorKeeper) -> Self {
        Self {
            actions,
            validators,
        }
    }

    /// Drain the FIFO in sequence order.
    ///
    /// Each action executes inside an isolated scope: success merges the
    /// scope's writes and events into `app`/`block_events`; failure discards
    /// the scope and is only logged. The entry is deleted regardless of
    /// outcome, so an action executes at most once and is never redelivered.
    pub fn execute_queued(
        &self,
        app: &dyn KvState,
        params: &GovParams,
        ctx: &BlockContext,
        block_events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        for (seq, data) in self.actions.iter_actions()? {
            match DeferredAction::from_bytes(&data) {
                Ok(action) => {
                    let mut scope = StateScope::new(app);
                    let result = match &action {
                        DeferredAction::Unjail(request) => self.execute_unjail(&mut scope, request),
                        DeferredAction::Slash(event) => {
                            self.execute_slash(&mut scope, event, params, ctx)
                        }
                    };
                    match result {
                        Ok(()) => scope.commit(block_events)?,
                        Err(err) => {
                            tracing::warn!(
                                seq,
                                action = action.tag(),
                                error = %err,
                                "deferred action failed; dropped"
                            );
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(seq, error = %err, "undecodable deferred action; dropped");
                }
            }
            // Dequeue the processed entry no matter how it went.
            self.actions.delete_action(seq)?;
        }
        Ok(())
    }

    /// Validate the raw address, then release the validator.
    fn execute_unjail(
        &self,
        scope: &mut StateScope<'_>,
        request: &UnjailRequest,
    ) -> Result<(), ActionError> {
        let validator = Address::parse(&request.validator_addr)?;
        self.validators.unjail(scope, &validator)?;

        scope.emit(
            Event::new("message")
                .attr("module", "validators")
                .attr("sender", validator.to_string()),
        );
        Ok(())
    }

    /// Apply a recorded slash against the validator set as it stood when
    /// the infraction's update was scheduled.
    fn execute_slash(
        &self,
        scope: &mut StateScope<'_>,
        event: &SlashEvent,
        params: &GovParams,
        ctx: &BlockContext,
    ) -> Result<(), ActionError> {
        if !self.validators.contains(scope, &event.validator)? {
            return Err(ActionError::Validator(ValidatorError::UnknownValidator(
                event.validator.to_string(),
            )));
        }
        let distribution_height = ctx
            .height
            .saturating_sub(params.validator_update_delay)
            .saturating_sub(1);
        self.validators
            .slash(scope, &event.validator, distribution_height, event.fraction_bps)?;
        Ok(())
    }
}
