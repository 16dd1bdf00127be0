//! State behind the workouts admin screen.
//!
//! Every action talks to the server first and only touches local state
//! once the server has confirmed. Failures are logged and leave the page
//! as it was.

use workouts_core::ordering::{next_sort_order, plan_swap, sort_by_order, Direction, SwapPlan};
use workouts_core::types::DbId;

use crate::client::{ClientError, WorkoutsGateway};
use crate::form::{is_valid_form, FieldErrors, Form};
use crate::model::{Workout, WorkoutPatch};

/// Result of a page action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change and local state was updated.
    Applied,
    /// Nothing to do: gate closed, no neighbour, or unknown row.
    Skipped,
    /// The server call failed; local state is unchanged.
    Failed,
}

/// How a move is written to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwapStrategy {
    /// Two concurrent `PUT {sortOrder}` requests, one per row.
    #[default]
    PairedUpdates,
    /// A single `POST /api/workouts/reorder` carrying both moves.
    Transactional,
}

pub struct WorkoutsPage<G> {
    gateway: G,
    strategy: SwapStrategy,
    workouts: Vec<Workout>,
    loading: bool,
    editing_id: Option<DbId>,
    draft: Form,
    draft_errors: FieldErrors,
    new_workout: Form,
    new_errors: FieldErrors,
}

impl<G: WorkoutsGateway> WorkoutsPage<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            strategy: SwapStrategy::default(),
            workouts: Vec::new(),
            loading: true,
            editing_id: None,
            draft: Form::default(),
            draft_errors: FieldErrors::default(),
            new_workout: Form::blank(),
            new_errors: FieldErrors::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SwapStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing_id(&self) -> Option<DbId> {
        self.editing_id
    }

    pub fn draft(&self) -> &Form {
        &self.draft
    }

    pub fn draft_errors(&self) -> &FieldErrors {
        &self.draft_errors
    }

    pub fn new_workout(&self) -> &Form {
        &self.new_workout
    }

    pub fn new_errors(&self) -> &FieldErrors {
        &self.new_errors
    }

    /// Fetch the list and sort it by `sortOrder`.
    pub async fn load(&mut self) -> ActionOutcome {
        let result = self.gateway.list().await;
        self.loading = false;

        match result {
            Ok(mut workouts) => {
                sort_by_order(&mut workouts);
                tracing::debug!(count = workouts.len(), "Workouts loaded");
                self.workouts = workouts;
                ActionOutcome::Applied
            }
            Err(e) => failed("load workouts", &e),
        }
    }

    // -- creation form --

    pub fn change_new_field(&mut self, key: &str, value: impl Into<String>) {
        self.new_workout.set_text(key, value);
        self.new_errors.clear(key);
    }

    pub fn blur_new_field(&mut self, key: &str) {
        self.new_errors.blur(&self.new_workout, key);
    }

    pub fn can_create(&self) -> bool {
        is_valid_form(&self.new_workout, &self.new_errors)
    }

    /// Create a row at the end of the list and reset the form.
    pub async fn create(&mut self) -> ActionOutcome {
        if !self.can_create() {
            return ActionOutcome::Skipped;
        }

        let sort_order = next_sort_order(self.workouts.iter().map(|w| w.sort_order));
        let input = self.new_workout.to_new_workout(sort_order);

        match self.gateway.create(&input).await {
            Ok(created) => {
                tracing::info!(id = created.id, "Workout created");
                self.workouts.push(created);
                self.new_workout = Form::blank();
                self.new_errors.reset();
                ActionOutcome::Applied
            }
            Err(e) => failed("create workout", &e),
        }
    }

    // -- edit mode --

    /// Enter edit mode for `id`, replacing any edit already in progress.
    pub fn begin_edit(&mut self, id: DbId) -> ActionOutcome {
        let Some(workout) = self.workouts.iter().find(|w| w.id == id) else {
            return ActionOutcome::Skipped;
        };
        self.draft = Form::from_workout(workout);
        self.draft_errors.reset();
        self.editing_id = Some(id);
        ActionOutcome::Applied
    }

    pub fn change_edit_field(&mut self, key: &str, value: impl Into<String>) {
        if self.editing_id.is_none() {
            return;
        }
        self.draft.set_text(key, value);
        self.draft_errors.clear(key);
    }

    pub fn blur_edit_field(&mut self, key: &str) {
        if self.editing_id.is_none() {
            return;
        }
        self.draft_errors.blur(&self.draft, key);
    }

    pub fn can_save(&self) -> bool {
        self.editing_id.is_some() && is_valid_form(&self.draft, &self.draft_errors)
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.draft = Form::default();
        self.draft_errors.reset();
    }

    /// Write the draft and adopt the server's copy of the row.
    pub async fn save_edit(&mut self) -> ActionOutcome {
        let Some(id) = self.editing_id else {
            return ActionOutcome::Skipped;
        };
        if !self.can_save() {
            return ActionOutcome::Skipped;
        }

        let patch = self.draft.to_patch();
        match self.gateway.update(id, &patch).await {
            Ok(updated) => {
                tracing::info!(id, "Workout updated");
                if let Some(slot) = self.workouts.iter_mut().find(|w| w.id == id) {
                    *slot = updated;
                }
                self.cancel_edit();
                ActionOutcome::Applied
            }
            Err(e) => failed("update workout", &e),
        }
    }

    pub async fn delete(&mut self, id: DbId) -> ActionOutcome {
        match self.gateway.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Workout deleted");
                self.workouts.retain(|w| w.id != id);
                if self.editing_id == Some(id) {
                    self.cancel_edit();
                }
                ActionOutcome::Applied
            }
            Err(e) => failed("delete workout", &e),
        }
    }

    // -- reordering --

    /// Swap `id` with its neighbour in `direction`.
    ///
    /// The first row cannot move up and the last row cannot move down.
    pub async fn move_workout(&mut self, id: DbId, direction: Direction) -> ActionOutcome {
        let Some(plan) = plan_swap(&self.workouts, id, direction) else {
            return ActionOutcome::Skipped;
        };

        let written = match self.strategy {
            SwapStrategy::PairedUpdates => self.write_paired(&plan).await,
            SwapStrategy::Transactional => self.write_transactional(&plan).await,
        };

        match written {
            Ok((moved, sibling)) => {
                tracing::info!(id, ?direction, sibling = sibling.id, "Workout moved");
                // Keep an open draft's sortOrder in step with storage.
                if let Some(editing) = self.editing_id {
                    if let Some(row) = [&moved, &sibling].into_iter().find(|w| w.id == editing) {
                        self.draft.set_sort_order(row.sort_order);
                    }
                }
                self.workouts[plan.sibling_index] = moved;
                self.workouts[plan.index] = sibling;
                ActionOutcome::Applied
            }
            Err(e) => failed("move workout", &e),
        }
    }

    async fn write_paired(&self, plan: &SwapPlan) -> Result<(Workout, Workout), ClientError> {
        let [moved, sibling] = plan.moves;
        let moved_patch = WorkoutPatch::sort_order(moved.sort_order);
        let sibling_patch = WorkoutPatch::sort_order(sibling.sort_order);

        let (moved, sibling) = tokio::join!(
            self.gateway.update(moved.id, &moved_patch),
            self.gateway.update(sibling.id, &sibling_patch),
        );
        Ok((moved?, sibling?))
    }

    async fn write_transactional(
        &self,
        plan: &SwapPlan,
    ) -> Result<(Workout, Workout), ClientError> {
        let mut rows = self.gateway.reorder(&plan.moves).await?;
        let [moved, sibling] = plan.moves;
        let moved = take_row(&mut rows, moved.id)?;
        let sibling = take_row(&mut rows, sibling.id)?;
        Ok((moved, sibling))
    }
}

fn take_row(rows: &mut Vec<Workout>, id: DbId) -> Result<Workout, ClientError> {
    let index = rows.iter().position(|w| w.id == id).ok_or_else(|| {
        ClientError::UnexpectedResponse(format!("reorder response is missing workout {id}"))
    })?;
    Ok(rows.swap_remove(index))
}

fn failed(action: &str, error: &ClientError) -> ActionOutcome {
    tracing::warn!(error = %error, "Failed to {action}");
    ActionOutcome::Failed
}
