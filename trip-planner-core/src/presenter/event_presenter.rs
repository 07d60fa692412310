//! Presenter of a single trip event

use super::cancellation::CancellationController;
use super::classifier::classify;
use super::representation::{
    ContainerId, EditStatus, Mode, NodeId, NodeRef, PointForm, PointView, ReferenceData,
};
use crate::error::{CoreError, CoreResult};
use crate::traits::RenderTarget;
use crate::types::{ChangeSource, EventId, PendingChange, SortType, TripEvent, UpdateScope, UserAction};

/// Everything a presenter touches outside itself
///
/// Owned by the list and lent to one presenter call at a time.
pub struct PresenterEnv<T: RenderTarget> {
    pub target: T,
    pub cancellation: CancellationController,
    pub reference: ReferenceData,
    pub container: ContainerId,
}

impl<T: RenderTarget> PresenterEnv<T> {
    #[must_use]
    pub fn new(target: T, reference: ReferenceData) -> Self {
        Self {
            target,
            cancellation: CancellationController::new(),
            reference,
            container: ContainerId::new(),
        }
    }
}

/// View/edit pair for one event
pub struct EventPresenter {
    event: TripEvent,
    mode: Mode,
    view: PointView,
    form: PointForm,
}

impl EventPresenter {
    /// First binding: build both representations and attach the view
    pub fn mount<T: RenderTarget>(event: TripEvent, env: &mut PresenterEnv<T>) -> Self {
        let view = PointView::build(&event, &env.reference);
        let form = PointForm::build(&event);
        env.target.attach(NodeRef::View(&view), env.container);

        Self {
            event,
            mode: Mode::View,
            view,
            form,
        }
    }

    /// Rebind to a new value of the same event.
    ///
    /// Fresh representations replace whichever one is shown. The mode is kept,
    /// including a busy status: a form waiting for the store stays locked.
    pub fn init<T: RenderTarget>(&mut self, event: TripEvent, env: &mut PresenterEnv<T>) {
        debug_assert_eq!(self.event.id, event.id, "event id must not change");

        let view = PointView::build(&event, &env.reference);
        let form = PointForm::build(&event);

        match self.mode {
            Mode::View => env.target.replace(NodeRef::View(&view), self.view.node()),
            Mode::Edit(status) => {
                env.target.replace(NodeRef::Edit(&form, status), self.form.node());
            }
        }

        self.event = event;
        self.view = view;
        self.form = form;
    }

    /// Open the edit form and take cancellation ownership.
    ///
    /// Returns `false` when already editing. Siblings are reset by the list.
    pub fn switch_to_edit<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) -> bool {
        if self.mode.is_edit() {
            return false;
        }

        env.target
            .replace(NodeRef::Edit(&self.form, EditStatus::Idle), self.view.node());
        env.cancellation.register(self.event.id.clone());
        self.mode = Mode::Edit(EditStatus::Idle);
        log::debug!("Event {} switched to edit", self.event.id);
        true
    }

    /// Close the edit form, dropping unsaved input. No-op in view mode.
    pub fn reset_view<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) {
        if !self.mode.is_edit() {
            return;
        }

        self.form.reset();
        env.target.replace(NodeRef::View(&self.view), self.form.node());
        env.cancellation.unregister(&self.event.id);
        self.mode = Mode::View;
        log::debug!("Event {} switched to view", self.event.id);
    }

    pub fn set_saving<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) {
        self.set_busy(EditStatus::Saving, env);
    }

    pub fn set_deleting<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) {
        self.set_busy(EditStatus::Deleting, env);
    }

    fn set_busy<T: RenderTarget>(&mut self, status: EditStatus, env: &mut PresenterEnv<T>) {
        if let Mode::Edit(_) = self.mode {
            self.mode = Mode::Edit(status);
            env.target.update(NodeRef::Edit(&self.form, status));
        }
    }

    /// A pending request was rejected.
    ///
    /// In view mode the row shakes. In edit mode the form shakes and stays
    /// locked until [`finish_aborting`](Self::finish_aborting); the draft is kept.
    pub fn set_aborting<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) {
        match self.mode {
            Mode::View => env.target.shake(self.view.node()),
            Mode::Edit(_) => {
                self.mode = Mode::Edit(EditStatus::Aborting);
                env.target
                    .update(NodeRef::Edit(&self.form, EditStatus::Aborting));
                env.target.shake(self.form.node());
            }
        }
    }

    /// Shake animation completed: unlock the form
    pub fn finish_aborting<T: RenderTarget>(&mut self, env: &mut PresenterEnv<T>) {
        if self.mode == Mode::Edit(EditStatus::Aborting) {
            self.mode = Mode::Edit(EditStatus::Idle);
            env.target.update(NodeRef::Edit(&self.form, EditStatus::Idle));
        }
    }

    /// Detach both representations and release cancellation ownership
    pub fn destroy<T: RenderTarget>(self, env: &mut PresenterEnv<T>) {
        env.target.detach(self.view.node());
        env.target.detach(self.form.node());
        env.cancellation.unregister(&self.event.id);
    }

    /// Apply `edit` to the open form's draft
    pub fn edit_form<T, R, F>(&mut self, env: &mut PresenterEnv<T>, edit: F) -> CoreResult<R>
    where
        T: RenderTarget,
        F: FnOnce(&mut PointForm, &ReferenceData) -> CoreResult<R>,
    {
        match self.mode {
            Mode::Edit(EditStatus::Idle) => {
                let result = edit(&mut self.form, &env.reference);
                env.target
                    .update(NodeRef::Edit(&self.form, EditStatus::Idle));
                result
            }
            Mode::Edit(status) => Err(CoreError::InvalidState(format!(
                "form of {} is locked ({status:?})",
                self.event.id
            ))),
            Mode::View => Err(CoreError::InvalidState(format!(
                "event {} is not being edited",
                self.event.id
            ))),
        }
    }

    /// Validate and classify the form for submission
    pub fn prepare_submit(
        &self,
        reference: &ReferenceData,
        sort: SortType,
    ) -> CoreResult<PendingChange> {
        if self.mode != Mode::Edit(EditStatus::Idle) {
            return Err(CoreError::InvalidState(format!(
                "event {} has no interactive form to submit",
                self.event.id
            )));
        }
        self.form.validate(reference)?;

        let draft = self.form.draft().clone();
        Ok(PendingChange {
            origin: self.event.id.clone(),
            action: UserAction::Update,
            scope: classify(&self.event, &draft, sort),
            event: draft,
            source: ChangeSource::Form,
        })
    }

    /// Delete request for the bound event
    pub fn prepare_delete(&self) -> CoreResult<PendingChange> {
        if matches!(self.mode, Mode::Edit(status) if status.is_disabled()) {
            return Err(CoreError::InvalidState(format!(
                "event {} already has a request in flight",
                self.event.id
            )));
        }
        Ok(PendingChange {
            origin: self.event.id.clone(),
            action: UserAction::Delete,
            event: self.event.clone(),
            scope: UpdateScope::Major,
            source: ChangeSource::Delete,
        })
    }

    /// Favorite toggle; always a patch, never classified
    pub fn prepare_favorite_toggle(&self) -> CoreResult<PendingChange> {
        if matches!(self.mode, Mode::Edit(status) if status.is_disabled()) {
            return Err(CoreError::InvalidState(format!(
                "event {} already has a request in flight",
                self.event.id
            )));
        }
        Ok(PendingChange {
            origin: self.event.id.clone(),
            action: UserAction::Update,
            event: self.event.with_favorite_toggled(),
            scope: UpdateScope::Patch,
            source: ChangeSource::Favorite,
        })
    }

    #[must_use]
    pub fn id(&self) -> &EventId {
        &self.event.id
    }

    #[must_use]
    pub fn event(&self) -> &TripEvent {
        &self.event
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn view(&self) -> &PointView {
        &self.view
    }

    #[must_use]
    pub fn form(&self) -> &PointForm {
        &self.form
    }

    /// Node currently shown for this presenter
    #[must_use]
    pub fn visible_node(&self) -> NodeId {
        match self.mode {
            Mode::View => self.view.node(),
            Mode::Edit(_) => self.form.node(),
        }
    }
}
