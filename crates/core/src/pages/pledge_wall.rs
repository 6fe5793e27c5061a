use crate::domain::Pledge;
use crate::form::{PledgeError, PledgeField, PledgeForm, Submitted};
use std::fmt;

/// Where keyboard input currently lands on the pledge wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Idea,
    Submit,
    Wall,
}

impl FormFocus {
    pub const ALL: [Self; 4] = [Self::Name, Self::Idea, Self::Submit, Self::Wall];

    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Idea,
            Self::Idea => Self::Submit,
            Self::Submit => Self::Wall,
            Self::Wall => Self::Name,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Wall,
            Self::Idea => Self::Name,
            Self::Submit => Self::Idea,
            Self::Wall => Self::Submit,
        }
    }

    pub const fn field(self) -> Option<PledgeField> {
        match self {
            Self::Name => Some(PledgeField::Name),
            Self::Idea => Some(PledgeField::Idea),
            Self::Submit | Self::Wall => None,
        }
    }
}

impl fmt::Display for FormFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Idea => write!(f, "Idea"),
            Self::Submit => write!(f, "Submit"),
            Self::Wall => write!(f, "Wall"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PledgeWallPage {
    form: PledgeForm,
    focus: FormFocus,
    editing: bool,
    selected: usize,
    modal: Option<usize>,
    scroll_request: Option<usize>,
    wall_offset: usize,
}

impl PledgeWallPage {
    pub fn new() -> Self {
        Self::with_form(PledgeForm::new())
    }

    pub const fn with_form(form: PledgeForm) -> Self {
        Self {
            form,
            focus: FormFocus::Name,
            editing: false,
            selected: 0,
            modal: None,
            scroll_request: None,
            wall_offset: 0,
        }
    }

    pub const fn form(&self) -> &PledgeForm {
        &self.form
    }

    pub fn pledges(&self) -> &[Pledge] {
        self.form.pledges()
    }

    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
        self.editing = false;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Starts text entry; only the two inputs accept it.
    pub fn begin_editing(&mut self) -> bool {
        self.editing = self.focus.field().is_some();
        self.editing
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn type_char(&mut self, ch: char) {
        if let (true, Some(field)) = (self.editing, self.focus.field()) {
            self.form.push_char(field, ch);
        }
    }

    pub fn backspace(&mut self) {
        if let (true, Some(field)) = (self.editing, self.focus.field()) {
            self.form.pop_char(field);
        }
    }

    pub fn update_field(&mut self, field: PledgeField, value: &str) {
        self.form.update_field(field, value);
    }

    /// Submits the form. On success the new pledge is selected and a scroll
    /// request is queued for the wall.
    pub fn submit(&mut self, now_millis: u64) -> Result<Submitted, PledgeError> {
        let submitted = self.form.submit(now_millis)?;
        self.editing = false;
        self.selected = submitted.index;
        if submitted.scroll_into_view {
            self.scroll_request = Some(submitted.index);
        }
        Ok(submitted)
    }

    /// Hands the pending scroll-into-view request to the renderer, once.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }

    /// First wall entry drawn by the renderer.
    pub const fn wall_offset(&self) -> usize {
        self.wall_offset
    }

    /// Moves the wall window for a list showing `visible` entries. A pending
    /// scroll request is pulled into view; otherwise the selection is
    /// followed while the wall has focus, and the window stays put.
    pub fn fit_wall(&mut self, visible: usize) -> usize {
        let visible = visible.max(1);
        let target = self
            .take_scroll_request()
            .or_else(|| (self.focus == FormFocus::Wall).then_some(self.selected));

        if let Some(target) = target {
            if target < self.wall_offset {
                self.wall_offset = target;
            } else if target >= self.wall_offset + visible {
                self.wall_offset = target + 1 - visible;
            }
        }
        self.wall_offset = self
            .wall_offset
            .min(self.pledges().len().saturating_sub(visible));
        self.wall_offset
    }

    pub fn select_next(&mut self) {
        let count = self.pledges().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_last(&mut self) {
        self.selected = self.pledges().len().saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn open_modal(&mut self) {
        if self.selected < self.pledges().len() {
            self.modal = Some(self.selected);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub const fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal_pledge(&self) -> Option<&Pledge> {
        self.modal.and_then(|index| self.pledges().get(index))
    }

    /// Leaves the page: drops text entry and any open modal.
    pub fn teardown(&mut self) {
        self.editing = false;
        self.modal = None;
    }
}

impl Default for PledgeWallPage {
    fn default() -> Self {
        Self::new()
    }
}
