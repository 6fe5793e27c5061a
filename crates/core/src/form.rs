use crate::data::starter_pledges;
use crate::domain::Pledge;
use thiserror::Error;

pub const NAME_MAX_CHARS: usize = 40;
pub const IDEA_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PledgeError {
    #[error("Please fill in both fields.")]
    Validation { name_blank: bool, idea_blank: bool },
}

/// Which of the two form inputs is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PledgeField {
    Name,
    Idea,
}

impl PledgeField {
    pub const fn max_chars(self) -> usize {
        match self {
            Self::Name => NAME_MAX_CHARS,
            Self::Idea => IDEA_MAX_CHARS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Startup / Founder Name",
            Self::Idea => "Your Deep-Tech Commitment",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name or company name",
            Self::Idea => "Describe your innovation or deep-tech idea...",
        }
    }
}

/// What a successful submission asks of the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub pledge: Pledge,
    pub index: usize,
    pub scroll_into_view: bool,
}

/// The pledge form and the session's wall of pledges.
#[derive(Debug, Clone)]
pub struct PledgeForm {
    name: String,
    idea: String,
    error: Option<PledgeError>,
    pledges: Vec<Pledge>,
    last_id: u64,
}

impl PledgeForm {
    pub fn new() -> Self {
        Self::with_pledges(starter_pledges())
    }

    pub fn with_pledges(pledges: Vec<Pledge>) -> Self {
        let last_id = pledges.iter().map(|pledge| pledge.id).max().unwrap_or(0);
        Self {
            name: String::new(),
            idea: String::new(),
            error: None,
            pledges,
            last_id,
        }
    }

    pub fn value(&self, field: PledgeField) -> &str {
        match field {
            PledgeField::Name => &self.name,
            PledgeField::Idea => &self.idea,
        }
    }

    pub const fn error(&self) -> Option<&PledgeError> {
        self.error.as_ref()
    }

    pub fn pledges(&self) -> &[Pledge] {
        &self.pledges
    }

    /// Overwrites one field, clipped to its input limit, and clears any error.
    pub fn update_field(&mut self, field: PledgeField, value: &str) {
        let clipped: String = value.chars().take(field.max_chars()).collect();
        match field {
            PledgeField::Name => self.name = clipped,
            PledgeField::Idea => self.idea = clipped,
        }
        self.error = None;
    }

    pub fn push_char(&mut self, field: PledgeField, ch: char) {
        let mut value = self.value(field).to_string();
        value.push(ch);
        self.update_field(field, &value);
    }

    pub fn pop_char(&mut self, field: PledgeField) {
        let mut value = self.value(field).to_string();
        value.pop();
        self.update_field(field, &value);
    }

    /// Validates the form and appends a new pledge to the wall.
    ///
    /// `now_millis` is the wall-clock creation time; ids stay strictly
    /// increasing even when the clock repeats or goes backwards.
    pub fn submit(&mut self, now_millis: u64) -> Result<Submitted, PledgeError> {
        let name_blank = self.name.trim().is_empty();
        let idea_blank = self.idea.trim().is_empty();
        if name_blank || idea_blank {
            let error = PledgeError::Validation {
                name_blank,
                idea_blank,
            };
            self.error = Some(error.clone());
            return Err(error);
        }

        let id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id = id;

        let pledge = Pledge {
            id,
            name: std::mem::take(&mut self.name),
            idea: std::mem::take(&mut self.idea),
            x: 0.0,
            y: 0.0,
            size: 0.0,
            brightness: 1.0,
        };
        self.pledges.push(pledge.clone());
        self.error = None;

        Ok(Submitted {
            pledge,
            index: self.pledges.len() - 1,
            scroll_into_view: true,
        })
    }
}

impl Default for PledgeForm {
    fn default() -> Self {
        Self::new()
    }
}
