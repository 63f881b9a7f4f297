//! Confirmation form state and the checks it runs before anything is stored.

use crate::error::ValidationError;
use crate::models::NewGuest;

/// What the visitor has typed into the confirmation form so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestForm {
    pub name: String,
    pub has_companions: bool,
    pub companions: Vec<String>,
}

impl Default for GuestForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            has_companions: false,
            companions: vec![String::new()],
        }
    }
}

impl GuestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Toggling the flag always starts the companion list over.
    pub fn set_has_companions(&mut self, has_companions: bool) {
        self.has_companions = has_companions;
        self.companions = if has_companions {
            vec![String::new()]
        } else {
            Vec::new()
        };
    }

    pub fn set_companion(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.companions.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_companion_field(&mut self) {
        self.companions.push(String::new());
    }

    /// The last remaining field cannot be removed.
    pub fn remove_companion_field(&mut self, index: usize) {
        if self.companions.len() > 1 && index < self.companions.len() {
            self.companions.remove(index);
        }
    }

    /// Validates the form and produces the input for the access layer.
    pub fn submit(&self) -> Result<NewGuest, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }

        let companions: Vec<String> = if self.has_companions {
            self.companions
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        if self.has_companions && companions.is_empty() {
            return Err(ValidationError::NoCompanions);
        }

        Ok(NewGuest {
            name: name.to_string(),
            has_companions: self.has_companions,
            companions: if companions.is_empty() {
                None
            } else {
                Some(companions)
            },
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
