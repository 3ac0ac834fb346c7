use crate::error::ValidationError;
use crate::models::StaffType;

/// Registered staff types in insertion order. Ids are never reused within a
/// session since types are never removed.
#[derive(Debug, Default, Clone)]
pub struct StaffTypeRegistry {
    types: Vec<StaffType>,
}

impl StaffTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[StaffType] {
        &self.types
    }

    pub fn get(&self, id: i64) -> Option<&StaffType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn add(&mut self, title: &str, code: &str) -> Result<StaffType, ValidationError> {
        let (title, code) = self.validate(None, title, code)?;

        let id = self.types.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let staff_type = StaffType { id, title, code };
        self.types.push(staff_type.clone());

        Ok(staff_type)
    }

    pub fn update(&mut self, id: i64, title: &str, code: &str) -> Result<StaffType, ValidationError> {
        if self.get(id).is_none() {
            return Err(ValidationError::NotFound(id));
        }
        let (title, code) = self.validate(Some(id), title, code)?;

        let entry = self
            .types
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ValidationError::NotFound(id))?;
        entry.title = title;
        entry.code = code;

        Ok(entry.clone())
    }

    /// Returns the normalized (title, code) pair or the first rule it breaks.
    fn validate(
        &self,
        editing: Option<i64>,
        title: &str,
        code: &str,
    ) -> Result<(String, String), ValidationError> {
        let title = title.trim();
        let code = code.trim();

        if title.is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if code.is_empty() {
            return Err(ValidationError::MissingField("Code"));
        }
        if !(2..=4).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::format(
                "Code must be 2-4 letters or digits",
            ));
        }

        let is_duplicate = self.types.iter().any(|t| {
            Some(t.id) != editing
                && (t.code.eq_ignore_ascii_case(code) || t.title.to_lowercase() == title.to_lowercase())
        });
        if is_duplicate {
            return Err(ValidationError::duplicate(
                "This staff type or code already exists",
            ));
        }

        Ok((title.to_string(), code.to_ascii_uppercase()))
    }
}
