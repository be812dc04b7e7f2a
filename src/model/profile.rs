use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// A selected or user-created skill tag as sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillPair {
    pub label: String,
    pub value: String,
}

/// One entry of the creatable skill selector.
///
/// Entries typed in by the user rather than picked from the bundled list carry
/// `is_new`. The flag never reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOption {
    pub label: String,
    pub value: String,
    #[serde(rename = "__isNew__", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl SkillOption {
    /// An option the user typed that is not in the bundled list.
    pub fn created(input: &str) -> Self {
        let input = input.trim();
        Self {
            label: input.to_string(),
            value: input.to_string(),
            is_new: true,
        }
    }
}

impl From<&SkillOption> for SkillPair {
    fn from(option: &SkillOption) -> Self {
        Self {
            label: option.label.clone(),
            value: option.value.clone(),
        }
    }
}

/// Free-text inputs of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextField {
    Name,
    Email,
    College,
    Interests,
}

/// Every field of the profile form, used to report what is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    College,
    Interests,
    Skills,
}

impl From<TextField> for FormField {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => FormField::Name,
            TextField::Email => FormField::Email,
            TextField::College => FormField::College,
            TextField::Interests => FormField::Interests,
        }
    }
}

/// Everything the user has entered into the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFormState {
    pub name: String,
    pub email: String,
    pub college: String,
    pub interests: String,
    pub skills: Vec<SkillPair>,
}

impl ProfileFormState {
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::College => &self.college,
            TextField::Interests => &self.interests,
        }
    }

    pub fn set_field(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::College => &mut self.college,
            TextField::Interests => &mut self.interests,
        };
        *slot = value;
    }

    /// Required fields that are still empty, in form order. Email is optional.
    pub fn missing_required(&self) -> Vec<FormField> {
        let mut missing: Vec<FormField> = [TextField::Name, TextField::College, TextField::Interests]
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .map(FormField::from)
            .collect();
        if self.skills.is_empty() {
            missing.push(FormField::Skills);
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The body of `POST /api/users`, frozen at the moment a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    pub college: String,
    pub interests: String,
    pub skills: Vec<SkillPair>,
}

impl ProfilePayload {
    /// The skills list as the JSON array string carried by the `skills` part.
    pub fn skills_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.skills)
    }
}

impl From<&ProfileFormState> for ProfilePayload {
    fn from(state: &ProfileFormState) -> Self {
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            college: state.college.clone(),
            interests: state.interests.clone(),
            skills: state.skills.clone(),
        }
    }
}
