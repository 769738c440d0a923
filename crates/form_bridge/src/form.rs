use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const TREATMENT_FORM_ID: &str = "treatment-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Text,
    Number,
    Select,
    Textarea,
    Hidden,
    Checkbox,
    Radio,
    Submit,
    Button,
    File,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormControl {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: ControlKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl FormControl {
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn of_kind(kind: ControlKind, name: &str, value: &str) -> Self {
        Self {
            kind,
            ..Self::text(name, value)
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The value this control contributes to form data, if any.
    fn entry(&self, submitter: Option<&str>) -> Option<(&str, &str)> {
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;
        if self.disabled {
            return None;
        }
        let value = match self.kind {
            ControlKind::Checkbox | ControlKind::Radio => {
                if !self.checked {
                    return None;
                }
                if self.value.is_empty() {
                    "on"
                } else {
                    self.value.as_str()
                }
            }
            ControlKind::Submit | ControlKind::Button => {
                if submitter != Some(name) {
                    return None;
                }
                self.value.as_str()
            }
            // A file is not a string; it never reaches the JSON payload.
            ControlKind::File => return None,
            _ => self.value.as_str(),
        };
        Some((name, value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormElement {
    pub id: String,
    #[serde(default)]
    pub controls: Vec<FormControl>,
}

impl FormElement {
    pub fn new(id: &str, controls: Vec<FormControl>) -> Self {
        Self {
            id: id.to_string(),
            controls,
        }
    }

    pub fn treatment(controls: Vec<FormControl>) -> Self {
        Self::new(TREATMENT_FORM_ID, controls)
    }

    /// Walk the controls in tree order and collect the named values.
    pub fn form_data(&self, submitter: Option<&str>) -> FormInputSet {
        let mut set = FormInputSet::new();
        for control in &self.controls {
            if let Some((name, value)) = control.entry(submitter) {
                set.insert(name, value);
            }
        }
        set
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEvent {
    pub form: FormElement,
    #[serde(default)]
    pub submitter: Option<String>,
    #[serde(default, skip_deserializing)]
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: FormElement) -> Self {
        Self {
            form,
            submitter: None,
            default_prevented: false,
        }
    }

    pub fn with_submitter(mut self, name: &str) -> Self {
        self.submitter = Some(name.to_string());
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn form_data(&self) -> FormInputSet {
        self.form.form_data(self.submitter.as_deref())
    }
}

/// Flat name -> value mapping taken from one submission.
///
/// Keys keep the position of their first appearance; a repeated name
/// overwrites the earlier value. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputSet {
    entries: Vec<(String, String)>,
}

impl FormInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (k, v) in pairs {
            set.insert(k, v);
        }
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for FormInputSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
