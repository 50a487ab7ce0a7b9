use crate::shared::localized_text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Secondary backend identifier, sent either as a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RrrId {
    Number(i64),
    Float(f64),
    Text(String),
}

/// Selectable named value of a facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrr_id: Option<RrrId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LocalizedText>,
}

impl FilterOption {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            rrr_id: None,
            name: name.into(),
            languages: None,
        }
    }

    pub fn with_languages(mut self, languages: impl Into<LocalizedText>) -> Self {
        self.languages = Some(languages.into());
        self
    }
}

/// Узел дерева категорий запчастей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub rrr_id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: String,
    /// Depth from the root list, roots are level 0
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LocalizedText>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            rrr_id: String::new(),
            name: name.into(),
            parent_id: String::new(),
            level: 0,
            languages: None,
            subcategories: Vec::new(),
        }
    }

    /// Attach children, fixing their `parent_id` and `level`
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.subcategories = children;
        self.relevel(self.level);
        self
    }

    fn relevel(&mut self, level: u32) {
        self.level = level;
        let parent_id = self.id.to_string();
        for child in &mut self.subcategories {
            child.parent_id = parent_id.clone();
            child.relevel(level + 1);
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }
}

/// Марка автомобиля со вложенными моделями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LocalizedText>,
    #[serde(default)]
    pub models: Vec<FilterOption>,
}

impl Brand {
    pub fn new(id: i64, name: impl Into<String>, models: Vec<FilterOption>) -> Self {
        Self {
            id,
            name: name.into(),
            languages: None,
            models,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarFilters {
    #[serde(default)]
    pub brands: Vec<Brand>,
    /// Models the backend listed flat without a matching brand
    #[serde(default)]
    pub models: Vec<FilterOption>,
    #[serde(default)]
    pub body_types: Vec<FilterOption>,
    #[serde(default)]
    pub fuel_types: Vec<FilterOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartFilters {
    #[serde(default)]
    pub qualities: Vec<FilterOption>,
    #[serde(default)]
    pub statuses: Vec<FilterOption>,
    #[serde(default)]
    pub positions: Vec<FilterOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelFilters {
    #[serde(default)]
    pub drives: Vec<FilterOption>,
    #[serde(default)]
    pub fixing_points: Vec<FilterOption>,
    #[serde(default)]
    pub spacings: Vec<FilterOption>,
    #[serde(default)]
    pub center_bores: Vec<FilterOption>,
    #[serde(default)]
    pub widths: Vec<FilterOption>,
    #[serde(default)]
    pub heights: Vec<FilterOption>,
    #[serde(default)]
    pub tread_depths: Vec<FilterOption>,
    #[serde(default)]
    pub diameters: Vec<FilterOption>,
}

/// Canonical filter catalog. Fetched once per session and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendFilters {
    #[serde(default)]
    pub car: CarFilters,
    #[serde(default)]
    pub parts: PartFilters,
    #[serde(default)]
    pub wheels: WheelFilters,
    #[serde(default)]
    pub categories: Vec<Category>,
}
