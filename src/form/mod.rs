//! Dream Form State
//!
//! Local editable state of the create/edit form, its validation, and the
//! submission workflow.

mod submit;
mod validation;

use std::fmt;

use validator::Validate;

use crate::api::{strip_type_tags, BudgetItemInput, DreamInput};
use crate::models::{BudgetItem, Dream, Image};
use crate::slug::slugify;

use validation::{parse_positive, BudgetItemSchema, DreamSchema, ImageSchema};

pub use submit::{submit_dream, SubmitOutcome, SubmitTarget};
pub use validation::{budget_field, image_field, FormErrors, SUMMARY_MAX_CHARS};

/// Whether the form creates a new dream or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Stable identity of a budget row, assigned when the row is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BudgetItemId(u32);

impl fmt::Display for BudgetItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of an attached image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attached image with its row identity
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraft {
    pub id: ImageId,
    pub image: Image,
}

/// Budget row as typed; numbers stay text until validation
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetItemDraft {
    pub id: BudgetItemId,
    pub description: String,
    pub min: String,
    pub max: String,
}

impl BudgetItemDraft {
    fn blank(id: BudgetItemId) -> Self {
        Self {
            id,
            description: String::new(),
            min: "0".to_string(),
            max: "0".to_string(),
        }
    }

    fn from_item(id: BudgetItemId, item: &BudgetItem) -> Self {
        Self {
            id,
            description: item.description.clone(),
            min: item.min.to_string(),
            max: item.max.map(|m| m.to_string()).unwrap_or_default(),
        }
    }
}

/// Everything the form holds between load and submit
#[derive(Debug, Clone, PartialEq)]
pub struct DreamDraft {
    mode: FormMode,
    pub title: String,
    pub slug: String,
    slug_edited: bool,
    pub summary: String,
    pub description: String,
    pub min_goal: String,
    pub max_goal: String,
    pub images: Vec<ImageDraft>,
    pub budget_items: Vec<BudgetItemDraft>,
    next_row_id: u32,
}

impl DreamDraft {
    /// Empty draft for a new dream
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            slug: String::new(),
            slug_edited: false,
            summary: String::new(),
            description: String::new(),
            min_goal: String::new(),
            max_goal: String::new(),
            images: Vec::new(),
            budget_items: Vec::new(),
            next_row_id: 0,
        }
    }

    /// Draft initialised from a fetched dream
    pub fn from_dream(dream: &Dream, mode: FormMode) -> Self {
        let mut draft = Self {
            mode,
            title: dream.title.clone(),
            slug: dream.slug.clone(),
            slug_edited: false,
            summary: dream.summary.clone().unwrap_or_default(),
            description: dream.description.clone().unwrap_or_default(),
            min_goal: dream.min_goal.map(|g| g.to_string()).unwrap_or_default(),
            max_goal: dream.max_goal.map(|g| g.to_string()).unwrap_or_default(),
            ..Self::create()
        };
        for image in &dream.images {
            draft.add_image(image.clone());
        }
        for item in &dream.budget_items {
            let id = draft.allocate_budget_id();
            draft.budget_items.push(BudgetItemDraft::from_item(id, item));
        }
        draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Title edits re-derive the slug in create mode until the slug is typed in
    pub fn set_title(&mut self, title: String) {
        if self.mode == FormMode::Create && !self.slug_edited {
            self.slug = slugify(&title);
        }
        self.title = title;
    }

    /// Raw slug text as typed
    pub fn set_slug(&mut self, slug: String) {
        self.slug = slug;
        self.slug_edited = true;
    }

    /// Normalise the slug from its own text
    pub fn blur_slug(&mut self) {
        self.slug = slugify(&self.slug);
    }

    // ========================
    // Budget Items
    // ========================

    fn allocate_row_id(&mut self) -> u32 {
        let id = self.next_row_id;
        self.next_row_id += 1;
        id
    }

    fn allocate_budget_id(&mut self) -> BudgetItemId {
        BudgetItemId(self.allocate_row_id())
    }

    /// Append a blank row
    pub fn add_budget_item(&mut self) -> BudgetItemId {
        let id = self.allocate_budget_id();
        self.budget_items.push(BudgetItemDraft::blank(id));
        id
    }

    pub fn remove_budget_item(&mut self, id: BudgetItemId) {
        self.budget_items.retain(|item| item.id != id);
    }

    pub fn update_budget_item(&mut self, id: BudgetItemId, edit: impl FnOnce(&mut BudgetItemDraft)) {
        if let Some(item) = self.budget_items.iter_mut().find(|item| item.id == id) {
            edit(item);
        }
    }

    // ========================
    // Images
    // ========================

    pub fn add_image(&mut self, image: Image) -> ImageId {
        let id = ImageId(self.allocate_row_id());
        self.images.push(ImageDraft { id, image });
        id
    }

    pub fn remove_image(&mut self, id: ImageId) {
        self.images.retain(|draft| draft.id != id);
    }

    /// Attached images in order
    pub fn images(&self) -> Vec<Image> {
        self.images.iter().map(|draft| draft.image.clone()).collect()
    }

    // ========================
    // Validation
    // ========================

    fn schema(&self) -> DreamSchema {
        DreamSchema {
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            min_goal: self.min_goal.clone(),
            max_goal: self.max_goal.clone(),
            images: self
                .images
                .iter()
                .map(|draft| ImageSchema {
                    small: draft.image.small.clone(),
                    large: draft.image.large.clone(),
                })
                .collect(),
            budget_items: self
                .budget_items
                .iter()
                .map(|item| BudgetItemSchema {
                    description: item.description.clone(),
                    min: item.min.clone(),
                    max: item.max.clone(),
                })
                .collect(),
        }
    }

    /// Check every field and build the mutation payload.
    ///
    /// Image type tags are stripped here, so the payload is always
    /// transport-safe.
    pub fn validate(&self) -> Result<DreamInput, FormErrors> {
        let budget_ids: Vec<BudgetItemId> = self.budget_items.iter().map(|item| item.id).collect();
        let image_ids: Vec<ImageId> = self.images.iter().map(|draft| draft.id).collect();
        let mut errors = match self.schema().validate() {
            Ok(()) => FormErrors::default(),
            Err(report) => FormErrors::from_validation(&report, &budget_ids, &image_ids),
        };

        for item in &self.budget_items {
            if let (Some(min), Some(max)) = (parse_positive(&item.min), parse_positive(&item.max)) {
                if max < min {
                    errors.insert(budget_field(item.id, "max"), "Max must be at least min");
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(DreamInput {
            title: self.title.trim().to_string(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            summary: self.summary.trim().to_string(),
            images: strip_type_tags(&self.images()),
            min_goal: parse_positive(&self.min_goal),
            max_goal: parse_positive(&self.max_goal),
            budget_items: self
                .budget_items
                .iter()
                .map(|item| BudgetItemInput {
                    description: item.description.trim().to_string(),
                    min: parse_positive(&item.min).unwrap_or_default(),
                    max: parse_positive(&item.max),
                })
                .collect(),
        })
    }
}
