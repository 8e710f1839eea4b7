//! Custom design request form. Submission is local only: the form is
//! validated field by field and acknowledged in the UI, nothing is sent
//! anywhere.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

pub const BUDGET_RANGES: &[&str] = &[
    "₦10,000 - ₦25,000",
    "₦25,000 - ₦50,000",
    "₦50,000 - ₦100,000",
    "₦100,000+",
    "Open to discussion",
];

pub const TIMELINE_OPTIONS: &[&str] = &["1 week", "2 weeks", "1 month", "2 months", "No rush"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestForm {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub budget: String,
    pub timeline: String,
    pub size: String,
    pub color: String,
}

impl RequestForm {
    /// Checks required fields in display order and reports the first
    /// missing one; size and color are optional.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Please enter a title for your request");
        }
        if self.description.trim().is_empty() {
            return Err("Please provide a description");
        }
        if self.category.is_none() {
            return Err("Please select a category");
        }
        if self.budget.is_empty() {
            return Err("Please select a budget range");
        }
        if self.timeline.is_empty() {
            return Err("Please select a timeline");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RequestForm {
        RequestForm {
            title: "Custom Wedding Dress for December".into(),
            description: "Fitted bodice, flowing skirt, lace details.".into(),
            category: Some(Category::Clothing),
            budget: BUDGET_RANGES[2].into(),
            timeline: TIMELINE_OPTIONS[3].into(),
            size: "M".into(),
            color: "Ivory".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut form = complete_form();
        form.size.clear();
        form.color.clear();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = complete_form();
        form.title = "   ".into();
        assert_eq!(form.validate(), Err("Please enter a title for your request"));

        form = complete_form();
        form.description.clear();
        assert_eq!(form.validate(), Err("Please provide a description"));

        form = complete_form();
        form.category = None;
        assert_eq!(form.validate(), Err("Please select a category"));

        form = complete_form();
        form.budget.clear();
        assert_eq!(form.validate(), Err("Please select a budget range"));

        form = complete_form();
        form.timeline.clear();
        assert_eq!(form.validate(), Err("Please select a timeline"));
    }
}
