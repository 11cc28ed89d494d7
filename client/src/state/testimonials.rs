//! Visitor testimonials and the share-your-experience form.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Role shown under names of visitor-submitted reviews.
pub const VISITOR_ROLE: &str = "Verified Visitor";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub image_url: String,
}

impl Testimonial {
    #[must_use]
    pub fn new(name: &str, role: &str, content: &str, rating: u8, image_url: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            role: role.to_owned(),
            content: content.to_owned(),
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            image_url: image_url.to_owned(),
        }
    }
}

/// Generated initials avatar for a visitor name.
#[must_use]
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&color=fff",
        urlencoding::encode(name)
    )
}

/// Unsubmitted form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialDraft {
    pub name: String,
    pub content: String,
    pub rating: u8,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self { name: String::new(), content: String::new(), rating: MAX_RATING }
    }
}

/// Displayed reviews, newest first, plus the form state.
#[derive(Clone, Debug)]
pub struct TestimonialsState {
    pub entries: Vec<Testimonial>,
    pub draft: TestimonialDraft,
    pub form_open: bool,
}

impl Default for TestimonialsState {
    fn default() -> Self {
        Self {
            entries: crate::content::seed_testimonials(),
            draft: TestimonialDraft::default(),
            form_open: false,
        }
    }
}

impl TestimonialsState {
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    /// Prepend a review built from `draft`. Blank name or content is
    /// rejected with `None`; the rating is clamped into range.
    pub fn submit(&mut self, draft: &TestimonialDraft) -> Option<Uuid> {
        let name = draft.name.trim();
        let content = draft.content.trim();
        if name.is_empty() || content.is_empty() {
            return None;
        }
        let entry = Testimonial::new(name, VISITOR_ROLE, content, draft.rating, &avatar_url(name));
        let id = entry.id;
        self.entries.insert(0, entry);
        Some(id)
    }

    /// Submit the current draft; on success the form resets and closes.
    pub fn submit_draft(&mut self) -> Option<Uuid> {
        let draft = self.draft.clone();
        let id = self.submit(&draft)?;
        self.draft = TestimonialDraft::default();
        self.form_open = false;
        Some(id)
    }
}
