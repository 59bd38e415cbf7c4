//! Confirmation and text-input dialogs.
//!
//! Destructive actions ask for confirmation and category edits ask for a
//! name. The controller awaits a [`Dialogs`] implementation instead of
//! blocking, so the answer can come from a browser form, a terminal, or a
//! test script.

use std::future::Future;

/// A yes/no question shown before a risky action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    DeleteProduct,
    RejectProduct,
    DeleteCategory,
}

impl Confirmation {
    /// Question text shown to the admin.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::DeleteProduct => "هل أنت متأكد من حذف هذا المنتج؟",
            Self::RejectProduct => "هل أنت متأكد من رفض هذا المنتج؟",
            Self::DeleteCategory => "هل أنت متأكد من حذف هذه الفئة؟",
        }
    }
}

/// A request for a single line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt {
    pub label: &'static str,
    /// Pre-filled value, e.g. the current category name when renaming.
    pub default: Option<String>,
}

impl TextPrompt {
    #[must_use]
    pub const fn new_category() -> Self {
        Self {
            label: "ادخل اسم الفئة الجديدة:",
            default: None,
        }
    }

    #[must_use]
    pub const fn rename_category(current: String) -> Self {
        Self {
            label: "ادخل الاسم الجديد للفئة:",
            default: Some(current),
        }
    }
}

/// Source of answers for confirmation and prompt dialogs.
pub trait Dialogs: Send + Sync {
    /// Ask a yes/no question. `false` means the admin declined.
    fn confirm(&self, confirmation: Confirmation) -> impl Future<Output = bool> + Send;

    /// Ask for a line of text. `None` means the admin cancelled.
    fn prompt(&self, prompt: TextPrompt) -> impl Future<Output = Option<String>> + Send;
}

/// Dialog answers that were collected before the action ran.
///
/// The HTTP host shows its own modal in the browser and posts the answer
/// with the action, so by the time the controller asks, the answer is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetAnswers {
    pub confirmed: bool,
    pub text: Option<String>,
}

impl PresetAnswers {
    #[must_use]
    pub const fn confirmed(confirmed: bool) -> Self {
        Self {
            confirmed,
            text: None,
        }
    }

    #[must_use]
    pub const fn text(text: Option<String>) -> Self {
        Self {
            confirmed: false,
            text,
        }
    }
}

impl Dialogs for PresetAnswers {
    async fn confirm(&self, confirmation: Confirmation) -> bool {
        tracing::debug!(?confirmation, confirmed = self.confirmed, "Confirmation answered");
        self.confirmed
    }

    async fn prompt(&self, _prompt: TextPrompt) -> Option<String> {
        self.text.clone()
    }
}

/// Clears whitespace and rejects empty input, as every category prompt does.
#[must_use]
pub fn trimmed_answer(answer: Option<String>) -> Option<String> {
    answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preset_answers() {
        let yes = PresetAnswers::confirmed(true);
        assert!(yes.confirm(Confirmation::DeleteProduct).await);
        assert_eq!(yes.prompt(TextPrompt::new_category()).await, None);

        let named = PresetAnswers::text(Some("أثاث".to_string()));
        assert!(!named.confirm(Confirmation::DeleteCategory).await);
        assert_eq!(
            named.prompt(TextPrompt::new_category()).await.as_deref(),
            Some("أثاث")
        );
    }

    #[test]
    fn test_trimmed_answer() {
        assert_eq!(trimmed_answer(Some("  كتب ".to_string())).as_deref(), Some("كتب"));
        assert_eq!(trimmed_answer(Some("   ".to_string())), None);
        assert_eq!(trimmed_answer(Some(String::new())), None);
        assert_eq!(trimmed_answer(None), None);
    }
}
