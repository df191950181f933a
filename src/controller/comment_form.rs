use crate::http::CommentSubmission;

/// Composition state of the comment form, owned by the comments panel.
#[derive(Debug, Clone, Default)]
pub struct CommentFormState {
    pub text: String,
    pub anonymous: bool,
    pub nickname: String,
    pub password: String,
    pub secret: bool,
    pub thumbnail_image: Option<String>,
    submitting: bool,
}

const LOCKED_ICON: &str = "🔒";
const UNLOCKED_ICON: &str = "🔓";

fn valid_identity_field(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

impl CommentFormState {
    /// Client-side shape check. Only the anonymous identity is validated
    /// here; for a logged-in author the server is the authority.
    pub fn validate(&self) -> bool {
        if self.anonymous {
            valid_identity_field(&self.nickname) && valid_identity_field(&self.password)
        } else {
            true
        }
    }

    pub fn text_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn toggle_lock(&mut self) {
        self.secret = !self.secret;
    }

    pub fn lock_icon(&self) -> &'static str {
        if self.secret { LOCKED_ICON } else { UNLOCKED_ICON }
    }

    pub fn attach_image(&mut self, url: String) {
        self.thumbnail_image = Some(url);
    }

    pub fn remove_image(&mut self) {
        self.thumbnail_image = None;
    }

    /// Submit guard: a second submit while one is in flight is ignored.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Server rejected or transport failed: keep the composed form.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Accepted: the form returns to its idle state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submission(&self, post_id: u64, blog_id: u64) -> CommentSubmission {
        CommentSubmission {
            post_id,
            blog_id,
            contents: self.text.clone(),
            is_anonymous: self.anonymous,
            nickname: self.nickname.clone(),
            password: self.password.clone(),
            is_secret: self.secret,
            thumbnail_image: self.thumbnail_image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous_form(nickname: &str, password: &str) -> CommentFormState {
        CommentFormState {
            anonymous: true,
            nickname: nickname.to_string(),
            password: password.to_string(),
            ..CommentFormState::default()
        }
    }

    #[test]
    fn anonymous_requires_both_identity_fields() {
        assert!(!anonymous_form("", "pw").validate());
        assert!(!anonymous_form("john", "").validate());
        assert!(anonymous_form("john", "pw").validate());
    }

    #[test]
    fn whitespace_in_identity_fields_fails() {
        assert!(!anonymous_form("john doe", "pw").validate());
        assert!(!anonymous_form("john", "p w").validate());
        assert!(!anonymous_form("john\t", "pw").validate());
    }

    #[test]
    fn authenticated_mode_skips_client_validation() {
        let form = CommentFormState::default();
        assert!(form.validate());
    }

    #[test]
    fn lock_toggle_flips_flag_and_icon() {
        let mut form = CommentFormState::default();
        let unlocked = form.lock_icon();
        assert!(!unlocked.is_empty());
        form.toggle_lock();
        assert!(form.secret);
        assert!(!form.lock_icon().is_empty());
        assert_ne!(form.lock_icon(), unlocked);
        form.toggle_lock();
        assert!(!form.secret);
        assert_eq!(form.lock_icon(), unlocked);
    }

    #[test]
    fn double_submit_is_guarded_until_resolution() {
        let mut form = CommentFormState::default();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());

        form.submit_failed();
        assert!(form.begin_submit());
    }

    #[test]
    fn reset_restores_idle_state() {
        let mut form = anonymous_form("john", "pw");
        form.text = "hello".to_string();
        form.secret = true;
        form.attach_image("https://cdn/i.png".to_string());
        assert!(form.begin_submit());

        form.reset();
        assert!(form.text.is_empty());
        assert!(!form.anonymous);
        assert!(!form.secret);
        assert!(form.thumbnail_image.is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.text_count(), 0);
    }

    #[test]
    fn submission_carries_the_composed_fields() {
        let mut form = anonymous_form("john", "pw");
        form.text = "nice post".to_string();
        form.secret = true;
        form.attach_image("https://cdn/i.png".to_string());

        let submission = form.submission(7, 3);
        assert_eq!(submission.post_id, 7);
        assert_eq!(submission.blog_id, 3);
        assert_eq!(submission.contents, "nice post");
        assert!(submission.is_anonymous);
        assert!(submission.is_secret);
        assert_eq!(submission.thumbnail_image.as_deref(), Some("https://cdn/i.png"));
    }

    #[test]
    fn failed_submit_keeps_the_composed_form() {
        let mut form = anonymous_form("john", "pw");
        form.text = "hello".to_string();
        assert!(form.begin_submit());
        form.submit_failed();
        assert_eq!(form.text, "hello");
        assert_eq!(form.nickname, "john");
    }
}
