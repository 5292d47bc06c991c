use contracts::domain::a001_course_content::aggregate::{ContentKind, ContentRoute};
use contracts::domain::a001_course_content::requests::{
    ChangeDriveLinkRequest, CreateContentRequest,
};
use contracts::shared::api::{ApiMessage, GENERIC_ERROR_MESSAGE};

use crate::shared::toast::ToastMessage;

const CONTENT_ADDED: &str = "Content added";
const LINK_UPDATED: &str = "Drive link updated";

/// Field that receives the URL of the next finished upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Thumbnail,
    Video,
}

impl UploadTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadTarget::Thumbnail => "imageUrl",
            UploadTarget::Video => "videoUrl",
        }
    }
}

/// Unsaved content entered by the admin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub kind: ContentKind,
    pub title: String,
    pub thumbnail: String,
    pub video_url: String,
    pub pdf_url: String,
}

impl ContentDraft {
    /// Clears the editable fields; the selected kind stays
    fn reset_fields(&mut self) {
        self.title.clear();
        self.thumbnail.clear();
        self.video_url.clear();
        self.pdf_url.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub gdlink: String,
}

/// Where the form is mounted, as given by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    pub course_id: String,
    pub parent_content_id: Option<String>,
    pub course_title: Option<String>,
    pub route: ContentRoute,
    /// Current drive link; a non-blank value switches the form to link editing
    pub existing_link: Option<String>,
}

impl FormContext {
    pub fn is_link_mode(&self) -> bool {
        self.existing_link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty())
    }
}

/// Request built from the form on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    ChangeDriveLink(ChangeDriveLinkRequest),
    CreateContent(CreateContentRequest),
}

/// HTTP status plus decoded `{ message }` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ApiMessage,
}

impl ApiReply {
    /// Only 200 and 201 count as success
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    LinkChanged(String),
    ContentCreated(String),
    Failed(String),
}

impl SubmitOutcome {
    /// Reads the server answer (or transport error) of a submit
    pub fn from_reply(link_mode: bool, reply: Result<ApiReply, String>) -> Self {
        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("Add content request failed: {}", e);
                return SubmitOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string());
            }
        };

        if !reply.is_success() {
            log::warn!("Add content rejected with HTTP {}", reply.status);
            return SubmitOutcome::Failed(reply.body.text_or_fallback());
        }

        let server_text = reply.body.message.filter(|m| !m.trim().is_empty());
        if link_mode {
            SubmitOutcome::LinkChanged(server_text.unwrap_or_else(|| LINK_UPDATED.to_string()))
        } else {
            SubmitOutcome::ContentCreated(server_text.unwrap_or_else(|| CONTENT_ADDED.to_string()))
        }
    }

    /// Calls the matching callback once; a failure calls neither
    pub fn notify(&self, on_created: impl FnOnce(), on_link_changed: impl FnOnce()) {
        match self {
            SubmitOutcome::ContentCreated(_) => on_created(),
            SubmitOutcome::LinkChanged(_) => on_link_changed(),
            SubmitOutcome::Failed(_) => {}
        }
    }

    pub fn toast(&self) -> ToastMessage {
        match self {
            SubmitOutcome::LinkChanged(text) | SubmitOutcome::ContentCreated(text) => {
                ToastMessage::success(text.clone())
            }
            SubmitOutcome::Failed(text) => ToastMessage::error(text.clone()),
        }
    }
}

/// Add Content form: drafts, upload target and the loading flag.
///
/// `loading` is the only submission state: `begin_submit` sets it and refuses a
/// second request while it is set, `finish_submit` always clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContentForm {
    context: FormContext,
    pub draft: ContentDraft,
    pub link: LinkDraft,
    loading: bool,
    upload_target: Option<UploadTarget>,
    upload_open: bool,
}

impl AddContentForm {
    pub fn new(context: FormContext) -> Self {
        Self {
            context,
            draft: ContentDraft::default(),
            link: LinkDraft::default(),
            loading: false,
            upload_target: None,
            upload_open: false,
        }
    }

    pub fn is_link_mode(&self) -> bool {
        self.context.is_link_mode()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn kind(&self) -> ContentKind {
        self.draft.kind
    }

    /// Other fields keep their values. Ignored in link mode.
    pub fn select_kind(&mut self, kind: ContentKind) -> bool {
        if self.is_link_mode() {
            return false;
        }
        self.draft.kind = kind;
        true
    }

    pub fn set_title(&mut self, value: String) {
        self.draft.title = value;
    }

    pub fn set_thumbnail(&mut self, value: String) {
        self.draft.thumbnail = value;
    }

    pub fn set_video_url(&mut self, value: String) {
        self.draft.video_url = value;
    }

    pub fn set_pdf_url(&mut self, value: String) {
        self.draft.pdf_url = value;
    }

    pub fn set_gdlink(&mut self, value: String) {
        self.link.gdlink = value;
    }

    // ------------------------------------------------------------------
    // Upload delegate
    // ------------------------------------------------------------------

    pub fn request_upload(&mut self, target: UploadTarget) {
        self.upload_target = Some(target);
        self.upload_open = true;
    }

    pub fn upload_target(&self) -> Option<UploadTarget> {
        self.upload_target
    }

    pub fn is_upload_open(&self) -> bool {
        self.upload_open
    }

    /// Writes the URL into the recorded field and closes the popup.
    /// Without a recorded target nothing changes.
    pub fn upload_succeeded(&mut self, url: String) {
        let Some(target) = self.upload_target else {
            return;
        };
        match target {
            UploadTarget::Thumbnail => self.draft.thumbnail = url,
            UploadTarget::Video => self.draft.video_url = url,
        }
        self.upload_target = None;
        self.upload_open = false;
    }

    /// Dismissed popup: a result that still arrives later is dropped
    pub fn close_upload(&mut self) {
        self.upload_target = None;
        self.upload_open = false;
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Marks the form as loading and builds the request.
    /// Returns `None` while a previous request is still in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;

        let ctx = &self.context;
        let request = if ctx.is_link_mode() {
            SubmitRequest::ChangeDriveLink(ChangeDriveLinkRequest {
                course_id: ctx.course_id.clone(),
                gdlink: self.link.gdlink.clone(),
            })
        } else {
            SubmitRequest::CreateContent(CreateContentRequest {
                kind: self.draft.kind,
                thumbnail: self.draft.thumbnail.clone(),
                title: self.draft.title.clone(),
                course_id: ctx.course_id.clone(),
                parent_content_id: ctx.parent_content_id.clone(),
                video_url: self.draft.video_url.clone(),
                pdf_url: self.draft.pdf_url.clone(),
                course_title: ctx.course_title.clone(),
                route: ctx.route.clone(),
            })
        };
        Some(request)
    }

    /// Applies the server answer (or transport error) to the form
    pub fn finish_submit(&mut self, reply: Result<ApiReply, String>) -> SubmitOutcome {
        self.loading = false;

        let outcome = SubmitOutcome::from_reply(self.is_link_mode(), reply);
        match outcome {
            SubmitOutcome::LinkChanged(_) => self.link.gdlink.clear(),
            SubmitOutcome::ContentCreated(_) => self.draft.reset_fields(),
            SubmitOutcome::Failed(_) => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::ToastKind;
    use std::cell::Cell;

    fn content_form() -> AddContentForm {
        AddContentForm::new(FormContext {
            course_id: "7".into(),
            parent_content_id: Some("p1".into()),
            course_title: Some("Rust".into()),
            route: ContentRoute::new(vec!["p0".into(), "p1".into()]),
            existing_link: None,
        })
    }

    fn link_form() -> AddContentForm {
        AddContentForm::new(FormContext {
            course_id: "7".into(),
            existing_link: Some("https://drive.example/old".into()),
            ..Default::default()
        })
    }

    fn reply(status: u16, message: Option<&str>) -> Result<ApiReply, String> {
        Ok(ApiReply {
            status,
            body: ApiMessage {
                message: message.map(str::to_string),
            },
        })
    }

    #[test]
    fn defaults_to_folder_in_content_mode() {
        let form = content_form();
        assert_eq!(form.kind(), ContentKind::Folder);
        assert!(!form.is_link_mode());
        assert!(!form.is_loading());
    }

    #[test]
    fn blank_existing_link_keeps_content_mode() {
        let form = AddContentForm::new(FormContext {
            course_id: "7".into(),
            existing_link: Some("  ".into()),
            ..Default::default()
        });
        assert!(!form.is_link_mode());
    }

    #[test]
    fn link_submit_success_clears_link_and_toasts() {
        let mut form = link_form();
        form.set_gdlink("https://drive.example/new".into());

        let request = form.begin_submit().unwrap();
        assert_eq!(
            request,
            SubmitRequest::ChangeDriveLink(ChangeDriveLinkRequest {
                course_id: "7".into(),
                gdlink: "https://drive.example/new".into(),
            })
        );
        assert!(form.is_loading());

        let outcome = form.finish_submit(reply(201, Some("Drive link updated")));
        assert_eq!(outcome, SubmitOutcome::LinkChanged("Drive link updated".into()));
        assert_eq!(outcome.toast().kind, ToastKind::Success);
        assert!(form.link.gdlink.is_empty());
        assert!(!form.is_loading());
    }

    #[test]
    fn content_submit_success_resets_fields_once() {
        let mut form = content_form();
        assert!(form.select_kind(ContentKind::Video));
        form.set_title("Intro".into());
        form.set_thumbnail("https://cdn.example/t.png".into());
        form.set_video_url("https://cdn.example/v.mp4".into());

        let Some(SubmitRequest::CreateContent(body)) = form.begin_submit() else {
            panic!("expected a create request");
        };
        assert_eq!(body.kind, ContentKind::Video);
        assert_eq!(body.course_id, "7");
        assert_eq!(body.parent_content_id.as_deref(), Some("p1"));
        assert_eq!(body.course_title.as_deref(), Some("Rust"));
        assert_eq!(body.route.segments, vec!["p0".to_string(), "p1".to_string()]);
        assert_eq!(body.video_url, "https://cdn.example/v.mp4");

        let outcome = form.finish_submit(reply(200, Some("Content added")));
        assert_eq!(outcome, SubmitOutcome::ContentCreated("Content added".into()));
        assert_eq!(outcome.toast(), ToastMessage::success("Content added"));

        assert!(form.draft.title.is_empty());
        assert!(form.draft.thumbnail.is_empty());
        assert!(form.draft.video_url.is_empty());
        assert!(form.draft.pdf_url.is_empty());
        assert_eq!(form.kind(), ContentKind::Video);
    }

    #[test]
    fn rejected_submit_shows_server_message_and_keeps_fields() {
        let mut form = content_form();
        form.set_thumbnail("https://cdn.example/t.png".into());
        let before = form.draft.clone();

        form.begin_submit().unwrap();
        let outcome = form.finish_submit(reply(400, Some("Title required")));

        assert_eq!(outcome, SubmitOutcome::Failed("Title required".into()));
        assert_eq!(outcome.toast(), ToastMessage::error("Title required"));
        assert_eq!(form.draft, before);
        assert!(!form.is_loading());
    }

    #[test]
    fn rejected_submit_without_message_uses_fallback() {
        let mut form = link_form();
        form.set_gdlink("x".into());
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(reply(500, None));
        assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_ERROR_MESSAGE.into()));
        assert_eq!(form.link.gdlink, "x");
    }

    #[test]
    fn other_2xx_statuses_are_failures() {
        let mut form = content_form();
        form.set_title("Week 1".into());
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(reply(204, None));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(form.draft.title, "Week 1");
    }

    #[test]
    fn transport_error_becomes_error_toast() {
        let mut form = content_form();
        form.set_title("Week 1".into());
        form.begin_submit().unwrap();

        let outcome = form.finish_submit(Err("TypeError: Failed to fetch".into()));
        assert_eq!(outcome.toast(), ToastMessage::error(GENERIC_ERROR_MESSAGE));
        assert_eq!(form.draft.title, "Week 1");
        assert!(!form.is_loading());
    }

    #[test]
    fn success_without_message_uses_default_text() {
        let mut form = content_form();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(reply(201, None));
        assert_eq!(outcome, SubmitOutcome::ContentCreated(CONTENT_ADDED.into()));
    }

    #[test]
    fn switching_kind_preserves_video_url() {
        let mut form = content_form();
        form.select_kind(ContentKind::Video);
        form.set_video_url("https://cdn.example/v.mp4".into());

        form.select_kind(ContentKind::Pdf);
        form.select_kind(ContentKind::Video);

        assert_eq!(form.draft.video_url, "https://cdn.example/v.mp4");
    }

    #[test]
    fn kind_cannot_change_in_link_mode() {
        let mut form = link_form();
        assert!(!form.select_kind(ContentKind::Video));
        assert_eq!(form.kind(), ContentKind::Folder);
    }

    #[test]
    fn thumbnail_upload_sets_field_and_closes_popup() {
        let mut form = content_form();
        form.request_upload(UploadTarget::Thumbnail);
        assert!(form.is_upload_open());
        assert_eq!(form.upload_target().map(|t| t.as_str()), Some("imageUrl"));

        form.upload_succeeded("https://cdn.example/thumb.png".into());

        assert_eq!(form.draft.thumbnail, "https://cdn.example/thumb.png");
        assert!(form.draft.video_url.is_empty());
        assert!(!form.is_upload_open());
    }

    #[test]
    fn video_upload_sets_video_url() {
        let mut form = content_form();
        form.request_upload(UploadTarget::Video);
        form.upload_succeeded("https://cdn.example/v.mp4".into());
        assert_eq!(form.draft.video_url, "https://cdn.example/v.mp4");
    }

    #[test]
    fn upload_without_target_is_ignored() {
        let mut form = content_form();
        form.upload_succeeded("https://cdn.example/x".into());
        assert_eq!(form.draft, ContentDraft::default());
    }

    #[test]
    fn closing_upload_leaves_fields_alone() {
        let mut form = content_form();
        form.set_thumbnail("keep".into());
        form.request_upload(UploadTarget::Thumbnail);
        form.close_upload();
        assert!(!form.is_upload_open());
        assert_eq!(form.draft.thumbnail, "keep");
        assert_eq!(form.upload_target(), None);
    }

    #[test]
    fn late_upload_after_close_is_dropped() {
        let mut form = content_form();
        form.set_thumbnail("keep".into());
        form.request_upload(UploadTarget::Thumbnail);
        form.close_upload();

        form.upload_succeeded("https://cdn.example/late.png".into());

        assert_eq!(form.draft.thumbnail, "keep");
        assert!(!form.is_upload_open());
    }

    #[test]
    fn second_upload_result_does_not_overwrite() {
        let mut form = content_form();
        form.request_upload(UploadTarget::Video);
        form.upload_succeeded("https://cdn.example/first.mp4".into());
        form.upload_succeeded("https://cdn.example/second.mp4".into());
        assert_eq!(form.draft.video_url, "https://cdn.example/first.mp4");
    }

    /// Submits once and counts the callbacks the outcome triggers
    fn callback_counts(mut form: AddContentForm, status: u16) -> (u32, u32) {
        let created = Cell::new(0);
        let link_changed = Cell::new(0);

        form.begin_submit().unwrap();
        let outcome = form.finish_submit(reply(status, None));
        outcome.notify(
            || created.set(created.get() + 1),
            || link_changed.set(link_changed.get() + 1),
        );
        (created.get(), link_changed.get())
    }

    #[test]
    fn created_content_notifies_exactly_once() {
        let mut form = content_form();
        form.set_title("Intro".into());
        assert_eq!(callback_counts(form, 201), (1, 0));
    }

    #[test]
    fn changed_link_notifies_only_link_callback() {
        let mut form = link_form();
        form.set_gdlink("https://drive.example/new".into());
        assert_eq!(callback_counts(form, 200), (0, 1));
    }

    #[test]
    fn failures_notify_nobody() {
        assert_eq!(callback_counts(content_form(), 400), (0, 0));
        assert_eq!(callback_counts(link_form(), 500), (0, 0));

        let outcome = SubmitOutcome::from_reply(false, Err("offline".into()));
        let calls = Cell::new(0);
        outcome.notify(|| calls.set(calls.get() + 1), || calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn outcome_without_form_matches_form_outcome() {
        let mut form = link_form();
        form.set_gdlink("https://drive.example/new".into());
        form.begin_submit().unwrap();
        let with_form = form.finish_submit(reply(201, Some("Saved")));

        let without_form = SubmitOutcome::from_reply(true, reply(201, Some("Saved")));
        assert_eq!(with_form, without_form);
        assert_eq!(
            SubmitOutcome::from_reply(false, reply(400, Some("Title required"))).toast(),
            ToastMessage::error("Title required")
        );
    }

    #[test]
    fn submit_is_blocked_while_loading_in_both_modes() {
        for mut form in [content_form(), link_form()] {
            assert!(form.begin_submit().is_some());
            assert!(form.is_loading());
            assert!(form.begin_submit().is_none());

            form.finish_submit(reply(201, None));
            assert!(!form.is_loading());
            assert!(form.begin_submit().is_some());
        }
    }
}
