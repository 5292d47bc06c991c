use super::model;
use super::state::{AddContentForm, FormContext, SubmitOutcome, UploadTarget};
use crate::shared::toast::ToastService;
use contracts::domain::a001_course_content::aggregate::ContentKind;
use leptos::prelude::*;

/// ViewModel for the Add Content form
#[derive(Clone, Copy)]
pub struct AddContentViewModel {
    pub form: RwSignal<AddContentForm>,
}

impl AddContentViewModel {
    pub fn new(context: FormContext) -> Self {
        Self {
            form: RwSignal::new(AddContentForm::new(context)),
        }
    }

    pub fn is_link_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_link_mode())
    }

    pub fn is_loading(&self) -> Memo<bool> {
        let form = self.form;
        Memo::new(move |_| form.with(|f| f.is_loading()))
    }

    pub fn kind(&self) -> Memo<ContentKind> {
        let form = self.form;
        Memo::new(move |_| form.with(|f| f.kind()))
    }

    pub fn select_kind(&self, raw: &str) {
        match raw.parse::<ContentKind>() {
            Ok(kind) => {
                self.form.update(|f| {
                    f.select_kind(kind);
                });
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    pub fn open_upload(&self, target: UploadTarget) {
        self.form.update(|f| f.request_upload(target));
    }

    /// Submit the form; the result is reported through a toast and the callbacks
    pub fn submit_command(
        &self,
        toasts: ToastService,
        on_created: Option<Callback<()>>,
        on_link_changed: Option<Callback<()>>,
    ) {
        let Some(request) = self.form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let form = self.form;
        let link_mode = self.is_link_mode();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = model::submit(&request).await;

            // The answer is still reported when the form is gone
            let outcome = form
                .try_update(|f| f.finish_submit(reply.clone()))
                .unwrap_or_else(|| {
                    log::debug!("Add content form was disposed before the response arrived");
                    SubmitOutcome::from_reply(link_mode, reply)
                });

            toasts.show(outcome.toast());
            outcome.notify(
                || {
                    log::info!("Content created");
                    if let Some(cb) = on_created {
                        cb.try_run(());
                    }
                },
                || {
                    log::info!("Drive link changed");
                    if let Some(cb) = on_link_changed {
                        cb.try_run(());
                    }
                },
            );
        });
    }
}
