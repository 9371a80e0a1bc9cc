use crate::app::model::{Model, RemoteAction, ToastLevel};
use crate::session::{Remote, SavePayload};

/// Execute the remote action queued by `update`, if any.
///
/// A failed action surfaces as a toast and leaves every piece of local
/// state untouched: the buffer keeps its text, the session stays dirty,
/// and nothing retries.
pub(super) fn run_pending(model: &mut Model, remote: &mut dyn Remote) {
    let Some(action) = model.pending_action.take() else {
        return;
    };

    match action {
        RemoteAction::Save => {
            let payload = SavePayload::new(&model.parsed, &model.buffer.text());
            match remote.save(&payload) {
                Ok(response) => {
                    model.session.adopt_endpoints(&response);
                    model.session.clear_dirty();
                    model.show_toast(ToastLevel::Info, "Saved");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "save failed");
                    model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                }
            }
        }
        RemoteAction::Publish => {
            let publish_url = model.session.endpoints().publish_url.clone();
            match remote.publish(&publish_url) {
                Ok(response) => {
                    model.show_toast(ToastLevel::Info, format!("Published: {}", response.url));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "publish failed");
                    model.show_toast(ToastLevel::Error, format!("Publish failed: {err}"));
                }
            }
        }
        RemoteAction::Delete => {
            let delete_url = model.session.endpoints().delete_url.clone();
            match remote.delete(&delete_url) {
                Ok(()) => {
                    // Nothing left to edit once the draft is gone.
                    model.session.clear_dirty();
                    model.should_quit = true;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "delete failed");
                    model.show_toast(ToastLevel::Error, format!("Delete failed: {err}"));
                }
            }
        }
    }
}
