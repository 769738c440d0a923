use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::BridgeError;
use crate::form::SubmitEvent;
use crate::page::ResultView;
use crate::schedule::Schedules;
use crate::transport::Transport;

/// Submit handler for the treatment form.
///
/// One submission is one POST and, when it succeeds, one page update. Failures
/// are logged and otherwise swallowed. Overlapping submissions are not
/// coordinated: whichever response lands last owns the page.
#[derive(Clone)]
pub struct FormBridge {
    transport: Arc<Transport>,
    view: ResultView,
}

impl FormBridge {
    pub fn new(transport: Transport, view: ResultView) -> Self {
        Self {
            transport: Arc::new(transport),
            view,
        }
    }

    pub fn transport(&self) -> &Transport {
        self.transport.as_ref()
    }

    /// Run one submission and report the outcome instead of logging it.
    pub async fn try_submit(&self, event: &mut SubmitEvent) -> Result<Schedules, BridgeError> {
        event.prevent_default();
        let payload = event.form_data();
        tracing::debug!(form = %event.form.id, fields = payload.len(), "posting form");

        let body = self.transport.post_json(&payload).await?;
        let schedules = Schedules::from_body(&body)?;

        self.view.render(&schedules);
        Ok(schedules)
    }

    pub async fn submit(&self, event: &mut SubmitEvent) {
        let submission_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("submission", id = %submission_id);
        match self.try_submit(event).instrument(span.clone()).await {
            Ok(_) => span.in_scope(|| tracing::info!("schedules rendered")),
            Err(e) => span.in_scope(|| tracing::error!(error = %e, "treatment request failed")),
        }
    }

    /// Fire-and-forget variant. Default navigation is suppressed on the
    /// caller's event before the task is spawned, the same way a browser
    /// handler cancels it synchronously; the task works on a copy.
    pub fn spawn_submit(&self, event: &mut SubmitEvent) -> JoinHandle<()> {
        event.prevent_default();
        let mut event = event.clone();
        let bridge = self.clone();
        tokio::spawn(async move { bridge.submit(&mut event).await })
    }
}
