use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::{Ctx, Halt};
use crate::io;
use crate::pipeline::Stage;

pub struct Stage4Predict;

impl Stage4Predict {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Predict {
    fn name(&self) -> &'static str {
        "stage4_predict"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if let Some(path) = &ctx.response_path {
            let response = io::read_response(path)?;
            info!(path = %path.display(), "response_loaded");
            ctx.response = Some(response);
            return Ok(());
        }

        let record = ctx.record()?.clone();
        let client = ctx
            .client
            .as_ref()
            .context("no prediction client configured")?;
        let response = client.predict(&record)?;

        if ctx.cancel.is_cancelled() {
            warn!("run cancelled while the request was in flight, discarding response");
            ctx.halt = Some(Halt::Cancelled);
            return Ok(());
        }
        if !ctx.session.still_holds(&record)? {
            warn!("session record changed while the request was in flight, discarding response");
            ctx.halt = Some(Halt::SessionChanged);
            return Ok(());
        }

        info!(
            treatments = response.treatments.as_ref().map(Vec::len).unwrap_or(0),
            curves = response.km_curves.as_ref().map(Vec::len).unwrap_or(0),
            "response_ready"
        );
        ctx.response = Some(response);
        Ok(())
    }
}
