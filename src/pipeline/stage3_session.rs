use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Session;

impl Stage3Session {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Session {
    fn name(&self) -> &'static str {
        "stage3_session"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let record = ctx.record()?.clone();
        ctx.session.commit(record)?;
        info!(
            slot = %ctx.session.store().slot_path().display(),
            "session_committed"
        );
        Ok(())
    }
}
