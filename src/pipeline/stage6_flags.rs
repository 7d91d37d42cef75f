use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::flags::compute_clinical_flags;
use crate::pipeline::Stage;

pub struct Stage6Flags;

impl Stage6Flags {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Flags {
    fn name(&self) -> &'static str {
        "stage6_flags"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        // Offline summaries have no patient record to inspect.
        let Some(record) = &ctx.record else {
            return Ok(());
        };
        let flags = compute_clinical_flags(record);
        info!(
            fired = flags.iter().filter(|f| f.fired).count(),
            "clinical_flags_ready"
        );
        ctx.clinical_flags = flags;
        Ok(())
    }
}
