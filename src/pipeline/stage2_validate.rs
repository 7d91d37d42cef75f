use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::{ConfirmPolicy, Ctx, Halt};
use crate::form::{self, SubmitDecision};
use crate::pipeline::Stage;

pub struct Stage2Validate;

impl Stage2Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Validate {
    fn name(&self) -> &'static str {
        "stage2_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let record = ctx.record()?;
        form::validate(record)?;

        let decision = form::assess(record);
        info!(
            missing_percentage = decision.missing_percentage(),
            "validation_passed"
        );

        if let SubmitDecision::ConfirmationRequired {
            missing,
            missing_percentage,
        } = &decision
        {
            let confirmed = match ctx.confirm {
                ConfirmPolicy::AssumeYes => true,
                ConfirmPolicy::Decline => false,
                ConfirmPolicy::Prompt => prompt_confirmation(missing.len(), *missing_percentage)?,
            };
            if confirmed {
                ctx.confirmed = true;
            } else {
                warn!(
                    missing_fields = missing.len(),
                    missing_percentage = *missing_percentage,
                    "submission not confirmed"
                );
                ctx.halt = Some(Halt::ConfirmationDeclined {
                    missing_percentage: *missing_percentage,
                });
            }
        }

        ctx.decision = Some(decision);
        Ok(())
    }
}

fn prompt_confirmation(missing: usize, missing_percentage: f64) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }
    let mut stderr = std::io::stderr();
    writeln!(
        stderr,
        "{} fields ({:.1}%) are empty; predictions may be less accurate.",
        missing, missing_percentage
    )?;
    write!(stderr, "Continue with the analysis? [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
