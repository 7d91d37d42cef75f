use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hcc_survival::cli::{Cli, Commands, FormArgs, SessionCommand};
use hcc_survival::client::HttpPredictionClient;
use hcc_survival::ctx::{ConfirmPolicy, Ctx, FormSources};
use hcc_survival::io;
use hcc_survival::pipeline::Pipeline;
use hcc_survival::pipeline::stage0_scaffold::Stage0Scaffold;
use hcc_survival::pipeline::stage1_form::Stage1Form;
use hcc_survival::pipeline::stage2_validate::Stage2Validate;
use hcc_survival::pipeline::stage3_session::Stage3Session;
use hcc_survival::pipeline::stage4_predict::Stage4Predict;
use hcc_survival::pipeline::stage5_survival::Stage5Survival;
use hcc_survival::pipeline::stage6_flags::Stage6Flags;
use hcc_survival::pipeline::stage7_output::Stage7Output;
use hcc_survival::session::{Session, SessionStore};
use hcc_survival::treatment::Treatment;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit(args) => {
            let session = Session::restore(SessionStore::new(&args.session.session_dir))?;
            let mut ctx = Ctx::new(
                args.out,
                session,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.sources = form_sources(args.form);
            ctx.confirm = if args.yes {
                ConfirmPolicy::AssumeYes
            } else {
                ConfirmPolicy::Prompt
            };
            ctx.client = Some(Box::new(HttpPredictionClient::new(
                args.api_url,
                Duration::from_secs(args.timeout_secs),
            )?));

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Form::new()),
                Box::new(Stage2Validate::new()),
                Box::new(Stage3Session::new()),
                Box::new(Stage4Predict::new()),
                Box::new(Stage5Survival::new()),
                Box::new(Stage6Flags::new()),
                Box::new(Stage7Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let session = Session::restore(SessionStore::new(&args.session.session_dir))?;
            let mut ctx = Ctx::new(
                PathBuf::from("."),
                session,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.sources = form_sources(args.form);
            ctx.confirm = ConfirmPolicy::Decline;

            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Form::new()),
                Box::new(Stage2Validate::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx);
        }
        Commands::Summarize(args) => {
            // Offline summaries never read or write the session slot.
            let session = Session::fresh(SessionStore::new(&args.out));
            let mut ctx = Ctx::new(
                args.out,
                session,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.response_path = Some(args.response);

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage4Predict::new()),
                Box::new(Stage5Survival::new()),
                Box::new(Stage7Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Session(args) => {
            let mut session = Session::restore(SessionStore::new(&args.session.session_dir))?;
            match args.command {
                SessionCommand::Show => match session.current() {
                    Some(record) => print!("{}", io::summary::format_record(record)),
                    None => println!("session is empty"),
                },
                SessionCommand::Clear => {
                    session.reset()?;
                    println!("session cleared");
                }
            }
        }
        Commands::Treatments => {
            for treatment in Treatment::ALL {
                println!("{}\t{}", treatment.code(), treatment.label());
            }
        }
    }

    Ok(())
}

fn form_sources(args: FormArgs) -> FormSources {
    FormSources {
        resume: args.resume,
        from: args.from,
        assignments: args.assignments,
        treatments: args.treatments,
        unchecked: args.unchecked,
    }
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("hcc-survival validate ok");
    if let Some(record) = &ctx.record {
        println!("treatments: {}", record.treatments().len());
    }
    if let Some(decision) = &ctx.decision {
        println!("missing fields: {:.1}%", decision.missing_percentage());
        if matches!(
            decision,
            hcc_survival::form::SubmitDecision::ConfirmationRequired { .. }
        ) {
            println!("submission will require confirmation");
        }
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
