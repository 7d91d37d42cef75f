use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Parser)]
#[command(
    name = "hcc-survival",
    version,
    about = "HCC survival prediction: patient intake, prediction API, treatment ranking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Validate the patient record, send it for prediction and rank treatments")]
    Submit(SubmitArgs),
    #[command(about = "Validate the patient record without submitting it")]
    Validate(ValidateArgs),
    #[command(about = "Summarize a saved prediction API response")]
    Summarize(SummarizeArgs),
    #[command(about = "Inspect or reset the stored session record")]
    Session(SessionArgs),
    #[command(about = "List recognized treatment codes")]
    Treatments,
}

#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(long, default_value_t = false, help = "Start from the record stored in the session")]
    pub resume: bool,

    #[arg(long, help = "Patient record JSON file")]
    pub from: Option<PathBuf>,

    #[arg(long = "set", value_name = "FIELD=VALUE", help = "Set a clinical field (repeatable)")]
    pub assignments: Vec<String>,

    #[arg(long = "treatment", value_name = "CODE", help = "Check a treatment (repeatable)")]
    pub treatments: Vec<String>,

    #[arg(long = "no-treatment", value_name = "CODE", help = "Uncheck a treatment (repeatable)")]
    pub unchecked: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SessionDirArg {
    #[arg(long, env = "HCC_SESSION_DIR", default_value = ".hcc-session")]
    pub session_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub session: SessionDirArg,

    #[arg(
        long,
        default_value_t = false,
        help = "Submit without asking when more than half of the fields are empty"
    )]
    pub yes: bool,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, env = "HCC_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, env = "HCC_API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub session: SessionDirArg,
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[arg(long, help = "Saved prediction API response (.json or .json.gz)")]
    pub response: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,

    #[command(flatten)]
    pub session: SessionDirArg,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    Show,
    Clear,
}
