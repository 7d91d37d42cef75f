use std::path::PathBuf;

use crate::client::PredictionClient;
use crate::flags::ClinicalFlag;
use crate::form::{FormState, PatientRecord, SubmitDecision};
use crate::pipeline::CancelToken;
use crate::schema::v1::HccSurvivalV1;
use crate::session::Session;
use crate::survival::{ResponseData, SurvivalOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPolicy {
    Prompt,
    AssumeYes,
    Decline,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    ConfirmationDeclined { missing_percentage: f64 },
    SessionChanged,
    Cancelled,
}

impl Halt {
    pub fn describe(&self) -> String {
        match self {
            Halt::ConfirmationDeclined { missing_percentage } => format!(
                "submission cancelled: {:.1}% of fields are empty and the submission was not confirmed",
                missing_percentage
            ),
            Halt::SessionChanged => {
                "results discarded: the session record changed while the request was running"
                    .to_string()
            }
            Halt::Cancelled => "run cancelled".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormSources {
    pub resume: bool,
    pub from: Option<PathBuf>,
    pub assignments: Vec<String>,
    pub treatments: Vec<String>,
    pub unchecked: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub survival_tsv_path: PathBuf,
    pub curves_tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub sources: FormSources,
    pub confirm: ConfirmPolicy,
    pub write_json: bool,
    pub write_tsv: bool,
    pub response_path: Option<PathBuf>,
    pub session: Session,
    pub client: Option<Box<dyn PredictionClient>>,
    pub cancel: CancelToken,
    pub form: FormState,
    pub record: Option<PatientRecord>,
    pub decision: Option<SubmitDecision>,
    pub confirmed: bool,
    pub response: Option<ResponseData>,
    pub outcome: Option<SurvivalOutcome>,
    pub clinical_flags: Vec<ClinicalFlag>,
    pub warnings: Vec<String>,
    pub halt: Option<Halt>,
    pub output: OutputPaths,
    pub report: HccSurvivalV1,
}

impl Ctx {
    pub fn new(
        out_dir: PathBuf,
        session: Session,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("hcc_survival.json");
        let survival_tsv_path = out_dir.join("survival.tsv");
        let curves_tsv_path = out_dir.join("km_curves.tsv");
        Self {
            sources: FormSources::default(),
            confirm: ConfirmPolicy::Prompt,
            write_json,
            write_tsv,
            response_path: None,
            session,
            client: None,
            cancel: CancelToken::new(),
            form: FormState::new(),
            record: None,
            decision: None,
            confirmed: false,
            response: None,
            outcome: None,
            clinical_flags: Vec::new(),
            warnings: Vec::new(),
            halt: None,
            output: OutputPaths {
                out_dir,
                json_path,
                survival_tsv_path,
                curves_tsv_path,
            },
            report: HccSurvivalV1::empty(tool_version),
        }
    }

    pub fn record(&self) -> anyhow::Result<&PatientRecord> {
        self.record
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("patient record missing"))
    }
}
