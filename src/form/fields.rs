use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClinicalField {
    Name,
    Hospital,
    Age,
    Sex,
    Bmi,
    Ps,
    Afp,
    TotalBilirubin,
    Inr,
    Albumin,
    Gpt,
    Creatine,
    Hemoglobin,
    PlateletCount,
    MaximalTumorSize,
    TumorNumber,
    TumorDistribution,
    Ehsm,
    Mvi,
    Lymphonodules,
    Metastasis,
    BclcStage,
    Hbv,
    Hcv,
    Cirrhosis,
    ChildPughClass,
    Ascites,
    Encephalopathy,
    Dm,
    Htn,
    Esrd,
    Ckd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
    Categorical(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Basic,
    Physiological,
    Tumor,
    Medical,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Basic,
        Section::Physiological,
        Section::Tumor,
        Section::Medical,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Basic => "Patient",
            Section::Physiological => "Physiological",
            Section::Tumor => "Tumor",
            Section::Medical => "Medical history",
        }
    }
}

const FLAG: &[&str] = &["0", "1"];
const SEX: &[&str] = &["M", "F"];
const CHILD_PUGH: &[&str] = &["A", "B", "C"];
const OPAQUE: &[&str] = &[];

impl ClinicalField {
    pub const ALL: [ClinicalField; 32] = [
        ClinicalField::Name,
        ClinicalField::Hospital,
        ClinicalField::Age,
        ClinicalField::Sex,
        ClinicalField::Bmi,
        ClinicalField::Ps,
        ClinicalField::Afp,
        ClinicalField::TotalBilirubin,
        ClinicalField::Inr,
        ClinicalField::Albumin,
        ClinicalField::Gpt,
        ClinicalField::Creatine,
        ClinicalField::Hemoglobin,
        ClinicalField::PlateletCount,
        ClinicalField::MaximalTumorSize,
        ClinicalField::TumorNumber,
        ClinicalField::TumorDistribution,
        ClinicalField::Ehsm,
        ClinicalField::Mvi,
        ClinicalField::Lymphonodules,
        ClinicalField::Metastasis,
        ClinicalField::BclcStage,
        ClinicalField::Hbv,
        ClinicalField::Hcv,
        ClinicalField::Cirrhosis,
        ClinicalField::ChildPughClass,
        ClinicalField::Ascites,
        ClinicalField::Encephalopathy,
        ClinicalField::Dm,
        ClinicalField::Htn,
        ClinicalField::Esrd,
        ClinicalField::Ckd,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ClinicalField::Name => "name",
            ClinicalField::Hospital => "Hospital",
            ClinicalField::Age => "Age",
            ClinicalField::Sex => "Sex",
            ClinicalField::Bmi => "BMI",
            ClinicalField::Ps => "PS",
            ClinicalField::Afp => "AFP",
            ClinicalField::TotalBilirubin => "Total_bilirubin",
            ClinicalField::Inr => "INR",
            ClinicalField::Albumin => "Albumin",
            ClinicalField::Gpt => "GPT",
            ClinicalField::Creatine => "Creatine",
            ClinicalField::Hemoglobin => "Hemoglobin",
            ClinicalField::PlateletCount => "Platelet_count",
            ClinicalField::MaximalTumorSize => "Maximal_tumor_size",
            ClinicalField::TumorNumber => "Tumor_number",
            ClinicalField::TumorDistribution => "Tumor_distribution",
            ClinicalField::Ehsm => "EHSM",
            ClinicalField::Mvi => "MVI",
            ClinicalField::Lymphonodules => "Lymphonodules",
            ClinicalField::Metastasis => "Metastasis",
            ClinicalField::BclcStage => "BCLC_stage",
            ClinicalField::Hbv => "HBV",
            ClinicalField::Hcv => "HCV",
            ClinicalField::Cirrhosis => "Cirrhosis",
            ClinicalField::ChildPughClass => "ChildPugh_class",
            ClinicalField::Ascites => "Ascites",
            ClinicalField::Encephalopathy => "Encephalopathy",
            ClinicalField::Dm => "DM",
            ClinicalField::Htn => "HTN",
            ClinicalField::Esrd => "ESRD",
            ClinicalField::Ckd => "CKD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClinicalField::Name => "Name",
            ClinicalField::Hospital => "Hospital",
            ClinicalField::Age => "Age",
            ClinicalField::Sex => "Sex",
            ClinicalField::Bmi => "BMI (kg/m2)",
            ClinicalField::Ps => "Performance status",
            ClinicalField::Afp => "AFP (ng/mL)",
            ClinicalField::TotalBilirubin => "Total bilirubin (mg/dL)",
            ClinicalField::Inr => "INR",
            ClinicalField::Albumin => "Albumin (g/dL)",
            ClinicalField::Gpt => "GPT (U/L)",
            ClinicalField::Creatine => "Creatinine (mg/dL)",
            ClinicalField::Hemoglobin => "Hemoglobin (g/dL)",
            ClinicalField::PlateletCount => "Platelet count (10^3/uL)",
            ClinicalField::MaximalTumorSize => "Maximal tumor size",
            ClinicalField::TumorNumber => "Tumor number",
            ClinicalField::TumorDistribution => "Tumor distribution",
            ClinicalField::Ehsm => "Extrahepatic spread",
            ClinicalField::Mvi => "Microvascular invasion",
            ClinicalField::Lymphonodules => "Lymph nodes",
            ClinicalField::Metastasis => "Metastasis",
            ClinicalField::BclcStage => "BCLC stage",
            ClinicalField::Hbv => "Hepatitis B",
            ClinicalField::Hcv => "Hepatitis C",
            ClinicalField::Cirrhosis => "Cirrhosis",
            ClinicalField::ChildPughClass => "Child-Pugh class",
            ClinicalField::Ascites => "Ascites",
            ClinicalField::Encephalopathy => "Encephalopathy",
            ClinicalField::Dm => "Diabetes mellitus",
            ClinicalField::Htn => "Hypertension",
            ClinicalField::Esrd => "End-stage renal disease",
            ClinicalField::Ckd => "Chronic kidney disease",
        }
    }

    pub fn kind(self) -> FieldKind {
        use ClinicalField::*;
        match self {
            Name | Hospital => FieldKind::Text,
            Age | Bmi | Ps | Afp | TotalBilirubin | Inr | Albumin | Gpt | Creatine
            | Hemoglobin | PlateletCount | MaximalTumorSize | TumorNumber => FieldKind::Numeric,
            Sex => FieldKind::Categorical(SEX),
            ChildPughClass => FieldKind::Categorical(CHILD_PUGH),
            TumorDistribution | BclcStage => FieldKind::Categorical(OPAQUE),
            Ehsm | Mvi | Lymphonodules | Metastasis | Hbv | Hcv | Cirrhosis | Ascites
            | Encephalopathy | Dm | Htn | Esrd | Ckd => FieldKind::Categorical(FLAG),
        }
    }

    pub fn section(self) -> Section {
        use ClinicalField::*;
        match self {
            Name | Hospital | Age | Sex | Bmi => Section::Basic,
            Ps | Afp | TotalBilirubin | Inr | Albumin | Gpt | Creatine | Hemoglobin
            | PlateletCount => Section::Physiological,
            MaximalTumorSize | TumorNumber | TumorDistribution | Ehsm | Mvi | Lymphonodules
            | Metastasis | BclcStage => Section::Tumor,
            Hbv | Hcv | Cirrhosis | ChildPughClass | Ascites | Encephalopathy | Dm | Htn
            | Esrd | Ckd => Section::Medical,
        }
    }

    pub fn counts_toward_completeness(self) -> bool {
        self != ClinicalField::Name
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown clinical field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for ClinicalField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ClinicalField::ALL
            .iter()
            .copied()
            .find(|f| f.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownField(trimmed.to_string()))
    }
}
