use bytes::Bytes;

/// Upper bound on resumes accepted per submission; extra selections are dropped.
pub const MAX_RESUMES: usize = 10;

/// Which job-description panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Manual,
    Upload,
    Generate,
}

/// A user-selected file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub name: String,
    pub bytes: Bytes,
}

impl FileBlob {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
        }
    }
}

/// Structured fields used to ask the backend for a generated job description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorFields {
    pub job_title: String,
    pub years_experience: u32,
    /// Comma-separated.
    pub must_have_skills: String,
    pub company_name: String,
    pub employment_type: EmploymentType,
    pub industry: String,
    pub location: String,
}

impl Default for GeneratorFields {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            years_experience: 3,
            must_have_skills: String::new(),
            company_name: String::new(),
            employment_type: EmploymentType::FullTime,
            industry: String::new(),
            location: String::new(),
        }
    }
}

/// One edit to the generator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorField {
    JobTitle(String),
    YearsExperience(u32),
    MustHaveSkills(String),
    CompanyName(String),
    EmploymentType(EmploymentType),
    Industry(String),
    Location(String),
}

impl GeneratorFields {
    pub fn set(&mut self, field: GeneratorField) {
        match field {
            GeneratorField::JobTitle(v) => self.job_title = v,
            GeneratorField::YearsExperience(v) => self.years_experience = v,
            GeneratorField::MustHaveSkills(v) => self.must_have_skills = v,
            GeneratorField::CompanyName(v) => self.company_name = v,
            GeneratorField::EmploymentType(v) => self.employment_type = v,
            GeneratorField::Industry(v) => self.industry = v,
            GeneratorField::Location(v) => self.location = v,
        }
    }

    pub(crate) fn is_submittable(&self) -> bool {
        !self.job_title.is_empty() && !self.company_name.is_empty()
    }
}

/// The job description that will actually be sent with a match request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JdSource {
    File(FileBlob),
    Text(String),
}

/// Everything the user has entered before submitting.
///
/// The text and file slots are independent; [`InputModel::resolve_jd`] applies
/// the file-wins-over-text rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputModel {
    mode: InputMode,
    jd_text: String,
    jd_file: Option<FileBlob>,
    generator: GeneratorFields,
    resumes: Vec<FileBlob>,
}

impl InputModel {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn jd_text(&self) -> &str {
        &self.jd_text
    }

    pub fn jd_file(&self) -> Option<&FileBlob> {
        self.jd_file.as_ref()
    }

    pub fn generator(&self) -> &GeneratorFields {
        &self.generator
    }

    pub fn resumes(&self) -> &[FileBlob] {
        &self.resumes
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.jd_text = text.into();
    }

    pub fn set_file(&mut self, file: Option<FileBlob>) {
        self.jd_file = file;
    }

    pub fn set_generator_field(&mut self, field: GeneratorField) {
        self.generator.set(field);
    }

    /// Keeps the first [`MAX_RESUMES`] files in selection order and returns the
    /// accepted count.
    pub fn set_resumes(&mut self, mut files: Vec<FileBlob>) -> usize {
        files.truncate(MAX_RESUMES);
        self.resumes = files;
        self.resumes.len()
    }

    pub fn resolve_jd(&self) -> Option<JdSource> {
        if let Some(file) = &self.jd_file {
            return Some(JdSource::File(file.clone()));
        }
        if self.jd_text.is_empty() {
            None
        } else {
            Some(JdSource::Text(self.jd_text.clone()))
        }
    }
}
