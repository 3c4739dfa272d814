use netroster::model::{
    id::RecordId,
    org::{DeputyMinistry, Directorate, EmploymentType},
};

pub fn mock_deputy_ministry(id: &str, name: &str) -> DeputyMinistry {
    DeputyMinistry {
        id: RecordId::from(id),
        name: name.to_string(),
    }
}

/// Create a mock directorate under the deputy ministry `deputy_ministry_id`.
pub fn mock_directorate(id: &str, name: &str, deputy_ministry_id: &str) -> Directorate {
    Directorate {
        id: RecordId::from(id),
        name: name.to_string(),
        deputy_ministry_id: RecordId::from(deputy_ministry_id),
    }
}

pub fn mock_employment_type(id: &str, kind: &str) -> EmploymentType {
    EmploymentType {
        id: RecordId::from(id),
        kind: kind.to_string(),
    }
}
