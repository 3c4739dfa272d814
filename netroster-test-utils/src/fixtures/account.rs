use netroster::model::{
    account::{Credentials, SessionUser, SystemUser},
    id::RecordId,
};

pub fn mock_session_user(id: &str, is_admin: bool) -> SessionUser {
    SessionUser {
        id: RecordId::from(id),
        name: "Operator".to_string(),
        email: "operator@example.org".to_string(),
        is_admin,
        token: Some("token-123".to_string()),
    }
}

pub fn mock_system_user(id: &str, name: &str, is_admin: bool) -> SystemUser {
    SystemUser {
        id: RecordId::from(id),
        name: name.to_string(),
        email: format!("{}@example.org", name.to_lowercase()),
        is_admin,
    }
}

pub fn mock_credentials() -> Credentials {
    Credentials {
        email: "operator@example.org".to_string(),
        password: "secret".to_string(),
    }
}
