use netroster::{
    console::form::InternetUserForm,
    model::{
        id::RecordId,
        user::{InternetUser, UserStatus, ViolationLevel},
    },
};

/// Create a mock internet user.
///
/// # Arguments
/// - `id` - Record id
/// - `name` - Display name
/// - `username` - Account username
/// - `phone` - Phone number
pub fn mock_internet_user(id: &str, name: &str, username: &str, phone: &str) -> InternetUser {
    InternetUser {
        id: RecordId::from(id),
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.org", username),
        phone: phone.to_string(),
        employment_type: "Permanent".to_string(),
        directorate: "10".to_string(),
        deputy_ministry: "1".to_string(),
        position: "Analyst".to_string(),
        device_limit: "2".to_string(),
        device_type: "Laptop".to_string(),
        mac_address: "00:1A:2B:3C:4D:5E".to_string(),
        status: UserStatus::Active,
        violations: ViolationLevel::None,
        comment: "No Comment".to_string(),
    }
}

/// Create a mock internet user placed in an organisational unit.
///
/// # Arguments
/// - `id` - Record id
/// - `deputy_ministry` - Deputy ministry id
/// - `directorate` - Directorate id
/// - `status` - Account status
pub fn mock_placed_user(
    id: &str,
    deputy_ministry: &str,
    directorate: &str,
    status: UserStatus,
) -> InternetUser {
    InternetUser {
        deputy_ministry: deputy_ministry.to_string(),
        directorate: directorate.to_string(),
        status,
        ..mock_internet_user(id, &format!("User {}", id), &format!("user{}", id), "")
    }
}

/// Wizard record with every required field filled.
pub fn mock_user_form() -> InternetUserForm {
    InternetUserForm {
        name: "Ali".to_string(),
        username: "ali01".to_string(),
        email: "ali@example.org".to_string(),
        phone: "555".to_string(),
        employment_type: "Permanent".to_string(),
        directorate: "10".to_string(),
        deputy_ministry: "1".to_string(),
        position: "Analyst".to_string(),
        device_limit: "2".to_string(),
        device_type: "Laptop".to_string(),
        mac_address: String::new(),
        ..InternetUserForm::default()
    }
}
