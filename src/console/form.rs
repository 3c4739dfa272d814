//! Concrete forms driven by [`Wizard`](crate::console::wizard::Wizard).

use crate::{
    console::wizard::{FormField, StepForm},
    error::FormError,
    model::{
        account::{Credentials, NewSystemUser, SystemUserPatch},
        user::{validate_device_limit, NewInternetUser, UserStatus},
    },
};

macro_rules! form_fields {
    ($name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl FormField for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

form_fields!(UserField {
    Name => ("name", "Name"),
    Username => ("username", "Username"),
    Email => ("email", "Email"),
    Phone => ("phone", "Phone"),
    EmploymentType => ("employment_type", "Employment Type"),
    Directorate => ("directorate", "Directorate"),
    DeputyMinistry => ("deputyMinistry", "Deputy Ministry"),
    Position => ("position", "Position"),
    DeviceLimit => ("device_limit", "Device Limit"),
    DeviceType => ("device_type", "Device Type"),
    MacAddress => ("mac_address", "MAC Address"),
    Status => ("status", "Status"),
    Violations => ("violations", "Violations"),
    Comment => ("comment", "Comment"),
});

/// Record collected by the add-internet-user wizard.
///
/// `directorate` and `deputy_ministry` hold the selected record ids.
#[derive(Debug, Clone, PartialEq)]
pub struct InternetUserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub employment_type: String,
    pub directorate: String,
    pub deputy_ministry: String,
    pub position: String,
    pub device_limit: String,
    pub device_type: String,
    pub mac_address: String,
    pub status: String,
    pub violations: String,
    pub comment: String,
}

impl Default for InternetUserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            employment_type: String::new(),
            directorate: String::new(),
            deputy_ministry: String::new(),
            position: String::new(),
            device_limit: String::new(),
            device_type: String::new(),
            mac_address: String::new(),
            status: UserStatus::default().as_str().to_string(),
            violations: "0".to_string(),
            comment: "No Comment".to_string(),
        }
    }
}

impl StepForm for InternetUserForm {
    type Field = UserField;
    type Output = NewInternetUser;

    const STEPS: &'static [&'static str] = &[
        "Basic Info",
        "Job Info",
        "Device Info",
        "Activation",
        "Review & Submit",
    ];

    const FIELDS: &'static [UserField] = UserField::ALL;

    fn required(step: usize) -> &'static [UserField] {
        match step {
            0 => &[UserField::Name, UserField::Username],
            1 => &[
                UserField::EmploymentType,
                UserField::Directorate,
                UserField::DeputyMinistry,
            ],
            2 => &[UserField::DeviceLimit, UserField::DeviceType],
            3 => &[UserField::Status, UserField::Violations, UserField::Comment],
            _ => &[],
        }
    }

    fn value(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Username => &self.username,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::EmploymentType => &self.employment_type,
            UserField::Directorate => &self.directorate,
            UserField::DeputyMinistry => &self.deputy_ministry,
            UserField::Position => &self.position,
            UserField::DeviceLimit => &self.device_limit,
            UserField::DeviceType => &self.device_type,
            UserField::MacAddress => &self.mac_address,
            UserField::Status => &self.status,
            UserField::Violations => &self.violations,
            UserField::Comment => &self.comment,
        }
    }

    fn set(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::EmploymentType => &mut self.employment_type,
            UserField::Directorate => &mut self.directorate,
            UserField::DeputyMinistry => &mut self.deputy_ministry,
            UserField::Position => &mut self.position,
            UserField::DeviceLimit => &mut self.device_limit,
            UserField::DeviceType => &mut self.device_type,
            UserField::MacAddress => &mut self.mac_address,
            UserField::Status => &mut self.status,
            UserField::Violations => &mut self.violations,
            UserField::Comment => &mut self.comment,
        };
        *slot = value;
    }

    fn build(&self) -> Result<NewInternetUser, FormError> {
        validate_device_limit(&self.device_limit)?;

        Ok(NewInternetUser {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            employment_type: self.employment_type.clone(),
            directorate: self.directorate.clone(),
            deputy_ministry: self.deputy_ministry.clone(),
            position: self.position.trim().to_string(),
            device_limit: self.device_limit.trim().to_string(),
            device_type: self.device_type.trim().to_string(),
            mac_address: self.mac_address.trim().to_string(),
            status: self.status.parse()?,
            violations: self.violations.parse()?,
            comment: self.comment.trim().to_string(),
        })
    }
}

form_fields!(RegistrationField {
    Name => ("name", "Full Name"),
    Email => ("email", "Email"),
    Password => ("password", "Password"),
    ConfirmPassword => ("confirmPassword", "Confirm Password"),
});

/// Operator self-registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl StepForm for RegistrationForm {
    type Field = RegistrationField;
    type Output = NewSystemUser;

    const STEPS: &'static [&'static str] = &["Create Account"];
    const FIELDS: &'static [RegistrationField] = RegistrationField::ALL;

    fn required(step: usize) -> &'static [RegistrationField] {
        match step {
            0 => RegistrationField::ALL,
            _ => &[],
        }
    }

    fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::Name => self.name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::ConfirmPassword => self.confirm_password = value,
        }
    }

    fn check_step(&self, _step: usize) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    fn build(&self) -> Result<NewSystemUser, FormError> {
        Ok(NewSystemUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            is_admin: false,
        })
    }
}

form_fields!(ProfileField {
    Name => ("name", "Full Name"),
    Email => ("email", "Email"),
    Password => ("password", "New Password"),
});

/// Profile settings of the logged-in operator. A blank password keeps the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl StepForm for ProfileForm {
    type Field = ProfileField;
    type Output = SystemUserPatch;

    const STEPS: &'static [&'static str] = &["Profile"];
    const FIELDS: &'static [ProfileField] = ProfileField::ALL;

    fn required(step: usize) -> &'static [ProfileField] {
        match step {
            0 => &[ProfileField::Name, ProfileField::Email],
            _ => &[],
        }
    }

    fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Password => &self.password,
        }
    }

    fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Password => self.password = value,
        }
    }

    fn build(&self) -> Result<SystemUserPatch, FormError> {
        let patch = SystemUserPatch {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            is_admin: None,
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        };
        patch.validate()?;
        Ok(patch)
    }
}

form_fields!(LoginField {
    Email => ("email", "Email"),
    Password => ("password", "Password"),
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl StepForm for LoginForm {
    type Field = LoginField;
    type Output = Credentials;

    const STEPS: &'static [&'static str] = &["Login"];
    const FIELDS: &'static [LoginField] = LoginField::ALL;

    fn required(step: usize) -> &'static [LoginField] {
        match step {
            0 => LoginField::ALL,
            _ => &[],
        }
    }

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    fn build(&self) -> Result<Credentials, FormError> {
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
