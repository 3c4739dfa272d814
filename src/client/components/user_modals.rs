use dioxus::prelude::*;
use netroster::{
    console::{directory::Directory, form::UserField, wizard::FormField},
    model::user::InternetUser,
};

use crate::client::{
    components::{Modal, SelectField, TextField},
    util::options::{
        deputy_ministry_options, directorate_options, employment_type_options, status_options,
        violation_options,
    },
};

const TEXT_FIELDS: &[UserField] = &[
    UserField::Name,
    UserField::Username,
    UserField::Email,
    UserField::Phone,
    UserField::Position,
    UserField::DeviceLimit,
    UserField::DeviceType,
    UserField::MacAddress,
    UserField::Comment,
];

fn value_of(user: &InternetUser, field: UserField) -> String {
    match field {
        UserField::Name => user.name.clone(),
        UserField::Username => user.username.clone(),
        UserField::Email => user.email.clone(),
        UserField::Phone => user.phone.clone(),
        UserField::EmploymentType => user.employment_type.clone(),
        UserField::Directorate => user.directorate.clone(),
        UserField::DeputyMinistry => user.deputy_ministry.clone(),
        UserField::Position => user.position.clone(),
        UserField::DeviceLimit => user.device_limit.clone(),
        UserField::DeviceType => user.device_type.clone(),
        UserField::MacAddress => user.mac_address.clone(),
        UserField::Status => user.status.as_str().to_string(),
        UserField::Violations => user.violations.as_str().to_string(),
        UserField::Comment => user.comment.clone(),
    }
}

fn set_value(user: &mut InternetUser, field: UserField, value: String) {
    match field {
        UserField::Name => user.name = value,
        UserField::Username => user.username = value,
        UserField::Email => user.email = value,
        UserField::Phone => user.phone = value,
        UserField::EmploymentType => user.employment_type = value,
        UserField::Directorate => user.directorate = value,
        UserField::DeputyMinistry => {
            user.deputy_ministry = value;
            user.directorate.clear();
        }
        UserField::Position => user.position = value,
        UserField::DeviceLimit => user.device_limit = value,
        UserField::DeviceType => user.device_type = value,
        UserField::MacAddress => user.mac_address = value,
        UserField::Status => {
            if let Ok(status) = value.parse() {
                user.status = status;
            }
        }
        UserField::Violations => {
            if let Ok(level) = value.parse() {
                user.violations = level;
            }
        }
        UserField::Comment => user.comment = value,
    }
}

#[component]
pub fn UserDetailModal(
    user: InternetUser,
    directory: Signal<Directory>,
    on_close: EventHandler<()>,
) -> Element {
    let directory = directory.read();
    let rows: Vec<(&'static str, String)> = user
        .display_fields()
        .into_iter()
        .map(|(label, value)| {
            let value = match label {
                "Directorate" => directory.directorate_name(&value).to_string(),
                "Deputy Ministry" => directory.deputy_ministry_name(&value).to_string(),
                _ => value,
            };
            if value.trim().is_empty() {
                (label, "-".to_string())
            } else {
                (label, value)
            }
        })
        .collect();

    rsx!(
        Modal { title: "User Details", on_close,
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                for (label, value) in rows {
                    div { key: "{label}",
                        p { class: "text-xs opacity-70", "{label}" }
                        p { class: "font-medium break-all", "{value}" }
                    }
                }
            }
        }
    )
}

/// Edits a copy of `user`; `on_save` receives the edited copy.
#[component]
pub fn UserEditModal(
    user: InternetUser,
    directory: Signal<Directory>,
    on_close: EventHandler<()>,
    on_save: EventHandler<InternetUser>,
) -> Element {
    let mut draft = use_signal(|| user.clone());
    let current = draft.read().clone();

    let directory = directory.read();
    let employment_types = employment_type_options(&directory);
    let ministries = deputy_ministry_options(&directory);
    let directorates = directorate_options(&directory, &current.deputy_ministry);

    let selects = [
        (UserField::EmploymentType, employment_types, "Select employment type"),
        (UserField::DeputyMinistry, ministries, "Select deputy ministry"),
        (UserField::Directorate, directorates, "Select directorate"),
        (UserField::Status, status_options(), "Select status"),
        (UserField::Violations, violation_options(), "Select violations"),
    ];

    rsx!(
        Modal { title: "Edit User", on_close,
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for field in TEXT_FIELDS.iter().copied() {
                    TextField {
                        key: "{field.name()}",
                        label: field.label().to_string(),
                        value: value_of(&current, field),
                        oninput: move |value| set_value(&mut draft.write(), field, value),
                    }
                }
                for (field, options, placeholder) in selects {
                    SelectField {
                        key: "{field.name()}",
                        label: field.label().to_string(),
                        value: value_of(&current, field),
                        options,
                        placeholder: placeholder.to_string(),
                        onchange: move |value| set_value(&mut draft.write(), field, value),
                    }
                }
            }
            div { class: "modal-action",
                button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "Cancel" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_save.call(draft.read().clone()),
                    "Save Changes"
                }
            }
        }
    )
}
