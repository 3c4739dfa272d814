use dioxus::prelude::*;
use netroster::console::{directory::Directory, filter::UserFilter};

use crate::client::{
    components::{SelectField, TextField},
    util::options::{deputy_ministry_options, matching_directorate_options, status_options},
};

#[component]
pub fn UserFilters(filter: Signal<UserFilter>, directory: Signal<Directory>) -> Element {
    let mut filter = filter;
    let mut directorate_term = use_signal(String::new);
    let current = filter.read().clone();
    let ministries = deputy_ministry_options(&directory.read());
    let directorates = matching_directorate_options(
        &directory.read(),
        &current.deputy_ministry,
        &directorate_term.read(),
        &current.directorate,
    );
    let status = current.status.map(|status| status.as_str().to_string()).unwrap_or_default();

    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-5 gap-4",
            TextField {
                label: "Search",
                value: current.search.clone(),
                oninput: move |term| filter.write().search = term,
            }
            SelectField {
                label: "Deputy Ministry",
                value: current.deputy_ministry.clone(),
                options: ministries,
                placeholder: "All",
                onchange: move |id| {
                    let mut filter = filter.write();
                    filter.deputy_ministry = id;
                    filter.directorate.clear();
                },
            }
            TextField {
                label: "Find Directorate",
                value: directorate_term(),
                oninput: move |term| directorate_term.set(term),
            }
            SelectField {
                label: "Directorate",
                value: current.directorate.clone(),
                options: directorates,
                placeholder: "All",
                onchange: move |id| filter.write().directorate = id,
            }
            SelectField {
                label: "Status",
                value: status,
                options: status_options(),
                placeholder: "All",
                onchange: move |value: String| filter.write().set_status(&value),
            }
        }
    )
}
