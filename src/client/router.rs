use dioxus::prelude::*;

use crate::client::{
    components::{AdminLayout, ProtectedLayout},
    routes::{
        AddUser, Directorates, Login, Ministries, NotFound, Register, Settings, SystemUsers,
        Users, Violations,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(ProtectedLayout)]

        #[route("/")]
        Users {},

        #[route("/users/new")]
        AddUser {},

        #[route("/deputy-ministries")]
        Ministries {},

        #[route("/directorates")]
        Directorates {},

        #[route("/violations")]
        Violations {},

        #[route("/settings")]
        Settings {},

        #[layout(AdminLayout)]

            #[route("/system-users")]
            SystemUsers {},

        #[end_layout]

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
