pub mod add_user;
pub mod directorates;
pub mod login;
pub mod ministries;
pub mod not_found;
pub mod register;
pub mod settings;
pub mod system_users;
pub mod users;
pub mod violations;

pub use add_user::AddUser;
pub use directorates::Directorates;
pub use login::Login;
pub use ministries::Ministries;
pub use not_found::NotFound;
pub use register::Register;
pub use settings::Settings;
pub use system_users::SystemUsers;
pub use users::Users;
pub use violations::Violations;
