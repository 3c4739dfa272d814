mod login;
mod logout;
mod sign_in;
mod subscribe;
mod user_id;
