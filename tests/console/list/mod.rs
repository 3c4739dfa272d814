mod delete;
mod load;
mod update;
