mod index;
mod search;
