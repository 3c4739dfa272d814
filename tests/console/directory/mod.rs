mod directorates_matching;
mod load;
