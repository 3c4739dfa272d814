mod for_user;
