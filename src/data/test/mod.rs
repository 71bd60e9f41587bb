mod participation;
