pub(crate) mod route_reader;
