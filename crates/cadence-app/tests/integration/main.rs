mod helpers;

mod healthcheck;
mod nextdate;
