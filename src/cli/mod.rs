pub mod command_handlers;
pub mod dry_run;
pub mod main_types;
