pub mod participation_status;
