//! One thin page component per route.

pub mod change_password;
pub mod home;
pub mod login;
pub mod my_streams;
pub mod my_submissions;
pub mod my_topics;
pub mod received_submissions;
pub mod stream_topics;
pub mod submission_create;
pub mod topic_create;
pub mod topic_edit;
