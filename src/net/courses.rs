//! Course endpoints: streams, topics, and submissions.
//!
//! One wrapper per backend operation; pages call these directly.

use super::api;
use super::error::ApiError;
use super::types::{
    Stream, Submission, SubmissionPayload, Topic, TopicPayload, TopicWithSubmissions,
};

fn active_param(is_active: bool) -> [(&'static str, &'static str); 1] {
    [("is_active", if is_active { "true" } else { "false" })]
}

/// Streams the current user belongs to.
pub async fn my_streams(is_active: bool) -> Result<Vec<Stream>, ApiError> {
    api::get("/courses/streams/my/", &active_param(is_active)).await
}

/// Available topics within one of the student's streams.
pub async fn stream_topics(stream_id: i64) -> Result<Vec<Topic>, ApiError> {
    api::get(&format!("/courses/streams/{stream_id}/topics/"), &[]).await
}

/// Topics owned by the current teacher.
pub async fn my_topics(is_active: bool) -> Result<Vec<Topic>, ApiError> {
    api::get("/courses/topics/my/", &active_param(is_active)).await
}

pub async fn create_topic(topic: &TopicPayload) -> Result<Topic, ApiError> {
    api::post("/courses/topics/", topic).await
}

pub async fn update_topic(topic_id: i64, topic: &TopicPayload) -> Result<Topic, ApiError> {
    api::put(&format!("/courses/topics/{topic_id}/"), topic).await
}

pub async fn delete_topic(topic_id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/courses/topics/{topic_id}/delete/")).await
}

/// The current student's submissions, newest first.
pub async fn my_submissions() -> Result<Vec<Submission>, ApiError> {
    api::get("/courses/submissions/my/", &[]).await
}

pub async fn create_submission(submission: &SubmissionPayload) -> Result<Submission, ApiError> {
    api::post("/courses/submissions/", submission).await
}

pub async fn cancel_submission(submission_id: i64) -> Result<(), ApiError> {
    api::patch_empty(&format!("/courses/submissions/{submission_id}/")).await
}

/// The current teacher's topics that received submissions.
pub async fn received_submissions() -> Result<Vec<TopicWithSubmissions>, ApiError> {
    api::get("/courses/submissions/received/", &[]).await
}

pub async fn approve_submission(submission_id: i64) -> Result<Submission, ApiError> {
    api::post_empty_json(&format!("/courses/submissions/{submission_id}/approve/")).await
}

pub async fn reject_submission(submission_id: i64) -> Result<Submission, ApiError> {
    api::post_empty_json(&format!("/courses/submissions/{submission_id}/reject/")).await
}
