// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Course catalog and the user's enrollments.

use tracing::info;

use super::report_failure;
use crate::models::{ActionOutcome, Course, Enrollment};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct EducationScreen {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    loading: bool,
    error: Option<String>,
}

impl EducationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_id == course_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Courses always; enrollments only when someone is logged in.
    pub async fn load(&mut self, state: &AppState) {
        self.loading = true;
        let user = state.session.current_user().await;
        let result = match user {
            Some(user) => tokio::try_join!(
                state.api.get_courses(),
                state.api.get_my_courses(&user.user_id),
            ),
            None => state.api.get_courses().await.map(|c| (c, Vec::new())),
        };
        match result {
            Ok((courses, enrollments)) => {
                self.courses = courses;
                self.enrollments = enrollments;
                self.error = None;
            }
            Err(err) => self.error = Some(report_failure("education.load", &err)),
        }
        self.loading = false;
    }

    /// Enroll in `course_id` and reload. Citizens only.
    pub async fn enroll(&mut self, state: &AppState, course_id: &str) {
        let Some(user) = state.session.current_user().await else {
            return;
        };
        if !user.is_citizen {
            self.error = Some("Only Digital Citizens can enroll".to_string());
            return;
        }

        let failure = match state.api.enroll_course(&user.user_id, course_id).await {
            Ok(response) if response.succeeded() => {
                info!(course_id, "enrolled");
                None
            }
            Ok(response) => Some(
                response
                    .failure_reason()
                    .unwrap_or_else(|| "Enrollment failed".to_string()),
            ),
            Err(err) => {
                self.error = Some(report_failure("education.enroll", &err));
                return;
            }
        };
        self.load(state).await;
        if failure.is_some() {
            self.error = failure;
        }
    }
}
