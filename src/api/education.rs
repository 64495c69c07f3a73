// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Course catalog and enrollments.

use super::ApiClient;
use crate::error::ClientResult;
use crate::models::{Course, EnrollResponse, Enrollment};

impl ApiClient {
    /// `GET /api/education/courses`
    pub async fn get_courses(&self) -> ClientResult<Vec<Course>> {
        let url = self.endpoint(&["api", "education", "courses"], &[])?;
        self.get_json(url).await
    }

    /// `POST /api/education/enroll/{id}?course_id=`
    pub async fn enroll_course(&self, user_id: &str, course_id: &str) -> ClientResult<EnrollResponse> {
        let url = self.endpoint(
            &["api", "education", "enroll", user_id],
            &[("course_id", course_id)],
        )?;
        self.post_empty(url).await
    }

    /// `GET /api/education/my-courses/{id}`
    pub async fn get_my_courses(&self, user_id: &str) -> ClientResult<Vec<Enrollment>> {
        let url = self.endpoint(&["api", "education", "my-courses", user_id], &[])?;
        self.get_json(url).await
    }
}
