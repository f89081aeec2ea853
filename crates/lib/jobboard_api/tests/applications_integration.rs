//! Applying, reviewing and the job-deletion cascade.

mod common;

use axum::http::{Method, StatusCode};
use common::{TestApp, id_of};
use serde_json::{Value, json};

async fn my_applications(app: &TestApp, token: &str) -> Vec<Value> {
    let (status, body) = app.get("/api/jobseeker/applications", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    body["applications"].as_array().expect("applications").clone()
}

#[tokio::test]
async fn end_to_end_hiring_flow() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let job = app.create_job(&employer, "A", "B", "C", "D").await;
    assert_eq!(job["teaser"], "D...");
    let job_id = id_of(&job);

    let seeker = app.signup("j@x.com", "jobseeker").await;
    let (status, body) = app.apply(&seeker, job_id).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Application submitted");
    assert_eq!(body["application"]["status"], "pending");
    assert_eq!(body["application"]["jobId"], job_id);
    assert!(body["application"].get("coverLetter").is_none());
    assert!(body["application"]["createdAt"].is_string());
    let app_id = id_of(&body["application"]);

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/employer/applications/{app_id}"),
            Some(&employer),
            Some(json!({"status": "accepted"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Application status updated");
    assert_eq!(body["application"]["status"], "accepted");
    assert_eq!(body["application"]["applicantEmail"], "j@x.com");

    let mine = my_applications(&app, &seeker).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["status"], "accepted");
    assert_eq!(mine[0]["job"]["title"], "A");
    assert_eq!(mine[0]["job"]["location"], "C");

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/employer/jobs/{job_id}"),
            Some(&employer),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The cascade removes the application along with the job.
    assert!(my_applications(&app, &seeker).await.is_empty());
    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/employer/applications/{app_id}"),
            Some(&employer),
            Some(json!({"status": "reviewed"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn applying_twice_conflicts() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let job_id = id_of(&app.create_job(&employer, "A", "B", "C", "D").await);
    let seeker = app.signup("j@x.com", "jobseeker").await;

    assert_eq!(app.apply(&seeker, job_id).await.0, StatusCode::CREATED);
    let (status, body) = app.apply(&seeker, job_id).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "You have already applied for this job");
    assert_eq!(my_applications(&app, &seeker).await.len(), 1);
}

#[tokio::test]
async fn apply_with_cover_letter() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let job_id = id_of(&app.create_job(&employer, "A", "B", "C", "D").await);
    let seeker = app.signup("j@x.com", "jobseeker").await;

    let (status, body) = app
        .send(
            Method::POST,
            &format!("/api/jobs/{job_id}/apply"),
            Some(&seeker),
            Some(json!({"coverLetter": "I am keen"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["application"]["coverLetter"], "I am keen");
}

#[tokio::test]
async fn apply_requires_jobseeker_and_existing_job() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let job_id = id_of(&app.create_job(&employer, "A", "B", "C", "D").await);
    let seeker = app.signup("j@x.com", "jobseeker").await;

    let (status, body) = app.apply(&employer, job_id).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only job seekers can apply for jobs");

    let (status, _) = app.apply(&seeker, 999).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::POST, "/api/jobs/1/apply", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn employer_reviews_applications_for_own_job() {
    let app = TestApp::new();
    let owner = app.signup("e@x.com", "employer").await;
    let other = app.signup("o@x.com", "employer").await;
    let job = app.create_job(&owner, "A", "B", "C", "D").await;
    let job_id = id_of(&job);

    let seeker = app.signup("j@x.com", "jobseeker").await;
    app.send(
        Method::PUT,
        "/api/profile",
        Some(&seeker),
        Some(json!({"fullName": "Jo Seeker", "visibility": "private"})),
    )
    .await;
    app.apply(&seeker, job_id).await;

    let uri = format!("/api/employer/jobs/{job_id}/applications");
    let (status, body) = app.get(&uri, Some(&owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["job"], json!({"id": job_id, "title": "A", "company": "B"}));
    let apps = body["applications"].as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0]["applicantEmail"], "j@x.com");
    // Visibility is stored but not enforced here.
    assert_eq!(apps[0]["applicantName"], "Jo Seeker");
    assert_eq!(apps[0]["status"], "pending");

    assert_eq!(app.get(&uri, Some(&other)).await.0, StatusCode::FORBIDDEN);
    assert_eq!(app.get(&uri, Some(&seeker)).await.0, StatusCode::FORBIDDEN);
    assert_eq!(
        app.get("/api/employer/jobs/999/applications", Some(&owner))
            .await
            .0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn status_update_accepts_the_four_values_only() {
    let app = TestApp::new();
    let owner = app.signup("e@x.com", "employer").await;
    let other = app.signup("o@x.com", "employer").await;
    let job_id = id_of(&app.create_job(&owner, "A", "B", "C", "D").await);
    let seeker = app.signup("j@x.com", "jobseeker").await;
    let (_, body) = app.apply(&seeker, job_id).await;
    let uri = format!("/api/employer/applications/{}", id_of(&body["application"]));

    for status in ["reviewed", "rejected", "accepted", "pending", "pending"] {
        let (code, body) = app
            .send(Method::PATCH, &uri, Some(&owner), Some(json!({"status": status})))
            .await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body["application"]["status"], status);
    }

    let (code, body) = app
        .send(Method::PATCH, &uri, Some(&owner), Some(json!({"status": "hired"})))
        .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "status must be one of 'pending', 'reviewed', 'rejected', 'accepted'"
    );

    let (code, _) = app
        .send(Method::PATCH, &uri, Some(&owner), Some(json!({})))
        .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    let (code, _) = app
        .send(Method::PATCH, &uri, Some(&other), Some(json!({"status": "accepted"})))
        .await;
    assert_eq!(code, StatusCode::FORBIDDEN);

    let (code, _) = app
        .send(Method::PATCH, &uri, Some(&seeker), Some(json!({"status": "accepted"})))
        .await;
    assert_eq!(code, StatusCode::FORBIDDEN);

    let (code, body) = app
        .send(
            Method::PATCH,
            "/api/employer/applications/999",
            Some(&owner),
            Some(json!({"status": "accepted"})),
        )
        .await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Application not found");
}

#[tokio::test]
async fn deleting_a_job_leaves_other_applications_alone() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let doomed = id_of(&app.create_job(&employer, "Doomed", "B", "C", "D").await);
    let kept = id_of(&app.create_job(&employer, "Kept", "B", "C", "D").await);
    let seeker = app.signup("j@x.com", "jobseeker").await;
    app.apply(&seeker, doomed).await;
    app.apply(&seeker, kept).await;

    app.send(
        Method::DELETE,
        &format!("/api/employer/jobs/{doomed}"),
        Some(&employer),
        None,
    )
    .await;

    let mine = my_applications(&app, &seeker).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["jobId"], kept);
    assert_eq!(mine[0]["job"]["title"], "Kept");
}

#[tokio::test]
async fn employer_cannot_list_jobseeker_applications() {
    let app = TestApp::new();
    let employer = app.signup("e@x.com", "employer").await;
    let (status, _) = app.get("/api/jobseeker/applications", Some(&employer)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
