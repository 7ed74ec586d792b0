mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn cors_reflects_configured_origins() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Development config allows the local portal dev servers
    let res = client
        .get(format!("{}/health", server.base_url))
        .header("Origin", "http://localhost:5173")
        .send()
        .await?;
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );

    // Unlisted origins get no CORS grant
    let res = client
        .get(format!("{}/health", server.base_url))
        .header("Origin", "http://evil.example.com")
        .send()
        .await?;
    assert!(res.headers().get("access-control-allow-origin").is_none());
    Ok(())
}

#[tokio::test]
async fn login_issues_token_with_role() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": "instructor", "password": "instructor123" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["data"]["user"]["role"], "instructor");
    assert!(body["data"]["expires_in"].as_u64().unwrap() > 0);
    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Wrong password and unknown user look the same to the caller
    for creds in [("admin", "wrong"), ("ghost", "admin123")] {
        let res = client
            .post(format!("{}/auth/login", server.base_url))
            .json(&serde_json::json!({ "username": creds.0, "password": creds.1 }))
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
    Ok(())
}

#[tokio::test]
async fn login_requires_credentials() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": "", "password": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn whoami_reports_derived_flags() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::login(&server.base_url, "instructor", "instructor123").await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let data = &body["data"];
    assert_eq!(data["role"], "instructor");
    assert_eq!(data["flags"]["is_instructor"], true);
    assert_eq!(data["flags"]["is_admin"], false);
    assert_eq!(data["flags"]["is_student"], false);
    assert_eq!(data["flags"]["is_authenticated"], true);
    assert!(data["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p == "read.courses"));
    Ok(())
}

#[tokio::test]
async fn protected_api_requires_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .bearer_auth("not.a.token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn permission_checks_match_the_held_set() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::login(&server.base_url, "admin", "admin123").await?;
    let client = reqwest::Client::new();

    let check = |query: &str| {
        client
            .get(format!(
                "{}/api/permissions/check?{}",
                server.base_url, query
            ))
            .bearer_auth(&token)
            .send()
    };

    let body = check("capability=manage.users")
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["data"]["allowed"], true);

    let body = check("capability=delete.courses")
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["data"]["allowed"], false);

    let body = check("any=delete.courses,manage.users")
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["data"]["allowed"], true);

    let body = check("all=delete.courses,manage.users")
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["data"]["allowed"], false);

    // Exactly one selector is required
    let res = check("capability=manage.users&any=manage.users").await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn logout_acknowledges() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::login(&server.base_url, "student", "student123").await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/api/auth/session", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["logged_out"], true);
    Ok(())
}
