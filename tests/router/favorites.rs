use axum::{body::Body, http::Request};

use super::*;

/// Expect 400 "Cuerpo de la solicitud inválido" for a body that is not JSON
#[tokio::test]
async fn rejects_malformed_json_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .build()
        .await?;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/favorite/people/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"user_id\": "))
        .unwrap();
    let resp = app(&test).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Cuerpo de la solicitud inválido"})
    );

    Ok(())
}

/// Expect 400 "Usuario Id requerido" for a request without a body
#[tokio::test]
async fn remove_favorite_without_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::DELETE, "/favorite/planet/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario Id requerido"}));

    Ok(())
}

/// Expect 400 "El personaje ya está en favoritos" for a repeated add
#[tokio::test]
async fn rejects_duplicate_character_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .with_mock_character("Leia")
        .build()
        .await?;
    let app = app(&test);

    let first = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/favorite/people/1",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request(
            Method::POST,
            "/favorite/people/1",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(second).await,
        json!({"msg": "El personaje ya está en favoritos"})
    );

    Ok(())
}

/// Expect 404 "El planeta no está en favoritos" when removing a planet never added
#[tokio::test]
async fn remove_missing_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::DELETE,
            "/favorite/planet/1",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "El planeta no está en favoritos"})
    );

    Ok(())
}
