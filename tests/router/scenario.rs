use super::*;

/// Create a character, favorite it, list it, remove it and list again
#[tokio::test]
async fn character_favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/people",
            json!({"name": "Luke", "gender": "male", "species": "Human"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], 1);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/favorite/people/1",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/users/1/favorites"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites = body_json(resp).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
    assert_eq!(favorites[0]["type"], "person");
    assert_eq!(favorites[0]["details"]["name"], "Luke");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            "/favorite/people/1",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::GET, "/users/1/favorites"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect 400 "Usuario Id requerido" and no link when the body lacks user_id
#[tokio::test]
async fn add_favorite_without_user_id_creates_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .with_mock_planet("Tatooine")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/favorite/planet/1", json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario Id requerido"}));

    let resp = app
        .oneshot(empty_request(Method::GET, "/users/1/favorites"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect a partial update to leave omitted fields unchanged
#[tokio::test]
async fn partial_update_keeps_omitted_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_planet("Naboo")
        .build()
        .await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/planets/1",
            json!({"climate": "humid", "terrain": null}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::GET, "/planets/1"))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "name": "Naboo", "climate": "humid", "terrain": "grasslands, mountains"})
    );

    Ok(())
}

/// Expect a deleted character's favorite to drop out of the user's list
#[tokio::test]
async fn deleting_character_hides_its_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .with_mock_character("Obi-Wan")
        .with_mock_planet("Stewjon")
        .build()
        .await?;
    let app = app(&test);

    for uri in ["/favorite/people/1", "/favorite/planet/1"] {
        let resp = app
            .clone()
            .oneshot(json_request(Method::POST, uri, json!({"user_id": 1})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/people/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::GET, "/users/1/favorites"))
        .await
        .unwrap();
    let favorites = body_json(resp).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
    assert_eq!(favorites[0]["type"], "planet");

    Ok(())
}
