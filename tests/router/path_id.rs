use super::*;

/// Expect 404 "Personaje no encontrado" for an ID beyond the stored ID range
#[tokio::test]
async fn character_id_out_of_range_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/people/99999999999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Personaje no encontrado"})
    );

    Ok(())
}

/// Expect 404 "Planeta no encontrado" for an ID beyond i32 and for one beyond i64
#[tokio::test]
async fn planet_id_out_of_range_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    for uri in [
        "/planets/3000000000",
        "/planets/123456789012345678901234567890",
    ] {
        let resp = app(&test)
            .oneshot(empty_request(Method::DELETE, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body_json(resp).await, json!({"msg": "Planeta no encontrado"}));
    }

    Ok(())
}

/// Expect 404 "Usuario no encontrado" for a negative user ID beyond the stored range
#[tokio::test]
async fn user_id_out_of_range_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/users/-5000000000/favorites"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"msg": "Usuario no encontrado"}));

    Ok(())
}

/// Expect 400 "Parámetro de ruta inválido" in a JSON body for a non-numeric ID
#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    for uri in ["/people/abc", "/planets/1.5", "/users/luke"] {
        let resp = app(&test)
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body_json(resp).await,
            json!({"msg": "Parámetro de ruta inválido"})
        );
    }

    Ok(())
}

/// Expect a non-numeric favorite target to be rejected before the body is read
#[tokio::test]
async fn non_numeric_favorite_target_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_mock_user("luke")
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/favorite/planet/tatooine",
            json!({"user_id": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Parámetro de ruta inválido"})
    );

    Ok(())
}
